use crate::api::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostListIntent {
    Loaded { posts: Vec<Post> },
    Failed { message: String },
    MoveUp,
    MoveDown,
}

impl Intent for PostListIntent {}
