use crate::api::{Post, UserId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostDetailIntent {
    Loaded { post: Post },
    Failed { message: String },
    /// Open the delete prompt. `viewer` is the signed-in user's id, if known.
    RequestDelete { viewer: Option<UserId> },
    CancelDelete,
    ConfirmDelete,
    DeleteFailed { message: String },
}

impl Intent for PostDetailIntent {}
