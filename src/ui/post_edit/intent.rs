use crate::api::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostEditIntent {
    Loaded { post: Post },
    LoadFailed { message: String },
    Input(char),
    /// Enter: newline in the content field, next field in the title.
    Newline,
    Backspace,
    NextField,
    Submit,
    SaveFailed { message: String },
}

impl Intent for PostEditIntent {}
