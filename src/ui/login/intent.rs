use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    NextField,
    /// Enter pressed. Blocked while a field is empty or a request is in flight.
    Submit,
    /// The login request failed; `message` is already user-facing.
    Failed { message: String },
}

impl Intent for LoginIntent {}
