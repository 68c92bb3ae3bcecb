//! State for the login form.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// `Idle → Submitting → Idle (+error)`; success leaves the screen entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub phase: LoginPhase,
    /// Field that blocked the last submit because it was empty.
    pub missing: Option<LoginField>,
    /// Message from the last failed login.
    pub error: Option<String>,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn field(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    pub(super) fn field_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// First empty field, in form order.
    pub fn first_empty_field(&self) -> Option<LoginField> {
        [LoginField::Username, LoginField::Password]
            .into_iter()
            .find(|field| self.field(*field).is_empty())
    }
}
