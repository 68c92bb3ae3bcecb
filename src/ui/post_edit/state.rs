use crate::api::{PostId, PostUpdate, UserId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditForm {
    pub post_id: PostId,
    pub author_id: Option<UserId>,
    pub title: String,
    pub content: String,
    pub focus: EditField,
    pub saving: bool,
    pub title_missing: bool,
    pub error: Option<String>,
}

impl EditForm {
    pub fn update(&self) -> PostUpdate {
        PostUpdate {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    pub(super) fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditField::Title => &mut self.title,
            EditField::Content => &mut self.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostEditState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready(EditForm),
}

impl UiState for PostEditState {}

impl PostEditState {
    pub fn form(&self) -> Option<&EditForm> {
        match self {
            Self::Ready(form) => Some(form),
            _ => None,
        }
    }

    /// Whether `viewer` wrote the post being edited.
    pub fn is_authored_by(&self, viewer: Option<&UserId>) -> bool {
        match (self.form(), viewer) {
            (Some(form), Some(viewer)) => form.author_id.as_ref() == Some(viewer),
            _ => false,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.form().is_some_and(|form| form.saving)
    }
}
