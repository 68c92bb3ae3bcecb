//! State for the post detail screen.

use crate::api::{Post, UserId};
use crate::ui::mvi::UiState;

/// Progress of a delete on a loaded post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStatus {
    #[default]
    Idle,
    /// Waiting for the user to answer the confirmation prompt.
    Confirming,
    /// Delete request in flight.
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostDetailState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready {
        post: Post,
        delete: DeleteStatus,
        /// Message from the last failed delete.
        alert: Option<String>,
    },
}

impl UiState for PostDetailState {}

impl PostDetailState {
    pub fn post(&self) -> Option<&Post> {
        match self {
            Self::Ready { post, .. } => Some(post),
            _ => None,
        }
    }

    /// Whether `viewer` wrote the loaded post. Gates edit/delete controls
    /// only; the server enforces ownership.
    ///
    /// Takes the viewer on every call so a sign-out hides the controls at
    /// once.
    pub fn is_authored_by(&self, viewer: Option<&UserId>) -> bool {
        match (self, viewer) {
            (Self::Ready { post, .. }, Some(viewer)) => post.author.id == *viewer,
            _ => false,
        }
    }

    pub fn delete_status(&self) -> Option<DeleteStatus> {
        match self {
            Self::Ready { delete, .. } => Some(*delete),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
