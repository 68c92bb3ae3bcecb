//! Reducer for the post detail screen.
//!
//! Delete is a two-step flow: `Idle → Confirming → Deleting`. Only the
//! `Confirming → Deleting` edge lets the app issue a request, so a post is
//! deleted at most once per confirmation.

use crate::ui::mvi::Reducer;

use super::intent::PostDetailIntent;
use super::state::{DeleteStatus, PostDetailState};

pub struct PostDetailReducer;

impl Reducer for PostDetailReducer {
    type State = PostDetailState;
    type Intent = PostDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostDetailIntent::Loaded { post } => PostDetailState::Ready {
                post,
                delete: DeleteStatus::Idle,
                alert: None,
            },
            PostDetailIntent::Failed { message } => PostDetailState::Error { message },
            PostDetailIntent::RequestDelete { viewer } => {
                if !state.is_authored_by(viewer.as_ref()) {
                    return state;
                }
                match state {
                    PostDetailState::Ready {
                        post,
                        delete: DeleteStatus::Idle,
                        ..
                    } => PostDetailState::Ready {
                        post,
                        delete: DeleteStatus::Confirming,
                        alert: None,
                    },
                    other => other,
                }
            }
            PostDetailIntent::CancelDelete => match state {
                PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Confirming,
                    alert,
                } => PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Idle,
                    alert,
                },
                other => other,
            },
            PostDetailIntent::ConfirmDelete => match state {
                PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Confirming,
                    alert,
                } => PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Deleting,
                    alert,
                },
                other => other,
            },
            PostDetailIntent::DeleteFailed { message } => match state {
                PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Deleting,
                    ..
                } => PostDetailState::Ready {
                    post,
                    delete: DeleteStatus::Idle,
                    alert: Some(message),
                },
                other => other,
            },
        }
    }
}
