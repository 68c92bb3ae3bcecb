//! State for the home screen post list.

use crate::api::Post;
use crate::ui::mvi::UiState;

/// Number of content characters shown on a preview card.
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PostListState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready {
        posts: Vec<Post>,
        selected: usize,
    },
}

impl UiState for PostListState {}

impl PostListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            Self::Ready { posts, .. } => posts,
            _ => &[],
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        match self {
            Self::Ready { posts, selected } => posts.get(*selected),
            _ => None,
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `content`, with `...` appended iff
/// anything was cut.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
