//! Screen addresses.

use std::fmt;

use thiserror::Error;

use crate::api::PostId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Invalid post id '{0}'")]
    InvalidId(String),
}

/// Where the app is.
///
/// `Post` keeps the identifier as typed so the detail screen can reject
/// malformed ids itself, without a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Post(String),
    EditPost(PostId),
}

impl Route {
    pub fn post(id: PostId) -> Self {
        Route::Post(id.to_string())
    }

    /// Parse a path such as `/`, `/login`, `/posts/12` or `/posts/12/edit`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["posts", id] => Some(Route::Post((*id).to_string())),
            ["posts", id, "edit"] => id.parse().ok().map(Route::EditPost),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/login"),
            Route::Home => write!(f, "/"),
            Route::Post(id) => write!(f, "/posts/{id}"),
            Route::EditPost(id) => write!(f, "/posts/{id}/edit"),
        }
    }
}

/// Parse a post identifier taken from a route.
pub fn parse_post_id(raw: &str) -> Result<PostId, ViewError> {
    raw.trim()
        .parse()
        .map_err(|_| ViewError::InvalidId(raw.to_string()))
}
