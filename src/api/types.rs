use std::fmt;

use serde::{Deserialize, Serialize};

pub type PostId = i64;

/// User primary key. Some deployments use integers, others UUID strings.
///
/// Ids compare by their JSON value: `3` and `"3"` are different users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Int(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// A user as reported by the API (author of a post, or the current user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Timestamp as sent by the server; formatted for display by the views.
    pub created_at: String,
    pub author: User,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

/// Fields sent when editing a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
}

/// The post list arrives either as a bare array or as a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PostListBody {
    Plain(Vec<Post>),
    Paged { items: Vec<Post> },
}

impl PostListBody {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            PostListBody::Plain(posts) => posts,
            PostListBody::Paged { items } => items,
        }
    }
}
