//! Authentication session: token, derived identity, persistence.

mod context;
mod store;
mod token;

pub use context::AuthContext;
pub use store::{SessionError, SessionStore};
pub use token::SessionToken;

use crate::api::User;

/// The client's record of its authentication token and current user.
///
/// `user` is `None` when the token is known but the identity has not been
/// fetched yet (or could not be).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: SessionToken,
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: SessionToken) -> Self {
        Self { token, user: None }
    }
}
