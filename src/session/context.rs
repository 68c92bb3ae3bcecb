//! Process-wide authentication state.
//!
//! `AuthContext` is the only owner of the current [`Session`]. Screens read
//! from it; only login, logout and auth failures mutate it, and every
//! mutation is mirrored to the [`SessionStore`].

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use super::store::SessionStore;
use super::token::SessionToken;
use super::Session;
use crate::api::{ApiClient, ApiError, User, UserId};

/// Shared, cloneable handle to the current session.
///
/// Uses a read-write lock: the request worker reads the token for every call
/// while mutations are confined to the UI thread.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<RwLock<Option<Session>>>,
    store: Option<Arc<SessionStore>>,
}

impl AuthContext {
    /// Create an unauthenticated context backed by `store`.
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            store: Some(Arc::new(store)),
        }
    }

    /// Create an in-memory context that never touches disk.
    pub fn detached() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            store: None,
        }
    }

    /// Create a context and restore the token saved by a previous run.
    ///
    /// An unreadable session file yields an unauthenticated context.
    pub fn restore(store: SessionStore) -> Self {
        let restored = match store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to restore session");
                None
            }
        };
        let context = Self::new(store);
        if let Some(token) = restored {
            info!("restored stored session");
            *context.inner.write() = Some(Session::new(token));
        }
        context
    }

    /// Re-check a restored token against `GET /api/auth/me/`.
    ///
    /// Success fills in the user. A 401 clears the session. Any other
    /// failure keeps the token with an unknown user.
    pub async fn revalidate(&self, client: &ApiClient) {
        if !self.is_authenticated() {
            return;
        }
        match client.current_user().await {
            Ok(user) => {
                info!(user = %user.username, "session revalidated");
                self.set_user(user);
            }
            Err(e) if e.is_unauthorized() => {
                info!("stored session rejected by server");
                self.clear_session();
            }
            Err(e) => warn!(error = %e, "could not revalidate session"),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.inner.read().as_ref().map(|session| session.token.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner
            .read()
            .as_ref()
            .and_then(|session| session.user.clone())
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.inner
            .read()
            .as_ref()
            .and_then(|session| session.user.as_ref().map(|user| user.id.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Replace the session and persist its token.
    pub fn set_session(&self, session: Session) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&session.token) {
                warn!(error = %e, "failed to persist session");
            }
        }
        *self.inner.write() = Some(session);
    }

    /// Drop the session and remove the persisted token.
    pub fn clear_session(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                warn!(error = %e, "failed to remove stored session");
            }
        }
        *self.inner.write() = None;
    }

    /// Clear the session when the server rejected its token.
    ///
    /// Returns true if a session was cleared.
    pub fn handle_api_error(&self, err: &ApiError) -> bool {
        if err.is_unauthorized() && self.is_authenticated() {
            warn!("server rejected session token, signing out");
            self.clear_session();
            return true;
        }
        false
    }

    fn set_user(&self, user: User) {
        if let Some(session) = self.inner.write().as_mut() {
            session.user = Some(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(id: i64) -> User {
        User {
            id: UserId::from(id),
            username: format!("user{id}"),
        }
    }

    #[test]
    fn test_detached_starts_unauthenticated() {
        let auth = AuthContext::detached();
        assert!(!auth.is_authenticated());
        assert!(auth.token().is_none());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_set_session_persists_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let auth = AuthContext::new(SessionStore::new(path.clone()));

        auth.set_session(Session {
            token: SessionToken::new("tok"),
            user: Some(user(4)),
        });

        assert_eq!(auth.current_user_id(), Some(UserId::from(4)));
        let stored = SessionStore::new(path).load().unwrap();
        assert_eq!(stored, Some(SessionToken::new("tok")));
    }

    #[test]
    fn test_clear_session_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let auth = AuthContext::new(SessionStore::new(path.clone()));
        auth.set_session(Session::new(SessionToken::new("tok")));

        auth.clear_session();

        assert!(!auth.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn test_restore_reads_previous_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        SessionStore::new(path.clone())
            .save(&SessionToken::new("saved"))
            .unwrap();

        let auth = AuthContext::restore(SessionStore::new(path));

        assert!(auth.is_authenticated());
        assert_eq!(auth.token(), Some(SessionToken::new("saved")));
        // Identity is unknown until revalidated
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_restore_corrupt_file_is_unauthenticated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{").unwrap();

        let auth = AuthContext::restore(SessionStore::new(path));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_handle_api_error_clears_only_on_401() {
        let auth = AuthContext::detached();
        auth.set_session(Session::new(SessionToken::new("tok")));

        let forbidden = ApiError::Http {
            status: 403,
            detail: None,
        };
        assert!(!auth.handle_api_error(&forbidden));
        assert!(auth.is_authenticated());

        let unauthorized = ApiError::Http {
            status: 401,
            detail: None,
        };
        assert!(auth.handle_api_error(&unauthorized));
        assert!(!auth.is_authenticated());
        assert!(!auth.handle_api_error(&unauthorized));
    }
}
