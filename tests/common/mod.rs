//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use inkpost::api::{ApiClient, Post, User, UserId};
use inkpost::config::ApiConfig;
use inkpost::session::{AuthContext, Session, SessionStore, SessionToken};
use inkpost::ui::app::App;
use inkpost::ui::events::AppEvent;
use inkpost::ui::worker::{spawn_worker, ApiEvent};
use inkpost::ui::Language;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` as a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
    }
}

pub fn client(base_url: &str, auth: AuthContext) -> ApiClient {
    ApiClient::new(&api_config(base_url), auth).expect("Failed to build client")
}

pub fn signed_in(token: &str, user_id: i64) -> AuthContext {
    let auth = AuthContext::detached();
    auth.set_session(Session {
        token: SessionToken::new(token),
        user: Some(User {
            id: UserId::from(user_id),
            username: format!("user{user_id}"),
        }),
    });
    auth
}

/// Auth context persisted to a session file inside `dir`.
pub fn stored_auth(dir: &TempDir) -> (AuthContext, PathBuf) {
    let path = dir.path().join("session.json");
    (AuthContext::new(SessionStore::new(path.clone())), path)
}

pub fn post(id: i64, author_id: i64, content: &str) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        content: content.to_string(),
        created_at: "2024-05-01T09:30:00Z".to_string(),
        author: User {
            id: UserId::from(author_id),
            username: format!("user{author_id}"),
        },
    }
}

pub fn post_json(id: i64, author_id: i64, content: &str) -> String {
    serde_json::to_string(&post(id, author_id, content)).unwrap()
}

// -- App helpers --------------------------------------------------------------

/// App wired to a real request worker on the current tokio runtime.
pub struct AppHarness {
    pub app: App,
    events: mpsc::Receiver<AppEvent>,
}

impl AppHarness {
    pub fn new(base_url: &str, auth: AuthContext) -> Self {
        let (tx, rx) = mpsc::channel();
        let requests = spawn_worker(
            &tokio::runtime::Handle::current(),
            client(base_url, auth.clone()),
            tx,
        );
        let mut app = App::new(Language::En, auth);
        app.attach_requests(requests);
        Self { app, events: rx }
    }

    /// Wait for the next API outcome without blocking the runtime.
    pub async fn next_api_event(&self) -> ApiEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match self.events.try_recv() {
                Ok(AppEvent::Api(event)) => return event,
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => {
                    assert!(Instant::now() < deadline, "timed out waiting for API outcome");
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                Err(mpsc::TryRecvError::Disconnected) => panic!("event channel closed"),
            }
        }
    }

    /// Deliver the next API outcome to the app.
    pub async fn pump(&mut self) {
        let event = self.next_api_event().await;
        self.app.on_api_event(event);
    }
}
