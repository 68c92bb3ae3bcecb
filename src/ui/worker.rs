//! Runs API calls for the UI loop.
//!
//! Screens never await. They hand an [`ApiRequest`] to the worker, which
//! executes it on the tokio runtime and posts an [`ApiEvent`] back into the
//! UI event channel. Each request is tagged with the view generation that
//! issued it so the app can drop outcomes for screens that are gone.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{ApiClient, ApiError, Post, PostId, PostUpdate};
use crate::session::{Session, SessionToken};
use crate::ui::events::AppEvent;

const REQUEST_QUEUE_DEPTH: usize = 32;

#[derive(Clone)]
pub enum ApiCommand {
    Login { username: String, password: String },
    ListPosts,
    GetPost { id: PostId },
    UpdatePost { id: PostId, update: PostUpdate },
    DeletePost { id: PostId },
}

impl std::fmt::Debug for ApiCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiCommand::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"••••••••")
                .finish(),
            ApiCommand::ListPosts => write!(f, "ListPosts"),
            ApiCommand::GetPost { id } => f.debug_struct("GetPost").field("id", id).finish(),
            ApiCommand::UpdatePost { id, update } => f
                .debug_struct("UpdatePost")
                .field("id", id)
                .field("update", update)
                .finish(),
            ApiCommand::DeletePost { id } => f.debug_struct("DeletePost").field("id", id).finish(),
        }
    }
}

impl ApiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ApiCommand::Login { .. } => "login",
            ApiCommand::ListPosts => "list_posts",
            ApiCommand::GetPost { .. } => "get_post",
            ApiCommand::UpdatePost { .. } => "update_post",
            ApiCommand::DeletePost { .. } => "delete_post",
        }
    }
}

#[derive(Debug)]
pub struct ApiRequest {
    pub generation: u64,
    pub command: ApiCommand,
}

#[derive(Debug)]
pub enum ApiOutcome {
    LoggedIn(Result<Session, ApiError>),
    Posts(Result<Vec<Post>, ApiError>),
    Post(Result<Post, ApiError>),
    Updated(Result<Post, ApiError>),
    Deleted(Result<(), ApiError>),
}

impl ApiOutcome {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiOutcome::LoggedIn(Err(e))
            | ApiOutcome::Posts(Err(e))
            | ApiOutcome::Post(Err(e))
            | ApiOutcome::Updated(Err(e))
            | ApiOutcome::Deleted(Err(e)) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ApiEvent {
    pub generation: u64,
    pub outcome: ApiOutcome,
}

pub type RequestSender = mpsc::Sender<ApiRequest>;

/// Start the dispatch loop on `handle` and return the request queue.
///
/// Requests run concurrently; outcomes arrive in completion order.
pub fn spawn_worker(
    handle: &Handle,
    client: ApiClient,
    events: std_mpsc::Sender<AppEvent>,
) -> RequestSender {
    let (tx, mut rx) = mpsc::channel::<ApiRequest>(REQUEST_QUEUE_DEPTH);

    let task_handle = handle.clone();
    handle.spawn(async move {
        while let Some(request) = rx.recv().await {
            let client = client.clone();
            let events = events.clone();
            task_handle.spawn(async move {
                debug!(
                    command = request.command.name(),
                    generation = request.generation,
                    "executing request"
                );
                let outcome = execute(&client, request.command).await;
                let _ = events.send(AppEvent::Api(ApiEvent {
                    generation: request.generation,
                    outcome,
                }));
            });
        }
        debug!("request queue closed");
    });

    tx
}

/// Perform one command against the API.
pub async fn execute(client: &ApiClient, command: ApiCommand) -> ApiOutcome {
    match command {
        ApiCommand::Login { username, password } => {
            ApiOutcome::LoggedIn(login(client, &username, &password).await)
        }
        ApiCommand::ListPosts => ApiOutcome::Posts(client.list_posts().await),
        ApiCommand::GetPost { id } => ApiOutcome::Post(client.get_post(id).await),
        ApiCommand::UpdatePost { id, update } => {
            ApiOutcome::Updated(client.update_post(id, &update).await)
        }
        ApiCommand::DeletePost { id } => ApiOutcome::Deleted(client.delete_post(id).await),
    }
}

/// Log in, then look up who the token belongs to.
///
/// The identity lookup is best effort: a token without a known user still
/// counts as signed in.
async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Session, ApiError> {
    let response = client.login(username, password).await?;
    let token = SessionToken::new(response.token);
    let user = match client.fetch_user(&token).await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "logged in but could not fetch current user");
            None
        }
    };
    Ok(Session { token, user })
}
