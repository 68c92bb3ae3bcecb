use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

use crate::api::{ApiError, PostId};
use crate::session::AuthContext;
use crate::ui::i18n::{Language, Msg};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::post_detail::{DeleteStatus, PostDetailIntent, PostDetailReducer, PostDetailState};
use crate::ui::post_edit::{PostEditIntent, PostEditReducer, PostEditState};
use crate::ui::posts::{PostListIntent, PostListReducer, PostListState};
use crate::ui::route::{parse_post_id, Route};
use crate::ui::worker::{ApiCommand, ApiEvent, ApiOutcome, ApiRequest, RequestSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    language: Language,
    auth: AuthContext,
    route: Route,
    /// Bumped on every navigation. Outcomes tagged with an older value are
    /// dropped.
    generation: u64,
    requests: Option<RequestSender>,
    last_request_error: Option<String>,
    /// One-line message shown in the header until the next navigation.
    notice: Option<String>,
    login: LoginState,
    posts: PostListState,
    detail: PostDetailState,
    edit: PostEditState,
}

impl App {
    pub fn new(language: Language, auth: AuthContext) -> Self {
        Self {
            should_quit: false,
            language,
            auth,
            route: Route::Home,
            generation: 0,
            requests: None,
            last_request_error: None,
            notice: None,
            login: LoginState::default(),
            posts: PostListState::default(),
            detail: PostDetailState::default(),
            edit: PostEditState::default(),
        }
    }

    pub fn attach_requests(&mut self, sender: RequestSender) {
        self.requests = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn last_request_error(&self) -> Option<&str> {
        self.last_request_error.as_deref()
    }

    pub fn login_state(&self) -> &LoginState {
        &self.login
    }

    pub fn post_list(&self) -> &PostListState {
        &self.posts
    }

    pub fn post_detail(&self) -> &PostDetailState {
        &self.detail
    }

    pub fn post_edit(&self) -> &PostEditState {
        &self.edit
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Mount the screen for `route` and issue its initial request.
    pub fn navigate(&mut self, route: Route) {
        self.generation += 1;
        self.notice = None;
        info!(route = %route, generation = self.generation, "navigate");
        self.route = route.clone();

        match route {
            Route::Login => self.login = LoginState::default(),
            Route::Home => {
                self.posts = PostListState::default();
                self.send(ApiCommand::ListPosts);
            }
            Route::Post(raw) => {
                self.detail = PostDetailState::default();
                match parse_post_id(&raw) {
                    Ok(id) => {
                        self.send(ApiCommand::GetPost { id });
                    }
                    Err(e) => {
                        debug!(error = %e, "not fetching post");
                        let message = self.text(Msg::InvalidPostId);
                        dispatch_mvi!(
                            self,
                            detail,
                            PostDetailReducer,
                            PostDetailIntent::Failed { message }
                        );
                    }
                }
            }
            Route::EditPost(id) => {
                self.edit = PostEditState::default();
                self.send(ApiCommand::GetPost { id });
            }
        }
    }

    pub fn go_home(&mut self) {
        self.navigate(Route::Home);
    }

    pub fn go_login(&mut self) {
        self.navigate(Route::Login);
    }

    /// Sign out. Stays on the current screen.
    pub fn logout(&mut self) {
        if !self.auth.is_authenticated() {
            return;
        }
        self.auth.clear_session();
        info!("signed out");
        self.notice = Some(self.text(Msg::SignedOut));
    }

    // ========================================================================
    // API outcomes
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        if event.generation != self.generation {
            debug!(
                generation = event.generation,
                current = self.generation,
                "discarding stale outcome"
            );
            return;
        }

        // A rejected login says nothing about the stored session
        if !matches!(event.outcome, ApiOutcome::LoggedIn(_)) {
            if let Some(err) = event.outcome.error() {
                if self.auth.handle_api_error(err) {
                    self.notice = Some(self.text(Msg::SignedOut));
                }
            }
        }

        match event.outcome {
            ApiOutcome::LoggedIn(Ok(session)) => {
                info!(
                    user = session.user.as_ref().map(|u| u.username.as_str()),
                    "logged in"
                );
                self.auth.set_session(session);
                self.navigate(Route::Home);
            }
            ApiOutcome::LoggedIn(Err(e)) => {
                warn!(error = %e, error_type = e.error_type(), "login failed");
                let message = login_error_message(&e, self.language);
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::Failed { message });
            }
            ApiOutcome::Posts(Ok(posts)) => {
                debug!(count = posts.len(), "posts loaded");
                dispatch_mvi!(self, posts, PostListReducer, PostListIntent::Loaded { posts });
            }
            ApiOutcome::Posts(Err(e)) => {
                warn!(error = %e, "failed to fetch posts");
                let message = self.text(Msg::FetchPostsFailed);
                dispatch_mvi!(self, posts, PostListReducer, PostListIntent::Failed { message });
            }
            ApiOutcome::Post(result) => self.on_post_loaded(result),
            ApiOutcome::Updated(Ok(post)) => {
                info!(post_id = post.id, "post updated");
                self.navigate(Route::post(post.id));
            }
            ApiOutcome::Updated(Err(e)) => {
                warn!(error = %e, "failed to update post");
                let message = with_detail(self.text(Msg::UpdateFailed), &e);
                dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::SaveFailed { message });
            }
            ApiOutcome::Deleted(Ok(())) => {
                info!("post deleted");
                self.navigate(Route::Home);
            }
            ApiOutcome::Deleted(Err(e)) => {
                warn!(error = %e, "failed to delete post");
                let message = with_detail(self.text(Msg::DeleteFailed), &e);
                dispatch_mvi!(
                    self,
                    detail,
                    PostDetailReducer,
                    PostDetailIntent::DeleteFailed { message }
                );
            }
        }
    }

    fn on_post_loaded(&mut self, result: Result<crate::api::Post, ApiError>) {
        let editing = matches!(self.route, Route::EditPost(_));
        match result {
            Ok(post) if editing => {
                if self.auth.current_user_id().as_ref() != Some(&post.author.id) {
                    info!(post_id = post.id, "not the author, refusing to edit");
                    let message = self.text(Msg::NotPostAuthor);
                    dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::LoadFailed { message });
                    return;
                }
                dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::Loaded { post });
            }
            Ok(post) => {
                dispatch_mvi!(self, detail, PostDetailReducer, PostDetailIntent::Loaded { post });
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch post");
                let message = self.text(Msg::FetchPostFailed);
                if editing {
                    dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::LoadFailed { message });
                } else {
                    dispatch_mvi!(self, detail, PostDetailReducer, PostDetailIntent::Failed { message });
                }
            }
        }
    }

    // ========================================================================
    // Login screen
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    /// Submit the login form. Issues a request only when the form actually
    /// enters the submitting phase.
    pub fn submit_login(&mut self) {
        let was_submitting = self.login.is_submitting();
        self.dispatch_login(LoginIntent::Submit);
        if !was_submitting && self.login.is_submitting() {
            self.send(ApiCommand::Login {
                username: self.login.username.clone(),
                password: self.login.password.clone(),
            });
        }
    }

    // ========================================================================
    // Post list
    // ========================================================================

    pub fn dispatch_posts(&mut self, intent: PostListIntent) {
        dispatch_mvi!(self, posts, PostListReducer, intent);
    }

    pub fn open_selected_post(&mut self) {
        if let Some(id) = self.posts.selected_post().map(|post| post.id) {
            self.navigate(Route::post(id));
        }
    }

    // ========================================================================
    // Post detail
    // ========================================================================

    /// Edit/delete controls are shown for the loaded post. Follows the live
    /// session, so signing out hides them immediately.
    pub fn shows_author_controls(&self) -> bool {
        self.detail
            .is_authored_by(self.auth.current_user_id().as_ref())
    }

    pub fn request_delete(&mut self) {
        let viewer = self.auth.current_user_id();
        dispatch_mvi!(
            self,
            detail,
            PostDetailReducer,
            PostDetailIntent::RequestDelete { viewer }
        );
    }

    pub fn cancel_delete(&mut self) {
        dispatch_mvi!(self, detail, PostDetailReducer, PostDetailIntent::CancelDelete);
    }

    /// Answer "yes" to the delete prompt. The request goes out only on the
    /// `Confirming → Deleting` edge.
    pub fn confirm_delete(&mut self) {
        let was_confirming = self.detail.delete_status() == Some(DeleteStatus::Confirming);
        if was_confirming && !self.shows_author_controls() {
            self.cancel_delete();
            return;
        }
        dispatch_mvi!(self, detail, PostDetailReducer, PostDetailIntent::ConfirmDelete);
        if !was_confirming || self.detail.delete_status() != Some(DeleteStatus::Deleting) {
            return;
        }
        if let Some(id) = self.detail.post().map(|post| post.id) {
            self.send(ApiCommand::DeletePost { id });
        }
    }

    /// Open the edit screen for the displayed post, if the viewer wrote it.
    pub fn edit_post(&mut self) {
        if !self.shows_author_controls() {
            return;
        }
        if let Some(id) = self.detail.post().map(|post| post.id) {
            self.navigate(Route::EditPost(id));
        }
    }

    // ========================================================================
    // Post edit
    // ========================================================================

    pub fn dispatch_edit(&mut self, intent: PostEditIntent) {
        dispatch_mvi!(self, edit, PostEditReducer, intent);
    }

    pub fn submit_edit(&mut self) {
        if self.edit.form().is_some()
            && !self
                .edit
                .is_authored_by(self.auth.current_user_id().as_ref())
        {
            let message = self.text(Msg::NotPostAuthor);
            dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::SaveFailed { message });
            return;
        }
        let was_saving = self.edit.is_saving();
        self.dispatch_edit(PostEditIntent::Submit);
        if was_saving || !self.edit.is_saving() {
            return;
        }
        if let Some(form) = self.edit.form() {
            let command = ApiCommand::UpdatePost {
                id: form.post_id,
                update: form.update(),
            };
            self.send(command);
        }
    }

    /// Leave the edit screen without saving.
    pub fn cancel_edit(&mut self) {
        match self.editing_post_id() {
            Some(id) => self.navigate(Route::post(id)),
            None => self.navigate(Route::Home),
        }
    }

    fn editing_post_id(&self) -> Option<PostId> {
        match self.route {
            Route::EditPost(id) => Some(id),
            _ => None,
        }
    }

    // ========================================================================
    // Requests
    // ========================================================================

    fn send(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.requests else {
            self.fail_command(&command, "request worker not running".to_string());
            return false;
        };

        let name = command.name();
        let request = ApiRequest {
            generation: self.generation,
            command,
        };
        match sender.try_send(request) {
            Ok(()) => {
                self.last_request_error = None;
                true
            }
            Err(err) => {
                let (reason, request) = match err {
                    TrySendError::Full(request) => ("request queue full", request),
                    TrySendError::Closed(request) => ("request worker stopped", request),
                };
                warn!(command = name, reason, "could not queue request");
                self.fail_command(&request.command, reason.to_string());
                false
            }
        }
    }

    /// Report a command that never reached the worker on the screen that
    /// issued it.
    fn fail_command(&mut self, command: &ApiCommand, reason: String) {
        let message = format!("{}: {}", self.text(Msg::RequestQueueFailed), reason);
        self.last_request_error = Some(message.clone());
        match command {
            ApiCommand::Login { .. } => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::Failed { message });
            }
            ApiCommand::ListPosts => {
                dispatch_mvi!(self, posts, PostListReducer, PostListIntent::Failed { message });
            }
            ApiCommand::GetPost { .. } if self.editing_post_id().is_some() => {
                dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::LoadFailed { message });
            }
            ApiCommand::GetPost { .. } => {
                dispatch_mvi!(self, detail, PostDetailReducer, PostDetailIntent::Failed { message });
            }
            ApiCommand::UpdatePost { .. } => {
                dispatch_mvi!(self, edit, PostEditReducer, PostEditIntent::SaveFailed { message });
            }
            ApiCommand::DeletePost { .. } => {
                dispatch_mvi!(
                    self,
                    detail,
                    PostDetailReducer,
                    PostDetailIntent::DeleteFailed { message }
                );
            }
        }
    }

    fn text(&self, msg: Msg) -> String {
        self.language.text(msg).to_string()
    }
}

/// The server's `detail` verbatim, else a fallback by failure kind.
pub fn login_error_message(err: &ApiError, language: Language) -> String {
    match err {
        ApiError::Http {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ApiError::Http { .. } => language.text(Msg::LoginFailed).to_string(),
        _ => language.text(Msg::LoginError).to_string(),
    }
}

fn with_detail(base: String, err: &ApiError) -> String {
    match err.detail() {
        Some(detail) => format!("{base} ({detail})"),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Post, User};
    use crate::session::{Session, SessionToken};
    use tokio::sync::mpsc;

    fn post(id: PostId, author_id: i64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            content: "Body".to_string(),
            created_at: "2024-05-01T09:30:00Z".to_string(),
            author: User {
                id: author_id.into(),
                username: format!("user{author_id}"),
            },
        }
    }

    fn make_app() -> (App, mpsc::Receiver<ApiRequest>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new(Language::En, AuthContext::detached());
        app.attach_requests(tx);
        (app, rx)
    }

    fn sign_in(app: &App, user_id: i64) {
        app.auth().set_session(Session {
            token: SessionToken::new("tok"),
            user: Some(User {
                id: user_id.into(),
                username: format!("user{user_id}"),
            }),
        });
    }

    fn event(app: &App, outcome: ApiOutcome) -> ApiEvent {
        ApiEvent {
            generation: app.generation(),
            outcome,
        }
    }

    fn open_post(app: &mut App, rx: &mut mpsc::Receiver<ApiRequest>, post: Post) {
        app.navigate(Route::post(post.id));
        let request = rx.try_recv().unwrap();
        assert!(matches!(request.command, ApiCommand::GetPost { id } if id == post.id));
        let outcome = event(app, ApiOutcome::Post(Ok(post)));
        app.on_api_event(outcome);
    }

    // -- navigation -------------------------------------------------------

    #[test]
    fn navigate_home_requests_posts() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Home);
        let request = rx.try_recv().unwrap();
        assert!(matches!(request.command, ApiCommand::ListPosts));
        assert_eq!(request.generation, app.generation());
        assert!(app.post_list().is_loading());
    }

    #[test]
    fn invalid_post_id_fails_without_request() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Post("abc".to_string()));
        assert!(rx.try_recv().is_err());
        assert_eq!(
            app.post_detail(),
            &PostDetailState::Error {
                message: "Invalid post ID.".to_string()
            }
        );
    }

    #[test]
    fn navigate_without_worker_reports_error() {
        let mut app = App::new(Language::En, AuthContext::detached());
        app.navigate(Route::Home);
        assert!(matches!(app.post_list(), PostListState::Error { .. }));
        assert!(app.last_request_error().is_some());
    }

    // -- outcomes ---------------------------------------------------------

    #[test]
    fn stale_outcome_is_ignored() {
        let (mut app, _rx) = make_app();
        app.navigate(Route::Home);
        let stale = app.generation();
        app.navigate(Route::post(1));

        app.on_api_event(ApiEvent {
            generation: stale,
            outcome: ApiOutcome::Posts(Ok(vec![post(1, 1)])),
        });

        assert!(app.post_list().is_loading());
        assert_eq!(app.route(), &Route::post(1));
    }

    #[test]
    fn unauthorized_outcome_clears_session() {
        let (mut app, _rx) = make_app();
        sign_in(&app, 1);
        app.navigate(Route::Home);

        let outcome = event(
            &app,
            ApiOutcome::Posts(Err(ApiError::Http {
                status: 401,
                detail: None,
            })),
        );
        app.on_api_event(outcome);

        assert!(!app.auth().is_authenticated());
        assert_eq!(app.notice(), Some("Signed out"));
    }

    #[test]
    fn rejected_login_keeps_existing_session() {
        let (mut app, _rx) = make_app();
        sign_in(&app, 1);
        app.navigate(Route::Login);

        let outcome = event(
            &app,
            ApiOutcome::LoggedIn(Err(ApiError::Http {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            })),
        );
        app.on_api_event(outcome);

        assert!(app.auth().is_authenticated());
        assert_eq!(app.login_state().error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn login_error_message_fallbacks() {
        let no_detail = ApiError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(login_error_message(&no_detail, Language::En), "Login failed");
        let decode = ApiError::Decode {
            path: "/api/auth/login/".to_string(),
            source: serde_json::from_str::<u8>("x").unwrap_err(),
        };
        assert_eq!(
            login_error_message(&decode, Language::Ja),
            "ログイン中にエラーが発生しました"
        );
    }

    // -- login ------------------------------------------------------------

    #[test]
    fn blank_login_sends_nothing() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Login);
        app.submit_login();
        assert!(rx.try_recv().is_err());
        assert!(!app.login_state().is_submitting());
    }

    #[test]
    fn double_submit_sends_once() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Login);
        app.dispatch_login(LoginIntent::Input('a'));
        app.dispatch_login(LoginIntent::NextField);
        app.dispatch_login(LoginIntent::Input('b'));
        app.submit_login();
        app.submit_login();

        let request = rx.try_recv().unwrap();
        assert!(matches!(
            request.command,
            ApiCommand::Login { ref username, ref password } if username == "a" && password == "b"
        ));
        assert!(rx.try_recv().is_err());
    }

    // -- delete -----------------------------------------------------------

    #[test]
    fn delete_requires_confirmation_and_sends_once() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));

        app.confirm_delete();
        assert!(rx.try_recv().is_err());

        app.request_delete();
        app.confirm_delete();
        app.confirm_delete();

        let request = rx.try_recv().unwrap();
        assert!(matches!(request.command, ApiCommand::DeletePost { id: 3 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn non_author_cannot_delete_or_edit() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 2);
        open_post(&mut app, &mut rx, post(3, 7));

        assert!(!app.shows_author_controls());
        app.request_delete();
        app.confirm_delete();
        app.edit_post();

        assert!(rx.try_recv().is_err());
        assert_eq!(app.route(), &Route::post(3));
    }

    #[test]
    fn delete_failure_keeps_post_with_alert() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));
        app.request_delete();
        app.confirm_delete();
        let _ = rx.try_recv();

        let outcome = event(
            &app,
            ApiOutcome::Deleted(Err(ApiError::Http {
                status: 403,
                detail: Some("Not allowed".to_string()),
            })),
        );
        app.on_api_event(outcome);

        assert_eq!(app.route(), &Route::post(3));
        match app.post_detail() {
            PostDetailState::Ready { alert, delete, .. } => {
                assert_eq!(*delete, DeleteStatus::Idle);
                assert_eq!(
                    alert.as_deref(),
                    Some("Failed to delete the post. (Not allowed)")
                );
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn delete_success_navigates_home() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));
        app.request_delete();
        app.confirm_delete();
        let _ = rx.try_recv();

        let outcome = event(&app, ApiOutcome::Deleted(Ok(())));
        app.on_api_event(outcome);

        assert_eq!(app.route(), &Route::Home);
        assert!(matches!(rx.try_recv().unwrap().command, ApiCommand::ListPosts));
    }

    #[test]
    fn unauthorized_delete_hides_author_controls() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));
        assert!(app.shows_author_controls());
        app.request_delete();
        app.confirm_delete();
        let _ = rx.try_recv();

        let outcome = event(
            &app,
            ApiOutcome::Deleted(Err(ApiError::Http {
                status: 401,
                detail: None,
            })),
        );
        app.on_api_event(outcome);

        assert!(!app.auth().is_authenticated());
        assert!(!app.shows_author_controls());
        app.request_delete();
        assert_eq!(app.post_detail().delete_status(), Some(DeleteStatus::Idle));
        app.edit_post();
        assert_eq!(app.route(), &Route::post(3));
    }

    #[test]
    fn logout_while_confirming_cancels_delete() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));
        app.request_delete();
        app.logout();

        app.confirm_delete();

        assert_eq!(app.post_detail().delete_status(), Some(DeleteStatus::Idle));
        assert!(rx.try_recv().is_err());
    }

    // -- edit -------------------------------------------------------------

    #[test]
    fn edit_flow_saves_and_returns_to_detail() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        open_post(&mut app, &mut rx, post(3, 7));

        app.edit_post();
        assert_eq!(app.route(), &Route::EditPost(3));
        assert!(matches!(rx.try_recv().unwrap().command, ApiCommand::GetPost { id: 3 }));

        let outcome = event(&app, ApiOutcome::Post(Ok(post(3, 7))));
        app.on_api_event(outcome);
        app.dispatch_edit(PostEditIntent::Input('!'));
        app.submit_edit();

        match rx.try_recv().unwrap().command {
            ApiCommand::UpdatePost { id, update } => {
                assert_eq!(id, 3);
                assert_eq!(update.title, "Post 3!");
            }
            other => panic!("expected UpdatePost, got {other:?}"),
        }

        let outcome = event(&app, ApiOutcome::Updated(Ok(post(3, 7))));
        app.on_api_event(outcome);
        assert_eq!(app.route(), &Route::post(3));
    }

    #[test]
    fn edit_route_refuses_non_author() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 2);
        app.navigate(Route::EditPost(3));
        let _ = rx.try_recv();

        let outcome = event(&app, ApiOutcome::Post(Ok(post(3, 7))));
        app.on_api_event(outcome);

        assert_eq!(
            app.post_edit(),
            &PostEditState::Error {
                message: "Only the author can edit this post.".to_string()
            }
        );
        app.submit_edit();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn sign_out_while_editing_blocks_save() {
        let (mut app, mut rx) = make_app();
        sign_in(&app, 7);
        app.navigate(Route::EditPost(3));
        let _ = rx.try_recv();
        let outcome = event(&app, ApiOutcome::Post(Ok(post(3, 7))));
        app.on_api_event(outcome);

        app.logout();
        app.submit_edit();

        assert!(rx.try_recv().is_err());
        let form = app.post_edit().form().unwrap();
        assert!(!form.saving);
        assert_eq!(
            form.error.as_deref(),
            Some("Only the author can edit this post.")
        );
    }

    #[test]
    fn logout_clears_session_and_sets_notice() {
        let (mut app, _rx) = make_app();
        sign_in(&app, 1);
        app.logout();
        assert!(!app.auth().is_authenticated());
        assert_eq!(app.notice(), Some("Signed out"));
    }
}
