use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::login::LoginIntent;
use crate::ui::post_detail::DeleteStatus;
use crate::ui::post_edit::PostEditIntent;
use crate::ui::posts::PostListIntent;
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let route = app.route().clone();
    match route {
        Route::Login => handle_login_key(app, key),
        Route::Home => handle_posts_key(app, key),
        Route::Post(_) => handle_detail_key(app, key),
        Route::EditPost(_) => handle_edit_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Esc => app.go_home(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch_login(LoginIntent::NextField)
        }
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if !has_ctrl(key) => app.dispatch_login(LoginIntent::Input(ch)),
        _ => {}
    }
}

fn handle_posts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_posts(PostListIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_posts(PostListIntent::MoveDown),
        KeyCode::Enter => app.open_selected_post(),
        KeyCode::Char('r') => app.go_home(),
        KeyCode::Char('l') => app.go_login(),
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if app.post_detail().delete_status() == Some(DeleteStatus::Confirming) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go_home(),
        KeyCode::Enter if app.post_detail().is_error() => app.go_home(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('e') => app.edit_post(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_edit();
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_edit(PostEditIntent::NextField),
        KeyCode::Enter => app.dispatch_edit(PostEditIntent::Newline),
        KeyCode::Backspace => app.dispatch_edit(PostEditIntent::Backspace),
        KeyCode::Char(ch) if !has_ctrl(key) => app.dispatch_edit(PostEditIntent::Input(ch)),
        _ => {}
    }
}

fn has_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
