use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::login::view::render_login;
use crate::ui::post_detail::view::render_post_detail;
use crate::ui::post_edit::view::render_post_edit;
use crate::ui::posts::view::render_posts;
use crate::ui::route::Route;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let language = app.language();

    let user = app.auth().current_user();
    let header_widget = Header::new(language, app.auth().is_authenticated(), user.as_ref())
        .notice(app.notice());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.route() {
        Route::Login => render_login(frame, body, app.login_state(), language),
        Route::Home => render_posts(frame, body, app.post_list(), language),
        Route::Post(_) => {
            let viewer = app.auth().current_user_id();
            render_post_detail(frame, body, app.post_detail(), viewer.as_ref(), language)
        }
        Route::EditPost(_) => render_post_edit(frame, body, app.post_edit(), language),
    }

    let footer_widget = Footer::new(app.route());
    frame.render_widget(footer_widget.widget(footer), footer);
}
