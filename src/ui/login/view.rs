use crate::ui::i18n::{Language, Msg};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const FORM_WIDTH: u16 = 56;

pub fn render_login(frame: &mut Frame, area: Rect, state: &LoginState, lang: Language) {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for field in [LoginField::Username, LoginField::Password] {
        let label = match field {
            LoginField::Username => lang.text(Msg::Username),
            LoginField::Password => lang.text(Msg::Password),
        };
        lines.push(Line::from(Span::styled(label, Style::default().fg(HEADER_TEXT))));
        lines.push(field_line(state, field));
        if state.missing == Some(field) {
            lines.push(Line::from(Span::styled(
                lang.text(Msg::RequiredField),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        lines.push(Line::from(""));
    }

    let button = if state.is_submitting() {
        lang.text(Msg::LoggingIn)
    } else {
        lang.text(Msg::Login)
    };
    let button_style = if state.is_submitting() {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(format!("[ {button} ]"), button_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        lang.text(Msg::NoAccount),
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let form = centered_rect_by_size(area, FORM_WIDTH, height);
    let block = Block::default()
        .title(Span::styled(lang.text(Msg::Login), Style::default().fg(PRIMARY)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        form,
    );
}

fn field_line(state: &LoginState, field: LoginField) -> Line<'static> {
    let value = state.field(field);
    let shown = match field {
        LoginField::Username => value.to_string(),
        LoginField::Password => "•".repeat(value.chars().count()),
    };
    let focused = state.focus == field;
    let style = if focused {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "> " } else { "  " };
    let caret = if focused && !state.is_submitting() { "_" } else { "" };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(PRIMARY)),
        Span::styled(format!("{shown}{caret}"), style),
    ])
}
