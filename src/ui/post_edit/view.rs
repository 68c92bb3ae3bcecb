use crate::ui::i18n::{Language, Msg};
use crate::ui::post_edit::state::{EditField, PostEditState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_post_edit(frame: &mut Frame, area: Rect, state: &PostEditState, lang: Language) {
    let block = Block::default()
        .title(Span::styled(lang.text(Msg::EditPost), Style::default().fg(PRIMARY)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let form = match state {
        PostEditState::Loading => {
            let widget = Paragraph::new(lang.text(Msg::Loading))
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        PostEditState::Error { message } => {
            let widget = Paragraph::new(message.clone())
                .style(Style::default().fg(STATUS_ERROR))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        PostEditState::Ready(form) => form,
    };

    let label_style = |field: EditField| {
        if form.focus == field {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        }
    };
    let caret = |field: EditField| {
        if form.focus == field && !form.saving {
            "_"
        } else {
            ""
        }
    };
    let text_style = Style::default().fg(HEADER_TEXT);

    let mut lines = Vec::new();
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        lang.text(Msg::Title),
        label_style(EditField::Title),
    )));
    lines.push(Line::from(Span::styled(
        format!("{}{}", form.title, caret(EditField::Title)),
        text_style,
    )));
    if form.title_missing {
        lines.push(Line::from(Span::styled(
            lang.text(Msg::RequiredField),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        lang.text(Msg::Content),
        label_style(EditField::Content),
    )));
    let content_lines: Vec<&str> = form.content.split('\n').collect();
    let last = content_lines.len().saturating_sub(1);
    for (idx, line) in content_lines.into_iter().enumerate() {
        let suffix = if idx == last { caret(EditField::Content) } else { "" };
        lines.push(Line::from(Span::styled(format!("{line}{suffix}"), text_style)));
    }
    lines.push(Line::from(""));

    let action = if form.saving {
        Span::styled(lang.text(Msg::Saving), Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(
            format!("[Ctrl+S] {}", lang.text(Msg::Save)),
            Style::default().fg(PRIMARY),
        )
    };
    lines.push(Line::from(action));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
