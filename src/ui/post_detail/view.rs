use crate::api::UserId;
use crate::ui::i18n::{Language, Msg};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::post_detail::state::{DeleteStatus, PostDetailState};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, PRIMARY, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_post_detail(
    frame: &mut Frame,
    area: Rect,
    state: &PostDetailState,
    viewer: Option<&UserId>,
    lang: Language,
) {
    let is_author = state.is_authored_by(viewer);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let (post, delete, alert) = match state {
        PostDetailState::Loading => {
            let widget = Paragraph::new(lang.text(Msg::Loading))
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        PostDetailState::Error { message } => {
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[Enter] {}", lang.text(Msg::BackHome)),
                    Style::default().fg(PRIMARY),
                )),
            ];
            let widget = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(widget, area);
            return;
        }
        PostDetailState::Ready {
            post,
            delete,
            alert,
        } => (post, *delete, alert),
    };

    let meta_style = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{}: {}", lang.text(Msg::Author), post.author.username), meta_style),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(lang.format_date(&post.created_at), meta_style),
        ]),
        Line::from(""),
    ];

    for paragraph in post.content.split('\n') {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(HEADER_TEXT),
        )));
    }
    lines.push(Line::from(""));

    if let Some(alert) = alert {
        lines.push(Line::from(Span::styled(
            alert.clone(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
    }

    if is_author {
        let controls = if delete == DeleteStatus::Deleting {
            Span::styled(lang.text(Msg::Deleting), meta_style)
        } else {
            Span::styled(
                format!("[e] {}   [d] {}", lang.text(Msg::Edit), lang.text(Msg::Delete)),
                Style::default().fg(PRIMARY),
            )
        };
        lines.push(Line::from(controls));
    }
    lines.push(Line::from(Span::styled(
        format!("[Esc] {}", lang.text(Msg::BackToList)),
        Style::default().fg(PRIMARY),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );

    if is_author && delete == DeleteStatus::Confirming {
        render_confirm(frame, area, lang);
    }
}

fn render_confirm(frame: &mut Frame, area: Rect, lang: Language) {
    let question = lang.text(Msg::ConfirmDelete);
    let lines = vec![
        Line::from(Span::styled(question, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[y] {}   [n] {}", lang.text(Msg::Ok), lang.text(Msg::Cancel)),
            Style::default().fg(PRIMARY),
        )),
    ];
    let width = (question.chars().count() as u16).max(20).saturating_add(4);
    let popup = centered_rect_by_size(area, width.saturating_mul(2).min(60), 5);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(lang.text(Msg::Delete), Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        popup,
    );
}
