use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::User;
use crate::ui::i18n::{Language, Msg};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, PRIMARY, STATUS_OK,
};

/// Title bar: app name, who is signed in, and the current notice.
pub struct Header<'a> {
    language: Language,
    signed_in: bool,
    user: Option<&'a User>,
    notice: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(language: Language, signed_in: bool, user: Option<&'a User>) -> Self {
        Self {
            language,
            signed_in,
            user,
            notice: None,
        }
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let account = match (self.signed_in, self.user) {
            (true, Some(user)) => Span::styled(
                format!("{} {}", self.language.text(Msg::SignedInAs), user.username),
                Style::default().fg(STATUS_OK),
            ),
            // Token restored but identity unknown
            (true, None) => Span::styled(
                self.language.text(Msg::SignedInAs).to_string(),
                Style::default().fg(STATUS_OK),
            ),
            (false, _) => Span::styled(
                self.language.text(Msg::NotSignedIn).to_string(),
                Style::default().fg(MUTED_TEXT),
            ),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.language.text(Msg::AppTitle).to_string(),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            account,
        ];
        if let Some(notice) = self.notice {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(notice.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
