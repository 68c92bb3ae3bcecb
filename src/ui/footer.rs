use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    /// Key hints for the current screen.
    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::Login => " Tab: Next field │ Enter: Log in │ Esc: Home │ Ctrl+Q: Quit",
            Route::Home => {
                " ↑/↓: Select │ Enter: Open │ r: Reload │ l: Login │ o: Logout │ q: Quit"
            }
            Route::Post(_) => " Esc: Back │ q: Quit",
            Route::EditPost(_) => {
                " Tab: Next field │ Ctrl+S: Save │ Esc: Cancel │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
