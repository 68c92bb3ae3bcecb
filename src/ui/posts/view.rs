use crate::api::Post;
use crate::ui::i18n::{Language, Msg};
use crate::ui::posts::state::{preview, PostListState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

/// Display data for one post on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub title: String,
    pub preview: String,
    pub author: String,
    pub date: String,
}

pub fn preview_cards(posts: &[Post], lang: Language) -> Vec<PreviewCard> {
    posts
        .iter()
        .map(|post| PreviewCard {
            title: post.title.clone(),
            preview: preview(&post.content),
            author: post.author.username.clone(),
            date: lang.format_date(&post.created_at),
        })
        .collect()
}

pub fn render_posts(frame: &mut Frame, area: Rect, state: &PostListState, lang: Language) {
    let block = Block::default()
        .title(Span::styled(lang.text(Msg::LatestPosts), Style::default().fg(PRIMARY)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match state {
        PostListState::Loading => {
            render_notice(frame, area, block, lang.text(Msg::Loading), MUTED_TEXT);
        }
        PostListState::Error { message } => {
            render_notice(frame, area, block, message, STATUS_ERROR);
        }
        PostListState::Ready { posts, .. } if posts.is_empty() => {
            render_notice(frame, area, block, lang.text(Msg::NoPosts), MUTED_TEXT);
        }
        PostListState::Ready { posts, selected } => {
            let items: Vec<ListItem> = preview_cards(posts, lang)
                .into_iter()
                .map(|card| card_item(card, lang))
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("▌ ");
            let mut list_state = ListState::default().with_selected(Some(*selected));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn card_item(card: PreviewCard, lang: Language) -> ListItem<'static> {
    let meta_style = Style::default().fg(MUTED_TEXT);
    ListItem::new(vec![
        Line::from(Span::styled(
            card.title,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.preview, Style::default().fg(HEADER_TEXT))),
        Line::from(vec![
            Span::styled(format!("{}: {}", lang.text(Msg::PostedBy), card.author), meta_style),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(card.date, meta_style),
        ]),
        Line::from(""),
    ])
}

fn render_notice(
    frame: &mut Frame,
    area: Rect,
    block: Block<'static>,
    text: &str,
    color: ratatui::style::Color,
) {
    let widget = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(widget, area);
}
