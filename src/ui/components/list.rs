//! Message List Component
//!
//! Two-line entries for the current folder with cursor and VISUAL highlight.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::controller::selection::SelectionSet;
use crate::mail::Email;
use crate::ui::renderer::Renderer;

const VISUAL_BG: u32 = 0x3B2F4A;
const CURSOR_BG: u32 = 0x3B4252;
const MUTED: u32 = 0x4C566A;

/// Short age of a message relative to `now`
pub fn relative_time(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let delta = now.signed_duration_since(timestamp);
    let minutes = delta.num_minutes();

    match minutes {
        m if m < 1 => "now".to_string(),
        m if m < 60 => format!("{}m", m),
        m if m < 60 * 24 => format!("{}h", m / 60),
        m if m < 60 * 24 * 7 => format!("{}d", m / (60 * 24)),
        _ => timestamp.format("%b %d").to_string(),
    }
}

pub struct EmailList<'a> {
    emails: &'a [&'a Email],
    cursor: Option<usize>,
    selection: &'a SelectionSet,
    block: Option<Block<'a>>,
    now: DateTime<Local>,
}

impl<'a> EmailList<'a> {
    pub fn new(emails: &'a [&'a Email], selection: &'a SelectionSet) -> Self {
        Self {
            emails,
            cursor: None,
            selection,
            block: None,
            now: Local::now(),
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

fn row_style(is_cursor: bool, is_selected: bool) -> Style {
    match (is_cursor, is_selected) {
        (_, true) => Style::default().bg(Renderer::hex_color(VISUAL_BG)),
        (true, false) => Style::default().bg(Renderer::hex_color(CURSOR_BG)),
        _ => Style::default(),
    }
}

fn build_header_line<'a>(email: &'a Email, is_cursor: bool, now: DateTime<Local>) -> Line<'a> {
    let marker = if is_cursor {
        Span::styled("▌", Style::default().fg(Color::Blue))
    } else {
        Span::raw(" ")
    };
    let unread = if email.is_read {
        Span::raw("  ")
    } else {
        Span::styled("● ", Style::default().fg(Color::Blue))
    };
    let star = if email.is_starred {
        Span::styled("★ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("  ")
    };
    let sender_style = if email.is_read {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![marker, unread, star, Span::styled(email.from.name.as_str(), sender_style)];
    if let Some(count) = email.thread_count {
        spans.push(Span::styled(format!(" ({})", count), Style::default().fg(Renderer::hex_color(MUTED))));
    }
    if email.has_attachments {
        spans.push(Span::styled(" 󰁦", Style::default().fg(Renderer::hex_color(MUTED))));
    }
    spans.push(Span::styled(
        format!("  {}", relative_time(email.timestamp, now)),
        Style::default().fg(Renderer::hex_color(MUTED)),
    ));
    Line::from(spans)
}

fn build_body_line(email: &Email) -> Line<'_> {
    let subject_style = if email.is_read {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw("     "),
        Span::styled(email.subject.as_str(), subject_style),
        Span::styled(" - ", Style::default().fg(Color::DarkGray)),
        Span::styled(email.preview.as_str(), Style::default().fg(Renderer::hex_color(MUTED))),
    ])
}

impl<'a> StatefulWidget for EmailList<'a> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items: Vec<ListItem> = self
            .emails
            .iter()
            .enumerate()
            .map(|(i, email)| {
                let is_cursor = self.cursor == Some(i);
                let is_selected = self.selection.contains(&email.id);
                ListItem::new(vec![build_header_line(email, is_cursor, self.now), build_body_line(email)])
                    .style(row_style(is_cursor, is_selected))
            })
            .collect();

        let list = List::new(items);
        let list = match self.block {
            Some(block) => list.block(block),
            None => list,
        };

        state.select(self.cursor);
        StatefulWidget::render(list, area, buf, state);
    }
}

pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, hint: None }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

fn center_x(area: &Rect, text_len: usize) -> u16 {
    area.x + (area.width.saturating_sub(text_len as u16)) / 2
}

impl<'a> Widget for EmptyState<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center_y = area.y + area.height / 2;
        let msg_x = center_x(&area, self.message.len());
        buf.set_string(msg_x, center_y, self.message, Style::default().fg(Color::DarkGray));
        render_optional_hint(buf, &area, center_y, self.hint);
    }
}

fn render_optional_hint(buf: &mut Buffer, area: &Rect, center_y: u16, hint: Option<&str>) {
    let Some(hint) = hint else { return };
    let hint_x = center_x(area, hint.len());
    let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
    buf.set_string(hint_x, center_y + 1, hint, style);
}
