//! Status Line Component
//!
//! Displays mode indicator, notices, and mailbox info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::controller::NoticeLevel;
use crate::input::Mode;

pub fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::White,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Normal => Color::Blue,
        Mode::Insert => Color::Green,
        Mode::Visual => Color::Magenta,
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: Mode,
    notice: Option<(&'a str, NoticeLevel)>,
    selected_count: usize,
    unread: usize,
    position: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            notice: None,
            selected_count: 0,
            unread: 0,
            position: None,
        }
    }

    pub fn notice(mut self, text: &'a str, level: NoticeLevel) -> Self {
        self.notice = Some((text, level));
        self
    }

    pub fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    pub fn unread(mut self, unread: usize) -> Self {
        self.unread = unread;
        self
    }

    pub fn position(mut self, index: usize, total: usize) -> Self {
        self.position = Some((index, total));
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = Style::default().fg(Color::Black).bg(mode_color(self.mode));
        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        if self.mode == Mode::Visual {
            let count = format!("{} selected ", self.selected_count);
            buf.set_string(x, area.y, &count, Style::default().fg(Color::Magenta).bg(Color::DarkGray));
            x += count.len() as u16;
        }

        if let Some((text, level)) = self.notice {
            buf.set_string(x, area.y, text, Style::default().fg(level_color(level)).bg(Color::DarkGray));
        }

        let mut right_parts: Vec<String> = Vec::new();
        if let Some((index, total)) = self.position {
            right_parts.push(format!("{}/{}", index + 1, total));
        }
        right_parts.push(format!("{} unread", self.unread));
        right_parts.push("✓ synced".to_string());

        let right_text = right_parts.join("  ");
        let width = right_text.chars().count() as u16;
        let right_x = area.x + area.width.saturating_sub(width + 1);
        buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_mode(mode: Mode) -> Self {
        let hints = match mode {
            Mode::Normal => vec![
                ("j/k", "navigate"),
                ("Enter", "open"),
                ("c", "compose"),
                ("a", "toggle AI panel"),
                ("C-k", "commands"),
                ("?", "help"),
            ],
            Mode::Visual => vec![
                ("d", "delete"),
                ("e", "archive"),
                ("Esc", "exit visual"),
            ],
            Mode::Insert => vec![
                ("Esc", "exit insert mode"),
                ("C-s", "send"),
                ("Tab", "next field"),
            ],
        };
        Self::new(hints)
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
