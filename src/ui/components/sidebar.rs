//! Folder sidebar with unread badges.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::mail::Folder;

/// Width of the sidebar when collapsed
pub const COLLAPSED_WIDTH: u16 = 8;

pub struct Sidebar {
    folders: Vec<(Folder, usize)>,
    current: Folder,
    collapsed: bool,
}

impl Sidebar {
    /// `folders` pairs each folder with its badge count
    pub fn new(folders: Vec<(Folder, usize)>, current: Folder) -> Self {
        Self {
            folders,
            current,
            collapsed: false,
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    fn folder_line(&self, folder: Folder, count: usize, width: u16) -> Line<'static> {
        let active = folder == self.current;
        let style = if active {
            Style::default().fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let badge = if count > 0 { count.to_string() } else { String::new() };

        if self.collapsed {
            return Line::from(vec![
                Span::styled(format!(" {} ", folder.icon()), style),
                Span::styled(badge, style.fg(Color::Blue)),
            ]);
        }

        let label = format!(" {} {}", folder.icon(), folder.display_name());
        let pad = (width as usize).saturating_sub(label.chars().count() + badge.len() + 1);
        Line::from(vec![
            Span::styled(label, style),
            Span::styled(" ".repeat(pad), style),
            Span::styled(format!("{} ", badge), style.fg(Color::Blue)),
        ])
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        if !self.collapsed {
            block = block.title(" 󰇮 vimail ");
        }

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, (folder, count)) in self.folders.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = self.folder_line(*folder, *count, inner.width);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
