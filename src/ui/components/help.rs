//! Help screen and state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::popup::{centered_rect, popup_block};

const TWO_COLUMN_MIN_WIDTH: u16 = 80;
const KEY_WIDTH: u16 = 14;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    ("Navigation", &[
        ("j / ↓", "Move down"),
        ("k / ↑", "Move up"),
        ("g", "Jump to top"),
        ("G", "Jump to bottom"),
        ("Enter", "Open selected email"),
        ("Esc", "Close / go back"),
    ]),
    ("Actions", &[
        ("c", "Compose new email"),
        ("r", "Reply to email"),
        ("d", "Delete email"),
        ("e", "Archive email"),
        ("s", "Star / unstar email"),
        ("a", "Toggle AI panel"),
        ("/", "Search"),
    ]),
    ("Modes", &[
        ("v", "Visual mode (multi-select)"),
        ("c / r", "Insert mode (compose)"),
        ("Esc", "Return to Normal mode"),
        ("Ctrl+s", "Send (Insert mode)"),
    ]),
    ("Global", &[
        ("Ctrl+k", "Open command palette"),
        ("?", "Show keyboard shortcuts"),
        ("Ctrl+c", "Quit"),
    ]),
    ("Go To (palette)", &[
        ("goto-inbox", "Go to Inbox"),
        ("goto-sent", "Go to Sent"),
        ("goto-drafts", "Go to Drafts"),
        ("goto-archive", "Go to Archive"),
        ("goto-trash", "Go to Trash"),
    ]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HelpLine {
    Header(&'static str),
    Binding(&'static str, &'static str),
    Empty,
}

fn build_lines(sections: &[Section]) -> Vec<HelpLine> {
    let mut lines = Vec::new();
    for (i, (header, bindings)) in sections.iter().enumerate() {
        lines.push(HelpLine::Header(header));
        lines.extend(bindings.iter().map(|(key, desc)| HelpLine::Binding(key, desc)));
        if i + 1 < sections.len() {
            lines.push(HelpLine::Empty);
        }
    }
    lines
}

/// Left column gets sections until it holds about half the lines
fn split_columns() -> (Vec<HelpLine>, Vec<HelpLine>) {
    let total: usize = SECTIONS.iter().map(|(_, b)| b.len() + 2).sum();
    let mut split = SECTIONS.len();
    let mut count = 0;
    for (i, (_, bindings)) in SECTIONS.iter().enumerate() {
        if count >= total / 2 {
            split = i;
            break;
        }
        count += bindings.len() + 2;
    }
    (build_lines(&SECTIONS[..split]), build_lines(&SECTIONS[split..]))
}

/// Scroll offset of the help overlay
#[derive(Debug, Default)]
pub struct HelpState {
    pub scroll: usize,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, max_scroll: usize) {
        self.scroll = (self.scroll + amount).min(max_scroll);
    }

    pub fn home(&mut self) {
        self.scroll = 0;
    }

    pub fn end(&mut self, max_scroll: usize) {
        self.scroll = max_scroll;
    }
}

pub struct HelpScreen<'a> {
    state: &'a HelpState,
}

impl<'a> HelpScreen<'a> {
    pub fn new(state: &'a HelpState) -> Self {
        Self { state }
    }

    fn inner(area: Rect) -> Rect {
        let popup = centered_rect(70, 70, area);
        Rect::new(popup.x + 1, popup.y + 1, popup.width.saturating_sub(2), popup.height.saturating_sub(2))
    }

    fn content_height(width: u16) -> usize {
        if width >= TWO_COLUMN_MIN_WIDTH {
            let (left, right) = split_columns();
            left.len().max(right.len())
        } else {
            build_lines(SECTIONS).len()
        }
    }

    /// Largest useful scroll offset for a terminal of this size
    pub fn max_scroll(area: Rect) -> usize {
        let inner = Self::inner(area);
        Self::content_height(inner.width).saturating_sub(inner.height as usize)
    }
}

impl Widget for HelpScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(70, 70, area);
        Clear.render(popup, buf);

        let block = popup_block(" Keyboard Shortcuts ", " j/k scroll - g/G top/bottom - q close ", Color::Magenta);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let scroll = self.state.scroll;
        if inner.width >= TWO_COLUMN_MIN_WIDTH {
            let (left, right) = split_columns();
            let col_width = inner.width / 2;
            render_column(buf, Rect { width: col_width, ..inner }, &left, scroll);
            render_column(buf, Rect { x: inner.x + col_width, width: col_width, ..inner }, &right, scroll);
        } else {
            render_column(buf, inner, &build_lines(SECTIONS), scroll);
        }
    }
}

fn render_column(buf: &mut Buffer, area: Rect, lines: &[HelpLine], scroll: usize) {
    for (row, line) in lines.iter().skip(scroll).take(area.height as usize).enumerate() {
        let y = area.y + row as u16;
        match line {
            HelpLine::Header(title) => {
                let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                buf.set_stringn(area.x, y, *title, area.width as usize, style);
            }
            HelpLine::Binding(key, desc) => {
                buf.set_stringn(area.x + 2, y, *key, area.width.saturating_sub(2) as usize, Style::default().fg(Color::Cyan));
                let desc_width = area.width.saturating_sub(KEY_WIDTH + 2) as usize;
                buf.set_stringn(area.x + KEY_WIDTH + 2, y, *desc, desc_width, Style::default().fg(Color::Gray));
            }
            HelpLine::Empty => {}
        }
    }
}
