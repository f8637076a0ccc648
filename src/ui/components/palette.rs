//! Command Palette
//!
//! Fuzzy-filtered list of commands opened with Ctrl+K.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::popup::{centered_rect_fixed, popup_block};
use crate::ai::AiFeature;
use crate::input::keymap::TextAction;
use crate::input::Command;
use crate::mail::Folder;

/// What a palette entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    GoTo(Folder),
    Run(Command),
    Ai(AiFeature),
    Settings,
    Shortcuts,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    pub shortcut: Option<&'static str>,
    pub premium: bool,
    pub action: PaletteAction,
}

const fn entry(
    id: &'static str,
    label: &'static str,
    group: &'static str,
    shortcut: Option<&'static str>,
    action: PaletteAction,
) -> PaletteEntry {
    PaletteEntry { id, label, group, shortcut, premium: false, action }
}

const fn ai_entry(id: &'static str, label: &'static str, feature: AiFeature) -> PaletteEntry {
    PaletteEntry {
        id,
        label,
        group: "AI Features (Premium)",
        shortcut: None,
        premium: true,
        action: PaletteAction::Ai(feature),
    }
}

pub const ENTRIES: &[PaletteEntry] = &[
    entry("goto-inbox", "Go to Inbox", "Navigation", Some("gi"), PaletteAction::GoTo(Folder::Inbox)),
    entry("goto-sent", "Go to Sent", "Navigation", Some("gs"), PaletteAction::GoTo(Folder::Sent)),
    entry("goto-drafts", "Go to Drafts", "Navigation", Some("gd"), PaletteAction::GoTo(Folder::Drafts)),
    entry("goto-archive", "Go to Archive", "Navigation", Some("ga"), PaletteAction::GoTo(Folder::Archive)),
    entry("goto-trash", "Go to Trash", "Navigation", Some("gt"), PaletteAction::GoTo(Folder::Trash)),
    entry("compose", "Compose New Email", "Actions", Some("c"), PaletteAction::Run(Command::Compose)),
    entry("search", "Search Emails", "Actions", Some("/"), PaletteAction::Run(Command::Search)),
    entry("reply", "Reply to Email", "Actions", Some("r"), PaletteAction::Run(Command::Reply)),
    entry("archive", "Archive Email", "Actions", Some("e"), PaletteAction::Run(Command::Archive)),
    entry("delete", "Delete Email", "Actions", Some("d"), PaletteAction::Run(Command::Delete)),
    ai_entry("ai-summarize", "Summarize Thread", AiFeature::Summarize),
    ai_entry("ai-suggest", "Suggest Reply", AiFeature::SuggestReply),
    ai_entry("ai-categorize", "Auto-categorize", AiFeature::Categorize),
    entry("settings", "Open Settings", "Settings", None, PaletteAction::Settings),
    entry("shortcuts", "Keyboard Shortcuts", "Settings", Some("?"), PaletteAction::Shortcuts),
    entry("quit", "Quit", "Settings", Some("C-c"), PaletteAction::Quit),
];

/// Query plus highlighted row; indices refer to the filtered list
#[derive(Default)]
pub struct PaletteState {
    query: String,
    selected: usize,
    matcher: SkimMatcherV2,
}

impl std::fmt::Debug for PaletteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteState")
            .field("query", &self.query)
            .field("selected", &self.selected)
            .finish()
    }
}

impl PaletteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    /// Entries matching every whitespace-separated token of the query,
    /// best match first; an empty query keeps the declared order
    pub fn filtered(&self) -> Vec<&'static PaletteEntry> {
        let tokens: Vec<String> = self.query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return ENTRIES.iter().collect();
        }

        let mut scored: Vec<(i64, &'static PaletteEntry)> = ENTRIES
            .iter()
            .filter_map(|entry| {
                let haystack = format!("{} {} {}", entry.label, entry.id, entry.group).to_lowercase();
                tokens
                    .iter()
                    .map(|token| self.matcher.fuzzy_match(&haystack, token))
                    .sum::<Option<i64>>()
                    .map(|score| (score, entry))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, entry)| entry).collect()
    }

    pub fn selected_entry(&self) -> Option<&'static PaletteEntry> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Edit the query; the highlight returns to the top on every change
    pub fn edit(&mut self, action: TextAction) {
        match action {
            TextAction::InsertChar(c) => self.query.push(c),
            TextAction::DeleteChar => {
                self.query.pop();
            }
            TextAction::ClearLine => self.query.clear(),
            _ => return,
        }
        self.selected = 0;
    }
}

pub struct PaletteWidget<'a> {
    state: &'a PaletteState,
    premium: bool,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(state: &'a PaletteState, premium: bool) -> Self {
        Self { state, premium }
    }
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect_fixed(60, 24, area);
        Clear.render(popup, buf);

        let block = popup_block(" Command Palette ", " ↑/↓ select - Enter run - Esc close ", Color::Magenta);
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.height < 3 {
            return;
        }

        let prompt = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Magenta)),
            Span::styled(self.state.query(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]);
        buf.set_line(inner.x, inner.y, &prompt, inner.width);

        let entries = self.state.filtered();
        if entries.is_empty() {
            buf.set_stringn(inner.x, inner.y + 2, "No results found.", inner.width as usize, Style::default().fg(Color::DarkGray));
            return;
        }

        let rows = inner.height.saturating_sub(2) as usize;
        let offset = self.state.selected().saturating_sub(rows.saturating_sub(1));
        let mut y = inner.y + 2;
        let mut group = "";

        for (i, entry) in entries.iter().enumerate().skip(offset) {
            if y >= inner.bottom() {
                break;
            }
            if entry.group != group && self.state.query().is_empty() {
                group = entry.group;
                buf.set_stringn(inner.x, y, entry.group, inner.width as usize, Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));
                y += 1;
                if y >= inner.bottom() {
                    break;
                }
            }

            let selected = i == self.state.selected();
            let style = if selected {
                Style::default().fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);

            let mut spans = vec![Span::styled(format!("  {}", entry.label), style)];
            if entry.premium && !self.premium {
                spans.push(Span::styled(" PRO", style.fg(Color::Yellow)));
            }
            buf.set_line(inner.x, y, &Line::from(spans), inner.width);

            if let Some(shortcut) = entry.shortcut {
                let x = inner.right().saturating_sub(shortcut.len() as u16 + 1);
                buf.set_string(x, y, shortcut, style.fg(Color::Magenta));
            }
            y += 1;
        }
    }
}
