//! Renderer
//!
//! Composes the panes, status rows and overlays from a borrowed `UiState`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, ListState},
    Frame,
};

use super::components::sidebar::COLLAPSED_WIDTH;
use super::components::{
    ComposeForm, ComposeWidget, EmailList, EmptyState, HelpBar, HelpScreen, HelpState, PaletteState,
    PaletteWidget, ReadingPane, Sidebar, StatusLine,
};
use crate::ai::AiStatus;
use crate::app::config::LayoutConfig;
use crate::controller::selection::SelectionSet;
use crate::controller::{Notice, Overlay};
use crate::input::Mode;
use crate::mail::{Email, Folder};

pub struct UiState<'a> {
    pub mode: Mode,
    pub folder: Folder,
    pub folders: Vec<(Folder, usize)>,
    pub emails: &'a [&'a Email],
    pub cursor: Option<usize>,
    pub selection: &'a SelectionSet,
    pub ai: &'a AiStatus,
    pub premium: bool,
    pub layout: LayoutConfig,
    pub panel_collapsed: bool,
    pub notice: Option<&'a Notice>,
    pub unread: usize,
    pub overlay: Option<Overlay>,
    pub compose: Option<&'a ComposeForm>,
    pub palette: &'a PaletteState,
    pub help: &'a HelpState,
    pub list_state: &'a mut ListState,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let size = frame.area();
        let chunks = main_layout(size);

        render_panes(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[2]);
        render_overlays(frame, chunks[0], state);
    }
}

/// Panes, status line and hint bar rows
pub fn main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

/// Sidebar, list and reading pane columns
pub fn pane_layout(area: Rect, layout: LayoutConfig, collapsed: bool) -> std::rc::Rc<[Rect]> {
    let layout = layout.clamped();
    let constraints = if collapsed {
        [
            Constraint::Length(COLLAPSED_WIDTH),
            Constraint::Fill(layout.list),
            Constraint::Fill(layout.reading),
        ]
    } else {
        [
            Constraint::Percentage(layout.sidebar),
            Constraint::Percentage(layout.list),
            Constraint::Fill(1),
        ]
    };

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
}

fn render_panes(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let panes = pane_layout(area, state.layout, state.panel_collapsed);

    let sidebar = Sidebar::new(state.folders.clone(), state.folder).collapsed(state.panel_collapsed);
    frame.render_widget(sidebar, panes[0]);

    render_list(frame, panes[1], state);

    let current = state.cursor.and_then(|i| state.emails.get(i).copied());
    let reading = ReadingPane::new(current, state.ai).focused(current.is_some());
    frame.render_widget(reading, panes[2]);
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let border = if state.mode == Mode::Visual { Color::Magenta } else { Color::Blue };
    let block = create_list_block(state.folder, state.emails.len(), border);

    if state.emails.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(EmptyState::new("No emails").hint("Nothing in this folder"), inner);
        return;
    }

    let list = EmailList::new(state.emails, state.selection)
        .cursor(state.cursor)
        .block(block);
    frame.render_stateful_widget(list, area, state.list_state);
}

fn create_list_block(folder: Folder, count: usize, border_color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {} ({}) ", folder.display_name(), count))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode)
        .selected_count(state.selection.len())
        .unread(state.unread);

    if let Some(notice) = state.notice {
        status = status.notice(&notice.text, notice.level);
    }
    if let Some(index) = state.cursor {
        status = status.position(index, state.emails.len());
    }

    frame.render_widget(status, area);
}

fn render_overlays(frame: &mut Frame, area: Rect, state: &UiState) {
    if let Some(form) = state.compose {
        frame.render_widget(ComposeWidget::new(form), area);
    }

    match state.overlay {
        Some(Overlay::Palette) => frame.render_widget(PaletteWidget::new(state.palette, state.premium), area),
        Some(Overlay::Help) => frame.render_widget(HelpScreen::new(state.help), area),
        None => {}
    }
}
