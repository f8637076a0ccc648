//! Mouse input: folder switching in the sidebar, click-to-open in the list.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::input::{Command, Mode};
use crate::mail::Folder;
use crate::ui::renderer::{main_layout, pane_layout};

use super::App;

/// Rows per list item
const ITEM_HEIGHT: u16 = 2;

/// Area inside a rounded border
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.session.overlay().is_some() || self.session.mode() != Mode::Normal {
            return;
        }

        let main = main_layout(self.terminal_size)[0];
        let panes = pane_layout(main, self.config.layout, self.session.panel_collapsed());

        let sidebar = inner(panes[0]);
        if rect_contains(sidebar, mouse.column, mouse.row) {
            let row = (mouse.row - sidebar.y) as usize;
            if let Some(folder) = Folder::ALL.get(row).copied() {
                self.switch_folder(folder);
            }
            return;
        }

        let list = inner(panes[1]);
        if !rect_contains(list, mouse.column, mouse.row) {
            return;
        }

        let row = ((mouse.row - list.y) / ITEM_HEIGHT) as usize + self.list_state.offset();
        let selected = {
            let view = self.mailbox.view(self.session.folder());
            match view.get(row) {
                Some(email) => self.session.select(&view, &email.id),
                None => false,
            }
        };
        if selected {
            self.dispatch(Command::Open);
        }
    }
}
