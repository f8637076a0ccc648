use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::controller::{Notice, Overlay};
use crate::input::keymap::{help_action, is_quit, palette_action, text_input_action, OverlayAction, TextAction};
use crate::input::{Command, KeyRouter};
use crate::ui::components::HelpScreen;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if is_quit(key) {
            tracing::info!("quit requested");
            self.should_quit = true;
            return Ok(());
        }

        match self.session.overlay() {
            Some(Overlay::Palette) => self.handle_palette_key(key),
            Some(Overlay::Help) => self.handle_help_key(key),
            None => self.handle_pane_key(key),
        }
        Ok(())
    }

    /// Route a command through the session and execute its effects
    pub(super) fn dispatch(&mut self, command: Command) {
        let before = self.session.overlay();
        let effects = {
            let view = self.mailbox.view(self.session.folder());
            self.session.apply(command, &view)
        };

        // overlays open fresh
        match self.session.overlay() {
            Some(Overlay::Palette) if before != Some(Overlay::Palette) => self.palette.reset(),
            Some(Overlay::Help) if before != Some(Overlay::Help) => self.help.home(),
            _ => {}
        }

        self.run_effects(effects);
    }

    fn handle_pane_key(&mut self, key: KeyEvent) {
        let mode = self.session.mode();
        if let Some(command) = KeyRouter::route(mode, key) {
            self.dispatch(command);
            return;
        }

        if mode.is_text_input() {
            self.handle_compose_key(key);
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        let action = text_input_action(key);
        let Some(form) = self.compose.as_mut() else {
            return;
        };

        if action != TextAction::Submit {
            form.apply(action);
            return;
        }

        match form.validate() {
            Ok(draft) => {
                let effects = self.session.send(draft);
                self.run_effects(effects);
            }
            Err(message) => self.notify(Notice::error(message)),
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        match palette_action(key) {
            OverlayAction::Close => self.dispatch(Command::Escape),
            OverlayAction::Up => self.palette.select_prev(),
            OverlayAction::Down => self.palette.select_next(),
            OverlayAction::Select => {
                let entry = self.palette.selected_entry();
                self.session.close_overlay();
                if let Some(entry) = entry {
                    tracing::debug!(id = entry.id, "palette entry chosen");
                    self.run_palette_action(entry.action);
                }
            }
            OverlayAction::Top | OverlayAction::Bottom | OverlayAction::None => {
                self.palette.edit(text_input_action(key));
            }
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max_scroll = HelpScreen::max_scroll(self.terminal_size);
        match help_action(key) {
            OverlayAction::Close => self.dispatch(Command::Escape),
            OverlayAction::Up => self.help.scroll_up(1),
            OverlayAction::Down => self.help.scroll_down(1, max_scroll),
            OverlayAction::Top => self.help.home(),
            OverlayAction::Bottom => self.help.end(max_scroll),
            OverlayAction::Select | OverlayAction::None => {}
        }
    }
}
