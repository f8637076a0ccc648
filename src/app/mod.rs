//! Application State
//!
//! Core application logic tying together mailbox, session, UI, and input.

mod actions;
pub mod config;
mod effects;
mod input;
mod mouse;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use ratatui::Frame;

use crate::ai::AiRequests;
use crate::controller::{Notice, Session};
use crate::mail::{seed, Email, Folder, Mailbox};
use crate::ui::components::{ComposeForm, HelpState, PaletteState};
use crate::ui::{Renderer, UiState};

pub use config::AppConfig;

pub struct App {
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub mailbox: Mailbox,
    pub session: Session,
    pub compose: Option<ComposeForm>,
    pub palette: PaletteState,
    pub help: HelpState,
    pub ai: AiRequests,
    pub list_state: ListState,
    pub terminal_size: Rect,
    pub notice: Option<(Notice, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, config_path: PathBuf, mailbox: Mailbox) -> Self {
        Self {
            ai: AiRequests::new(config.ai_delay()),
            config,
            config_path,
            mailbox,
            session: Session::new(),
            compose: None,
            palette: PaletteState::new(),
            help: HelpState::new(),
            list_state: ListState::default(),
            terminal_size: Rect::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Build the app from a config; the mailbox comes from a fixture file
    /// when one is given, otherwise from the built-in sample mail
    pub fn load(config: AppConfig, config_path: PathBuf, mailbox: Option<&Path>) -> Result<Self> {
        let mailbox = match mailbox.or(config.mailbox.as_deref()) {
            Some(path) => Mailbox::load(path)
                .with_context(|| format!("Failed to load mailbox {}", path.display()))?,
            None => Mailbox::new(seed::sample_emails()).context("Invalid sample mailbox")?,
        };
        tracing::info!(emails = mailbox.len(), "mailbox loaded");
        Ok(Self::new(config, config_path, mailbox))
    }

    /// Email under the cursor in the current folder
    pub fn current_email(&self) -> Option<&Email> {
        self.session
            .cursor_id()
            .and_then(|id| self.mailbox.view(self.session.folder()).find(id))
    }

    pub fn notify(&mut self, notice: Notice) {
        tracing::debug!(text = %notice.text, "notice");
        self.notice = Some((notice, Instant::now()));
    }

    /// Per-tick housekeeping: AI results and notice expiry
    pub fn tick(&mut self) {
        if self.ai.is_loading() {
            self.ai.poll();
        }

        let expired = self
            .notice
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() > self.config.notice_timeout());
        if expired {
            self.notice = None;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.terminal_size = frame.area();

        let folder = self.session.folder();
        let view = self.mailbox.view(folder);
        let emails: Vec<&Email> = view.iter().collect();
        let folders = Folder::ALL
            .iter()
            .map(|f| (*f, self.mailbox.badge_count(*f)))
            .collect();

        let mut state = UiState {
            mode: self.session.mode(),
            folder,
            folders,
            emails: &emails,
            cursor: self.session.cursor().index_in(&view),
            selection: self.session.selection(),
            ai: self.ai.status(),
            premium: self.config.ai.premium,
            layout: self.config.layout,
            panel_collapsed: self.session.panel_collapsed(),
            notice: self.notice.as_ref().map(|(n, _)| n),
            unread: self.mailbox.unread_count(Folder::Inbox),
            overlay: self.session.overlay(),
            compose: self.compose.as_ref(),
            palette: &self.palette,
            help: &self.help,
            list_state: &mut self.list_state,
        };

        Renderer::render(frame, &mut state);
    }
}
