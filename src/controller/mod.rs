//! Controller
//!
//! Modal navigation state and the dispatcher that turns commands into state
//! transitions plus a list of effects. Effects are executed by the caller, so
//! everything here runs without a terminal.

pub mod cursor;
pub mod selection;

use crate::input::{Command, Mode, ModeState};
use crate::mail::{Draft, Email, Folder, Mutation, OrderedView};

use self::cursor::ListCursor;
use self::selection::SelectionSet;

/// Surfaces drawn over the panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Palette,
    Help,
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

/// Initial compose field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub to: String,
    pub subject: String,
}

/// Side effects requested by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Mutate(Mutation),
    Notify(Notice),
    OpenCompose(Prefill),
    CloseCompose,
    Deliver(Draft),
    Search,
}

/// Per-session navigation state
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: ModeState,
    cursor: ListCursor,
    folder: Folder,
    overlay: Option<Overlay>,
    panel_collapsed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn selection(&self) -> &SelectionSet {
        self.mode.selection()
    }

    pub fn cursor(&self) -> &ListCursor {
        &self.cursor
    }

    pub fn cursor_id(&self) -> Option<&str> {
        self.cursor.id()
    }

    pub fn folder(&self) -> Folder {
        self.folder
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Re-validate the cursor after the mailbox or folder changed
    pub fn reconcile(&mut self, view: &OrderedView<'_>) {
        self.cursor.reconcile(view);
    }

    /// Switch folders; nothing is selected in the new folder
    pub fn set_folder(&mut self, folder: Folder) {
        if self.mode() == Mode::Visual {
            self.mode.to_normal();
        }
        self.folder = folder;
        self.cursor.clear();
        tracing::info!(folder = folder.as_str(), "folder changed");
    }

    /// Point the cursor at an id in the current view
    pub fn select(&mut self, view: &OrderedView<'_>, id: &str) -> bool {
        self.cursor.select_id(view, id)
    }

    fn current<'a>(&self, view: &OrderedView<'a>) -> Option<&'a Email> {
        self.cursor.id().and_then(|id| view.find(id))
    }

    /// Apply one command, returning the effects the caller must execute
    pub fn apply(&mut self, command: Command, view: &OrderedView<'_>) -> Vec<Effect> {
        let mode = self.mode();
        if !allowed(mode, command) {
            tracing::debug!(command = command.name(), mode = mode.indicator(), "ignored");
            return Vec::new();
        }
        tracing::debug!(command = command.name(), mode = mode.indicator(), "apply");

        match command {
            Command::NavigateDown => {
                let moved = self.cursor.next(view);
                self.accumulate(moved);
                Vec::new()
            }
            Command::NavigateUp => {
                let moved = self.cursor.prev(view);
                self.accumulate(moved);
                Vec::new()
            }
            Command::JumpTop => {
                self.cursor.first(view);
                Vec::new()
            }
            Command::JumpBottom => {
                self.cursor.last(view);
                Vec::new()
            }
            Command::Open => self.open(view),
            Command::Delete => self.move_emails(view, Folder::Trash),
            Command::Archive => self.move_emails(view, Folder::Archive),
            Command::ToggleStar => self.toggle_star(view),
            Command::Reply => self.reply(view),
            Command::Compose => {
                self.mode.to_insert();
                vec![Effect::OpenCompose(Prefill::default())]
            }
            Command::Search => vec![Effect::Search],
            Command::EnterVisual => {
                let seed = self.cursor.id().map(str::to_string);
                self.mode.to_visual(seed.as_deref());
                Vec::new()
            }
            Command::Escape => self.escape(),
            Command::OpenPalette => {
                self.overlay = Some(Overlay::Palette);
                Vec::new()
            }
            Command::Help => {
                self.overlay = Some(Overlay::Help);
                Vec::new()
            }
            Command::TogglePanel => {
                self.panel_collapsed = !self.panel_collapsed;
                Vec::new()
            }
        }
    }

    /// Finish the compose surface with a validated draft
    pub fn send(&mut self, draft: Draft) -> Vec<Effect> {
        if self.mode() != Mode::Insert {
            return Vec::new();
        }
        self.mode.to_normal();
        vec![
            Effect::Deliver(draft),
            Effect::Notify(Notice::success("Email sent successfully!")),
            Effect::CloseCompose,
        ]
    }

    fn accumulate(&mut self, moved: Option<String>) {
        let (Some(id), Some(selection)) = (moved, self.mode.selection_mut()) else {
            return;
        };
        selection.insert(&id);
    }

    fn open(&mut self, view: &OrderedView<'_>) -> Vec<Effect> {
        match self.current(view) {
            Some(email) if !email.is_read => vec![Effect::Mutate(Mutation::MarkRead { id: email.id.clone() })],
            _ => Vec::new(),
        }
    }

    fn move_emails(&mut self, view: &OrderedView<'_>, folder: Folder) -> Vec<Effect> {
        if self.mode() == Mode::Visual && !self.selection().is_empty() {
            let ids = self.mode.take_selection();
            let notice = match folder {
                Folder::Trash => format!("{} emails moved to trash", ids.len()),
                _ => format!("{} emails archived", ids.len()),
            };
            return vec![
                Effect::Mutate(Mutation::Move { ids, folder }),
                Effect::Notify(Notice::success(notice)),
            ];
        }

        let Some(email) = self.current(view) else {
            return Vec::new();
        };
        let notice = match folder {
            Folder::Trash => "Email moved to trash",
            _ => "Email archived",
        };
        vec![
            Effect::Mutate(Mutation::Move { ids: vec![email.id.clone()], folder }),
            Effect::Notify(Notice::success(notice)),
        ]
    }

    fn toggle_star(&mut self, view: &OrderedView<'_>) -> Vec<Effect> {
        match self.current(view) {
            Some(email) => vec![Effect::Mutate(Mutation::SetStarred {
                id: email.id.clone(),
                starred: !email.is_starred,
            })],
            None => Vec::new(),
        }
    }

    fn reply(&mut self, view: &OrderedView<'_>) -> Vec<Effect> {
        let Some(email) = self.current(view) else {
            return Vec::new();
        };
        let prefill = Prefill {
            to: email.from.email.clone(),
            subject: reply_subject(&email.subject),
        };
        self.mode.to_insert();
        vec![Effect::OpenCompose(prefill)]
    }

    fn escape(&mut self) -> Vec<Effect> {
        if self.overlay.take().is_some() {
            return Vec::new();
        }

        match self.mode() {
            Mode::Visual => {
                self.mode.to_normal();
                Vec::new()
            }
            Mode::Insert => {
                self.mode.to_normal();
                vec![Effect::CloseCompose]
            }
            Mode::Normal => {
                self.cursor.clear();
                Vec::new()
            }
        }
    }
}

/// Commands that make sense in each mode; everything else is a silent no-op
fn allowed(mode: Mode, command: Command) -> bool {
    use Command::*;

    match command {
        Escape | OpenPalette | Help | TogglePanel => true,
        NavigateDown | NavigateUp | JumpTop | JumpBottom | Delete | Archive | Search => mode != Mode::Insert,
        Open | Reply | Compose | ToggleStar | EnterVisual => mode == Mode::Normal,
    }
}

fn reply_subject(subject: &str) -> String {
    let already = subject
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("re:"));
    if already {
        subject.to_string()
    } else {
        format!("Re: {}", subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::seed::email;
    use crate::mail::Mailbox;
    use proptest::prelude::*;

    fn mailbox(ids: &[&str]) -> Mailbox {
        Mailbox::new(ids.iter().map(|id| email(id, Folder::Inbox)).collect()).unwrap()
    }

    /// Apply a command and run its mailbox mutations, like the app does
    fn run(session: &mut Session, mb: &mut Mailbox, command: Command) -> Vec<Effect> {
        let effects = session.apply(command, &mb.view(session.folder()));
        for effect in &effects {
            if let Effect::Mutate(m) = effect {
                mb.apply(m);
            }
        }
        session.reconcile(&mb.view(session.folder()));
        effects
    }

    fn ids(mb: &Mailbox, folder: Folder) -> Vec<String> {
        mb.view(folder).iter().map(|e| e.id.clone()).collect()
    }

    fn selection(session: &Session) -> Vec<&str> {
        session.selection().iter().collect()
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.cursor_id(), None);
        assert!(session.selection().is_empty());
        assert_eq!(session.folder(), Folder::Inbox);
        assert_eq!(session.overlay(), None);
    }

    #[test]
    fn test_navigate_without_cursor_is_noop() {
        let mut mb = mailbox(&["A", "B"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::NavigateDown);
        assert_eq!(s.cursor_id(), None);
        run(&mut s, &mut mb, Command::NavigateUp);
        assert_eq!(s.cursor_id(), None);
    }

    #[test]
    fn test_navigation_at_ends_is_noop() {
        let mut mb = mailbox(&["A", "B"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::NavigateUp);
        assert_eq!(s.cursor_id(), Some("A"));

        run(&mut s, &mut mb, Command::JumpBottom);
        run(&mut s, &mut mb, Command::NavigateDown);
        assert_eq!(s.cursor_id(), Some("B"));
    }

    #[test]
    fn test_visual_delete_scenario() {
        let mut mb = mailbox(&["A", "B", "C", "D"]);
        let mut s = Session::new();

        run(&mut s, &mut mb, Command::JumpTop);
        assert_eq!(s.cursor_id(), Some("A"));

        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::NavigateDown);
        assert_eq!(s.cursor_id(), Some("C"));

        run(&mut s, &mut mb, Command::EnterVisual);
        assert_eq!(s.mode(), Mode::Visual);
        assert_eq!(selection(&s), vec!["C"]);

        run(&mut s, &mut mb, Command::NavigateDown);
        assert_eq!(s.cursor_id(), Some("D"));
        assert_eq!(selection(&s), vec!["C", "D"]);

        let effects = run(&mut s, &mut mb, Command::Delete);
        assert_eq!(ids(&mb, Folder::Inbox), vec!["A", "B"]);
        assert_eq!(ids(&mb, Folder::Trash), vec!["C", "D"]);
        assert_eq!(s.mode(), Mode::Normal);
        assert!(s.selection().is_empty());
        assert!(effects.contains(&Effect::Notify(Notice::success("2 emails moved to trash"))));
        assert_eq!(s.cursor_id(), Some("B"));
    }

    #[test]
    fn test_visual_archive_moves_exactly_selection() {
        let mut mb = mailbox(&["A", "B", "C", "D", "E"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::EnterVisual);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::NavigateDown);
        assert_eq!(selection(&s), vec!["B", "C", "D"]);

        let effects = run(&mut s, &mut mb, Command::Archive);
        assert_eq!(
            effects[0],
            Effect::Mutate(Mutation::Move {
                ids: vec!["B".into(), "C".into(), "D".into()],
                folder: Folder::Archive,
            })
        );
        assert_eq!(ids(&mb, Folder::Archive), vec!["B", "C", "D"]);
        assert_eq!(ids(&mb, Folder::Inbox), vec!["A", "E"]);
        assert_eq!(s.mode(), Mode::Normal);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn test_revisits_do_not_duplicate() {
        let mut mb = mailbox(&["A", "B", "C"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::EnterVisual);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::NavigateUp);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::NavigateUp);
        assert_eq!(selection(&s), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_jumps_do_not_accumulate_in_visual() {
        let mut mb = mailbox(&["A", "B", "C", "D"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::NavigateDown);
        run(&mut s, &mut mb, Command::EnterVisual);

        run(&mut s, &mut mb, Command::JumpBottom);
        assert_eq!(s.cursor_id(), Some("D"));
        assert_eq!(selection(&s), vec!["B"]);

        run(&mut s, &mut mb, Command::JumpTop);
        assert_eq!(s.cursor_id(), Some("A"));
        assert_eq!(selection(&s), vec!["B"]);
    }

    #[test]
    fn test_enter_visual_without_cursor() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::EnterVisual);
        assert_eq!(s.mode(), Mode::Visual);
        assert!(s.selection().is_empty());

        // nothing selected and no cursor: delete is a no-op
        let effects = run(&mut s, &mut mb, Command::Delete);
        assert!(effects.is_empty());
        assert_eq!(s.mode(), Mode::Visual);
        assert_eq!(ids(&mb, Folder::Inbox), vec!["A"]);
    }

    #[test]
    fn test_normal_delete_affects_only_cursor() {
        let mut mb = mailbox(&["A", "B", "C"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::NavigateDown);

        let effects = run(&mut s, &mut mb, Command::Delete);
        assert_eq!(ids(&mb, Folder::Trash), vec!["B"]);
        assert_eq!(ids(&mb, Folder::Inbox), vec!["A", "C"]);
        assert!(effects.contains(&Effect::Notify(Notice::success("Email moved to trash"))));
        assert_eq!(s.cursor_id(), Some("C"));
    }

    #[test]
    fn test_normal_archive_single() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        let effects = run(&mut s, &mut mb, Command::Archive);
        assert!(effects.contains(&Effect::Notify(Notice::success("Email archived"))));
        assert_eq!(ids(&mb, Folder::Archive), vec!["A"]);
        assert_eq!(s.cursor_id(), None);
    }

    #[test]
    fn test_delete_without_cursor_is_noop() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        assert!(run(&mut s, &mut mb, Command::Delete).is_empty());
        assert!(run(&mut s, &mut mb, Command::Archive).is_empty());
        assert!(run(&mut s, &mut mb, Command::ToggleStar).is_empty());
        assert!(run(&mut s, &mut mb, Command::Reply).is_empty());
        assert!(run(&mut s, &mut mb, Command::Open).is_empty());
        assert_eq!(s.mode(), Mode::Normal);
    }

    #[test]
    fn test_open_marks_read_once() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);

        let effects = run(&mut s, &mut mb, Command::Open);
        assert_eq!(effects, vec![Effect::Mutate(Mutation::MarkRead { id: "A".into() })]);
        assert!(mb.get("A").unwrap().is_read);

        assert!(run(&mut s, &mut mb, Command::Open).is_empty());
    }

    #[test]
    fn test_toggle_star() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::ToggleStar);
        assert!(mb.get("A").unwrap().is_starred);
        run(&mut s, &mut mb, Command::ToggleStar);
        assert!(!mb.get("A").unwrap().is_starred);
    }

    #[test]
    fn test_reply_prefills_and_enters_insert() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);

        let effects = run(&mut s, &mut mb, Command::Reply);
        assert_eq!(
            effects,
            vec![Effect::OpenCompose(Prefill {
                to: "A@example.com".into(),
                subject: "Re: Subject A".into(),
            })]
        );
        assert_eq!(s.mode(), Mode::Insert);
    }

    #[test]
    fn test_reply_subject_not_doubled() {
        assert_eq!(reply_subject("Hello"), "Re: Hello");
        assert_eq!(reply_subject("Re: Hello"), "Re: Hello");
        assert_eq!(reply_subject("RE: Hello"), "RE: Hello");
        assert_eq!(reply_subject("Re"), "Re: Re");
    }

    #[test]
    fn test_compose_then_escape() {
        let mut mb = mailbox(&[]);
        let mut s = Session::new();

        let effects = run(&mut s, &mut mb, Command::Compose);
        assert_eq!(effects, vec![Effect::OpenCompose(Prefill::default())]);
        assert_eq!(s.mode(), Mode::Insert);

        let effects = run(&mut s, &mut mb, Command::Escape);
        assert_eq!(effects, vec![Effect::CloseCompose]);
        assert_eq!(s.mode(), Mode::Normal);
    }

    #[test]
    fn test_insert_ignores_list_commands() {
        let mut mb = mailbox(&["A", "B"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::Compose);

        for command in [Command::NavigateDown, Command::Delete, Command::EnterVisual, Command::Compose] {
            assert!(run(&mut s, &mut mb, command).is_empty());
        }
        assert_eq!(s.cursor_id(), Some("A"));
        assert_eq!(s.mode(), Mode::Insert);
    }

    #[test]
    fn test_escape_visual_clears_selection() {
        let mut mb = mailbox(&["A", "B"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::EnterVisual);
        run(&mut s, &mut mb, Command::NavigateDown);

        run(&mut s, &mut mb, Command::Escape);
        assert_eq!(s.mode(), Mode::Normal);
        assert!(s.selection().is_empty());
        assert_eq!(s.cursor_id(), Some("B"));
    }

    #[test]
    fn test_escape_in_normal_deselects() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::Escape);
        assert_eq!(s.cursor_id(), None);
        assert!(run(&mut s, &mut mb, Command::Escape).is_empty());
    }

    #[test]
    fn test_escape_closes_overlay_first() {
        let mut mb = mailbox(&["A"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::Help);
        assert_eq!(s.overlay(), Some(Overlay::Help));

        run(&mut s, &mut mb, Command::Escape);
        assert_eq!(s.overlay(), None);
        assert_eq!(s.cursor_id(), Some("A"));

        run(&mut s, &mut mb, Command::Compose);
        run(&mut s, &mut mb, Command::OpenPalette);
        let effects = run(&mut s, &mut mb, Command::Escape);
        assert!(effects.is_empty());
        assert_eq!(s.mode(), Mode::Insert);
        assert_eq!(run(&mut s, &mut mb, Command::Escape), vec![Effect::CloseCompose]);
    }

    #[test]
    fn test_surfaces_leave_modal_state_alone() {
        let mut mb = mailbox(&["A", "B"]);
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::EnterVisual);

        assert_eq!(run(&mut s, &mut mb, Command::Search), vec![Effect::Search]);
        run(&mut s, &mut mb, Command::TogglePanel);
        assert!(s.panel_collapsed());
        run(&mut s, &mut mb, Command::OpenPalette);
        assert_eq!(s.overlay(), Some(Overlay::Palette));

        assert_eq!(s.mode(), Mode::Visual);
        assert_eq!(selection(&s), vec!["A"]);
        assert_eq!(s.cursor_id(), Some("A"));
    }

    #[test]
    fn test_send_returns_to_normal() {
        let mut s = Session::new();
        let draft = Draft { to: "x@y.z".into(), subject: "s".into(), body: "b".into() };
        assert!(s.send(draft.clone()).is_empty());

        let mut mb = mailbox(&[]);
        run(&mut s, &mut mb, Command::Compose);
        let effects = s.send(draft.clone());
        assert_eq!(effects[0], Effect::Deliver(draft));
        assert!(effects.contains(&Effect::CloseCompose));
        assert_eq!(s.mode(), Mode::Normal);
    }

    #[test]
    fn test_set_folder_leaves_visual_and_clears_cursor() {
        let mut mb = Mailbox::new(vec![email("A", Folder::Inbox), email("B", Folder::Archive)]).unwrap();
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpTop);
        run(&mut s, &mut mb, Command::EnterVisual);

        s.set_folder(Folder::Archive);
        assert_eq!(s.folder(), Folder::Archive);
        assert_eq!(s.mode(), Mode::Normal);
        assert!(s.selection().is_empty());
        assert_eq!(s.cursor_id(), None);

        run(&mut s, &mut mb, Command::JumpTop);
        assert_eq!(s.cursor_id(), Some("B"));
    }

    #[test]
    fn test_folder_switch_does_not_pick_an_email() {
        let mut mb = Mailbox::new(vec![
            email("A", Folder::Inbox),
            email("B", Folder::Inbox),
            email("X", Folder::Archive),
        ])
        .unwrap();
        let mut s = Session::new();
        run(&mut s, &mut mb, Command::JumpBottom);
        assert_eq!(s.cursor_id(), Some("B"));

        s.set_folder(Folder::Archive);
        assert_eq!(s.cursor_id(), None);

        // list actions have nothing to act on until the user picks a row
        run(&mut s, &mut mb, Command::Delete);
        assert_eq!(mb.view(Folder::Archive).len(), 1);
        assert!(mb.view(Folder::Trash).is_empty());
    }

    proptest! {
        #[test]
        fn prop_visual_accumulates_n_plus_one(len in 1usize..20, start in 0usize..20, steps in 0usize..25) {
            let start = start % len;
            let names: Vec<String> = (0..len).map(|i| format!("m{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut mb = mailbox(&refs);
            let mut s = Session::new();
            s.select(&mb.view(Folder::Inbox), &names[start]);

            run(&mut s, &mut mb, Command::EnterVisual);
            for _ in 0..steps {
                run(&mut s, &mut mb, Command::NavigateDown);
            }

            let expected = 1 + steps.min(len - 1 - start);
            prop_assert_eq!(s.selection().len(), expected);
        }

        #[test]
        fn prop_escape_moves_toward_normal(commands in proptest::collection::vec(0usize..16, 0..30)) {
            const ALL: [Command; 16] = [
                Command::NavigateDown, Command::NavigateUp, Command::JumpTop, Command::JumpBottom,
                Command::Open, Command::Delete, Command::Reply, Command::Compose,
                Command::ToggleStar, Command::Archive, Command::Search, Command::EnterVisual,
                Command::Escape, Command::OpenPalette, Command::Help, Command::TogglePanel,
            ];
            let mut mb = mailbox(&["A", "B", "C", "D"]);
            let mut s = Session::new();
            for i in commands {
                run(&mut s, &mut mb, ALL[i]);
            }

            let before = s.mode();
            let overlay_before = s.overlay();
            let effects = run(&mut s, &mut mb, Command::Escape);
            if overlay_before.is_none() {
                prop_assert_eq!(s.mode(), Mode::Normal);
            } else {
                prop_assert_eq!(s.mode(), before);
            }
            if s.mode() == Mode::Normal {
                prop_assert!(s.selection().is_empty());
            }
            if before == Mode::Insert && s.mode() == Mode::Normal {
                prop_assert!(effects.contains(&Effect::CloseCompose));
            }
            if let Some(id) = s.cursor_id() {
                prop_assert!(mb.view(Folder::Inbox).position(id).is_some());
            }
        }
    }
}
