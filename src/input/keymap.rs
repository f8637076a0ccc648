//! Keymap
//!
//! Vim-style key bindings mapped to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::modes::Mode;

/// Commands produced by the key router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Navigation
    NavigateDown,
    NavigateUp,
    JumpTop,
    JumpBottom,

    // Message actions
    Open,
    Delete,
    Reply,
    Compose,
    ToggleStar,
    Archive,
    Search,

    // Mode and surfaces
    EnterVisual,
    Escape,
    OpenPalette,
    Help,
    TogglePanel,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NavigateDown => "navigate-down",
            Self::NavigateUp => "navigate-up",
            Self::JumpTop => "jump-top",
            Self::JumpBottom => "jump-bottom",
            Self::Open => "open",
            Self::Delete => "delete",
            Self::Reply => "reply",
            Self::Compose => "compose",
            Self::ToggleStar => "toggle-star",
            Self::Archive => "archive",
            Self::Search => "search",
            Self::EnterVisual => "enter-visual",
            Self::Escape => "escape",
            Self::OpenPalette => "open-palette",
            Self::Help => "help",
            Self::TogglePanel => "toggle-panel",
        }
    }
}

fn has_command_modifier(mods: KeyModifiers) -> bool {
    mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Bindings active in every mode
pub fn global_command(mode: Mode, key: KeyEvent) -> Option<Command> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('k') | KeyCode::Char('K'), m)
            if m.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER) =>
        {
            Some(Command::OpenPalette)
        }
        (KeyCode::Esc, _) => Some(Command::Escape),
        (KeyCode::Char('?'), m) if mode == Mode::Normal && !has_command_modifier(m) => Some(Command::Help),
        _ => None,
    }
}

/// Map key event to command in normal mode
pub fn normal_mode_command(key: KeyEvent) -> Option<Command> {
    if has_command_modifier(key.modifiers) {
        return None;
    }

    let command = match key.code {
        KeyCode::Char('j') => Command::NavigateDown,
        KeyCode::Char('k') => Command::NavigateUp,
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::SHIFT) => Command::JumpBottom,
        KeyCode::Char('g') => Command::JumpTop,
        KeyCode::Char('G') => Command::JumpBottom,
        KeyCode::Enter => Command::Open,
        KeyCode::Char('d') => Command::Delete,
        KeyCode::Char('r') => Command::Reply,
        KeyCode::Char('c') => Command::Compose,
        KeyCode::Char('s') => Command::ToggleStar,
        KeyCode::Char('e') => Command::Archive,
        KeyCode::Char('/') => Command::Search,
        KeyCode::Char('v') => Command::EnterVisual,
        KeyCode::Char('a') => Command::TogglePanel,
        _ => return None,
    };
    Some(command)
}

/// Map key event to command in visual mode
pub fn visual_mode_command(key: KeyEvent) -> Option<Command> {
    if has_command_modifier(key.modifiers) {
        return None;
    }

    match key.code {
        KeyCode::Char('j') => Some(Command::NavigateDown),
        KeyCode::Char('k') => Some(Command::NavigateUp),
        KeyCode::Char('d') => Some(Command::Delete),
        KeyCode::Char('e') => Some(Command::Archive),
        _ => None,
    }
}

/// Ctrl+C leaves the application from any mode
pub fn is_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Editing actions for text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    InsertChar(char),
    Newline,
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,
    NextField,
    PrevField,
    Submit,
    None,
}

/// Map key event to action in text input surfaces
pub fn text_input_action(key: KeyEvent) -> TextAction {
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => TextAction::Submit,
        (KeyCode::Enter, _) => TextAction::Newline,
        (KeyCode::Tab, _) => TextAction::NextField,
        (KeyCode::BackTab, _) => TextAction::PrevField,
        (KeyCode::Backspace, _) => TextAction::DeleteChar,
        (KeyCode::Delete, _) => TextAction::DeleteCharForward,
        (KeyCode::Left, _) => TextAction::CursorLeft,
        (KeyCode::Right, _) => TextAction::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => TextAction::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => TextAction::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => TextAction::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => TextAction::InsertChar(c),
        _ => TextAction::None,
    }
}

/// Actions inside list-like overlays (palette, help)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Up,
    Down,
    Top,
    Bottom,
    Select,
    Close,
    None,
}

/// Map key event to action in the help overlay
pub fn help_action(key: KeyEvent) -> OverlayAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) | (KeyCode::Char('?'), _) => OverlayAction::Close,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => OverlayAction::Down,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => OverlayAction::Up,
        (KeyCode::Char('g'), KeyModifiers::NONE) => OverlayAction::Top,
        (KeyCode::Char('G'), _) => OverlayAction::Bottom,
        _ => OverlayAction::None,
    }
}

/// Map key event to navigation in the command palette; `None` means text input
pub fn palette_action(key: KeyEvent) -> OverlayAction {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => OverlayAction::Close,
        (KeyCode::Enter, _) => OverlayAction::Select,
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => OverlayAction::Up,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => OverlayAction::Down,
        _ => OverlayAction::None,
    }
}
