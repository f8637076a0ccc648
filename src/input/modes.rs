//! Input Modes
//!
//! Modal state machine for the vim-style interface.

use crate::controller::selection::SelectionSet;

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// List navigation
    #[default]
    Normal,
    /// Compose surface open, keys go to text fields
    Insert,
    /// Multi-select
    Visual,
}

impl Mode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
        }
    }

    /// Check if mode accepts text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Insert)
    }
}

/// Current mode plus the VISUAL selection.
///
/// The selection is cleared on every transition into or out of VISUAL, so
/// outside VISUAL it is always empty.
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    mode: Mode,
    selection: SelectionSet,
}

impl ModeState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Only usable while VISUAL; other modes keep the selection empty
    pub fn selection_mut(&mut self) -> Option<&mut SelectionSet> {
        (self.mode == Mode::Visual).then_some(&mut self.selection)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == Mode::Visual || mode == Mode::Visual {
            self.selection.clear();
        }
        self.mode = mode;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(Mode::Normal);
    }

    pub fn to_insert(&mut self) {
        self.set_mode(Mode::Insert);
    }

    /// Enter VISUAL, seeding the selection with the cursor id if any
    pub fn to_visual(&mut self, seed: Option<&str>) {
        self.set_mode(Mode::Visual);
        if let Some(id) = seed {
            self.selection.insert(id);
        }
    }

    /// Take the selection and leave VISUAL
    pub fn take_selection(&mut self) -> Vec<String> {
        let ids = self.selection.to_vec();
        self.to_normal();
        ids
    }
}
