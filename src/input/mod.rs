//! Input Module
//!
//! Handles keyboard input with vim-style modal editing.

pub mod handler;
pub mod keymap;
pub mod modes;

// Re-exports
pub use handler::KeyRouter;
pub use keymap::Command;
pub use modes::{Mode, ModeState};
