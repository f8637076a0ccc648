//! UI Components
//!
//! TUI widgets for the mail client.

pub mod compose;
pub mod help;
pub mod list;
pub mod palette;
pub mod popup;
pub mod reading;
pub mod sidebar;
pub mod statusline;

// Re-exports
pub use compose::{ComposeForm, ComposeWidget};
pub use help::{HelpScreen, HelpState};
pub use list::{EmailList, EmptyState};
pub use palette::{PaletteAction, PaletteState, PaletteWidget};
pub use reading::ReadingPane;
pub use sidebar::Sidebar;
pub use statusline::{HelpBar, StatusLine};
