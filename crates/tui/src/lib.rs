//! `kirana-tui`
//!
//! **Responsibility:** The presentation layer.
//!
//! A ratatui shell over [`kirana_app`]: five navigable panels, a slide-in
//! orchestration-log panel, a transient processing indicator, and theme /
//! language controls. The shell renders [`kirana_app::AppState`] and turns
//! key presses into [`kirana_app::UserAction`]s; it owns no domain state of
//! its own beyond panel chrome.

pub mod palette;
pub mod render;
pub mod shell;

pub use palette::Palette;
pub use shell::{Chrome, KeyOutcome, UiShell};
