//! `kirana-app`
//!
//! **Responsibility:** The view controller.
//!
//! Owns all mutable application state as one explicit container with pure
//! event transitions, coordinates the orchestration operations as tracked
//! cancellable tasks, and adapts the media-capture and settings-store
//! collaborators. The presentation layer reads [`state::AppState`] and feeds
//! [`controller::UserAction`]s back in; nothing else crosses the boundary.

pub mod controller;
pub mod media;
pub mod settings;
pub mod state;

pub use controller::{Controller, UserAction};
pub use media::{MediaError, MediaPayload, VoiceRecorder};
pub use settings::{FileSettingsStore, InMemorySettingsStore, SettingsStore, Theme};
pub use state::{AppEvent, AppState, Mode, Operation, SettledPayload};
