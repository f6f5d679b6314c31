//! UI layer for the block editor: app shell, block cards, and theme lookups.

pub mod app;
pub mod theme;

pub use app::{BlockEditorApp, APP_TITLE};
