//! A chessboard with drag-and-drop moves, undo/redo of recorded turns and
//! a promotion picker. No rules engine: moves are recorded, not validated.

pub mod domain;
pub mod models;
pub mod settings;
pub mod ui;

#[cfg(feature = "gui")]
pub mod app;

pub use settings::Settings;
