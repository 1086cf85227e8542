#![forbid(unsafe_code)]

//! List views: draggable lists, board event routing and configuration.
//!
//! # Role in Sortboard
//! `sortboard-list` is where host callbacks meet the engine. It turns
//! drag-over geometry into drop points, decides where the placeholder goes,
//! and keeps each list's reflow animator in step with the board.
//!
//! # Primary responsibilities
//! - **DraggableList**: per-list drag handlers, render plan and animator sync.
//! - **BoardView**: owns the board, routes [`DragEvent`]s to lists.
//! - **BoardConfig**: axis, pointer history and reflow settings, loadable
//!   from TOML/JSON with the `config` feature.

pub mod config;
pub mod error;
pub mod list;
pub mod slot;
pub mod view;

#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::BoardConfig;
pub use error::ViewError;
pub use list::DraggableList;
pub use slot::{RenderSlot, SlotKey};
pub use view::{BoardView, DragEvent, ViewOutcome};
