//! Application layer coordinating state, events, and the detail surface.
//!
//! This module sits between the view layer and the stores. It implements the
//! event-driven flow behind every screen.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Store Mutations → View Model → Render
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen selection
//! - [`selection`]: Detail surface state machine
//! - [`state`]: Central application state and view model computation

pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use selection::{DetailCoordinator, DetailState};
pub use state::AppState;
