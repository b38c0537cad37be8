//! Presentation boundary.
//!
//! The crate does not draw anything. It hands the view layer a
//! [`viewmodel::UIViewModel`] snapshot after every state change that needs a
//! re-render, and the view layer turns user input back into
//! [`Event`](crate::app::Event)s.

pub mod viewmodel;

pub use viewmodel::UIViewModel;
