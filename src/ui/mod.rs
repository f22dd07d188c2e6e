//! Presentation layer.
//!
//! Screens project domain outcomes into display state and render it;
//! nothing here reaches past the [`view_model::Dependencies`] seam.

pub mod events;
pub mod footer;
pub mod greeting;
pub mod header;
pub mod layout;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;
pub mod view_model;
