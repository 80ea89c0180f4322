//! The event-stream protocol engine.
//!
//! Hyprland broadcasts state changes on its event socket as newline-delimited
//! text lines of the form `<event-name>>><payload>`. This module supplies the
//! pieces the watch loop in [`crate::instance::Instance::watch`] is built
//! from:
//!
//! - [`payload`]: the closed [`EventKind`] vocabulary and one typed payload
//!   struct (with its decoder) per event kind;
//! - [`signals`]: the [`EventSignals`] collection, one
//!   [`Signal`](crate::signal::Signal) per event kind.

pub mod payload;
pub mod signals;

pub use payload::{DecodeError, EventKind, SPECIAL_WORKSPACE_ID};
pub use signals::EventSignals;
