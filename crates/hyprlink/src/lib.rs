//! # hyprlink
//!
//! A client library for the Hyprland compositor's IPC surface.
//!
//! Hyprland exposes two Unix sockets per running instance: a command socket
//! answering queries about current state, and an event socket broadcasting
//! state changes as they happen. hyprlink wraps both:
//!
//! - [`Instance`] attaches to a running compositor (usually via
//!   [`Instance::from_env`]) and answers queries with typed
//!   [`components`] — [`Window`](components::Window),
//!   [`Workspace`](components::Workspace), [`Monitor`](components::Monitor).
//! - [`Instance::watch`] runs a blocking loop over the event socket,
//!   decoding each notification into a typed payload and emitting it on the
//!   matching signal in [`Instance::signals`].
//!
//! ## Example
//!
//! ```no_run
//! use hyprlink::Instance;
//!
//! let instance = Instance::from_env()?;
//!
//! // Queries are always fresh; nothing is cached.
//! if let Some(window) = instance.active_window()? {
//!     println!("focused: {} ({})", window.title, window.wm_class);
//! }
//!
//! // React to events. Signals without observers are skipped before their
//! // payload is even decoded.
//! instance.signals.openwindow.connect(|_instance, event| {
//!     println!("new {} window on {}", event.window_class, event.workspace_name);
//! });
//! instance.watch()?;
//! # Ok::<(), hyprlink::HyprError>(())
//! ```
//!
//! ## Design
//!
//! The library is single-threaded and blocking by design. The watch loop's
//! only suspension point is a `poll(2)` readiness wait; decode, resolution
//! and observer callbacks all run to completion on the calling thread before
//! the next event line is touched. Per-event problems (unknown names,
//! undecodable payloads, vanished windows) are logged and skipped; only
//! transport failures end the watch.

pub mod components;
pub mod error;
pub mod event;
pub mod instance;
pub mod signal;
pub mod socket;

pub use error::HyprError;
pub use event::{DecodeError, EventKind, EventSignals, SPECIAL_WORKSPACE_ID};
pub use instance::Instance;
pub use signal::{ObserverId, Signal, SignalError};
pub use socket::{CommandSocket, EventSocket};
