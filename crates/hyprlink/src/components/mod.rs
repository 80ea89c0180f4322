//! Typed read-only views of compositor entities.
//!
//! Each component is a snapshot of one entity — a window, workspace or
//! monitor — deserialized from a command-socket query reply. Components are
//! plain data: nothing is cached or kept in sync, and every relational
//! lookup (`Window::workspace`, `Monitor::workspaces`, …) issues a fresh
//! query through the [`Instance`](crate::instance::Instance) passed to it.

mod monitor;
mod window;
mod workspace;

pub use monitor::Monitor;
pub use window::{Window, WorkspaceRef};
pub use workspace::Workspace;
