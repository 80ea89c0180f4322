//! Error types for socket and query operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when communicating with the Hyprland compositor.
#[derive(Debug, Error)]
pub enum HyprError {
    /// The HYPRLAND_INSTANCE_SIGNATURE environment variable is not set
    #[error("HYPRLAND_INSTANCE_SIGNATURE not set - is Hyprland running?")]
    SignatureNotSet,

    /// No Unix socket exists at the expected path
    #[error("no socket found at {path}")]
    SocketNotFound { path: PathBuf },

    /// `connect()` was called on a socket that is already connected
    #[error("socket is already connected")]
    AlreadyConnected,

    /// The operation requires a connected socket
    #[error("socket is not connected")]
    NotConnected,

    /// Failed to connect to the socket
    #[error("failed to connect to {path}: {source}")]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The connection attempt did not complete within the timeout
    #[error("connection to {path} timed out")]
    ConnectTimeout { path: PathBuf },

    /// `wait()` elapsed without the socket becoming readable
    #[error("timed out waiting for socket data")]
    WaitTimeout,

    /// Failed to write to the socket
    #[error("failed to send: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Failed to read from the socket
    #[error("failed to receive: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The peer closed the connection
    #[error("connection closed by the compositor")]
    ConnectionClosed,

    /// Received bytes were not valid UTF-8
    #[error("received non-UTF-8 data: {0}")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),

    /// A command-socket reply could not be deserialized
    #[error("failed to deserialize reply: {0}")]
    DeserializeFailed(#[source] serde_json::Error),

    /// The compositor rejected a command
    #[error("compositor rejected command: {message}")]
    CommandFailed { message: String },
}
