//! Unix socket transport for Hyprland's IPC surface.
//!
//! Hyprland exposes two stream sockets per instance, both under
//! `/tmp/hypr/<instance signature>/`:
//!
//! - `.socket2.sock` — the event socket. A one-way broadcast of
//!   newline-delimited notifications, held open for the lifetime of a watch
//!   session ([`EventSocket`]).
//! - `.socket.sock` — the command socket. A request/reply channel that is
//!   connected fresh for every command and closed after the single reply
//!   ([`CommandSocket`]).
//!
//! The transport is deliberately synchronous: readiness is awaited with
//! `poll(2)` and reads drain a non-blocking descriptor until it would block.

use std::io::{ErrorKind, Read, Write};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::fs::FileTypeExt;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use nix::sys::socket::{connect, socket, AddressFamily, SockFlag, SockType, UnixAddr};
use tracing::trace;

use crate::error::HyprError;

/// Default timeout for connecting either socket and for command replies.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

const READ_CHUNK: usize = 4096;

/// Verifies that `path` exists and is a Unix socket.
fn ensure_socket_path(path: &Path) -> Result<(), HyprError> {
    let is_socket = std::fs::metadata(path)
        .map(|meta| meta.file_type().is_socket())
        .unwrap_or(false);
    if is_socket {
        Ok(())
    } else {
        Err(HyprError::SocketNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn poll_timeout(timeout: Option<Duration>) -> PollTimeout {
    match timeout {
        None => PollTimeout::NONE,
        Some(t) => i32::try_from(t.as_millis())
            .ok()
            .and_then(|millis| PollTimeout::try_from(millis).ok())
            .unwrap_or(PollTimeout::MAX),
    }
}

/// Polls `fd` for `events`, returning whether it became ready in time.
fn wait_fd(
    fd: BorrowedFd<'_>,
    events: PollFlags,
    timeout: Option<Duration>,
) -> Result<bool, HyprError> {
    let mut fds = [PollFd::new(fd, events)];
    loop {
        match poll(&mut fds, poll_timeout(timeout)) {
            Ok(0) => return Ok(false),
            Ok(_) => return Ok(true),
            Err(Errno::EINTR) => continue,
            Err(err) => return Err(HyprError::ReceiveFailed(err.into())),
        }
    }
}

/// Connects a non-blocking Unix stream socket to `path`, waiting at most
/// `timeout` for the connection to complete.
///
/// The returned stream stays in non-blocking mode.
fn connect_stream(path: &Path, timeout: Option<Duration>) -> Result<UnixStream, HyprError> {
    let failed = |source: std::io::Error| HyprError::ConnectionFailed {
        path: path.to_path_buf(),
        source,
    };

    let fd = socket(
        AddressFamily::Unix,
        SockType::Stream,
        SockFlag::SOCK_NONBLOCK | SockFlag::SOCK_CLOEXEC,
        None,
    )
    .map_err(|err| failed(err.into()))?;
    let addr = UnixAddr::new(path).map_err(|err| failed(err.into()))?;

    match connect(fd.as_raw_fd(), &addr) {
        Ok(()) => {}
        Err(Errno::EINPROGRESS) | Err(Errno::EAGAIN) => {
            if !wait_fd(fd.as_fd(), PollFlags::POLLOUT, timeout)? {
                return Err(HyprError::ConnectTimeout {
                    path: path.to_path_buf(),
                });
            }
            // Re-issuing the connect reports how the in-flight attempt ended.
            match connect(fd.as_raw_fd(), &addr) {
                Ok(()) | Err(Errno::EISCONN) => {}
                Err(err) => return Err(failed(err.into())),
            }
        }
        Err(err) => return Err(failed(err.into())),
    }

    Ok(UnixStream::from(fd))
}

/// Interface to Hyprland's event socket.
///
/// The event socket broadcasts one notification per line for the lifetime of
/// the compositor session. It is connected once and held open; the watch loop
/// in [`crate::instance::Instance::watch`] owns it for the whole session.
///
/// A connected `EventSocket` releases its descriptor when dropped, so the
/// socket ends up closed on every exit path, including panics unwinding
/// through observer callbacks. [`EventSocket::close`] exists to make the
/// common paths explicit; calling it twice without reconnecting is an error.
#[derive(Debug)]
pub struct EventSocket {
    path: PathBuf,
    stream: Option<UnixStream>,
}

impl EventSocket {
    /// Creates an event socket handle for the socket file at `path`.
    ///
    /// Fails with [`HyprError::SocketNotFound`] if `path` is missing or not a
    /// Unix socket — the compositor is not running, or the instance signature
    /// is wrong.
    pub fn new(path: PathBuf) -> Result<Self, HyprError> {
        ensure_socket_path(&path)?;
        Ok(Self { path, stream: None })
    }

    /// The socket file this handle points at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the socket currently holds a live connection.
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Connects to the event socket, waiting at most `timeout` (indefinitely
    /// if `None`) for the connection to complete.
    ///
    /// The stream is left in non-blocking mode so that [`EventSocket::read`]
    /// can drain it without stalling.
    pub fn connect(&mut self, timeout: Option<Duration>) -> Result<(), HyprError> {
        if self.stream.is_some() {
            return Err(HyprError::AlreadyConnected);
        }
        let stream = connect_stream(&self.path, timeout)?;
        trace!(path = %self.path.display(), "event socket connected");
        self.stream = Some(stream);
        Ok(())
    }

    /// Releases the connection.
    ///
    /// Fails with [`HyprError::NotConnected`] if there is nothing to close;
    /// a double close is a caller bug and is surfaced, not ignored.
    pub fn close(&mut self) -> Result<(), HyprError> {
        match self.stream.take() {
            Some(stream) => {
                drop(stream);
                trace!(path = %self.path.display(), "event socket closed");
                Ok(())
            }
            None => Err(HyprError::NotConnected),
        }
    }

    /// Writes the full byte sequence of `data` to the socket.
    pub fn send(&mut self, data: &str) -> Result<(), HyprError> {
        let stream = self.stream.as_mut().ok_or(HyprError::NotConnected)?;
        stream
            .write_all(data.as_bytes())
            .map_err(HyprError::SendFailed)
    }

    /// Blocks until the socket has data to read, or `timeout` elapses.
    ///
    /// A timeout is an error ([`HyprError::WaitTimeout`]), not success: the
    /// caller must treat it as "no data yet" and retry or abort.
    pub fn wait(&self, timeout: Option<Duration>) -> Result<(), HyprError> {
        let stream = self.stream.as_ref().ok_or(HyprError::NotConnected)?;
        if wait_fd(stream.as_fd(), PollFlags::POLLIN, timeout)? {
            Ok(())
        } else {
            Err(HyprError::WaitTimeout)
        }
    }

    /// Drains all currently buffered bytes without blocking and decodes them
    /// as UTF-8.
    ///
    /// Returns the empty string when nothing is buffered. Hitting EOF on an
    /// empty buffer yields [`HyprError::ConnectionClosed`] — the compositor is
    /// gone and retrying the poll loop would spin forever.
    pub fn read(&mut self) -> Result<String, HyprError> {
        let stream = self.stream.as_mut().ok_or(HyprError::NotConnected)?;
        let mut data = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => {
                    if data.is_empty() {
                        return Err(HyprError::ConnectionClosed);
                    }
                    break;
                }
                Ok(n) => data.extend_from_slice(&chunk[..n]),
                Err(err) if err.kind() == ErrorKind::WouldBlock => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(HyprError::ReceiveFailed(err)),
            }
        }
        String::from_utf8(data).map_err(HyprError::InvalidUtf8)
    }
}

/// Interface to Hyprland's command socket.
///
/// Commands use the same syntax as `hyprctl`; the reply is returned verbatim.
/// Every call opens a fresh connection and closes it after the reply, so the
/// socket is stateless between calls and needs no locking.
#[derive(Debug, Clone)]
pub struct CommandSocket {
    path: PathBuf,
    timeout: Duration,
}

impl CommandSocket {
    /// Creates a command socket handle for the socket file at `path`.
    ///
    /// Fails with [`HyprError::SocketNotFound`] if `path` is missing or not a
    /// Unix socket.
    pub fn new(path: PathBuf) -> Result<Self, HyprError> {
        ensure_socket_path(&path)?;
        Ok(Self {
            path,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Overrides the connect/reply timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The socket file this handle points at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sends a single command and returns the compositor's reply.
    ///
    /// The wire format is `<space-joined flags>/<command>[ <space-joined
    /// args>]`. The reply is read until the compositor closes the connection
    /// or the reply timeout elapses, whichever comes first.
    pub fn send_command(
        &self,
        command: &str,
        flags: &[&str],
        args: &[&str],
    ) -> Result<String, HyprError> {
        let mut message = format!("{}/{}", flags.join(" "), command);
        if !args.is_empty() {
            message.push(' ');
            message.push_str(&args.join(" "));
        }
        trace!(message, "sending command");

        let mut stream = connect_stream(&self.path, Some(self.timeout))?;
        let configure = |err: std::io::Error| HyprError::ConnectionFailed {
            path: self.path.clone(),
            source: err,
        };
        stream.set_nonblocking(false).map_err(configure)?;
        stream
            .set_read_timeout(Some(self.timeout))
            .map_err(configure)?;
        stream
            .set_write_timeout(Some(self.timeout))
            .map_err(configure)?;

        stream
            .write_all(message.as_bytes())
            .map_err(HyprError::SendFailed)?;

        let mut reply = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => reply.extend_from_slice(&chunk[..n]),
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock
                        || err.kind() == ErrorKind::TimedOut =>
                {
                    // Reply timeout elapsed; whatever arrived is the reply.
                    break;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(HyprError::ReceiveFailed(err)),
            }
        }
        String::from_utf8(reply).map_err(HyprError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::os::unix::net::UnixListener;
    use std::thread;

    fn listener_in_tempdir(name: &str) -> (tempfile::TempDir, PathBuf, UnixListener) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        let listener = UnixListener::bind(&path).expect("bind");
        (dir, path, listener)
    }

    #[test]
    fn new_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.sock");
        let err = EventSocket::new(path.clone()).unwrap_err();
        assert!(matches!(err, HyprError::SocketNotFound { path: p } if p == path));
    }

    #[test]
    fn new_rejects_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-socket");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            CommandSocket::new(path),
            Err(HyprError::SocketNotFound { .. })
        ));
    }

    #[test]
    fn event_socket_connect_close_lifecycle() {
        let (_dir, path, _listener) = listener_in_tempdir("events.sock");
        let mut socket = EventSocket::new(path).unwrap();
        assert!(!socket.is_connected());

        socket.connect(Some(DEFAULT_TIMEOUT)).unwrap();
        assert!(socket.is_connected());
        assert!(matches!(
            socket.connect(Some(DEFAULT_TIMEOUT)),
            Err(HyprError::AlreadyConnected)
        ));

        socket.close().unwrap();
        assert!(!socket.is_connected());
        // Double close is surfaced, not swallowed.
        assert!(matches!(socket.close(), Err(HyprError::NotConnected)));
    }

    #[test]
    fn operations_require_connection() {
        let (_dir, path, _listener) = listener_in_tempdir("events.sock");
        let mut socket = EventSocket::new(path).unwrap();
        assert!(matches!(socket.read(), Err(HyprError::NotConnected)));
        assert!(matches!(socket.send("x"), Err(HyprError::NotConnected)));
        assert!(matches!(
            socket.wait(Some(Duration::from_millis(1))),
            Err(HyprError::NotConnected)
        ));
    }

    #[test]
    fn wait_times_out_without_data() {
        let (_dir, path, listener) = listener_in_tempdir("events.sock");
        let mut socket = EventSocket::new(path).unwrap();
        socket.connect(Some(DEFAULT_TIMEOUT)).unwrap();
        let _peer = listener.accept().unwrap();
        assert!(matches!(
            socket.wait(Some(Duration::from_millis(20))),
            Err(HyprError::WaitTimeout)
        ));
    }

    #[test]
    fn read_drains_buffered_data_then_returns_empty() {
        let (_dir, path, listener) = listener_in_tempdir("events.sock");
        let mut socket = EventSocket::new(path).unwrap();
        socket.connect(Some(DEFAULT_TIMEOUT)).unwrap();
        let (mut peer, _) = listener.accept().unwrap();

        peer.write_all(b"workspace>>2\n").unwrap();
        socket.wait(Some(DEFAULT_TIMEOUT)).unwrap();
        assert_eq!(socket.read().unwrap(), "workspace>>2\n");
        // Nothing further buffered.
        assert_eq!(socket.read().unwrap(), "");
    }

    #[test]
    fn read_reports_closed_connection() {
        let (_dir, path, listener) = listener_in_tempdir("events.sock");
        let mut socket = EventSocket::new(path).unwrap();
        socket.connect(Some(DEFAULT_TIMEOUT)).unwrap();
        let (mut peer, _) = listener.accept().unwrap();

        peer.write_all(b"submap>>resize\n").unwrap();
        drop(peer);

        socket.wait(Some(DEFAULT_TIMEOUT)).unwrap();
        // The buffered line is still delivered before EOF is reported.
        assert_eq!(socket.read().unwrap(), "submap>>resize\n");
        assert!(matches!(socket.read(), Err(HyprError::ConnectionClosed)));
    }

    #[test]
    fn command_socket_round_trip() {
        let (_dir, path, listener) = listener_in_tempdir("command.sock");
        let server = thread::spawn(move || {
            let (mut peer, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 256];
            let n = peer.read(&mut chunk).unwrap();
            request.extend_from_slice(&chunk[..n]);
            peer.write_all(b"ok").unwrap();
            String::from_utf8(request).unwrap()
        });

        let socket = CommandSocket::new(path).unwrap();
        let reply = socket
            .send_command("dispatch", &["-j"], &["workspace", "3"])
            .unwrap();
        assert_eq!(reply, "ok");
        assert_eq!(server.join().unwrap(), "-j/dispatch workspace 3");
    }

    #[test]
    fn command_without_args_omits_trailing_space() {
        let (_dir, path, listener) = listener_in_tempdir("command.sock");
        let server = thread::spawn(move || {
            let (mut peer, _) = listener.accept().unwrap();
            let mut chunk = [0u8; 256];
            let n = peer.read(&mut chunk).unwrap();
            peer.write_all(b"[]").unwrap();
            String::from_utf8(chunk[..n].to_vec()).unwrap()
        });

        let socket = CommandSocket::new(path).unwrap();
        let reply = socket.send_command("clients", &["-j"], &[]).unwrap();
        assert_eq!(reply, "[]");
        assert_eq!(server.join().unwrap(), "-j/clients");
    }
}
