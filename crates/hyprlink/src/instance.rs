//! The central [`Instance`] type for interfacing with a running compositor.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::components::{Monitor, Window, Workspace};
use crate::error::HyprError;
use crate::event::payload::*;
use crate::event::EventSignals;
use crate::socket::{CommandSocket, EventSocket, DEFAULT_TIMEOUT};

/// Directory under which Hyprland places its per-instance socket directories.
const HYPR_RUNTIME_DIR: &str = "/tmp/hypr";

/// Environment variable carrying the running instance's signature.
const SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Separates the event name from its payload on the wire. Split once, at the
/// first occurrence: payloads may contain `>>` themselves.
const EVENT_DELIMITER: &str = ">>";

/// A running Hyprland instance.
///
/// The instance is the root object of the library: it knows the socket paths
/// of one compositor session, answers queries for the current set of
/// [`Window`]s, [`Workspace`]s and [`Monitor`]s over the command socket, and
/// owns the [`EventSignals`] that [`Instance::watch`] dispatches incoming
/// events to.
///
/// Nothing is cached: every query reflects compositor state at the moment it
/// is issued.
///
/// ```no_run
/// use hyprlink::Instance;
///
/// let instance = Instance::from_env()?;
/// for window in instance.windows()? {
///     println!("{}: {}", window.wm_class, window.title);
/// }
///
/// instance.signals.openwindow.connect(|_instance, event| {
///     println!("opened {} on {}", event.window_class, event.workspace_name);
/// });
/// instance.watch()?;
/// # Ok::<(), hyprlink::HyprError>(())
/// ```
#[derive(Debug)]
pub struct Instance {
    signature: Option<String>,
    event_socket_path: PathBuf,
    command_socket: CommandSocket,
    /// Signals dispatched by [`Instance::watch`], one per event kind.
    pub signals: EventSignals,
}

impl Instance {
    /// Attaches to the instance named by `HYPRLAND_INSTANCE_SIGNATURE`.
    ///
    /// # Errors
    ///
    /// [`HyprError::SignatureNotSet`] when the variable is absent or empty,
    /// [`HyprError::SocketNotFound`] when the instance's socket files are
    /// missing — the compositor is not running or has gone away.
    pub fn from_env() -> Result<Self, HyprError> {
        let signature =
            std::env::var(SIGNATURE_ENV).map_err(|_| HyprError::SignatureNotSet)?;
        Self::with_signature(&signature)
    }

    /// Attaches to the instance with the given signature.
    pub fn with_signature(signature: &str) -> Result<Self, HyprError> {
        if signature.is_empty() {
            return Err(HyprError::SignatureNotSet);
        }
        let dir = Path::new(HYPR_RUNTIME_DIR).join(signature);
        let mut instance =
            Self::from_paths(dir.join(".socket2.sock"), dir.join(".socket.sock"))?;
        instance.signature = Some(signature.to_string());
        Ok(instance)
    }

    /// Attaches to an instance through explicit socket paths.
    ///
    /// `event_socket` is the notification stream, `command_socket` the
    /// request/reply socket. Useful for nonstandard runtime directories and
    /// for tests. Both paths are validated immediately.
    pub fn from_paths(
        event_socket: PathBuf,
        command_socket: PathBuf,
    ) -> Result<Self, HyprError> {
        // Fail fast on both paths; the event socket is re-opened per watch
        // session, so only its path is kept here.
        EventSocket::new(event_socket.clone())?;
        let command_socket = CommandSocket::new(command_socket)?;
        Ok(Self {
            signature: None,
            event_socket_path: event_socket,
            command_socket,
            signals: EventSignals::default(),
        })
    }

    /// The instance signature, when attached via the environment.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// The command socket used for queries and dispatch commands.
    pub fn command_socket(&self) -> &CommandSocket {
        &self.command_socket
    }

    // -- queries -----------------------------------------------------------

    fn query_json<T: DeserializeOwned>(&self, command: &str) -> Result<T, HyprError> {
        let reply = self.command_socket.send_command(command, &["-j"], &[])?;
        serde_json::from_str(&reply).map_err(HyprError::DeserializeFailed)
    }

    /// All windows currently managed by the instance.
    pub fn windows(&self) -> Result<Vec<Window>, HyprError> {
        self.query_json("clients")
    }

    /// The window with the given hexadecimal address, if it exists.
    pub fn window_by_address(&self, address: &str) -> Result<Option<Window>, HyprError> {
        let digits = address.strip_prefix("0x").unwrap_or(address);
        let target = u64::from_str_radix(digits, 16).ok();
        Ok(self.windows()?.into_iter().find(|window| {
            window.address == address
                || (target.is_some() && window.address_as_int().ok() == target)
        }))
    }

    /// The currently focused window, or `None` when nothing is focused.
    pub fn active_window(&self) -> Result<Option<Window>, HyprError> {
        let reply = self
            .command_socket
            .send_command("activewindow", &["-j"], &[])?;
        let value: serde_json::Value =
            serde_json::from_str(&reply).map_err(HyprError::DeserializeFailed)?;
        if value.get("address").is_none() {
            // An empty object means no window has focus.
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(HyprError::DeserializeFailed)
    }

    /// All workspaces currently managed by the instance.
    pub fn workspaces(&self) -> Result<Vec<Workspace>, HyprError> {
        self.query_json("workspaces")
    }

    /// The workspace with the given id, if it exists.
    pub fn workspace_by_id(&self, id: i32) -> Result<Option<Workspace>, HyprError> {
        Ok(self
            .workspaces()?
            .into_iter()
            .find(|workspace| workspace.id == id))
    }

    /// The workspace with the given name, if it exists.
    pub fn workspace_by_name(&self, name: &str) -> Result<Option<Workspace>, HyprError> {
        Ok(self
            .workspaces()?
            .into_iter()
            .find(|workspace| workspace.name == name))
    }

    /// The currently active workspace.
    pub fn active_workspace(&self) -> Result<Workspace, HyprError> {
        self.query_json("activeworkspace")
    }

    /// All monitors currently managed by the instance.
    pub fn monitors(&self) -> Result<Vec<Monitor>, HyprError> {
        self.query_json("monitors")
    }

    /// The monitor with the given id, if it exists.
    pub fn monitor_by_id(&self, id: i32) -> Result<Option<Monitor>, HyprError> {
        Ok(self.monitors()?.into_iter().find(|monitor| monitor.id == id))
    }

    /// The monitor with the given name, if it exists.
    pub fn monitor_by_name(&self, name: &str) -> Result<Option<Monitor>, HyprError> {
        Ok(self
            .monitors()?
            .into_iter()
            .find(|monitor| monitor.name == name))
    }

    /// Runs a dispatcher command, e.g. `["workspace", "3"]`.
    ///
    /// # Errors
    ///
    /// [`HyprError::CommandFailed`] with the compositor's reply when the
    /// command was not acknowledged with `ok`.
    pub fn dispatch(&self, args: &[&str]) -> Result<(), HyprError> {
        let reply = self.command_socket.send_command("dispatch", &["-j"], args)?;
        if reply == "ok" {
            Ok(())
        } else {
            Err(HyprError::CommandFailed { message: reply })
        }
    }

    // -- the watch loop ----------------------------------------------------

    /// Watches the event socket and emits the matching [`EventSignals`]
    /// signal for every incoming event.
    ///
    /// Blocks indefinitely. Each event is fully decoded, resolved and
    /// dispatched before the next line is processed; observers run on the
    /// calling thread. Per-event problems — unknown names, undecodable
    /// payloads — are logged and skipped. The call returns only when the
    /// event socket becomes unusable (compositor shut down, connection
    /// reset), with the transport error as the reason.
    ///
    /// The socket is closed on every exit path: explicitly when the loop
    /// returns, by drop when a panicking observer unwinds through it.
    pub fn watch(&self) -> Result<(), HyprError> {
        let mut socket = EventSocket::new(self.event_socket_path.clone())?;
        socket.connect(Some(DEFAULT_TIMEOUT))?;
        debug!(path = %self.event_socket_path.display(), "watching event socket");

        let result = self.pump(&mut socket);
        if let Err(err) = socket.close() {
            warn!(%err, "failed to close event socket");
        }
        result
    }

    fn pump(&self, socket: &mut EventSocket) -> Result<(), HyprError> {
        loop {
            socket.wait(None)?;
            let buffer = socket.read()?;
            if buffer.is_empty() {
                continue;
            }
            self.pump_buffer(&buffer);
        }
    }

    /// Splits a drained buffer into lines and routes each one.
    fn pump_buffer(&self, buffer: &str) {
        for line in buffer.split('\n').filter(|line| !line.is_empty()) {
            self.pump_line(line);
        }
    }

    /// Routes a single `name>>payload` line to its signal.
    fn pump_line(&self, line: &str) {
        let Some((name, payload)) = line.split_once(EVENT_DELIMITER) else {
            warn!(line, "dropping malformed event line");
            return;
        };
        let Some(kind) = EventKind::from_name(name) else {
            warn!(event = name, "dropping unrecognized event");
            return;
        };
        if let Err(err) = self.dispatch_event(kind, payload) {
            warn!(event = name, payload, %err, "dropping undecodable event");
        }
    }

    /// Decodes `payload` and emits the signal for `kind`.
    ///
    /// Payloads are only decoded when the signal has observers; an event
    /// nobody listens to costs a lookup and nothing else.
    fn dispatch_event(&self, kind: EventKind, payload: &str) -> Result<(), DecodeError> {
        macro_rules! deliver {
            ($self:expr, $payload:expr, $signal:ident, $event:ty) => {{
                if $self.signals.$signal.has_observers() {
                    let event = <$event>::parse($payload)?;
                    $self.signals.$signal.emit($self, &event);
                }
            }};
        }

        match kind {
            EventKind::ActiveLayout => deliver!(self, payload, activelayout, ActiveLayoutEvent),
            EventKind::ActiveSpecial => deliver!(self, payload, activespecial, ActiveSpecialEvent),
            EventKind::ActiveSpecialV2 => {
                deliver!(self, payload, activespecialv2, ActiveSpecialV2Event)
            }
            EventKind::ActiveWindow => deliver!(self, payload, activewindow, ActiveWindowEvent),
            EventKind::ActiveWindowV2 => {
                if self.signals.activewindowv2.has_observers() {
                    let mut event = ActiveWindowV2Event::parse(payload)?;
                    event.window = event
                        .window_address
                        .as_deref()
                        .and_then(|address| self.resolve_window(address));
                    self.signals.activewindowv2.emit(self, &event);
                }
            }
            EventKind::ChangeFloatingMode => {
                deliver!(self, payload, changefloatingmode, ChangeFloatingModeEvent)
            }
            EventKind::CloseLayer => deliver!(self, payload, closelayer, CloseLayerEvent),
            EventKind::CloseWindow => deliver!(self, payload, closewindow, CloseWindowEvent),
            EventKind::ConfigReloaded => {
                deliver!(self, payload, configreloaded, ConfigReloadedEvent)
            }
            EventKind::CreateWorkspace => {
                deliver!(self, payload, createworkspace, CreateWorkspaceEvent)
            }
            EventKind::CreateWorkspaceV2 => {
                deliver!(self, payload, createworkspacev2, CreateWorkspaceV2Event)
            }
            EventKind::DestroyWorkspace => {
                deliver!(self, payload, destroyworkspace, DestroyWorkspaceEvent)
            }
            EventKind::DestroyWorkspaceV2 => {
                deliver!(self, payload, destroyworkspacev2, DestroyWorkspaceV2Event)
            }
            EventKind::FocusedMon => deliver!(self, payload, focusedmon, FocusedMonEvent),
            EventKind::FocusedMonV2 => deliver!(self, payload, focusedmonv2, FocusedMonV2Event),
            EventKind::Fullscreen => deliver!(self, payload, fullscreen, FullscreenEvent),
            EventKind::IgnoreGroupLock => {
                deliver!(self, payload, ignoregrouplock, IgnoreGroupLockEvent)
            }
            EventKind::LockGroups => deliver!(self, payload, lockgroups, LockGroupsEvent),
            EventKind::Minimized => deliver!(self, payload, minimized, MinimizedEvent),
            EventKind::MonitorAdded => deliver!(self, payload, monitoradded, MonitorAddedEvent),
            EventKind::MonitorAddedV2 => {
                deliver!(self, payload, monitoraddedv2, MonitorAddedV2Event)
            }
            EventKind::MonitorRemoved => {
                deliver!(self, payload, monitorremoved, MonitorRemovedEvent)
            }
            EventKind::MoveIntoGroup => deliver!(self, payload, moveintogroup, MoveIntoGroupEvent),
            EventKind::MoveOutOfGroup => {
                deliver!(self, payload, moveoutofgroup, MoveOutOfGroupEvent)
            }
            EventKind::MoveWindow => deliver!(self, payload, movewindow, MoveWindowEvent),
            EventKind::MoveWindowV2 => deliver!(self, payload, movewindowv2, MoveWindowV2Event),
            EventKind::MoveWorkspace => deliver!(self, payload, moveworkspace, MoveWorkspaceEvent),
            EventKind::MoveWorkspaceV2 => {
                deliver!(self, payload, moveworkspacev2, MoveWorkspaceV2Event)
            }
            EventKind::OpenLayer => deliver!(self, payload, openlayer, OpenLayerEvent),
            EventKind::OpenWindow => {
                if self.signals.openwindow.has_observers() {
                    let mut event = OpenWindowEvent::parse(payload)?;
                    event.window = self.resolve_window(&event.window_address);
                    self.signals.openwindow.emit(self, &event);
                }
            }
            EventKind::Pin => deliver!(self, payload, pin, PinEvent),
            EventKind::RenameWorkspace => {
                deliver!(self, payload, renameworkspace, RenameWorkspaceEvent)
            }
            EventKind::Screencast => deliver!(self, payload, screencast, ScreencastEvent),
            EventKind::Submap => deliver!(self, payload, submap, SubmapEvent),
            EventKind::ToggleGroup => deliver!(self, payload, togglegroup, ToggleGroupEvent),
            EventKind::Urgent => deliver!(self, payload, urgent, UrgentEvent),
            EventKind::WindowTitle => deliver!(self, payload, windowtitle, WindowTitleEvent),
            EventKind::WindowTitleV2 => {
                deliver!(self, payload, windowtitlev2, WindowTitleV2Event)
            }
            EventKind::Workspace => deliver!(self, payload, workspace, WorkspaceEvent),
            EventKind::WorkspaceV2 => deliver!(self, payload, workspacev2, WorkspaceV2Event),
        }
        Ok(())
    }

    /// Resolves a window address into a live component before emission.
    ///
    /// The window may legitimately be gone again by the time the query runs;
    /// absence is passed on as `None`, never raised.
    fn resolve_window(&self, address: &str) -> Option<Window> {
        match self.window_by_address(address) {
            Ok(window) => {
                if window.is_none() {
                    debug!(address, "window vanished before lookup completed");
                }
                window
            }
            Err(err) => {
                debug!(address, %err, "window lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{Read, Write};
    use std::os::unix::net::UnixListener;
    use std::rc::Rc;
    use std::sync::Mutex;
    use std::thread;

    // Environment variables are process-global; tests touching them must not
    // run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const WINDOW_JSON: &str = r#"{
        "address": "0x1234",
        "mapped": true,
        "hidden": false,
        "at": [0, 0],
        "size": [800, 600],
        "workspace": {"id": 1, "name": "1"},
        "floating": false,
        "monitor": 0,
        "class": "kitty",
        "title": "fish",
        "initialClass": "kitty",
        "initialTitle": "fish",
        "pid": 1000,
        "xwayland": false,
        "pinned": false,
        "fullscreen": 0,
        "grouped": [],
        "tags": []
    }"#;

    /// Binds both sockets in a fresh tempdir and attaches an instance.
    fn test_instance() -> (tempfile::TempDir, UnixListener, UnixListener, Instance) {
        let dir = tempfile::tempdir().expect("tempdir");
        let event_path = dir.path().join(".socket2.sock");
        let command_path = dir.path().join(".socket.sock");
        let event_listener = UnixListener::bind(&event_path).expect("bind event socket");
        let command_listener = UnixListener::bind(&command_path).expect("bind command socket");
        let instance = Instance::from_paths(event_path, command_path).expect("instance");
        (dir, event_listener, command_listener, instance)
    }

    /// Serves one command-socket request with a fixed reply, returning the
    /// raw request for assertions.
    fn serve_one(listener: UnixListener, reply: &'static str) -> thread::JoinHandle<String> {
        thread::spawn(move || {
            let (mut peer, _) = listener.accept().unwrap();
            let mut chunk = [0u8; 1024];
            let n = peer.read(&mut chunk).unwrap();
            peer.write_all(reply.as_bytes()).unwrap();
            String::from_utf8(chunk[..n].to_vec()).unwrap()
        })
    }

    #[test]
    fn from_env_requires_the_signature() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let original = std::env::var(SIGNATURE_ENV).ok();
        std::env::remove_var(SIGNATURE_ENV);

        let result = Instance::from_env();

        if let Some(value) = original {
            std::env::set_var(SIGNATURE_ENV, value);
        }
        assert!(matches!(result, Err(HyprError::SignatureNotSet)));
    }

    #[test]
    fn with_signature_fails_fast_without_sockets() {
        assert!(matches!(
            Instance::with_signature("no-such-instance-signature"),
            Err(HyprError::SocketNotFound { .. })
        ));
        assert!(matches!(
            Instance::with_signature(""),
            Err(HyprError::SignatureNotSet)
        ));
    }

    #[test]
    fn windows_query_round_trip() {
        let (_dir, _event, command_listener, instance) = test_instance();
        let server = serve_one(command_listener, r#"[{
            "address": "0x1234",
            "mapped": true, "hidden": false,
            "at": [0, 0], "size": [800, 600],
            "workspace": {"id": 1, "name": "1"},
            "floating": false, "monitor": 0,
            "class": "kitty", "title": "fish",
            "initialClass": "kitty", "initialTitle": "fish",
            "pid": 1000, "xwayland": false, "pinned": false,
            "fullscreen": 0, "grouped": [], "tags": []
        }]"#);

        let windows = instance.windows().unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].wm_class, "kitty");
        assert_eq!(server.join().unwrap(), "-j/clients");
    }

    #[test]
    fn window_by_address_matches_numerically() {
        let (_dir, _event, command_listener, instance) = test_instance();
        let reply: &'static str = Box::leak(format!("[{WINDOW_JSON}]").into_boxed_str());
        let _server = serve_one(command_listener, reply);

        // "0x1234" stored, "1234" requested: same address.
        let window = instance.window_by_address("1234").unwrap();
        assert_eq!(window.unwrap().address, "0x1234");
    }

    #[test]
    fn active_window_maps_empty_object_to_none() {
        let (_dir, _event, command_listener, instance) = test_instance();
        let _server = serve_one(command_listener, "{}");
        assert!(instance.active_window().unwrap().is_none());
    }

    #[test]
    fn dispatch_rejects_error_replies() {
        let (_dir, _event, command_listener, instance) = test_instance();
        let server = serve_one(command_listener, "Invalid dispatcher");

        let err = instance.dispatch(&["definitely-not-a-dispatcher"]).unwrap_err();
        assert!(matches!(
            err,
            HyprError::CommandFailed { message } if message == "Invalid dispatcher"
        ));
        assert_eq!(
            server.join().unwrap(),
            "-j/dispatch definitely-not-a-dispatcher"
        );
    }

    #[test]
    fn unknown_and_malformed_lines_are_dropped_quietly() {
        let (_dir, _event, _command, instance) = test_instance();
        instance.pump_line("definitelynotanevent>>payload");
        instance.pump_line("line without a delimiter");
    }

    #[test]
    fn no_observers_means_no_decode() {
        let (_dir, _event, _command, instance) = test_instance();

        // An undecodable payload is fine while nobody listens: the decoder
        // must not run at all.
        instance
            .dispatch_event(EventKind::WorkspaceV2, "not-an-id")
            .unwrap();

        instance.signals.workspacev2.connect(|_, _| {});
        let err = instance
            .dispatch_event(EventKind::WorkspaceV2, "not-an-id")
            .unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { .. }));
    }

    #[test]
    fn observers_receive_decoded_fields() {
        let (_dir, _event, _command, instance) = test_instance();
        let seen: Rc<RefCell<Vec<ActiveWindowEvent>>> = Rc::default();

        let sink = Rc::clone(&seen);
        instance
            .signals
            .activewindow
            .connect(move |_, event| sink.borrow_mut().push(event.clone()));

        instance.pump_line("activewindow>>kitty,my title");

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].window_class, "kitty");
        assert_eq!(events[0].window_title, "my title");
    }

    #[test]
    fn malformed_line_does_not_stop_the_buffer() {
        let (_dir, _event, _command, instance) = test_instance();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();

        let sink = Rc::clone(&seen);
        instance
            .signals
            .fullscreen
            .connect(move |_, event: &FullscreenEvent| {
                sink.borrow_mut().push(format!("fullscreen={}", event.is_fullscreen))
            });
        let sink = Rc::clone(&seen);
        instance
            .signals
            .workspace
            .connect(move |_, event: &WorkspaceEvent| {
                sink.borrow_mut().push(format!("workspace={}", event.workspace_name))
            });

        // The middle line is undecodable; its neighbors must still land.
        instance.pump_buffer("fullscreen>>1\nfullscreen>>nope\nworkspace>>2\n");

        assert_eq!(
            *seen.borrow(),
            vec!["fullscreen=true".to_string(), "workspace=2".to_string()]
        );
    }

    #[test]
    fn watch_delivers_events_in_line_order_and_resolves_windows() {
        let (_dir, event_listener, command_listener, instance) = test_instance();

        // Fake compositor: the event socket replays two events, then closes.
        let event_server = thread::spawn(move || {
            let (mut peer, _) = event_listener.accept().unwrap();
            peer.write_all(b"openwindow>>0x1234,1,kitty,fish\nworkspace>>2\n")
                .unwrap();
        });
        // The openwindow resolution issues exactly one `clients` query.
        let reply: &'static str = Box::leak(format!("[{WINDOW_JSON}]").into_boxed_str());
        let command_server = serve_one(command_listener, reply);

        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&seen);
        instance.signals.openwindow.connect(move |_, event| {
            // The lookup ran before this observer: the live window is here.
            let resolved = event.window.as_ref().expect("window resolved");
            assert_eq!(resolved.address, "0x1234");
            sink.borrow_mut().push(format!("openwindow {}", event.window_title));
        });
        let sink = Rc::clone(&seen);
        instance.signals.workspace.connect(move |_, event| {
            sink.borrow_mut()
                .push(format!("workspace {}", event.workspace_name));
        });

        // The loop ends when the fake compositor hangs up.
        let result = instance.watch();
        assert!(matches!(result, Err(HyprError::ConnectionClosed)));

        assert_eq!(
            *seen.borrow(),
            vec!["openwindow fish".to_string(), "workspace 2".to_string()]
        );
        assert_eq!(command_server.join().unwrap(), "-j/clients");
        event_server.join().unwrap();
    }

    #[test]
    fn watch_passes_absence_when_resolution_fails() {
        let (_dir, event_listener, command_listener, instance) = test_instance();

        let event_server = thread::spawn(move || {
            let (mut peer, _) = event_listener.accept().unwrap();
            peer.write_all(b"activewindowv2>>0xdead\n").unwrap();
        });
        // The referenced window no longer exists.
        let _command_server = serve_one(command_listener, "[]");

        let seen: Rc<RefCell<Vec<ActiveWindowV2Event>>> = Rc::default();
        let sink = Rc::clone(&seen);
        instance
            .signals
            .activewindowv2
            .connect(move |_, event| sink.borrow_mut().push(event.clone()));

        let result = instance.watch();
        assert!(matches!(result, Err(HyprError::ConnectionClosed)));

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].window_address.as_deref(), Some("0xdead"));
        assert_eq!(events[0].window, None);
        event_server.join().unwrap();
    }
}
