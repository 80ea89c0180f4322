//! The per-event signal collection owned by an [`Instance`].
//!
//! One [`Signal`] per event kind, named exactly after the wire name. Connect
//! observers to the signals you care about and call
//! [`Instance::watch`](crate::instance::Instance::watch); events without
//! observers are skipped before their payload is ever decoded.
//!
//! ```no_run
//! use hyprlink::Instance;
//!
//! let instance = Instance::from_env()?;
//! instance.signals.workspacev2.connect(|_instance, event| {
//!     println!("now on workspace {} ({})", event.workspace_id, event.workspace_name);
//! });
//! instance.watch()?;
//! # Ok::<(), hyprlink::HyprError>(())
//! ```

use crate::event::payload::*;
use crate::instance::Instance;
use crate::signal::Signal;

/// The collection of signals emitted by an [`Instance`], covering every
/// event Hyprland broadcasts on its event socket.
///
/// Created once at instance construction; signals live exactly as long as
/// the instance that owns them.
#[derive(Debug, Default)]
pub struct EventSignals {
    /// A keyboard switched layouts.
    pub activelayout: Signal<Instance, ActiveLayoutEvent>,
    /// The special workspace shown on a monitor changed.
    pub activespecial: Signal<Instance, ActiveSpecialEvent>,
    /// The special workspace shown on a monitor changed (with id).
    pub activespecialv2: Signal<Instance, ActiveSpecialV2Event>,
    /// Keyboard focus moved to another window (class + title).
    pub activewindow: Signal<Instance, ActiveWindowEvent>,
    /// Keyboard focus moved to another window (address, resolved).
    pub activewindowv2: Signal<Instance, ActiveWindowV2Event>,
    /// A window was floated or tiled.
    pub changefloatingmode: Signal<Instance, ChangeFloatingModeEvent>,
    /// A layer surface was unmapped.
    pub closelayer: Signal<Instance, CloseLayerEvent>,
    /// A window was closed.
    pub closewindow: Signal<Instance, CloseWindowEvent>,
    /// The compositor finished reloading its configuration.
    pub configreloaded: Signal<Instance, ConfigReloadedEvent>,
    /// A workspace was created.
    pub createworkspace: Signal<Instance, CreateWorkspaceEvent>,
    /// A workspace was created (id + name).
    pub createworkspacev2: Signal<Instance, CreateWorkspaceV2Event>,
    /// A workspace was destroyed.
    pub destroyworkspace: Signal<Instance, DestroyWorkspaceEvent>,
    /// A workspace was destroyed (id + name).
    pub destroyworkspacev2: Signal<Instance, DestroyWorkspaceV2Event>,
    /// The focused monitor changed.
    pub focusedmon: Signal<Instance, FocusedMonEvent>,
    /// The focused monitor changed (workspace by id).
    pub focusedmonv2: Signal<Instance, FocusedMonV2Event>,
    /// A window entered or left fullscreen.
    pub fullscreen: Signal<Instance, FullscreenEvent>,
    /// The `ignoregrouplock` toggle changed.
    pub ignoregrouplock: Signal<Instance, IgnoreGroupLockEvent>,
    /// The `lockgroups` toggle changed.
    pub lockgroups: Signal<Instance, LockGroupsEvent>,
    /// A window was minimized or restored.
    pub minimized: Signal<Instance, MinimizedEvent>,
    /// A monitor was connected.
    pub monitoradded: Signal<Instance, MonitorAddedEvent>,
    /// A monitor was connected (id, name, description).
    pub monitoraddedv2: Signal<Instance, MonitorAddedV2Event>,
    /// A monitor was disconnected.
    pub monitorremoved: Signal<Instance, MonitorRemovedEvent>,
    /// A window was merged into a group.
    pub moveintogroup: Signal<Instance, MoveIntoGroupEvent>,
    /// A window was removed from a group.
    pub moveoutofgroup: Signal<Instance, MoveOutOfGroupEvent>,
    /// A window was moved to a workspace.
    pub movewindow: Signal<Instance, MoveWindowEvent>,
    /// A window was moved to a workspace (with id).
    pub movewindowv2: Signal<Instance, MoveWindowV2Event>,
    /// A workspace was moved to another monitor.
    pub moveworkspace: Signal<Instance, MoveWorkspaceEvent>,
    /// A workspace was moved to another monitor (with id).
    pub moveworkspacev2: Signal<Instance, MoveWorkspaceV2Event>,
    /// A layer surface was mapped.
    pub openlayer: Signal<Instance, OpenLayerEvent>,
    /// A window was opened (resolved to a live [`crate::components::Window`]).
    pub openwindow: Signal<Instance, OpenWindowEvent>,
    /// A window was pinned or unpinned.
    pub pin: Signal<Instance, PinEvent>,
    /// A workspace was renamed.
    pub renameworkspace: Signal<Instance, RenameWorkspaceEvent>,
    /// A screen-sharing session started or stopped.
    pub screencast: Signal<Instance, ScreencastEvent>,
    /// The active keybind submap changed.
    pub submap: Signal<Instance, SubmapEvent>,
    /// A window group was created or dissolved.
    pub togglegroup: Signal<Instance, ToggleGroupEvent>,
    /// A window requested attention.
    pub urgent: Signal<Instance, UrgentEvent>,
    /// A window's title changed.
    pub windowtitle: Signal<Instance, WindowTitleEvent>,
    /// A window's title changed (with the new title).
    pub windowtitlev2: Signal<Instance, WindowTitleV2Event>,
    /// The active workspace changed.
    pub workspace: Signal<Instance, WorkspaceEvent>,
    /// The active workspace changed (name + id).
    pub workspacev2: Signal<Instance, WorkspaceV2Event>,
}
