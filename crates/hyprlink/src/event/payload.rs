//! Wire-format decoding for Hyprland's event socket.
//!
//! Every notification is one UTF-8 line of the form
//! `<event-name>>><comma-separated payload>`. This module defines the closed
//! vocabulary of event names ([`EventKind`]), one typed payload struct per
//! event, and the `parse` routine for each.
//!
//! The payload grammar is irregular and the split rule per event is part of
//! the protocol contract:
//!
//! - most events split left-to-right with a maximum field count, so the
//!   *trailing* field absorbs any further commas (window titles, monitor
//!   descriptions);
//! - a few split right-to-left because the trailing field is a bare number
//!   while a *leading* field (a workspace or monitor name) may itself contain
//!   commas;
//! - boolean fields are the ASCII characters `0`/`1` and nothing else;
//! - a handful of fields use the empty string as "no value".

use thiserror::Error;

use crate::components::Window;

/// Reserved workspace id of the special (scratchpad) workspace.
pub const SPECIAL_WORKSPACE_ID: i32 = -99;

/// A payload that could not be decoded.
///
/// Decode failures are reported and the event is dropped; they never
/// terminate the watch loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload has fewer comma-separated fields than the event requires.
    #[error("event '{event}' payload {payload:?} is missing the '{field}' field")]
    MissingField {
        event: &'static str,
        field: &'static str,
        payload: String,
    },

    /// A field that must be an integer is not one.
    #[error("event '{event}' field '{field}' is not an integer: {value:?}")]
    InvalidInt {
        event: &'static str,
        field: &'static str,
        value: String,
    },

    /// A field that must be a `0`/`1` flag holds something else.
    #[error("event '{event}' field '{field}' is not a 0/1 flag: {value:?}")]
    InvalidFlag {
        event: &'static str,
        field: &'static str,
        value: String,
    },
}

/// The closed vocabulary of event names broadcast on the event socket.
///
/// Lines carrying any other name are logged and dropped before any decode
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ActiveLayout,
    ActiveSpecial,
    ActiveSpecialV2,
    ActiveWindow,
    ActiveWindowV2,
    ChangeFloatingMode,
    CloseLayer,
    CloseWindow,
    ConfigReloaded,
    CreateWorkspace,
    CreateWorkspaceV2,
    DestroyWorkspace,
    DestroyWorkspaceV2,
    FocusedMon,
    FocusedMonV2,
    Fullscreen,
    IgnoreGroupLock,
    LockGroups,
    Minimized,
    MonitorAdded,
    MonitorAddedV2,
    MonitorRemoved,
    MoveIntoGroup,
    MoveOutOfGroup,
    MoveWindow,
    MoveWindowV2,
    MoveWorkspace,
    MoveWorkspaceV2,
    OpenLayer,
    OpenWindow,
    Pin,
    RenameWorkspace,
    Screencast,
    Submap,
    ToggleGroup,
    Urgent,
    WindowTitle,
    WindowTitleV2,
    Workspace,
    WorkspaceV2,
}

impl EventKind {
    /// Every event kind, in wire-name order.
    pub const ALL: [EventKind; 40] = [
        EventKind::ActiveLayout,
        EventKind::ActiveSpecial,
        EventKind::ActiveSpecialV2,
        EventKind::ActiveWindow,
        EventKind::ActiveWindowV2,
        EventKind::ChangeFloatingMode,
        EventKind::CloseLayer,
        EventKind::CloseWindow,
        EventKind::ConfigReloaded,
        EventKind::CreateWorkspace,
        EventKind::CreateWorkspaceV2,
        EventKind::DestroyWorkspace,
        EventKind::DestroyWorkspaceV2,
        EventKind::FocusedMon,
        EventKind::FocusedMonV2,
        EventKind::Fullscreen,
        EventKind::IgnoreGroupLock,
        EventKind::LockGroups,
        EventKind::Minimized,
        EventKind::MonitorAdded,
        EventKind::MonitorAddedV2,
        EventKind::MonitorRemoved,
        EventKind::MoveIntoGroup,
        EventKind::MoveOutOfGroup,
        EventKind::MoveWindow,
        EventKind::MoveWindowV2,
        EventKind::MoveWorkspace,
        EventKind::MoveWorkspaceV2,
        EventKind::OpenLayer,
        EventKind::OpenWindow,
        EventKind::Pin,
        EventKind::RenameWorkspace,
        EventKind::Screencast,
        EventKind::Submap,
        EventKind::ToggleGroup,
        EventKind::Urgent,
        EventKind::WindowTitle,
        EventKind::WindowTitleV2,
        EventKind::Workspace,
        EventKind::WorkspaceV2,
    ];

    /// Resolves a wire name to its event kind, or `None` for unknown names.
    pub fn from_name(name: &str) -> Option<EventKind> {
        let kind = match name {
            "activelayout" => EventKind::ActiveLayout,
            "activespecial" => EventKind::ActiveSpecial,
            "activespecialv2" => EventKind::ActiveSpecialV2,
            "activewindow" => EventKind::ActiveWindow,
            "activewindowv2" => EventKind::ActiveWindowV2,
            "changefloatingmode" => EventKind::ChangeFloatingMode,
            "closelayer" => EventKind::CloseLayer,
            "closewindow" => EventKind::CloseWindow,
            "configreloaded" => EventKind::ConfigReloaded,
            "createworkspace" => EventKind::CreateWorkspace,
            "createworkspacev2" => EventKind::CreateWorkspaceV2,
            "destroyworkspace" => EventKind::DestroyWorkspace,
            "destroyworkspacev2" => EventKind::DestroyWorkspaceV2,
            "focusedmon" => EventKind::FocusedMon,
            "focusedmonv2" => EventKind::FocusedMonV2,
            "fullscreen" => EventKind::Fullscreen,
            "ignoregrouplock" => EventKind::IgnoreGroupLock,
            "lockgroups" => EventKind::LockGroups,
            "minimized" => EventKind::Minimized,
            "monitoradded" => EventKind::MonitorAdded,
            "monitoraddedv2" => EventKind::MonitorAddedV2,
            "monitorremoved" => EventKind::MonitorRemoved,
            "moveintogroup" => EventKind::MoveIntoGroup,
            "moveoutofgroup" => EventKind::MoveOutOfGroup,
            "movewindow" => EventKind::MoveWindow,
            "movewindowv2" => EventKind::MoveWindowV2,
            "moveworkspace" => EventKind::MoveWorkspace,
            "moveworkspacev2" => EventKind::MoveWorkspaceV2,
            "openlayer" => EventKind::OpenLayer,
            "openwindow" => EventKind::OpenWindow,
            "pin" => EventKind::Pin,
            "renameworkspace" => EventKind::RenameWorkspace,
            "screencast" => EventKind::Screencast,
            "submap" => EventKind::Submap,
            "togglegroup" => EventKind::ToggleGroup,
            "urgent" => EventKind::Urgent,
            "windowtitle" => EventKind::WindowTitle,
            "windowtitlev2" => EventKind::WindowTitleV2,
            "workspace" => EventKind::Workspace,
            "workspacev2" => EventKind::WorkspaceV2,
            _ => return None,
        };
        Some(kind)
    }

    /// The event's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ActiveLayout => "activelayout",
            EventKind::ActiveSpecial => "activespecial",
            EventKind::ActiveSpecialV2 => "activespecialv2",
            EventKind::ActiveWindow => "activewindow",
            EventKind::ActiveWindowV2 => "activewindowv2",
            EventKind::ChangeFloatingMode => "changefloatingmode",
            EventKind::CloseLayer => "closelayer",
            EventKind::CloseWindow => "closewindow",
            EventKind::ConfigReloaded => "configreloaded",
            EventKind::CreateWorkspace => "createworkspace",
            EventKind::CreateWorkspaceV2 => "createworkspacev2",
            EventKind::DestroyWorkspace => "destroyworkspace",
            EventKind::DestroyWorkspaceV2 => "destroyworkspacev2",
            EventKind::FocusedMon => "focusedmon",
            EventKind::FocusedMonV2 => "focusedmonv2",
            EventKind::Fullscreen => "fullscreen",
            EventKind::IgnoreGroupLock => "ignoregrouplock",
            EventKind::LockGroups => "lockgroups",
            EventKind::Minimized => "minimized",
            EventKind::MonitorAdded => "monitoradded",
            EventKind::MonitorAddedV2 => "monitoraddedv2",
            EventKind::MonitorRemoved => "monitorremoved",
            EventKind::MoveIntoGroup => "moveintogroup",
            EventKind::MoveOutOfGroup => "moveoutofgroup",
            EventKind::MoveWindow => "movewindow",
            EventKind::MoveWindowV2 => "movewindowv2",
            EventKind::MoveWorkspace => "moveworkspace",
            EventKind::MoveWorkspaceV2 => "moveworkspacev2",
            EventKind::OpenLayer => "openlayer",
            EventKind::OpenWindow => "openwindow",
            EventKind::Pin => "pin",
            EventKind::RenameWorkspace => "renameworkspace",
            EventKind::Screencast => "screencast",
            EventKind::Submap => "submap",
            EventKind::ToggleGroup => "togglegroup",
            EventKind::Urgent => "urgent",
            EventKind::WindowTitle => "windowtitle",
            EventKind::WindowTitleV2 => "windowtitlev2",
            EventKind::Workspace => "workspace",
            EventKind::WorkspaceV2 => "workspacev2",
        }
    }
}

// ---------------------------------------------------------------------------
// Split/coerce helpers shared by the decoders
// ---------------------------------------------------------------------------

fn split2<'a>(
    event: &'static str,
    payload: &'a str,
    field: &'static str,
) -> Result<(&'a str, &'a str), DecodeError> {
    payload.split_once(',').ok_or_else(|| DecodeError::MissingField {
        event,
        field,
        payload: payload.to_string(),
    })
}

fn rsplit2<'a>(
    event: &'static str,
    payload: &'a str,
    field: &'static str,
) -> Result<(&'a str, &'a str), DecodeError> {
    payload.rsplit_once(',').ok_or_else(|| DecodeError::MissingField {
        event,
        field,
        payload: payload.to_string(),
    })
}

fn split3<'a>(
    event: &'static str,
    payload: &'a str,
    fields: [&'static str; 3],
) -> Result<(&'a str, &'a str, &'a str), DecodeError> {
    let (first, rest) = split2(event, payload, fields[1])?;
    let (second, third) = split2(event, rest, fields[2])?;
    Ok((first, second, third))
}

fn parse_int(event: &'static str, field: &'static str, value: &str) -> Result<i32, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidInt {
        event,
        field,
        value: value.to_string(),
    })
}

/// Booleans travel as `0`/`1`; everything else is a decode failure.
fn parse_flag(event: &'static str, field: &'static str, value: &str) -> Result<bool, DecodeError> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(DecodeError::InvalidFlag {
            event,
            field,
            value: value.to_string(),
        }),
    }
}

/// The empty string encodes "no value" for optional fields.
fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Derives a workspace id from a v1 workspace-event payload.
///
/// Default workspaces are named after their numeric id; the special
/// workspace appears as `special` or `special:<name>` and maps to the
/// reserved id [`SPECIAL_WORKSPACE_ID`]. Renamed workspaces have no
/// derivable id.
fn workspace_id_hint(name: &str) -> Option<i32> {
    if name == "special" || name.starts_with("special:") {
        Some(SPECIAL_WORKSPACE_ID)
    } else {
        name.parse().ok()
    }
}

// ---------------------------------------------------------------------------
// Payload types, one per event kind
// ---------------------------------------------------------------------------

/// `activelayout` — a keyboard switched layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLayoutEvent {
    pub keyboard_name: String,
    /// Name of the newly active layout; may itself contain commas.
    pub layout_name: String,
}

impl ActiveLayoutEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (keyboard_name, layout_name) = split2("activelayout", payload, "layout_name")?;
        Ok(Self {
            keyboard_name: keyboard_name.to_string(),
            layout_name: layout_name.to_string(),
        })
    }
}

/// `activespecial` — the special workspace shown on a monitor changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSpecialEvent {
    /// Name of the special workspace, or `None` if it was hidden.
    pub workspace_name: Option<String>,
    pub monitor_name: String,
}

impl ActiveSpecialEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (workspace_name, monitor_name) = split2("activespecial", payload, "monitor_name")?;
        Ok(Self {
            workspace_name: optional(workspace_name),
            monitor_name: monitor_name.to_string(),
        })
    }
}

/// `activespecialv2` — like `activespecial`, with the workspace id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSpecialV2Event {
    pub workspace_id: Option<i32>,
    pub workspace_name: Option<String>,
    pub monitor_name: String,
}

impl ActiveSpecialV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, name, monitor_name) = split3(
            "activespecialv2",
            payload,
            ["workspace_id", "workspace_name", "monitor_name"],
        )?;
        let workspace_id = match id {
            "" => None,
            value => Some(parse_int("activespecialv2", "workspace_id", value)?),
        };
        Ok(Self {
            workspace_id,
            workspace_name: optional(name),
            monitor_name: monitor_name.to_string(),
        })
    }
}

/// `activewindow` — keyboard focus moved to another window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWindowEvent {
    pub window_class: String,
    /// Title of the newly focused window; absorbs any commas it contains.
    pub window_title: String,
}

impl ActiveWindowEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_class, window_title) = split2("activewindow", payload, "window_title")?;
        Ok(Self {
            window_class: window_class.to_string(),
            window_title: window_title.to_string(),
        })
    }
}

/// `activewindowv2` — focus change, identified by window address.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWindowV2Event {
    /// Address of the focused window, or `None` when focus left all windows.
    pub window_address: Option<String>,
    /// The focused window, resolved through the command socket at dispatch
    /// time. `None` when no window is focused or the window vanished before
    /// the lookup completed.
    pub window: Option<Window>,
}

impl ActiveWindowV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        // Older compositor releases encode "no window" as a lone comma.
        let window_address = match payload {
            "" | "," => None,
            addr => Some(addr.to_string()),
        };
        Ok(Self {
            window_address,
            window: None,
        })
    }
}

/// `changefloatingmode` — a window was floated or tiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFloatingModeEvent {
    pub window_address: String,
    pub is_floating: bool,
}

impl ChangeFloatingModeEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, flag) = split2("changefloatingmode", payload, "is_floating")?;
        Ok(Self {
            window_address: window_address.to_string(),
            is_floating: parse_flag("changefloatingmode", "is_floating", flag)?,
        })
    }
}

/// `closelayer` — a layer surface was unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseLayerEvent {
    pub namespace: String,
}

impl CloseLayerEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            namespace: payload.to_string(),
        })
    }
}

/// `closewindow` — a window was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseWindowEvent {
    pub window_address: String,
}

impl CloseWindowEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            window_address: payload.to_string(),
        })
    }
}

/// `configreloaded` — the compositor finished reloading its configuration.
///
/// Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigReloadedEvent;

impl ConfigReloadedEvent {
    pub fn parse(_payload: &str) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}

/// `createworkspace` — a workspace was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkspaceEvent {
    pub workspace_name: String,
    /// Id derived from the name: numeric names parse to their value, the
    /// special workspace maps to [`SPECIAL_WORKSPACE_ID`], renamed
    /// workspaces have none. The v2 event carries the authoritative id.
    pub workspace_id: Option<i32>,
}

impl CreateWorkspaceEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            workspace_name: payload.to_string(),
            workspace_id: workspace_id_hint(payload),
        })
    }
}

/// `createworkspacev2` — a workspace was created (id + name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkspaceV2Event {
    pub workspace_id: i32,
    pub workspace_name: String,
}

impl CreateWorkspaceV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, workspace_name) = split2("createworkspacev2", payload, "workspace_name")?;
        Ok(Self {
            workspace_id: parse_int("createworkspacev2", "workspace_id", id)?,
            workspace_name: workspace_name.to_string(),
        })
    }
}

/// `destroyworkspace` — a workspace was destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyWorkspaceEvent {
    pub workspace_name: String,
    /// See [`CreateWorkspaceEvent::workspace_id`].
    pub workspace_id: Option<i32>,
}

impl DestroyWorkspaceEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            workspace_name: payload.to_string(),
            workspace_id: workspace_id_hint(payload),
        })
    }
}

/// `destroyworkspacev2` — a workspace was destroyed (id + name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyWorkspaceV2Event {
    pub workspace_id: i32,
    pub workspace_name: String,
}

impl DestroyWorkspaceV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, workspace_name) = split2("destroyworkspacev2", payload, "workspace_name")?;
        Ok(Self {
            workspace_id: parse_int("destroyworkspacev2", "workspace_id", id)?,
            workspace_name: workspace_name.to_string(),
        })
    }
}

/// `focusedmon` — the focused monitor changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedMonEvent {
    pub monitor_name: String,
    pub workspace_name: String,
}

impl FocusedMonEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (monitor_name, workspace_name) = split2("focusedmon", payload, "workspace_name")?;
        Ok(Self {
            monitor_name: monitor_name.to_string(),
            workspace_name: workspace_name.to_string(),
        })
    }
}

/// `focusedmonv2` — the focused monitor changed (workspace by id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedMonV2Event {
    /// Monitor names may contain commas; the id is the field after the last
    /// comma, so this event splits from the right.
    pub monitor_name: String,
    pub workspace_id: i32,
}

impl FocusedMonV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (monitor_name, id) = rsplit2("focusedmonv2", payload, "workspace_id")?;
        Ok(Self {
            monitor_name: monitor_name.to_string(),
            workspace_id: parse_int("focusedmonv2", "workspace_id", id)?,
        })
    }
}

/// `fullscreen` — a window entered or left fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenEvent {
    pub is_fullscreen: bool,
}

impl FullscreenEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            is_fullscreen: parse_flag("fullscreen", "is_fullscreen", payload)?,
        })
    }
}

/// `ignoregrouplock` — the `ignoregrouplock` toggle changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreGroupLockEvent {
    pub enabled: bool,
}

impl IgnoreGroupLockEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            enabled: parse_flag("ignoregrouplock", "enabled", payload)?,
        })
    }
}

/// `lockgroups` — the `lockgroups` toggle changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockGroupsEvent {
    pub enabled: bool,
}

impl LockGroupsEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            enabled: parse_flag("lockgroups", "enabled", payload)?,
        })
    }
}

/// `minimized` — a window was minimized or restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizedEvent {
    pub window_address: String,
    pub is_minimized: bool,
}

impl MinimizedEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, flag) = split2("minimized", payload, "is_minimized")?;
        Ok(Self {
            window_address: window_address.to_string(),
            is_minimized: parse_flag("minimized", "is_minimized", flag)?,
        })
    }
}

/// `monitoradded` — a monitor was connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorAddedEvent {
    pub monitor_name: String,
}

impl MonitorAddedEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            monitor_name: payload.to_string(),
        })
    }
}

/// `monitoraddedv2` — a monitor was connected (id, name, description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorAddedV2Event {
    pub monitor_id: i32,
    pub monitor_name: String,
    /// Vendor description; absorbs any commas it contains.
    pub monitor_description: String,
}

impl MonitorAddedV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, name, description) = split3(
            "monitoraddedv2",
            payload,
            ["monitor_id", "monitor_name", "monitor_description"],
        )?;
        Ok(Self {
            monitor_id: parse_int("monitoraddedv2", "monitor_id", id)?,
            monitor_name: name.to_string(),
            monitor_description: description.to_string(),
        })
    }
}

/// `monitorremoved` — a monitor was disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRemovedEvent {
    pub monitor_name: String,
}

impl MonitorRemovedEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            monitor_name: payload.to_string(),
        })
    }
}

/// `moveintogroup` — a window was merged into a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntoGroupEvent {
    pub window_address: String,
}

impl MoveIntoGroupEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            window_address: payload.to_string(),
        })
    }
}

/// `moveoutofgroup` — a window was removed from a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutOfGroupEvent {
    pub window_address: String,
}

impl MoveOutOfGroupEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            window_address: payload.to_string(),
        })
    }
}

/// `movewindow` — a window was moved to a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveWindowEvent {
    pub window_address: String,
    pub workspace_name: String,
}

impl MoveWindowEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, workspace_name) = split2("movewindow", payload, "workspace_name")?;
        Ok(Self {
            window_address: window_address.to_string(),
            workspace_name: workspace_name.to_string(),
        })
    }
}

/// `movewindowv2` — a window was moved to a workspace (with the id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveWindowV2Event {
    pub window_address: String,
    /// The name sits between a comma-free address and a comma-free id, so it
    /// keeps any commas of its own: split once from the left, then once from
    /// the right.
    pub workspace_name: String,
    pub workspace_id: i32,
}

impl MoveWindowV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, rest) = split2("movewindowv2", payload, "workspace_name")?;
        let (workspace_name, id) = rsplit2("movewindowv2", rest, "workspace_id")?;
        Ok(Self {
            window_address: window_address.to_string(),
            workspace_name: workspace_name.to_string(),
            workspace_id: parse_int("movewindowv2", "workspace_id", id)?,
        })
    }
}

/// `moveworkspace` — a workspace was moved to another monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveWorkspaceEvent {
    pub workspace_name: String,
    pub monitor_name: String,
}

impl MoveWorkspaceEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (workspace_name, monitor_name) = rsplit2("moveworkspace", payload, "monitor_name")?;
        Ok(Self {
            workspace_name: workspace_name.to_string(),
            monitor_name: monitor_name.to_string(),
        })
    }
}

/// `moveworkspacev2` — a workspace was moved to another monitor (with id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveWorkspaceV2Event {
    pub workspace_id: i32,
    pub workspace_name: String,
    pub monitor_name: String,
}

impl MoveWorkspaceV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, rest) = split2("moveworkspacev2", payload, "workspace_name")?;
        let (workspace_name, monitor_name) = rsplit2("moveworkspacev2", rest, "monitor_name")?;
        Ok(Self {
            workspace_id: parse_int("moveworkspacev2", "workspace_id", id)?,
            workspace_name: workspace_name.to_string(),
            monitor_name: monitor_name.to_string(),
        })
    }
}

/// `openlayer` — a layer surface was mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenLayerEvent {
    pub namespace: String,
}

impl OpenLayerEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            namespace: payload.to_string(),
        })
    }
}

/// `openwindow` — a window was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowEvent {
    pub window_address: String,
    pub workspace_name: String,
    pub window_class: String,
    /// Title of the new window; absorbs any commas it contains.
    pub window_title: String,
    /// The opened window, resolved through the command socket at dispatch
    /// time. `None` when the window closed again before the lookup
    /// completed.
    pub window: Option<Window>,
}

impl OpenWindowEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, rest) = split2("openwindow", payload, "workspace_name")?;
        let (workspace_name, rest) = split2("openwindow", rest, "window_class")?;
        let (window_class, window_title) = split2("openwindow", rest, "window_title")?;
        Ok(Self {
            window_address: window_address.to_string(),
            workspace_name: workspace_name.to_string(),
            window_class: window_class.to_string(),
            window_title: window_title.to_string(),
            window: None,
        })
    }
}

/// `pin` — a window was pinned or unpinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEvent {
    pub window_address: String,
    pub is_pinned: bool,
}

impl PinEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, flag) = split2("pin", payload, "is_pinned")?;
        Ok(Self {
            window_address: window_address.to_string(),
            is_pinned: parse_flag("pin", "is_pinned", flag)?,
        })
    }
}

/// `renameworkspace` — a workspace was renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameWorkspaceEvent {
    pub workspace_id: i32,
    pub new_name: String,
}

impl RenameWorkspaceEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (id, new_name) = split2("renameworkspace", payload, "new_name")?;
        Ok(Self {
            workspace_id: parse_int("renameworkspace", "workspace_id", id)?,
            new_name: new_name.to_string(),
        })
    }
}

/// What a screencast session is capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreencastOwner {
    Monitor,
    Window,
}

/// `screencast` — a screen-sharing session started or stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreencastEvent {
    pub enabled: bool,
    pub owner: ScreencastOwner,
}

impl ScreencastEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (flag, owner) = split2("screencast", payload, "owner")?;
        let owner = match owner {
            "0" => ScreencastOwner::Monitor,
            "1" => ScreencastOwner::Window,
            value => {
                return Err(DecodeError::InvalidFlag {
                    event: "screencast",
                    field: "owner",
                    value: value.to_string(),
                })
            }
        };
        Ok(Self {
            enabled: parse_flag("screencast", "enabled", flag)?,
            owner,
        })
    }
}

/// `submap` — the active keybind submap changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmapEvent {
    /// Name of the new submap, or `None` when returning to the default.
    pub submap_name: Option<String>,
}

impl SubmapEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            submap_name: optional(payload),
        })
    }
}

/// `togglegroup` — a window group was created or dissolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleGroupEvent {
    pub group_is_active: bool,
    /// Addresses of the windows in the group; split on every comma.
    pub window_addresses: Vec<String>,
}

impl ToggleGroupEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (flag, addresses) = split2("togglegroup", payload, "window_addresses")?;
        Ok(Self {
            group_is_active: parse_flag("togglegroup", "group_is_active", flag)?,
            window_addresses: addresses.split(',').map(str::to_string).collect(),
        })
    }
}

/// `urgent` — a window requested attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgentEvent {
    pub window_address: String,
}

impl UrgentEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            window_address: payload.to_string(),
        })
    }
}

/// `windowtitle` — a window's title changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTitleEvent {
    pub window_address: String,
}

impl WindowTitleEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            window_address: payload.to_string(),
        })
    }
}

/// `windowtitlev2` — a window's title changed (with the new title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTitleV2Event {
    pub window_address: String,
    /// The new title; absorbs any commas it contains.
    pub window_title: String,
}

impl WindowTitleV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (window_address, window_title) = split2("windowtitlev2", payload, "window_title")?;
        Ok(Self {
            window_address: window_address.to_string(),
            window_title: window_title.to_string(),
        })
    }
}

/// `workspace` — the active workspace changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEvent {
    pub workspace_name: String,
    /// See [`CreateWorkspaceEvent::workspace_id`].
    pub workspace_id: Option<i32>,
}

impl WorkspaceEvent {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self {
            workspace_name: payload.to_string(),
            workspace_id: workspace_id_hint(payload),
        })
    }
}

/// `workspacev2` — the active workspace changed (name + id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceV2Event {
    /// Workspace names may contain commas; the id is the field after the
    /// last comma, so this event splits from the right.
    pub workspace_name: String,
    pub workspace_id: i32,
}

impl WorkspaceV2Event {
    pub fn parse(payload: &str) -> Result<Self, DecodeError> {
        let (workspace_name, id) = rsplit2("workspacev2", payload, "workspace_id")?;
        Ok(Self {
            workspace_name: workspace_name.to_string(),
            workspace_id: parse_int("workspacev2", "workspace_id", id)?,
        })
    }
}
