//! The [`Window`] component.

use serde::Deserialize;

use crate::error::HyprError;
use crate::instance::Instance;

/// The workspace a window reports itself on, as embedded in window queries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceRef {
    /// Numeric id of the workspace.
    pub id: i32,
    /// Name of the workspace.
    pub name: String,
}

/// A snapshot of one window (client), as reported by the `clients` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Window {
    /// Hexadecimal address string, the window's unique identifier.
    pub address: String,
    /// Whether the window is currently mapped.
    #[serde(rename = "mapped")]
    pub is_mapped: bool,
    /// Whether the window is hidden (e.g. an inactive group member).
    #[serde(rename = "hidden")]
    pub is_hidden: bool,
    /// Absolute position on the monitor, in pixels.
    pub at: (i32, i32),
    /// Width and height, in pixels.
    pub size: (i32, i32),
    /// The workspace the window is on.
    pub workspace: WorkspaceRef,
    /// Whether this is a floating window.
    #[serde(rename = "floating")]
    pub is_floating: bool,
    /// Numeric id of the monitor the window is on.
    #[serde(rename = "monitor")]
    pub monitor_id: i32,
    /// Window manager class currently assigned to the window.
    #[serde(rename = "class")]
    pub wm_class: String,
    /// Current title.
    pub title: String,
    /// Window manager class at creation time.
    #[serde(rename = "initialClass")]
    pub initial_wm_class: String,
    /// Title at creation time.
    #[serde(rename = "initialTitle")]
    pub initial_title: String,
    /// Process id of the owning process.
    pub pid: i32,
    /// Whether the window is displayed through XWayland.
    #[serde(rename = "xwayland")]
    pub is_xwayland: bool,
    /// Whether the window is pinned to every workspace.
    #[serde(rename = "pinned")]
    pub is_pinned: bool,
    /// Fullscreen state; `0` when not fullscreen.
    pub fullscreen: i32,
    /// Addresses of the other members of the window's group, if any.
    #[serde(default)]
    pub grouped: Vec<String>,
    /// Tags assigned to the window.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Window {
    /// The window's address as an integer.
    ///
    /// Addresses are hexadecimal strings, with or without a `0x` prefix.
    pub fn address_as_int(&self) -> Result<u64, std::num::ParseIntError> {
        let digits = self.address.strip_prefix("0x").unwrap_or(&self.address);
        u64::from_str_radix(digits, 16)
    }

    /// Fetches the workspace this window is on.
    ///
    /// Issues a fresh query; `None` if the workspace no longer exists.
    pub fn workspace(&self, instance: &Instance) -> Result<Option<super::Workspace>, HyprError> {
        instance.workspace_by_id(self.workspace.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_JSON: &str = r#"{
        "address": "0x556f1a2eef10",
        "mapped": true,
        "hidden": false,
        "at": [11, 41],
        "size": [1344, 716],
        "workspace": {"id": 3, "name": "3"},
        "floating": false,
        "monitor": 0,
        "class": "kitty",
        "title": "hyprctl -j clients | ~",
        "initialClass": "kitty",
        "initialTitle": "fish",
        "pid": 54486,
        "xwayland": false,
        "pinned": false,
        "fullscreen": 0,
        "grouped": [],
        "tags": [],
        "swallowing": "0x0",
        "focusHistoryID": 0
    }"#;

    #[test]
    fn deserializes_client_json() {
        let window: Window = serde_json::from_str(WINDOW_JSON).unwrap();
        assert_eq!(window.address, "0x556f1a2eef10");
        assert!(window.is_mapped);
        assert!(!window.is_hidden);
        assert_eq!(window.at, (11, 41));
        assert_eq!(window.size, (1344, 716));
        assert_eq!(window.workspace.id, 3);
        assert_eq!(window.workspace.name, "3");
        assert_eq!(window.monitor_id, 0);
        assert_eq!(window.wm_class, "kitty");
        assert_eq!(window.title, "hyprctl -j clients | ~");
        assert_eq!(window.initial_wm_class, "kitty");
        assert_eq!(window.initial_title, "fish");
        assert_eq!(window.pid, 54486);
        assert!(!window.is_xwayland);
        assert!(!window.is_pinned);
        assert_eq!(window.fullscreen, 0);
        assert!(window.grouped.is_empty());
    }

    #[test]
    fn tolerates_missing_group_fields() {
        // Older compositor releases do not report grouping or tags.
        let trimmed = WINDOW_JSON
            .replace("\"grouped\": [],", "")
            .replace("\"tags\": [],", "");
        let window: Window = serde_json::from_str(&trimmed).unwrap();
        assert!(window.grouped.is_empty());
        assert!(window.tags.is_empty());
    }

    #[test]
    fn address_parses_with_and_without_prefix() {
        let mut window: Window = serde_json::from_str(WINDOW_JSON).unwrap();
        assert_eq!(window.address_as_int().unwrap(), 0x556f1a2eef10);

        window.address = "556f1a2eef10".to_string();
        assert_eq!(window.address_as_int().unwrap(), 0x556f1a2eef10);

        window.address = "not hex".to_string();
        assert!(window.address_as_int().is_err());
    }
}
