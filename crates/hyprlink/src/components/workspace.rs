//! The [`Workspace`] component.

use serde::Deserialize;

use crate::error::HyprError;
use crate::event::SPECIAL_WORKSPACE_ID;
use crate::instance::Instance;

/// A snapshot of one workspace, as reported by the `workspaces` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    /// Numeric id. Regular workspaces count up from 1; special workspaces
    /// use reserved negative ids.
    pub id: i32,
    /// Assigned name.
    pub name: String,
    /// Name of the monitor the workspace is on.
    #[serde(rename = "monitor")]
    pub monitor_name: String,
    /// Address of the most recently active window on the workspace.
    #[serde(rename = "lastwindow")]
    pub last_window_address: String,
    /// Title of the most recently active window on the workspace.
    #[serde(rename = "lastwindowtitle")]
    pub last_window_title: String,
    /// Number of windows placed on the workspace.
    #[serde(rename = "windows")]
    pub window_count: u32,
    /// Whether at least one window on the workspace is fullscreen.
    #[serde(rename = "hasfullscreen")]
    pub has_fullscreen: bool,
}

impl Workspace {
    /// Whether this is the special (scratchpad) workspace.
    pub fn is_special(&self) -> bool {
        self.id == SPECIAL_WORKSPACE_ID || self.name.starts_with("special")
    }

    /// Fetches the monitor this workspace is on.
    ///
    /// Issues a fresh query; `None` if the monitor no longer exists.
    pub fn monitor(&self, instance: &Instance) -> Result<Option<super::Monitor>, HyprError> {
        instance.monitor_by_name(&self.monitor_name)
    }

    /// Fetches all windows currently on this workspace.
    pub fn windows(&self, instance: &Instance) -> Result<Vec<super::Window>, HyprError> {
        let windows = instance.windows()?;
        Ok(windows
            .into_iter()
            .filter(|window| window.workspace.id == self.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSPACE_JSON: &str = r#"{
        "id": 3,
        "name": "3",
        "monitor": "DP-1",
        "monitorID": 0,
        "windows": 2,
        "hasfullscreen": false,
        "lastwindow": "0x556f1a2eef10",
        "lastwindowtitle": "fish"
    }"#;

    #[test]
    fn deserializes_workspace_json() {
        let workspace: Workspace = serde_json::from_str(WORKSPACE_JSON).unwrap();
        assert_eq!(workspace.id, 3);
        assert_eq!(workspace.name, "3");
        assert_eq!(workspace.monitor_name, "DP-1");
        assert_eq!(workspace.window_count, 2);
        assert!(!workspace.has_fullscreen);
        assert_eq!(workspace.last_window_address, "0x556f1a2eef10");
        assert_eq!(workspace.last_window_title, "fish");
        assert!(!workspace.is_special());
    }

    #[test]
    fn recognizes_the_special_workspace() {
        let special: Workspace = serde_json::from_str(
            r#"{
                "id": -99,
                "name": "special:special",
                "monitor": "DP-1",
                "windows": 1,
                "hasfullscreen": false,
                "lastwindow": "0x0",
                "lastwindowtitle": ""
            }"#,
        )
        .unwrap();
        assert!(special.is_special());
    }
}
