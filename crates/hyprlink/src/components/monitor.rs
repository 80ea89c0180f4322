//! The [`Monitor`] component.

use serde::Deserialize;

use crate::components::WorkspaceRef;
use crate::error::HyprError;
use crate::instance::Instance;

/// A snapshot of one monitor, as reported by the `monitors` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Monitor {
    /// Numeric id.
    pub id: i32,
    /// Output name, e.g. `DP-1`.
    pub name: String,
    /// Vendor description string.
    pub description: String,
    /// Manufacturer name.
    pub make: String,
    /// Model number.
    pub model: String,
    /// Serial string.
    pub serial: String,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Refresh rate in Hz.
    #[serde(rename = "refreshRate")]
    pub refresh_rate: f64,
    /// X position in the global layout.
    #[serde(rename = "x")]
    pub position_x: i32,
    /// Y position in the global layout.
    #[serde(rename = "y")]
    pub position_y: i32,
    /// The workspace currently active on this monitor.
    #[serde(rename = "activeWorkspace")]
    pub active_workspace: WorkspaceRef,
    /// Reserved area (left, top, right, bottom), in pixels.
    #[serde(default)]
    pub reserved: Vec<i32>,
    /// Output scale factor.
    pub scale: f64,
    /// Output transform (rotation/flip) code.
    pub transform: i32,
    /// Whether the focused window is on this monitor.
    #[serde(rename = "focused")]
    pub is_focused: bool,
    /// Whether the monitor is powered via DPMS.
    #[serde(rename = "dpmsStatus")]
    pub uses_dpms: bool,
    /// Whether variable refresh rate is enabled.
    pub vrr: bool,
}

impl Monitor {
    /// Fetches all workspaces currently on this monitor.
    pub fn workspaces(&self, instance: &Instance) -> Result<Vec<super::Workspace>, HyprError> {
        let workspaces = instance.workspaces()?;
        Ok(workspaces
            .into_iter()
            .filter(|workspace| workspace.monitor_name == self.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITOR_JSON: &str = r#"{
        "id": 0,
        "name": "DP-1",
        "description": "Dell Inc. DELL U2720Q",
        "make": "Dell Inc.",
        "model": "DELL U2720Q",
        "serial": "ABCDEF",
        "width": 3840,
        "height": 2160,
        "refreshRate": 59.997,
        "x": 0,
        "y": 0,
        "activeWorkspace": {"id": 3, "name": "3"},
        "specialWorkspace": {"id": 0, "name": ""},
        "reserved": [0, 40, 0, 0],
        "scale": 1.5,
        "transform": 0,
        "focused": true,
        "dpmsStatus": true,
        "vrr": false
    }"#;

    #[test]
    fn deserializes_monitor_json() {
        let monitor: Monitor = serde_json::from_str(MONITOR_JSON).unwrap();
        assert_eq!(monitor.id, 0);
        assert_eq!(monitor.name, "DP-1");
        assert_eq!(monitor.width, 3840);
        assert_eq!(monitor.height, 2160);
        assert!((monitor.refresh_rate - 59.997).abs() < f64::EPSILON);
        assert_eq!(monitor.active_workspace.id, 3);
        assert_eq!(monitor.reserved, vec![0, 40, 0, 0]);
        assert!(monitor.is_focused);
        assert!(monitor.uses_dpms);
        assert!(!monitor.vrr);
    }
}
