use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Pixels of pointer travel per radian of free-drag rotation.
    pub drag_sensitivity: f64,
    /// Initial rotation of the view around the vertical axis, in degrees.
    /// Applied before `initial_pitch`.
    pub initial_yaw: f64,
    /// Initial rotation of the view around the horizontal axis, in degrees.
    pub initial_pitch: f64,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_sensitivity: 80.0,
            initial_yaw: -45.0,
            initial_pitch: -45.0,
        }
    }
}
