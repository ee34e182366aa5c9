//! Mouse and touch dragging.
//!
//! Dragging rotates the whole puzzle about an axis perpendicular to the
//! pointer movement, in proportion to the distance moved.

use cubemath::cgmath::{Deg, InnerSpace, Rad, Vector3};
use cubemath::{Float, Rotation};
use cubeprefs::InteractionPreferences;

/// Free-drag orientation of the whole puzzle.
///
/// Pointer movement while a drag is active rotates the puzzle around the
/// screen-space axis perpendicular to the movement, by an angle proportional
/// to the distance moved.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    rotation: Rotation,
    /// Pixels per radian.
    sensitivity: Float,
    active: bool,
    /// Last reported touch position, in screen pixels.
    previous_touch: Option<[Float; 2]>,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(&InteractionPreferences::default())
    }
}

impl DragState {
    /// Constructs an idle drag state with the initial view orientation from
    /// `prefs`.
    pub fn new(prefs: &InteractionPreferences) -> Self {
        let mut rotation = Rotation::identity();
        rotation
            .apply_axis_angle(Vector3::unit_y(), Rad::from(Deg(prefs.initial_yaw)).0)
            .apply_axis_angle(Vector3::unit_x(), Rad::from(Deg(prefs.initial_pitch)).0);
        Self {
            rotation,
            sensitivity: prefs.drag_sensitivity,
            active: false,
            previous_touch: None,
        }
    }

    /// Returns the current orientation.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }
    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Starts a drag, on mouse press or touch start.
    pub fn begin(&mut self) {
        self.active = true;
    }

    /// Stops the drag, on mouse release or when the pointer leaves the view.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Stops the drag and forgets the touch position, on touch end or touch
    /// cancel.
    pub fn end_touch(&mut self) {
        self.active = false;
        self.previous_touch = None;
    }

    /// Handles relative mouse movement.
    pub fn mouse_move(&mut self, dx: Float, dy: Float) {
        self.rotate(dx, dy);
    }

    /// Handles a touch moving to absolute screen position `(x, y)`. The
    /// first touch after [`DragState::end_touch()`] only records its
    /// position.
    pub fn touch_move(&mut self, x: Float, y: Float) {
        if let Some([px, py]) = self.previous_touch {
            self.rotate(x - px, y - py);
        }
        self.previous_touch = Some([x, y]);
    }

    fn rotate(&mut self, dx: Float, dy: Float) {
        if !self.active {
            return;
        }
        let axis = Vector3::new(-dy, dx, 0.0);
        let angle = axis.magnitude() / self.sensitivity;
        if angle.is_finite() {
            self.rotation.apply_axis_angle(axis, angle);
        }
    }
}
