//! Free 3D orientation stored as a unit quaternion.

use cgmath::{InnerSpace, One, Quaternion, Rad, Rotation3, Vector3, Zero};

use crate::Float;

/// Rotation by `angle` radians around `axis`.
///
/// When produced by [`Rotation::decomposition()`], `axis` is a unit vector,
/// or the zero vector if `angle` is zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    /// Axis of rotation.
    pub axis: Vector3<Float>,
    /// Angle of rotation in radians.
    pub angle: Float,
}
impl AxisAngle {
    /// Constructs a rotation of `angle` radians around `axis`. `axis` does
    /// not need to be normalized.
    pub fn new(axis: Vector3<Float>, angle: Float) -> Self {
        Self { axis, angle }
    }
}

/// Orientation of the whole puzzle, used for free dragging.
///
/// The axis-angle decomposition is cached and kept in sync with the
/// quaternion after every mutation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    quaternion: Quaternion<Float>,
    decomposition: AxisAngle,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    /// Returns the zero rotation.
    pub fn identity() -> Self {
        Self::from_quaternion(Quaternion::one())
    }

    /// Returns a rotation of `angle` radians around `axis`.
    pub fn from_axis_angle(axis: Vector3<Float>, angle: Float) -> Self {
        let mut ret = Self::identity();
        ret.set_from_axis_angle(axis, angle);
        ret
    }

    fn from_quaternion(quaternion: Quaternion<Float>) -> Self {
        Self {
            quaternion,
            decomposition: decompose(quaternion),
        }
    }

    /// Returns the underlying unit quaternion.
    pub fn quaternion(&self) -> Quaternion<Float> {
        self.quaternion
    }

    /// Returns the axis-angle decomposition.
    ///
    /// The angle is in the range `[0, 2π]`. At zero angle the axis is the
    /// zero vector.
    pub fn decomposition(&self) -> AxisAngle {
        self.decomposition
    }
    /// Returns the X component of the decomposition axis.
    pub fn axis_x(&self) -> Float {
        self.decomposition.axis.x
    }
    /// Returns the Y component of the decomposition axis.
    pub fn axis_y(&self) -> Float {
        self.decomposition.axis.y
    }
    /// Returns the Z component of the decomposition axis.
    pub fn axis_z(&self) -> Float {
        self.decomposition.axis.z
    }
    /// Returns the decomposition angle in radians.
    pub fn angle(&self) -> Float {
        self.decomposition.angle
    }

    /// Applies an incremental rotation in world space. The new rotation is
    /// premultiplied, so it happens after everything applied so far.
    pub fn apply(&mut self, delta: AxisAngle) -> &mut Self {
        self.apply_axis_angle(delta.axis, delta.angle)
    }

    /// Applies an incremental rotation of `angle` radians around `axis` in
    /// world space. `axis` is normalized first; a zero-length axis leaves the
    /// rotation unchanged.
    pub fn apply_axis_angle(&mut self, axis: Vector3<Float>, angle: Float) -> &mut Self {
        let Some(delta) = quaternion_from_axis_angle(axis, angle) else {
            log::trace!("ignoring rotation around degenerate axis {axis:?}");
            return self;
        };
        self.set_quaternion((delta * self.quaternion).normalize());
        self
    }

    /// Replaces the rotation with `angle` radians around `axis`. A
    /// zero-length axis resets to the identity.
    pub fn set_from_axis_angle(&mut self, axis: Vector3<Float>, angle: Float) -> &mut Self {
        let q = quaternion_from_axis_angle(axis, angle).unwrap_or_else(Quaternion::one);
        self.set_quaternion(q);
        self
    }

    /// Replaces the rotation with a quaternion, which is normalized first.
    /// A zero quaternion resets to the identity.
    pub fn set_from_quaternion(&mut self, quaternion: Quaternion<Float>) -> &mut Self {
        let q = if quaternion.magnitude2() > 0.0 {
            quaternion.normalize()
        } else {
            log::warn!("ignoring zero quaternion; resetting rotation to identity");
            Quaternion::one()
        };
        self.set_quaternion(q);
        self
    }

    fn set_quaternion(&mut self, quaternion: Quaternion<Float>) {
        self.quaternion = quaternion;
        self.decomposition = decompose(quaternion);
    }

    /// Rotates a vector.
    pub fn rotate_vector(&self, v: Vector3<Float>) -> Vector3<Float> {
        cgmath::Rotation::rotate_vector(&self.quaternion, v)
    }
}

fn quaternion_from_axis_angle(axis: Vector3<Float>, angle: Float) -> Option<Quaternion<Float>> {
    let magnitude = axis.magnitude();
    (magnitude > 0.0 && magnitude.is_finite())
        .then(|| Quaternion::from_axis_angle(axis / magnitude, Rad(angle)))
}

/// Decomposes a unit quaternion into an axis and angle.
///
/// `atan2` keeps the angle accurate near 0 and π, where `acos(w)` loses
/// precision, and continuous where `w` changes sign.
///
/// See <https://en.wikipedia.org/wiki/Axis%E2%80%93angle_representation#Unit_quaternions>
fn decompose(q: Quaternion<Float>) -> AxisAngle {
    let angle = 2.0 * q.v.magnitude().atan2(q.s);
    let axis = if angle != 0.0 {
        q.v / (angle / 2.0).sin()
    } else {
        Vector3::zero()
    };
    AxisAngle { axis, angle }
}

#[cfg(test)]
mod tests;
