//! Finite permutation and 3D rotation primitives.
//!
//! [`Permutation`] models a bijection on `{0, ..., n-1}` and is the state
//! representation for cube facelets. [`Rotation`] tracks a free 3D
//! orientation as a unit quaternion.

pub use {approx, cgmath};

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

pub mod permutation;
pub mod rotation;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::permutation::{Parity, Permutation, PermutationError};
    pub use crate::rotation::{AxisAngle, Rotation};
    pub use crate::{EPSILON, Float};
}
pub use prelude::*;
