//! 3x3x3 twisty puzzle model.
//!
//! The puzzle state is a [`Permutation`] of the 162 facelets (27 cubicles
//! with 6 facelet slots each). Named moves carry both that permutation and a
//! compact [`Twist`] describing which slices rotate, which is enough to
//! animate a move without inspecting the permutation.

#[macro_use]
extern crate lazy_static;

mod axis;
mod cubicle;
mod moves;
mod notation;
mod twist;

/// Re-export of `cubemath`.
pub use cubemath;
pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use cubemath::Permutation;

    pub use crate::axis::{Axis, Slice};
    pub use crate::cubicle::{CUBICLE_COUNT, Cubicle, FACELET_COUNT, FACES_PER_CUBICLE, Face, Facelet};
    pub use crate::moves::{BaseMove, Move, MoveId};
    pub use crate::notation::{NotationError, parse_moves};
    pub use crate::twist::{Twist, TwistError};
}
