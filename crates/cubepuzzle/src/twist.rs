//! Slice twists.

use std::fmt;

use cubemath::Permutation;
use itertools::Itertools;
use thiserror::Error;

use crate::{Axis, Cubicle, FACELET_COUNT, Facelet, Slice};

/// Error produced when constructing a [`Twist`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// A slice is not perpendicular to the twist axis.
    #[error("slice {slice} is not perpendicular to axis {axis}")]
    SliceNotOnAxis {
        /// Offending slice.
        slice: Slice,
        /// Twist axis.
        axis: Axis,
    },
    /// A slice is given more than once.
    #[error("slice {slice} is given more than once")]
    DuplicateSlice {
        /// Offending slice.
        slice: Slice,
    },
}

/// Rotation of one or more slices around a common axis.
///
/// Each listed slice has an order: the signed number of positive quarter
/// turns it makes. Slices that are not listed do not move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    axis: Axis,
    /// Order of each slice along `axis`, indexed by grid coordinate.
    orders: [Option<i32>; 3],
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders = self.orders().map(|(slice, order)| format!("{slice}: {order}"));
        write!(f, "{}[{}]", self.axis, orders.format(", "))
    }
}

impl Twist {
    /// Constructs a twist around `axis` from a list of slices and their
    /// orders. Slices whose order is a multiple of 4 are left out.
    ///
    /// Returns an error if a slice is not perpendicular to `axis` or appears
    /// more than once.
    pub fn new(axis: Axis, orders: impl IntoIterator<Item = (Slice, i32)>) -> Result<Self, TwistError> {
        let mut seen = [false; 3];
        let mut ret = [None; 3];
        for (slice, order) in orders {
            if slice.axis() != axis {
                return Err(TwistError::SliceNotOnAxis { slice, axis });
            }
            let i = slice.coordinate() as usize;
            if std::mem::replace(&mut seen[i], true) {
                return Err(TwistError::DuplicateSlice { slice });
            }
            ret[i] = Some(order);
        }
        Ok(Self::from_orders(axis, ret))
    }

    /// Constructs a twist around `axis` from the order of each slice, indexed
    /// by grid coordinate. Slices whose order is a multiple of 4 are left
    /// out.
    pub fn from_orders(axis: Axis, orders: [Option<i32>; 3]) -> Self {
        Self {
            axis,
            orders: orders.map(|order| order.filter(|o| o.rem_euclid(4) != 0)),
        }
    }

    /// Returns the twist axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the order of `slice`, or `None` if it is not part of the twist.
    pub fn order(&self, slice: Slice) -> Option<i32> {
        if slice.axis() != self.axis {
            return None;
        }
        self.orders[slice.coordinate() as usize]
    }

    /// Returns the slices in the twist and their orders, sorted by grid
    /// coordinate.
    pub fn orders(&self) -> impl '_ + Iterator<Item = (Slice, i32)> {
        self.axis
            .slices()
            .into_iter()
            .zip(self.orders)
            .filter_map(|(slice, order)| Some((slice, order?)))
    }

    /// Returns the number of slices in the twist.
    pub fn slice_count(&self) -> usize {
        self.orders.iter().flatten().count()
    }

    /// Returns the number of cubicles in the twist, 9 per slice.
    pub fn size(&self) -> usize {
        9 * self.slice_count()
    }

    /// Returns whether `cubicle` belongs to one of the twisted slices.
    pub fn contains(&self, cubicle: Cubicle) -> bool {
        self.order(cubicle.slice(self.axis)).is_some()
    }

    /// Returns the number of positive quarter turns that `cubicle` makes, or
    /// zero if it is not part of the twist.
    pub fn order_of(&self, cubicle: Cubicle) -> i32 {
        self.order(cubicle.slice(self.axis)).unwrap_or(0)
    }

    /// Returns the twist with every order multiplied by `exponent`.
    ///
    /// Slices whose order becomes a multiple of 4 drop out of the twist. An
    /// order too large for `i32` is reduced to an equivalent one in `-1..=2`.
    #[must_use]
    pub fn power(&self, exponent: i32) -> Self {
        let scale = |o: i32| {
            let product = i64::from(o) * i64::from(exponent);
            i32::try_from(product).unwrap_or_else(|_| (product.rem_euclid(4) as i32 + 1) % 4 - 1)
        };
        Self::from_orders(self.axis, self.orders.map(|order| order.map(scale)))
    }

    /// Returns the twist with every order negated.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.power(-1)
    }

    /// Returns the permutation of facelets that the twist produces. Each
    /// facelet is carried along with its cubicle, including facelets of the
    /// cubicle on the axis itself.
    pub fn facelet_permutation(&self) -> Permutation {
        let map = Facelet::all()
            .map(|facelet| facelet.rotated(self.axis, self.order_of(facelet.cubicle)).index())
            .collect_vec();
        debug_assert_eq!(map.len(), FACELET_COUNT);
        // Quarter turns of the grid are bijections on facelets.
        Permutation::from_vec(map).expect("twist does not permute facelets")
    }
}
