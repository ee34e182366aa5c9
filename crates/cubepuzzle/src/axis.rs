use strum::{Display, EnumIter, EnumString};

/// Coordinate axis of the cube.
///
/// Grid coordinates increase from L to R along X, from U to D along Y, and
/// from B to F along Z.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// L-R axis.
    X = 0,
    /// U-D axis.
    Y = 1,
    /// B-F axis.
    Z = 2,
}

impl Axis {
    /// Returns the index of the grid coordinate along this axis.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the other two axes in cyclic order, so that a positive
    /// quarter turn around `self` takes the first onto the second.
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Returns the three slices perpendicular to this axis, ordered by grid
    /// coordinate.
    pub fn slices(self) -> [Slice; 3] {
        match self {
            Axis::X => [Slice::L, Slice::M, Slice::R],
            Axis::Y => [Slice::U, Slice::E, Slice::D],
            Axis::Z => [Slice::B, Slice::S, Slice::F],
        }
    }
}

/// Layer of 9 cubicles perpendicular to an axis.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    /// Left.
    L,
    /// Middle, between L and R.
    M,
    /// Right.
    R,
    /// Up.
    U,
    /// Equator, between U and D.
    E,
    /// Down.
    D,
    /// Back.
    B,
    /// Standing, between B and F.
    S,
    /// Front.
    F,
}

impl Slice {
    /// Returns the axis perpendicular to the slice.
    pub fn axis(self) -> Axis {
        use Slice::*;

        match self {
            L | M | R => Axis::X,
            U | E | D => Axis::Y,
            B | S | F => Axis::Z,
        }
    }

    /// Returns the grid coordinate of the slice along its axis.
    pub fn coordinate(self) -> u8 {
        use Slice::*;

        match self {
            L | U | B => 0,
            M | E | S => 1,
            R | D | F => 2,
        }
    }

    /// Returns the slice at grid coordinate `coordinate` along `axis`, or
    /// `None` if the coordinate is out of range.
    pub fn at(axis: Axis, coordinate: u8) -> Option<Slice> {
        axis.slices().get(coordinate as usize).copied()
    }
}
