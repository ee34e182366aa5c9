//! Cubicles and facelets of the 3x3x3 grid.
//!
//! Cubicle `(x, y, z)` has index `9x + 3y + z`, and its facelets occupy the
//! six consecutive indices starting at `6 * index`, one per [`Face`] in
//! [`Face::ALL`] order.

use std::fmt;

use strum::{Display, EnumIter};

use crate::{Axis, Slice};

/// Number of cubicles in the grid.
pub const CUBICLE_COUNT: usize = 27;
/// Number of facelet slots per cubicle.
pub const FACES_PER_CUBICLE: usize = 6;
/// Number of facelets in the grid.
pub const FACELET_COUNT: usize = CUBICLE_COUNT * FACES_PER_CUBICLE;

/// Direction that a facelet faces.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Towards +Z.
    F = 0,
    /// Towards -Y.
    U = 1,
    /// Towards -Z.
    B = 2,
    /// Towards +X.
    R = 3,
    /// Towards -X.
    L = 4,
    /// Towards +Y.
    D = 5,
}

impl Face {
    /// All faces, in facelet slot order.
    pub const ALL: [Face; FACES_PER_CUBICLE] = [Face::F, Face::U, Face::B, Face::R, Face::L, Face::D];

    /// Returns the facelet slot of this face within a cubicle.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Returns the outward unit normal in grid coordinates.
    pub fn normal(self) -> [i8; 3] {
        match self {
            Face::F => [0, 0, 1],
            Face::U => [0, -1, 0],
            Face::B => [0, 0, -1],
            Face::R => [1, 0, 0],
            Face::L => [-1, 0, 0],
            Face::D => [0, 1, 0],
        }
    }

    /// Returns the face whose normal is `normal`, if any.
    pub fn from_normal(normal: [i8; 3]) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.normal() == normal)
    }

    /// Returns the face that this one is carried to by `quarter_turns`
    /// positive quarter turns around `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Face {
        let cycle = match axis {
            Axis::X => [Face::F, Face::U, Face::B, Face::D],
            Axis::Y => [Face::F, Face::R, Face::B, Face::L],
            Axis::Z => [Face::U, Face::R, Face::D, Face::L],
        };
        match cycle.iter().position(|&f| f == self) {
            Some(i) => cycle[(i + quarter_turns.rem_euclid(4) as usize) % 4],
            None => self,
        }
    }
}

/// Position in the 3x3x3 grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cubicle {
    coords: [u8; 3],
}

impl fmt::Debug for Cubicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.coords;
        write!(f, "Cubicle({x}, {y}, {z})")
    }
}

impl Cubicle {
    /// Returns the cubicle at grid coordinates `[x, y, z]`, or `None` if any
    /// coordinate is greater than 2.
    pub fn new(coords: [u8; 3]) -> Option<Self> {
        coords.iter().all(|&c| c < 3).then_some(Self { coords })
    }

    /// Returns the cubicle with the given index, or `None` if it is out of
    /// range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CUBICLE_COUNT).then(|| Self {
            coords: [(index / 9) as u8, (index / 3 % 3) as u8, (index % 3) as u8],
        })
    }

    /// Returns all cubicles in index order.
    pub fn all() -> impl Iterator<Item = Cubicle> {
        (0..CUBICLE_COUNT).filter_map(Self::from_index)
    }

    /// Returns the index of the cubicle.
    pub fn index(self) -> usize {
        let [x, y, z] = self.coords.map(usize::from);
        9 * x + 3 * y + z
    }

    /// Returns the grid coordinates.
    pub fn coords(self) -> [u8; 3] {
        self.coords
    }

    /// Returns the position relative to the center of the cube, with each
    /// component in `-1..=1`.
    pub fn offset(self) -> [i8; 3] {
        self.coords.map(|c| c as i8 - 1)
    }

    /// Returns the slice containing this cubicle along `axis`.
    pub fn slice(self, axis: Axis) -> Slice {
        axis.slices()[self.coords[axis.index()] as usize]
    }

    /// Returns the slices containing this cubicle along X, Y, and Z.
    pub fn slices(self) -> [Slice; 3] {
        [Axis::X, Axis::Y, Axis::Z].map(|axis| self.slice(axis))
    }

    /// Returns the facelet of this cubicle facing `face`.
    pub fn facelet(self, face: Face) -> Facelet {
        Facelet { cubicle: self, face }
    }

    /// Returns the facelets of this cubicle in slot order.
    pub fn facelets(self) -> impl Iterator<Item = Facelet> {
        Face::ALL.into_iter().map(move |face| self.facelet(face))
    }

    /// Returns the cubicle that this one is carried to by `quarter_turns`
    /// positive quarter turns around `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Cubicle {
        let mut offset = self.offset();
        let (j, k) = axis.others();
        for _ in 0..quarter_turns.rem_euclid(4) {
            (offset[j.index()], offset[k.index()]) = (-offset[k.index()], offset[j.index()]);
        }
        Cubicle {
            coords: offset.map(|c| (c + 1) as u8),
        }
    }
}

/// Sticker slot on one side of a cubicle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet {
    /// Cubicle containing the facelet.
    pub cubicle: Cubicle,
    /// Direction the facelet faces.
    pub face: Face,
}

impl Facelet {
    /// Returns all facelets in index order.
    pub fn all() -> impl Iterator<Item = Facelet> {
        Cubicle::all().flat_map(Cubicle::facelets)
    }

    /// Returns the facelet with the given index, or `None` if it is out of
    /// range.
    pub fn from_index(index: usize) -> Option<Self> {
        Some(Facelet {
            cubicle: Cubicle::from_index(index / FACES_PER_CUBICLE)?,
            face: Face::ALL[index % FACES_PER_CUBICLE],
        })
    }

    /// Returns the index of the facelet in `0..FACELET_COUNT`.
    pub fn index(self) -> usize {
        self.cubicle.index() * FACES_PER_CUBICLE + self.face.slot()
    }

    /// Returns the facelet that this one is carried to by `quarter_turns`
    /// positive quarter turns around `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i32) -> Facelet {
        Facelet {
            cubicle: self.cubicle.rotated(axis, quarter_turns),
            face: self.face.rotated(axis, quarter_turns),
        }
    }
}
