//! Named moves.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use cubemath::Permutation;
use strum::{EnumIter, IntoEnumIterator};

use crate::{Axis, Cubicle, NotationError, Twist};

/// Built-in move.
///
/// Uppercase face moves turn one outer slice, lowercase ("wide") face moves
/// turn that slice and the middle slice next to it, `M`/`E`/`S` turn a
/// middle slice, and `x`/`y`/`z` turn the whole cube.
#[derive(Debug, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum BaseMove {
    B,
    WideB,
    D,
    WideD,
    E,
    F,
    WideF,
    L,
    WideL,
    M,
    R,
    WideR,
    S,
    U,
    WideU,
    X,
    Y,
    Z,
}

struct BaseMoveData {
    twist: Twist,
    permutation: Permutation,
}

lazy_static! {
    /// Twist and facelet permutation of each base move, indexed by
    /// discriminant.
    static ref BASE_MOVES: Vec<BaseMoveData> = BaseMove::iter()
        .map(|base| {
            let twist = base.base_twist();
            let permutation = twist.facelet_permutation();
            BaseMoveData { twist, permutation }
        })
        .collect();
}

impl fmt::Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl BaseMove {
    /// Returns the notation symbol.
    pub fn symbol(self) -> char {
        use BaseMove::*;

        match self {
            B => 'B',
            WideB => 'b',
            D => 'D',
            WideD => 'd',
            E => 'E',
            F => 'F',
            WideF => 'f',
            L => 'L',
            WideL => 'l',
            M => 'M',
            R => 'R',
            WideR => 'r',
            S => 'S',
            U => 'U',
            WideU => 'u',
            X => 'x',
            Y => 'y',
            Z => 'z',
        }
    }

    /// Returns the move with the given notation symbol, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::iter().find(|base| base.symbol() == symbol)
    }

    /// Returns the slice twist of a single application of the move.
    pub fn twist(self) -> &'static Twist {
        &BASE_MOVES[self as usize].twist
    }

    /// Returns the facelet permutation of a single application of the move.
    pub fn permutation(self) -> &'static Permutation {
        &BASE_MOVES[self as usize].permutation
    }

    /// Clockwise face moves follow the face's outward normal, so faces on
    /// the negative side of an axis turn by -1. Middle slices follow L, U,
    /// and F respectively.
    fn base_twist(self) -> Twist {
        use BaseMove::*;

        let (axis, orders) = match self {
            B => (Axis::Z, [Some(-1), None, None]),
            WideB => (Axis::Z, [Some(-1), Some(-1), None]),
            D => (Axis::Y, [None, None, Some(1)]),
            WideD => (Axis::Y, [None, Some(1), Some(1)]),
            E => (Axis::Y, [None, Some(1), None]),
            F => (Axis::Z, [None, None, Some(1)]),
            WideF => (Axis::Z, [None, Some(1), Some(1)]),
            L => (Axis::X, [Some(-1), None, None]),
            WideL => (Axis::X, [Some(-1), Some(-1), None]),
            M => (Axis::X, [None, Some(-1), None]),
            R => (Axis::X, [None, None, Some(1)]),
            WideR => (Axis::X, [None, Some(1), Some(1)]),
            S => (Axis::Z, [None, Some(1), None]),
            U => (Axis::Y, [Some(-1), None, None]),
            WideU => (Axis::Y, [Some(-1), Some(-1), None]),
            X => (Axis::X, [Some(1); 3]),
            Y => (Axis::Y, [Some(-1); 3]),
            Z => (Axis::Z, [Some(1); 3]),
        };
        Twist::from_orders(axis, orders)
    }
}

static NEXT_MOVE_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of a [`Move`] instance.
///
/// Clones of a move share its ID. Every call to [`Move::new()`] produces a
/// fresh one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveId(u64);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl MoveId {
    fn next() -> Self {
        Self(NEXT_MOVE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Base move applied some number of times.
///
/// The permutation and twist are both derived from the base move and the
/// exponent when the move is constructed, so they always describe the same
/// motion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    id: MoveId,
    base: BaseMove,
    exponent: i32,
    permutation: Permutation,
    twist: Twist,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if self.exponent.unsigned_abs() != 1 {
            write!(f, "{}", self.exponent.unsigned_abs())?;
        }
        if self.exponent < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::notation::parse_move(s)
    }
}

impl From<BaseMove> for Move {
    fn from(base: BaseMove) -> Self {
        Self::new(base, 1)
    }
}

impl Move {
    /// Constructs a move that applies `base` `exponent` times. Negative
    /// exponents turn the other way.
    pub fn new(base: BaseMove, exponent: i32) -> Self {
        Self {
            id: MoveId::next(),
            base,
            exponent,
            permutation: base.permutation().power(exponent),
            twist: base.twist().power(exponent),
        }
    }

    /// Returns the unique ID of this move instance.
    pub fn id(&self) -> MoveId {
        self.id
    }
    /// Returns the base move.
    pub fn base(&self) -> BaseMove {
        self.base
    }
    /// Returns the number of times the base move is applied.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }
    /// Returns the permutation of the 162 facelets.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }
    /// Returns the slice twist.
    pub fn twist(&self) -> &Twist {
        &self.twist
    }

    /// Returns the number of positive quarter turns that `cubicle` makes
    /// around the twist axis, or zero if it is not part of the move.
    pub fn order(&self, cubicle: Cubicle) -> i32 {
        self.twist.order_of(cubicle)
    }

    /// Returns whether `cubicle` belongs to one of the twisted slices.
    pub fn affects(&self, cubicle: Cubicle) -> bool {
        self.twist.contains(cubicle)
    }

    /// Returns a new move that undoes this one. `i32::MIN` is a multiple of
    /// 4 and is its own inverse.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.base, self.exponent.wrapping_neg())
    }
}

#[cfg(test)]
mod tests;
