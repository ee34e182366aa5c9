//! Permutation math.
//!
//! A [`Permutation`] is a bijection on `{0, ..., n-1}`. Composition uses
//! pipeline order: `p.apply(&q)` maps `x` to `q(p(x))`, so a sequence of
//! moves reads left to right.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

mod notation;

pub use notation::parse_cycles;

/// Parity of a permutation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Parity {
    /// Even number of swaps.
    #[default]
    Even = 0,
    /// Odd number of swaps.
    Odd = 1,
}
impl Parity {
    /// Returns the opposite parity.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

/// Error produced when constructing a [`Permutation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// Cycle notation could not be parsed.
    #[error("invalid cycle notation at byte {offset}: unexpected {found}")]
    Syntax {
        /// Byte offset of the first unparsable character.
        offset: usize,
        /// Description of what was found there.
        found: String,
    },
    /// An index is not less than the domain size.
    #[error("index {index} is out of range for a permutation of {n} elements")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Domain size.
        n: usize,
    },
    /// An index appears more than once in cycle notation.
    #[error("index {index} appears in more than one place")]
    RepeatedIndex {
        /// Offending index.
        index: usize,
    },
    /// An array is not a rearrangement of `0..n`.
    #[error("map {map:?} is not an element of S({n})")]
    NotAPermutation {
        /// Offending map.
        map: Vec<usize>,
        /// Domain size.
        n: usize,
    },
}

/// Bijection on `{0, ..., n-1}`.
///
/// Every constructor validates its input, so a `Permutation` value is always
/// a valid bijection. Operations return new values; nothing is shared
/// between two permutations.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    /// `map[x]` is the image of `x`.
    map: Vec<usize>,
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation[{}]({self})", self.len())
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cycle in self.cycles() {
            write!(f, "({})", cycle.iter().join(" "))?;
        }
        Ok(())
    }
}

impl Permutation {
    /// Returns the identity permutation on `n` elements.
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Constructs a permutation from an array where `map[x]` is the image of
    /// `x`. Returns an error if `map` is not a rearrangement of `0..n`.
    pub fn from_vec(map: Vec<usize>) -> Result<Self, PermutationError> {
        let n = map.len();
        let mut seen = vec![false; n];
        for &y in &map {
            if y >= n || seen[y] {
                return Err(PermutationError::NotAPermutation { map, n });
            }
            seen[y] = true;
        }
        Ok(Self { map })
    }

    /// Parses disjoint-cycle notation such as `(0 1 2)(5 6)` into a
    /// permutation on `n` elements. Unmentioned indices are fixed.
    ///
    /// Returns an error if the notation is malformed, if an index is not less
    /// than `n`, or if an index appears more than once.
    pub fn from_cycles(notation: &str, n: usize) -> Result<Self, PermutationError> {
        let cycles = parse_cycles(notation)?;

        let mut map: Vec<usize> = (0..n).collect();
        let mut seen = vec![false; n];
        for cycle in &cycles {
            for (i, &x) in cycle.iter().enumerate() {
                if x >= n {
                    return Err(PermutationError::OutOfRange { index: x, n });
                }
                if std::mem::replace(&mut seen[x], true) {
                    return Err(PermutationError::RepeatedIndex { index: x });
                }
                map[x] = cycle[(i + 1) % cycle.len()];
            }
        }

        Ok(Self { map })
    }

    /// Returns the number of elements in the domain.
    pub fn len(&self) -> usize {
        self.map.len()
    }
    /// Returns whether the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    /// Returns the map as a slice, where element `x` is the image of `x`.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }
    /// Returns the map as a vector, where element `x` is the image of `x`.
    pub fn into_vec(self) -> Vec<usize> {
        self.map
    }

    /// Returns the image of `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn image(&self, x: usize) -> usize {
        self.map[x]
    }
    /// Returns the image of `x`, or `None` if `x` is out of range.
    pub fn get(&self, x: usize) -> Option<usize> {
        self.map.get(x).copied()
    }
    /// Returns the element that maps to `y`, or `None` if `y` is out of range.
    ///
    /// This takes linear time.
    pub fn preimage(&self, y: usize) -> Option<usize> {
        self.map.iter().position(|&image| image == y)
    }
    /// Returns the item from `items` that ends up at position `y`, where
    /// `items[x]` starts at position `x`.
    pub fn pull<'a, T>(&self, items: &'a [T], y: usize) -> Option<&'a T> {
        items.get(self.preimage(y)?)
    }

    /// Returns whether `x` is moved by the permutation.
    pub fn moves(&self, x: usize) -> bool {
        self.get(x).is_some_and(|y| y != x)
    }
    /// Returns an iterator over the elements that are not fixed.
    pub fn moved_points(&self) -> impl '_ + Iterator<Item = usize> {
        self.map
            .iter()
            .enumerate()
            .filter(|(x, y)| x != *y)
            .map(|(x, _)| x)
    }
    /// Returns whether this is the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.moved_points().next().is_none()
    }

    /// Returns the composition that applies `self` first and then `other`:
    /// `x` maps to `other(self(x))`.
    ///
    /// # Panics
    ///
    /// Panics if the domains have different sizes.
    #[must_use]
    pub fn apply(&self, other: &Permutation) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "cannot compose permutations on domains of different sizes",
        );
        Self {
            map: self.map.iter().map(|&y| other.map[y]).collect(),
        }
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut map = vec![0; self.len()];
        for (x, &y) in self.map.iter().enumerate() {
            map[y] = x;
        }
        Self { map }
    }

    /// Returns the permutation composed with itself `exponent` times. Zero
    /// yields the identity and negative exponents power the inverse.
    #[must_use]
    pub fn power(&self, exponent: i32) -> Self {
        let mut square = match exponent < 0 {
            true => self.inverse(),
            false => self.clone(),
        };
        let mut remaining = exponent.unsigned_abs();
        let mut ret = Self::identity(self.len());
        while remaining > 0 {
            if remaining & 1 == 1 {
                ret = ret.apply(&square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.apply(&square);
            }
        }
        ret
    }

    /// Returns the nontrivial cycles of the permutation. Each cycle starts
    /// with its smallest element and cycles are sorted by that element.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut ret = vec![];
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = vec![start];
            visited[start] = true;
            let mut x = self.map[start];
            while x != start {
                visited[x] = true;
                cycle.push(x);
                x = self.map[x];
            }
            if cycle.len() > 1 {
                ret.push(cycle);
            }
        }
        ret
    }

    /// Returns the permutation in disjoint-cycle notation, omitting fixed
    /// points. The identity is the empty string.
    ///
    /// This is the inverse of [`Permutation::from_cycles()`].
    pub fn to_disjoint_cycles(&self) -> String {
        self.to_string()
    }

    /// Returns the smallest positive exponent that yields the identity.
    pub fn order(&self) -> usize {
        self.cycles()
            .iter()
            .map(|cycle| cycle.len())
            .fold(1, |a, b| a / gcd(a, b) * b)
    }

    /// Returns the parity of the permutation.
    pub fn parity(&self) -> Parity {
        self.cycles()
            .iter()
            .filter(|cycle| cycle.len() % 2 == 0)
            .fold(Parity::Even, |parity, _| parity.opposite())
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
