use super::shared_rope::*;

use std::cmp::{Ordering};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator};
use std::ops::{Add, AddAssign};

impl<Cell> From<Vec<Cell>> for SharedRope<Cell> {
    fn from(cells: Vec<Cell>) -> SharedRope<Cell> {
        SharedRope::from_vec(cells)
    }
}

impl<'a, Cell: Clone> From<&'a [Cell]> for SharedRope<Cell> {
    fn from(cells: &'a [Cell]) -> SharedRope<Cell> {
        SharedRope::from_vec(cells.to_vec())
    }
}

impl<'a> From<&'a str> for SharedRope<u8> {
    fn from(string: &'a str) -> SharedRope<u8> {
        SharedRope::from_vec(string.as_bytes().to_vec())
    }
}

impl From<String> for SharedRope<u8> {
    fn from(string: String) -> SharedRope<u8> {
        SharedRope::from_vec(string.into_bytes())
    }
}

impl<'a, Cell> Add<&'a SharedRope<Cell>> for &'a SharedRope<Cell> {
    type Output = SharedRope<Cell>;

    fn add(self, other: &'a SharedRope<Cell>) -> SharedRope<Cell> {
        self.concat(other)
    }
}

impl<Cell> Add<SharedRope<Cell>> for SharedRope<Cell> {
    type Output = SharedRope<Cell>;

    fn add(self, other: SharedRope<Cell>) -> SharedRope<Cell> {
        self.concat(&other)
    }
}

impl<'a, Cell> AddAssign<&'a SharedRope<Cell>> for SharedRope<Cell> {
    fn add_assign(&mut self, other: &'a SharedRope<Cell>) {
        *self = self.concat(other);
    }
}

impl<Cell> FromIterator<SharedRope<Cell>> for SharedRope<Cell> {
    ///
    /// Concatenates a list of ropes as a balanced tree
    ///
    fn from_iter<Ropes: IntoIterator<Item=SharedRope<Cell>>>(ropes: Ropes) -> SharedRope<Cell> {
        let ropes = ropes.into_iter().collect::<Vec<_>>();

        SharedRope::new().concat_all(&ropes)
    }
}

impl<Cell> Extend<SharedRope<Cell>> for SharedRope<Cell> {
    fn extend<Ropes: IntoIterator<Item=SharedRope<Cell>>>(&mut self, ropes: Ropes) {
        let ropes = ropes.into_iter().collect::<Vec<_>>();

        *self = self.concat_all(&ropes);
    }
}

// Comparisons are by content: ropes with different shapes are equal if they contain the same cells

impl<Cell: PartialEq> PartialEq for SharedRope<Cell> {
    fn eq(&self, other: &SharedRope<Cell>) -> bool {
        self.ptr_eq(other) || (self.len() == other.len() && self.cells().eq(other.cells()))
    }
}

impl<Cell: Eq> Eq for SharedRope<Cell> { }

impl<Cell: PartialOrd> PartialOrd for SharedRope<Cell> {
    fn partial_cmp(&self, other: &SharedRope<Cell>) -> Option<Ordering> {
        self.cells().partial_cmp(other.cells())
    }
}

impl<Cell: Ord> Ord for SharedRope<Cell> {
    fn cmp(&self, other: &SharedRope<Cell>) -> Ordering {
        self.cells().cmp(other.cells())
    }
}

impl<Cell: Hash> Hash for SharedRope<Cell> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.cells().for_each(|cell| cell.hash(state));
    }
}

impl<Cell: fmt::Debug> fmt::Debug for SharedRope<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/*rope*/ ")?;
        f.debug_list().entries(self.cells()).finish()
    }
}

impl fmt::Display for SharedRope<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_vec()))
    }
}
