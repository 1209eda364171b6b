use super::node::*;
use super::leaf::*;
use super::concat::*;
use super::rope_iterator::*;

use crate::api::*;
use crate::stream_rope::*;

use std::ops::{Range};

///
/// A shared rope is an immutable, persistent sequence of cells
///
/// Cloning a shared rope only copies a reference to its root node, and every operation that
/// would change the content of the rope returns a new rope instead, sharing whatever structure
/// it can with the original. This makes ropes safe to read from any number of threads at once.
///
/// Positions passed to `slice`, `drop_prefix` and `drop_postfix` are signed: out-of-range
/// values are clamped to the rope rather than being treated as errors.
///
pub struct SharedRope<Cell> {
    /// The root node of this rope, or None for the empty rope
    root: Option<RopeNode<Cell>>
}

impl<Cell> Clone for SharedRope<Cell> {
    fn clone(&self) -> Self {
        SharedRope { root: self.root.clone() }
    }
}

impl<Cell> Default for SharedRope<Cell> {
    fn default() -> Self {
        SharedRope { root: None }
    }
}

///
/// Converts a signed position to a position in the rope (negative values become 0)
///
#[inline]
fn clamp_position(pos: i64) -> usize {
    if pos <= 0 {
        0
    } else {
        usize::try_from(pos).unwrap_or(usize::MAX)
    }
}

impl<Cell> SharedRope<Cell> {
    ///
    /// Creates a new, empty rope
    ///
    pub fn new() -> SharedRope<Cell> {
        SharedRope { root: None }
    }

    ///
    /// Creates a rope containing the cells in a vector. The vector becomes the rope's only leaf
    /// without being copied.
    ///
    pub fn from_vec(cells: Vec<Cell>) -> SharedRope<Cell> {
        SharedRope { root: RopeLeaf::new(cells).map(RopeNode::Leaf) }
    }

    ///
    /// Creates a rope with a particular root node
    ///
    pub fn from_node(root: Option<RopeNode<Cell>>) -> SharedRope<Cell> {
        SharedRope { root }
    }

    ///
    /// The root node of this rope, or None if the rope is empty
    ///
    #[inline]
    pub fn root(&self) -> Option<&RopeNode<Cell>> {
        self.root.as_ref()
    }

    ///
    /// Returns the number of cells in this rope
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.root.as_ref().map(|root| root.len()).unwrap_or(0)
    }

    ///
    /// Returns true if this rope contains no cells
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    ///
    /// Returns the length of the longest path from the root of this rope to a leaf
    ///
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.as_ref().map(|root| root.depth()).unwrap_or(0)
    }

    ///
    /// True if this rope and another one have the same root node
    ///
    pub fn ptr_eq(&self, other: &SharedRope<Cell>) -> bool {
        match (&self.root, &other.root) {
            (None, None)        => true,
            (Some(a), Some(b))  => a.is_same_node(b),
            _                   => false
        }
    }

    ///
    /// Returns a rope containing the content of this rope followed by another
    ///
    pub fn concat(&self, other: &SharedRope<Cell>) -> SharedRope<Cell> {
        SharedRope { root: conc(self.root.clone(), other.root.clone(), self.len(), other.len()) }
    }

    ///
    /// Returns a rope containing the content of this rope followed by every rope in a list
    ///
    /// The ropes are joined as a balanced tree, so appending `N` ropes in one call only adds
    /// `O(log N)` to the depth of the result.
    ///
    pub fn concat_all<'a, Others: IntoIterator<Item=&'a SharedRope<Cell>>>(&self, others: Others) -> SharedRope<Cell>
    where
    Cell: 'a {
        let nodes = self.root.iter()
            .chain(others.into_iter().filter_map(|rope| rope.root.as_ref()))
            .cloned()
            .collect::<Vec<_>>();

        SharedRope { root: conc_many(&nodes) }
    }

    ///
    /// Returns the cells in the range `start..end` of this rope
    ///
    /// `start` is clamped to 0 and `end` to the length of the rope. The result is empty if
    /// `start >= end`.
    ///
    pub fn slice(&self, start: i64, end: i64) -> SharedRope<Cell> {
        let start   = clamp_position(start);
        let end     = clamp_position(end);

        match &self.root {
            Some(root) if start < end   => SharedRope { root: root.slice(start, end) },
            _                           => SharedRope::new()
        }
    }

    ///
    /// Removes the first `start` cells from this rope. Values `<= 0` return this rope unchanged.
    ///
    pub fn drop_prefix(&self, start: i64) -> SharedRope<Cell> {
        match &self.root {
            Some(root) if start > 0 => SharedRope { root: root.drop_prefix(clamp_position(start)) },
            _                       => self.clone()
        }
    }

    ///
    /// Keeps the first `end` cells of this rope, discarding the rest. Values `<= 0` return the empty rope.
    ///
    pub fn drop_postfix(&self, end: i64) -> SharedRope<Cell> {
        match &self.root {
            Some(root) if end > 0   => SharedRope { root: root.drop_postfix(clamp_position(end)) },
            _                       => SharedRope::new()
        }
    }

    ///
    /// Retrieves the cell at a particular index in this rope
    ///
    pub fn at(&self, index: usize) -> Option<&Cell> {
        self.root.as_ref().and_then(|root| root.at(index))
    }

    ///
    /// Returns an iterator that visits the leaves of this rope from left to right
    ///
    pub fn leaves(&self) -> RopeLeaves<'_, Cell> {
        RopeLeaves::new(self.root.as_ref())
    }

    ///
    /// Returns an iterator over the cells in this rope
    ///
    pub fn cells(&self) -> RopeCells<'_, Cell> {
        RopeCells::new(self.root.as_ref(), 0, self.len())
    }

    ///
    /// Writes the content of this rope to a sink, from left to right
    ///
    pub fn write_to<Sink: ?Sized+CellSink<Cell>>(&self, sink: &mut Sink) -> Result<(), Sink::Error> {
        match &self.root {
            Some(root)  => root.write_to(sink),
            None        => Ok(())
        }
    }
}

impl<Cell: Clone> SharedRope<Cell> {
    ///
    /// Copies the content of this rope into a vector
    ///
    pub fn to_vec(&self) -> Vec<Cell> {
        let mut result = Vec::with_capacity(self.len());

        for leaf in self.leaves() {
            result.extend_from_slice(leaf.cells());
        }

        result
    }

    ///
    /// Creates a reader that streams the content of this rope
    ///
    pub fn reader(&self) -> RopeReader<Cell> {
        RopeReader::new(self)
    }
}

impl<Cell: Clone> Rope for SharedRope<Cell> {
    type Cell = Cell;

    #[inline]
    fn len(&self) -> usize {
        SharedRope::len(self)
    }

    #[inline]
    fn depth(&self) -> usize {
        SharedRope::depth(self)
    }

    fn read_cells<'a>(&'a self, range: Range<usize>) -> Box<dyn 'a+Iterator<Item=&'a Cell>> {
        Box::new(RopeCells::new(self.root.as_ref(), range.start, range.end))
    }
}
