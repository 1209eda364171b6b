use super::leaf::*;
use super::branch::*;
use super::rope_iterator::*;

use crate::api::*;

use std::sync::*;

///
/// A node in a rope
///
/// Nodes are never modified once they are created: every operation that changes a rope
/// builds new nodes and shares the ones that are unaffected. The empty rope has no node,
/// so every node contains at least one cell.
///
#[derive(Debug)]
pub enum RopeNode<Cell> {
    /// A leaf node represents a substring of cells
    Leaf(RopeLeaf<Cell>),

    /// A concat node represents a point where a rope is split into two substrings
    Concat(Arc<RopeBranch<Cell>>)
}

impl<Cell> Clone for RopeNode<Cell> {
    fn clone(&self) -> Self {
        match self {
            RopeNode::Leaf(leaf)        => RopeNode::Leaf(leaf.clone()),
            RopeNode::Concat(branch)    => RopeNode::Concat(Arc::clone(branch))
        }
    }
}

impl<Cell> RopeNode<Cell> {
    ///
    /// Creates a new concatenation node from two non-empty nodes
    ///
    /// The lengths of the two nodes may be supplied if they're already known, or 0 to
    /// read them from the nodes.
    ///
    pub fn concat(lhs: RopeNode<Cell>, rhs: RopeNode<Cell>, lhs_len: usize, rhs_len: usize) -> RopeNode<Cell> {
        let lhs_len = if lhs_len == 0 { lhs.len() } else { lhs_len };
        let rhs_len = if rhs_len == 0 { rhs.len() } else { rhs_len };
        let depth   = lhs.depth().max(rhs.depth()) + 1;

        debug_assert!(lhs_len == lhs.len());
        debug_assert!(rhs_len == rhs.len());

        RopeNode::Concat(Arc::new(RopeBranch {
            left:       lhs,
            right:      rhs,
            split:      lhs_len,
            right_len:  u32::try_from(rhs_len).unwrap_or(0),
            depth:      depth
        }))
    }

    ///
    /// The length of the longest path from this node to a leaf
    ///
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            RopeNode::Leaf(_)           => 0,
            RopeNode::Concat(branch)    => branch.depth
        }
    }

    ///
    /// The number of cells under this node
    ///
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            RopeNode::Leaf(leaf)        => leaf.len(),
            RopeNode::Concat(branch)    => branch.len()
        }
    }

    ///
    /// True if this is the same node as another one (rather than just a node with the same content)
    ///
    pub fn is_same_node(&self, other: &RopeNode<Cell>) -> bool {
        match (self, other) {
            (RopeNode::Leaf(a), RopeNode::Leaf(b))      => a.is_same_run(b),
            (RopeNode::Concat(a), RopeNode::Concat(b))  => Arc::ptr_eq(a, b),
            _                                           => false
        }
    }

    ///
    /// Retrieves the cell at the specified index under this node
    ///
    pub fn at(&self, index: usize) -> Option<&Cell> {
        let mut node    = self;
        let mut index   = index;

        loop {
            match node {
                RopeNode::Leaf(leaf) => { return leaf.cells().get(index); }

                RopeNode::Concat(branch) => {
                    if index < branch.split {
                        node    = &branch.left;
                    } else {
                        index   -= branch.split;
                        node    = &branch.right;
                    }
                }
            }
        }
    }

    ///
    /// Writes the cells under this node to a sink, from left to right
    ///
    pub fn write_to<Sink: ?Sized+CellSink<Cell>>(&self, sink: &mut Sink) -> Result<(), Sink::Error> {
        for leaf in RopeLeaves::new(Some(self)) {
            sink.write_cells(leaf.cells())?;
        }

        Ok(())
    }
}
