use super::leaf::*;
use super::node::*;

use std::slice;

///
/// Iterator that visits the leaves of a rope from left to right
///
/// The nodes still to be visited are kept on an explicit stack, so very deep ropes can be
/// walked without recursion.
///
pub struct RopeLeaves<'a, Cell> {
    /// The nodes that are still to be visited (the next node is at the end)
    pub (super) pending: Vec<&'a RopeNode<Cell>>
}

impl<'a, Cell> RopeLeaves<'a, Cell> {
    ///
    /// Creates an iterator that visits every leaf under a node
    ///
    pub fn new(root: Option<&'a RopeNode<Cell>>) -> RopeLeaves<'a, Cell> {
        RopeLeaves {
            pending: root.into_iter().collect()
        }
    }

    ///
    /// Creates an iterator that starts at the leaf containing `position`. The return value is the
    /// iterator and the offset of `position` within that first leaf.
    ///
    pub fn seek(root: &'a RopeNode<Cell>, position: usize) -> (RopeLeaves<'a, Cell>, usize) {
        let mut pending     = Vec::with_capacity(root.depth() + 1);
        let mut node        = root;
        let mut position    = position;

        while let RopeNode::Concat(branch) = node {
            if position < branch.split {
                // The right-hand side is visited once the left-hand side is done
                pending.push(&branch.right);
                node        = &branch.left;
            } else {
                position    -= branch.split;
                node        = &branch.right;
            }
        }

        pending.push(node);
        (RopeLeaves { pending }, position)
    }
}

impl<'a, Cell> Iterator for RopeLeaves<'a, Cell> {
    type Item = &'a RopeLeaf<Cell>;

    fn next(&mut self) -> Option<&'a RopeLeaf<Cell>> {
        while let Some(node) = self.pending.pop() {
            match node {
                RopeNode::Leaf(leaf) => { return Some(leaf); }

                RopeNode::Concat(branch) => {
                    self.pending.push(&branch.right);
                    self.pending.push(&branch.left);
                }
            }
        }

        None
    }
}

///
/// Iterator that reads a range of cells in a rope
///
pub struct RopeCells<'a, Cell> {
    /// The leaves that follow the one that's being read
    pub (super) leaves: RopeLeaves<'a, Cell>,

    /// The cells remaining in the current leaf
    pub (super) current: slice::Iter<'a, Cell>,

    /// The remaining number of cells to read from this iterator
    pub (super) remaining_cells: usize
}

impl<'a, Cell> RopeCells<'a, Cell> {
    ///
    /// Creates an iterator that reads the cells from `start` to `end` under a node
    ///
    pub fn new(root: Option<&'a RopeNode<Cell>>, start: usize, end: usize) -> RopeCells<'a, Cell> {
        let end = end.min(root.map(|root| root.len()).unwrap_or(0));

        match root {
            Some(root) if start < end => {
                let (mut leaves, offset)    = RopeLeaves::seek(root, start);
                let empty: &'a [Cell]       = &[];
                let current                 = leaves.next().map(|leaf| &leaf.cells()[offset..]).unwrap_or(empty);

                RopeCells {
                    leaves:             leaves,
                    current:            current.iter(),
                    remaining_cells:    end - start
                }
            }

            _ => {
                let empty: &'a [Cell] = &[];

                RopeCells {
                    leaves:             RopeLeaves::new(None),
                    current:            empty.iter(),
                    remaining_cells:    0
                }
            }
        }
    }
}

impl<'a, Cell> Iterator for RopeCells<'a, Cell> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<&'a Cell> {
        if self.remaining_cells == 0 {
            // No more cells to read
            return None;
        }

        loop {
            if let Some(cell) = self.current.next() {
                self.remaining_cells -= 1;
                return Some(cell);
            }

            // Passed over the end of the leaf: move on to the next one
            match self.leaves.next() {
                Some(leaf)  => { self.current = leaf.cells().iter(); }
                None        => { self.remaining_cells = 0; return None; }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining_cells, Some(self.remaining_cells))
    }
}

impl<'a, Cell> ExactSizeIterator for RopeCells<'a, Cell> { }
