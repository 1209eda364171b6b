use super::node::*;
use super::leaf::*;

use std::mem;
use std::sync::*;

///
/// Represents a branch in a rope: the concatenation of two non-empty subtrees
///
#[derive(Debug)]
pub struct RopeBranch<Cell> {
    /// The left-hand side of the rope (first part of the string)
    pub (super) left: RopeNode<Cell>,

    /// The right-hand side of the rope
    pub (super) right: RopeNode<Cell>,

    /// The length of the left-hand side, which is the index where the two sides meet
    pub (super) split: usize,

    /// The length of the right-hand side, or 0 if it's too long to cache here
    pub (super) right_len: u32,

    /// The depth of the tree under this branch
    pub (super) depth: usize
}

impl<Cell> RopeBranch<Cell> {
    /// The first part of the string
    #[inline] pub fn left(&self) -> &RopeNode<Cell> { &self.left }

    /// The second part of the string
    #[inline] pub fn right(&self) -> &RopeNode<Cell> { &self.right }

    /// The number of cells in the left-hand side of this branch
    #[inline] pub fn split(&self) -> usize { self.split }

    /// The depth of this branch (one more than the deepest child)
    #[inline] pub fn depth(&self) -> usize { self.depth }

    ///
    /// The number of cells in the right-hand side of this branch
    ///
    #[inline]
    pub fn right_len(&self) -> usize {
        if self.right_len > 0 {
            self.right_len as usize
        } else {
            self.right.len()
        }
    }

    ///
    /// The total number of cells under this branch
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.split + self.right_len()
    }
}

impl<Cell> Drop for RopeBranch<Cell> {
    ///
    /// Frees the branches under this one in a loop rather than by recursion, so a rope built by
    /// appending one cell at a time can be dropped however deep it is
    ///
    fn drop(&mut self) {
        if !owns_branch(&self.left) && !owns_branch(&self.right) {
            return;
        }

        // Detached children are swapped for an empty leaf, so each branch is freed with nothing left under it
        let placeholder = RopeNode::Leaf(RopeLeaf::placeholder());
        let mut pending = vec![];

        detach_branch(&mut self.left, &placeholder, &mut pending);
        detach_branch(&mut self.right, &placeholder, &mut pending);

        while let Some(branch) = pending.pop() {
            // Branches still used by another rope are only released
            if let Some(mut branch) = Arc::into_inner(branch) {
                detach_branch(&mut branch.left, &placeholder, &mut pending);
                detach_branch(&mut branch.right, &placeholder, &mut pending);
            }
        }
    }
}

///
/// True if a node is a branch that nothing else refers to
///
#[inline]
fn owns_branch<Cell>(node: &RopeNode<Cell>) -> bool {
    match node {
        RopeNode::Concat(branch)    => Arc::strong_count(branch) == 1,
        RopeNode::Leaf(_)           => false
    }
}

///
/// Moves a branch out of a node onto the list of branches waiting to be freed
///
fn detach_branch<Cell>(node: &mut RopeNode<Cell>, placeholder: &RopeNode<Cell>, pending: &mut Vec<Arc<RopeBranch<Cell>>>) {
    if matches!(*node, RopeNode::Concat(_)) {
        if let RopeNode::Concat(branch) = mem::replace(node, placeholder.clone()) {
            pending.push(branch);
        }
    }
}
