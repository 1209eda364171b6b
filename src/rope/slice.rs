use super::node::*;
use super::concat::*;

impl<Cell> RopeNode<Cell> {
    ///
    /// Removes the first `start` cells from this node
    ///
    /// Only the nodes along the path to `start` are rebuilt: everything to the right of it is
    /// shared with this node.
    ///
    pub fn drop_prefix(&self, start: usize) -> Option<RopeNode<Cell>> {
        if start == 0 {
            return Some(self.clone());
        }

        match self {
            RopeNode::Leaf(leaf) => leaf.drop_prefix(start).map(RopeNode::Leaf),

            RopeNode::Concat(branch) => {
                if start < branch.split {
                    // Part of the left-hand side survives
                    let left_len = branch.split - start;
                    conc(branch.left.drop_prefix(start), Some(branch.right.clone()), left_len, branch.right_len as usize)
                } else {
                    // Only the right-hand side survives
                    branch.right.drop_prefix(start - branch.split)
                }
            }
        }
    }

    ///
    /// Keeps the first `end` cells of this node, discarding everything after them
    ///
    pub fn drop_postfix(&self, end: usize) -> Option<RopeNode<Cell>> {
        if end == 0 {
            return None;
        }

        match self {
            RopeNode::Leaf(leaf) => leaf.drop_postfix(end).map(RopeNode::Leaf),

            RopeNode::Concat(branch) => {
                if end <= branch.split {
                    branch.left.drop_postfix(end)
                } else if end >= branch.len() {
                    Some(self.clone())
                } else {
                    let right_end = end - branch.split;
                    conc(Some(branch.left.clone()), branch.right.drop_postfix(right_end), branch.split, right_end)
                }
            }
        }
    }

    ///
    /// Returns the cells from `start` to `end` in this node. `end` may be beyond the end of the node.
    ///
    /// Any child that is entirely inside the range is reused as it is, and a child that is entirely
    /// outside of it is skipped without being visited.
    ///
    pub fn slice(&self, start: usize, end: usize) -> Option<RopeNode<Cell>> {
        if start >= end {
            return None;
        }

        match self {
            RopeNode::Leaf(leaf) => leaf.slice(start, end).map(RopeNode::Leaf),

            RopeNode::Concat(branch) => {
                let split = branch.split;

                // Only slicing into one side
                if end <= split {
                    return branch.left.slice(start, end);
                }
                if start >= split {
                    return branch.right.slice(start - split, end - split);
                }

                // Covers the whole node
                let right_len = branch.right_len();
                if start == 0 && end >= split + right_len {
                    return Some(self.clone());
                }

                // start < split < end: both sides contribute
                let (left, left_len) = if start > 0 {
                    (branch.left.drop_prefix(start), split - start)
                } else {
                    (Some(branch.left.clone()), split)
                };

                let right_end           = end - split;
                let (right, right_len)  = if right_end < right_len {
                    (branch.right.drop_postfix(right_end), right_end)
                } else {
                    (Some(branch.right.clone()), right_len)
                };

                conc(left, right, left_len, right_len)
            }
        }
    }
}
