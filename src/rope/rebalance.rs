use super::node::*;
use super::fibonacci::*;
use super::shared_rope::*;
use super::rope_iterator::*;

use crate::api::*;

use log::*;

///
/// A node waiting in one of the rebalancer's slots, along with its length
///
struct SlotNode<Cell> {
    node:   RopeNode<Cell>,
    len:    usize
}

impl<Cell> SlotNode<Cell> {
    ///
    /// Joins two slot nodes, with `self` on the left
    ///
    fn join(self, rhs: SlotNode<Cell>) -> SlotNode<Cell> {
        SlotNode {
            node:   RopeNode::concat(self.node, rhs.node, self.len, rhs.len),
            len:    self.len + rhs.len
        }
    }

    ///
    /// Joins an optional node onto the end of this one
    ///
    #[inline]
    fn join_onto(self, rhs: Option<SlotNode<Cell>>) -> SlotNode<Cell> {
        match rhs {
            Some(rhs)   => self.join(rhs),
            None        => self
        }
    }
}

///
/// Rebuilds the tree under a node so that its depth is within the Fibonacci bound for its length
///
/// Slot `i` holds a node whose length is in the range `F[i]..F[i+1]`. The leaves are added to
/// the slots from left to right, and the occupied slots always hold the content read so far
/// from the highest index to the lowest: a slot's node is always joined on the left of
/// anything that arrived after it.
///
pub fn rebalance_node<Cell>(root: &RopeNode<Cell>) -> Result<RopeNode<Cell>, RebalanceError> {
    let length      = root.len();
    let bounds      = fibonacci_bounds(length as u64 + 1);
    let num_slots   = fibonacci_slot(length as u64, &bounds) + 1;
    let mut slots   = (0..num_slots).map(|_| None).collect::<Vec<Option<SlotNode<Cell>>>>();

    trace!("Rebalancing rope of length {} and depth {} using {} slots", length, root.depth(), num_slots);

    for leaf in RopeLeaves::new(Some(root)) {
        let leaf_len    = leaf.len();
        let mut slot    = 0;

        // Everything in a lower slot than the leaf is shorter than it: gather it up to go in front of the leaf
        let mut earlier = None;
        while leaf_len as u64 >= bounds[slot+1] {
            if let Some(occupant) = slots[slot].take() {
                earlier = Some(occupant.join_onto(earlier));
            }

            slot += 1;
        }

        let leaf_node   = SlotNode { node: RopeNode::Leaf(leaf.clone()), len: leaf_len };
        let mut node    = match earlier {
            Some(earlier)   => earlier.join(leaf_node),
            None            => leaf_node
        };

        // Absorb occupied slots until the node fits in the slot it's in
        loop {
            if slot >= num_slots {
                let err = RebalanceError::SlotOverflow { slot, slots: num_slots };
                error!("Rope rebalance failed: {}", err);
                return Err(err);
            }

            if let Some(occupant) = slots[slot].take() {
                node = occupant.join(node);
            }

            if (node.len as u64) < bounds[slot+1] {
                break;
            }

            slot += 1;
        }

        // The node's length should put it in the slot we just found for it
        let actual_slot = fibonacci_slot(node.len as u64, &bounds);
        if actual_slot != slot {
            let err = RebalanceError::SlotMismatch { expected: slot, actual: actual_slot, length: node.len };
            error!("Rope rebalance failed: {}", err);
            return Err(err);
        }

        slots[slot] = Some(node);
    }

    // Fold the slots: the lowest slots have the most recent content
    let mut result = None;
    for occupant in slots.into_iter().flatten() {
        result = Some(occupant.join_onto(result));
    }

    match result {
        Some(result)    => Ok(result.node),
        None            => {
            let err = RebalanceError::NoContent { length };
            error!("Rope rebalance failed: {}", err);
            Err(err)
        }
    }
}

impl<Cell> SharedRope<Cell> {
    ///
    /// True if the depth of this rope is within the Fibonacci bound for its length
    ///
    /// A rope of length `n` is balanced when its depth is no more than the index of the first
    /// value in the sequence 1, 2, 3, 5, 8, ... that is `>= n`. The empty rope is always balanced.
    ///
    /// This allows two more levels than the stricter `depth <= index - 2` bound. The stricter
    /// bound can't be reached for every mix of leaf lengths, while this one always holds for a
    /// rope returned by `rebalance()`. A rope that is within this bound is left as it is, even if
    /// rebuilding it would make it shallower.
    ///
    pub fn is_balanced(&self) -> bool {
        match self.root() {
            None        => true,
            Some(root)  => root.depth() <= max_balanced_depth(root.len())
        }
    }

    ///
    /// Returns a rope with the same content as this one whose depth is within the Fibonacci bound
    ///
    /// A rope that is already balanced is returned unchanged.
    ///
    pub fn try_rebalance(&self) -> Result<SharedRope<Cell>, RebalanceError> {
        let root = match self.root() {
            Some(root)  => root,
            None        => { return Ok(self.clone()); }
        };

        if self.is_balanced() {
            trace!("Rope of length {} and depth {} is already balanced", root.len(), root.depth());
            return Ok(self.clone());
        }

        let balanced = rebalance_node(root)?;

        if balanced.is_same_node(root) {
            Ok(self.clone())
        } else {
            debug!("Rebalanced rope of length {} from depth {} to depth {}", root.len(), root.depth(), balanced.depth());
            Ok(SharedRope::from_node(Some(balanced)))
        }
    }

    ///
    /// Returns a rope with the same content as this one whose depth is within the Fibonacci bound
    ///
    /// # Panics
    ///
    /// Panics if the rebalancer's internal consistency check fails. This indicates a defect in
    /// the rebalancer rather than a problem with the rope.
    ///
    pub fn rebalance(&self) -> SharedRope<Cell> {
        match self.try_rebalance() {
            Ok(rebalanced)  => rebalanced,
            Err(err)        => panic!("Internal rope invariant violated: {}", err)
        }
    }
}
