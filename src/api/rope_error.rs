///
/// Failures of the rebalancer's internal consistency checks
///
/// These never describe bad input: every rope can be rebalanced. Seeing one of these means the
/// slot arithmetic in the rebalancer is broken.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum RebalanceError {
    /// A node was placed in a slot that does not match its length
    #[error("rebalanced node of length {length} was placed in slot {expected} but belongs in slot {actual}")]
    SlotMismatch { expected: usize, actual: usize, length: usize },

    /// A node grew beyond the largest slot allocated for the rope
    #[error("rebalance slot {slot} is beyond the {slots} slots allocated for the rope")]
    SlotOverflow { slot: usize, slots: usize },

    /// Every slot was empty after the leaves of a non-empty rope were added
    #[error("rebalancing a rope of length {length} left every slot empty")]
    NoContent { length: usize },
}
