use super::node::*;

///
/// Returns the concatenation of two nodes, where `None` is the empty rope
///
/// Empty operands are collapsed away, so the result only contains a new concat node if both
/// sides have content. Either length may be passed in as 0 if it's not already known.
///
pub fn conc<Cell>(lhs: Option<RopeNode<Cell>>, rhs: Option<RopeNode<Cell>>, lhs_len: usize, rhs_len: usize) -> Option<RopeNode<Cell>> {
    match (lhs, rhs) {
        (None, rhs)             => rhs,
        (lhs, None)             => lhs,
        (Some(lhs), Some(rhs))  => Some(RopeNode::concat(lhs, rhs, lhs_len, rhs_len))
    }
}

///
/// Returns the concatenation of all of the nodes in a list, in order
///
/// The list is divided in half and each half is combined recursively, so joining `N` nodes adds
/// `O(log N)` to the depth of the result rather than the `O(N)` that a fold would produce.
///
pub fn conc_many<Cell>(nodes: &[RopeNode<Cell>]) -> Option<RopeNode<Cell>> {
    match nodes.len() {
        0 => None,
        1 => Some(nodes[0].clone()),
        len => {
            let (lhs, rhs) = nodes.split_at(len / 2);

            conc(conc_many(lhs), conc_many(rhs), 0, 0)
        }
    }
}
