use super::shared_rope::*;

/// The number of appends a builder makes before checking whether its rope needs rebalancing
pub const REBALANCE_APPEND_COUNT: usize = 64;

///
/// Builds a rope by appending pieces to it one at a time
///
/// Appending to a rope one piece at a time produces a tree whose depth grows with every append.
/// The builder periodically checks the depth of the rope it's building and rebalances it
/// if it has grown beyond the Fibonacci bound, so the finished rope is always balanced.
///
pub struct RopeBuilder<Cell> {
    /// The rope built so far
    rope: SharedRope<Cell>,

    /// The number of appends since the rope was last checked
    appends_since_check: usize
}

impl<Cell> Default for RopeBuilder<Cell> {
    fn default() -> Self {
        RopeBuilder::new()
    }
}

impl<Cell> RopeBuilder<Cell> {
    ///
    /// Creates a builder for a new, empty rope
    ///
    pub fn new() -> RopeBuilder<Cell> {
        RopeBuilder {
            rope:                   SharedRope::new(),
            appends_since_check:    0
        }
    }

    ///
    /// Creates a builder that appends to an existing rope
    ///
    pub fn from_rope(rope: SharedRope<Cell>) -> RopeBuilder<Cell> {
        RopeBuilder {
            rope:                   rope,
            appends_since_check:    0
        }
    }

    ///
    /// The rope built so far
    ///
    #[inline]
    pub fn rope(&self) -> &SharedRope<Cell> {
        &self.rope
    }

    ///
    /// Adds a rope to the end of the rope being built
    ///
    pub fn append(&mut self, piece: &SharedRope<Cell>) {
        if piece.is_empty() {
            return;
        }

        self.rope                   = self.rope.concat(piece);
        self.appends_since_check    += 1;

        if self.appends_since_check >= REBALANCE_APPEND_COUNT {
            self.appends_since_check = 0;

            if !self.rope.is_balanced() {
                self.rope = self.rope.rebalance();
            }
        }
    }

    ///
    /// Adds a run of cells to the end of the rope being built
    ///
    pub fn append_cells(&mut self, cells: Vec<Cell>) {
        self.append(&SharedRope::from_vec(cells));
    }

    ///
    /// Finishes building, returning a balanced rope
    ///
    pub fn build(self) -> SharedRope<Cell> {
        self.rope.rebalance()
    }
}
