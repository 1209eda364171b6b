use std::sync::*;

///
/// A leaf node holds a contiguous run of cells
///
/// The cells are shared: a leaf is a view onto a range of a vector that can be used by any
/// number of other leaves, so taking a sub-run of a leaf never copies anything. A leaf is never
/// empty (empty ropes have no nodes at all).
///
#[derive(Debug)]
pub struct RopeLeaf<Cell> {
    /// The vector that contains the cells for this leaf
    cells: Arc<Vec<Cell>>,

    /// The index of the first cell in this leaf
    start: usize,

    /// The index after the last cell in this leaf
    end: usize
}

impl<Cell> Clone for RopeLeaf<Cell> {
    fn clone(&self) -> Self {
        RopeLeaf {
            cells:  Arc::clone(&self.cells),
            start:  self.start,
            end:    self.end
        }
    }
}

impl<Cell> RopeLeaf<Cell> {
    ///
    /// Creates a leaf containing all of the cells in a vector, or None if the vector is empty
    ///
    pub fn new(cells: Vec<Cell>) -> Option<RopeLeaf<Cell>> {
        if cells.is_empty() {
            None
        } else {
            let end = cells.len();

            Some(RopeLeaf {
                cells:  Arc::new(cells),
                start:  0,
                end:    end
            })
        }
    }

    ///
    /// An empty leaf, used to fill the sides of a branch while it is being freed
    ///
    pub (super) fn placeholder() -> RopeLeaf<Cell> {
        RopeLeaf {
            cells:  Arc::new(vec![]),
            start:  0,
            end:    0
        }
    }

    ///
    /// Returns a view of part of this leaf. The range must be non-empty and within the leaf
    ///
    fn view(&self, start: usize, end: usize) -> RopeLeaf<Cell> {
        debug_assert!(start < end);
        debug_assert!(end <= self.len());

        RopeLeaf {
            cells:  Arc::clone(&self.cells),
            start:  self.start + start,
            end:    self.start + end
        }
    }

    ///
    /// The number of cells in this leaf
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    ///
    /// The cells stored in this leaf
    ///
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[self.start..self.end]
    }

    ///
    /// True if this leaf is the same view of the same run of cells as another leaf
    ///
    pub fn is_same_run(&self, other: &RopeLeaf<Cell>) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells) && self.start == other.start && self.end == other.end
    }

    ///
    /// Removes the first `start` cells from this leaf
    ///
    pub fn drop_prefix(&self, start: usize) -> Option<RopeLeaf<Cell>> {
        let len = self.len();

        if start >= len {
            None
        } else if start == 0 {
            Some(self.clone())
        } else {
            Some(self.view(start, len))
        }
    }

    ///
    /// Keeps only the first `end` cells of this leaf
    ///
    pub fn drop_postfix(&self, end: usize) -> Option<RopeLeaf<Cell>> {
        if end == 0 {
            None
        } else if end >= self.len() {
            Some(self.clone())
        } else {
            Some(self.view(0, end))
        }
    }

    ///
    /// Returns the cells from `start` to `end` of this leaf. `end` may be beyond the end of the leaf
    ///
    pub fn slice(&self, start: usize, end: usize) -> Option<RopeLeaf<Cell>> {
        let end = end.min(self.len());

        if start >= end {
            None
        } else if start == 0 && end == self.len() {
            Some(self.clone())
        } else {
            Some(self.view(start, end))
        }
    }
}
