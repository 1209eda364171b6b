use crate::rope::*;

use std::io;
use std::sync::*;

///
/// The outcome of a call to `RopeReader::read()`
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadResult {
    /// Some cells were copied into the buffer (possibly fewer than it could hold)
    Cells(usize),

    /// The reader has reached the end of the rope
    Finished
}

///
/// Reads the content of a rope in order, without materializing it
///
/// The reader keeps a stack of the concat nodes whose right-hand sides it has yet to visit,
/// along with the leaf it's currently reading from. It holds its own references to the nodes
/// of the rope, so it can outlive the rope it was created from. A reader can't be shared between
/// threads while it's in use, but any number of readers can read the same rope at once.
///
pub struct RopeReader<Cell> {
    /// The concat nodes whose right-hand sides still need to be read
    stack: Vec<Arc<RopeBranch<Cell>>>,

    /// The leaf that's being read, or None once the reader is finished
    current: Option<RopeLeaf<Cell>>,

    /// The position of the next cell to read within the current leaf
    position: usize
}

impl<Cell: Clone> RopeReader<Cell> {
    ///
    /// Creates a reader positioned at the start of a rope
    ///
    pub fn new(rope: &SharedRope<Cell>) -> RopeReader<Cell> {
        let mut reader = RopeReader {
            stack:      Vec::with_capacity(rope.depth()),
            current:    None,
            position:   0
        };

        if let Some(root) = rope.root() {
            reader.push_subtree(root.clone());
        }

        reader
    }

    ///
    /// Moves to the leftmost leaf of a node, remembering the concat nodes along the way
    ///
    fn push_subtree(&mut self, node: RopeNode<Cell>) {
        let mut node = node;

        loop {
            match node {
                RopeNode::Leaf(leaf) => {
                    self.current    = Some(leaf);
                    self.position   = 0;
                    return;
                }

                RopeNode::Concat(branch) => {
                    let left = branch.left().clone();

                    self.stack.push(branch);
                    node = left;
                }
            }
        }
    }

    ///
    /// Moves to the next leaf in the rope
    ///
    fn next_leaf(&mut self) {
        match self.stack.pop() {
            Some(branch)    => self.push_subtree(branch.right().clone()),
            None            => { self.current = None; }
        }
    }

    ///
    /// Copies as many cells as are available from the current leaf into a buffer
    ///
    /// Returns `ReadResult::Cells(n)` if `n` cells were copied to the start of the buffer, which
    /// can be less than the length of the buffer even if there is more to read. Once every cell
    /// has been read, this returns `ReadResult::Finished`.
    ///
    pub fn read(&mut self, buf: &mut [Cell]) -> ReadResult {
        loop {
            let leaf = match &self.current {
                Some(leaf)  => leaf,
                None        => { return ReadResult::Finished; }
            };

            let remaining = &leaf.cells()[self.position..];

            if !remaining.is_empty() {
                let count = remaining.len().min(buf.len());

                buf[0..count].clone_from_slice(&remaining[0..count]);
                self.position += count;

                return ReadResult::Cells(count);
            }

            // Done reading this leaf
            self.next_leaf();
        }
    }

    ///
    /// True if there are no more cells to read
    ///
    pub fn is_finished(&self) -> bool {
        match &self.current {
            None        => true,
            Some(leaf)  => self.position >= leaf.len() && self.stack.is_empty()
        }
    }
}

impl<Cell: Clone> Iterator for RopeReader<Cell> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        loop {
            let leaf = self.current.as_ref()?;

            if let Some(cell) = leaf.cells().get(self.position) {
                self.position += 1;
                return Some(cell.clone());
            }

            self.next_leaf();
        }
    }
}

impl io::Read for RopeReader<u8> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match RopeReader::read(self, buf) {
            ReadResult::Cells(count)    => Ok(count),
            ReadResult::Finished        => Ok(0)
        }
    }
}
