//! This module implements the machine memory: a fixed ring of symbol cells
//! addressed by a cursor. Both cursor movement and symbol mutation wrap
//! around, so every cell is reachable from every other in at most half a
//! turn of the ring.

use crate::alphabet::Symbol;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of cells on the ring
pub const TAPE_LEN: usize = 30;

/// Half the ring, used for balanced reduction of cursor offsets
const HALF_TAPE: i32 = (TAPE_LEN / 2) as i32;

/// A circular tape of [TAPE_LEN] symbol cells plus the cursor addressing
/// them. Freshly created tapes are all blank with the cursor on cell 0.
/// A tape is owned by exactly one execution or encoding run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tape {
    cells: [Symbol; TAPE_LEN],
    cursor: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Tape::new()
    }
}

impl Tape {
    /// Creates an all-blank tape with the cursor on cell 0
    pub fn new() -> Tape {
        Tape {
            cells: [Symbol::BLANK; TAPE_LEN],
            cursor: 0,
        }
    }

    /// Returns the current cursor position, always in `[0, TAPE_LEN)`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reads the symbol under the cursor
    pub fn read(&self) -> Symbol {
        self.cells[self.cursor]
    }

    /// Reads the symbol at an arbitrary position, reduced modulo the ring
    pub fn read_at(&self, pos: usize) -> Symbol {
        self.cells[pos % TAPE_LEN]
    }

    /// Overwrites the symbol under the cursor
    pub fn write(&mut self, symbol: Symbol) {
        self.cells[self.cursor] = symbol;
    }

    /// Moves the cursor one cell to the left, wrapping at cell 0
    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + TAPE_LEN - 1) % TAPE_LEN;
    }

    /// Moves the cursor one cell to the right, wrapping at the last cell
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % TAPE_LEN;
    }

    /// Places the cursor on `pos`, reduced modulo the ring
    pub fn jump_to(&mut self, pos: usize) {
        self.cursor = pos % TAPE_LEN;
    }

    /// Signed shortest cyclic hop count from the cursor to `pos`: positive
    /// counts right moves, negative counts left moves. The half-turn case
    /// is reachable equally in both directions and resolves to left.
    pub fn offset_to(&self, pos: usize) -> i32 {
        let diff = (pos % TAPE_LEN + TAPE_LEN - self.cursor) % TAPE_LEN;
        let diff = diff as i32;
        if diff < HALF_TAPE {
            diff
        } else {
            diff - TAPE_LEN as i32
        }
    }

    /// Position of the occurrence of `symbol` closest to the cursor by
    /// cyclic hop count, or `None` if the symbol is nowhere on the tape.
    /// Equidistant occurrences resolve to the lowest position.
    pub fn find_nearest(&self, symbol: Symbol) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for pos in 0..TAPE_LEN {
            if self.cells[pos] != symbol {
                continue;
            }
            let hops = self.offset_to(pos).abs();
            if best.map_or(true, |(_, b)| hops < b) {
                best = Some((pos, hops));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

impl Display for Tape {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for (pos, cell) in self.cells.iter().enumerate() {
            if pos == self.cursor {
                write!(f, "[{cell}]")?;
            } else {
                write!(f, " {cell} ")?;
            }
        }
        Ok(())
    }
}
