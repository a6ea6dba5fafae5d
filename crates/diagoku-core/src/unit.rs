//! Constraint units and the peer topology.
//!
//! A [`Unit`] is a group of nine cells subject to an all-different
//! constraint. The diagonal variant has 29 units: 9 rows, 9 columns, 9
//! boxes, and the two main diagonals. Peers are derived from the unit list
//! once, at compile time; the topology is a pure function of the fixed
//! board shape and has no failure mode.

use std::fmt::{self, Display};

use crate::{cell::Cell, cell_set::CellSet};

/// A constraint unit: nine cells that must hold nine different digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
    /// The main diagonal `A1`, `B2`, ..., `I9`.
    MainDiagonal,
    /// The anti diagonal `A9`, `B8`, ..., `I1`.
    AntiDiagonal,
}

impl Unit {
    /// All 29 units: rows, columns, boxes, then the two diagonals.
    pub const ALL: [Self; 29] = {
        let mut all = [Self::MainDiagonal; 29];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all[28] = Self::AntiDiagonal;
        all
    };

    /// Returns the cells of this unit, in a fixed order.
    ///
    /// Rows and diagonals run left to right, columns top to bottom, boxes
    /// row-major within the box.
    #[must_use]
    pub const fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::from_index(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            let k = i as u8;
            cells[i] = match self {
                Self::Row { row } => Cell::new(row, k),
                Self::Column { col } => Cell::new(k, col),
                Self::Box { index } => {
                    Cell::new((index / 3) * 3 + k / 3, (index % 3) * 3 + k % 3)
                }
                Self::MainDiagonal => Cell::new(k, k),
                Self::AntiDiagonal => Cell::new(k, 8 - k),
            };
            i += 1;
        }
        cells
    }

    /// Returns the cells of this unit as a set.
    #[must_use]
    pub const fn positions(self) -> CellSet {
        let cells = self.cells();
        let mut set = CellSet::EMPTY;
        let mut i = 0;
        while i < 9 {
            set.insert(cells[i]);
            i += 1;
        }
        set
    }

    /// Returns `true` if the unit contains the cell.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.positions().contains(cell)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {}", (b'A' + row) as char),
            Self::Column { col } => write!(f, "column {}", col + 1),
            Self::Box { index } => write!(f, "box {}", index + 1),
            Self::MainDiagonal => f.write_str("main diagonal"),
            Self::AntiDiagonal => f.write_str("anti diagonal"),
        }
    }
}

/// Peer table, indexed by cell index: the union of every unit containing
/// the cell, minus the cell itself.
const PEERS: [CellSet; 81] = {
    let mut peers = [CellSet::EMPTY; 81];
    let mut u = 0;
    while u < 29 {
        let unit = Unit::ALL[u];
        let positions = unit.positions();
        let cells = unit.cells();
        let mut i = 0;
        while i < 9 {
            let index = cells[i].index() as usize;
            peers[index] = peers[index].union(positions);
            i += 1;
        }
        u += 1;
    }
    let mut c = 0;
    #[expect(clippy::cast_possible_truncation)]
    while c < 81 {
        peers[c].remove(Cell::from_index(c as u8));
        c += 1;
    }
    peers
};

impl Cell {
    /// Returns the peers of this cell: every cell sharing at least one
    /// unit with it, excluding the cell itself.
    ///
    /// Cells off the diagonals have 20 peers; diagonal cells have more
    /// (the center cell `E5` sits on both diagonals and has 32).
    ///
    /// # Examples
    ///
    /// ```
    /// use diagoku_core::Cell;
    ///
    /// let corner = Cell::new(0, 0);
    /// assert_eq!(corner.peers().len(), 26);
    /// assert!(corner.peers().contains(Cell::new(8, 8)));
    /// ```
    #[must_use]
    pub const fn peers(self) -> CellSet {
        PEERS[self.index() as usize]
    }
}
