//! Square, self-expanding game board.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, Cell, Player};
use crate::config::{BOARD_GROWTH, INITIAL_BOARD_SIZE};

/// Line directions checked for a win: horizontal, vertical and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Row-major grid of cells. Always square with an odd side of at least 3.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardRepr")
)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`]. Shape is validated on conversion.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "std")]
impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        Self::check_shape(repr.size, repr.cells.len())?;
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create an empty 3x3 board.
    pub fn new() -> Self {
        Self::empty(INITIAL_BOARD_SIZE)
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: alloc::vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from explicit rows, validating the shape.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, BoardError> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return Err(BoardError::NotSquare);
        }
        Self::check_shape(size, size * size)?;
        Ok(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    fn check_shape(size: usize, cell_count: usize) -> Result<(), BoardError> {
        if size < INITIAL_BOARD_SIZE || size % 2 == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        if size.checked_mul(size) != Some(cell_count) {
            return Err(BoardError::NotSquare);
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Overwrite a cell. Returns `false` when out of range.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = cell;
            true
        } else {
            false
        }
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// The exact center; well defined because the size is odd.
    pub fn center(&self) -> (usize, usize) {
        (self.size / 2, self.size / 2)
    }

    /// Length of the same-symbol run through (row, col) along one direction,
    /// counting both senses and the cell itself. Zero for empty cells.
    pub fn run_length(&self, row: usize, col: usize, dir: (isize, isize)) -> usize {
        let player = match self.get(row, col) {
            Some(Cell::Occupied(p)) => p,
            _ => return 0,
        };
        1 + self.count_from(row, col, dir, player)
            + self.count_from(row, col, (-dir.0, -dir.1), player)
    }

    fn count_from(&self, row: usize, col: usize, (dr, dc): (isize, isize), player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0 && c >= 0 {
            match self.get(r as usize, c as usize) {
                Some(Cell::Occupied(p)) if p == player => count += 1,
                _ => break,
            }
            r += dr;
            c += dc;
        }
        count
    }

    /// Whether the mark at (row, col) completes a run of `win_length` in any
    /// direction. Only lines through this cell are examined.
    pub fn wins_through(&self, row: usize, col: usize, win_length: usize) -> bool {
        DIRECTIONS
            .iter()
            .any(|&dir| self.run_length(row, col, dir) >= win_length)
    }

    /// A player holding a run of at least `win_length` anywhere on the board.
    pub fn winner(&self, win_length: usize) -> Option<Player> {
        self.cells.iter().enumerate().find_map(|(i, cell)| match cell {
            Cell::Occupied(p) if self.wins_through(i / self.size, i % self.size, win_length) => Some(*p),
            _ => None,
        })
    }

    /// Grow by [`BOARD_GROWTH`] in each dimension, adding an empty ring and
    /// shifting existing marks by one row and one column.
    pub fn expand(&mut self) {
        let offset = BOARD_GROWTH / 2;
        let mut grown = Self::empty(self.size + BOARD_GROWTH);
        for (i, cell) in self.cells.iter().enumerate() {
            let (r, c) = (i / self.size, i % self.size);
            grown.set(r + offset, c + offset, *cell);
        }
        *self = grown;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(p) => p.symbol(),
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        write!(f, "{}", self)
    }
}

/// Parses rows of `X`, `O` and `.` separated by newlines. Whitespace inside
/// a row is ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = match ch {
                    '.' | '_' => Cell::Empty,
                    'X' | 'x' => Cell::Occupied(Player::X),
                    'O' | 'o' => Cell::Occupied(Player::O),
                    other => return Err(BoardError::InvalidCell(other)),
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}
