//! 8-puzzle board representation
//!
//! A Board is an immutable 3×3 permutation of the values 0–8, stored
//! row-major, with 0 denoting the blank. Applying a move never mutates a
//! board; it produces a new one.

use super::moves::Move;
use std::fmt;
use std::str::FromStr;

/// Side length of the grid
pub const SIDE: usize = 3;

/// Number of cells
pub const CELLS: usize = SIDE * SIDE;

/// A 3×3 puzzle configuration
///
/// Invariant: every value 0–8 appears exactly once. `Board::new` enforces
/// this; all other constructors preserve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

/// Error type for invalid board configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongCellCount(usize),
    ValueOutOfRange(u8),
    DuplicateValue(u8),
    UnparsableCell(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCellCount(count) => {
                write!(f, "Board must have exactly {CELLS} cells, got {count}")
            }
            Self::ValueOutOfRange(value) => {
                write!(f, "Cell value must be between 0 and 8, got {value}")
            }
            Self::DuplicateValue(value) => write!(f, "Value {value} appears more than once"),
            Self::UnparsableCell(token) => write!(f, "Cannot parse cell value: {token:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// The fixed goal configuration, row-major
    pub const GOAL: Self = Self {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Create a board from row-major cells, validating the permutation invariant
    ///
    /// # Errors
    /// Returns `BoardError` if any value is outside 0–8 or appears more
    /// than once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::core::Board;
    ///
    /// let board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert!(board.is_goal());
    ///
    /// assert!(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 8]).is_err());
    /// ```
    pub fn new(cells: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            if usize::from(value) >= CELLS {
                return Err(BoardError::ValueOutOfRange(value));
            }
            if seen[usize::from(value)] {
                return Err(BoardError::DuplicateValue(value));
            }
            seen[usize::from(value)] = true;
        }
        Ok(Self { cells })
    }

    /// The cells in row-major order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Value at a grid position
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIDE + col]
    }

    /// Position of the blank (the unique cell holding 0)
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        // The permutation invariant guarantees exactly one 0.
        let index = self
            .cells
            .iter()
            .position(|&value| value == 0)
            .unwrap_or_default();
        (index / SIDE, index % SIDE)
    }

    /// Apply a move, swapping the blank with its neighbor in that direction
    ///
    /// Returns `None` when the neighbor would fall outside the grid. The
    /// input board is untouched either way.
    #[must_use]
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = movement.offset();

        let new_row = row.checked_add_signed(isize::from(dr))?;
        let new_col = col.checked_add_signed(isize::from(dc))?;
        if new_row >= SIDE || new_col >= SIDE {
            return None;
        }

        let mut cells = self.cells;
        cells.swap(row * SIDE + col, new_row * SIDE + new_col);
        Some(Self { cells })
    }

    /// Canonical identity key: cells packed row-major, four bits each
    ///
    /// Total and injective over the 9-cell domain: two boards are equal
    /// iff their keys are equal.
    #[inline]
    #[must_use]
    pub fn canonical_key(&self) -> u64 {
        self.cells
            .iter()
            .fold(0, |key, &value| (key << 4) | u64::from(value))
    }

    /// Whether this board is the goal configuration
    #[inline]
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.canonical_key() == Self::GOAL.canonical_key()
    }

    /// Number of inversions among the non-blank tiles, row-major
    #[must_use]
    pub fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }

    /// Whether the goal is reachable from this board
    ///
    /// For the odd-sided 3×3 grid a board shares the goal's parity class
    /// iff its inversion count is even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse nine whitespace- or comma-separated values, row-major
    ///
    /// ```
    /// use eight_puzzle::core::Board;
    ///
    /// let board: Board = "8 1 3 4 0 2 7 6 5".parse().unwrap();
    /// assert_eq!(board.get(1, 1), 0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [0u8; CELLS];
        let mut count = 0;

        for token in s.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let value = token
                .parse::<u8>()
                .map_err(|_| BoardError::UnparsableCell(token.to_string()))?;
            if count == CELLS {
                return Err(BoardError::WrongCellCount(count + 1));
            }
            cells[count] = value;
            count += 1;
        }

        if count != CELLS {
            return Err(BoardError::WrongCellCount(count));
        }
        Self::new(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                write!(f, "{} ", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
