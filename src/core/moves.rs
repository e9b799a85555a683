//! Blank-tile moves
//!
//! A move names the direction the blank travels: `Up` swaps the blank with
//! the tile above it, and so on. At most four moves are legal from any
//! board, fewer at edges and corners.

use std::fmt;

/// Direction the blank moves within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions, in the order successors are generated
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row/column offset of the tile the blank swaps with
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The move that undoes this one
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Human-readable label used in solution listings
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for movement in Move::ALL {
            assert_eq!(movement.opposite().opposite(), movement);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for movement in Move::ALL {
            let (dr, dc) = movement.offset();
            let (odr, odc) = movement.opposite().offset();
            assert_eq!(dr + odr, 0);
            assert_eq!(dc + odc, 0);
        }
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(format!("{}", Move::Up), "Up");
        assert_eq!(format!("{}", Move::Down), "Down");
        assert_eq!(format!("{}", Move::Left), "Left");
        assert_eq!(format!("{}", Move::Right), "Right");
    }
}
