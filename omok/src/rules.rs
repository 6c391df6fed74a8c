use arrayvec::ArrayVec;

use crate::{symm::Symmetry, PlayError};

pub const DEFAULT_SIZE: usize = 9;
pub const DEFAULT_WIN_LENGTH: usize = 5;
/// Largest supported number of cells.
pub const MAX_CELLS: usize = 1 << 16;

/// Board shape and the number of stones in a row needed to win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl Rules {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, PlayError> {
        let cells = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if rows == 0 || cols == 0 || win_length == 0 || cells > MAX_CELLS {
            return Err(PlayError::InvalidRules);
        }
        Ok(Rules {
            rows,
            cols,
            win_length,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Size of the action space, one action per cell.
    pub const fn n_actions(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Transforms that map this board onto itself.
    pub fn symmetries(&self) -> ArrayVec<Symmetry, 8> {
        Symmetry::ALL
            .into_iter()
            .filter(|symmetry| self.is_square() || symmetry.preserves_shape())
            .collect()
    }

    #[inline]
    pub const fn to_coord(&self, action: usize) -> (usize, usize) {
        (action / self.cols, action % self.cols)
    }

    #[inline]
    pub const fn to_action(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::{Rules, MAX_CELLS};
    use crate::PlayError;

    #[test]
    fn zero_sized_rules_are_rejected() {
        assert_eq!(Rules::new(0, 9, 5), Err(PlayError::InvalidRules));
        assert_eq!(Rules::new(9, 0, 5), Err(PlayError::InvalidRules));
        assert_eq!(Rules::new(9, 9, 0), Err(PlayError::InvalidRules));
    }

    #[test]
    fn oversized_rules_are_rejected() {
        assert_eq!(Rules::new(usize::MAX, 2, 5), Err(PlayError::InvalidRules));
        assert_eq!(Rules::new(100_000, 100_000, 5), Err(PlayError::InvalidRules));
        assert_eq!(Rules::new(1, MAX_CELLS + 1, 5), Err(PlayError::InvalidRules));
        assert_eq!(Rules::new(256, 256, 5).map(|rules| rules.n_actions()), Ok(MAX_CELLS));
    }

    #[test]
    fn rectangular_boards_keep_four_symmetries() {
        assert_eq!(Rules::default().symmetries().len(), 8);
        assert_eq!(Rules::new(6, 7, 4).unwrap().symmetries().len(), 4);
    }

    #[test]
    fn coordinates() {
        let rules = Rules::new(3, 4, 3).unwrap();
        assert_eq!(rules.to_coord(7), (1, 3));
        assert_eq!(rules.to_action(2, 1), 9);
    }
}
