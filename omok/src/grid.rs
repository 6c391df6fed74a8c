/// Occupancy of one player's stones, one bit per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    bits: Vec<u64>,
    len: usize,
}

impl Grid {
    pub fn new(len: usize) -> Self {
        Grid {
            bits: vec![0; (len + 63) / 64],
            len,
        }
    }

    /// Build a grid from a list of occupied cells.
    /// Returns `None` if any cell lies outside of the grid.
    pub fn from_cells(len: usize, cells: impl IntoIterator<Item = usize>) -> Option<Self> {
        let mut grid = Grid::new(len);
        for cell in cells {
            if cell >= len {
                return None;
            }
            grid.set(cell);
        }
        Some(grid)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&word| word == 0)
    }

    #[inline]
    pub fn get(&self, cell: usize) -> bool {
        cell < self.len && (self.bits[cell / 64] >> (cell % 64)) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, cell: usize) {
        debug_assert!(cell < self.len);
        self.bits[cell / 64] |= 1 << (cell % 64);
    }

    pub fn count(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_disjoint(&self, other: &Grid) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(a, b)| a & b == 0)
    }

    /// Occupied cells in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(i, &word)| {
            let mut word = word;
            std::iter::from_fn(move || {
                if word == 0 {
                    return None;
                }
                let bit = word.trailing_zeros() as usize;
                word &= word - 1;
                Some(i * 64 + bit)
            })
        })
    }

    /// Cells set in neither grid, in ascending order.
    pub fn empty_cells<'a>(&'a self, other: &'a Grid) -> impl Iterator<Item = usize> + 'a {
        let len = self.len;
        self.bits
            .iter()
            .zip(other.bits.iter())
            .enumerate()
            .flat_map(move |(i, (&a, &b))| {
                let mut free = !(a | b);
                std::iter::from_fn(move || {
                    if free == 0 {
                        return None;
                    }
                    let bit = free.trailing_zeros() as usize;
                    free &= free - 1;
                    Some(i * 64 + bit)
                })
            })
            .take_while(move |&cell| cell < len)
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn cells_across_words() {
        let grid = Grid::from_cells(130, [0, 63, 64, 129]).unwrap();
        assert_eq!(grid.count(), 4);
        assert_eq!(grid.cells().collect::<Vec<_>>(), vec![0, 63, 64, 129]);
        assert!(grid.get(64));
        assert!(!grid.get(65));
        assert!(!grid.get(500));
    }

    #[test]
    fn empty_cells_skip_both_grids() {
        let a = Grid::from_cells(5, [0, 3]).unwrap();
        let b = Grid::from_cells(5, [1]).unwrap();
        assert_eq!(a.empty_cells(&b).collect::<Vec<_>>(), vec![2, 4]);
        assert!(a.is_disjoint(&b));
    }

    #[test]
    fn out_of_range_cells_are_rejected() {
        assert!(Grid::from_cells(9, [9]).is_none());
    }
}
