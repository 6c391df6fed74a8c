use crate::{grid::Grid, rules::Rules};

// Row, column and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl Rules {
    /// Whether the stones in `grid` form a winning line through `action`.
    /// Only the four lines through the cell are inspected.
    pub(crate) fn line_through(&self, grid: &Grid, action: usize) -> bool {
        let (row, col) = self.to_coord(action);
        DIRECTIONS.into_iter().any(|(dr, dc)| {
            let run = 1 + self.run_length(grid, row, col, dr, dc) + self.run_length(grid, row, col, -dr, -dc);
            run >= self.win_length()
        })
    }

    /// Whether the stones in `grid` contain a winning line anywhere.
    pub(crate) fn has_line(&self, grid: &Grid) -> bool {
        grid.count() >= self.win_length() && grid.cells().any(|cell| self.line_through(grid, cell))
    }

    /// Count consecutive stones starting next to (row, col), walking in one direction.
    fn run_length(&self, grid: &Grid, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while count + 1 < self.win_length()
            && r >= 0
            && c >= 0
            && (r as usize) < self.rows()
            && (c as usize) < self.cols()
            && grid.get(self.to_action(r as usize, c as usize))
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use crate::{Grid, Rules};

    fn grid(rules: &Rules, cells: &[(usize, usize)]) -> Grid {
        Grid::from_cells(
            rules.n_actions(),
            cells.iter().map(|&(r, c)| rules.to_action(r, c)),
        )
        .unwrap()
    }

    #[test]
    fn line_through_any_cell_of_the_run() {
        let rules = Rules::default();
        let stones = grid(&rules, &[(2, 1), (3, 2), (4, 3), (5, 4), (6, 5)]);
        for (r, c) in [(2, 1), (4, 3), (6, 5)] {
            assert!(rules.line_through(&stones, rules.to_action(r, c)));
        }
        assert!(rules.has_line(&stones));
    }

    #[test]
    fn broken_run_is_not_a_line() {
        let rules = Rules::default();
        let stones = grid(&rules, &[(0, 0), (0, 1), (0, 2), (0, 4), (0, 5)]);
        assert!(!rules.has_line(&stones));
    }

    #[test]
    fn lines_do_not_wrap_around_rows() {
        let rules = Rules::default();
        // Cells 7, 8, 9, 10, 11 are consecutive indices but span two rows.
        let stones = Grid::from_cells(81, 7..12).unwrap();
        assert!(!rules.has_line(&stones));
    }

    #[test]
    fn overlines_count() {
        let rules = Rules::default();
        let stones = grid(&rules, &[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]);
        assert!(rules.line_through(&stones, rules.to_action(6, 0)));
    }
}
