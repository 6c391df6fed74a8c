use crate::{grid::Grid, state::GameState};

/// One of the eight symmetries of a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    Rotate180,
    Rotate270,
    /// Upside down.
    FlipVertical,
    /// Left to right.
    FlipHorizontal,
    /// Reflection along the main diagonal.
    Transpose,
    /// Reflection along the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipVertical,
        Symmetry::FlipHorizontal,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Symmetry::Rotate90 => Symmetry::Rotate270,
            Symmetry::Rotate270 => Symmetry::Rotate90,
            other => other,
        }
    }

    /// Whether the transform keeps rows and columns apart.
    /// The others are only valid on square boards.
    pub const fn preserves_shape(self) -> bool {
        matches!(
            self,
            Symmetry::Identity | Symmetry::Rotate180 | Symmetry::FlipVertical | Symmetry::FlipHorizontal
        )
    }

    /// Dimensions of a `rows` x `cols` grid after the transform.
    pub const fn output_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        if self.preserves_shape() {
            (rows, cols)
        } else {
            (cols, rows)
        }
    }

    /// Where the cell at `index` of a `rows` x `cols` grid ends up.
    pub const fn map(self, rows: usize, cols: usize, index: usize) -> usize {
        let (r, c) = (index / cols, index % cols);
        let (out_r, out_c) = match self {
            Symmetry::Identity => (r, c),
            Symmetry::Rotate90 => (c, rows - 1 - r),
            Symmetry::Rotate180 => (rows - 1 - r, cols - 1 - c),
            Symmetry::Rotate270 => (cols - 1 - c, r),
            Symmetry::FlipVertical => (rows - 1 - r, c),
            Symmetry::FlipHorizontal => (r, cols - 1 - c),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (cols - 1 - c, rows - 1 - r),
        };
        let (_, out_cols) = self.output_shape(rows, cols);
        out_r * out_cols + out_c
    }

    /// Transform a single `rows` x `cols` plane.
    pub fn apply<T: Copy + Default>(self, rows: usize, cols: usize, plane: &[T]) -> Vec<T> {
        assert_eq!(plane.len(), rows * cols, "plane does not match the board shape");
        let mut out = vec![T::default(); plane.len()];
        for (i, &value) in plane.iter().enumerate() {
            out[self.map(rows, cols, i)] = value;
        }
        out
    }

    /// Transform every plane of a stack of `rows` x `cols` planes.
    pub fn apply_planes<T: Copy + Default>(self, rows: usize, cols: usize, planes: &[T]) -> Vec<T> {
        let area = rows * cols;
        assert_eq!(planes.len() % area, 0, "planes do not match the board shape");
        planes
            .chunks_exact(area)
            .flat_map(|plane| self.apply(rows, cols, plane))
            .collect()
    }

    fn apply_grid(self, rows: usize, cols: usize, grid: &Grid) -> Grid {
        let mut out = Grid::new(grid.len());
        for cell in grid.cells() {
            out.set(self.map(rows, cols, cell));
        }
        out
    }
}

pub trait Symmetric: Sized {
    fn transform(&self, symmetry: Symmetry) -> Self;

    /// All eight variants, in the order of [`Symmetry::ALL`].
    fn symmetries(&self) -> [Self; 8] {
        Symmetry::ALL.map(|symmetry| self.transform(symmetry))
    }
}

impl Symmetric for GameState {
    fn transform(&self, symmetry: Symmetry) -> Self {
        let rules = *self.rules();
        assert!(
            rules.is_square() || symmetry.preserves_shape(),
            "{symmetry:?} requires a square board"
        );
        let (rows, cols) = (rules.rows(), rules.cols());
        let own = symmetry.apply_grid(rows, cols, self.own());
        let opponent = symmetry.apply_grid(rows, cols, self.opponent());
        let last_action = self.last_action().map(|action| symmetry.map(rows, cols, action));
        self.remap(own, opponent, last_action)
    }
}
