use omok::{GameState, Grid, Symmetry};

use super::EncodingMode;

/// Stacked `channels x rows x cols` planes of one position.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTensor {
    channels: usize,
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl StateTensor {
    pub fn zeros(channels: usize, rows: usize, cols: usize) -> Self {
        StateTensor {
            channels,
            rows,
            cols,
            data: vec![0.0; channels * rows * cols],
        }
    }

    pub const fn shape(&self) -> [usize; 3] {
        [self.channels, self.rows, self.cols]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn plane(&self, channel: usize) -> &[f32] {
        let area = self.rows * self.cols;
        &self.data[channel * area..(channel + 1) * area]
    }

    fn plane_mut(&mut self, channel: usize) -> &mut [f32] {
        let area = self.rows * self.cols;
        &mut self.data[channel * area..(channel + 1) * area]
    }

    fn fill_grid(&mut self, channel: usize, grid: &Grid) {
        let plane = self.plane_mut(channel);
        for cell in grid.cells() {
            plane[cell] = 1.0;
        }
    }

    /// Apply a board symmetry to every plane.
    #[must_use]
    pub fn transform(&self, symmetry: Symmetry) -> Self {
        let (rows, cols) = symmetry.output_shape(self.rows, self.cols);
        StateTensor {
            channels: self.channels,
            rows,
            cols,
            data: symmetry.apply_planes(self.rows, self.cols, &self.data),
        }
    }
}

/// Encode a position from the perspective of its mover.
pub fn game_repr(state: &GameState, mode: EncodingMode) -> StateTensor {
    let rules = state.rules();
    let mut tensor = StateTensor::zeros(mode.channels(), rules.rows(), rules.cols());
    tensor.fill_grid(0, state.own());
    tensor.fill_grid(1, state.opponent());

    match mode {
        EncodingMode::Basic => {}
        EncodingMode::SideToMove => {
            if state.is_first_player() {
                tensor.plane_mut(2).fill(1.0);
            }
        }
        EncodingMode::LastMove => {
            if let Some(action) = state.last_action() {
                tensor.plane_mut(2)[action] = 1.0;
            }
            if state.is_first_player() {
                tensor.plane_mut(3).fill(1.0);
            }
        }
        EncodingMode::Previous => {
            // Before the last move the roles were reversed, so the mover's
            // stones are unchanged and the opponent lacks the last stone.
            tensor.fill_grid(2, state.own());
            tensor.fill_grid(3, state.opponent());
            if let Some(action) = state.last_action() {
                tensor.plane_mut(3)[action] = 0.0;
            }
            if state.is_first_player() {
                tensor.plane_mut(4).fill(1.0);
            }
        }
    }
    tensor
}
