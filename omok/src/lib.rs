mod colour;
mod error;
mod game_result;
mod grid;
mod rules;
mod state;
mod symm;
mod wins;

pub use colour::Colour;
pub use error::PlayError;
pub use game_result::GameResult;
pub use grid::Grid;
pub use rules::Rules;
pub use state::{GameState, Outcome};
pub use symm::{Symmetric, Symmetry};
