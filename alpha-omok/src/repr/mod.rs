mod encoding;
mod game;

#[cfg(test)]
mod tests;

pub use encoding::EncodingMode;
pub use game::{game_repr, StateTensor};
