use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    OutOfBounds,
    AlreadyOccupied,
    Overlap,
    LastActionNotOpponent,
    InvalidRules,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PlayError::*;
        write!(f, "{}", match self {
            OutOfBounds => "given action is not on the board",
            AlreadyOccupied => "cannot place a stone in that position because it is already occupied",
            Overlap => "a cell cannot hold stones of both players",
            LastActionNotOpponent => "the last action must be one of the opponent's stones",
            InvalidRules => "board dimensions and winning length must be at least 1 and the board at most 65536 cells",
        })
    }
}

impl Error for PlayError {}
