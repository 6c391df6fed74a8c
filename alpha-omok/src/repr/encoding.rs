use std::{fmt::Display, str::FromStr};

/// Which planes make up the network input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Own and opponent stones.
    Basic,
    /// Basic plus a plane set when the first player is to move.
    SideToMove,
    /// Own and opponent stones, the last move, and the side to move.
    LastMove,
    /// Stones of this and the previous ply, and the side to move.
    Previous,
}

impl EncodingMode {
    pub const fn channels(self) -> usize {
        match self {
            EncodingMode::Basic => 2,
            EncodingMode::SideToMove => 3,
            EncodingMode::LastMove => 4,
            EncodingMode::Previous => 5,
        }
    }
}

impl Default for EncodingMode {
    fn default() -> Self {
        EncodingMode::LastMove
    }
}

impl Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            EncodingMode::Basic => "basic",
            EncodingMode::SideToMove => "side-to-move",
            EncodingMode::LastMove => "last-move",
            EncodingMode::Previous => "previous",
        })
    }
}

impl FromStr for EncodingMode {
    type Err = String;

    /// Accepts the mode name or its plane count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" | "2" => Ok(EncodingMode::Basic),
            "side-to-move" | "3" => Ok(EncodingMode::SideToMove),
            "last-move" | "4" => Ok(EncodingMode::LastMove),
            "previous" | "5" => Ok(EncodingMode::Previous),
            _ => Err(format!("unknown encoding mode `{s}`")),
        }
    }
}
