use std::{error::Error as StdError, fmt::Display, io};

use omok::PlayError;

/// Malformed or failed oracle output.
#[derive(Clone, Debug, PartialEq)]
pub enum OracleError {
    PolicySize { expected: usize, got: usize },
    NonFinite,
    NegativeProbability,
    ValueOutOfRange(f32),
    Failed(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::PolicySize { expected, got } => {
                write!(f, "policy has {got} entries, expected {expected}")
            }
            OracleError::NonFinite => "oracle returned a non-finite number".fmt(f),
            OracleError::NegativeProbability => "policy contains a negative probability".fmt(f),
            OracleError::ValueOutOfRange(value) => write!(f, "value {value} is outside of [-1, 1]"),
            OracleError::Failed(reason) => write!(f, "oracle failed: {reason}"),
        }
    }
}

impl StdError for OracleError {}

#[derive(Debug)]
pub enum Error {
    Play(PlayError),
    Oracle(OracleError),
    Io(io::Error),
    Parse(String),
    GameOver,
    WorkerPanicked,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Play(err) => write!(f, "illegal play: {err}"),
            Error::Oracle(err) => err.fmt(f),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Parse(reason) => write!(f, "cannot parse example: {reason}"),
            Error::GameOver => "the game is already over".fmt(f),
            Error::WorkerPanicked => "a self-play worker panicked".fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Play(err) => Some(err),
            Error::Oracle(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlayError> for Error {
    fn from(err: PlayError) -> Self {
        Error::Play(err)
    }
}

impl From<OracleError> for Error {
    fn from(err: OracleError) -> Self {
        Error::Oracle(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
