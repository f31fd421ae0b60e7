//! Kalah Engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Kalah Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for Kalah engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Pit is not one of the current player's pits, or it holds no stones.
    InvalidMove,
    /// A winner was requested for a game that has not ended.
    NotTerminal,

    /// Pits per player must be in range `1..=MAX_PITS_PER_PLAYER`.
    InvalidPitsPerPlayer,
    /// A board was given with a length that does not fit `2p + 2`.
    BoardLengthMismatch,
    /// Board holds more than `MAX_TOTAL_STONES` stones.
    StoneCountOverflow,

    /// Player parse string malformed.
    ParsePlayerMalformed,
    /// Move parse string malformed.
    ParseMoveMalformed,

    // An illegal move was provided, and could not be applied to some base state.
    GameIllegalMove,

    /// Engine is currently searching, so another search cannot be started.
    EngineAlreadySearching,
    /// Engine was asked for a search result, but no search was started.
    EngineNotSearching,
    /// Engine search thread ended without producing a result.
    EngineSearchFailed,
    /// Engine search depth is greater than `MAX_DEPTH`.
    EngineInvalidDepth,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMove => "invalid move",
            ErrorKind::NotTerminal => "game not terminal",

            ErrorKind::InvalidPitsPerPlayer => "invalid pits per player",
            ErrorKind::BoardLengthMismatch => "board length mismatch",
            ErrorKind::StoneCountOverflow => "stone count overflow",

            ErrorKind::ParsePlayerMalformed => "parse player malformed",
            ErrorKind::ParseMoveMalformed => "parse move malformed",

            ErrorKind::GameIllegalMove => "game history illegal move",

            ErrorKind::EngineAlreadySearching => "engine already searching",
            ErrorKind::EngineNotSearching => "engine not searching",
            ErrorKind::EngineSearchFailed => "engine search failed",
            ErrorKind::EngineInvalidDepth => "engine invalid depth",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Kalah Engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }

    /// Returns the kind of this error, regardless of any attached context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind)
            | Error::Message(error_kind, _)
            | Error::Custom(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
