use std::io;

use thiserror::Error;

/// Errors raised by the generator core.
///
/// Everything except `Io` is an internal invariant violation: with a valid
/// alphabet and the driver loop in `core`, none of them can occur.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("no unique self-reproducing seed at phase {phase} ({matches} candidates)")]
    AmbiguousSeed { phase: usize, matches: usize },

    #[error("encoder starved at phase {phase}: no queued byte")]
    Starved { phase: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True for invariant violations, false for output failures.
    pub fn is_internal(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Rejected `count` argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("empty count")]
    Empty,

    #[error("\u{2018}{0}\u{2019} is not a non-negative decimal integer")]
    InvalidDigit(String),

    #[error("\u{2018}{0}\u{2019} is too large")]
    Overflow(String),
}
