use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Reasons an annotation literal could not be parsed.
///
/// Fill rules never propagate these: the engine favours availability, so a
/// rule logs the error and assigns the kind's zero value instead. The parsers
/// in [`crate::literal`] return them for callers that want to be strict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Not one of the accepted boolean spellings.
    #[error("invalid boolean literal `{literal}`")]
    InvalidBool { literal: String },

    #[error("invalid integer literal `{literal}`: {source}")]
    InvalidInteger {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid unsigned literal `{literal}`: {source}")]
    InvalidUnsigned {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float literal `{literal}`: {source}")]
    InvalidFloat {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid duration literal `{literal}`")]
    InvalidDuration { literal: String },

    /// `std::time::Duration` cannot hold a negative span.
    #[error("negative duration literal `{literal}`")]
    NegativeDuration { literal: String },

    /// A sequence literal must be wrapped in `[` and `]`.
    #[error("malformed sequence literal `{literal}`")]
    MalformedSequence { literal: String },
}

impl LiteralError {
    /// The offending annotation text.
    pub fn literal(&self) -> &str {
        match self {
            LiteralError::InvalidBool { literal }
            | LiteralError::InvalidInteger { literal, .. }
            | LiteralError::InvalidUnsigned { literal, .. }
            | LiteralError::InvalidFloat { literal, .. }
            | LiteralError::InvalidDuration { literal }
            | LiteralError::NegativeDuration { literal }
            | LiteralError::MalformedSequence { literal } => literal,
        }
    }
}

/// Convenience alias for literal parsing.
pub type LiteralResult<T> = Result<T, LiteralError>;
