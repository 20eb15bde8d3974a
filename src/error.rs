use std::num::ParseIntError;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while reading text into a [`Timecode`](crate::Timecode).

Parsing is the only fallible operation in this crate. Anything that has
already been turned into numbers (components, frame indices, durations)
always produces a timecode.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not shaped like `HH:MM:SS:FF` or `HH:MM:SS;FF`.
    ///
    /// Contains the rejected input.
    #[error("Invalid timecode format: {0:?}")]
    InvalidFormat(String),
    /// A field had the right shape but does not fit in an `i64`.
    #[error("Timecode field `{field}` is out of range: {source}")]
    FieldOutOfRange {
        /// The name of the offending field
        field: &'static str,
        /// The underlying integer error
        source: ParseIntError,
    },
}

impl ParseError {
    pub(crate) fn invalid_format(text: &str) -> Self {
        Self::InvalidFormat(text.to_owned())
    }

    /// True if the input did not match the timecode shape at all
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

/// The parse result type (see [`ParseError`])
pub type ParseResult<T> = Result<T, ParseError>;
