use core::fmt;
use std::sync::LazyLock;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use regex::{Captures, Regex};

use crate::{Components, ParseError, ParseResult, Rate, Timecode};

/// Two digits each for hours, minutes and seconds, then one or more frame digits.
static TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})([:;])([0-9]{2})([:;])([0-9]{2})([:;])([0-9]+)$")
        .expect("timecode pattern is a valid regex")
});

/// The character written before the frame field of a timecode.
///
/// `;` marks drop-frame timecode, `:` non-drop. The other separators carry no meaning
/// and are always written as `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Separator {
    /// `HH:MM:SS:FF`
    NonDropFrame = b':',
    /// `HH:MM:SS;FF`
    DropFrame = b';',
}

impl Separator {
    /// True for `;`
    pub const fn is_drop_frame(&self) -> bool {
        matches!(self, Self::DropFrame)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(u8::from(*self)))
    }
}

/// A timecode string split into fields, before any rate is applied.
struct TimecodeLiteral {
    components: Components,
    separator: Separator,
}

impl TimecodeLiteral {
    fn parse(text: &str) -> ParseResult<Self> {
        let caps = TIMECODE_PATTERN
            .captures(text)
            .ok_or_else(|| ParseError::invalid_format(text))?;

        let separator = caps[6]
            .bytes()
            .next()
            .and_then(|byte| Separator::try_from(byte).ok())
            .ok_or_else(|| ParseError::invalid_format(text))?;

        Ok(Self {
            components: Components::new(
                field(&caps, 1, "hours")?,
                field(&caps, 3, "minutes")?,
                field(&caps, 5, "seconds")?,
                field(&caps, 7, "frames")?,
            ),
            separator,
        })
    }
}

fn field(caps: &Captures<'_>, index: usize, name: &'static str) -> ParseResult<i64> {
    caps[index]
        .parse()
        .map_err(|source| ParseError::FieldOutOfRange {
            field: name,
            source,
        })
}

impl Timecode {
    /// Parse a timecode from text like `01:23:45:12` or `01:23:45;12`.
    ///
    /// The separator before the frame field decides drop-frame: `;` is drop-frame,
    /// `:` is not. The other two separators may be either.
    ///
    /// Frame codes skipped by drop-frame counting are accepted, see
    /// [`Timecode::from_components`].
    ///
    /// Only two hour digits are read. A timecode of 100 hours or more prints
    /// with three or more, and that text is rejected here.
    ///
    /// # Errors
    /// - [`ParseError::InvalidFormat`] if the text is not two digits each of hours,
    ///   minutes and seconds followed by one or more frame digits, separated by `:` or `;`
    /// - [`ParseError::FieldOutOfRange`] if the frame field is too long for an `i64`
    pub fn parse(text: &str, rate: Rate) -> ParseResult<Self> {
        let literal = TimecodeLiteral::parse(text)?;
        Ok(Self::from_components(
            literal.components,
            rate,
            literal.separator.is_drop_frame(),
        ))
    }

    /// Parse a timecode from text, with drop-frame given explicitly.
    ///
    /// The separator before the frame field is ignored.
    ///
    /// # Errors
    /// See [`Timecode::parse`].
    pub fn parse_with_drop_frame(text: &str, rate: Rate, drop_frame: bool) -> ParseResult<Self> {
        let literal = TimecodeLiteral::parse(text)?;
        Ok(Self::from_components(literal.components, rate, drop_frame))
    }
}
