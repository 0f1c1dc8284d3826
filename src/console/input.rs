//! Integer parsing with optional inclusive bounds.

use crate::i18n::Message;
use derive_more::Display;
use std::num::IntErrorKind;
use tracing::instrument;

/// Inclusive limits for a prompted integer. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl Bounds {
    /// Any integer.
    pub fn any() -> Self {
        Self::default()
    }

    /// `value >= minimum`.
    pub fn at_least(minimum: i64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    /// `minimum <= value <= maximum`.
    pub fn between(minimum: i64, maximum: i64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    /// Checks `value` against the lower bound first, then the upper.
    #[instrument]
    pub fn check(self, value: i64) -> Result<i64, InputRejection> {
        if let Some(min) = self.minimum
            && value < min
        {
            return Err(InputRejection::BelowMinimum(min));
        }
        if let Some(max) = self.maximum
            && value > max
        {
            return Err(InputRejection::AboveMaximum(max));
        }
        Ok(value)
    }
}

/// Why a line of input was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputRejection {
    /// Not a whole number.
    #[display("not an integer")]
    NotAnInteger,
    /// A whole number outside the 64-bit signed range.
    #[display("outside the supported range")]
    OutOfRange,
    /// Below the given minimum.
    #[display("must be >= {_0}")]
    BelowMinimum(i64),
    /// Above the given maximum.
    #[display("must be <= {_0}")]
    AboveMaximum(i64),
}

impl InputRejection {
    /// The message shown before prompting again.
    pub fn message(self) -> Message<'static> {
        match self {
            InputRejection::NotAnInteger => Message::NotAnInteger,
            InputRejection::OutOfRange => Message::OutOfRange,
            InputRejection::BelowMinimum(min) => Message::BelowMinimum(min),
            InputRejection::AboveMaximum(max) => Message::AboveMaximum(max),
        }
    }
}

/// Parses one line of user input as an integer within `bounds`.
///
/// Surrounding whitespace is ignored; a leading sign is accepted. Whole
/// numbers that do not fit an `i64` are [`InputRejection::OutOfRange`].
#[instrument]
pub fn parse_integer(line: &str, bounds: Bounds) -> Result<i64, InputRejection> {
    let value = line.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputRejection::OutOfRange,
        _ => InputRejection::NotAnInteger,
    })?;
    bounds.check(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_signed_and_padded() {
        assert_eq!(parse_integer("  42\n", Bounds::any()), Ok(42));
        assert_eq!(parse_integer("-7", Bounds::any()), Ok(-7));
        assert_eq!(parse_integer("+3", Bounds::any()), Ok(3));
    }

    #[test]
    fn test_rejects_non_integers() {
        for line in ["", "abc", "3.5", "1 2", "--1"] {
            assert_eq!(
                parse_integer(line, Bounds::any()),
                Err(InputRejection::NotAnInteger),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_oversized_whole_numbers_are_out_of_range() {
        for line in ["99999999999999999999", "-99999999999999999999"] {
            assert_eq!(
                parse_integer(line, Bounds::any()),
                Err(InputRejection::OutOfRange),
                "{line:?}"
            );
        }
        assert_eq!(
            parse_integer("9223372036854775807", Bounds::any()),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::between(0, 2);
        assert_eq!(parse_integer("0", bounds), Ok(0));
        assert_eq!(parse_integer("2", bounds), Ok(2));
        assert_eq!(
            parse_integer("-1", bounds),
            Err(InputRejection::BelowMinimum(0))
        );
        assert_eq!(
            parse_integer("3", bounds),
            Err(InputRejection::AboveMaximum(2))
        );
        assert_eq!(
            parse_integer("1", Bounds::at_least(2)),
            Err(InputRejection::BelowMinimum(2))
        );
    }
}
