use std::{fmt, str::FromStr};

use combine::{
    easy,
    error::StreamError,
    parser::char::digit,
    stream::StreamErrorFor,
    EasyParser, ParseError, Parser, Stream,
};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// An [`EzParseError`] detached from the input it was produced from.
///
/// Ranges are copied out and positions become byte offsets into the input.
pub type OwnedParseError = easy::Errors<char, String, usize>;

pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Converts an error produced while parsing `s` into one that owns its data.
pub fn to_owned(s: &str, err: EzParseError<'_>) -> OwnedParseError {
    err.map_range(str::to_owned)
        .map_position(|pos| pos.translate_position(s))
}

/// An optionally negative run of decimal digits, converted with [`FromStr`].
///
/// Values that don't fit in `T` (or a `-` on an unsigned `T`) are reported as
/// parse errors rather than panics.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    T::Err: fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let sign = combine::optional(combine::token('-'));
    let digits = combine::many1::<String, _, _>(digit());

    (sign, digits)
        .and_then(|(sign, digits)| {
            let text = match sign {
                Some(_) => format!("-{digits}"),
                None => digits,
            };
            text.parse::<T>()
                .map_err(StreamErrorFor::<Input>::message_format)
        })
        .expected("decimal integer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned() {
        assert_eq!(from_str("42", decimal_integer::<u32, _>()).ok(), Some(42));
        assert_eq!(from_str("007", decimal_integer::<u32, _>()).ok(), Some(7));
    }

    #[test]
    fn signed() {
        assert_eq!(from_str("-5", decimal_integer::<i32, _>()).ok(), Some(-5));
        assert_eq!(from_str("5", decimal_integer::<i32, _>()).ok(), Some(5));
    }

    #[test]
    fn negative_unsigned_is_an_error() {
        assert!(from_str("-5", decimal_integer::<u32, _>()).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(from_str("256", decimal_integer::<u8, _>()).is_err());
    }

    #[test]
    fn trailing_input_is_an_error() {
        assert!(from_str("12 ", decimal_integer::<u32, _>()).is_err());
        assert!(from_str("", decimal_integer::<u32, _>()).is_err());
    }

    #[test]
    fn owned_error_points_into_input() {
        let input = "12x";
        let err = from_str(input, decimal_integer::<u32, _>()).unwrap_err();
        let owned = to_owned(input, err);
        assert_eq!(owned.position, 2);
    }
}
