//! Textual representation: `"N/D"` on output, two integers on input.
//!
//! The integers on input are separated by whitespace or by a single `/`,
//! so the formatted output can be read back.
//!
//! ```
//! use exact_fraction::Fraction;
//!
//! let mut input = "3 -6 10/4".as_bytes();
//! let mut f = Fraction::default();
//! f.read_from(&mut input)?;
//! assert_eq!(f.to_string(), "-1/2");
//! f.read_from(&mut input)?;
//! assert_eq!(f.to_string(), "5/2");
//! assert_eq!("5/2".parse::<Fraction>()?, f);
//! # Ok::<(), exact_fraction::FractionError>(())
//! ```

use std::{
    fmt,
    io::{self, BufRead},
    str::FromStr,
};

use crate::{FractionError, FractionResult};

use super::Fraction;

const SEPARATOR: u8 = b'/';

impl fmt::Display for Fraction {
    /// Denominator is always positive, so no sign fix-up is needed here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Fraction {
    /// Read numerator and denominator from the stream.
    ///
    /// On success `self` is replaced by the reduced value. On error it is
    /// left untouched. Input after the denominator stays in the reader.
    pub fn read_from(
        &mut self,
        reader: &mut impl BufRead,
    ) -> FractionResult<()> {
        let numerator = read_integer(reader, "numerator")?;
        skip_separator(reader).map_err(io_error)?;
        let denominator = read_integer(reader, "denominator")?;
        *self = Self::new(numerator, denominator)?;
        Ok(())
    }
}

impl FromStr for Fraction {
    type Err = FractionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = s.as_bytes();
        let mut fraction = Self::default();
        fraction.read_from(&mut reader)?;
        skip_whitespace(&mut reader).map_err(io_error)?;
        if !reader.is_empty() {
            log::debug!("trailing input after fraction in `{}`", s);
            return Err(FractionError::Format(format!(
                "unexpected trailing input: `{}`",
                String::from_utf8_lossy(reader)
            )));
        }
        Ok(fraction)
    }
}

fn io_error(err: io::Error) -> FractionError {
    FractionError::Format(err.to_string())
}

fn read_integer(
    reader: &mut impl BufRead,
    what: &str,
) -> FractionResult<i32> {
    skip_whitespace(reader).map_err(io_error)?;
    let token = read_token(reader).map_err(io_error)?;
    if token.is_empty() {
        return Err(FractionError::Format(format!("{} is missing", what)));
    }
    token.parse::<i32>().map_err(|err| {
        log::debug!("can not parse {} from `{}`: {}", what, token, err);
        FractionError::Format(format!(
            "can not parse {} from `{}`: {}",
            what, token, err
        ))
    })
}

/// Consume whitespace, then at most one separator with whitespace after it.
fn skip_separator(reader: &mut impl BufRead) -> io::Result<()> {
    skip_whitespace(reader)?;
    if reader.fill_buf()?.first() == Some(&SEPARATOR) {
        reader.consume(1);
    }
    Ok(())
}

fn skip_whitespace(reader: &mut impl BufRead) -> io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        let len = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let done = len < buf.len();
        reader.consume(len);
        if done {
            return Ok(());
        }
    }
}

/// Longest run of bytes which are neither whitespace nor the separator.
fn read_token(reader: &mut impl BufRead) -> io::Result<String> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let len = buf
            .iter()
            .take_while(|b| !b.is_ascii_whitespace() && **b != SEPARATOR)
            .count();
        token.extend_from_slice(&buf[..len]);
        let done = len < buf.len();
        reader.consume(len);
        if done {
            break;
        }
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use crate::{Fraction, FractionError};

    fn frac(n: i32, d: i32) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(frac(1, 2).to_string(), "1/2");
        assert_eq!(frac(3, -9).to_string(), "-1/3");
        assert_eq!(Fraction::ZERO.to_string(), "0/1");
        assert_eq!(format!("{}", frac(7, 1)), "7/1");
    }

    #[test]
    fn read_whitespace_separated() -> Result<(), FractionError> {
        let mut input = Cursor::new("  4\n\t-8  ");
        let mut f = Fraction::default();
        f.read_from(&mut input)?;
        assert_eq!(f, frac(-1, 2));
        Ok(())
    }

    #[test]
    fn read_sequence_from_small_buffer() -> Result<(), FractionError> {
        // capacity 1 forces tokens across several fill_buf calls
        let mut input =
            BufReader::with_capacity(1, "12 16 -100 / 3".as_bytes());
        let mut f = Fraction::default();
        f.read_from(&mut input)?;
        assert_eq!(f, frac(3, 4));
        f.read_from(&mut input)?;
        assert_eq!(f, frac(-100, 3));
        assert!(matches!(
            f.read_from(&mut input),
            Err(FractionError::Format(_))
        ));
        assert_eq!(f, frac(-100, 3));
        Ok(())
    }

    #[test]
    fn read_errors_keep_value() {
        let mut f = frac(1, 2);
        let inputs = ["", "1", "a 2", "1 b", "1.5 2", "99999999999 1", "/2"];
        for input in inputs {
            assert!(
                matches!(
                    f.read_from(&mut input.as_bytes()),
                    Err(FractionError::Format(_))
                ),
                "input: `{}`",
                input
            );
            assert_eq!(f, frac(1, 2));
        }
        assert!(matches!(
            f.read_from(&mut "1 0".as_bytes()),
            Err(FractionError::InvalidArgument(_))
        ));
        assert_eq!(f, frac(1, 2));
    }

    #[test]
    fn from_str() -> Result<(), FractionError> {
        assert_eq!("6 9".parse::<Fraction>()?, frac(2, 3));
        assert_eq!(" -6/9 ".parse::<Fraction>()?, frac(-2, 3));
        assert!(matches!(
            "1 2 3".parse::<Fraction>(),
            Err(FractionError::Format(_))
        ));
        assert!(matches!(
            "1//2".parse::<Fraction>(),
            Err(FractionError::Format(_))
        ));
        Ok(())
    }

    #[test]
    fn round_trip() -> Result<(), FractionError> {
        let values =
            [frac(5, 6), frac(-7, 3), Fraction::ZERO, frac(i32::MIN, 1)];
        for f in values {
            assert_eq!(f.to_string().parse::<Fraction>()?, f);
        }
        Ok(())
    }
}
