//! Brazilian postal codes (CEPs).
//!
//! A CEP is eight decimal digits, optionally written with a hyphen after the
//! fifth digit (`NNNNN-NNN`). [`validate`] checks the raw shape and
//! [`normalize`] strips everything that is not a digit. [`PostalCode::parse`]
//! runs both so a normalised code can only be built from valid input.

use std::fmt;

use thiserror::Error;

/// Number of digits in a normalised postal code.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Digits before the optional hyphen.
const PREFIX_DIGITS: usize = 5;

/// Check whether `raw` looks like a CEP.
///
/// The input is trimmed and upper-cased first, then must match
/// `^\d{5}-?\d{3}$`. Only ASCII digits are accepted.
///
/// # Examples
///
/// ```
/// use cep_distance_core::validate;
///
/// assert!(validate("01001-000"));
/// assert!(validate(" 01001000 "));
/// assert!(!validate("0100100"));
/// assert!(!validate("abcde-123"));
/// ```
#[must_use]
pub fn validate(raw: &str) -> bool {
    let candidate = raw.trim().to_uppercase();
    let bytes = candidate.as_bytes();
    match bytes.len() {
        POSTAL_CODE_DIGITS => bytes.iter().all(u8::is_ascii_digit),
        len if len == POSTAL_CODE_DIGITS + 1 => {
            let (prefix, rest) = bytes.split_at(PREFIX_DIGITS);
            match rest.split_first() {
                Some((b'-', suffix)) => {
                    prefix.iter().all(u8::is_ascii_digit) && suffix.iter().all(u8::is_ascii_digit)
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Strip every non-digit character from `raw`.
///
/// Callers must run [`validate`] first; the output of invalid input is not
/// guaranteed to be a postal code.
///
/// ```
/// use cep_distance_core::normalize;
///
/// assert_eq!(normalize("01001-000"), "01001000");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returned by [`PostalCode::parse`] when the input is not a CEP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input:?} is not a postal code; use the format NNNNN-NNN or NNNNNNNN")]
pub struct InvalidPostalCode {
    /// The rejected input, as supplied.
    pub input: String,
}

/// A validated, normalised eight-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validate and normalise `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPostalCode`] when `raw` fails [`validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cep_distance_core::PostalCode;
    ///
    /// let code = PostalCode::parse("24220-031")?;
    /// assert_eq!(code.as_str(), "24220031");
    /// # Ok::<(), cep_distance_core::InvalidPostalCode>(())
    /// ```
    pub fn parse(raw: &str) -> Result<Self, InvalidPostalCode> {
        if validate(raw) {
            Ok(Self(normalize(raw)))
        } else {
            Err(InvalidPostalCode {
                input: raw.to_owned(),
            })
        }
    }

    /// The eight digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01001-000")]
    #[case("01001000")]
    #[case("  24220-031\t")]
    #[case("99999999")]
    fn accepts_well_formed_codes(#[case] raw: &str) {
        assert!(validate(raw), "{raw:?} should validate");
    }

    #[rstest]
    #[case("")]
    #[case("0100100")]
    #[case("010010000")]
    #[case("abcde-123")]
    #[case("01001_000")]
    #[case("0100-1000")]
    #[case("01001--00")]
    #[case("01001-00a")]
    #[case("０１００１０００")]
    fn rejects_malformed_codes(#[case] raw: &str) {
        assert!(!validate(raw), "{raw:?} should not validate");
    }

    #[rstest]
    fn normalize_strips_hyphen() {
        assert_eq!(normalize("01001-000"), "01001000");
    }

    #[rstest]
    fn normalize_strips_surrounding_whitespace() {
        assert_eq!(normalize(" 01001-000\n"), "01001000");
    }

    #[rstest]
    fn parse_rejects_invalid_input() {
        let err = PostalCode::parse("123").expect_err("short code should fail");
        assert_eq!(err.input, "123");
    }

    #[rstest]
    fn parse_normalises_valid_input() {
        let code = PostalCode::parse("01001-000").expect("valid code");
        assert_eq!(code.as_str(), "01001000");
        assert_eq!(code.to_string(), "01001000");
    }
}
