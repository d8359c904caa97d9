//! # Check Digit — ISO 7064 MOD 97-10
//!
//! The IBAN check digits are computed over the rearranged string
//! `BBAN + country code + check digits`, with every letter replaced by its
//! two-digit value (`A` = 10 … `Z` = 35). The resulting numeral is far wider
//! than any machine integer, so the remainder is accumulated one digit at a
//! time.
//!
//! - Computing: check digits are `98 - (rearranged with "00") mod 97`.
//! - Validating: the rearranged IBAN mod 97 must equal 1.

use crate::bban::{max_iban_length, IBAN_PREFIX_LENGTH};
use crate::error::{IbanError, IbanFormatViolation};
use crate::layout::char_at;

/// Placeholder check digits used while computing.
pub const DEFAULT_CHECK_DIGIT: &str = "00";

/// The MOD 97-10 modulus.
pub const MODULUS: u32 = 97;

const CHECK_DIGIT_RANGE: std::ops::Range<usize> = 2..IBAN_PREFIX_LENGTH;

/// Compute the two check digits for a country code and BBAN.
///
/// # Errors
///
/// Returns [`IbanFormatViolation::UnexpectedCharacter`] if either input holds
/// anything but ASCII digits and uppercase letters. The index is the
/// character's offset in the IBAN the inputs would form.
pub fn compute(country_code: &str, bban: &str) -> Result<String, IbanError> {
    let remainder = mod97(&[
        (bban, IBAN_PREFIX_LENGTH),
        (country_code, 0),
        (DEFAULT_CHECK_DIGIT, CHECK_DIGIT_RANGE.start),
    ])?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Validate the check digits of a full IBAN string.
///
/// Only the checksum is verified; the BBAN layout is the caller's concern.
///
/// # Errors
///
/// - [`IbanFormatViolation::Length`] if the string is shorter than four
///   characters.
/// - [`IbanFormatViolation::UnexpectedCharacter`] for characters that have no
///   numeric value.
/// - [`IbanError::InvalidCheckDigit`] if the checksum does not hold.
pub fn validate(iban: &str) -> Result<(), IbanError> {
    let (prefix, bban) = split_prefix(iban)?;

    if mod97(&[(bban, IBAN_PREFIX_LENGTH), (prefix, 0)])? == 1 {
        return Ok(());
    }

    let country_code = &prefix[..CHECK_DIGIT_RANGE.start];
    Err(IbanError::InvalidCheckDigit {
        expected: compute(country_code, bban)?,
        actual: prefix[CHECK_DIGIT_RANGE].to_string(),
    })
}

/// Split an IBAN into its four-character prefix and the BBAN.
fn split_prefix(iban: &str) -> Result<(&str, &str), IbanError> {
    if iban.len() < IBAN_PREFIX_LENGTH {
        return Err(IbanFormatViolation::Length {
            actual: iban.chars().count(),
            min: IBAN_PREFIX_LENGTH,
            max: max_iban_length(),
        }
        .into());
    }

    let prefix = iban.get(..IBAN_PREFIX_LENGTH);
    let bban = iban.get(IBAN_PREFIX_LENGTH..);
    match (prefix, bban) {
        (Some(prefix), Some(bban)) if prefix.is_ascii() => Ok((prefix, bban)),
        _ => {
            // A multi-byte character straddles or precedes the split point.
            let index = iban.bytes().position(|b| !b.is_ascii()).unwrap_or(0);
            Err(IbanFormatViolation::UnexpectedCharacter {
                character: char_at(iban, index),
                index,
            }
            .into())
        }
    }
}

/// Remainder mod 97 of the concatenated segments after letter substitution.
///
/// Each segment carries the offset used when reporting a bad character.
fn mod97(segments: &[(&str, usize)]) -> Result<u32, IbanFormatViolation> {
    let mut remainder = 0u32;
    for (segment, base) in segments {
        for (i, byte) in segment.bytes().enumerate() {
            remainder = match byte {
                b'0'..=b'9' => (remainder * 10 + u32::from(byte - b'0')) % MODULUS,
                b'A'..=b'Z' => (remainder * 100 + u32::from(byte - b'A') + 10) % MODULUS,
                _ => {
                    return Err(IbanFormatViolation::UnexpectedCharacter {
                        character: char_at(segment, i),
                        index: base + i,
                    })
                }
            };
        }
    }
    Ok(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_known_check_digits() {
        assert_eq!(compute("TR", "0006100519786457841326").unwrap(), "33");
        assert_eq!(compute("DE", "370400440532013000").unwrap(), "89");
        assert_eq!(compute("GB", "NWBK60161331926819").unwrap(), "29");
        assert_eq!(compute("FR", "20041010050500013M02606").unwrap(), "14");
    }

    #[test]
    fn computes_single_digit_with_leading_zero() {
        assert_eq!(compute("DE", "120300000000202051").unwrap(), "02");
    }

    #[test]
    fn validates_known_ibans() {
        for iban in [
            "TR330006100519786457841326",
            "DE89370400440532013000",
            "GB29NWBK60161331926819",
            "NO9386011117947",
            "MT84MALT011000012345MTLCAST001S",
        ] {
            assert!(validate(iban).is_ok(), "{iban}");
        }
    }

    #[test]
    fn wrong_check_digit_reports_expected_and_actual() {
        let err = validate("TR340006100519786457841326").unwrap_err();
        assert_eq!(
            err,
            IbanError::InvalidCheckDigit {
                expected: "33".into(),
                actual: "34".into(),
            }
        );
    }

    #[test]
    fn letter_substitution_matches_digit_stream() {
        // WEST12345698765432GB82 -> 3214282912345698765432161182, mod 97 = 1.
        assert_eq!(mod97(&[("WEST12345698765432GB82", 0)]).unwrap(), 1);
        assert_eq!(
            mod97(&[("WEST12345698765432GB82", 0)]).unwrap(),
            mod97(&[("3214282912345698765432161182", 0)]).unwrap()
        );
    }

    #[test]
    fn segments_concatenate() {
        assert_eq!(
            mod97(&[("NWBK60161331926819", 4), ("GB29", 0)]).unwrap(),
            mod97(&[("NWBK60161331926819GB29", 0)]).unwrap()
        );
    }

    #[test]
    fn computed_digits_always_validate() {
        for (country, bban) in [
            ("TR", "0006100519786457841326"),
            ("TR", "99999ZZZZZZZZZZZZZZZZZ"),
            ("TR", "0000000000000000000000"),
            ("NL", "ABNA0417164300"),
        ] {
            let digits = compute(country, bban).unwrap();
            assert_eq!(digits.len(), 2);
            let iban = format!("{country}{digits}{bban}");
            assert!(validate(&iban).is_ok(), "{iban}");
        }
    }

    #[test]
    fn rejects_lowercase_with_index_in_iban() {
        let err = validate("TR330006100519786457841r26").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(IbanFormatViolation::UnexpectedCharacter {
                character: 'r',
                index: 23,
            })
        );
    }

    #[test]
    fn compute_reports_index_in_would_be_iban() {
        let err = compute("TR", "00061-0519786457841326").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(IbanFormatViolation::UnexpectedCharacter {
                character: '-',
                index: 9,
            })
        );
        let err = compute("tR", "0006100519786457841326").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(IbanFormatViolation::UnexpectedCharacter {
                character: 't',
                index: 0,
            })
        );
    }

    #[test]
    fn rejects_too_short_input() {
        assert_eq!(
            validate("TR3").unwrap_err(),
            IbanError::Format(IbanFormatViolation::Length {
                actual: 3,
                min: 4,
                max: 31
            })
        );
    }

    #[test]
    fn multibyte_prefix_does_not_panic() {
        let err = validate("Tü330006100519786457841326").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(IbanFormatViolation::UnexpectedCharacter {
                character: 'ü',
                index: 1,
            })
        );
    }
}
