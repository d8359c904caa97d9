//! # Error Types — IBAN and BIC Validation Failures
//!
//! Every validation failure is a value, never a panic. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - One enum per facade: [`IbanError`] for IBANs, [`BicError`] for BICs.
//! - Structural problems are grouped under a `Format` variant whose payload
//!   names exactly what was violated. Each variant carries only the fields
//!   relevant to it.
//! - Character indexes are byte offsets. Errors surfaced by [`crate::Iban`]
//!   and [`crate::Bic`] index into the full input string.

use thiserror::Error;

use crate::bban::{CharacterClass, FieldKind};
use crate::bic::BicSegment;

/// Failure to validate or compose an IBAN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    /// The country code is not in the country table or has no BBAN layout.
    #[error("unsupported country: {country_code:?}")]
    UnsupportedCountry {
        /// The offending two-character code.
        country_code: String,
    },

    /// The string violates the IBAN structure.
    #[error("invalid IBAN format: {0}")]
    Format(#[from] IbanFormatViolation),

    /// The mod-97 check failed.
    #[error("invalid check digit: expected {expected}, found {actual}")]
    InvalidCheckDigit {
        /// Check digits computed from the country code and BBAN.
        expected: String,
        /// Check digits carried by the input.
        actual: String,
    },
}

/// The structural rule an IBAN string broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanFormatViolation {
    /// The input is empty.
    #[error("IBAN must not be empty")]
    Empty,

    /// Total length is outside the range any supported country allows.
    #[error("length {actual} is outside the allowed range {min}..={max}")]
    Length {
        /// Length of the input in characters.
        actual: usize,
        /// Country code plus check digits.
        min: usize,
        /// Longest IBAN of any supported country.
        max: usize,
    },

    /// The first two characters are not uppercase ASCII letters.
    #[error("country code must be two uppercase letters, found {code:?}")]
    CountryCode {
        /// The leading characters of the input.
        code: String,
    },

    /// Positions 2–3 are not both ASCII digits.
    #[error("check digit must be two digits, found {check_digit:?}")]
    CheckDigit {
        /// The characters found at the check digit position.
        check_digit: String,
    },

    /// The BBAN ended before the named field could be read.
    #[error("BBAN too short to read {field}")]
    FieldTooShort {
        /// The field that could not be read.
        field: FieldKind,
    },

    /// A character does not belong to the field's character class.
    #[error("invalid character {character:?} at index {index} in {field} (expected {class})")]
    InvalidCharacter {
        /// The field containing the character.
        field: FieldKind,
        /// The class the field requires.
        class: CharacterClass,
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        index: usize,
    },

    /// The BBAN has characters left over after the last field.
    #[error("BBAN length must be {expected}, found {actual}")]
    BbanLength {
        /// Sum of the country's field lengths.
        expected: usize,
        /// Length of the supplied BBAN.
        actual: usize,
    },

    /// A character the check digit engine cannot convert to a number.
    #[error("unexpected character {character:?} at index {index}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        index: usize,
    },

    /// The builder was not given a country code.
    #[error("missing country code")]
    MissingCountryCode,

    /// The builder was not given a value for a field the country requires.
    #[error("missing value for {field}")]
    MissingField {
        /// The field without a value.
        field: FieldKind,
    },

    /// The builder was given a value of the wrong length.
    #[error("{field} must be {expected} characters, found {actual}")]
    FieldLength {
        /// The field whose value has the wrong length.
        field: FieldKind,
        /// Length the country's layout requires.
        expected: usize,
        /// Length of the supplied value.
        actual: usize,
    },
}

impl IbanFormatViolation {
    /// Shift character indexes by `base`.
    ///
    /// Used to report a violation found inside a substring (the BBAN) in
    /// terms of the enclosing string (the full IBAN).
    pub(crate) fn offset(self, base: usize) -> Self {
        match self {
            Self::InvalidCharacter {
                field,
                class,
                character,
                index,
            } => Self::InvalidCharacter {
                field,
                class,
                character,
                index: index + base,
            },
            Self::UnexpectedCharacter { character, index } => Self::UnexpectedCharacter {
                character,
                index: index + base,
            },
            other => other,
        }
    }
}

/// Failure to validate a BIC.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BicError {
    /// The country segment is not in the country table.
    #[error("unsupported country: {country_code:?}")]
    UnsupportedCountry {
        /// The offending two-character code.
        country_code: String,
    },

    /// The BIC is neither 8 nor 11 characters long.
    #[error("BIC must be 8 or 11 characters, found {length}")]
    MalformedLength {
        /// Length of the input in characters.
        length: usize,
    },

    /// A segment contains a character outside its class.
    #[error("invalid BIC format: {0}")]
    Format(#[from] BicFormatViolation),
}

/// The structural rule a BIC string broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BicFormatViolation {
    /// A character does not belong to the segment's character class.
    #[error("invalid character {character:?} at index {index} in {segment} (expected {class})")]
    InvalidCharacter {
        /// The segment containing the character.
        segment: BicSegment,
        /// The class the segment requires.
        class: CharacterClass,
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_shifts_character_indexes() {
        let violation = IbanFormatViolation::InvalidCharacter {
            field: FieldKind::BankCode,
            class: CharacterClass::Numeric,
            character: 'X',
            index: 2,
        };
        assert_eq!(
            violation.offset(4),
            IbanFormatViolation::InvalidCharacter {
                field: FieldKind::BankCode,
                class: CharacterClass::Numeric,
                character: 'X',
                index: 6,
            }
        );
    }

    #[test]
    fn offset_leaves_other_variants_alone() {
        let violation = IbanFormatViolation::BbanLength {
            expected: 22,
            actual: 23,
        };
        assert_eq!(violation.clone().offset(4), violation);
    }

    #[test]
    fn format_violation_converts_into_iban_error() {
        let err: IbanError = IbanFormatViolation::Empty.into();
        assert_eq!(err, IbanError::Format(IbanFormatViolation::Empty));
        assert_eq!(
            err.to_string(),
            "invalid IBAN format: IBAN must not be empty"
        );
    }

    #[test]
    fn check_digit_error_display() {
        let err = IbanError::InvalidCheckDigit {
            expected: "33".into(),
            actual: "34".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid check digit: expected 33, found 34"
        );
    }

    #[test]
    fn bic_length_error_display() {
        let err = BicError::MalformedLength { length: 7 };
        assert_eq!(err.to_string(), "BIC must be 8 or 11 characters, found 7");
    }

    #[test]
    fn invalid_character_display_names_field_and_class() {
        let violation = IbanFormatViolation::InvalidCharacter {
            field: FieldKind::AccountNumber,
            class: CharacterClass::MixedAlphanumeric,
            character: 'a',
            index: 12,
        };
        assert_eq!(
            violation.to_string(),
            "invalid character 'a' at index 12 in account_number (expected mixed_alphanumeric)"
        );
    }
}
