//! # BIC — Business Identifier Code (ISO 9362)
//!
//! Also known as SWIFT-BIC or SWIFT code. Layout, by offset:
//!
//! | Offset  | Segment       | Characters              |
//! |---------|---------------|-------------------------|
//! | 0..4    | bank code     | uppercase letters       |
//! | 4..6    | country code  | uppercase letters, known country |
//! | 6..8    | location code | uppercase letters or digits |
//! | 8..11   | branch code   | uppercase letters or digits, optional |
//!
//! A [`Bic`] can only be obtained through [`Bic::new`] (or `FromStr`,
//! `TryFrom<String>`, serde), so every instance holds a valid code.

use std::hash::{Hash, Hasher};
use std::ops::Range;

use serde::Serialize;

use crate::bban::CharacterClass;
use crate::country::{self, CountryCode};
use crate::error::{BicError, BicFormatViolation};
use crate::layout::find_violation;

/// Length of a BIC without branch code.
pub const BIC8_LENGTH: usize = 8;
/// Length of a BIC with branch code.
pub const BIC11_LENGTH: usize = 11;

/// Offset of the bank code.
pub const BANK_CODE_INDEX: usize = 0;
/// Length of the bank code.
pub const BANK_CODE_LENGTH: usize = 4;
/// Offset of the country code.
pub const COUNTRY_CODE_INDEX: usize = BANK_CODE_INDEX + BANK_CODE_LENGTH;
/// Length of the country code.
pub const COUNTRY_CODE_LENGTH: usize = 2;
/// Offset of the location code.
pub const LOCATION_CODE_INDEX: usize = COUNTRY_CODE_INDEX + COUNTRY_CODE_LENGTH;
/// Length of the location code.
pub const LOCATION_CODE_LENGTH: usize = 2;
/// Offset of the branch code, present only in BIC11.
pub const BRANCH_CODE_INDEX: usize = LOCATION_CODE_INDEX + LOCATION_CODE_LENGTH;
/// Length of the branch code.
pub const BRANCH_CODE_LENGTH: usize = 3;

/// A fixed-offset segment of a BIC.
///
/// ```
/// use iban_core::bic::{BicSegment, COUNTRY_CODE_INDEX, COUNTRY_CODE_LENGTH};
///
/// let range = BicSegment::CountryCode.range();
/// assert_eq!(range, COUNTRY_CODE_INDEX..COUNTRY_CODE_INDEX + COUNTRY_CODE_LENGTH);
/// assert_eq!(&"DEUTDEFF500"[range], "DE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BicSegment {
    /// Institution code, four letters.
    BankCode,
    /// ISO 3166-1 alpha-2 country code.
    CountryCode,
    /// Location within the country.
    LocationCode,
    /// Branch within the institution; BIC11 only.
    BranchCode,
}

impl BicSegment {
    /// Byte range of the segment.
    pub fn range(&self) -> Range<usize> {
        let (index, length) = match self {
            Self::BankCode => (BANK_CODE_INDEX, BANK_CODE_LENGTH),
            Self::CountryCode => (COUNTRY_CODE_INDEX, COUNTRY_CODE_LENGTH),
            Self::LocationCode => (LOCATION_CODE_INDEX, LOCATION_CODE_LENGTH),
            Self::BranchCode => (BRANCH_CODE_INDEX, BRANCH_CODE_LENGTH),
        };
        index..index + length
    }

    /// The characters the segment may contain.
    pub fn class(&self) -> CharacterClass {
        match self {
            Self::BankCode | Self::CountryCode => CharacterClass::UpperAlpha,
            Self::LocationCode | Self::BranchCode => CharacterClass::MixedAlphanumeric,
        }
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCode => "bank_code",
            Self::CountryCode => "country_code",
            Self::LocationCode => "location_code",
            Self::BranchCode => "branch_code",
        }
    }
}

impl std::fmt::Display for BicSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Business Identifier Code.
///
/// Equality and hashing use the code string only.
#[derive(Debug, Clone)]
pub struct Bic {
    value: String,
    country: &'static CountryCode,
}

impl_validating_serde!(Bic);

impl Bic {
    /// Create a BIC from a string, validating its format.
    ///
    /// The input is taken as-is; lowercase letters are rejected.
    ///
    /// # Errors
    ///
    /// - [`BicError::MalformedLength`] if the code is not 8 or 11 characters.
    /// - [`BicError::Format`] naming the first segment with a bad character.
    /// - [`BicError::UnsupportedCountry`] if the country segment is not a
    ///   known country code.
    pub fn new(value: impl Into<String>) -> Result<Self, BicError> {
        let value = value.into();
        let country = Self::validate(&value)?;
        Ok(Self { value, country })
    }

    fn validate(s: &str) -> Result<&'static CountryCode, BicError> {
        let length = s.chars().count();
        if length != BIC8_LENGTH && length != BIC11_LENGTH {
            return Err(BicError::MalformedLength { length });
        }

        // Any non-ASCII character starts within the first `length` bytes,
        // so the segment checks below catch it before a slice is taken.
        check_segment(s, BicSegment::BankCode)?;
        check_segment(s, BicSegment::CountryCode)?;

        let code = &s[BicSegment::CountryCode.range()];
        let country = country::lookup(code).ok_or_else(|| BicError::UnsupportedCountry {
            country_code: code.to_string(),
        })?;

        check_segment(s, BicSegment::LocationCode)?;
        if length == BIC11_LENGTH {
            check_segment(s, BicSegment::BranchCode)?;
        }

        Ok(country)
    }

    /// The full code.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Four-letter bank (institution) code.
    pub fn bank_code(&self) -> &str {
        &self.value[BicSegment::BankCode.range()]
    }

    /// Two-letter country code.
    pub fn country_code(&self) -> &str {
        &self.value[BicSegment::CountryCode.range()]
    }

    /// Country table entry for the country code.
    pub fn country(&self) -> &'static CountryCode {
        self.country
    }

    /// Two-character location code.
    pub fn location_code(&self) -> &str {
        &self.value[BicSegment::LocationCode.range()]
    }

    /// Three-character branch code, if present.
    pub fn branch_code(&self) -> Option<&str> {
        self.value.get(BicSegment::BranchCode.range())
    }

    /// Whether this is an 11-character BIC.
    pub fn has_branch_code(&self) -> bool {
        self.value.len() == BIC11_LENGTH
    }
}

fn check_segment(s: &str, segment: BicSegment) -> Result<(), BicFormatViolation> {
    match find_violation(s, segment.range(), segment.class()) {
        Some((character, index)) => Err(BicFormatViolation::InvalidCharacter {
            segment,
            class: segment.class(),
            character,
            index,
        }),
        None => Ok(()),
    }
}

impl PartialEq for Bic {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Bic {}

impl Hash for Bic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Bic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for Bic {
    type Err = BicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Bic {
    type Error = BicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Bic {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
