//! # IBAN — International Bank Account Number (ISO 13616)
//!
//! Layout: `<country code: 2 letters><check digits: 2 digits><BBAN>`, where
//! the BBAN follows the country's layout in [`crate::bban`].
//!
//! ## Validation
//!
//! [`Iban::new`] runs these checks in order and stops at the first failure:
//!
//! 1. The string is not empty.
//! 2. Its length is between 4 and the longest supported IBAN.
//! 3. The first two characters are uppercase letters naming a country with a
//!    BBAN layout.
//! 4. Positions 2–3 are digits.
//! 5. The BBAN matches the country's layout field by field.
//! 6. The mod-97 checksum holds.
//!
//! No instance exists unless all six pass.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::bban::{self, BbanStructure, FieldKind, IBAN_PREFIX_LENGTH};
use crate::builder::IbanBuilder;
use crate::check_digit;
use crate::country::{self, CountryCode};
use crate::error::{IbanError, IbanFormatViolation};
use crate::layout;

/// Shortest string that can hold a country code and check digits.
pub const MIN_LENGTH: usize = IBAN_PREFIX_LENGTH;

const COUNTRY_CODE_LENGTH: usize = 2;

/// Characters per group in the display format.
const GROUP_SIZE: usize = 4;

/// A validated International Bank Account Number.
///
/// Equality and hashing use the IBAN string only.
#[derive(Debug, Clone)]
pub struct Iban {
    value: String,
    country: &'static CountryCode,
    structure: BbanStructure,
}

impl_validating_serde!(Iban);

impl Iban {
    /// Create an IBAN from a string, validating format and check digits.
    ///
    /// The input is taken as-is: it must be uppercase and contain no spaces.
    ///
    /// # Errors
    ///
    /// - [`IbanError::Format`] for structural problems, naming the violated
    ///   rule and, for bad characters, the field and offset.
    /// - [`IbanError::UnsupportedCountry`] if the country has no BBAN layout.
    /// - [`IbanError::InvalidCheckDigit`] if the checksum fails.
    pub fn new(value: impl Into<String>) -> Result<Self, IbanError> {
        let value = value.into();
        let (country, structure) = Self::validate(&value)?;
        Ok(Self {
            value,
            country,
            structure,
        })
    }

    /// Start composing an IBAN from field values.
    pub fn builder() -> IbanBuilder {
        IbanBuilder::new()
    }

    fn validate(s: &str) -> Result<(&'static CountryCode, BbanStructure), IbanError> {
        if s.is_empty() {
            return Err(IbanFormatViolation::Empty.into());
        }

        let length = s.chars().count();
        let max = bban::max_iban_length();
        if !(MIN_LENGTH..=max).contains(&length) {
            return Err(IbanFormatViolation::Length {
                actual: length,
                min: MIN_LENGTH,
                max,
            }
            .into());
        }

        // At least four characters means at least four bytes.
        let bytes = s.as_bytes();
        if !bytes[..COUNTRY_CODE_LENGTH]
            .iter()
            .all(u8::is_ascii_uppercase)
        {
            return Err(IbanFormatViolation::CountryCode {
                code: s.chars().take(COUNTRY_CODE_LENGTH).collect(),
            }
            .into());
        }

        let code = &s[..COUNTRY_CODE_LENGTH];
        let (country, structure) = country::lookup(code)
            .zip(bban::structure_for(code))
            .ok_or_else(|| IbanError::UnsupportedCountry {
                country_code: code.to_string(),
            })?;

        if !bytes[COUNTRY_CODE_LENGTH..IBAN_PREFIX_LENGTH]
            .iter()
            .all(u8::is_ascii_digit)
        {
            return Err(IbanFormatViolation::CheckDigit {
                check_digit: s.chars().skip(COUNTRY_CODE_LENGTH).take(2).collect(),
            }
            .into());
        }

        layout::validate_and_slice(&s[IBAN_PREFIX_LENGTH..], &structure)
            .map_err(|violation| violation.offset(IBAN_PREFIX_LENGTH))?;

        check_digit::validate(s)?;

        Ok((country, structure))
    }

    /// The IBAN string as supplied.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Two-letter country code.
    pub fn country_code(&self) -> &str {
        &self.value[..COUNTRY_CODE_LENGTH]
    }

    /// Country table entry for the country code.
    pub fn country(&self) -> &'static CountryCode {
        self.country
    }

    /// The two check digits.
    pub fn check_digit(&self) -> &str {
        &self.value[COUNTRY_CODE_LENGTH..IBAN_PREFIX_LENGTH]
    }

    /// Everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.value[IBAN_PREFIX_LENGTH..]
    }

    /// The country's BBAN layout.
    pub fn structure(&self) -> BbanStructure {
        self.structure
    }

    /// Every BBAN field, keyed by kind.
    pub fn fields(&self) -> BTreeMap<FieldKind, &str> {
        layout::validate_and_slice(self.bban(), &self.structure).unwrap_or_default()
    }

    /// One BBAN field, or `None` if the country's layout has no such field.
    pub fn field(&self, kind: FieldKind) -> Option<&str> {
        // Validated at construction, so only the requested slice is read.
        layout::slice_field(self.bban(), &self.structure, kind)
            .ok()
            .flatten()
    }

    /// The bank code, if the layout has one.
    pub fn bank_code(&self) -> Option<&str> {
        self.field(FieldKind::BankCode)
    }

    /// The branch code, if the layout has one.
    pub fn branch_code(&self) -> Option<&str> {
        self.field(FieldKind::BranchCode)
    }

    /// The account number prefix (CZ, SK).
    pub fn account_number_prefix(&self) -> Option<&str> {
        self.field(FieldKind::AccountNumberPrefix)
    }

    /// The account number. Every supported layout has one.
    pub fn account_number(&self) -> Option<&str> {
        self.field(FieldKind::AccountNumber)
    }

    /// The domestic check digit(s), if the layout has them.
    pub fn national_check_digit(&self) -> Option<&str> {
        self.field(FieldKind::NationalCheckDigit)
    }

    /// The account type (BG, BR).
    pub fn account_type(&self) -> Option<&str> {
        self.field(FieldKind::AccountType)
    }

    /// The account holder position (BR).
    pub fn owner_account_number(&self) -> Option<&str> {
        self.field(FieldKind::OwnerAccountNumber)
    }

    /// The holder identification number (IS).
    pub fn identification_number(&self) -> Option<&str> {
        self.field(FieldKind::IdentificationNumber)
    }

    /// The balance account number, if the layout has one.
    pub fn balance_account_number(&self) -> Option<&str> {
        self.field(FieldKind::BalanceAccountNumber)
    }

    /// Display form: groups of four characters separated by single spaces.
    ///
    /// This is output only; [`Iban::new`] does not accept it.
    pub fn to_formatted_string(&self) -> String {
        let mut formatted = String::with_capacity(self.value.len() + self.value.len() / GROUP_SIZE);
        for (i, c) in self.value.chars().enumerate() {
            if i > 0 && i % GROUP_SIZE == 0 {
                formatted.push(' ');
            }
            formatted.push(c);
        }
        formatted
    }
}

/// Validate an IBAN string without keeping the value.
pub fn validate(iban: &str) -> Result<(), IbanError> {
    Iban::validate(iban).map(|_| ())
}

/// Whether `iban` is a valid IBAN.
pub fn is_valid(iban: &str) -> bool {
    validate(iban).is_ok()
}

impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Iban {}

impl Hash for Iban {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::CharacterClass;
    use std::collections::HashSet;

    const TR: &str = "TR330006100519786457841326";

    #[test]
    fn accepts_turkish_iban() {
        let iban = Iban::new(TR).unwrap();
        assert_eq!(iban.country_code(), "TR");
        assert_eq!(iban.country().alpha3(), "TUR");
        assert_eq!(iban.check_digit(), "33");
        assert_eq!(iban.bban(), "0006100519786457841326");
        assert_eq!(iban.bank_code(), Some("00061"));
        assert_eq!(iban.account_number(), Some("00519786457841326"));
        assert_eq!(iban.structure().iban_length(), 26);
    }

    #[test]
    fn absent_fields_are_none() {
        let iban = Iban::new(TR).unwrap();
        assert_eq!(iban.branch_code(), None);
        assert_eq!(iban.account_number_prefix(), None);
        assert_eq!(iban.national_check_digit(), None);
        assert_eq!(iban.account_type(), None);
        assert_eq!(iban.owner_account_number(), None);
        assert_eq!(iban.identification_number(), None);
        assert_eq!(iban.balance_account_number(), None);
    }

    #[test]
    fn fields_decompose_in_full() {
        let iban = Iban::new("BR9700360305000010009795493P1").unwrap();
        let fields = iban.fields();
        assert_eq!(fields[&FieldKind::BankCode], "00360305");
        assert_eq!(fields[&FieldKind::BranchCode], "00001");
        assert_eq!(fields[&FieldKind::AccountNumber], "0009795493");
        assert_eq!(fields[&FieldKind::AccountType], "P");
        assert_eq!(fields[&FieldKind::OwnerAccountNumber], "1");
        assert_eq!(iban.owner_account_number(), Some("1"));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Iban::new("").unwrap_err(),
            IbanError::Format(IbanFormatViolation::Empty)
        );
    }

    #[test]
    fn rejects_too_short_and_too_long() {
        assert!(matches!(
            Iban::new("TR3").unwrap_err(),
            IbanError::Format(IbanFormatViolation::Length {
                actual: 3,
                min: 4,
                max: 31
            })
        ));
        let long = format!("{TR}{}", "0".repeat(10));
        assert!(matches!(
            Iban::new(long).unwrap_err(),
            IbanError::Format(IbanFormatViolation::Length { actual: 36, .. })
        ));
    }

    #[test]
    fn rejects_lowercase_country_code() {
        assert_eq!(
            Iban::new("tr330006100519786457841326").unwrap_err(),
            IbanError::Format(IbanFormatViolation::CountryCode { code: "tr".into() })
        );
    }

    #[test]
    fn rejects_unsupported_country() {
        // US is a known country without an IBAN layout; ZZ is not a country.
        for code in ["US", "ZZ"] {
            let input = format!("{code}330006100519786457841326");
            assert_eq!(
                Iban::new(input).unwrap_err(),
                IbanError::UnsupportedCountry {
                    country_code: code.into()
                }
            );
        }
    }

    #[test]
    fn rejects_non_numeric_check_digit() {
        assert_eq!(
            Iban::new("TR3X0006100519786457841326").unwrap_err(),
            IbanError::Format(IbanFormatViolation::CheckDigit {
                check_digit: "3X".into()
            })
        );
    }

    #[test]
    fn layout_violation_indexes_into_full_string() {
        let err = Iban::new("TR33000A100519786457841326").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(IbanFormatViolation::InvalidCharacter {
                field: FieldKind::BankCode,
                class: CharacterClass::Numeric,
                character: 'A',
                index: 7,
            })
        );
    }

    #[test]
    fn rejects_wrong_bban_length() {
        assert_eq!(
            Iban::new("TR33000610051978645784132").unwrap_err(),
            IbanError::Format(IbanFormatViolation::FieldTooShort {
                field: FieldKind::AccountNumber
            })
        );
        assert_eq!(
            Iban::new("TR3300061005197864578413261").unwrap_err(),
            IbanError::Format(IbanFormatViolation::BbanLength {
                expected: 22,
                actual: 23
            })
        );
    }

    #[test]
    fn rejects_bad_check_digit() {
        assert_eq!(
            Iban::new("TR320006100519786457841326").unwrap_err(),
            IbanError::InvalidCheckDigit {
                expected: "33".into(),
                actual: "32".into(),
            }
        );
    }

    #[test]
    fn formatted_string_groups_by_four() {
        let iban = Iban::new(TR).unwrap();
        assert_eq!(
            iban.to_formatted_string(),
            "TR33 0006 1005 1978 6457 8413 26"
        );
        let de = Iban::new("DE89370400440532013000").unwrap();
        assert_eq!(de.to_formatted_string(), "DE89 3704 0044 0532 0130 00");
    }

    #[test]
    fn formatted_string_has_no_trailing_space_on_exact_groups() {
        // 16 characters: four full groups.
        let be = Iban::new("BE68539007547034").unwrap();
        assert_eq!(be.to_formatted_string(), "BE68 5390 0754 7034");
    }

    #[test]
    fn formatted_input_is_rejected() {
        assert!(Iban::new("TR33 0006 1005 1978 6457 8413 26").is_err());
    }

    #[test]
    fn equality_and_hash_use_the_string() {
        let a = Iban::new(TR).unwrap();
        let b: Iban = TR.parse().unwrap();
        let c = Iban::new("DE89370400440532013000").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let set: HashSet<Iban> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn free_functions_agree_with_constructor() {
        assert!(is_valid(TR));
        assert!(!is_valid("TR340006100519786457841326"));
        assert!(validate(TR).is_ok());
    }

    #[test]
    fn serde_roundtrip() {
        let iban = Iban::new(TR).unwrap();
        let json = serde_json::to_string(&iban).unwrap();
        assert_eq!(json, format!("\"{TR}\""));
        let parsed: Iban = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, iban);
    }

    #[test]
    fn deserialize_rejects_invalid_iban() {
        assert!(serde_json::from_str::<Iban>("\"TR340006100519786457841326\"").is_err());
    }

    #[test]
    fn display_and_try_from() {
        let iban = Iban::try_from(TR.to_string()).unwrap();
        assert_eq!(iban.to_string(), TR);
        assert_eq!(iban.as_ref(), TR);
    }
}
