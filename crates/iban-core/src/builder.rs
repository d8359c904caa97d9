//! # IbanBuilder — Compose an IBAN from Field Values
//!
//! Assembles the BBAN in the country's layout order, computes the check
//! digits and validates the result. Every value must be supplied explicitly
//! and at its exact length; nothing is padded or generated.

use std::collections::BTreeMap;

use crate::bban::{self, FieldKind, IBAN_PREFIX_LENGTH};
use crate::check_digit;
use crate::country;
use crate::error::{IbanError, IbanFormatViolation};
use crate::iban::Iban;
use crate::layout;

/// Builder for [`Iban`].
///
/// ```
/// use iban_core::Iban;
///
/// let iban = Iban::builder()
///     .country_code("TR")
///     .bank_code("00061")
///     .account_number("00519786457841326")
///     .build()
///     .unwrap();
/// assert_eq!(iban.as_str(), "TR330006100519786457841326");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IbanBuilder {
    country_code: Option<String>,
    fields: BTreeMap<FieldKind, String>,
}

impl IbanBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the two-letter country code. It selects the BBAN layout.
    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    /// Set the value of any field kind.
    ///
    /// Values for kinds the country's layout does not use are ignored.
    pub fn field(mut self, kind: FieldKind, value: impl Into<String>) -> Self {
        self.fields.insert(kind, value.into());
        self
    }

    /// Set the bank code.
    pub fn bank_code(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::BankCode, value)
    }

    /// Set the branch code.
    pub fn branch_code(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::BranchCode, value)
    }

    /// Set the account number prefix.
    pub fn account_number_prefix(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::AccountNumberPrefix, value)
    }

    /// Set the account number.
    pub fn account_number(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::AccountNumber, value)
    }

    /// Set the national check digit(s).
    pub fn national_check_digit(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::NationalCheckDigit, value)
    }

    /// Set the account type.
    pub fn account_type(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::AccountType, value)
    }

    /// Set the account holder position.
    pub fn owner_account_number(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::OwnerAccountNumber, value)
    }

    /// Set the holder identification number.
    pub fn identification_number(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::IdentificationNumber, value)
    }

    /// Set the balance account number.
    pub fn balance_account_number(self, value: impl Into<String>) -> Self {
        self.field(FieldKind::BalanceAccountNumber, value)
    }

    /// Assemble, checksum and validate the IBAN.
    ///
    /// # Errors
    ///
    /// - [`IbanFormatViolation::MissingCountryCode`] if no country code was set.
    /// - [`IbanError::UnsupportedCountry`] if the country has no BBAN layout.
    /// - [`IbanFormatViolation::MissingField`] if a field the layout requires
    ///   has no value.
    /// - [`IbanFormatViolation::FieldLength`] if a value has the wrong length.
    /// - [`IbanFormatViolation::InvalidCharacter`] if a value holds characters
    ///   outside its field's class.
    pub fn build(&self) -> Result<Iban, IbanError> {
        let code = self
            .country_code
            .as_deref()
            .ok_or(IbanFormatViolation::MissingCountryCode)?;
        let structure = country::lookup(code)
            .and(bban::structure_for(code))
            .ok_or_else(|| IbanError::UnsupportedCountry {
                country_code: code.to_string(),
            })?;

        let mut bban = String::with_capacity(structure.bban_length());
        for rule in structure.rules() {
            let value = self
                .fields
                .get(&rule.kind())
                .ok_or(IbanFormatViolation::MissingField { field: rule.kind() })?;
            let length = value.chars().count();
            if length != rule.length() {
                return Err(IbanFormatViolation::FieldLength {
                    field: rule.kind(),
                    expected: rule.length(),
                    actual: length,
                }
                .into());
            }
            bban.push_str(value);
        }

        layout::validate_and_slice(&bban, &structure)
            .map_err(|violation| violation.offset(IBAN_PREFIX_LENGTH))?;

        let check_digit = check_digit::compute(code, &bban)?;
        Iban::new(format!("{code}{check_digit}{bban}"))
    }
}
