//! # iban-core — IBAN and BIC Validation
//!
//! Validates and decomposes International Bank Account Numbers (ISO 13616)
//! and Business Identifier Codes (ISO 9362), and computes the IBAN mod-97
//! check digit.
//!
//! ## Components
//!
//! 1. **Country table** ([`country`]): ISO 3166-1 codes with their metadata.
//!
//! 2. **BBAN registry** ([`bban`]): one ordered field layout per supported
//!    country, fixed at compile time.
//!
//! 3. **Layout validator** ([`layout`]): walks a layout over a BBAN, checking
//!    each field's length and character class.
//!
//! 4. **Check digit engine** ([`check_digit`]): ISO 7064 MOD 97-10.
//!
//! 5. **Facades** ([`Iban`], [`Bic`]): immutable value objects that can only
//!    be built from a string that passed every check. [`IbanBuilder`] composes
//!    an IBAN from field values.
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global mutable state. Every function is a pure
//!   function of its inputs and the static tables, safe to call from any
//!   thread.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. Failures are typed errors.
//! - Input is never normalized: lowercase letters and spaces are rejected.
//!
//! ## Example
//!
//! ```
//! use iban_core::{FieldKind, Iban};
//!
//! let iban = Iban::new("TR330006100519786457841326").unwrap();
//! assert_eq!(iban.bank_code(), Some("00061"));
//! assert_eq!(iban.branch_code(), None);
//! assert_eq!(iban.field(FieldKind::AccountNumber), Some("00519786457841326"));
//! assert_eq!(iban.to_formatted_string(), "TR33 0006 1005 1978 6457 8413 26");
//! ```

#![deny(missing_docs)]

/// Implements `Serialize` as the plain string and routes `Deserialize`
/// through the type's `new()` constructor, so invalid values are rejected
/// at deserialization time.
macro_rules! impl_validating_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod bban;
pub mod bic;
pub mod builder;
pub mod check_digit;
pub mod country;
pub mod error;
pub mod iban;
pub mod layout;

// Re-export primary types for ergonomic imports.
pub use bban::{BbanStructure, CharacterClass, FieldKind, FieldRule};
pub use bic::{Bic, BicSegment};
pub use builder::IbanBuilder;
pub use country::CountryCode;
pub use error::{BicError, BicFormatViolation, IbanError, IbanFormatViolation};
pub use iban::Iban;
