//! # iban-cli — Command-Line Interface for iban-core
//!
//! Provides the `iban` binary.
//!
//! ## Subcommands
//!
//! - `iban validate`: Validate and decompose IBANs.
//! - `iban bic`: Validate and decompose BICs.
//! - `iban check-digit`: Compute check digits for a country and BBAN.
//! - `iban build`: Compose an IBAN from field values.
//! - `iban countries`: List supported countries and their BBAN layouts.
//!
//! Reports go to stdout as text or JSON; logs go to stderr. The exit code is
//! 0 when every input is valid and 1 otherwise.
//!
//! ```bash
//! iban validate TR330006100519786457841326
//! iban --format json bic DEUTDEFF500
//! iban --normalize validate "de89 3704 0044 0532 0130 00"
//! ```

pub mod bic;
pub mod build;
pub mod check_digit;
pub mod config;
pub mod countries;
pub mod output;
pub mod validate;
