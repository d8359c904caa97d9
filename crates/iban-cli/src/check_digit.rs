//! # Check Digit — Compute IBAN check digits for a BBAN.
//!
//! The BBAN must match the country's layout; the command prints the check
//! digits and the complete IBAN.
//!
//! ```bash
//! iban check-digit TR 0006100519786457841326
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use iban_core::{bban, check_digit, layout, IbanError};

use crate::config::Settings;
use crate::output::{self, write_field, Report};

/// Arguments for `iban check-digit`.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// Two-letter country code.
    pub country: String,

    /// The BBAN, without country code or check digits.
    pub bban: String,
}

#[derive(Debug, Serialize)]
pub struct CheckDigitReport {
    pub country_code: String,
    pub bban: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Layout-validate the BBAN, then compute its check digits.
pub fn compute(country_code: &str, bban: &str) -> Result<String, IbanError> {
    let structure =
        bban::structure_for(country_code).ok_or_else(|| IbanError::UnsupportedCountry {
            country_code: country_code.to_string(),
        })?;
    layout::validate_and_slice(bban, &structure)?;
    check_digit::compute(country_code, bban)
}

impl CheckDigitReport {
    pub fn new(country_code: String, bban: String) -> Self {
        match compute(&country_code, &bban) {
            Ok(digits) => Self {
                iban: Some(format!("{country_code}{digits}{bban}")),
                check_digit: Some(digits),
                valid: true,
                error: None,
                country_code,
                bban,
            },
            Err(e) => Self {
                iban: None,
                check_digit: None,
                valid: false,
                error: Some(e.to_string()),
                country_code,
                bban,
            },
        }
    }
}

impl Report for CheckDigitReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} {}:", self.country_code, self.bban)?;
        match (&self.check_digit, &self.iban) {
            (Some(digits), Some(iban)) => {
                write_field(out, "check digit", digits)?;
                write_field(out, "iban", iban)
            }
            _ => write_field(out, "error", self.error.as_deref().unwrap_or("unknown")),
        }
    }
}

/// Execute `iban check-digit`.
pub fn run_check_digit(args: &CheckDigitArgs, settings: &Settings) -> Result<u8> {
    let report = CheckDigitReport::new(
        settings.prepare(&args.country),
        settings.prepare(&args.bban),
    );
    let country = &report.country_code;
    match &report.check_digit {
        Some(digits) => tracing::debug!(%country, check_digit = %digits, "computed"),
        None => tracing::info!(%country, bban = %report.bban, "rejected"),
    }
    output::emit(&[report], settings.format)
}
