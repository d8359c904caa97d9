//! # Validate — Check and decompose IBANs.
//!
//! ```bash
//! iban validate TR330006100519786457841326 DE89370400440532013000
//! iban --normalize validate "gb29 nwbk 6016 1331 9268 19"
//! iban --format json validate TR330006100519786457841326
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use iban_core::{CountryCode, FieldKind, Iban, IbanError};

use crate::config::Settings;
use crate::output::{self, write_field, Report};

/// Arguments for `iban validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// IBANs to validate.
    #[arg(required = true)]
    pub ibans: Vec<String>,
}

/// Outcome of validating one IBAN.
#[derive(Debug, Serialize)]
pub struct IbanReport {
    pub input: String,
    pub valid: bool,
    #[serde(flatten)]
    pub details: Option<IbanDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decomposition of a valid IBAN.
#[derive(Debug, Serialize)]
pub struct IbanDetails {
    pub iban: String,
    pub formatted: String,
    pub country: &'static CountryCode,
    pub check_digit: String,
    pub bban: String,
    pub fields: BTreeMap<FieldKind, String>,
}

impl IbanReport {
    pub fn new(input: impl Into<String>, result: Result<Iban, IbanError>) -> Self {
        let input = input.into();
        match result {
            Ok(iban) => Self {
                input,
                valid: true,
                details: Some(IbanDetails::from(&iban)),
                error: None,
            },
            Err(e) => Self {
                input,
                valid: false,
                details: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl From<&Iban> for IbanDetails {
    fn from(iban: &Iban) -> Self {
        Self {
            iban: iban.as_str().to_string(),
            formatted: iban.to_formatted_string(),
            country: iban.country(),
            check_digit: iban.check_digit().to_string(),
            bban: iban.bban().to_string(),
            fields: iban
                .fields()
                .into_iter()
                .map(|(kind, value)| (kind, value.to_string()))
                .collect(),
        }
    }
}

impl Report for IbanReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match (&self.details, &self.error) {
            (Some(details), _) => {
                writeln!(out, "{}: valid", self.input)?;
                write_field(out, "formatted", &details.formatted)?;
                write_field(
                    out,
                    "country",
                    format_args!("{} ({})", details.country.alpha2(), details.country.name()),
                )?;
                write_field(out, "check digit", &details.check_digit)?;
                write_field(out, "bban", &details.bban)?;
                // Layout order, not map order.
                if let Some(structure) = iban_core::bban::structure_for(details.country.alpha2()) {
                    for rule in structure.rules() {
                        if let Some(value) = details.fields.get(&rule.kind()) {
                            write_field(out, rule.kind().as_str(), value)?;
                        }
                    }
                }
            }
            (None, error) => {
                writeln!(out, "{}: invalid", self.input)?;
                write_field(out, "error", error.as_deref().unwrap_or("unknown"))?;
            }
        }
        Ok(())
    }
}

/// Execute `iban validate`.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<u8> {
    let reports: Vec<IbanReport> = args
        .ibans
        .iter()
        .map(|raw| {
            let input = settings.prepare(raw);
            let result = Iban::new(input.as_str());
            match &result {
                Ok(iban) => tracing::debug!(iban = %iban, country = iban.country_code(), "valid"),
                Err(e) => tracing::info!(input = %input, error = %e, "rejected"),
            }
            IbanReport::new(input, result)
        })
        .collect();

    output::emit(&reports, settings.format)
}
