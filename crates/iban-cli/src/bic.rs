//! # BIC — Check and decompose Business Identifier Codes.
//!
//! ```bash
//! iban bic DEUTDEFF DEUTDEFF500
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use iban_core::{Bic, BicError, CountryCode};

use crate::config::Settings;
use crate::output::{self, write_field, Report};

/// Arguments for `iban bic`.
#[derive(Args, Debug)]
pub struct BicArgs {
    /// BICs to validate.
    #[arg(required = true)]
    pub bics: Vec<String>,
}

/// Outcome of validating one BIC.
#[derive(Debug, Serialize)]
pub struct BicReport {
    pub input: String,
    pub valid: bool,
    #[serde(flatten)]
    pub details: Option<BicDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BicDetails {
    pub bic: String,
    pub bank_code: String,
    pub country: &'static CountryCode,
    pub location_code: String,
    pub branch_code: Option<String>,
}

impl BicReport {
    pub fn new(input: impl Into<String>, result: Result<Bic, BicError>) -> Self {
        let input = input.into();
        match result {
            Ok(bic) => Self {
                input,
                valid: true,
                details: Some(BicDetails {
                    bic: bic.as_str().to_string(),
                    bank_code: bic.bank_code().to_string(),
                    country: bic.country(),
                    location_code: bic.location_code().to_string(),
                    branch_code: bic.branch_code().map(str::to_string),
                }),
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

impl Report for BicReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(details) = &self.details else {
            writeln!(out, "{}: invalid", self.input)?;
            return write_field(out, "error", self.error.as_deref().unwrap_or("unknown"));
        };
        writeln!(out, "{}: valid", self.input)?;
        write_field(out, "bank code", &details.bank_code)?;
        write_field(
            out,
            "country",
            format_args!("{} ({})", details.country.alpha2(), details.country.name()),
        )?;
        write_field(out, "location code", &details.location_code)?;
        let branch = details.branch_code.as_deref().unwrap_or("-");
        write_field(out, "branch code", branch)
    }
}

/// Execute `iban bic`.
pub fn run_bic(args: &BicArgs, settings: &Settings) -> Result<u8> {
    let reports: Vec<BicReport> = args
        .bics
        .iter()
        .map(|raw| {
            let input = settings.prepare(raw);
            let result = Bic::new(input.as_str());
            if let Err(e) = &result {
                tracing::info!(input = %input, error = %e, "rejected");
            }
            BicReport::new(input, result)
        })
        .collect();

    output::emit(&reports, settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::output::write_reports;

    fn render(report: BicReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_reports(&mut buf, &[report], format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bic8_has_no_branch() {
        let report = BicReport::new("DEUTDEFF", Bic::new("DEUTDEFF"));
        let text = render(report, OutputFormat::Text);
        assert!(text.starts_with("DEUTDEFF: valid\n"));
        assert!(text.contains("DE (Germany)"));
        let branch = text.lines().find(|l| l.starts_with("  branch code:"));
        assert!(branch.unwrap().ends_with(" -"));
    }

    #[test]
    fn bic11_json() {
        let report = BicReport::new("DEUTDEFF500", Bic::new("DEUTDEFF500"));
        let text = render(report, OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["bank_code"], "DEUT");
        assert_eq!(json[0]["location_code"], "FF");
        assert_eq!(json[0]["branch_code"], "500");
        assert_eq!(json[0]["country"]["alpha3"], "DEU");
    }

    #[test]
    fn invalid_bic_reports_error() {
        let report = BicReport::new("DEUT", Bic::new("DEUT"));
        assert!(!report.is_valid());
        let text = render(report, OutputFormat::Text);
        assert!(text.contains("8 or 11"));
    }
}
