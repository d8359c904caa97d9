//! # Build — Compose an IBAN from field values.
//!
//! Every field the country's layout requires must be supplied at its exact
//! length. Fields the layout does not use are ignored.
//!
//! ```bash
//! iban build --country TR --bank-code 00061 --account-number 00519786457841326
//! iban build --country GB --bank-code NWBK --branch-code 601613 --account-number 31926819
//! ```

use anyhow::Result;
use clap::Args;

use iban_core::{FieldKind, Iban, IbanBuilder};

use crate::config::Settings;
use crate::output;
use crate::validate::IbanReport;

/// Arguments for `iban build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Two-letter country code.
    #[arg(long)]
    pub country: String,

    /// Bank identifier.
    #[arg(long)]
    pub bank_code: Option<String>,

    /// Branch identifier within the bank.
    #[arg(long)]
    pub branch_code: Option<String>,

    /// Leading part of a split account number (CZ, SK).
    #[arg(long)]
    pub account_number_prefix: Option<String>,

    /// Account number.
    #[arg(long)]
    pub account_number: Option<String>,

    /// Domestic check digit(s).
    #[arg(long)]
    pub national_check_digit: Option<String>,

    /// Account type (BG, BR).
    #[arg(long)]
    pub account_type: Option<String>,

    /// Account holder position (BR).
    #[arg(long)]
    pub owner_account_number: Option<String>,

    /// Holder identification number, e.g. the Icelandic kennitala.
    #[arg(long)]
    pub identification_number: Option<String>,

    /// Balance account number.
    #[arg(long)]
    pub balance_account_number: Option<String>,
}

impl BuildArgs {
    /// The supplied field values, paired with their kinds.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        [
            (FieldKind::BankCode, &self.bank_code),
            (FieldKind::BranchCode, &self.branch_code),
            (FieldKind::AccountNumberPrefix, &self.account_number_prefix),
            (FieldKind::AccountNumber, &self.account_number),
            (FieldKind::NationalCheckDigit, &self.national_check_digit),
            (FieldKind::AccountType, &self.account_type),
            (FieldKind::OwnerAccountNumber, &self.owner_account_number),
            (FieldKind::IdentificationNumber, &self.identification_number),
            (
                FieldKind::BalanceAccountNumber,
                &self.balance_account_number,
            ),
        ]
        .into_iter()
        .filter_map(|(kind, value)| value.as_deref().map(|v| (kind, v)))
    }

    /// The supplied values as `--flag=value` pairs. Used as the report input
    /// when composition fails.
    pub fn describe(&self, settings: &Settings) -> String {
        let mut flags = vec![format!("--country={}", settings.prepare(&self.country))];
        for (kind, value) in self.fields() {
            let flag = kind.as_str().replace('_', "-");
            flags.push(format!("--{flag}={}", settings.prepare(value)));
        }
        flags.join(" ")
    }

    fn builder(&self, settings: &Settings) -> IbanBuilder {
        self.fields().fold(
            Iban::builder().country_code(settings.prepare(&self.country)),
            |builder, (kind, value)| builder.field(kind, settings.prepare(value)),
        )
    }

    /// Compose the IBAN and wrap the outcome in a report.
    pub fn report(&self, settings: &Settings) -> IbanReport {
        let result = self.builder(settings).build();
        let input = match &result {
            Ok(iban) => {
                tracing::debug!(iban = %iban, "composed");
                iban.as_str().to_string()
            }
            Err(e) => {
                let input = self.describe(settings);
                tracing::info!(%input, error = %e, "composition failed");
                input
            }
        };
        IbanReport::new(input, result)
    }
}

/// Execute `iban build`.
pub fn run_build(args: &BuildArgs, settings: &Settings) -> Result<u8> {
    output::emit(&[args.report(settings)], settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Report;
    use iban_core::{IbanError, IbanFormatViolation};

    fn turkey() -> BuildArgs {
        BuildArgs {
            country: "TR".into(),
            bank_code: Some("00061".into()),
            account_number: Some("00519786457841326".into()),
            ..BuildArgs::default()
        }
    }

    #[test]
    fn fields_lists_supplied_values_only() {
        let fields: Vec<_> = turkey().fields().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(
            fields,
            vec![
                (FieldKind::BankCode, "00061".to_string()),
                (FieldKind::AccountNumber, "00519786457841326".to_string()),
            ]
        );
    }

    #[test]
    fn builds_turkish_iban() {
        let iban = turkey().builder(&Settings::default()).build().unwrap();
        assert_eq!(iban.as_str(), "TR330006100519786457841326");
    }

    #[test]
    fn normalization_applies_to_every_value() {
        let args = BuildArgs {
            country: "gb".into(),
            bank_code: Some("nwbk".into()),
            branch_code: Some("6016 13".into()),
            account_number: Some("31926819".into()),
            ..BuildArgs::default()
        };
        let settings = Settings {
            normalize: true,
            ..Settings::default()
        };
        let iban = args.builder(&settings).build().unwrap();
        assert_eq!(iban.as_str(), "GB29NWBK60161331926819");
    }

    #[test]
    fn missing_field_is_reported() {
        let args = BuildArgs {
            account_number: None,
            ..turkey()
        };
        let result = args.builder(&Settings::default()).build();
        assert_eq!(
            result.clone().unwrap_err(),
            IbanError::Format(IbanFormatViolation::MissingField {
                field: FieldKind::AccountNumber
            })
        );
        assert!(!IbanReport::new("TR", result).is_valid());
    }

    #[test]
    fn describe_echoes_supplied_flags() {
        assert_eq!(
            turkey().describe(&Settings::default()),
            "--country=TR --bank-code=00061 --account-number=00519786457841326"
        );
    }

    #[test]
    fn failed_report_echoes_flags() {
        let args = BuildArgs {
            bank_code: Some("0006".into()),
            ..turkey()
        };
        let report = args.report(&Settings::default());
        assert!(!report.is_valid());
        assert_eq!(
            report.input,
            "--country=TR --bank-code=0006 --account-number=00519786457841326"
        );
        assert!(report.error.unwrap().contains("bank_code must be 5"));
    }

    #[test]
    fn successful_report_shows_the_iban() {
        let report = turkey().report(&Settings::default());
        assert!(report.is_valid());
        assert_eq!(report.input, "TR330006100519786457841326");
    }

    #[test]
    fn every_flag_has_help() {
        let command = BuildArgs::augment_args(clap::Command::new("build"));
        let args: Vec<_> = command.get_arguments().collect();
        assert_eq!(args.len(), 10);
        for arg in args {
            assert!(arg.get_help().is_some(), "--{} has no help", arg.get_id());
        }
    }
}
