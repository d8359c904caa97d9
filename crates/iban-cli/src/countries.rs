//! # Countries — List the IBAN registry.
//!
//! ```bash
//! iban countries          # countries with a BBAN layout
//! iban countries --all    # the whole ISO 3166-1 table
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use iban_core::{bban, country, BbanStructure, CountryCode, FieldRule};

use crate::config::Settings;
use crate::output::{self, Report};

/// Arguments for `iban countries`.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Include countries without an IBAN layout.
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Serialize)]
pub struct CountryReport {
    #[serde(flatten)]
    pub country: &'static CountryCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<&'static [FieldRule]>,
    #[serde(skip)]
    structure: Option<BbanStructure>,
}

impl CountryReport {
    pub fn new(country: &'static CountryCode) -> Self {
        let structure = bban::structure_for(country.alpha2());
        Self {
            country,
            iban_length: structure.map(|s| s.iban_length()),
            layout: structure.map(|s| s.rules()),
            structure,
        }
    }
}

impl Report for CountryReport {
    fn is_valid(&self) -> bool {
        true
    }

    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        match (&self.structure, self.iban_length) {
            (Some(structure), Some(length)) => writeln!(
                out,
                "{}  {:<40} {:>2}  {}",
                self.country.alpha2(),
                self.country.name(),
                length,
                structure
            ),
            _ => writeln!(out, "{}  {}", self.country.alpha2(), self.country.name()),
        }
    }
}

/// Reports for every listed country, in alpha-2 order.
pub fn country_reports(all: bool) -> Vec<CountryReport> {
    country::all()
        .iter()
        .filter(|c| all || bban::is_supported_country(c.alpha2()))
        .map(CountryReport::new)
        .collect()
}

/// Execute `iban countries`.
pub fn run_countries(args: &CountriesArgs, settings: &Settings) -> Result<u8> {
    let reports = country_reports(args.all);
    tracing::debug!(count = reports.len(), all = args.all, "listing countries");
    output::emit(&reports, settings.format)
}
