//! # Report Output
//!
//! Every subcommand produces one report per input and hands the batch to
//! [`emit`]. Text reports are written block by block; JSON output is a single
//! array so the whole run parses as one document.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;

/// Label column width in text output.
pub const LABEL_WIDTH: usize = 16;

/// The result of processing one input.
pub trait Report: Serialize {
    /// Whether the input was accepted. Any rejected input makes the run exit 1.
    fn is_valid(&self) -> bool;

    /// Write the human-readable form.
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Write `reports` to stdout and return the process exit code.
pub fn emit<R: Report>(reports: &[R], format: OutputFormat) -> Result<u8> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, reports, format)?;
    out.flush()?;
    Ok(exit_code(reports))
}

/// Render `reports` in the requested format.
pub fn write_reports<R: Report>(
    out: &mut dyn Write,
    reports: &[R],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                report.write_text(out)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// 0 if every report is valid, 1 otherwise.
pub fn exit_code<R: Report>(reports: &[R]) -> u8 {
    u8::from(!reports.iter().all(Report::is_valid))
}

/// Write an indented `label: value` line.
pub fn write_field(
    out: &mut dyn Write,
    label: &str,
    value: impl std::fmt::Display,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:<width$} {value}",
        format!("{label}:"),
        width = LABEL_WIDTH
    )
}
