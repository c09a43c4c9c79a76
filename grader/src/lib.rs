pub mod acquire;
pub mod checker;
pub mod checks;
pub mod config;
pub mod document;
pub mod error;
pub mod report;

#[cfg(test)]
pub mod tests;

use std::io::Write;

use log::info;

pub use crate::acquire::{http_client, load_html_file, load_html_url};
pub use crate::checker::{check_html, check_html_file, Report, SelectorPolicy};
pub use crate::checks::{load_checks, parse_checks};
pub use crate::config::{Cli, Config, DocumentSource, CHECKSFILE_DEFAULT};
pub use crate::document::Document;
pub use crate::error::{AcquisitionError, ConfigError, GraderError, SelectorError};
pub use crate::report::{to_json, write_report};

/// Acquire the document, check it and write the report to `sink`.
///
/// Nothing is written to `sink` unless every step succeeds.
pub async fn run<W: Write>(config: &Config, sink: W) -> Result<Report, GraderError> {
    let html = config.source.acquire().await?;

    let document = Document::parse(&html);
    info!("Checking {} selector(s)", config.checks.len());
    let report = check_html(&document, &config.checks, config.policy)?;

    write_report(&report, sink)?;
    Ok(report)
}
