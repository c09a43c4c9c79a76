use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, log_enabled, warn, Level};
use serde::Serialize;

use crate::acquire::load_html_file;
use crate::checks::load_checks;
use crate::document::Document;
use crate::error::{GraderError, SelectorError};

/// What to do with a selector that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPolicy {
    /// Report it as absent.
    #[default]
    Lenient,
    /// Abort the whole check.
    Strict,
}

/// Selector to presence, keyed in sorted selector order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report(BTreeMap<String, bool>);

impl Report {
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn insert(&mut self, selector: &str, present: bool) {
        self.0.insert(selector.to_string(), present);
    }
}

/// Check every selector against the document. Duplicate selectors collapse
/// into one entry.
pub fn check_html(
    document: &Document,
    checks: &[String],
    policy: SelectorPolicy,
) -> Result<Report, SelectorError> {
    let mut report = Report::default();

    for check in checks {
        let present = match document.matches(check) {
            Ok(found) => {
                if log_enabled!(Level::Debug) {
                    let count = document.count(check).unwrap_or_default();
                    debug!("{} matched {} element(s)", check, count);
                }
                found
            }
            Err(e) => match policy {
                SelectorPolicy::Strict => return Err(e),
                SelectorPolicy::Lenient => {
                    warn!("{}; reporting it as absent", e);
                    false
                }
            },
        };
        report.insert(check, present);
    }

    Ok(report)
}

/// Load an HTML file and a checks file and grade the one against the other.
pub async fn check_html_file<P, Q>(html_path: P, checks_path: Q) -> Result<Report, GraderError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut checks = load_checks(checks_path)?;
    checks.sort();

    let html = load_html_file(html_path).await?;
    let document = Document::parse(&html);
    Ok(check_html(&document, &checks, SelectorPolicy::Lenient)?)
}
