use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::checker::SelectorPolicy;
use crate::checks::load_checks;
use crate::error::ConfigError;

pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Grade an HTML page for the presence of CSS selectors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to checks.json
    #[arg(short, long, default_value = CHECKSFILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to index.html
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// URL path to index.html
    #[arg(short, long)]
    pub url: Option<String>,

    /// Fail on selectors that do not parse instead of reporting them as absent
    #[arg(long)]
    pub strict: bool,
}

/// Where the HTML comes from. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Selectors in sorted order.
    pub checks: Vec<String>,
    pub source: DocumentSource,
    pub policy: SelectorPolicy,
}

impl Config {
    /// Validate the command line and load the checks file. Nothing is fetched yet.
    pub fn from_cli(cli: Cli) -> Result<Config, ConfigError> {
        if !cli.checks.exists() {
            return Err(ConfigError::MissingChecksFile(cli.checks));
        }

        // an empty value counts as not given
        let file = cli.file.filter(|f| !f.as_os_str().is_empty());
        let url = cli.url.filter(|u| !u.is_empty());

        let source = match (file, url) {
            (Some(file), None) => DocumentSource::File(file),
            (None, Some(url)) => DocumentSource::Url(url),
            (None, None) => return Err(ConfigError::MissingSource),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
        };

        let mut checks = load_checks(&cli.checks)?;
        checks.sort();

        let policy = if cli.strict {
            SelectorPolicy::Strict
        } else {
            SelectorPolicy::Lenient
        };

        Ok(Config {
            checks,
            source,
            policy,
        })
    }
}
