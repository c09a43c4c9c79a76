use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Read a checks file: a JSON array of CSS selector strings such as
/// `["h1", "a[href]"]`.
pub fn load_checks<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadChecks {
        path: path.to_path_buf(),
        source,
    })?;
    parse_checks(&text).map_err(|source| ConfigError::InvalidChecks {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_checks(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}
