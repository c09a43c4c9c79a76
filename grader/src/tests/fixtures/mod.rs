use std::fs;
use std::path::{Path, PathBuf};

/// Path of a fixture file by its full name
pub fn fixture_path(file_name: &str) -> PathBuf {
    Path::new("src/tests/fixtures").join(file_name)
}

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = fixture_path(&format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}
