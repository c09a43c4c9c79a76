use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub mod fixtures;

/// Write `contents` to `name` inside `dir`, returning the full path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
