use std::path::PathBuf;

use thiserror::Error;

/// Problems with the command line or the checks file. Detected before any
/// document is acquired.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingChecksFile(PathBuf),

    #[error("Either file or url required. Exiting.")]
    MissingSource,

    #[error("Only one of file or url may be given. Exiting.")]
    ConflictingSources,

    #[error("Failed to read checks file {}", path.display())]
    ReadChecks {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Checks file {} is not a JSON array of selector strings", path.display())]
    InvalidChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Failed to read HTML file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("error accessing url {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Invalid selector {selector:?}: {reason}")]
    Invalid { selector: String, reason: String },
}

#[derive(Debug, Error)]
pub enum GraderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("Failed to write report")]
    Output(#[from] std::io::Error),
}

impl GraderError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GraderError::Config(_) => 1,
            _ => 2,
        }
    }
}
