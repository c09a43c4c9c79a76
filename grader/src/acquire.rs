use std::path::Path;

use log::{error, info, warn};
use reqwest::Client;

use crate::config::DocumentSource;
use crate::error::AcquisitionError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for URL sources: default redirect policy, no timeout.
pub fn http_client() -> Result<Client, AcquisitionError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(AcquisitionError::Client)
}

pub async fn load_html_file<P: AsRef<Path>>(path: P) -> Result<String, AcquisitionError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| AcquisitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fetch the page with a single GET. Error statuses still yield their body.
pub async fn load_html_url(client: &Client, url: &str) -> Result<String, AcquisitionError> {
    let request = client
        .get(url)
        .build()
        .map_err(|source| AcquisitionError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            error!("error accessing url {}: {}", url, e);
            return Err(AcquisitionError::Http {
                url: url.to_string(),
                source: e,
            });
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("{} responded with {}", url, status);
    }

    match response.text().await {
        Ok(body) => {
            info!("Fetched {} bytes from {} ({})", body.len(), url, status);
            Ok(body)
        }
        Err(e) => {
            error!("error accessing url {}: {} (status {})", url, e, status);
            Err(AcquisitionError::Http {
                url: url.to_string(),
                source: e,
            })
        }
    }
}

impl DocumentSource {
    pub async fn acquire(&self) -> Result<String, AcquisitionError> {
        match self {
            DocumentSource::File(path) => {
                info!("Loading HTML from file {}", path.display());
                load_html_file(path).await
            }
            DocumentSource::Url(url) => {
                info!("Navigating to {}...", url);
                let client = http_client()?;
                load_html_url(&client, url).await
            }
        }
    }
}
