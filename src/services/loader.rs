//! Retrieving and parsing the dashboard dataset.

use crate::models::Dataset;
use async_trait::async_trait;
use log::info;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("malformed dashboard data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Somewhere the dataset bytes can be fetched from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let http_error = |source| LoadError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self.client.get(&self.url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status,
            });
        }
        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.describe(),
                source,
            })
    }
}

/// `http://` and `https://` locations are fetched over the network,
/// anything else is read from disk.
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Fetch and parse the dataset. No retry and no timeout beyond the
/// transport's own.
pub async fn fetch_dataset(source: &dyn DatasetSource) -> Result<Dataset, LoadError> {
    info!("Fetching dashboard data from {}", source.describe());
    let bytes = source.fetch().await?;
    let dataset = Dataset::from_slice(&bytes)?;
    info!(
        "Loaded {} issuance, {} retirement and {} transaction records",
        dataset.issuances.len(),
        dataset.retirements.len(),
        dataset.transactions.len()
    );
    Ok(dataset)
}
