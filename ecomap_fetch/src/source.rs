// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a catalog comes from: an HTTP endpoint or a local file.

use std::path::PathBuf;
use std::time::Duration;

use ecomap_catalog::{RawProjectsResponse, ResponseError};

/// The NEAR catalog endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.nearcatalog.xyz/projects";

/// Upper bound on a catalog body.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Errors produced while fetching a catalog.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("catalog request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<ureq::Error>,
    },
    /// The server answered with a non-success status.
    #[error("catalog request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// A local catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The body was not a catalog response.
    #[error(transparent)]
    Response(#[from] ResponseError),
    /// The background fetch worker could not be started.
    #[error("failed to start the catalog fetch worker: {0}")]
    Spawn(#[source] std::io::Error),
    /// The background fetch ended without delivering a result.
    #[error("catalog fetch worker stopped before delivering a result")]
    Disconnected,
}

/// Something that can produce one catalog response.
///
/// Implementations perform blocking IO; [`crate::Loader`] moves them onto a
/// worker thread so callers never block on them directly.
pub trait CatalogSource {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Fetch and decode the catalog.
    fn fetch(&self) -> Result<RawProjectsResponse, FetchError>;
}

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    /// A source for `url` with a 30 second overall timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    /// A source for `url` with a custom overall timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            url: url.into(),
            agent,
        }
    }

    /// The requested URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<RawProjectsResponse, FetchError> {
        let mut response = match self
            .agent
            .get(&self.url)
            .header("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(FetchError::Status {
                    url: self.url.clone(),
                    status,
                });
            }
            Err(source) => {
                return Err(FetchError::Transport {
                    url: self.url.clone(),
                    source: Box::new(source),
                });
            }
        };

        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source: Box::new(source),
            })?;
        tracing::debug!(url = %self.url, bytes = body.len(), "catalog body received");

        Ok(RawProjectsResponse::from_json_slice(&body)?)
    }
}

/// Reads the catalog from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<RawProjectsResponse, FetchError> {
        let body = std::fs::read(&self.path).map_err(|source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(RawProjectsResponse::from_json_slice(&body)?)
    }
}

/// Pick a source for a user-supplied location: `http(s)://` URLs go over the
/// network, anything else is treated as a file path.
#[must_use]
pub fn source_for(location: &str) -> Box<dyn CatalogSource + Send> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<RawProjectsResponse, FetchError> {
        (**self).fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"profile": {"name": "A"}}]"#).unwrap();

        let raw = FileSource::new(&path).fetch().unwrap();
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FileSource::new("/no/such/catalog.json").fetch().unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn invalid_json_is_a_response_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "<html>oops</html>").unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Response(_)));
    }

    #[test]
    fn locations_pick_sources() {
        assert_eq!(
            source_for("https://example.com/projects").describe(),
            "https://example.com/projects"
        );
        assert_eq!(source_for("data/catalog.json").describe(), "data/catalog.json");
    }
}
