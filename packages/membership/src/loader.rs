//! Native lookup table loader.
//!
//! Fetches the lookup file once, from disk or over HTTP, and folds the
//! outcome into a [`TableState`]. There is no retry and no refresh: a failed
//! load stays failed for the life of the process.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Client;
use url::Url;

use crate::error::{LoadError, Result};
use crate::state::TableState;
use crate::types::LookupTable;

/// Where the lookup file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Url(Url),
    File(PathBuf),
}

impl TableSource {
    /// Resolve a data path against the base URL of a deployed interface.
    ///
    /// `relative_to("https://members.example.org/check/", "data.json")`
    /// points at `https://members.example.org/check/data.json`.
    pub fn relative_to(base: &str, path: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(TableSource::Url(base.join(path)?))
    }
}

impl FromStr for TableSource {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LoadError::InvalidLocation("empty data location".into()));
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(TableSource::Url(Url::parse(s)?))
        } else if s.starts_with("file:") {
            let url = Url::parse(s)?;
            let path = url
                .to_file_path()
                .map_err(|_| LoadError::InvalidLocation(format!("not a local file: {}", s)))?;
            Ok(TableSource::File(path))
        } else {
            Ok(TableSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Url(url) => write!(f, "{}", url),
            TableSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One-shot loader for a [`TableSource`].
#[derive(Clone)]
pub struct TableLoader {
    client: Client,
    source: TableSource,
}

impl TableLoader {
    pub fn new(source: TableSource) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, user agent).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Retrieve and parse the lookup file.
    pub async fn fetch(&self) -> Result<LookupTable> {
        match &self.source {
            TableSource::Url(url) => {
                let resp = self.client.get(url.clone()).send().await?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Http {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = resp.text().await?;
                tracing::debug!(bytes = body.len(), "Fetched lookup file");
                LookupTable::from_json(&body)
            }
            TableSource::File(path) => {
                let contents =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| LoadError::Io {
                            path: path.clone(),
                            source,
                        })?;
                tracing::debug!(bytes = contents.len(), "Read lookup file");
                LookupTable::from_json(&contents)
            }
        }
    }

    /// Fetch once and fold the outcome into a state. Never fails.
    pub async fn load(&self) -> TableState {
        tracing::info!(source = %self.source, "Loading lookup table");
        TableState::from_load(self.fetch().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_source() {
        let source: TableSource = "https://members.example.org/data.json".parse().unwrap();
        assert_eq!(
            source,
            TableSource::Url(Url::parse("https://members.example.org/data.json").unwrap())
        );
    }

    #[test]
    fn test_parse_file_source() {
        let source: TableSource = " public/data.json ".parse().unwrap();
        assert_eq!(source, TableSource::File(PathBuf::from("public/data.json")));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url_source() {
        let source: TableSource = "file:///srv/membership/data.json".parse().unwrap();
        assert_eq!(source, TableSource::File(PathBuf::from("/srv/membership/data.json")));

        assert!(matches!(
            "file://remote-host/data.json".parse::<TableSource>(),
            Err(LoadError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(matches!(
            "  ".parse::<TableSource>(),
            Err(LoadError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_relative_to_base() {
        let source =
            TableSource::relative_to("https://members.example.org/check/", "data.json").unwrap();
        assert_eq!(source.to_string(), "https://members.example.org/check/data.json");

        // Without a trailing slash the last segment is replaced
        let source =
            TableSource::relative_to("https://members.example.org/check/index.html", "data.json")
                .unwrap();
        assert_eq!(source.to_string(), "https://members.example.org/check/data.json");
    }

    #[test]
    fn test_relative_to_bad_base() {
        assert!(matches!(
            TableSource::relative_to("not a url", "data.json"),
            Err(LoadError::InvalidLocation(_))
        ));
    }
}
