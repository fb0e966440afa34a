//! Loading record arrays from the site or from disk.
//!
//! Each load is a single attempt. Failures are logged and returned; the
//! caller decides whether its pipeline renders at all.

use std::fmt;
use std::path::PathBuf;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use callboard_core::model::{LineupRecord, PerformanceRecord};

use crate::error::{ClientError, ClientResult};

const USER_AGENT: &str = concat!("callboard/", env!("CARGO_PKG_VERSION"));

/// Where a data file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Resolves a configured path.
    ///
    /// Absolute http(s) URLs are used as-is. Anything else is joined onto
    /// `site_url` when one is given, or treated as a local file path.
    pub fn resolve(path: &str, site_url: Option<&str>) -> ClientResult<Self> {
        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(Self::Url(url));
            }
        }

        let Some(base) = site_url else {
            return Ok(Self::File(PathBuf::from(path)));
        };
        let base = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
            url: base.to_string(),
            message: e.to_string(),
        })?;
        base.join(path)
            .map(Self::Url)
            .map_err(|e| ClientError::InvalidUrl {
                url: path.to_string(),
                message: e.to_string(),
            })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Fetches and parses JSON record arrays.
#[derive(Debug, Clone)]
pub struct DataLoader {
    http: Client,
}

impl DataLoader {
    pub fn new() -> ClientResult<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    #[must_use]
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Loads a JSON array of records from `source`.
    ///
    /// # Errors
    ///
    /// [`ClientError::Fetch`] when the file cannot be read or the server
    /// does not answer with a success status; [`ClientError::Parse`] when
    /// the body is not a JSON array of `R`.
    pub async fn load<R: DeserializeOwned>(&self, source: &DataSource) -> ClientResult<Vec<R>> {
        let result = match self.fetch(source).await {
            Ok(body) => parse(source, &body),
            Err(e) => Err(e),
        };
        match &result {
            Ok(records) => log::info!("Loaded {} records from {}", records.len(), source),
            Err(e) => log::error!("Failed to fetch data: {e}"),
        }
        result
    }

    pub async fn load_performances(&self, source: &DataSource) -> ClientResult<Vec<PerformanceRecord>> {
        self.load(source).await
    }

    pub async fn load_lineups(&self, source: &DataSource) -> ClientResult<Vec<LineupRecord>> {
        self.load(source).await
    }

    async fn fetch(&self, source: &DataSource) -> ClientResult<String> {
        let fetch_error = |message: String| ClientError::Fetch {
            source_name: source.to_string(),
            message,
        };

        match source {
            DataSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| fetch_error(e.to_string())),
            DataSource::Url(url) => {
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| fetch_error(e.to_string()))?;
                response.text().await.map_err(|e| fetch_error(e.to_string()))
            }
        }
    }
}

fn parse<R: DeserializeOwned>(source: &DataSource, body: &str) -> ClientResult<Vec<R>> {
    serde_json::from_str(body).map_err(|e| ClientError::Parse {
        source_name: source.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_plain_path_is_file() {
        let source = DataSource::resolve("lineups.json", None).unwrap();
        assert_eq!(source, DataSource::File(PathBuf::from("lineups.json")));
    }

    #[test]
    fn test_resolve_relative_to_site() {
        let source =
            DataSource::resolve("../data/performances.json", Some("https://example.org/signup/"))
                .unwrap();
        assert_eq!(source.to_string(), "https://example.org/data/performances.json");
    }

    #[test]
    fn test_resolve_absolute_url_ignores_site() {
        let source =
            DataSource::resolve("https://cdn.example.org/lineups.json", Some("https://example.org/"))
                .unwrap();
        assert_eq!(source.to_string(), "https://cdn.example.org/lineups.json");
    }

    #[test]
    fn test_resolve_bad_site_url() {
        let err = DataSource::resolve("lineups.json", Some("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_load_performances_from_file() {
        let file = file_with(
            r#"[
                {"id": "evt-1", "name": "Spring Recital", "type": "Recital", "date": "12 April",
                 "day": "Saturday", "start": "19:00", "arrive": "18:15", "location": "Hall"},
                {"name": "Gala Night", "type": "Concert", "date": "", "day": "", "start": "",
                 "arrive": "", "location": "", "extra": null}
            ]"#,
        );
        let loader = DataLoader::new().unwrap();
        let source = DataSource::File(file.path().to_path_buf());

        let records = loader.load_performances(&source).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier(), "evt-1");
        assert_eq!(records[1].identifier(), "Gala Night");
    }

    #[tokio::test]
    async fn test_load_lineups_from_file() {
        let file = file_with(
            r#"[{"name": "Winter Show", "type": "Concert", "performers": {"Choir": ["Ann", "Ben"]}}]"#,
        );
        let loader = DataLoader::new().unwrap();
        let records = loader
            .load_lineups(&DataSource::File(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(records[0].performers["Choir"], vec!["Ann", "Ben"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let loader = DataLoader::new().unwrap();
        let source = DataSource::File(PathBuf::from("/nonexistent/performances.json"));
        let err = loader.load_performances(&source).await.unwrap_err();
        assert!(matches!(err, ClientError::Fetch { .. }));
        assert!(err.is_load_failure());
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_failure() {
        let file = file_with("<html>not json</html>");
        let loader = DataLoader::new().unwrap();
        let err = loader
            .load_performances(&DataSource::File(file.path().to_path_buf()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse { .. }));
    }
}
