// File: crates/dashboard/src/error.rs
// Summary: Error taxonomy for fetching and drawing dashboard charts.

use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failures and non-200 replies.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}, expected 200 OK")]
    Status { url: String, status: StatusCode },
}

/// JSON was well-formed but did not have the expected shape.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    /// Missing field or wrong type, as reported by the deserializer.
    #[error("{0}")]
    Invalid(String),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u8),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Invalid(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected payload from {url}: {source}")]
    Schema {
        url: String,
        #[source]
        source: SchemaError,
    },
}

impl FetchError {
    pub fn is_network(&self) -> bool { matches!(self, FetchError::Network(_)) }
    pub fn is_decode(&self) -> bool { matches!(self, FetchError::Decode { .. }) }
    pub fn is_schema(&self) -> bool { matches!(self, FetchError::Schema { .. }) }

    /// HTTP status of a non-200 reply, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Network(NetworkError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Failures while downloading or scraping a crime-log page.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("invalid CSS selector: {0}")]
    Selector(String),
    #[error("record row has {found} cells, expected at least 5")]
    MissingCells { found: usize },
    #[error("record detail row lacks `{0}`")]
    MissingMarker(&'static str),
    #[error("unreadable date {input:?}: {source}")]
    BadDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("drawing region `{region}` failed: {source}")]
    Render {
        region: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl DashboardError {
    pub fn render(region: impl Into<String>, err: anyhow::Error) -> Self {
        DashboardError::Render { region: region.into(), source: err.into() }
    }

    /// The fetch failure behind this error, if the chart never got its data.
    pub fn as_fetch(&self) -> Option<&FetchError> {
        match self {
            DashboardError::Fetch(e) => Some(e),
            DashboardError::Render { .. } => None,
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
