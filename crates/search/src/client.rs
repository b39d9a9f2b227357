//! Async client for the space search endpoint.
//!
//! Wire contract: `GET {base}/{mode}/get/{terms}[?k={n}]` where `terms` is
//! the comma-joined, percent-encoded term list and `k` is sent only in
//! neighbors mode. Responses parse into `model::SearchResult`; nested value
//! bags are taken as-is, deep validation is the consumer's problem.
//!
//! Every request takes a cooperative cancellation token. The UI issues a new
//! search per keystroke, so a superseded request must abort immediately and
//! surface as `SearchError::Cancelled`, distinguishable from transport and
//! parse failures.

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use model::SearchResult;

use crate::mode::SearchMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request's cancellation token fired before the response was fully
    /// received.
    Cancelled,
    /// Network failure, non-2xx status, or a body that failed to parse.
    RequestFailed {
        status: Option<u16>,
        reason: String,
    },
}

impl SearchError {
    fn failed(status: Option<u16>, reason: impl Into<String>) -> Self {
        SearchError::RequestFailed {
            status,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Cancelled => write!(f, "search cancelled"),
            SearchError::RequestFailed {
                status: Some(status),
                reason,
            } => {
                write!(f, "search request failed (status {status}): {reason}")
            }
            SearchError::RequestFailed {
                status: None,
                reason,
            } => {
                write!(f, "search request failed: {reason}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::failed(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

/// Client for one backend base URL. Cheap to clone; the inner
/// `reqwest::Client` is already reference-counted.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a term lookup. `k` is appended only when present,
    /// and callers only pass it for neighbors mode.
    fn request_url(&self, mode: SearchMode, terms: &[String], k: Option<u32>) -> String {
        let joined = terms.join(",");
        let mut url = format!(
            "{}/{}/get/{}",
            self.base_url,
            mode.as_path(),
            urlencoding::encode(&joined)
        );
        if let Some(k) = k {
            url.push_str(&format!("?k={k}"));
        }
        url
    }

    /// Looks up `terms` along `mode`.
    pub async fn search(
        &self,
        mode: SearchMode,
        terms: &[String],
        cancel: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        self.request(mode, terms, None, cancel).await
    }

    /// Nearest-neighbor lookup: the one mode that carries a neighbor count.
    pub async fn search_neighbors(
        &self,
        term: &str,
        k: u32,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        let terms = [term.to_string()];
        self.request(SearchMode::Neighbors, &terms, Some(k), cancel)
            .await
    }

    async fn request(
        &self,
        mode: SearchMode,
        terms: &[String],
        k: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let url = self.request_url(mode, terms, k);
        debug!(%url, %mode, "search request");

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                debug!(%url, "search cancelled before response");
                return Err(SearchError::Cancelled);
            }
            response = self.http.get(&url).send() => response?,
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "search request rejected");
            return Err(SearchError::failed(
                Some(status.as_u16()),
                format!("unexpected status {status}"),
            ));
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                debug!(%url, "search cancelled mid-body");
                return Err(SearchError::Cancelled);
            }
            body = response.json::<SearchResult>() => body.map_err(|e| {
                warn!(%url, error = %e, "search response body unusable");
                SearchError::failed(Some(status.as_u16()), e.to_string())
            })?,
        };

        debug!(%url, spaces = result.spaces.len(), "search complete");
        Ok(result)
    }
}
