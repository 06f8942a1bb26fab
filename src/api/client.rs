use crate::api::models::{SearchMatch, SearchQuery};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fallback shown when a failed response carries no `detail` field
pub const GENERIC_SERVICE_ERROR: &str = "Error fetching results";

/// Shown for transport failures and undecodable bodies
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("{0}")]
    Service(String),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Message surfaced to the user. Service errors carry the server's
    /// `detail` text verbatim; everything else collapses to a generic
    /// network message.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Service(detail) => detail.clone(),
            SearchError::Request(_) | SearchError::Decode(_) => NETWORK_ERROR.to_string(),
        }
    }
}

/// Success response wrapper
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMatch>,
}

/// Error response wrapper, all fields optional
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Submit a sequence and return the ranked matches.
    ///
    /// Exactly one request per call; no retries, no explicit timeout.
    pub async fn recommend_sequence(
        &self,
        sequence: &str,
        top_k: u32,
    ) -> Result<Vec<SearchMatch>, SearchError> {
        let url = format!("{}/recommend-sequence", self.base_url);
        let query = SearchQuery {
            sequence: sequence.to_string(),
            top_k,
        };

        info!("POST {} (top_k={})", url, top_k);

        let response = self.client.post(&url).json(&query).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await?;
        let matches = decode_response(status, &body)?;
        info!("Search returned {} match(es)", matches.len());
        Ok(matches)
    }
}

/// Map a (status, body) pair to matches or a search error.
///
/// 2xx bodies must decode to `{"results": [...]}`. Non-2xx bodies may carry
/// `{"detail": "..."}`; the detail text becomes the error message, with a
/// generic fallback when absent or undecodable.
pub fn decode_response(
    status: StatusCode,
    body: &str,
) -> Result<Vec<SearchMatch>, SearchError> {
    if status.is_success() {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(response.results)
    } else {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
        warn!("Service error ({}): {}", status, detail);
        Err(SearchError::Service(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_results_in_order() {
        let body = r#"{"results": [
            {"id": "P01308", "id_link": "https://www.uniprot.org/uniprot/P01308/entry",
             "similarity": 0.97, "identity": 88.5,
             "pfam": ["Insulin"], "pfam_links": ["https://pfam/ins"]},
            {"id": "P06213", "id_link": "https://www.uniprot.org/uniprot/P06213/entry",
             "similarity": 0.81, "identity": 42.0,
             "pfam": [], "pfam_links": []}
        ]}"#;

        let matches = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "P01308");
        assert_eq!(matches[1].id, "P06213");
        assert_eq!(matches[0].pfam, vec!["Insulin"]);
        assert!(matches[1].pfam.is_empty());
    }

    #[test]
    fn service_detail_surfaces_verbatim() {
        let err = decode_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"detail": "model unavailable"}"#,
        )
        .unwrap_err();

        match err {
            SearchError::Service(detail) => assert_eq!(detail, "model unavailable"),
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        let err = decode_response(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert_eq!(err.user_message(), GENERIC_SERVICE_ERROR);

        let err = decode_response(StatusCode::NOT_FOUND, r#"{"other": 1}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_SERVICE_ERROR);
    }

    #[test]
    fn undecodable_success_body_is_a_decode_error() {
        let err = decode_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
        assert_eq!(err.user_message(), NETWORK_ERROR);
    }

    #[test]
    fn query_serializes_to_wire_shape() {
        let query = SearchQuery {
            sequence: "MKTLLVLL".to_string(),
            top_k: 5,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sequence": "MKTLLVLL", "top_k": 5})
        );
    }
}
