//! HTTP client for the external company-research service.
//!
//! Wraps reqwest to issue the one outbound call this application makes:
//! POST the company name, receive a JSON object of labeled findings.
//! reqwest works on both native and WASM targets:
//! - Native: hyper with rustls-tls for HTTPS
//! - WASM: browser fetch() API internally
//!
//! The endpoint defaults to the local research backend and can be swapped
//! at build time through the `FIRMSCOPE_API_URL` environment variable.

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::session::ResultSet;

/// Default endpoint of the company-research backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/search_company/";

/// Errors from the outbound search call.
///
/// The UI collapses every variant into one fixed notice; the variants exist
/// so the logs say what actually happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Endpoint URL is unparseable or not http/https.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport-level failure (connection refused, DNS, aborted fetch).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status.
    #[error("server returned status {0}")]
    BadStatus(u16),

    /// Response body was not a JSON object of string fields.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Request body for the search endpoint.
#[derive(Serialize)]
struct CompanyQuery<'a> {
    company_name: &'a str,
}

/// Global HTTP client for connection pooling.
///
/// reqwest::Client pools connections internally, so one shared client beats
/// building a new one per search. No request timeout is configured: a
/// dispatched search runs until the server answers or the transport fails.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent(concat!("firmscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client")
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
});

/// Resolves the endpoint URL: the `FIRMSCOPE_API_URL` build-time override if
/// one was set, otherwise [`DEFAULT_ENDPOINT`].
pub fn endpoint_url() -> &'static str {
    option_env!("FIRMSCOPE_API_URL").unwrap_or(DEFAULT_ENDPOINT)
}

/// Searches the configured endpoint for a company by name.
///
/// The response object becomes the displayed [`ResultSet`] verbatim, keys in
/// the order the server sent them.
pub async fn search_company(company_name: &str) -> Result<ResultSet, ApiError> {
    search_company_at(endpoint_url(), company_name).await
}

/// Searches a specific endpoint. Split out from [`search_company`] so the
/// validation and error paths are testable without the compiled-in endpoint.
pub async fn search_company_at(
    endpoint: &str,
    company_name: &str,
) -> Result<ResultSet, ApiError> {
    let url = url::Url::parse(endpoint)
        .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidEndpoint(format!(
            "unsupported scheme: {} (only http/https allowed)",
            url.scheme()
        )));
    }

    let response = HTTP_CLIENT
        .post(url)
        .json(&CompanyQuery { company_name })
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::BadStatus(status.as_u16()));
    }

    response
        .json::<ResultSet>()
        .await
        .map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let url = url::Url::parse(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_query_serializes_to_wire_shape() {
        let body = serde_json::to_value(CompanyQuery {
            company_name: "Acme",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "company_name": "Acme" }));
    }

    #[test]
    fn test_result_set_preserves_key_order() {
        let results: ResultSet = serde_json::from_str(
            r#"{"Target Market":"Small businesses","General Information":"Acme makes anvils"}"#,
        )
        .unwrap();
        let keys: Vec<_> = results.keys().cloned().collect();
        assert_eq!(keys, ["Target Market", "General Information"]);
    }

    #[tokio::test]
    async fn test_unparseable_endpoint() {
        let result = search_company_at("not a url", "Acme").await;
        assert!(matches!(result, Err(ApiError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let result = search_company_at("ftp://example.com", "Acme").await;
        assert!(matches!(result, Err(ApiError::InvalidEndpoint(_))));
    }
}
