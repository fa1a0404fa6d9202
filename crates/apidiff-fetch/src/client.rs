//! HTTP client for retrieving JSON documents

use crate::errors::FetchError;
use crate::request::EndpointRequest;
use apidiff_core::errors::{ExError, Side};
use apidiff_core::{log_op_end, log_op_error, log_op_start};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper over `reqwest::Client` with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Build a client whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// `FetchError::Client` if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("apidiff/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeout })
    }

    /// Per-request timeout this client was built with
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET the endpoint and decode its body as JSON.
    ///
    /// Only `200 OK` is accepted; any other status is an error even when it
    /// is in the success range.
    ///
    /// # Errors
    ///
    /// - `InvalidHeader` if a configured header cannot be sent
    /// - `Timeout` / `Transport` if the request does not complete
    /// - `Status` for any status other than 200
    /// - `Body` if the body cannot be read
    /// - `Decode` if the body is not JSON
    pub async fn fetch_json(&self, request: &EndpointRequest) -> Result<Value, FetchError> {
        let start = Instant::now();
        log_op_start!("fetch", url = request.url.as_str());

        let outcome = self.fetch_json_inner(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            Ok(_) => {
                log_op_end!("fetch", duration_ms = duration_ms, url = request.url.as_str());
            }
            Err(err) => {
                log_op_error!(
                    "fetch",
                    err,
                    duration_ms = duration_ms,
                    url = request.url.as_str()
                );
            }
        }

        outcome
    }

    async fn fetch_json_inner(&self, request: &EndpointRequest) -> Result<Value, FetchError> {
        let url = request.url.to_string();
        tracing::debug!(method = "GET", url = %url, "sending request");

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value.expose()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            // one value per name
            headers.insert(header_name, header_value);
        }

        let response = self
            .client
            .get(request.url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.clone() }
            } else {
                FetchError::Body {
                    url: url.clone(),
                    source: e,
                }
            }
        })?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

fn transport(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: err,
        }
    }
}

/// Fetch both sides concurrently.
///
/// The first failure aborts the pair; the error carries the failing side.
///
/// # Errors
///
/// Any `FetchError`, converted to `ExError` and attributed to its side.
pub async fn fetch_pair(
    client: &HttpClient,
    left: &EndpointRequest,
    right: &EndpointRequest,
) -> Result<(Value, Value), ExError> {
    tokio::try_join!(
        fetch_side(client, Side::Left, left),
        fetch_side(client, Side::Right, right)
    )
}

async fn fetch_side(
    client: &HttpClient,
    side: Side,
    request: &EndpointRequest,
) -> Result<Value, ExError> {
    client
        .fetch_json(request)
        .await
        .map_err(|e| ExError::from(e).with_side(side))
}
