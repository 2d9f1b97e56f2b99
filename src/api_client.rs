use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::request::SearchRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one request: the server's payload, or its refusal.
///
/// Kept as a tagged type rather than a loose JSON map so callers and tests
/// can distinguish the two outcomes without inspecting keys.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// HTTP 200 with the decoded body, passed through untouched.
    Success(Value),
    /// Any other status. The server's response body is discarded.
    Rejected {
        message: &'static str,
        status_code: u16,
    },
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// Collapse into the JSON value that gets printed.
    pub fn into_value(self) -> Value {
        match self {
            ApiResult::Success(payload) => payload,
            ApiResult::Rejected {
                message,
                status_code,
            } => json!({
                "error": message,
                "statusCode": status_code,
            }),
        }
    }
}

/// Blocking HTTP client for sec-api.io.
///
/// The underlying reqwest client is constructed explicitly with a request
/// timeout instead of relying on library defaults, and is reused for the
/// lifetime of the invocation.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(1)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Send one POST request and classify the response by status code.
    ///
    /// Non-200 statuses are a normal outcome (`ApiResult::Rejected`);
    /// only transport-level failures return `Err`. The credential is never
    /// logged.
    pub fn send(&self, request: &SearchRequest) -> Result<ApiResult> {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let body = request.body();

        tracing::debug!(target: "api", "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .json(&body)
            .send()
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if status == StatusCode::OK {
            let payload: Value = response
                .json()
                .context("Response body was not valid JSON")?;
            Ok(ApiResult::Success(payload))
        } else {
            tracing::warn!(target: "api", "Server rejected request: {}", status);
            Ok(ApiResult::Rejected {
                message: request.rejection_message(),
                status_code: status.as_u16(),
            })
        }
    }
}
