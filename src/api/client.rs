use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::types::{
    DecisionSessionRequest, DecisionSessionResponse, HealthStatus, ListDecisionSessionsResponse,
    ProblemDetails, ReadinessStatus, SessionQuery,
};
use crate::config::{ApiConfig, RequestConfig};
use crate::error::{ApiError, ApiResult, FALLBACK_API_MESSAGE};

const SESSIONS_PATH: &str = "/v1/decision/sessions";

/// Operations offered by the Decision API.
///
/// Each call is a single HTTP round trip: no retries, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DecisionApi: Send + Sync {
    /// Submit the form answers and receive the generated session.
    async fn create_session(
        &self,
        request: &DecisionSessionRequest,
    ) -> ApiResult<DecisionSessionResponse>;

    /// Fetch a session by id.
    async fn get_session(&self, id: &str) -> ApiResult<DecisionSessionResponse>;

    /// List sessions, newest first.
    async fn list_sessions(&self, query: &SessionQuery) -> ApiResult<ListDecisionSessionsResponse>;

    /// Liveness probe.
    async fn health(&self) -> ApiResult<HealthStatus>;

    /// Readiness probe including backend dependencies.
    async fn readiness(&self) -> ApiResult<ReadinessStatus>;
}

/// HTTP client for the Decision API
#[derive(Clone)]
pub struct DecisionClient {
    client: Client,
    base_url: String,
    request_config: RequestConfig,
}

impl DecisionClient {
    /// Create a new Decision API client
    pub fn new(config: &ApiConfig, request_config: RequestConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url,
            request_config,
        })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.request_config.timeout_ms,
            }
        } else {
            ApiError::Network(e)
        }
    }

    /// Send a request and decode a JSON body, normalizing every failure
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
    ) -> ApiResult<T> {
        debug!(endpoint = %endpoint, "Calling decision API");
        let start = Instant::now();

        let response = builder.send().await.map_err(|e| {
            warn!(endpoint = %endpoint, error = %e, "Decision API request failed");
            self.transport_error(e)
        })?;

        let status = response.status();
        let latency = start.elapsed();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ProblemDetails::from_body(&body)
                .and_then(|problem| problem.message())
                .unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string());

            warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                latency_ms = latency.as_millis(),
                error = %message,
                "Decision API returned an error"
            );

            return Err(if status == StatusCode::NOT_FOUND {
                ApiError::NotFound { message }
            } else {
                ApiError::Api {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(endpoint = %endpoint, error = %e, "Failed to read decision API response");
            self.transport_error(e)
        })?;
        let decoded = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            ApiError::InvalidResponse {
                message: format!("Failed to parse response from {}: {}", endpoint, e),
            }
        })?;

        info!(
            endpoint = %endpoint,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Decision API call succeeded"
        );

        Ok(decoded)
    }
}

#[async_trait]
impl DecisionApi for DecisionClient {
    async fn create_session(
        &self,
        request: &DecisionSessionRequest,
    ) -> ApiResult<DecisionSessionResponse> {
        let url = self.url(SESSIONS_PATH)?;
        debug!(
            stress_level = request.stress_level,
            context_chars = request.context.chars().count(),
            "Creating decision session"
        );
        self.execute(self.client.post(url).json(request), "create_session")
            .await
    }

    async fn get_session(&self, id: &str) -> ApiResult<DecisionSessionResponse> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::NotFound {
                message: "Session not found".to_string(),
            });
        }

        let mut url = self.url(SESSIONS_PATH)?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        self.execute(self.client.get(url), "get_session").await
    }

    async fn list_sessions(&self, query: &SessionQuery) -> ApiResult<ListDecisionSessionsResponse> {
        let url = self.url(SESSIONS_PATH)?;
        self.execute(
            self.client.get(url).query(&query.to_query_pairs()),
            "list_sessions",
        )
        .await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let url = self.url("/v1/health")?;
        self.execute(self.client.get(url), "health").await
    }

    async fn readiness(&self) -> ApiResult<ReadinessStatus> {
        let url = self.url("/v1/health/ready")?;
        self.execute(self.client.get(url), "readiness").await
    }
}
