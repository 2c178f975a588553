//! HTTP client for the wallet node API
//!
//! One pooled `reqwest::Client` with a bounded timeout, two operations,
//! no retries. Each call is a single request/response exchange; every
//! failure goes straight back to the caller.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::WalletClientError;
use crate::types::{
    CreateTransactionRequest, CreateTransactionResponse, PostTransactionRequest,
    PostTransactionResponse,
};

const CREATE_TRANSACTION_PATH: &str = "/wallet/createTransaction";
const POST_TRANSACTION_PATH: &str = "/wallet/postTransaction";

/// Successful wallet responses wrap the payload in a `data` member
#[derive(Debug, Deserialize)]
struct ResponseEnvelope<T> {
    data: T,
}

/// Client for a remote wallet node
#[derive(Debug, Clone)]
pub struct WalletClient {
    http: Client,
    base_url: String,
}

impl WalletClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, WalletClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(WalletClientError::Transport)?;

        // trailing slash would produce "//wallet/..." when joining paths
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for a base URL with the default timeout
    pub fn for_url(base_url: impl Into<String>) -> Result<Self, WalletClientError> {
        Self::new(&ClientConfig::for_url(base_url))
    }

    /// Base URL this client talks to (normalized, no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the wallet node to construct an unsigned transaction
    ///
    /// Validates the request, POSTs it with unset fields omitted, and
    /// returns the `data` payload of a 2xx response. A non-2xx status
    /// surfaces as [`WalletClientError::HttpRequest`] with the raw body.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, WalletClientError> {
        request.validate()?;
        self.post_json(CREATE_TRANSACTION_PATH, request).await
    }

    /// Ask the wallet node to sign a serialized transaction and post it
    ///
    /// The transaction bytes pass through opaquely; only hex shape is
    /// checked client-side. Same error taxonomy as
    /// [`create_transaction`](Self::create_transaction).
    pub async fn post_transaction(
        &self,
        request: &PostTransactionRequest,
    ) -> Result<PostTransactionResponse, WalletClientError> {
        request.validate()?;
        self.post_json(POST_TRANSACTION_PATH, request).await
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, WalletClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let started = Instant::now();

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                endpoint = %path,
                status = %status.as_u16(),
                latency_ms = %started.elapsed().as_millis(),
                "wallet API request failed"
            );
            return Err(WalletClientError::HttpRequest {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ResponseEnvelope<Resp> = serde_json::from_str(&body)
            .map_err(|e| WalletClientError::schema(path, e.to_string()))?;

        debug!(
            endpoint = %path,
            status = %status.as_u16(),
            latency_ms = %started.elapsed().as_millis(),
            "wallet API request succeeded"
        );
        Ok(envelope.data)
    }
}
