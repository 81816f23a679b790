//! HTTP transport
//!
//! Sends an encoded parameter payload to the API endpoint and hands back the
//! raw status and body. Status interpretation and XML decoding happen in the
//! client; nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::{NamecheapError, Result};
use crate::request::Method;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| NamecheapError::Transport {
            status: None,
            detail: format!("failed to create HTTP client: {e}"),
        })
}

/// One outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Form-encoded parameters: the query string for GET, the body for POST.
    pub payload: String,
}

/// Raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Moves a request over the wire.
///
/// Implementations must be safe to share between tasks. Errors should be
/// [`NamecheapError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client with the default connect and request timeouts.
    pub fn with_default_client() -> Result<Self> {
        create_http_client().map(Self::new)
    }
}

fn transport_error(e: &reqwest::Error) -> NamecheapError {
    let detail = if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    NamecheapError::Transport {
        status: e.status().map(|s| s.as_u16()),
        detail,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        log::debug!("[namecheap] {} {}", request.method, request.url);

        let builder = match request.method {
            Method::Get => {
                let separator = if request.url.contains('?') { '&' } else { '?' };
                self.client
                    .get(format!("{}{separator}{}", request.url, request.payload))
            }
            Method::Post => self
                .client
                .post(&request.url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.payload),
        };

        let response = builder.send().await.map_err(|e| transport_error(&e))?;

        let status = response.status().as_u16();
        log::debug!("[namecheap] Response Status: {status}");

        let body = response
            .bytes()
            .await
            .map_err(|e| NamecheapError::Transport {
                status: Some(status),
                detail: format!("failed to read response body: {e}"),
            })?
            .to_vec();

        log::debug!(
            "[namecheap] Response Body: {}",
            truncate_for_log(&String::from_utf8_lossy(&body))
        );

        Ok(TransportResponse { status, body })
    }
}
