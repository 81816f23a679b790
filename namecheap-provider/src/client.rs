//! `NamecheapClient`: configuration plus the shared dispatch path.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::config::{Credentials, Endpoint};
use crate::envelope::{Envelope, parse_document};
use crate::error::{NamecheapError, Result};
use crate::http_client::{ReqwestTransport, Transport, TransportRequest};
use crate::operations::{Operation, Selection};
use crate::request::Params;
use crate::types::Registrant;
use crate::utils::log_sanitizer::redact_params;

/// A decoded result and the envelope's GMT offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<R> {
    pub result: R,
    pub offset: FixedOffset,
}

/// Immutable client configuration, shared between clones.
#[derive(Debug, Clone)]
struct ClientConfig {
    credentials: Credentials,
    endpoint: Endpoint,
    registrant: Option<Registrant>,
}

/// Namecheap API client.
///
/// Cheap to clone and safe to share across tasks: configuration is
/// immutable and the transport is pooled. Every call is a single
/// request/response round trip; nothing is retried.
#[derive(Clone)]
pub struct NamecheapClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for NamecheapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamecheapClient")
            .field("credentials", &self.config.credentials)
            .field("endpoint", &self.config.endpoint)
            .field("registrant", &self.config.registrant.is_some())
            .finish_non_exhaustive()
    }
}

impl NamecheapClient {
    /// Production client with default HTTP settings.
    pub fn new(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(Credentials::new(api_user, api_key, user_name)).build()
    }

    pub fn builder(credentials: Credentials) -> NamecheapClientBuilder {
        NamecheapClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.config.endpoint
    }

    pub fn registrant(&self) -> Option<&Registrant> {
        self.config.registrant.as_ref()
    }

    /// Returns a client that sends `registrant` with contact-bearing
    /// operations. `self` is left unchanged.
    #[must_use]
    pub fn with_registrant(&self, registrant: Registrant) -> Self {
        let mut config = (*self.config).clone();
        config.registrant = Some(registrant);
        Self {
            config: Arc::new(config),
            transport: Arc::clone(&self.transport),
        }
    }

    /// Runs `op` and returns the result with the response's GMT offset.
    ///
    /// Declared required fields and the registrant profile are checked
    /// before anything is sent.
    pub async fn execute<R>(&self, op: &Operation<R>, params: Params) -> Result<Decoded<R>> {
        let outcome = self.try_execute(op, params).await;
        if let Err(e) = &outcome {
            if e.is_expected() {
                log::warn!("[namecheap] {} failed: {e}", op.command);
            } else {
                log::error!("[namecheap] {} failed: {e}", op.command);
            }
        }
        outcome
    }

    /// [`execute`](Self::execute) without the offset.
    pub async fn dispatch<R>(&self, op: &Operation<R>, params: Params) -> Result<R> {
        self.execute(op, params).await.map(|d| d.result)
    }

    async fn try_execute<R>(&self, op: &Operation<R>, mut params: Params) -> Result<Decoded<R>> {
        if op.needs_contacts() {
            let registrant = self.registrant().ok_or_else(|| {
                NamecheapError::precondition(format!(
                    "{}: registrant profile is not set",
                    op.command
                ))
            })?;
            params.set_contacts(registrant);
        }
        params.check_required(op.command, op.fields)?;
        let undeclared = params.undeclared(op.fields);
        if !undeclared.is_empty() {
            log::warn!(
                "[namecheap] {} sends undeclared fields: {}",
                op.command,
                undeclared.join(", ")
            );
        }

        let params = params.with_credentials(&self.config.credentials, op.command);
        log::debug!(
            "[namecheap] {} {} params: {}",
            op.method,
            op.command,
            redact_params(params.iter())
        );

        let response = self
            .transport
            .send(TransportRequest {
                method: op.method,
                url: self.config.endpoint.url().to_string(),
                payload: params.encode(),
            })
            .await?;

        if response.status != 200 {
            return Err(NamecheapError::Transport {
                status: Some(response.status),
                detail: format!("unexpected HTTP status {}", response.status),
            });
        }

        let doc = parse_document(&response.body)?;
        let envelope = Envelope::read(&doc)?;
        log::debug!("[namecheap] {} Status: {}", op.command, envelope.status);

        let selection = Selection {
            nodes: envelope.select(op.result_path),
            envelope,
        };
        let result = (op.decode)(&selection)?;

        Ok(Decoded {
            result,
            offset: envelope.offset,
        })
    }
}

// ============ Builder ============

/// Builder for [`NamecheapClient`].
pub struct NamecheapClientBuilder {
    credentials: Credentials,
    endpoint: Endpoint,
    registrant: Option<Registrant>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl NamecheapClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::default(),
            registrant: None,
            http_client: None,
            transport: None,
        }
    }

    /// Use the sandbox endpoint.
    #[must_use]
    pub fn sandbox(mut self) -> Self {
        self.endpoint = Endpoint::Sandbox;
        self
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the endpoint URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Endpoint::Custom(url.into());
        self
    }

    #[must_use]
    pub fn client_ip(mut self, ip: impl Into<String>) -> Self {
        self.credentials.client_ip = ip.into();
        self
    }

    #[must_use]
    pub fn registrant(mut self, registrant: Registrant) -> Self {
        self.registrant = Some(registrant);
        self
    }

    /// Reuse an existing `reqwest::Client`. Ignored when a transport is set.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<NamecheapClient> {
        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::with_default_client()?),
        };

        Ok(NamecheapClient {
            config: Arc::new(ClientConfig {
                credentials: self.credentials,
                endpoint: self.endpoint,
                registrant: self.registrant,
            }),
            transport,
        })
    }
}
