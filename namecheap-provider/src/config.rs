//! Client configuration: credentials and endpoint selection.

use serde::{Deserialize, Serialize};

use crate::error::{NamecheapError, Result};

/// Production API endpoint.
pub const PRODUCTION_URL: &str = "https://api.namecheap.com/xml.response";
/// Sandbox API endpoint.
pub const SANDBOX_URL: &str = "https://api.sandbox.namecheap.com/xml.response";
/// Sent as `ClientIp` unless overridden; required by the API but not checked.
pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";

// ============ Credentials ============

/// API credentials sent with every request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_user: String,
    pub api_key: String,
    pub user_name: String,
    pub client_ip: String,
}

impl Credentials {
    pub fn new(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
            user_name: user_name.into(),
            client_ip: DEFAULT_CLIENT_IP.to_string(),
        }
    }

    /// Reads `NAMECHEAP_API_USER`, `NAMECHEAP_API_KEY`, `NAMECHEAP_USER_NAME`
    /// and `NAMECHEAP_CLIENT_IP`.
    ///
    /// `NAMECHEAP_USER_NAME` falls back to the API user.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                NamecheapError::precondition(format!("environment variable {key} is not set"))
            })
        };

        let api_user = required("NAMECHEAP_API_USER")?;
        let api_key = required("NAMECHEAP_API_KEY")?;
        let user_name = get("NAMECHEAP_USER_NAME").unwrap_or_else(|| api_user.clone());

        let mut credentials = Self::new(api_user, api_key, user_name);
        if let Some(ip) = get("NAMECHEAP_CLIENT_IP") {
            credentials.client_ip = ip;
        }
        Ok(credentials)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"***")
            .field("user_name", &self.user_name)
            .field("client_ip", &self.client_ip)
            .finish()
    }
}

// ============ Endpoint ============

/// Which API host requests go to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    #[default]
    Production,
    Sandbox,
    /// Any other URL, e.g. a local mock server.
    Custom(String),
}

impl Endpoint {
    pub fn url(&self) -> &str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
            Self::Custom(url) => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_user_name_defaults_to_api_user() {
        let c = Credentials::from_lookup(lookup(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(c.user_name, "alice");
        assert_eq!(c.client_ip, DEFAULT_CLIENT_IP);
    }

    #[test]
    fn env_client_ip_override() {
        let c = Credentials::from_lookup(lookup(&[
            ("NAMECHEAP_API_USER", "alice"),
            ("NAMECHEAP_API_KEY", "key"),
            ("NAMECHEAP_USER_NAME", "bob"),
            ("NAMECHEAP_CLIENT_IP", "10.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(c.user_name, "bob");
        assert_eq!(c.client_ip, "10.0.0.1");
    }

    #[test]
    fn env_missing_key_is_precondition() {
        let err = Credentials::from_lookup(lookup(&[("NAMECHEAP_API_USER", "alice")]))
            .unwrap_err();
        assert!(err.to_string().contains("NAMECHEAP_API_KEY"));
    }

    #[test]
    fn debug_hides_api_key() {
        let c = Credentials::new("alice", "s3cr3t", "alice");
        assert!(!format!("{c:?}").contains("s3cr3t"));
    }

    #[test]
    fn endpoint_urls() {
        assert_eq!(Endpoint::default().url(), PRODUCTION_URL);
        assert_eq!(Endpoint::Sandbox.url(), SANDBOX_URL);
        assert_eq!(
            Endpoint::Custom("http://127.0.0.1:9000/xml.response".into()).url(),
            "http://127.0.0.1:9000/xml.response"
        );
    }
}
