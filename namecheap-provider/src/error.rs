use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single `(Number, Message)` entry from the `<Errors>` list of an
/// `ApiResponse` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Provider error number, kept verbatim.
    pub code: String,
    /// Provider error message.
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

/// Unified error type for all Namecheap API operations.
///
/// Every variant is serializable for structured error reporting. Nothing in
/// this crate retries: each variant is surfaced to the caller exactly once.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum NamecheapError {
    /// A client-side precondition was not met (e.g. no registrant profile
    /// before domain creation). Raised before any network call.
    #[error("Precondition failed: {detail}")]
    Precondition {
        /// What was missing.
        detail: String,
    },

    /// The HTTP exchange failed: connection error, body read error, or a
    /// status other than 200.
    #[error("{}", render_transport(*.status, .detail))]
    Transport {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Error details.
        detail: String,
    },

    /// The response body is not a recognizable provider envelope.
    #[error("Decode error: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// A field did not match its expected textual pattern.
    #[error("Invalid {field} '{value}': {detail}")]
    Format {
        /// Name of the offending field or attribute.
        field: String,
        /// Raw value as returned by the provider.
        value: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The envelope reported `Status="ERROR"`.
    ///
    /// All entries are kept in provider order.
    #[error("{}", render_api_errors(.errors))]
    Provider {
        /// Ordered `(code, message)` pairs.
        errors: Vec<ApiError>,
    },

    /// The envelope was `OK` but the command reported `IsSuccess="false"`.
    #[error("{command} reported IsSuccess=false")]
    Rejected {
        /// Provider command string.
        command: String,
    },
}

fn render_transport(status: Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("Transport error (HTTP {code}): {detail}"),
        None => format!("Transport error: {detail}"),
    }
}

fn render_api_errors(errors: &[ApiError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl NamecheapError {
    /// 是否为预期行为（用户输入、provider 拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Precondition { .. } | Self::Provider { .. } | Self::Rejected { .. }
        )
    }

    /// Provider error entries, empty for every other variant.
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Provider { errors } => errors,
            _ => &[],
        }
    }

    pub(crate) fn precondition(detail: impl Into<String>) -> Self {
        Self::Precondition {
            detail: detail.into(),
        }
    }

    pub(crate) fn decode(detail: impl ToString) -> Self {
        Self::Decode {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn format(
        field: impl Into<String>,
        value: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Format {
            field: field.into(),
            value: value.into(),
            detail: detail.into(),
        }
    }
}

/// Convenience type alias for `Result<T, NamecheapError>`.
pub type Result<T> = std::result::Result<T, NamecheapError>;
