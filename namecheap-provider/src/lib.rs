//! # namecheap-provider
//!
//! Async client for the [Namecheap](https://www.namecheap.com/) registrar XML API.
//!
//! ## Covered Commands
//!
//! | Area | Commands |
//! |------|----------|
//! | `domains` | `getList`, `getInfo`, `check`, `getTldList`, `create`, `renew` |
//! | `domains` | `setContacts`, `getRegistrarLock`, `setRegistrarLock` |
//! | `domains.dns` | `getHosts`, `setHosts`, `setCustom`, `setDefault` |
//! | `domains.ns` | `create`, `delete`, `getInfo`, `update` |
//! | `ssl` | `getList`, `create`, `activate`, `getInfo` |
//! | `ssl` | `getApproverEmailList`, `resendApproverEmail` |
//! | `whoisguard` | `getList`, `enable`, `disable`, `renew` |
//! | `users` | `getPricing`, `getBalances` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use namecheap_provider::{Credentials, DomainListQuery, NamecheapClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NamecheapClient::builder(Credentials::from_env()?)
//!         .sandbox()
//!         .build()?;
//!
//!     let list = client.domains_get_list(&DomainListQuery::default()).await?;
//!     for domain in &list.domains {
//!         println!("{} expires {:?}", domain.name, domain.expires);
//!     }
//!
//!     let hosts = client.dns_get_hosts("example", "com").await?;
//!     for host in &hosts.hosts {
//!         println!("{} {} -> {}", host.name, host.record_type, host.address);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Registering Domains
//!
//! `domains.create` and `domains.setContacts` send the client's registrant
//! profile under the `Registrant`, `Tech`, `Admin` and `AuxBilling` prefixes.
//! Attach one first; the base client is left untouched.
//!
//! ```rust,no_run
//! # use namecheap_provider::*;
//! # async fn example(client: NamecheapClient) -> Result<()> {
//! let registrant = Registrant {
//!     first_name: "John".to_string(),
//!     last_name: "Smith".to_string(),
//!     email_address: "john@example.com".to_string(),
//!     ..Registrant::default()
//! };
//! let created = client
//!     .with_registrant(registrant)
//!     .domain_create("example.com", 1, &DomainCreateOptions::default())
//!     .await?;
//! println!("order {}", created.order_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, NamecheapError>`](NamecheapError):
//!
//! - [`NamecheapError::Precondition`]: rejected locally, nothing was sent
//! - [`NamecheapError::Transport`]: network failure or non-200 HTTP status
//! - [`NamecheapError::Decode`]: body is not a readable `ApiResponse`
//! - [`NamecheapError::Format`]: a field value failed to parse
//! - [`NamecheapError::Provider`]: `Status="ERROR"` with every reported error
//! - [`NamecheapError::Rejected`]: a toggle command answered `IsSuccess="false"`
//!
//! Requests are never retried.

mod api;
mod client;
pub mod config;
mod envelope;
mod error;
mod http_client;
pub mod operations;
mod request;
pub mod types;
pub mod utils;
mod xml;

pub use client::{Decoded, NamecheapClient, NamecheapClientBuilder};
pub use config::{Credentials, Endpoint};
pub use envelope::{Envelope, parse_document};
pub use error::{ApiError, NamecheapError, Result};
pub use http_client::{
    ReqwestTransport, Transport, TransportRequest, TransportResponse, create_http_client,
};
pub use operations::{Operation, Selection};
pub use request::{Field, Method, Params};
pub use xml::{FromXml, XmlNode, parse_bool, parse_num};

pub use types::*;

pub use utils::datetime;
