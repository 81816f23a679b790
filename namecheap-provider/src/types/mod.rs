//! Request inputs and decoded results, grouped by API area.

mod dns;
mod domain;
mod ns;
mod registrant;
mod ssl;
mod users;
mod whoisguard;

pub use dns::{DnsHosts, DnsSetHostsResult, DnsUpdateResult, HostRecord};
pub use domain::{
    DOMAIN_LIST_PAGE_SIZE, DnsDetails, Domain, DomainCheck, DomainCreateOptions, DomainCreateResult,
    DomainInfo, DomainList, DomainListQuery, DomainRenewResult, DomainUpdateResult, Paging,
    RegistrarLockStatus, Tld, WhoisguardDetails, WhoisguardEmailDetails,
};
pub use ns::{NameserverInfo, NameserverResult};
pub use registrant::Registrant;
pub use ssl::{
    ApproverEmailList, CaCertificate, DcValidation, DcValidationDetails, SslActivateParams,
    SslActivateResult, SslCertificate, SslCertificateBundle, SslCertificateDetails, SslCreateResult,
    SslInfo, SslProvider, SslPurchasedCertificate, SslResendResult,
};
pub use users::{Balances, PricingQuery, Price, Product, ProductCategory, ProductType};
pub use whoisguard::{
    WHOISGUARD_LIST_PAGE_SIZE, WhoisguardEntry, WhoisguardRenewResult, WhoisguardToggleResult,
};
