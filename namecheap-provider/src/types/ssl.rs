use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

// ============ ssl.getList ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificate {
    pub certificate_id: i64,
    pub host_name: String,
    pub ssl_type: String,
    pub purchase_date: Option<DateTime<FixedOffset>>,
    pub expire_date: Option<DateTime<FixedOffset>>,
    pub activation_expire_date: Option<DateTime<FixedOffset>>,
    pub is_expired: bool,
    pub status: String,
}

impl FromXml for SslCertificate {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            certificate_id: node.attr_num("CertificateID")?,
            host_name: node.attr_string("HostName"),
            ssl_type: node.attr_string("SSLType"),
            purchase_date: node.attr_date("PurchaseDate")?,
            expire_date: node.attr_date("ExpireDate")?,
            activation_expire_date: node.attr_date("ActivationExpireDate")?,
            is_expired: node.attr_bool("IsExpiredYN")?,
            status: node.attr_string("Status"),
        })
    }
}

// ============ ssl.create ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCreateResult {
    pub is_success: bool,
    pub order_id: i64,
    pub transaction_id: i64,
    pub charged_amount: f64,
    pub certificates: Vec<SslPurchasedCertificate>,
}

impl FromXml for SslCreateResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            is_success: node.attr_bool("IsSuccess")?,
            order_id: node.attr_num("OrderId")?,
            transaction_id: node.attr_num("TransactionId")?,
            charged_amount: node.attr_num("ChargedAmount")?,
            certificates: node.list("SSLCertificate")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslPurchasedCertificate {
    pub certificate_id: i64,
    pub created: Option<DateTime<FixedOffset>>,
    pub ssl_type: String,
    pub years: u32,
    pub status: String,
}

impl FromXml for SslPurchasedCertificate {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            certificate_id: node.attr_num("CertificateID")?,
            created: node.attr_date("Created")?,
            ssl_type: node.attr_string("SSLType"),
            years: node.attr_num("Years")?,
            status: node.attr_string("Status"),
        })
    }
}

// ============ ssl.activate ============

/// Domain-control validation method for `ssl.activate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DcValidation {
    /// Approver email, the provider default; no flag is sent.
    #[default]
    Email,
    /// Sends `HTTPDCValidation=true`.
    Http,
    /// Sends `DNSDCValidation=true`.
    Dns,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslActivateParams {
    pub certificate_id: i64,
    pub csr: String,
    pub admin_email_address: String,
    /// e.g. `nginx`, `apacheopenssl`.
    pub web_server_type: String,
    pub validation: DcValidation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslActivateResult {
    pub id: i64,
    pub is_success: bool,
    pub http_dc_validation: DcValidationDetails,
    pub dns_dc_validation: DcValidationDetails,
}

impl FromXml for SslActivateResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            id: node.attr_num("ID")?,
            is_success: node.attr_bool("IsSuccess")?,
            http_dc_validation: node.one("HttpDCValidation")?,
            dns_dc_validation: node.one("DNSDCValidation")?,
        })
    }
}

/// What to publish for HTTP (`file_name`/`file_content`) or DNS
/// (`host_name`/`target`) validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcValidationDetails {
    pub value_available: bool,
    pub domain: String,
    pub file_name: String,
    pub file_content: String,
    pub host_name: String,
    pub target: String,
}

impl FromXml for DcValidationDetails {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let value_available = node.attr_bool("ValueAvailable")?;
        let Some(dns) = node.child("DNS") else {
            return Ok(Self {
                value_available,
                ..Self::default()
            });
        };
        Ok(Self {
            value_available,
            domain: dns.attr_string("domain"),
            file_name: dns.child_text("FileName"),
            file_content: dns.child_text("FileContent"),
            host_name: dns.child_text("HostName"),
            target: dns.child_text("Target"),
        })
    }
}

// ============ ssl.getInfo ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslInfo {
    pub status: String,
    pub status_description: String,
    pub ssl_type: String,
    pub issued_on: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub activation_expire_date: Option<DateTime<FixedOffset>>,
    pub order_id: i64,
    pub replaced_by: i64,
    pub sans_count: u32,
    pub details: SslCertificateDetails,
    pub provider: SslProvider,
}

impl FromXml for SslInfo {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            status: node.attr_string("Status"),
            status_description: node.attr_string("StatusDescription"),
            ssl_type: node.attr_string("Type"),
            issued_on: node.attr_date("IssuedOn")?,
            expires: node.attr_date("Expires")?,
            activation_expire_date: node.attr_date("ActivationExpireDate")?,
            order_id: node.attr_num("OrderId")?,
            replaced_by: node.attr_num("ReplacedBy")?,
            sans_count: node.attr_num("SANSCount")?,
            details: node.one("CertificateDetails")?,
            provider: node.one("Provider")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificateDetails {
    pub csr: String,
    pub approver_email: String,
    pub common_name: String,
    pub administrator_name: String,
    pub administrator_email: String,
    pub certificates: SslCertificateBundle,
}

impl FromXml for SslCertificateDetails {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            csr: node.child_text("CSR"),
            approver_email: node.child_text("ApproverEmail"),
            common_name: node.child_text("CommonName"),
            administrator_name: node.child_text("AdministratorName"),
            administrator_email: node.child_text("AdministratorEmail"),
            certificates: node.one("Certificates")?,
        })
    }
}

/// PEM certificates returned when `Returncertificate=true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificateBundle {
    pub certificate_returned: bool,
    pub return_type: String,
    pub certificates: Vec<String>,
    pub ca_certificates: Vec<CaCertificate>,
}

impl FromXml for SslCertificateBundle {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let ca_certificates = match node.child("CaCertificates") {
            Some(ca) => ca.list("Certificate")?,
            None => Vec::new(),
        };
        Ok(Self {
            certificate_returned: node.attr_bool("CertificateReturned")?,
            return_type: node.attr_string("ReturnType"),
            certificates: node.texts("Certificate"),
            ca_certificates,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaCertificate {
    /// e.g. `INTERMEDIATE`.
    pub cert_type: String,
    pub certificate: String,
}

impl FromXml for CaCertificate {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            cert_type: node.attr_string("Type"),
            certificate: node.child_text("Certificate"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslProvider {
    pub order_id: String,
    pub name: String,
}

impl FromXml for SslProvider {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            order_id: node.child_text("OrderID"),
            name: node.child_text("Name"),
        })
    }
}

// ============ approver emails ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproverEmailList {
    pub domain: String,
    pub domain_emails: Vec<String>,
    pub generic_emails: Vec<String>,
    pub manual_emails: Vec<String>,
}

impl FromXml for ApproverEmailList {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let emails = |group: &str| {
            node.child(group)
                .map(|g| g.texts("email"))
                .unwrap_or_default()
        };
        Ok(Self {
            domain: node.attr_string("Domain"),
            domain_emails: emails("Domainemails"),
            generic_emails: emails("Genericemails"),
            manual_emails: emails("Manualemails"),
        })
    }
}

/// `ssl.resendApproverEmail` outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslResendResult {
    pub id: i64,
    pub is_success: bool,
}

impl FromXml for SslResendResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            id: node.attr_num("ID")?,
            is_success: node.attr_bool("IsSuccess")?,
        })
    }
}
