use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

// ============ domains.getList ============

/// Default and maximum page size accepted by `domains.getList`.
pub const DOMAIN_LIST_PAGE_SIZE: u32 = 100;

/// Filters for `domains.getList`.
///
/// `page_size` is always sent; everything else only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainListQuery {
    /// `ALL`, `EXPIRING` or `EXPIRED`.
    pub list_type: Option<String>,
    pub search_term: Option<String>,
    /// 1-indexed.
    pub page: Option<u32>,
    pub page_size: u32,
    /// e.g. `NAME`, `EXPIREDATE_DESC`.
    pub sort_by: Option<String>,
}

impl Default for DomainListQuery {
    fn default() -> Self {
        Self {
            list_type: None,
            search_term: None,
            page: None,
            page_size: DOMAIN_LIST_PAGE_SIZE,
            sort_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub user: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub is_expired: bool,
    pub is_locked: bool,
    pub auto_renew: bool,
    /// Raw WhoisGuard state, e.g. `ENABLED`, `NOTPRESENT`.
    pub whois_guard: String,
}

impl FromXml for Domain {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            id: node.attr_num("ID")?,
            name: node.attr_string("Name"),
            user: node.attr_string("User"),
            created: node.attr_date("Created")?,
            expires: node.attr_date("Expires")?,
            is_expired: node.attr_bool("IsExpired")?,
            is_locked: node.attr_bool("IsLocked")?,
            auto_renew: node.attr_bool("AutoRenew")?,
            whois_guard: node.attr_string("WhoisGuard"),
        })
    }
}

/// Paging block returned next to the domain list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub total_items: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl FromXml for Paging {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            total_items: node.child_num("TotalItems")?,
            current_page: node.child_num("CurrentPage")?,
            page_size: node.child_num("PageSize")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainList {
    pub domains: Vec<Domain>,
    pub paging: Paging,
}

// ============ domains.getInfo ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub status: String,
    pub is_owner: bool,
    pub created: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub is_expired: bool,
    pub is_locked: bool,
    pub auto_renew: bool,
    pub dns_details: DnsDetails,
    pub whoisguard: WhoisguardDetails,
}

impl FromXml for DomainInfo {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let details = node.child("DomainDetails");
        let detail_date = |name: &str| match details {
            Some(d) => d.child_date(name),
            None => Ok(None),
        };

        Ok(Self {
            id: node.attr_num("ID")?,
            name: node.attr_string("DomainName"),
            owner: node.attr_string("OwnerName"),
            status: node.attr_string("Status"),
            is_owner: node.attr_bool("IsOwner")?,
            created: detail_date("CreatedDate")?,
            expires: detail_date("ExpiredDate")?,
            is_expired: node.attr_bool("IsExpired")?,
            is_locked: node.attr_bool("IsLocked")?,
            auto_renew: node.attr_bool("AutoRenew")?,
            dns_details: node.one("DnsDetails")?,
            whoisguard: node.one("Whoisguard")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDetails {
    /// `FREE`, `CUSTOM`, ...
    pub provider_type: String,
    pub is_using_our_dns: bool,
    pub nameservers: Vec<String>,
}

impl FromXml for DnsDetails {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            provider_type: node.attr_string("ProviderType"),
            is_using_our_dns: node.attr_bool("IsUsingOurDNS")?,
            nameservers: node.texts("Nameserver"),
        })
    }
}

/// WhoisGuard block of `domains.getInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisguardDetails {
    pub enabled: bool,
    pub id: i64,
    pub expired_date: Option<DateTime<FixedOffset>>,
    pub email_details: WhoisguardEmailDetails,
}

impl FromXml for WhoisguardDetails {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            enabled: node.attr_is_true("Enabled"),
            id: node.child_num("ID")?,
            expired_date: node.child_date("ExpiredDate")?,
            email_details: node.one("EmailDetails")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisguardEmailDetails {
    pub email: String,
    pub forwarded_to: String,
    pub last_auto_email_change_date: Option<DateTime<FixedOffset>>,
    pub auto_email_change_frequency_days: u32,
}

impl FromXml for WhoisguardEmailDetails {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            email: node.attr_string("WhoisGuardEmail"),
            forwarded_to: node.attr_string("ForwardedTo"),
            last_auto_email_change_date: node.attr_date("LastAutoEmailChangeDate")?,
            auto_email_change_frequency_days: node.attr_num("AutoEmailChangeFrequencyDays")?,
        })
    }
}

// ============ domains.check / getTldList ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCheck {
    pub domain: String,
    pub available: bool,
    pub is_premium_name: bool,
    pub premium_registration_price: f64,
    pub premium_renewal_price: f64,
    pub premium_restore_price: f64,
    pub premium_transfer_price: f64,
    pub icann_fee: f64,
}

impl FromXml for DomainCheck {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            available: node.attr_bool("Available")?,
            is_premium_name: node.attr_bool("IsPremiumName")?,
            premium_registration_price: node.attr_num("PremiumRegistrationPrice")?,
            premium_renewal_price: node.attr_num("PremiumRenewalPrice")?,
            premium_restore_price: node.attr_num("PremiumRestorePrice")?,
            premium_transfer_price: node.attr_num("PremiumTransferPrice")?,
            icann_fee: node.attr_num("IcannFee")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tld {
    pub name: String,
}

impl FromXml for Tld {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            name: node.attr_string("Name"),
        })
    }
}

// ============ domains.create / renew ============

/// Extras for `domains.create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCreateOptions {
    pub add_free_whoisguard: bool,
    pub wg_enabled: bool,
    /// Custom nameservers; provider defaults when empty.
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCreateResult {
    pub domain: String,
    pub registered: bool,
    pub charged_amount: f64,
    pub domain_id: i64,
    pub order_id: i64,
    pub transaction_id: i64,
    pub whoisguard_enable: bool,
    pub non_real_time_domain: bool,
}

impl FromXml for DomainCreateResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            registered: node.attr_bool("Registered")?,
            charged_amount: node.attr_num("ChargedAmount")?,
            domain_id: node.attr_num("DomainID")?,
            order_id: node.attr_num("OrderID")?,
            transaction_id: node.attr_num("TransactionID")?,
            whoisguard_enable: node.attr_bool("WhoisguardEnable")?,
            non_real_time_domain: node.attr_bool("NonRealTimeDomain")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRenewResult {
    pub domain_id: i64,
    pub name: String,
    pub renewed: bool,
    pub charged_amount: f64,
    pub order_id: i64,
    pub transaction_id: i64,
    pub expire_date: Option<DateTime<FixedOffset>>,
}

impl FromXml for DomainRenewResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let expire_date = match node.child("DomainDetails") {
            Some(d) => d.child_date("ExpiredDate")?,
            None => None,
        };
        Ok(Self {
            domain_id: node.attr_num("DomainID")?,
            name: node.attr_string("DomainName"),
            renewed: node.attr_bool("Renew")?,
            charged_amount: node.attr_num("ChargedAmount")?,
            order_id: node.attr_num("OrderID")?,
            transaction_id: node.attr_num("TransactionID")?,
            expire_date,
        })
    }
}

// ============ contacts / registrar lock ============

/// Shape shared by `setContacts` and `setRegistrarLock`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainUpdateResult {
    pub domain: String,
    pub is_success: bool,
}

impl FromXml for DomainUpdateResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            is_success: node.attr_bool("IsSuccess")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarLockStatus {
    pub domain: String,
    pub is_locked: bool,
}

impl FromXml for RegistrarLockStatus {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            is_locked: node.attr_bool("RegistrarLockStatus")?,
        })
    }
}
