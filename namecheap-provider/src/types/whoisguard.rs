use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

/// Page size always sent by `whoisguard.getList`.
pub const WHOISGUARD_LIST_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisguardEntry {
    pub id: i64,
    /// Empty for unassigned subscriptions.
    pub domain_name: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    /// `unused`, `enabled`, `disabled`, ...
    pub status: String,
}

impl FromXml for WhoisguardEntry {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            id: node.attr_num("ID")?,
            domain_name: node.attr_string("DomainName"),
            created: node.attr_date("Created")?,
            expires: node.attr_date("Expires")?,
            status: node.attr_string("Status"),
        })
    }
}

/// `whoisguard.enable` / `whoisguard.disable` outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisguardToggleResult {
    pub domain_name: String,
    pub is_success: bool,
}

impl FromXml for WhoisguardToggleResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain_name: node.attr_string("DomainName"),
            is_success: node.attr_bool("IsSuccess")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisguardRenewResult {
    pub whoisguard_id: i64,
    pub years: u32,
    pub renewed: bool,
    pub charged_amount: f64,
    pub order_id: i64,
    pub transaction_id: i64,
}

impl FromXml for WhoisguardRenewResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            whoisguard_id: node.attr_num("WhoisguardId")?,
            years: node.attr_num("Years")?,
            renewed: node.attr_bool("Renew")?,
            charged_amount: node.attr_num("ChargedAmount")?,
            order_id: node.attr_num("OrderId")?,
            transaction_id: node.attr_num("TransactionId")?,
        })
    }
}
