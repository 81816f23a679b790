use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

/// A host record, as returned by `dns.getHosts` and sent to `dns.setHosts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    /// Ignored when setting hosts.
    pub id: i64,
    pub name: String,
    /// `A`, `AAAA`, `CNAME`, `MX`, `TXT`, `URL`, ...
    pub record_type: String,
    pub address: String,
    /// Only sent when set.
    pub mx_pref: Option<u32>,
    pub ttl: u32,
}

impl HostRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        address: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            address: address.into(),
            ttl,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mx_pref(mut self, pref: u32) -> Self {
        self.mx_pref = Some(pref);
        self
    }
}

impl FromXml for HostRecord {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let mx_pref = match node.attr("MXPref") {
            "" => None,
            _ => Some(node.attr_num("MXPref")?),
        };
        Ok(Self {
            id: node.attr_num("HostId")?,
            name: node.attr_string("Name"),
            record_type: node.attr_string("Type"),
            address: node.attr_string("Address"),
            mx_pref,
            ttl: node.attr_num("TTL")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsHosts {
    pub domain: String,
    pub is_using_our_dns: bool,
    pub hosts: Vec<HostRecord>,
}

impl FromXml for DnsHosts {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            is_using_our_dns: node.attr_bool("IsUsingOurDNS")?,
            hosts: node.list("Host")?,
        })
    }
}

/// `dns.setHosts` outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSetHostsResult {
    pub domain: String,
    pub is_success: bool,
}

impl FromXml for DnsSetHostsResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            is_success: node.attr_bool("IsSuccess")?,
        })
    }
}

/// `dns.setCustom` / `dns.setDefault` outcome.
///
/// The flag attribute is `Update` for the former and `Updated` for the
/// latter; both land in `updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsUpdateResult {
    pub domain: String,
    pub updated: bool,
}

impl FromXml for DnsUpdateResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let flag = if node.attr("Updated").is_empty() {
            "Update"
        } else {
            "Updated"
        };
        Ok(Self {
            domain: node.attr_string("Domain"),
            updated: node.attr_bool(flag)?,
        })
    }
}
