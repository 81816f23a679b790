use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::xml::{FromXml, XmlNode};

/// Outcome of `ns.create`, `ns.delete` and `ns.update`.
///
/// `ip` is only filled by `ns.create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameserverResult {
    pub domain: String,
    pub nameserver: String,
    pub ip: String,
    pub is_success: bool,
}

impl FromXml for NameserverResult {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        Ok(Self {
            domain: node.attr_string("Domain"),
            nameserver: node.attr_string("Nameserver"),
            ip: node.attr_string("IP"),
            is_success: node.attr_bool("IsSuccess")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameserverInfo {
    pub domain: String,
    pub nameserver: String,
    pub ip: String,
    pub statuses: Vec<String>,
}

impl FromXml for NameserverInfo {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self> {
        let statuses = node
            .child("NameserverStatuses")
            .map(|s| s.texts("Status"))
            .unwrap_or_default();
        Ok(Self {
            domain: node.attr_string("Domain"),
            nameserver: node.attr_string("Nameserver"),
            ip: node.attr_string("IP"),
            statuses,
        })
    }
}
