//! `ApiResponse` envelope decoding.

use chrono::FixedOffset;
use roxmltree::Document;

use crate::error::{ApiError, NamecheapError, Result};
use crate::utils::datetime::{parse_gmt_offset, utc};
use crate::xml::XmlNode;

const STATUS_ERROR: &str = "ERROR";

/// Parses a response body into an XML document.
///
/// Leading whitespace before the declaration is tolerated.
pub fn parse_document(body: &[u8]) -> Result<Document<'_>> {
    let text = std::str::from_utf8(body)
        .map_err(|e| NamecheapError::decode(format!("response is not UTF-8: {e}")))?;
    Document::parse(text.trim_start())
        .map_err(|e| NamecheapError::decode(format!("malformed XML: {e}")))
}

/// A successful envelope.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a, 'input> {
    pub status: &'a str,
    pub offset: FixedOffset,
    /// `CommandResponse`, when present.
    pub response: Option<XmlNode<'a, 'input>>,
}

impl<'a, 'input> Envelope<'a, 'input> {
    /// Reads the envelope; `Status="ERROR"` becomes a `Provider` error.
    pub fn read(doc: &'a Document<'input>) -> Result<Self> {
        let root = XmlNode::new(doc.root_element(), utc());

        let status = root.attr("Status");
        if status.is_empty() {
            return Err(NamecheapError::decode(format!(
                "<{}> has no Status attribute",
                root.name()
            )));
        }

        if status.eq_ignore_ascii_case(STATUS_ERROR) {
            let errors = root
                .path(&["Errors"])
                .map(|errs| {
                    errs.children("Error")
                        .map(|e| ApiError::new(e.attr("Number"), e.text()))
                        .collect()
                })
                .unwrap_or_default();
            return Err(NamecheapError::Provider { errors });
        }

        let offset = match root.child("GMTTimeDifference") {
            Some(node) => parse_gmt_offset(&node.text())?,
            None => utc(),
        };

        let response = doc
            .root_element()
            .children()
            .find(|n| {
                n.is_element() && n.tag_name().name().eq_ignore_ascii_case("CommandResponse")
            })
            .map(|n| XmlNode::new(n, offset));

        Ok(Self {
            status,
            offset,
            response,
        })
    }

    /// Elements at `path` under `CommandResponse`.
    pub fn select(&self, path: &[&str]) -> Vec<XmlNode<'a, 'input>> {
        self.response.map(|r| r.select(path)).unwrap_or_default()
    }
}
