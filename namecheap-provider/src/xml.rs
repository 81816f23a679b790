//! Typed access to provider XML.
//!
//! Element and attribute names are matched case-insensitively: the API is
//! inconsistent (`<host>` vs `<Host>`, `OrderId` vs `OrderID`).

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use roxmltree::Node;

use crate::error::{NamecheapError, Result};
use crate::utils::datetime::parse_date;

/// Conversion from a result element.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode<'_, '_>) -> Result<Self>;
}

/// An element plus the envelope offset its dates are interpreted in.
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a, 'input> {
    node: Node<'a, 'input>,
    offset: FixedOffset,
}

impl<'a, 'input> XmlNode<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>, offset: FixedOffset) -> Self {
        Self { node, offset }
    }

    pub fn name(&self) -> &str {
        self.node.tag_name().name()
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn wrap(&self, node: Node<'a, 'input>) -> Self {
        Self::new(node, self.offset)
    }

    // ============ Navigation ============

    pub fn child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .find(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case(name))
            .map(|n| self.wrap(n))
    }

    pub fn children(&self, name: &'static str) -> impl Iterator<Item = Self> + '_ {
        self.node
            .children()
            .filter(move |n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case(name))
            .map(|n| self.wrap(n))
    }

    /// Follows `path` from this element, first match at each step.
    pub fn path(&self, path: &[&str]) -> Option<Self> {
        path.iter().try_fold(*self, |node, step| node.child(step))
    }

    /// Every element matching the last step of `path`; earlier steps take
    /// the first match. Empty when any step is missing.
    pub fn select(&self, path: &[&str]) -> Vec<Self> {
        let Some((last, parents)) = path.split_last() else {
            return vec![*self];
        };
        let Some(parent) = self.path(parents) else {
            return Vec::new();
        };
        parent
            .node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case(last))
            .map(|n| parent.wrap(n))
            .collect()
    }

    // ============ Attributes ============

    /// Attribute value, `""` when absent.
    pub fn attr(&self, name: &str) -> &'a str {
        self.node
            .attributes()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .map_or("", |a| a.value())
    }

    pub fn attr_string(&self, name: &str) -> String {
        self.attr(name).to_string()
    }

    pub fn attr_bool(&self, name: &str) -> Result<bool> {
        parse_bool(name, self.attr(name))
    }

    /// Lenient flag: `true` only for a case-insensitive `true`/`1`, never an
    /// error. For attributes that mix booleans with other states
    /// (`Enabled="NotAlloted"`).
    pub fn attr_is_true(&self, name: &str) -> bool {
        let raw = self.attr(name).trim();
        raw.eq_ignore_ascii_case("true") || raw == "1"
    }

    pub fn attr_num<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        parse_num(name, self.attr(name))
    }

    pub fn attr_date(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        parse_date(name, self.attr(name), self.offset)
    }

    // ============ Text ============

    /// Concatenated descendant text, trimmed.
    pub fn text(&self) -> String {
        self.node
            .descendants()
            .filter(Node::is_text)
            .filter_map(|n| n.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Text of the first matching child, `""` when absent.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name).map(|c| c.text()).unwrap_or_default()
    }

    pub fn child_num<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        parse_num(name, &self.child_text(name))
    }

    pub fn child_date(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        parse_date(name, &self.child_text(name), self.offset)
    }

    /// Ordered text of every `name` child; empty when there are none.
    pub fn texts(&self, name: &'static str) -> Vec<String> {
        self.children(name).map(|c| c.text()).collect()
    }

    /// Decodes every `name` child.
    pub fn list<T: FromXml>(&self, name: &'static str) -> Result<Vec<T>> {
        self.children(name).map(|c| T::from_xml(&c)).collect()
    }

    /// Decodes the first `name` child, `Default` when absent.
    pub fn one<T: FromXml + Default>(&self, name: &str) -> Result<T> {
        self.child(name)
            .map_or_else(|| Ok(T::default()), |c| T::from_xml(&c))
    }
}

/// `1`/`t`/`true` and `0`/`f`/`false` in any casing; empty is `false`.
pub fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(false);
    }
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(NamecheapError::format(field, raw, "expected a boolean")),
    }
}

/// Empty is the zero value; anything unparseable is a `Format` error.
pub fn parse_num<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|e: T::Err| NamecheapError::format(field, raw, e.to_string()))
}
