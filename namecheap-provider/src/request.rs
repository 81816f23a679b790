//! Request parameter building and encoding.

use crate::config::Credentials;
use crate::error::{NamecheapError, Result};
use crate::types::Registrant;

/// HTTP method an operation is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field an operation declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Must be present before dispatch.
    Required(&'static str),
    /// Sent only when supplied.
    Optional(&'static str),
    /// Repeated as `{name}1`, `{name}2`, ...
    Indexed(&'static str),
    /// Contact block expanded under every entry of [`CONTACT_PREFIXES`].
    Contact,
}

impl Field {
    /// Whether a parameter called `param` is covered by this declaration.
    ///
    /// Indexed fields match `{stem}{n}` for a decimal `n`; the contact block
    /// matches any name under a contact prefix.
    pub fn declares(self, param: &str) -> bool {
        match self {
            Self::Required(name) | Self::Optional(name) => param == name,
            Self::Indexed(stem) => param.strip_prefix(stem).is_some_and(|index| {
                !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())
            }),
            Self::Contact => CONTACT_PREFIXES
                .iter()
                .any(|prefix| param.len() > prefix.len() && param.starts_with(prefix)),
        }
    }
}

/// Contact-block prefixes; the registrant profile is sent under each.
pub const CONTACT_PREFIXES: [&str; 4] = ["Registrant", "Tech", "Admin", "AuxBilling"];

/// Ordered name → value request parameters.
///
/// Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    /// Sets the value only when present and non-empty.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.set(name, v);
        }
        self
    }

    pub fn set_num<N: std::fmt::Display>(&mut self, name: &str, value: N) -> &mut Self {
        self.set(name, value.to_string())
    }

    /// Comma-joined list; an empty list is omitted.
    pub fn set_list<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            self.set(name, joined);
        }
        self
    }

    /// Sends `yes` when the flag is set, nothing otherwise.
    pub fn set_flag(&mut self, name: &str, flag: bool) -> &mut Self {
        if flag {
            self.set(name, "yes");
        }
        self
    }

    /// `{name}{index}` with a 1-based index.
    pub fn set_indexed(&mut self, name: &str, index: usize, value: impl Into<String>) -> &mut Self {
        self.set(format!("{name}{index}"), value)
    }

    /// Expands the registrant profile under every contact prefix.
    pub fn set_contacts(&mut self, registrant: &Registrant) -> &mut Self {
        for prefix in CONTACT_PREFIXES {
            let mut put = |field: &str, value: &str| {
                if !value.is_empty() {
                    self.set(format!("{prefix}{field}"), value);
                }
            };
            put("OrganizationName", &registrant.organization_name);
            put("JobTitle", &registrant.job_title);
            put("FirstName", &registrant.first_name);
            put("LastName", &registrant.last_name);
            put("Address1", &registrant.address1);
            put("Address2", &registrant.address2);
            put("City", &registrant.city);
            put("StateProvince", &registrant.state_province);
            put("PostalCode", &registrant.postal_code);
            put("Country", &registrant.country);
            put("Phone", &registrant.phone);
            put("EmailAddress", &registrant.email_address);
        }
        self
    }

    /// Merges the fixed credential fields and the command name.
    pub fn with_credentials(mut self, credentials: &Credentials, command: &str) -> Self {
        self.set("ApiUser", credentials.api_user.as_str())
            .set("ApiKey", credentials.api_key.as_str())
            .set("UserName", credentials.user_name.as_str())
            .set("ClientIp", credentials.client_ip.as_str())
            .set("Command", command);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Fails with `Precondition` for the first declared required field that
    /// was not supplied.
    pub fn check_required(&self, command: &str, fields: &[Field]) -> Result<()> {
        for field in fields {
            if let Field::Required(name) = field
                && !self.contains(name)
            {
                return Err(NamecheapError::precondition(format!(
                    "{command}: missing required field {name}"
                )));
            }
        }
        Ok(())
    }

    /// Names of supplied parameters that no field in `fields` declares.
    pub fn undeclared<'a>(&'a self, fields: &[Field]) -> Vec<&'a str> {
        self.iter()
            .map(|(name, _)| name)
            .filter(|name| !fields.iter().any(|f| f.declares(name)))
            .collect()
    }

    /// `application/x-www-form-urlencoded` payload.
    ///
    /// Commas stay literal: the provider splits list fields on `,` and does
    /// not accept `%2C`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(n, v)| format!("{}={}", encode_component(n), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_component(s: &str) -> String {
    urlencoding::encode(s).replace("%2C", ",")
}
