use serde::{Deserialize, Serialize};

/// Contact profile sent with `domains.create` and `domains.setContacts`.
///
/// The same profile is used for the registrant, tech, admin and billing
/// contacts. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    pub organization_name: String,
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    /// Two-letter country code.
    pub country: String,
    /// `+NNN.NNNNNNNNNN`
    pub phone: String,
    pub email_address: String,
}
