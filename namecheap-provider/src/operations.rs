//! Operation registry.
//!
//! One descriptor per provider command: HTTP method, declared fields, the
//! result path under `CommandResponse` and how the selected elements decode.
//! Every façade method dispatches through one of these.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::request::{Field, Method};
use crate::types::{
    ApproverEmailList, Balances, DnsHosts, DnsSetHostsResult, DnsUpdateResult, Domain, DomainCheck,
    DomainCreateResult, DomainInfo, DomainList, DomainRenewResult, DomainUpdateResult,
    NameserverInfo, NameserverResult, Paging, ProductType, RegistrarLockStatus, SslActivateResult,
    SslCertificate, SslCreateResult, SslInfo, SslResendResult, Tld, WhoisguardEntry,
    WhoisguardRenewResult, WhoisguardToggleResult,
};
use crate::xml::{FromXml, XmlNode};

/// Elements found at an operation's result path, plus the envelope they
/// came from.
#[derive(Debug, Clone)]
pub struct Selection<'a, 'input> {
    pub nodes: Vec<XmlNode<'a, 'input>>,
    pub envelope: Envelope<'a, 'input>,
}

/// Turns a selection into the operation's result.
pub type Decode<R> = fn(&Selection<'_, '_>) -> Result<R>;

/// Static description of one provider command.
#[derive(Debug)]
pub struct Operation<R> {
    pub command: &'static str,
    pub method: Method,
    pub fields: &'static [Field],
    /// Path under `CommandResponse`; the last step may match many siblings.
    pub result_path: &'static [&'static str],
    pub decode: Decode<R>,
}

impl<R> Operation<R> {
    /// Whether the registrant profile is expanded into this request.
    pub fn needs_contacts(&self) -> bool {
        self.fields.contains(&Field::Contact)
    }
}

// ============ Decode hooks ============

/// First selected element, or the zero value when there is none.
pub fn one<T: FromXml + Default>(sel: &Selection<'_, '_>) -> Result<T> {
    sel.nodes
        .first()
        .map_or_else(|| Ok(T::default()), T::from_xml)
}

/// First selected element, or `None` when the result node is absent.
pub fn optional<T: FromXml>(sel: &Selection<'_, '_>) -> Result<Option<T>> {
    sel.nodes.first().map(T::from_xml).transpose()
}

/// Every selected element, in document order.
pub fn many<T: FromXml>(sel: &Selection<'_, '_>) -> Result<Vec<T>> {
    sel.nodes.iter().map(T::from_xml).collect()
}

fn domain_list(sel: &Selection<'_, '_>) -> Result<DomainList> {
    let paging = match sel.envelope.select(&["Paging"]).first() {
        Some(node) => Paging::from_xml(node)?,
        None => Paging::default(),
    };
    Ok(DomainList {
        domains: many::<Domain>(sel)?,
        paging,
    })
}

// ============ domains ============

pub const DOMAINS_GET_LIST: Operation<DomainList> = Operation {
    command: "namecheap.domains.getList",
    method: Method::Post,
    fields: &[
        Field::Required("PageSize"),
        Field::Optional("ListType"),
        Field::Optional("SearchTerm"),
        Field::Optional("Page"),
        Field::Optional("SortBy"),
    ],
    result_path: &["DomainGetListResult", "Domain"],
    decode: domain_list,
};

pub const DOMAINS_GET_INFO: Operation<DomainInfo> = Operation {
    command: "namecheap.domains.getInfo",
    method: Method::Post,
    fields: &[Field::Required("DomainName")],
    result_path: &["DomainGetInfoResult"],
    decode: one,
};

pub const DOMAINS_CHECK: Operation<Vec<DomainCheck>> = Operation {
    command: "namecheap.domains.check",
    method: Method::Post,
    fields: &[Field::Required("DomainList")],
    result_path: &["DomainCheckResult"],
    decode: many,
};

pub const DOMAINS_GET_TLD_LIST: Operation<Vec<Tld>> = Operation {
    command: "namecheap.domains.getTldList",
    method: Method::Post,
    fields: &[],
    result_path: &["Tlds", "Tld"],
    decode: many,
};

pub const DOMAINS_CREATE: Operation<DomainCreateResult> = Operation {
    command: "namecheap.domains.create",
    method: Method::Post,
    fields: &[
        Field::Required("DomainName"),
        Field::Required("Years"),
        Field::Optional("AddFreeWhoisguard"),
        Field::Optional("WGEnabled"),
        Field::Optional("Nameservers"),
        Field::Contact,
    ],
    result_path: &["DomainCreateResult"],
    decode: one,
};

pub const DOMAINS_RENEW: Operation<DomainRenewResult> = Operation {
    command: "namecheap.domains.renew",
    method: Method::Post,
    fields: &[Field::Required("DomainName"), Field::Required("Years")],
    result_path: &["DomainRenewResult"],
    decode: one,
};

pub const DOMAINS_SET_CONTACTS: Operation<DomainUpdateResult> = Operation {
    command: "namecheap.domains.setContacts",
    method: Method::Post,
    fields: &[Field::Required("DomainName"), Field::Contact],
    result_path: &["DomainSetContactResult"],
    decode: one,
};

pub const DOMAINS_GET_REGISTRAR_LOCK: Operation<RegistrarLockStatus> = Operation {
    command: "namecheap.domains.getRegistrarLock",
    method: Method::Post,
    fields: &[Field::Required("DomainName")],
    result_path: &["DomainGetRegistrarLockResult"],
    decode: one,
};

pub const DOMAINS_SET_REGISTRAR_LOCK: Operation<DomainUpdateResult> = Operation {
    command: "namecheap.domains.setRegistrarLock",
    method: Method::Post,
    fields: &[Field::Required("DomainName"), Field::Optional("LockAction")],
    result_path: &["DomainSetRegistrarLockResult"],
    decode: one,
};

// ============ domains.dns ============

pub const DNS_GET_HOSTS: Operation<DnsHosts> = Operation {
    command: "namecheap.domains.dns.getHosts",
    method: Method::Post,
    fields: &[Field::Required("SLD"), Field::Required("TLD")],
    result_path: &["DomainDNSGetHostsResult"],
    decode: one,
};

pub const DNS_SET_HOSTS: Operation<DnsSetHostsResult> = Operation {
    command: "namecheap.domains.dns.setHosts",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Indexed("HostName"),
        Field::Indexed("RecordType"),
        Field::Indexed("Address"),
        Field::Indexed("MXPref"),
        Field::Indexed("TTL"),
    ],
    result_path: &["DomainDNSSetHostsResult"],
    decode: one,
};

pub const DNS_SET_CUSTOM: Operation<DnsUpdateResult> = Operation {
    command: "namecheap.domains.dns.setCustom",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Required("Nameservers"),
    ],
    result_path: &["DomainDNSSetCustomResult"],
    decode: one,
};

pub const DNS_SET_DEFAULT: Operation<DnsUpdateResult> = Operation {
    command: "namecheap.domains.dns.setDefault",
    method: Method::Post,
    fields: &[Field::Required("SLD"), Field::Required("TLD")],
    result_path: &["DomainDNSSetDefaultResult"],
    decode: one,
};

// ============ domains.ns ============

pub const NS_CREATE: Operation<NameserverResult> = Operation {
    command: "namecheap.domains.ns.create",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Required("Nameserver"),
        Field::Required("IP"),
    ],
    result_path: &["DomainNSCreateResult"],
    decode: one,
};

pub const NS_DELETE: Operation<NameserverResult> = Operation {
    command: "namecheap.domains.ns.delete",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Required("Nameserver"),
    ],
    result_path: &["DomainNSDeleteResult"],
    decode: one,
};

pub const NS_GET_INFO: Operation<NameserverInfo> = Operation {
    command: "namecheap.domains.ns.getInfo",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Required("Nameserver"),
    ],
    result_path: &["DomainNSInfoResult"],
    decode: one,
};

pub const NS_UPDATE: Operation<NameserverResult> = Operation {
    command: "namecheap.domains.ns.update",
    method: Method::Post,
    fields: &[
        Field::Required("SLD"),
        Field::Required("TLD"),
        Field::Required("Nameserver"),
        Field::Required("OldIP"),
        Field::Required("IP"),
    ],
    result_path: &["DomainNSUpdateResult"],
    decode: one,
};

// ============ ssl ============

pub const SSL_GET_LIST: Operation<Vec<SslCertificate>> = Operation {
    command: "namecheap.ssl.getList",
    method: Method::Post,
    fields: &[],
    result_path: &["SSLListResult", "SSL"],
    decode: many,
};

pub const SSL_CREATE: Operation<SslCreateResult> = Operation {
    command: "namecheap.ssl.create",
    method: Method::Post,
    fields: &[Field::Required("Type"), Field::Required("Years")],
    result_path: &["SSLCreateResult"],
    decode: one,
};

pub const SSL_ACTIVATE: Operation<SslActivateResult> = Operation {
    command: "namecheap.ssl.activate",
    method: Method::Post,
    fields: &[
        Field::Required("CertificateID"),
        Field::Required("CSR"),
        Field::Required("AdminEmailAddress"),
        Field::Optional("WebServerType"),
        Field::Optional("HTTPDCValidation"),
        Field::Optional("DNSDCValidation"),
    ],
    result_path: &["SSLActivateResult"],
    decode: one,
};

pub const SSL_GET_INFO: Operation<SslInfo> = Operation {
    command: "namecheap.ssl.getInfo",
    method: Method::Get,
    fields: &[
        Field::Required("CertificateID"),
        Field::Required("Returncertificate"),
        Field::Required("Returntype"),
    ],
    result_path: &["SSLGetInfoResult"],
    decode: one,
};

pub const SSL_GET_APPROVER_EMAIL_LIST: Operation<ApproverEmailList> = Operation {
    command: "namecheap.ssl.getApproverEmailList",
    method: Method::Post,
    fields: &[
        Field::Required("DomainName"),
        Field::Required("CertificateType"),
    ],
    result_path: &["GetApproverEmailListResult"],
    decode: one,
};

pub const SSL_RESEND_APPROVER_EMAIL: Operation<SslResendResult> = Operation {
    command: "namecheap.ssl.resendApproverEmail",
    method: Method::Get,
    fields: &[Field::Required("CertificateID")],
    result_path: &["SSLResendApproverEmailResult"],
    decode: one,
};

// ============ whoisguard ============

pub const WHOISGUARD_GET_LIST: Operation<Vec<WhoisguardEntry>> = Operation {
    command: "namecheap.whoisguard.getList",
    method: Method::Post,
    fields: &[Field::Required("PageSize")],
    result_path: &["WhoisguardGetListResult", "Whoisguard"],
    decode: many,
};

pub const WHOISGUARD_ENABLE: Operation<Option<WhoisguardToggleResult>> = Operation {
    command: "namecheap.whoisguard.enable",
    method: Method::Post,
    fields: &[
        Field::Required("WhoisguardID"),
        Field::Required("ForwardedToEmail"),
    ],
    result_path: &["WhoisguardEnableResult"],
    decode: optional,
};

pub const WHOISGUARD_DISABLE: Operation<Option<WhoisguardToggleResult>> = Operation {
    command: "namecheap.whoisguard.disable",
    method: Method::Post,
    fields: &[Field::Required("WhoisguardID")],
    result_path: &["WhoisguardDisableResult"],
    decode: optional,
};

pub const WHOISGUARD_RENEW: Operation<WhoisguardRenewResult> = Operation {
    command: "namecheap.whoisguard.renew",
    method: Method::Post,
    fields: &[Field::Required("WhoisguardID"), Field::Required("Years")],
    result_path: &["WhoisguardRenewResult"],
    decode: one,
};

// ============ users ============

pub const USERS_GET_PRICING: Operation<Vec<ProductType>> = Operation {
    command: "namecheap.users.getPricing",
    method: Method::Post,
    fields: &[
        Field::Required("ProductType"),
        Field::Optional("ProductCategory"),
        Field::Optional("ActionName"),
        Field::Optional("ProductName"),
        Field::Optional("PromotionCode"),
    ],
    result_path: &["UserGetPricingResult", "ProductType"],
    decode: many,
};

pub const USERS_GET_BALANCES: Operation<Balances> = Operation {
    command: "namecheap.users.getBalances",
    method: Method::Post,
    fields: &[],
    result_path: &["UserGetBalancesResult"],
    decode: one,
};
