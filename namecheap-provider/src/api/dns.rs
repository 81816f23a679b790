use crate::client::NamecheapClient;
use crate::error::Result;
use crate::operations::{DNS_GET_HOSTS, DNS_SET_CUSTOM, DNS_SET_DEFAULT, DNS_SET_HOSTS};
use crate::request::Params;
use crate::types::{DnsHosts, DnsSetHostsResult, DnsUpdateResult, HostRecord};

fn domain_params(sld: &str, tld: &str) -> Params {
    let mut params = Params::new();
    params.set("SLD", sld).set("TLD", tld);
    params
}

impl NamecheapClient {
    /// `namecheap.domains.dns.getHosts`
    pub async fn dns_get_hosts(&self, sld: &str, tld: &str) -> Result<DnsHosts> {
        self.dispatch(&DNS_GET_HOSTS, domain_params(sld, tld)).await
    }

    /// `namecheap.domains.dns.setHosts`
    ///
    /// Replaces the whole host set. Records are numbered from 1 in the given
    /// order.
    pub async fn dns_set_hosts(
        &self,
        sld: &str,
        tld: &str,
        hosts: &[HostRecord],
    ) -> Result<DnsSetHostsResult> {
        let mut params = domain_params(sld, tld);
        for (i, host) in hosts.iter().enumerate() {
            let n = i + 1;
            params
                .set_indexed("HostName", n, host.name.as_str())
                .set_indexed("RecordType", n, host.record_type.as_str())
                .set_indexed("Address", n, host.address.as_str())
                .set_indexed("TTL", n, host.ttl.to_string());
            if let Some(pref) = host.mx_pref {
                params.set_indexed("MXPref", n, pref.to_string());
            }
        }
        self.dispatch(&DNS_SET_HOSTS, params).await
    }

    /// `namecheap.domains.dns.setCustom`
    pub async fn dns_set_custom<S: AsRef<str>>(
        &self,
        sld: &str,
        tld: &str,
        nameservers: &[S],
    ) -> Result<DnsUpdateResult> {
        let mut params = domain_params(sld, tld);
        params.set_list("Nameservers", nameservers);
        self.dispatch(&DNS_SET_CUSTOM, params).await
    }

    /// `namecheap.domains.dns.setDefault`
    pub async fn dns_set_default(&self, sld: &str, tld: &str) -> Result<DnsUpdateResult> {
        self.dispatch(&DNS_SET_DEFAULT, domain_params(sld, tld)).await
    }
}
