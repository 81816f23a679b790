use crate::client::NamecheapClient;
use crate::error::Result;
use crate::operations::{NS_CREATE, NS_DELETE, NS_GET_INFO, NS_UPDATE};
use crate::request::Params;
use crate::types::{NameserverInfo, NameserverResult};

fn ns_params(sld: &str, tld: &str, nameserver: &str) -> Params {
    let mut params = Params::new();
    params
        .set("SLD", sld)
        .set("TLD", tld)
        .set("Nameserver", nameserver);
    params
}

impl NamecheapClient {
    /// `namecheap.domains.ns.create`: registers a glue nameserver.
    pub async fn ns_create(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
        ip: &str,
    ) -> Result<NameserverResult> {
        let mut params = ns_params(sld, tld, nameserver);
        params.set("IP", ip);
        self.dispatch(&NS_CREATE, params).await
    }

    /// `namecheap.domains.ns.delete`
    pub async fn ns_delete(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
    ) -> Result<NameserverResult> {
        self.dispatch(&NS_DELETE, ns_params(sld, tld, nameserver))
            .await
    }

    /// `namecheap.domains.ns.getInfo`
    pub async fn ns_get_info(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
    ) -> Result<NameserverInfo> {
        self.dispatch(&NS_GET_INFO, ns_params(sld, tld, nameserver))
            .await
    }

    /// `namecheap.domains.ns.update`: moves a nameserver from `old_ip` to `ip`.
    pub async fn ns_update(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
        old_ip: &str,
        ip: &str,
    ) -> Result<NameserverResult> {
        let mut params = ns_params(sld, tld, nameserver);
        params.set("OldIP", old_ip).set("IP", ip);
        self.dispatch(&NS_UPDATE, params).await
    }
}
