use crate::client::NamecheapClient;
use crate::error::Result;
use crate::operations::{
    DOMAINS_CHECK, DOMAINS_CREATE, DOMAINS_GET_INFO, DOMAINS_GET_LIST, DOMAINS_GET_REGISTRAR_LOCK,
    DOMAINS_GET_TLD_LIST, DOMAINS_RENEW, DOMAINS_SET_CONTACTS, DOMAINS_SET_REGISTRAR_LOCK,
};
use crate::request::Params;
use crate::types::{
    DomainCheck, DomainCreateOptions, DomainCreateResult, DomainInfo, DomainList, DomainListQuery,
    DomainRenewResult, DomainUpdateResult, RegistrarLockStatus, Tld,
};

impl NamecheapClient {
    /// `namecheap.domains.getList`
    pub async fn domains_get_list(&self, query: &DomainListQuery) -> Result<DomainList> {
        let mut params = Params::new();
        params
            .set_num("PageSize", query.page_size)
            .set_opt("ListType", query.list_type.as_deref())
            .set_opt("SearchTerm", query.search_term.as_deref())
            .set_opt("SortBy", query.sort_by.as_deref());
        if let Some(page) = query.page {
            params.set_num("Page", page);
        }
        self.dispatch(&DOMAINS_GET_LIST, params).await
    }

    /// `namecheap.domains.getInfo`
    pub async fn domain_get_info(&self, domain_name: &str) -> Result<DomainInfo> {
        let mut params = Params::new();
        params.set("DomainName", domain_name);
        self.dispatch(&DOMAINS_GET_INFO, params).await
    }

    /// `namecheap.domains.check`; one result per name, in provider order.
    pub async fn domains_check<S: AsRef<str>>(
        &self,
        domain_names: &[S],
    ) -> Result<Vec<DomainCheck>> {
        let mut params = Params::new();
        params.set_list("DomainList", domain_names);
        self.dispatch(&DOMAINS_CHECK, params).await
    }

    /// `namecheap.domains.getTldList`
    pub async fn domains_get_tld_list(&self) -> Result<Vec<Tld>> {
        self.dispatch(&DOMAINS_GET_TLD_LIST, Params::new()).await
    }

    /// `namecheap.domains.create`
    ///
    /// Requires a registrant profile (see [`NamecheapClient::with_registrant`]);
    /// without one this fails with `Precondition` and sends nothing.
    pub async fn domain_create(
        &self,
        domain_name: &str,
        years: u32,
        options: &DomainCreateOptions,
    ) -> Result<DomainCreateResult> {
        let mut params = Params::new();
        params
            .set("DomainName", domain_name)
            .set_num("Years", years)
            .set_flag("AddFreeWhoisguard", options.add_free_whoisguard)
            .set_flag("WGEnabled", options.wg_enabled)
            .set_list("Nameservers", &options.nameservers);
        self.dispatch(&DOMAINS_CREATE, params).await
    }

    /// `namecheap.domains.renew`
    pub async fn domain_renew(&self, domain_name: &str, years: u32) -> Result<DomainRenewResult> {
        let mut params = Params::new();
        params.set("DomainName", domain_name).set_num("Years", years);
        self.dispatch(&DOMAINS_RENEW, params).await
    }

    /// `namecheap.domains.setContacts` with the client's registrant profile.
    pub async fn domain_set_contacts(&self, domain_name: &str) -> Result<DomainUpdateResult> {
        let mut params = Params::new();
        params.set("DomainName", domain_name);
        self.dispatch(&DOMAINS_SET_CONTACTS, params).await
    }

    /// `namecheap.domains.getRegistrarLock`
    pub async fn domain_get_registrar_lock(
        &self,
        domain_name: &str,
    ) -> Result<RegistrarLockStatus> {
        let mut params = Params::new();
        params.set("DomainName", domain_name);
        self.dispatch(&DOMAINS_GET_REGISTRAR_LOCK, params).await
    }

    /// `namecheap.domains.setRegistrarLock`
    ///
    /// Unlocking sends `LockAction=UNLOCK`; locking relies on the provider
    /// default.
    pub async fn domain_set_registrar_lock(
        &self,
        domain_name: &str,
        lock: bool,
    ) -> Result<DomainUpdateResult> {
        let mut params = Params::new();
        params.set("DomainName", domain_name);
        if !lock {
            params.set("LockAction", "UNLOCK");
        }
        self.dispatch(&DOMAINS_SET_REGISTRAR_LOCK, params).await
    }
}
