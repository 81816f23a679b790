use crate::client::NamecheapClient;
use crate::error::{NamecheapError, Result};
use crate::operations::{
    Operation, WHOISGUARD_DISABLE, WHOISGUARD_ENABLE, WHOISGUARD_GET_LIST, WHOISGUARD_RENEW,
};
use crate::request::Params;
use crate::types::{
    WHOISGUARD_LIST_PAGE_SIZE, WhoisguardEntry, WhoisguardRenewResult, WhoisguardToggleResult,
};

fn id_params(whoisguard_id: i64) -> Params {
    let mut params = Params::new();
    params.set_num("WhoisguardID", whoisguard_id);
    params
}

impl NamecheapClient {
    /// `namecheap.whoisguard.getList`, first 100 subscriptions.
    pub async fn whoisguard_get_list(&self) -> Result<Vec<WhoisguardEntry>> {
        let mut params = Params::new();
        params.set_num("PageSize", WHOISGUARD_LIST_PAGE_SIZE);
        self.dispatch(&WHOISGUARD_GET_LIST, params).await
    }

    /// `namecheap.whoisguard.enable`, forwarding WHOIS mail to `forwarded_to_email`.
    ///
    /// `IsSuccess="false"` is reported as [`NamecheapError::Rejected`]. A response
    /// without a result node returns the zero value.
    pub async fn whoisguard_enable(
        &self,
        whoisguard_id: i64,
        forwarded_to_email: &str,
    ) -> Result<WhoisguardToggleResult> {
        let mut params = id_params(whoisguard_id);
        params.set("ForwardedToEmail", forwarded_to_email);
        self.toggle(&WHOISGUARD_ENABLE, params).await
    }

    /// `namecheap.whoisguard.disable`
    ///
    /// `IsSuccess="false"` is reported as [`NamecheapError::Rejected`].
    pub async fn whoisguard_disable(&self, whoisguard_id: i64) -> Result<WhoisguardToggleResult> {
        self.toggle(&WHOISGUARD_DISABLE, id_params(whoisguard_id))
            .await
    }

    /// `namecheap.whoisguard.renew`
    pub async fn whoisguard_renew(
        &self,
        whoisguard_id: i64,
        years: u32,
    ) -> Result<WhoisguardRenewResult> {
        let mut params = id_params(whoisguard_id);
        params.set_num("Years", years);
        self.dispatch(&WHOISGUARD_RENEW, params).await
    }

    async fn toggle(
        &self,
        op: &Operation<Option<WhoisguardToggleResult>>,
        params: Params,
    ) -> Result<WhoisguardToggleResult> {
        // A missing result node decodes to the zero value, same as every other command.
        let Some(result) = self.dispatch(op, params).await? else {
            return Ok(WhoisguardToggleResult::default());
        };
        if !result.is_success {
            log::warn!("[namecheap] {} returned IsSuccess=false", op.command);
            return Err(NamecheapError::Rejected {
                command: op.command.to_string(),
            });
        }
        Ok(result)
    }
}
