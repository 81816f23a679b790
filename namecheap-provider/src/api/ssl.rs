use crate::client::NamecheapClient;
use crate::error::Result;
use crate::operations::{
    SSL_ACTIVATE, SSL_CREATE, SSL_GET_APPROVER_EMAIL_LIST, SSL_GET_INFO, SSL_GET_LIST,
    SSL_RESEND_APPROVER_EMAIL,
};
use crate::request::Params;
use crate::types::{
    ApproverEmailList, DcValidation, SslActivateParams, SslActivateResult, SslCertificate,
    SslCreateResult, SslInfo, SslResendResult,
};

impl NamecheapClient {
    /// `namecheap.ssl.getList`
    pub async fn ssl_get_list(&self) -> Result<Vec<SslCertificate>> {
        self.dispatch(&SSL_GET_LIST, Params::new()).await
    }

    /// `namecheap.ssl.create`: purchases a certificate.
    pub async fn ssl_create(&self, cert_type: &str, years: u32) -> Result<SslCreateResult> {
        let mut params = Params::new();
        params.set("Type", cert_type).set_num("Years", years);
        self.dispatch(&SSL_CREATE, params).await
    }

    /// `namecheap.ssl.activate`
    pub async fn ssl_activate(&self, request: &SslActivateParams) -> Result<SslActivateResult> {
        let mut params = Params::new();
        params
            .set_num("CertificateID", request.certificate_id)
            .set("CSR", request.csr.as_str())
            .set("AdminEmailAddress", request.admin_email_address.as_str())
            .set_opt("WebServerType", Some(request.web_server_type.as_str()));
        match request.validation {
            DcValidation::Email => {}
            DcValidation::Http => {
                params.set("HTTPDCValidation", "true");
            }
            DcValidation::Dns => {
                params.set("DNSDCValidation", "true");
            }
        }
        self.dispatch(&SSL_ACTIVATE, params).await
    }

    /// `namecheap.ssl.getInfo`, including the issued certificate bundle.
    pub async fn ssl_get_info(&self, certificate_id: i64) -> Result<SslInfo> {
        let mut params = Params::new();
        params
            .set_num("CertificateID", certificate_id)
            .set("Returncertificate", "true")
            .set("Returntype", "Individual");
        self.dispatch(&SSL_GET_INFO, params).await
    }

    /// `namecheap.ssl.getApproverEmailList`
    pub async fn ssl_get_approver_email_list(
        &self,
        domain_name: &str,
        certificate_type: &str,
    ) -> Result<ApproverEmailList> {
        let mut params = Params::new();
        params
            .set("DomainName", domain_name)
            .set("CertificateType", certificate_type);
        self.dispatch(&SSL_GET_APPROVER_EMAIL_LIST, params).await
    }

    /// `namecheap.ssl.resendApproverEmail`
    pub async fn ssl_resend_approver_email(&self, certificate_id: i64) -> Result<SslResendResult> {
        let mut params = Params::new();
        params.set_num("CertificateID", certificate_id);
        self.dispatch(&SSL_RESEND_APPROVER_EMAIL, params).await
    }
}
