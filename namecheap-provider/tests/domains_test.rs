//! `namecheap.domains.*` 请求编码与响应解码测试（wiremock）

mod common;

use chrono::{FixedOffset, TimeZone};
use common::{
    error_envelope, mock_client, mount_xml, ok_envelope, pairs, param, received, sole_payload,
    test_registrant,
};
use namecheap_provider::{DomainCreateOptions, DomainListQuery, NamecheapError};
use wiremock::MockServer;

fn est(y: i32, m: u32, d: u32) -> chrono::DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(y, m, d, 0, 0, 0).single())
        .expect("valid date")
}

#[tokio::test]
async fn test_get_list_sends_page_size_and_decodes_paging() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.getList",
            r#"<DomainGetListResult>
                 <Domain ID="127" Name="domain1.com" User="owner" Created="02/15/2016" Expires="02/15/2022" IsExpired="false" IsLocked="false" AutoRenew="false" WhoisGuard="ENABLED" IsPremium="true" IsOurDNS="true"/>
                 <Domain ID="381" Name="domain2.com" User="owner" Created="04/28/2016" Expires="04/28/2023" IsExpired="false" IsLocked="True" AutoRenew="true" WhoisGuard="NOTPRESENT" IsPremium="false" IsOurDNS="false"/>
               </DomainGetListResult>
               <Paging>
                 <TotalItems>2</TotalItems>
                 <CurrentPage>1</CurrentPage>
                 <PageSize>100</PageSize>
               </Paging>"#,
        ),
    )
    .await;

    let client = mock_client(&server);
    let query = DomainListQuery {
        search_term: Some("domain".to_string()),
        ..DomainListQuery::default()
    };
    let list = require_ok!(client.domains_get_list(&query).await);

    assert_eq!(list.domains.len(), 2);
    assert_eq!(list.domains[0].id, 127);
    assert_eq!(list.domains[0].name, "domain1.com");
    assert_eq!(list.domains[0].created, Some(est(2016, 2, 15)));
    assert!(list.domains[1].is_locked);
    assert!(list.domains[1].auto_renew);
    assert_eq!(list.paging.total_items, 2);
    assert_eq!(list.paging.page_size, 100);

    let payload = sole_payload(&server).await;
    assert_eq!(param(&payload, "PageSize").as_deref(), Some("100"));
    assert_eq!(param(&payload, "SearchTerm").as_deref(), Some("domain"));
    assert_eq!(param(&payload, "ListType"), None);
    assert_eq!(param(&payload, "Page"), None);
    assert_eq!(
        param(&payload, "Command").as_deref(),
        Some("namecheap.domains.getList")
    );
}

#[tokio::test]
async fn test_get_list_empty_result() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope("namecheap.domains.getList", "<DomainGetListResult />"),
    )
    .await;

    let list = require_ok!(
        mock_client(&server)
            .domains_get_list(&DomainListQuery::default())
            .await
    );
    assert!(list.domains.is_empty());
    assert_eq!(list.paging.total_items, 0);
}

#[tokio::test]
async fn test_get_info_decodes_nested_details() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.getInfo",
            r#"<DomainGetInfoResult Status="Ok" ID="57579" DomainName="example.com" OwnerName="anUser" IsOwner="true" IsPremium="false">
                 <DomainDetails>
                   <CreatedDate>11/04/2019</CreatedDate>
                   <ExpiredDate>11/04/2020</ExpiredDate>
                   <NumYears>0</NumYears>
                 </DomainDetails>
                 <Whoisguard Enabled="True">
                   <ID>53536</ID>
                   <ExpiredDate>11/04/2020</ExpiredDate>
                   <EmailDetails WhoisGuardEmail="abc@whoisguard.com" ForwardedTo="user@gmail.com" LastAutoEmailChangeDate="" AutoEmailChangeFrequencyDays="3" />
                 </Whoisguard>
                 <DnsDetails ProviderType="FREE" IsUsingOurDNS="true" HostCount="5" EmailType="FWD" DynamicDNSStatus="false" IsFailover="false">
                   <Nameserver>dns1.registrar-servers.com</Nameserver>
                   <Nameserver>dns2.registrar-servers.com</Nameserver>
                 </DnsDetails>
               </DomainGetInfoResult>"#,
        ),
    )
    .await;

    let info = require_ok!(mock_client(&server).domain_get_info("example.com").await);

    assert_eq!(info.id, 57579);
    assert_eq!(info.name, "example.com");
    assert_eq!(info.status, "Ok");
    assert!(info.is_owner);
    assert_eq!(info.created, Some(est(2019, 11, 4)));
    assert_eq!(info.expires, Some(est(2020, 11, 4)));
    assert!(info.whoisguard.enabled);
    assert_eq!(info.whoisguard.id, 53536);
    assert_eq!(info.whoisguard.email_details.forwarded_to, "user@gmail.com");
    assert_eq!(info.whoisguard.email_details.last_auto_email_change_date, None);
    assert_eq!(info.dns_details.provider_type, "FREE");
    assert_eq!(
        info.dns_details.nameservers,
        vec!["dns1.registrar-servers.com", "dns2.registrar-servers.com"]
    );

    let payload = sole_payload(&server).await;
    assert_eq!(param(&payload, "DomainName").as_deref(), Some("example.com"));
}

#[tokio::test]
async fn test_whoisguard_enabled_flag_is_case_insensitive() {
    for raw in ["True", "true", "TRUE", "1"] {
        let server = MockServer::start().await;
        mount_xml(
            &server,
            "POST",
            ok_envelope(
                "namecheap.domains.getInfo",
                &format!(
                    r#"<DomainGetInfoResult DomainName="example.com"><Whoisguard Enabled="{raw}"><ID>1</ID></Whoisguard></DomainGetInfoResult>"#
                ),
            ),
        )
        .await;
        let info = require_ok!(mock_client(&server).domain_get_info("example.com").await);
        assert!(info.whoisguard.enabled, "Enabled=\"{raw}\" should be true");
    }

    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.getInfo",
            r#"<DomainGetInfoResult DomainName="example.com"><Whoisguard Enabled="NotAlloted"><ID>0</ID></Whoisguard></DomainGetInfoResult>"#,
        ),
    )
    .await;
    let info = require_ok!(mock_client(&server).domain_get_info("example.com").await);
    assert!(!info.whoisguard.enabled);
}

#[tokio::test]
async fn test_check_keeps_commas_literal() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.check",
            r#"<DomainCheckResult Domain="a.com" Available="false" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" PremiumRenewalPrice="0" PremiumRestorePrice="0" PremiumTransferPrice="0" IcannFee="0" EapFee="0"/>
               <DomainCheckResult Domain="b.net" Available="true" ErrorNo="0" Description="" IsPremiumName="true" PremiumRegistrationPrice="13000.0000" PremiumRenewalPrice="1142.0000" PremiumRestorePrice="65.0000" PremiumTransferPrice="13000.0000" IcannFee="0.1800" EapFee="0.0000"/>"#,
        ),
    )
    .await;

    let checks = require_ok!(
        mock_client(&server)
            .domains_check(&["a.com", "b.net"])
            .await
    );

    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].domain, "a.com");
    assert!(!checks[0].available);
    assert!(checks[1].available);
    assert!(checks[1].is_premium_name);
    assert!((checks[1].premium_registration_price - 13000.0).abs() < f64::EPSILON);
    assert!((checks[1].icann_fee - 0.18).abs() < 1e-9);

    let payload = sole_payload(&server).await;
    assert!(payload.contains("DomainList=a.com,b.net"), "{payload}");
    assert!(!payload.contains("%2C"));
}

#[tokio::test]
async fn test_tld_list() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.getTldList",
            r#"<Tlds>
                 <Tld Name="biz" NonRealTime="false" MinRegisterYears="1" MaxRegisterYears="10">US Business</Tld>
                 <Tld Name="bz" NonRealTime="false" MinRegisterYears="1" MaxRegisterYears="10">BZ Country Domain</Tld>
               </Tlds>"#,
        ),
    )
    .await;

    let tlds = require_ok!(mock_client(&server).domains_get_tld_list().await);
    let names: Vec<_> = tlds.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["biz", "bz"]);
}

#[tokio::test]
async fn test_create_without_registrant_sends_nothing() {
    let server = MockServer::start().await;
    mount_xml(&server, "POST", ok_envelope("namecheap.domains.create", "")).await;

    let result = mock_client(&server)
        .domain_create("example.com", 1, &DomainCreateOptions::default())
        .await;

    assert!(
        matches!(result, Err(NamecheapError::Precondition { .. })),
        "{result:?}"
    );
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_create_expands_contacts_and_options() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.create",
            r#"<DomainCreateResult Domain="example.com" Registered="true" ChargedAmount="20.8700" DomainID="9007" OrderID="196074" TransactionID="380716" WhoisguardEnable="true" FreePositiveSSL="false" NonRealTimeDomain="false" />"#,
        ),
    )
    .await;

    let client = mock_client(&server).with_registrant(test_registrant());
    let options = DomainCreateOptions {
        add_free_whoisguard: true,
        wg_enabled: true,
        nameservers: vec!["ns1.example.net".into(), "ns2.example.net".into()],
    };
    let created = require_ok!(client.domain_create("example.com", 2, &options).await);

    assert!(created.registered);
    assert_eq!(created.domain_id, 9007);
    assert_eq!(created.order_id, 196_074);
    assert!(created.whoisguard_enable);

    let payload = sole_payload(&server).await;
    assert_eq!(param(&payload, "Years").as_deref(), Some("2"));
    assert_eq!(param(&payload, "AddFreeWhoisguard").as_deref(), Some("yes"));
    assert_eq!(param(&payload, "WGEnabled").as_deref(), Some("yes"));
    assert_eq!(
        param(&payload, "Nameservers").as_deref(),
        Some("ns1.example.net,ns2.example.net")
    );
    for prefix in ["Registrant", "Tech", "Admin", "AuxBilling"] {
        assert_eq!(
            param(&payload, &format!("{prefix}FirstName")).as_deref(),
            Some("John")
        );
        assert_eq!(
            param(&payload, &format!("{prefix}EmailAddress")).as_deref(),
            Some("john%40gmail.com")
        );
        assert_eq!(param(&payload, &format!("{prefix}Address2")), None);
    }
}

#[tokio::test]
async fn test_create_omits_unset_options() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.create",
            r#"<DomainCreateResult Domain="example.com" Registered="true" />"#,
        ),
    )
    .await;

    let client = mock_client(&server).with_registrant(test_registrant());
    require_ok!(
        client
            .domain_create("example.com", 1, &DomainCreateOptions::default())
            .await
    );

    let payload = sole_payload(&server).await;
    let names: Vec<_> = pairs(&payload).into_iter().map(|(n, _)| n).collect();
    assert!(!names.iter().any(|n| n == "AddFreeWhoisguard"));
    assert!(!names.iter().any(|n| n == "WGEnabled"));
    assert!(!names.iter().any(|n| n == "Nameservers"));
}

#[tokio::test]
async fn test_renew() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.renew",
            r#"<DomainRenewResult DomainName="example.com" DomainID="151378" Renew="true" OrderID="23569" TransactionID="25080" ChargedAmount="8.1800">
                 <DomainDetails>
                   <ExpiredDate>11/04/2021</ExpiredDate>
                   <NumYears>0</NumYears>
                 </DomainDetails>
               </DomainRenewResult>"#,
        ),
    )
    .await;

    let renewed = require_ok!(mock_client(&server).domain_renew("example.com", 1).await);
    assert!(renewed.renewed);
    assert_eq!(renewed.domain_id, 151_378);
    assert!((renewed.charged_amount - 8.18).abs() < 1e-9);
    assert_eq!(renewed.expire_date, Some(est(2021, 11, 4)));
}

#[tokio::test]
async fn test_set_contacts_requires_registrant() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.setContacts",
            r#"<DomainSetContactResult Domain="example.com" IsSuccess="true" />"#,
        ),
    )
    .await;

    let base = mock_client(&server);
    let err = base.domain_set_contacts("example.com").await;
    assert!(matches!(err, Err(NamecheapError::Precondition { .. })));
    assert!(received(&server).await.is_empty());

    let updated = require_ok!(
        base.with_registrant(test_registrant())
            .domain_set_contacts("example.com")
            .await
    );
    assert!(updated.is_success);
    assert_eq!(updated.domain, "example.com");

    let payload = sole_payload(&server).await;
    assert_eq!(param(&payload, "AdminLastName").as_deref(), Some("Smith"));
}

#[tokio::test]
async fn test_registrar_lock() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.getRegistrarLock",
            r#"<DomainGetRegistrarLockResult Domain="example.com" RegistrarLockStatus="true" />"#,
        ),
    )
    .await;

    let status = require_ok!(
        mock_client(&server)
            .domain_get_registrar_lock("example.com")
            .await
    );
    assert!(status.is_locked);
}

#[tokio::test]
async fn test_unlock_sends_lock_action() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        ok_envelope(
            "namecheap.domains.setRegistrarLock",
            r#"<DomainSetRegistrarLockResult Domain="example.com" IsSuccess="true" />"#,
        ),
    )
    .await;

    let client = mock_client(&server);
    require_ok!(client.domain_set_registrar_lock("example.com", false).await);
    require_ok!(client.domain_set_registrar_lock("example.com", true).await);

    let requests = received(&server).await;
    assert_eq!(requests.len(), 2);
    let unlock = String::from_utf8_lossy(&requests[0].body).into_owned();
    let lock = String::from_utf8_lossy(&requests[1].body).into_owned();
    assert_eq!(param(&unlock, "LockAction").as_deref(), Some("UNLOCK"));
    assert_eq!(param(&lock, "LockAction"), None);
}

#[tokio::test]
async fn test_provider_error_carries_every_entry() {
    let server = MockServer::start().await;
    mount_xml(
        &server,
        "POST",
        error_envelope(&[
            ("1011102", "Parameter APIKey is missing"),
            ("2019166", "Domain not found"),
        ]),
    )
    .await;

    let err = mock_client(&server)
        .domain_get_info("missing.com")
        .await
        .unwrap_err();

    assert!(err.is_expected());
    let codes: Vec<_> = err.api_errors().iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["1011102", "2019166"]);
    assert_eq!(err.api_errors()[1].message, "Domain not found");
}
