//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use namecheap_provider::{Credentials, NamecheapClient, Registrant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Mock 服务器上的 API 路径
pub const API_PATH: &str = "/xml.response";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Mock 服务器 ============

/// 固定的测试凭证
pub fn test_credentials() -> Credentials {
    Credentials::new("apiUser", "apiKey", "userName")
}

/// 指向 mock 服务器的客户端
pub fn mock_client(server: &MockServer) -> NamecheapClient {
    NamecheapClient::builder(test_credentials())
        .base_url(format!("{}{API_PATH}", server.uri()))
        .build()
        .expect("创建客户端失败")
}

/// 成功信封，`GMTTimeDifference` 为 `--5:00`
pub fn ok_envelope(command: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings />
  <RequestedCommand>{command}</RequestedCommand>
  <CommandResponse Type="{command}">
    {inner}
  </CommandResponse>
  <Server>PHX01SBAPIEXT06</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.011</ExecutionTime>
</ApiResponse>"#
    )
}

/// 错误信封
pub fn error_envelope(errors: &[(&str, &str)]) -> String {
    let entries: String = errors
        .iter()
        .map(|(number, message)| format!(r#"<Error Number="{number}">{message}</Error>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>{entries}</Errors>
  <Warnings />
  <RequestedCommand />
  <Server>PHX01SBAPIEXT06</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0</ExecutionTime>
</ApiResponse>"#
    )
}

/// 挂载一个对任意请求都返回 `body` 的 mock
pub async fn mount_xml(server: &MockServer, http_method: &str, body: String) {
    Mock::given(method(http_method))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// 服务器收到的全部请求
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// 唯一一个请求的原始参数串（POST 取 body，GET 取 query）
pub async fn sole_payload(server: &MockServer) -> String {
    let requests = received(server).await;
    assert_eq!(requests.len(), 1, "应当恰好发出一个请求");
    let request = &requests[0];
    if request.body.is_empty() {
        request.url.query().unwrap_or_default().to_string()
    } else {
        String::from_utf8_lossy(&request.body).into_owned()
    }
}

/// 把参数串拆成有序的 (name, value) 列表，不做解码
pub fn pairs(payload: &str) -> Vec<(String, String)> {
    payload
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once('=') {
            Some((n, v)) => (n.to_string(), v.to_string()),
            None => (p.to_string(), String::new()),
        })
        .collect()
}

/// 参数串中某个字段的原始值
pub fn param(payload: &str, name: &str) -> Option<String> {
    pairs(payload)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}

/// 测试用注册人
pub fn test_registrant() -> Registrant {
    Registrant {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        address1: "8939 S.cross Blvd".to_string(),
        city: "CA".to_string(),
        state_province: "CA".to_string(),
        postal_code: "90045".to_string(),
        country: "US".to_string(),
        phone: "+1.6613102107".to_string(),
        email_address: "john@gmail.com".to_string(),
        ..Registrant::default()
    }
}

// ============ 沙箱环境 ============

/// 测试上下文 - 封装沙箱客户端和测试域名
pub struct TestContext {
    pub client: NamecheapClient,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建沙箱测试上下文
    pub fn sandbox() -> Option<Self> {
        let credentials = Credentials::from_env().ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let client = NamecheapClient::builder(credentials)
            .sandbox()
            .build()
            .ok()?;
        Some(Self { client, domain })
    }

    /// 把测试域名拆成 (SLD, TLD)
    pub fn sld_tld(&self) -> Option<(&str, &str)> {
        self.domain.split_once('.')
    }
}
