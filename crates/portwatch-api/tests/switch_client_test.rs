#![allow(clippy::unwrap_used)]
// Integration tests for `SwitchClient` using wiremock.

use std::time::Duration;

use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portwatch_api::{Error, SwitchClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SwitchClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = SwitchClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn password(value: &str) -> secrecy::SecretString {
    value.to_string().into()
}

// ── Address handling ────────────────────────────────────────────────

#[test]
fn test_base_url_for_bare_host() {
    let url = SwitchClient::base_url_for("192.168.1.2").unwrap();
    assert_eq!(url.as_str(), "http://192.168.1.2/");
}

#[test]
fn test_base_url_for_host_with_port() {
    let url = SwitchClient::base_url_for(" 10.0.0.5:8080 ").unwrap();
    assert_eq!(url.as_str(), "http://10.0.0.5:8080/");
}

#[test]
fn test_base_url_for_full_url() {
    let url = SwitchClient::base_url_for("https://switch.lan").unwrap();
    assert_eq!(url.as_str(), "https://switch.lan/");
}

#[test]
fn test_base_url_for_garbage() {
    let result = SwitchClient::base_url_for("http://");
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_posts_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("logon=Login"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    client.login("admin", &password("s3cret")).await.unwrap();
}

#[tokio::test]
async fn test_login_failure_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let result = client.login("admin", &password("wrong")).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_login_unreachable() {
    // Nothing listens on port 1.
    let base_url = Url::parse("http://127.0.0.1:1/").unwrap();
    let client = SwitchClient::new(base_url, &TransportConfig::default()).unwrap();

    let result = client.login("admin", &password("x")).await;

    match result {
        Err(ref e @ Error::Transport(_)) => assert!(e.is_connect(), "got: {e}"),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_session_cookie_is_reused() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "H_P_SSID=abc; Path=/"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/PortStatisticsRpm.htm"))
        .and(header("cookie", "H_P_SSID=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    client.login("admin", &password("x")).await.unwrap();
    let page = client.port_statistics().await.unwrap();
    assert_eq!(page.body, "ok");
}

// ── Page tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_port_statistics_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/PortStatisticsRpm.htm"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    match client.port_statistics().await {
        Err(Error::Http { status, ref path }) => {
            assert_eq!(status, 500);
            assert_eq!(path, "/PortStatisticsRpm.htm");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_poe_recovery_passes_status_through() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/PoeRecoveryRpm.htm"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let page = client.poe_recovery().await.unwrap();
    assert!(!page.is_success());
    assert_eq!(page.status.as_u16(), 404);
    assert_eq!(page.body, "not here");
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = SwitchClient::new(
        base_url,
        &TransportConfig::with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = client.port_statistics().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err}");
}
