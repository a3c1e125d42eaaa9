// Shared wiremock fixtures emulating a switch web interface.
#![allow(dead_code, clippy::unwrap_used)]

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portwatch_core::DeviceConfig;

/// Statistics page with a `max_port_num` declaration and padded sequences.
pub fn stats_page(ports: usize, links: &[u8]) -> String {
    let link_status: Vec<String> = (0..ports + 2)
        .map(|i| links.get(i).copied().unwrap_or(0).to_string())
        .collect();
    let state = vec!["1"; ports + 2];
    format!(
        "<html><head><script>\n\
         var max_port_num = {ports};\n\
         var all_info = {{\n\
         state:[{}],\n\
         link_status:[{}],\n\
         pkts:[0,0,0,0]\n\
         }};\n\
         </script></head><body></body></html>",
        state.join(","),
        link_status.join(",")
    )
}

/// PoE recovery page; an empty string in `ips` marks a port with PoE off.
pub fn poe_page(ips: &[&str]) -> String {
    let quoted: Vec<String> = ips.iter().map(|ip| format!("\"{ip}\"")).collect();
    format!(
        "<script>\n\
         var poe_port_num = {};\n\
         var portRecoveryConfig = {{\n\
         state:[{}],\n\
         ip:[{}]\n\
         }};\n\
         </script>",
        ips.len(),
        vec!["1"; ips.len()].join(","),
        quoted.join(",")
    )
}

pub async fn mount_login(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(server)
        .await;
}

pub async fn mount_page(server: &MockServer, page: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// A switch that answers every page promptly.
pub async fn switch(stats: String, poe: Option<String>) -> MockServer {
    let server = MockServer::start().await;
    mount_login(&server, Duration::ZERO).await;
    mount_page(&server, "/PortStatisticsRpm.htm", 200, stats).await;
    match poe {
        Some(body) => mount_page(&server, "/PoeRecoveryRpm.htm", 200, body).await,
        None => mount_page(&server, "/PoeRecoveryRpm.htm", 404, String::new()).await,
    }
    server
}

pub fn device(name: &str, server: &MockServer) -> DeviceConfig {
    DeviceConfig::new(name, server.uri(), "admin", "admin").with_timeout(Duration::from_secs(2))
}
