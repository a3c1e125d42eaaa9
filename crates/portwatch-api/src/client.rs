// Switch web-management HTTP client
//
// Wraps `reqwest::Client` with base-URL handling and raw page fetching.
// Login lives in `auth.rs`, the named management pages in `pages.rs`;
// this module only deals with transport mechanics.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// A management page as returned by the switch: status plus the raw body.
///
/// The body is HTML with script-variable assignments embedded in it; nothing
/// here interprets it.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub status: reqwest::StatusCode,
    pub body: String,
}

impl RawPage {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP session against one switch.
///
/// Owns its own cookie jar, so the session cookie set by [`login`](Self::login)
/// is carried by every later request made through the same client and by no
/// other client.
pub struct SwitchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SwitchClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically (the switch tracks the login by cookie).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Turn a configured switch address into a base URL.
    ///
    /// Accepts a full URL (`http://10.0.0.2:8080`) or a bare host with an
    /// optional port (`10.0.0.2`, `10.0.0.2:8080`), which is reached over
    /// plain HTTP.
    pub fn base_url_for(address: &str) -> Result<Url, Error> {
        let address = address.trim();
        if address.contains("://") {
            Ok(Url::parse(address)?)
        } else {
            Ok(Url::parse(&format!("http://{address}/"))?)
        }
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The switch base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a page path such as `/PortStatisticsRpm.htm`.
    pub(crate) fn page_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Fetch a page, returning whatever status the switch answered with.
    ///
    /// Only transport-level failures are errors here; the caller decides
    /// what a non-success status means for that page.
    pub async fn fetch(&self, path: &str) -> Result<RawPage, Error> {
        let url = self.page_url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        Ok(RawPage { status, body })
    }

    /// Fetch a page and require a success status.
    pub(crate) async fn fetch_ok(&self, path: &str) -> Result<RawPage, Error> {
        let page = self.fetch(path).await?;
        if !page.is_success() {
            return Err(Error::Http {
                status: page.status.as_u16(),
                path: path.to_owned(),
            });
        }
        Ok(page)
    }
}
