// Switch session authentication
//
// Form-encoded login against `/logon.cgi`. The switch answers with a
// session cookie that the client's jar keeps for subsequent page fetches.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::SwitchClient;
use crate::error::Error;

/// Login endpoint of the web-management interface.
pub const LOGIN_PATH: &str = "/logon.cgi";

impl SwitchClient {
    /// Authenticate with the switch using username/password.
    ///
    /// `POST /logon.cgi` with `logon=Login&username=..&password=..`.
    ///
    /// The firmware answers a wrong password the same way it answers a
    /// correct one, so only an unreachable switch or a non-success status
    /// is reported as an error.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.page_url(LOGIN_PATH)?;

        debug!("logging in at {}", url);

        let form = [
            ("logon", "Login"),
            ("username", username),
            ("password", password.expose_secret()),
        ];

        let resp = self
            .http()
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!(
                    "login failed (HTTP {status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            });
        }

        debug!("login successful");
        Ok(())
    }
}
