// ── Core error types ──
//
// Errors a device poll can end with. These are NOT API-specific --
// the report only ever shows their text. The `From<portwatch_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to switch at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Switch did not answer within {timeout:?}")]
    Timeout { timeout: Duration },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Attach the device's configured timeout to a timeout error.
    pub(crate) fn with_timeout(self, timeout: Duration) -> Self {
        match self {
            Self::Timeout { .. } => Self::Timeout { timeout },
            other => other,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<portwatch_api::Error> for CoreError {
    fn from(err: portwatch_api::Error) -> Self {
        match err {
            portwatch_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            portwatch_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout {
                        timeout: Duration::ZERO,
                    }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            portwatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            portwatch_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            portwatch_api::Error::Http { status, path } => CoreError::Api {
                message: format!("HTTP {status} fetching {path}"),
                status: Some(status),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_status() {
        let err = CoreError::from(portwatch_api::Error::Http {
            status: 503,
            path: "/PortStatisticsRpm.htm".into(),
        });
        assert!(matches!(err, CoreError::Api { status: Some(503), .. }));
        assert_eq!(
            err.to_string(),
            "API error: HTTP 503 fetching /PortStatisticsRpm.htm"
        );
    }

    #[test]
    fn timeout_picks_up_configured_seconds() {
        let err = CoreError::Timeout {
            timeout: Duration::ZERO,
        }
        .with_timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Switch did not answer within 1.5s");
    }

    #[test]
    fn auth_message_passes_through() {
        let err = CoreError::from(portwatch_api::Error::Authentication {
            message: "login failed (HTTP 403)".into(),
        });
        assert_eq!(
            err.to_string(),
            "Authentication failed: login failed (HTTP 403)"
        );
    }
}
