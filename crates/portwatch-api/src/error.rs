use thiserror::Error;

/// Top-level error type for the `portwatch-api` crate.
///
/// Covers the failure modes of one switch session: login, transport and
/// unexpected HTTP status. `portwatch-core` maps these into the text shown
/// for an offline switch.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The login request was answered with a non-success status.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Pages ───────────────────────────────────────────────────────
    /// A management page answered with a non-success status.
    #[error("HTTP {status} fetching {path}")]
    Http { status: u16, path: String },
}

impl Error {
    /// Returns `true` if the underlying request hit its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the switch could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
