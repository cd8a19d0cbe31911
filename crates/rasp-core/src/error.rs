use thiserror::Error;

/// Errors surfaced by the scraping and caching subsystems.
#[derive(Debug, Error)]
pub enum RaspError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure fetching a page (DNS, connect, body read).
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The upstream site answered with a non-success status.
    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    /// An expected structural element is absent or malformed on a page.
    #[error("Parse failed on {page}: expected {element}")]
    Parse { page: String, element: String },
}

impl RaspError {
    /// Short error code string carried in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RaspError::Config(_) => "CONFIG_ERROR",
            RaspError::Fetch { .. } => "FETCH_ERROR",
            RaspError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            RaspError::Parse { .. } => "PARSE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, RaspError>;
