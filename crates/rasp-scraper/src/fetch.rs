use rasp_core::config::SourceConfig;
use rasp_core::{RaspError, Result};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("rasp/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the upstream timetable site.
///
/// No retry and no timeout beyond reqwest's defaults — failures propagate to
/// the caller, which decides whether to keep a previous snapshot or surface
/// the error.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    groups_url: String,
}

impl PageFetcher {
    pub fn new(source: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RaspError::Config(format!("http client: {e}")))?;
        Ok(Self {
            client,
            groups_url: source.groups_url.clone(),
        })
    }

    /// The roster listing page.
    pub fn groups_url(&self) -> &str {
        &self.groups_url
    }

    /// A group's schedule page: `{groups_url}{group_id}/`.
    pub fn schedule_url(&self, group_id: &str) -> String {
        format!("{}{}/", self.groups_url, group_id)
    }

    /// GET a page and return its body text.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RaspError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "upstream returned non-success status");
            return Err(RaspError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| RaspError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
