use std::sync::Arc;
use std::time::Duration;

use rasp_core::Result;
use rasp_scraper::{scrape_roster, PageFetcher};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::store::CacheStore;

/// Run one full refresh cycle: scrape the roster, swap it in, drop every
/// cached schedule. A failed scrape leaves both cache tiers untouched and
/// propagates the error to the caller.
pub async fn refresh_once(store: &CacheStore, fetcher: &PageFetcher) -> Result<()> {
    let roster = scrape_roster(fetcher).await?;
    info!(
        institutes = roster.institutes.len(),
        courses = roster.courses.len(),
        groups = roster.groups.len(),
        "roster refreshed"
    );
    store.replace_roster(roster);
    store.clear_schedules();
    Ok(())
}

/// Recurring roster refresh.
///
/// The first tick fires immediately at startup, then every `interval` for
/// the life of the process. There is no retry within a tick — a failure
/// waits for the next scheduled firing or a manual `/force_parse`.
pub struct RefreshJob {
    store: Arc<CacheStore>,
    fetcher: PageFetcher,
    interval: Duration,
}

impl RefreshJob {
    pub fn new(store: Arc<CacheStore>, fetcher: PageFetcher, interval: Duration) -> Self {
        Self {
            store,
            fetcher,
            interval,
        }
    }

    /// Main loop. Runs until `shutdown` broadcasts `true`; a failed scrape
    /// keeps the previous snapshot and the process keeps serving it.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "refresh job started");

        let mut interval = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = refresh_once(&self.store, &self.fetcher).await {
                        warn!(error = %e, "roster refresh failed; serving previous snapshot");
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("refresh job shutting down");
                        break;
                    }
                }
            }
        }
    }
}
