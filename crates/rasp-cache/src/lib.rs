//! `rasp-cache` — in-memory two-tier cache and the recurring refresh job.
//!
//! # Overview
//!
//! [`store::CacheStore`] holds one roster snapshot (institutes, courses,
//! groups) plus a read-through map of parsed schedules keyed by group id.
//! [`refresh::RefreshJob`] re-scrapes the roster on a fixed interval and
//! evicts the schedule tier wholesale; a failed scrape leaves both tiers
//! untouched.
//!
//! Nothing here persists across restarts — the first refresh after startup
//! rebuilds the world from the upstream site.

pub mod refresh;
pub mod store;

pub use refresh::{refresh_once, RefreshJob};
pub use store::CacheStore;
