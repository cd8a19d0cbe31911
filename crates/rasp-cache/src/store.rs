use std::future::Future;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rasp_core::types::{Course, Group, Institute, Roster, Schedule};
use rasp_core::Result;

/// The process's cache: one roster snapshot plus a read-through schedule map.
///
/// One instance is created at startup and shared via `Arc`; tests create
/// their own independent instances. Roster readers may observe either the old
/// or the new snapshot while a refresh is in flight — collection access is
/// atomic, cross-collection reads are not.
pub struct CacheStore {
    roster: RwLock<Roster>,
    schedules: DashMap<String, Schedule>,
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            roster: RwLock::new(Roster::default()),
            schedules: DashMap::new(),
            last_refresh: RwLock::new(None),
        }
    }

    /// Swap in a freshly scraped roster. The schedule tier is cleared
    /// separately by the refresh protocol via [`CacheStore::clear_schedules`].
    pub fn replace_roster(&self, roster: Roster) {
        *self.roster.write().unwrap() = roster;
        *self.last_refresh.write().unwrap() = Some(Utc::now());
    }

    /// Evict every cached schedule. Stale entries are dropped wholesale,
    /// never reconciled one by one against the new roster.
    pub fn clear_schedules(&self) {
        self.schedules.clear();
    }

    pub fn institutes(&self) -> Vec<Institute> {
        self.roster.read().unwrap().institutes.clone()
    }

    pub fn courses(&self) -> Vec<Course> {
        self.roster.read().unwrap().courses.clone()
    }

    /// Groups in document order from the last scrape.
    pub fn groups(&self) -> Vec<Group> {
        self.roster.read().unwrap().groups.clone()
    }

    /// Display name for a group id, if the current roster knows it.
    pub fn group_name(&self, group_id: &str) -> Option<String> {
        self.roster
            .read()
            .unwrap()
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.name.clone())
    }

    pub fn institute_count(&self) -> usize {
        self.roster.read().unwrap().institutes.len()
    }

    pub fn group_count(&self) -> usize {
        self.roster.read().unwrap().groups.len()
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read().unwrap()
    }

    /// Read-through lookup for a group's schedule.
    ///
    /// Concurrent misses for the same id may both run `compute`; the second
    /// write wins. That is wasted work, not a correctness problem — a
    /// schedule is deterministic for one source page. A failed compute caches
    /// nothing, so the next request retries from scratch.
    pub async fn get_or_compute_schedule<F, Fut>(&self, group_id: &str, compute: F) -> Result<Schedule>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Schedule>>,
    {
        if let Some(cached) = self.schedules.get(group_id) {
            return Ok(cached.value().clone());
        }

        let schedule = compute().await?;
        self.schedules
            .insert(group_id.to_string(), schedule.clone());
        Ok(schedule)
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
