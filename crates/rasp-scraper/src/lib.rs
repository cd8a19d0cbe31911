//! `rasp-scraper` — fetching and parsing of the upstream timetable site.
//!
//! # Overview
//!
//! Two scraping routines over pnu.edu.ru's published timetable pages:
//!
//! | Routine            | Page                    | Produces                  |
//! |--------------------|-------------------------|---------------------------|
//! | [`scrape_roster`]  | groups listing          | institutes/courses/groups |
//! | [`scrape_schedule`]| one group's schedule    | week-by-day timetable     |
//!
//! Both split into a pure `parse_*` function over HTML text (fixture-testable,
//! no network) and a thin fetch wrapper driving [`fetch::PageFetcher`]. The
//! parsing rules are deliberately brittle: any structural drift upstream is a
//! hard `Parse` error, never a silently degraded result.

pub mod fetch;
pub mod roster;
pub mod schedule;

pub use fetch::PageFetcher;
pub use roster::{parse_roster, scrape_roster};
pub use schedule::{parse_schedule_days, scrape_schedule};
