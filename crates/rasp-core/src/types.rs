use serde::{Deserialize, Serialize};

/// A top-level academic unit from the roster page.
///
/// `id` is the zero-based position of the institute in the scraped listing.
/// It is reassigned on every refresh and must never be persisted or compared
/// across roster snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institute {
    pub id: u32,
    pub name: String,
}

/// A year/level of study within an institute.
///
/// `id` is synthesized as `inst_id * 1000 + course_index` and is unique only
/// within one roster snapshot (and only while no institute lists 1000+
/// courses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub inst_id: u32,
}

/// A student cohort with its own weekly timetable.
///
/// `id` is the suffix-stripped hyperlink target from the roster page — an
/// opaque token, stable across refreshes, and the only key safe to use across
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub course_id: u32,
    pub inst_id: u32,
}

/// One scheduled class slot within a day.
///
/// `week_type` and `event_subgroup` are empty strings when the source page
/// carries no value — never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    /// Slot number; carried forward from the previous row when the source
    /// renders a merged time slot without its own hour cell.
    pub number: String,
    pub name: String,
    pub room: String,
    pub week_type: String,
    pub teacher: String,
    pub event_type: String,
    pub event_subgroup: String,
}

/// One parsed day of a group's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Zero-based position among successfully paired days, not a weekday enum.
    pub index: u32,
    /// Header text as rendered by the source — whitespace preserved.
    pub name: String,
    pub disciplines: Vec<Discipline>,
}

/// A group's full weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Always equals the group id the schedule was fetched for.
    pub id: String,
    /// Display name resolved from the roster cache; empty when unknown.
    pub name: String,
    pub days: Vec<DaySchedule>,
}

/// One complete roster snapshot — the atomic unit swapped by a refresh.
///
/// `groups` keeps document order so listing output is deterministic for an
/// unchanged upstream page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub institutes: Vec<Institute>,
    pub courses: Vec<Course>,
    pub groups: Vec<Group>,
}
