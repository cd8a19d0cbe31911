//! `rasp-gateway` — the HTTP surface over the timetable cache.

pub mod app;
pub mod http;
