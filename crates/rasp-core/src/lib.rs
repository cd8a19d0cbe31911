//! `rasp-core` — shared data model, error taxonomy, and configuration.
//!
//! Everything that crosses a crate boundary lives here: the serde records
//! served by the HTTP API, the `RaspError` taxonomy, and the figment-backed
//! `RaspConfig`.

pub mod config;
pub mod error;
pub mod types;

pub use error::{RaspError, Result};
