// src/models/mod.rs

//! Domain models for the book finder.
//!
//! Wire types mirror the search service's JSON; `BookSummary` is the
//! display model built from them.

mod book;
mod config;
mod volume;

// Re-export all public types
pub use book::{BookSummary, UNKNOWN_AUTHOR, UNTITLED};
pub use config::{ApiConfig, Config, MAX_PAGE_SIZE, StorageConfig};
pub use volume::{ImageLinks, VolumeInfo, VolumeItem, VolumesResponse};
