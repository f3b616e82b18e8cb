// src/lib.rs

//! Book Finder Library
//!
//! Searches a public book API, pages through the results and keeps a
//! locally persisted reading list of favorite book ids.

pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
