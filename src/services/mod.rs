//! Service layer for the book finder.
//!
//! This module contains the outbound search client (`GoogleBooksClient`)
//! behind the `BookSource` trait.

mod books;

pub use books::{BookSource, GoogleBooksClient, SearchRequest};
