//! State units read and written by the presentation layer.
//!
//! - `SearchState`: result list, loading/error flags and pagination
//! - `FavoritesStore`: persisted set of favorite book ids

mod favorites;
mod search;

pub use favorites::FavoritesStore;
pub use search::{PendingFetch, SearchState};
