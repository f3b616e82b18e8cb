//! Storage abstractions for locally persisted state.
//!
//! State is kept as string values under string keys. Reads and writes are
//! synchronous and carry no transactional guarantees.
//!
//! ## Directory Structure
//!
//! ```text
//! {storage_dir}/
//! ├── config.toml                 # Application configuration
//! └── bookFinder-favorites.json   # Favorite ids (one file per key)
//! ```

pub mod local;
pub mod memory;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Trait for durable key-value backends.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
