//! # Storage Layer
//!
//! This module defines the storage abstraction for cinelog. The
//! [`MovieStore`] trait allows the application to work with different
//! storage backends behind one four-function contract.
//!
//! ## Implementations
//!
//! - [`json::FileStore`]: the whole catalog as one JSON document
//!   - A map from title to `{year, rating, poster?}`
//!   - Missing or corrupt file reads as an empty catalog
//!   - Duplicate titles silently overwrite
//!
//! - [`sqlite::SqliteStore`]: a single `movies` table
//!   - Schema created idempotently on open
//!   - Duplicate titles surface the UNIQUE constraint as
//!     [`CatalogError::DuplicateTitle`](crate::error::CatalogError)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Contract Notes
//!
//! `delete` and `update` report whether a record existed rather than
//! erroring on an absent title; the menu actions turn `false` into a
//! "not found" message. `update` rewrites the rating and nothing else.

use crate::error::Result;
use crate::model::Movie;

pub mod json;
pub mod memory;
pub mod sqlite;

/// Abstract interface for catalog storage.
///
/// Implementations persist the full record set as a mapping from title to
/// the rest of the record. All reads are full-snapshot reads; the data
/// scale (tens to low thousands of records) fits in memory.
pub trait MovieStore {
    /// Return all records.
    fn list(&self) -> Result<Vec<Movie>>;

    /// Insert a record. Duplicate-title behavior is backend-specific; see
    /// the module documentation.
    fn add(&mut self, movie: &Movie) -> Result<()>;

    /// Remove a record by title. Returns whether it existed.
    fn delete(&mut self, title: &str) -> Result<bool>;

    /// Rewrite the rating of a record. Returns whether it existed.
    fn update(&mut self, title: &str, rating: f64) -> Result<bool>;
}
