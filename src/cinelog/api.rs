//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all catalog operations, regardless of the UI being used.
//!
//! `CatalogApi<S: MovieStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>` or `CatalogApi<SqliteStore>`
//! - Testing: `CatalogApi<InMemoryStore>`
//!
//! The facade holds no business logic and performs no I/O of its own; it
//! dispatches and returns structured `Result<CmdResult>` values.

use crate::commands;
use crate::error::Result;
use crate::model::Movie;
use crate::store::MovieStore;

pub struct CatalogApi<S: MovieStore> {
    store: S,
}

impl<S: MovieStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_movie(&mut self, movie: Movie) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, movie)
    }

    pub fn delete_movie(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, title)
    }

    pub fn update_movie(&mut self, title: &str, rating: f64) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, title, rating)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn random_movie(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.store)
    }

    pub fn search_movies(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn movies_by_rating(&self) -> Result<commands::CmdResult> {
        commands::sort::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, RatingStats};
