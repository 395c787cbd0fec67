use super::MovieStore;
use crate::error::Result;
use crate::model::Movie;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data. Duplicate titles overwrite, like the JSON backend.
#[derive(Default)]
pub struct InMemoryStore {
    movies: BTreeMap<String, Movie>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MovieStore for InMemoryStore {
    fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.values().cloned().collect())
    }

    fn add(&mut self, movie: &Movie) -> Result<()> {
        self.movies.insert(movie.title.clone(), movie.clone());
        Ok(())
    }

    fn delete(&mut self, title: &str) -> Result<bool> {
        Ok(self.movies.remove(title).is_some())
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<bool> {
        match self.movies.get_mut(title) {
            Some(movie) => {
                movie.rating = rating;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_movie(mut self, title: &str, year: i32, rating: f64) -> Self {
            self.store.add(&Movie::new(title, year, rating)).unwrap();
            self
        }
    }
}
