use super::MovieStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// On-disk record shape. The title lives in the map key, not the value, so
/// the document stays a direct title-to-record mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredMovie {
    year: i32,
    rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poster: Option<String>,
}

/// Whole-catalog JSON document at a fixed path.
///
/// Every mutation is a full read-modify-rewrite of the document. Adding a
/// title that already exists overwrites the old record.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, StoredMovie> {
        // Missing or unreadable file is an empty catalog, and so is a file
        // that fails to parse.
        let Ok(content) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    fn save(&self, movies: &BTreeMap<String, StoredMovie>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(movies).map_err(CatalogError::Serialization)?;
        fs::write(&self.path, content).map_err(CatalogError::Io)?;
        Ok(())
    }
}

impl MovieStore for FileStore {
    fn list(&self) -> Result<Vec<Movie>> {
        Ok(self
            .load()
            .into_iter()
            .map(|(title, stored)| Movie {
                title,
                year: stored.year,
                rating: stored.rating,
                poster: stored.poster,
            })
            .collect())
    }

    fn add(&mut self, movie: &Movie) -> Result<()> {
        let mut movies = self.load();
        movies.insert(
            movie.title.clone(),
            StoredMovie {
                year: movie.year,
                rating: movie.rating,
                poster: movie.poster.clone(),
            },
        );
        self.save(&movies)
    }

    fn delete(&mut self, title: &str) -> Result<bool> {
        let mut movies = self.load();
        if movies.remove(title).is_none() {
            return Ok(false);
        }
        self.save(&movies)?;
        Ok(true)
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<bool> {
        let mut movies = self.load();
        match movies.get_mut(title) {
            Some(stored) => {
                stored.rating = rating;
            }
            None => return Ok(false),
        }
        self.save(&movies)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("movies.json"))
    }

    #[test]
    fn missing_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn add_then_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let movie = Movie::new("Titanic", 1997, 7.9)
            .with_poster(Some("https://example.com/titanic.jpg".into()));
        store.add(&movie).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![movie]);
    }

    #[test]
    fn add_overwrites_existing_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add(&Movie::new("Titanic", 1997, 7.9)).unwrap();
        store.add(&Movie::new("Titanic", 1997, 9.0)).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].rating, 9.0);
    }

    #[test]
    fn delete_removes_and_absent_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add(&Movie::new("Alien", 1979, 8.5)).unwrap();

        assert!(store.delete("Alien").unwrap());
        assert!(!store.delete("Alien").unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn update_touches_only_rating() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let movie =
            Movie::new("Alien", 1979, 8.5).with_poster(Some("https://example.com/a.jpg".into()));
        store.add(&movie).unwrap();

        assert!(store.update("Alien", 9.1).unwrap());
        let listed = store.list().unwrap();
        assert_eq!(listed[0].rating, 9.1);
        assert_eq!(listed[0].year, 1979);
        assert_eq!(listed[0].poster.as_deref(), Some("https://example.com/a.jpg"));

        assert!(!store.update("Blade Runner", 9.0).unwrap());
    }

    #[test]
    fn document_is_a_title_keyed_map() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add(&Movie::new("Heat", 1995, 8.3)).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["Heat"]["year"], 1995);
        assert!(value["Heat"].get("poster").is_none());
    }
}
