use super::MovieStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT UNIQUE NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster TEXT
)";

/// Single-table SQLite backend. One statement per operation, no
/// transactions beyond what SQLite gives for free.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(CREATE_TABLE, [])?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(CREATE_TABLE, [])?;
        Ok(Self { conn })
    }
}

impl MovieStore for SqliteStore {
    fn list(&self) -> Result<Vec<Movie>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, year, rating, poster FROM movies ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Movie {
                title: row.get(0)?,
                year: row.get(1)?,
                rating: row.get(2)?,
                poster: row.get(3)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(CatalogError::Database)
    }

    fn add(&mut self, movie: &Movie) -> Result<()> {
        let inserted = self.conn.execute(
            "INSERT INTO movies (title, year, rating, poster) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster],
        );
        match inserted {
            Ok(_) => Ok(()),
            Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                Err(CatalogError::DuplicateTitle(movie.title.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, title: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM movies WHERE title = ?1", params![title])?;
        Ok(removed > 0)
    }

    fn update(&mut self, title: &str, rating: f64) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE movies SET rating = ?1 WHERE title = ?2",
            params![rating, title],
        )?;
        Ok(changed > 0)
    }
}
