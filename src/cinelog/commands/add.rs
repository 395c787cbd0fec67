use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &mut S, movie: Movie) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.add(&movie) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!("Added: {}", movie)));
            result.listed.push(movie);
        }
        // The SQLite backend rejects duplicates; that is a printed error,
        // not a fatal one.
        Err(CatalogError::DuplicateTitle(title)) => {
            result.add_message(CmdMessage::error(format!(
                "Movie already in catalog: {}",
                title
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_success() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Movie::new("Alien", 1979, 8.5)).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn round_trips_through_the_store() {
        let mut store = InMemoryStore::new();
        let movie = Movie::new("Heat", 1995, 8.3).with_poster(Some("https://x/h.jpg".into()));
        run(&mut store, movie.clone()).unwrap();

        assert_eq!(store.list().unwrap(), vec![movie]);
    }
}
