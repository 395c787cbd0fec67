use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use rand::seq::SliceRandom;

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let movies = store.list()?;
    let mut result = CmdResult::default();
    match movies.choose(&mut rand::thread_rng()) {
        Some(movie) => result.listed.push(movie.clone()),
        None => result.add_message(CmdMessage::info("No movies in database.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn picks_exactly_one_movie_from_the_catalog() {
        let fixture = StoreFixture::new()
            .with_movie("A", 2000, 5.0)
            .with_movie("B", 2001, 6.0);

        let result = run(&fixture.store).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert!(["A", "B"].contains(&result.listed[0].title.as_str()));
    }

    #[test]
    fn empty_catalog_yields_message() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
