use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let movies = store.list()?;
    Ok(CmdResult::default().with_listed(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_every_record() {
        let mut store = InMemoryStore::new();
        store.add(&Movie::new("Alien", 1979, 8.5)).unwrap();
        store.add(&Movie::new("Heat", 1995, 8.3)).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed.is_empty());
    }
}
