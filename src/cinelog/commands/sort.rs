use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

/// Descending rating, ties broken by ascending title.
pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let mut movies = store.list()?;
    if movies.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No movies in database."));
        return Ok(result);
    }

    movies.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| a.title.cmp(&b.title))
    });
    Ok(CmdResult::default().with_listed(movies))
}
