use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();
    let mut matches: Vec<_> = store
        .list()?
        .into_iter()
        .filter(|m| m.title.to_lowercase().contains(&term_lower))
        .collect();
    matches.sort_by(|a, b| a.title.cmp(&b.title));

    let mut result = CmdResult::default().with_listed(matches);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::warning("No matches."));
    }
    Ok(result)
}
