use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete(title)? {
        result.add_message(CmdMessage::success(format!("Deleted: {}", title)));
    } else {
        result.add_message(CmdMessage::error(format!("Movie not found: {}", title)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Movie;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_title_is_gone_from_list() {
        let mut store = InMemoryStore::new();
        store.add(&Movie::new("Alien", 1979, 8.5)).unwrap();

        let result = run(&mut store, "Alien").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn absent_title_is_a_noop_with_message() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Alien").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
