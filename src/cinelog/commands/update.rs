use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &mut S, title: &str, rating: f64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.update(title, rating)? {
        result.add_message(CmdMessage::success(format!(
            "Updated: {} -> {:.1}",
            title, rating
        )));
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
    fn rewrites_rating_only() {
        let mut store = InMemoryStore::new();
        store
            .add(&Movie::new("Alien", 1979, 8.5).with_poster(Some("p".into())))
            .unwrap();

        run(&mut store, "Alien", 9.2).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed[0].rating, 9.2);
        assert_eq!(listed[0].year, 1979);
        assert_eq!(listed[0].poster.as_deref(), Some("p"));
    }

    #[test]
    fn absent_title_is_a_noop_with_message() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Alien", 9.2).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
