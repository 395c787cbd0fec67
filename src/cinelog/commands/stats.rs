use crate::commands::{CmdMessage, CmdResult, RatingStats};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let movies = store.list()?;
    if movies.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No movies in database."));
        return Ok(result);
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let median = median_of_sorted(&ratings);

    let highest = ratings[ratings.len() - 1];
    let lowest = ratings[0];
    let best = movies
        .iter()
        .filter(|m| m.rating == highest)
        .cloned()
        .collect();
    let worst = movies
        .iter()
        .filter(|m| m.rating == lowest)
        .cloned()
        .collect();

    Ok(CmdResult::default().with_stats(RatingStats {
        average,
        median,
        best,
        worst,
    }))
}

fn median_of_sorted(ratings: &[f64]) -> f64 {
    let mid = ratings.len() / 2;
    if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_catalog_yields_message_and_no_stats() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        let fixture = StoreFixture::new()
            .with_movie("A", 2000, 4.0)
            .with_movie("B", 2001, 6.0)
            .with_movie("C", 2002, 8.0);

        let stats = run(&fixture.store).unwrap().stats.unwrap();
        assert!((stats.average - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn median_odd_count_is_the_middle_value() {
        let fixture = StoreFixture::new()
            .with_movie("A", 2000, 2.0)
            .with_movie("B", 2001, 9.0)
            .with_movie("C", 2002, 5.0);

        let stats = run(&fixture.store).unwrap().stats.unwrap();
        assert!((stats.median - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn median_even_count_averages_the_middle_pair() {
        let fixture = StoreFixture::new()
            .with_movie("A", 2000, 2.0)
            .with_movie("B", 2001, 4.0)
            .with_movie("C", 2002, 6.0)
            .with_movie("D", 2003, 9.0);

        let stats = run(&fixture.store).unwrap().stats.unwrap();
        assert!((stats.median - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn best_and_worst_include_ties() {
        let mut store = InMemoryStore::new();
        store.add(&Movie::new("A", 2000, 9.0)).unwrap();
        store.add(&Movie::new("B", 2001, 9.0)).unwrap();
        store.add(&Movie::new("C", 2002, 3.0)).unwrap();

        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.best.len(), 2);
        assert_eq!(stats.worst.len(), 1);
        assert_eq!(stats.worst[0].title, "C");
    }
}
