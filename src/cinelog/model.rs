use serde::{Deserialize, Serialize};

/// A single catalog record. The title is the record's identity: the store
/// holds at most one movie per title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    /// 1.0-10.0, enforced by the CLI prompts rather than the store.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: None,
        }
    }

    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {:.1}", self.title, self.year, self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_omitted_from_json_when_absent() {
        let movie = Movie::new("Heat", 1995, 8.3);
        let json = serde_json::to_string(&movie).unwrap();
        assert!(!json.contains("poster"));

        let movie = movie.with_poster(Some("https://example.com/heat.jpg".into()));
        let json = serde_json::to_string(&movie).unwrap();
        assert!(json.contains("poster"));
    }

    #[test]
    fn display_renders_one_line() {
        let movie = Movie::new("Alien", 1979, 8.5);
        assert_eq!(movie.to_string(), "Alien (1979): 8.5");
    }
}
