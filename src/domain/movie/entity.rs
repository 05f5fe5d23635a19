use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single movie record in the catalog.
/// This is the sole entity managed by this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Internal immutable identifier. This is the true update target;
    /// the title is only a secondary, non-unique lookup key, so a record
    /// can be renamed and still be located.
    pub id: Uuid,

    /// Display title, the external key for lookup, delete and search
    pub title: String,

    /// Director name
    pub director: String,

    /// Release year
    pub year_released: i32,

    /// Genre label
    pub genre: String,

    /// Runtime in minutes
    pub duration_minutes: u32,

    /// Rating on a 0-10 scale
    pub rating: f64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Create a new Movie record with a generated identity.
    /// Field validity is checked separately by `validate_movie`.
    pub fn new(
        title: String,
        director: String,
        year_released: i32,
        genre: String,
        duration_minutes: u32,
        rating: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            director,
            year_released,
            genre,
            duration_minutes,
            rating,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the modification timestamp.
    /// The creation timestamp never changes.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie::new(
            "Seven Samurai".to_string(),
            "Akira Kurosawa".to_string(),
            1954,
            "Drama".to_string(),
            207,
            8.6,
        )
    }

    #[test]
    fn test_new_movie_has_identity_and_timestamps() {
        let movie = sample_movie();
        assert!(!movie.id.is_nil());
        assert_eq!(movie.created_at, movie.updated_at);
    }

    #[test]
    fn test_touch_preserves_creation_timestamp() {
        let mut movie = sample_movie();
        let created = movie.created_at;
        movie.touch();
        assert_eq!(movie.created_at, created);
        assert!(movie.updated_at >= created);
    }

    #[test]
    fn test_distinct_movies_get_distinct_ids() {
        let a = sample_movie();
        let b = sample_movie();
        assert_ne!(a.id, b.id);
    }
}
