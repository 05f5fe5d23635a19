use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};
use chrono::{Datelike, Utc};

/// Validates all Movie invariants
/// These are the absolute rules that must hold for a Movie to be valid.
/// The gate is all-or-nothing: any single violation makes the record invalid.
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_director(&movie.director)?;
    validate_year_released(movie.year_released)?;
    validate_genre(&movie.genre)?;
    validate_duration(movie.duration_minutes)?;
    validate_rating(movie.rating)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Director cannot be empty
fn validate_director(director: &str) -> DomainResult<()> {
    if director.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie director cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Release year must be positive and not further out than next year
fn validate_year_released(year: i32) -> DomainResult<()> {
    if year <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie release year must be positive, got {}",
            year
        )));
    }
    let next_year = Utc::now().year() + 1;
    if year > next_year {
        return Err(DomainError::InvariantViolation(format!(
            "Movie release year {} is beyond {}",
            year, next_year
        )));
    }
    Ok(())
}

/// Genre cannot be empty
fn validate_genre(genre: &str) -> DomainResult<()> {
    if genre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie genre cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Duration must be a positive number of minutes
fn validate_duration(duration_minutes: u32) -> DomainResult<()> {
    if duration_minutes == 0 {
        return Err(DomainError::InvariantViolation(
            "Movie duration must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Rating is bounded to the 0-10 scale
fn validate_rating(rating: f64) -> DomainResult<()> {
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(DomainError::InvariantViolation(format!(
            "Movie rating must be between 0 and 10, got {}",
            rating
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Title, director and genre are non-empty text
/// 3. Release year is positive and at most one year in the future
/// 4. Duration is a positive number of minutes
/// 5. Rating stays on the 0-10 scale
/// 6. Titles are not required to be unique; exact lookup returns the first match
/// 7. Created timestamp never changes
