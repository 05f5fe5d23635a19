// src/services/movie_service.rs
use crate::domain::movie::{validate_movie, Movie};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateMovieRequest {
    pub title: String,
    pub director: String,
    pub year_released: i32,
    pub genre: String,
    pub duration_minutes: u32,
    pub rating: f64,
}

/// The caller-facing controller over the movie collection.
///
/// Every operation is a single validate-then-execute step:
/// - record validation runs before any mutating storage access
/// - title/fragment arguments are checked before delete and search
/// - absence becomes `Ok(None)` for exact lookup, `NotFound` for
///   delete and fragment search
///
/// Errors propagate unmodified; there is no retry or suppression here.
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Add a movie to the catalog.
    /// Fails with `AppError::Validation` when any required field is
    /// missing or out of range; nothing is written in that case.
    pub fn add_movie(&self, request: CreateMovieRequest) -> AppResult<Uuid> {
        let movie = Movie::new(
            request.title,
            request.director,
            request.year_released,
            request.genre,
            request.duration_minutes,
            request.rating,
        );

        validate_movie(&movie)?;
        self.movie_repo.insert(&movie)?;

        log::info!("added movie {} ({})", movie.title, movie.id);
        Ok(movie.id)
    }

    /// Replace the stored record with matching id.
    ///
    /// Validation is checked FIRST: an invalid record reports the
    /// validation error even when its target is also missing. A valid
    /// record whose id matches nothing reports `NotFound`.
    pub fn update_movie(&self, movie: &Movie) -> AppResult<()> {
        validate_movie(movie)?;

        let mut record = movie.clone();
        record.touch();

        let affected = self.movie_repo.update(&record)?;
        if affected == 0 {
            log::debug!("update target {} not found", record.id);
            return Err(AppError::NotFound(record.title));
        }

        log::info!("updated movie {} ({})", record.title, record.id);
        Ok(())
    }

    /// Delete the first record whose title matches exactly.
    ///
    /// A blank title is malformed input (`InvalidArgument`, checked
    /// before any storage access); a well-formed title with no match
    /// is absent data (`NotFound`).
    pub fn delete_movie(&self, title: &str) -> AppResult<()> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "title must not be empty".to_string(),
            ));
        }

        let removed = self.movie_repo.delete_by_title(title)?;
        if removed == 0 {
            return Err(AppError::NotFound(title.to_string()));
        }

        log::info!("deleted movie {}", title);
        Ok(())
    }

    /// All records in the catalog; an empty store is an empty Vec.
    pub fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_all()
    }

    /// First record matching the title exactly.
    /// Absence is a normal value here, never an error.
    pub fn get_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        self.movie_repo.get_by_title(title)
    }

    /// All records whose title contains the fragment as a substring.
    /// Unlike exact lookup, zero matches is an explicit `NotFound`.
    pub fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        if fragment.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "search fragment must not be empty".to_string(),
            ));
        }

        let matches = self.movie_repo.search_by_title(fragment)?;
        if matches.is_empty() {
            log::debug!("no titles contain {:?}", fragment);
            return Err(AppError::NotFound(fragment.to_string()));
        }

        Ok(matches)
    }
}
