// src/repositories/movie_repository.rs
//
// Movie persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::movie::Movie;
use crate::error::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Direct, unvalidated access to the movie collection.
/// Validation and the caller-facing error taxonomy live in the service layer.
#[cfg_attr(test, automock)]
pub trait MovieRepository: Send + Sync {
    fn insert(&self, movie: &Movie) -> AppResult<()>;
    fn insert_many(&self, movies: &[Movie]) -> AppResult<()>;
    /// Replaces the stored record with matching id. Returns the
    /// affected-row count; existence policy is the service's concern.
    fn update(&self, movie: &Movie) -> AppResult<usize>;
    /// Removes the first record whose title matches exactly.
    /// Returns the removed-row count (0 or 1).
    fn delete_by_title(&self, title: &str) -> AppResult<usize>;
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    fn get_by_title(&self, title: &str) -> AppResult<Option<Movie>>;
    /// Substring containment on title, case-insensitive for ASCII
    /// (SQLite LIKE default). `%` and `_` in the fragment match literally.
    fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Movie>>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let title: String = row.get("title")?;
        let director: String = row.get("director")?;
        let year_released: i32 = row.get("year_released")?;
        let genre: String = row.get("genre")?;
        let duration_minutes: u32 = row.get::<_, i64>("duration_minutes")? as u32;
        let rating: f64 = row.get("rating")?;

        let created_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("created_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        let updated_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("updated_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Movie {
            id,
            title,
            director,
            year_released,
            genre,
            duration_minutes,
            rating,
            created_at,
            updated_at,
        })
    }

    /// Build a LIKE pattern that matches the fragment literally anywhere
    /// in the title. SQLite wildcards in the fragment are escaped.
    fn containment_pattern(fragment: &str) -> String {
        let escaped = fragment
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn insert(&self, movie: &Movie) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movies (id, title, director, year_released, genre, duration_minutes, rating, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                movie.id.to_string(),
                movie.title,
                movie.director,
                movie.year_released,
                movie.genre,
                movie.duration_minutes,
                movie.rating,
                movie.created_at.to_rfc3339(),
                movie.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn insert_many(&self, movies: &[Movie]) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        for movie in movies {
            tx.execute(
                "INSERT INTO movies (id, title, director, year_released, genre, duration_minutes, rating, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    movie.id.to_string(),
                    movie.title,
                    movie.director,
                    movie.year_released,
                    movie.genre,
                    movie.duration_minutes,
                    movie.rating,
                    movie.created_at.to_rfc3339(),
                    movie.updated_at.to_rfc3339(),
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn update(&self, movie: &Movie) -> AppResult<usize> {
        let conn = self.pool.get()?;

        // Keyed on the immutable id so a renamed record stays reachable.
        // created_at is never rewritten.
        let affected = conn.execute(
            "UPDATE movies
             SET title = ?2, director = ?3, year_released = ?4, genre = ?5,
                 duration_minutes = ?6, rating = ?7, updated_at = ?8
             WHERE id = ?1",
            params![
                movie.id.to_string(),
                movie.title,
                movie.director,
                movie.year_released,
                movie.genre,
                movie.duration_minutes,
                movie.rating,
                movie.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(affected)
    }

    fn delete_by_title(&self, title: &str) -> AppResult<usize> {
        let conn = self.pool.get()?;

        // Delete-one semantics: titles are not unique, remove the first match
        let removed = conn.execute(
            "DELETE FROM movies WHERE rowid =
                 (SELECT rowid FROM movies WHERE title = ?1 LIMIT 1)",
            params![title],
        )?;

        Ok(removed)
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM movies ORDER BY title")?;

        let movies: Vec<Movie> = stmt
            .query_map([], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn get_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM movies WHERE title = ?1 LIMIT 1")?;

        match stmt.query_row(params![title], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn search_by_title(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn
            .prepare("SELECT * FROM movies WHERE title LIKE ?1 ESCAPE '\\' ORDER BY title")?;

        let movies: Vec<Movie> = stmt
            .query_map(params![Self::containment_pattern(fragment)], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, initialize_database};
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, SqliteMovieRepository) {
        let dir = TempDir::new().unwrap();
        let pool = create_connection_pool_at(&dir.path().join("movies.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        (dir, SqliteMovieRepository::new(Arc::new(pool)))
    }

    fn movie(title: &str, rating: f64) -> Movie {
        Movie::new(
            title.to_string(),
            "Sidney Lumet".to_string(),
            1957,
            "Drama".to_string(),
            96,
            rating,
        )
    }

    #[test]
    fn test_insert_then_get_by_title_round_trips_all_fields() {
        let (_dir, repo) = test_repo();
        let stored = movie("12 Angry Men", 9.0);
        repo.insert(&stored).unwrap();

        let found = repo.get_by_title("12 Angry Men").unwrap().unwrap();
        assert_eq!(found.id, stored.id);
        assert_eq!(found.title, stored.title);
        assert_eq!(found.director, stored.director);
        assert_eq!(found.year_released, stored.year_released);
        assert_eq!(found.genre, stored.genre);
        assert_eq!(found.duration_minutes, stored.duration_minutes);
        assert_eq!(found.rating, stored.rating);
    }

    #[test]
    fn test_get_by_title_absent_is_none() {
        let (_dir, repo) = test_repo();
        assert!(repo.get_by_title("Nothing Here").unwrap().is_none());
    }

    #[test]
    fn test_list_all_empty_store_is_empty_vec() {
        let (_dir, repo) = test_repo();
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_many_then_list_all() {
        let (_dir, repo) = test_repo();
        let batch = vec![movie("Alpha", 5.0), movie("Beta", 6.0), movie("Gamma", 7.0)];
        repo.insert_many(&batch).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_update_is_keyed_on_id_not_title() {
        let (_dir, repo) = test_repo();
        let mut stored = movie("Original Title", 7.0);
        repo.insert(&stored).unwrap();

        stored.title = "Renamed Title".to_string();
        stored.rating = 9.5;
        let affected = repo.update(&stored).unwrap();
        assert_eq!(affected, 1);

        assert!(repo.get_by_title("Original Title").unwrap().is_none());
        let renamed = repo.get_by_title("Renamed Title").unwrap().unwrap();
        assert_eq!(renamed.id, stored.id);
        assert_eq!(renamed.rating, 9.5);
    }

    #[test]
    fn test_update_missing_record_affects_zero_rows() {
        let (_dir, repo) = test_repo();
        let never_stored = movie("Ghost", 5.0);
        assert_eq!(repo.update(&never_stored).unwrap(), 0);
    }

    #[test]
    fn test_delete_by_title_removes_one_match() {
        let (_dir, repo) = test_repo();
        repo.insert(&movie("Duplicate", 6.0)).unwrap();
        repo.insert(&movie("Duplicate", 8.0)).unwrap();

        assert_eq!(repo.delete_by_title("Duplicate").unwrap(), 1);
        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_by_title_missing_returns_zero() {
        let (_dir, repo) = test_repo();
        assert_eq!(repo.delete_by_title("Absent").unwrap(), 0);
    }

    #[test]
    fn test_search_matches_substring_not_prefix() {
        let (_dir, repo) = test_repo();
        repo.insert(&movie("The Test Movie", 7.5)).unwrap();
        repo.insert(&movie(" Movie", 9.5)).unwrap();

        let hits = repo.search_by_title("Test").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Test Movie");
    }

    #[test]
    fn test_search_escapes_like_wildcards() {
        let (_dir, repo) = test_repo();
        repo.insert(&movie("100% Wolf", 5.9)).unwrap();
        repo.insert(&movie("100 Wolf", 5.0)).unwrap();

        let hits = repo.search_by_title("100%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% Wolf");
    }

    #[test]
    fn test_search_no_match_is_empty_vec() {
        let (_dir, repo) = test_repo();
        repo.insert(&movie("Something", 5.0)).unwrap();
        assert!(repo.search_by_title("zzz").unwrap().is_empty());
    }
}
