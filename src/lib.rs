// src/lib.rs
// Cinelog - Local-first movie catalog data-access layer
//
// Architecture:
// - Domain-centric: business rules live in the domain layer
// - Repositories: dumb data mappers over pooled SQLite
// - Services: the validated controller surface a host exposes
// - Explicit: no implicit behavior, no magic

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use domain::{validate_movie, DomainError, Movie};

pub use error::{AppError, AppResult};

pub use db::{
    create_connection_pool, create_connection_pool_at, get_connection, initialize_database,
    ConnectionPool,
};

pub use repositories::{MovieRepository, SqliteMovieRepository};

pub use services::{CreateMovieRequest, MovieService};
