// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod movie_service;


// Re-export all services and their types
pub use movie_service::{CreateMovieRequest, MovieService};
