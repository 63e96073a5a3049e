//! # Petdesk Database Crate
//!
//! This crate is the application-specific interface to the MySQL database
//! holding the `pets`, `types`, and `owners` tables. It encapsulates all
//! SQL so the rest of the application only sees `PetRecord` values.
//!
//! ## Public API
//!
//! - `connect`: establishes the database connection pool from settings.
//! - `run_migrations`: applies the embedded schema migrations.
//! - `PetRepository`: holds the pool and provides the data access methods
//!   (`fetch_pets`, `apply_update`).
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::PetRepository;
