//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains database, password-hashing, and session-store adapters.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM. Without it
//!   only the in-memory adapters are available.

pub mod auth;
pub mod database;
pub mod sessions;

// Re-exports - In-Memory
pub use database::{InMemoryBlogpostRepository, InMemoryUserRepository};
pub use sessions::InMemorySessionStore;

pub use auth::Argon2PasswordService;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{PostgresBlogpostRepository, PostgresUserRepository};
