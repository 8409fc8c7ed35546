//! # Marketboard Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database holding the stock and stock-price tables.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate encapsulates all database-specific logic. It
//!   provides a clean, abstract API to the rest of the application, hiding
//!   the underlying SQL and database implementation details.
//! - **Injected Pool:** The connection pool is built from settings passed
//!   in by the caller and owned by the repository; there is no process-wide
//!   handle and no environment access inside this crate.
//! - **Asynchronous & Pooled:** All operations are asynchronous, and a
//!   bounded `PgPool` is shared across concurrent requests.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply database migrations, ensuring the
//!   schema is up-to-date.
//! - `StockRepository`: The main struct that holds the connection pool and
//!   provides all the high-level data access methods.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::StockRepository;
