// Albums API - Rust Edition
// A small in-memory album catalogue served over HTTP, plus a fan-out/join demo

//! # Albums API Library
//!
//! This is the main library crate for the Albums API. It defines the public API
//! that the `server` binary (and any embedding crate) builds on.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`Album`]: One catalogue record (`id`, `title`, `artist`, `price`)
//! - [`JoinResult`]: The combined output of the two simulated downstream calls
//!
//! ### Engine
//!
//! #### [`AlbumStorage`] / [`InMemoryAlbumStorage`] - The Record Store
//!
//! An ordered sequence of albums kept in process memory. Lookups are linear
//! scans by identifier equality and always act on the *first* match, because
//! identifier uniqueness is never enforced.
//!
//! **Usage Example:**
//! ```rust
//! use albums_api::{AlbumStorage, InMemoryAlbumStorage};
//!
//! # tokio_test::block_on(async {
//! let storage = InMemoryAlbumStorage::seeded();
//! let album = storage.get_album("4").await.unwrap().unwrap();
//! assert_eq!(album.title, "Kind of Blue");
//! # });
//! ```
//!
//! #### [`FanOutJoiner`] - Concurrent Join Demo
//!
//! Launches two independent downstream calls on their own tokio tasks, waits
//! for both and combines the results. Total latency is the longer of the two
//! calls, not their sum.
//!
//! ### HTTP API
//! [`AlbumsApiServer`] wires everything into an axum router.
//!
//! ## Rust Learning Notes:
//!
//! ### Re-exports
//! `pub use` statements create shortcuts so users don't need to know the internal
//! module structure. Instead of `use albums_api::models::album::Album`,
//! users can write `use albums_api::Album`.

// Core domain models
pub mod models;

// Record store and the fan-out/join demo
pub mod engine;

// HTTP routes, handlers and server setup
pub mod api;

// Re-export core domain types for easy access
pub use models::{seed_albums, Album, JoinResult};

// Re-export engine types for convenience
pub use engine::{
    fanout::{DownstreamService, FanOutJoiner, SimulatedService, DEFAULT_LATENCY},
    storage::{AlbumStorage, InMemoryAlbumStorage},
};

// Re-export API types for convenience
pub use api::{
    create_default_server, create_server_with_config,
    types::{ErrorResponse, IndentedJson},
    AlbumsApiConfig, AlbumsApiServer, AlbumsApiServerBuilder,
};

use thiserror::Error;

/// Custom error types for Albums API operations
///
/// ## Rust Learning Notes:
///
/// ### The `thiserror` Crate
/// - `#[derive(Error)]` implements the `std::error::Error` trait
/// - `#[error("...")]` provides human-readable error messages
/// - `#[from]` enables automatic conversion from other error types
#[derive(Error, Debug)]
pub enum AlbumsError {
    /// No album matched the requested identifier
    #[error("Album not found: {0}")]
    NotFound(String),

    /// A request body did not bind to the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for AlbumsError {
    fn from(err: tokio::task::JoinError) -> Self {
        AlbumsError::Internal(format!("downstream task failed: {}", err))
    }
}

/// Type alias for Results that use our custom error type
pub type Result<T> = std::result::Result<T, AlbumsError>;
