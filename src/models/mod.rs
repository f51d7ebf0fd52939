// Core domain models for the Albums API

//! # Domain Models Module
//!
//! Plain data structures shared by the engine and the HTTP layer. Nothing in
//! here knows about storage, locking or HTTP.
//!
//! ## Rust Learning Notes:
//!
//! ### Module Organization
//! This `mod.rs` file serves as the **module root** for the `models` directory.
//! Each `pub mod` declaration pulls in the sibling `.rs` file as a submodule,
//! and the `pub use` statements at the bottom flatten the API so callers can
//! write `use albums_api::models::Album`.

// Declares the `album` submodule from `album.rs`
// Contains Album and the seed catalogue
pub mod album;

// Declares the `join` submodule from `join.rs`
// Contains JoinResult - the combined output of the fan-out demo
pub mod join;

/// Re-export the album record and its seed data
pub use album::{seed_albums, Album};

/// Re-export the fan-out demo result
pub use join::JoinResult;
