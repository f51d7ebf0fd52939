// Albums API Engine
// The record store and the concurrent join demo

//! # Engine Module
//!
//! The layer between the domain models and the HTTP API.
//!
//! ## Engine Components
//!
//! ### Storage Engine (`storage` module)
//! - [`AlbumStorage`] trait abstracting the record store
//! - [`InMemoryAlbumStorage`] keeping an ordered `Vec<Album>` behind a lock
//! - Linear scans by identifier, first match wins
//!
//! ### Fan-out Engine (`fanout` module)
//! - [`DownstreamService`] trait for a single remote call
//! - [`SimulatedService`] sleeping a fixed latency before answering
//! - [`FanOutJoiner`] running two calls concurrently and joining the results
//!
//! ## Rust Learning Notes:
//!
//! ### Module Organization Pattern
//! 1. Create a directory with the module name (`engine/`)
//! 2. Add a `mod.rs` file as the module root
//! 3. Declare submodules in `mod.rs`
//! 4. Re-export important types for clean API

/// Record store abstraction and in-memory implementation
pub mod storage;

/// Concurrent fan-out/join over two downstream calls
pub mod fanout;

pub use fanout::{DownstreamService, FanOutJoiner, SimulatedService, DEFAULT_LATENCY};
pub use storage::{AlbumStorage, InMemoryAlbumStorage};
