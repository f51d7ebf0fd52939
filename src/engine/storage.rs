// Storage abstraction for the album catalogue
// This defines the interface for reading and mutating album records

//! # Storage Abstraction Layer
//!
//! The storage layer follows the **Repository Pattern**:
//! - **AlbumStorage trait**: Defines the interface for all record operations
//! - **InMemoryAlbumStorage**: Ordered in-process implementation (the only one today)
//!
//! ## Ordering and Identity
//!
//! Records live in a `Vec<Album>` and keep insertion order. There is no index:
//! every lookup is a linear scan comparing identifiers, and the *first* match
//! wins. Identifiers are not required to be unique, so after inserting a
//! duplicate, get/replace/delete all act on the earlier record.
//!
//! ## Thread Safety
//!
//! The sequence is shared by every request the server handles. All mutating
//! operations take the write half of a `tokio::sync::RwLock`; list and get
//! take the read half, so readers never observe a half-applied change.
//!
//! ## Rust Learning Notes:
//!
//! This file demonstrates:
//! - Async traits with the async-trait crate
//! - Interior mutability through an async `RwLock`
//! - `Result<Option<T>>` for "can fail, and might not exist"

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::{seed_albums, Album};
use crate::Result;

/// Storage trait for album records
///
/// ## Return Values
/// `Result<Option<T>>` means:
/// - `Ok(Some(value))`: The record was found (and changed, for mutations)
/// - `Ok(None)`: No record with that identifier, nothing was changed
/// - `Err(error)`: The backend itself failed
///
/// ## Rust Learning Notes:
///
/// ### Trait Bounds
/// - `Send`: Type can be safely moved between threads
/// - `Sync`: Type can be safely shared between threads via references
/// These bounds are required to share the store as `Arc<dyn AlbumStorage>`
/// across axum handlers.
#[async_trait::async_trait]
pub trait AlbumStorage: Send + Sync {
    /// Return the full current sequence in storage order
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// Return the first album whose identifier equals `id`
    async fn get_album(&self, id: &str) -> Result<Option<Album>>;

    /// Append `album` to the end of the sequence
    ///
    /// Always succeeds, even when an album with the same identifier exists.
    async fn insert_album(&self, album: Album) -> Result<Album>;

    /// Overwrite the first album whose identifier equals `id`
    ///
    /// The replacement is stored verbatim; its own `id` is not checked
    /// against `id`, so a replace can rename the slot.
    async fn replace_album(&self, id: &str, album: Album) -> Result<Option<Album>>;

    /// Remove the first album whose identifier equals `id`
    ///
    /// Later records shift left, keeping their relative order. Returns the
    /// resulting full sequence.
    async fn delete_album(&self, id: &str) -> Result<Option<Vec<Album>>>;
}

/// In-memory album store
///
/// ## Limitations
///
/// - **Not persistent**: Data is lost when process restarts
/// - **Not distributed**: Cannot share data across multiple processes
/// - **Linear lookups**: Every operation scans the sequence
///
/// `Default` gives the seeded catalogue, which is what the server starts with.
pub struct InMemoryAlbumStorage {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStorage {
    /// Empty store
    pub fn empty() -> Self {
        Self::with_albums(Vec::new())
    }

    /// Store holding `albums` in the given order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Store holding the ten seed albums
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }
}

impl Default for InMemoryAlbumStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

fn position_of(albums: &[Album], id: &str) -> Option<usize> {
    albums.iter().position(|album| album.id == id)
}

#[async_trait::async_trait]
impl AlbumStorage for InMemoryAlbumStorage {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        let albums = self.albums.read().await;
        Ok(albums.clone())
    }

    async fn get_album(&self, id: &str) -> Result<Option<Album>> {
        let albums = self.albums.read().await;

        // .cloned() is equivalent to .map(|a| a.clone())
        Ok(albums.iter().find(|album| album.id == id).cloned())
    }

    async fn insert_album(&self, album: Album) -> Result<Album> {
        let mut albums = self.albums.write().await;

        if position_of(&albums, &album.id).is_some() {
            debug!("Inserting album with duplicate id {}", album.id);
        }
        albums.push(album.clone());

        Ok(album)
    }

    async fn replace_album(&self, id: &str, album: Album) -> Result<Option<Album>> {
        let mut albums = self.albums.write().await;

        let Some(index) = position_of(&albums, id) else {
            return Ok(None);
        };

        if album.id != id {
            warn!("Replacing album {} renames it to {}", id, album.id);
        }
        albums[index] = album.clone();

        Ok(Some(album))
    }

    async fn delete_album(&self, id: &str) -> Result<Option<Vec<Album>>> {
        let mut albums = self.albums.write().await;

        let Some(index) = position_of(&albums, id) else {
            return Ok(None);
        };

        // Vec::remove shifts the tail left, preserving order
        albums.remove(index);

        Ok(Some(albums.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ids(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_returns_seed_in_order() {
        let storage = InMemoryAlbumStorage::seeded();

        let first = storage.list_albums().await.unwrap();
        let second = storage.list_albums().await.unwrap();

        assert_eq!(first, seed_albums());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_default_is_seeded() {
        let storage = InMemoryAlbumStorage::default();
        assert_eq!(storage.list_albums().await.unwrap().len(), 10);

        let empty = InMemoryAlbumStorage::empty();
        assert!(empty.list_albums().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_album() {
        let storage = InMemoryAlbumStorage::seeded();

        let album = storage.get_album("4").await.unwrap().unwrap();
        assert_eq!(album, Album::new("4", "Kind of Blue", "Miles Davis", 29.99));

        assert!(storage.get_album("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_appends() {
        let storage = InMemoryAlbumStorage::seeded();
        let new_album = Album::new("11", "X", "Y", 1.0);

        let inserted = storage.insert_album(new_album.clone()).await.unwrap();
        assert_eq!(inserted, new_album);

        let albums = storage.list_albums().await.unwrap();
        assert_eq!(albums.len(), 11);
        assert_eq!(albums.last(), Some(&new_album));
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolve_to_first_match() {
        let storage = InMemoryAlbumStorage::seeded();
        storage
            .insert_album(Album::new("4", "Duplicate", "Someone", 5.0))
            .await
            .unwrap();

        assert_eq!(storage.list_albums().await.unwrap().len(), 11);
        let found = storage.get_album("4").await.unwrap().unwrap();
        assert_eq!(found.title, "Kind of Blue");

        // Deleting removes the earlier record; the duplicate becomes visible
        storage.delete_album("4").await.unwrap().unwrap();
        let found = storage.get_album("4").await.unwrap().unwrap();
        assert_eq!(found.title, "Duplicate");
    }

    #[tokio::test]
    async fn test_replace_overwrites_in_place() {
        let storage = InMemoryAlbumStorage::seeded();
        let replacement = Album::new("2", "Jeru (Remastered)", "Gerry Mulligan", 19.99);

        let replaced = storage.replace_album("2", replacement.clone()).await.unwrap();
        assert_eq!(replaced, Some(replacement.clone()));

        let albums = storage.list_albums().await.unwrap();
        assert_eq!(albums.len(), 10);
        assert_eq!(albums[1], replacement);
    }

    #[tokio::test]
    async fn test_replace_can_rename() {
        let storage = InMemoryAlbumStorage::seeded();
        let renamed = Album::new("42", "Blue Train", "John Coltrane", 56.99);

        storage.replace_album("1", renamed.clone()).await.unwrap().unwrap();

        assert!(storage.get_album("1").await.unwrap().is_none());
        let albums = storage.list_albums().await.unwrap();
        assert_eq!(albums[0], renamed);
    }

    #[tokio::test]
    async fn test_replace_missing_leaves_store_unchanged() {
        let storage = InMemoryAlbumStorage::seeded();

        let result = storage
            .replace_album("99", Album::new("99", "X", "Y", 1.0))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(storage.list_albums().await.unwrap(), seed_albums());
    }

    #[tokio::test]
    async fn test_delete_preserves_order() {
        let storage = InMemoryAlbumStorage::seeded();

        let remaining = storage.delete_album("5").await.unwrap().unwrap();
        assert_eq!(ids(&remaining), vec!["1", "2", "3", "4", "6", "7", "8", "9", "10"]);
        assert_eq!(storage.list_albums().await.unwrap(), remaining);

        let remaining = storage.delete_album("1").await.unwrap().unwrap();
        assert_eq!(remaining.len(), 8);
        assert!(remaining.iter().all(|a| a.id != "1"));
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unchanged() {
        let storage = InMemoryAlbumStorage::seeded();

        assert!(storage.delete_album("99").await.unwrap().is_none());
        assert_eq!(storage.list_albums().await.unwrap(), seed_albums());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_not_lost() {
        let storage = Arc::new(InMemoryAlbumStorage::empty());

        let inserts = (0..100).map(|i| {
            let storage = storage.clone();
            tokio::spawn(async move {
                storage
                    .insert_album(Album::new(i.to_string(), "T", "A", 1.0))
                    .await
            })
        });
        for result in futures::future::join_all(inserts).await {
            result.unwrap().unwrap();
        }

        assert_eq!(storage.list_albums().await.unwrap().len(), 100);
    }
}
