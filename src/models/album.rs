// Album domain model - one record in the catalogue

//! # Album Model
//!
//! An [`Album`] is identified by its `id` string. Identifier uniqueness is
//! intended but never enforced: the store accepts duplicates, and every
//! lookup acts on the first matching record in storage order.
//!
//! ## Wire Shape
//!
//! ```json
//! { "id": "4", "title": "Kind of Blue", "artist": "Miles Davis", "price": 29.99 }
//! ```
//!
//! Missing fields and explicit `null`s bind to their zero values (empty
//! string, `0.0`), the same lenient binding clients of this API have always
//! relied on. A wrong type (e.g. `"price": "cheap"`) is still a binding error.
//! Keys are matched exactly: `{"ID": "5"}` does not set `id`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single album record
///
/// ## Rust Learning Notes:
///
/// ### `#[serde(default)]` on a struct
/// Tells serde to fall back to `Default::default()` for every field that is
/// absent from the input, instead of failing the whole deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Lookup key (not guaranteed unique)
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,

    /// Non-negative in intent, unvalidated
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Album {
    /// Convenience constructor
    ///
    /// ```rust
    /// # use albums_api::Album;
    /// let album = Album::new("11", "Giant Steps", "John Coltrane", 19.99);
    /// assert_eq!(album.id, "11");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// The catalogue every process starts with
///
/// Recreated identically on every start; nothing is persisted between runs.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
        Album::new("4", "Kind of Blue", "Miles Davis", 29.99),
        Album::new("5", "A Love Supreme", "John Coltrane", 34.99),
        Album::new("6", "The Shape of Jazz to Come", "Ornette Coleman", 25.99),
        Album::new("7", "Out to Lunch!", "Eric Dolphy", 31.99),
        Album::new("8", "Mingus Ah Um", "Charles Mingus", 27.99),
        Album::new("9", "Time Out", "The Dave Brubeck Quartet", 22.99),
        Album::new("10", "Somethin' Else", "Cannonball Adderley", 24.99),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_catalogue() {
        let albums = seed_albums();

        assert_eq!(albums.len(), 10);
        let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);

        let kind_of_blue = &albums[3];
        assert_eq!(kind_of_blue.title, "Kind of Blue");
        assert_eq!(kind_of_blue.artist, "Miles Davis");
        assert_eq!(kind_of_blue.price, 29.99);
    }

    #[test]
    fn test_wire_shape() {
        let album = Album::new("4", "Kind of Blue", "Miles Davis", 29.99);
        let value = serde_json::to_value(&album).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "4",
                "title": "Kind of Blue",
                "artist": "Miles Davis",
                "price": 29.99
            })
        );
    }

    #[test]
    fn test_missing_fields_bind_to_zero_values() {
        let album: Album = serde_json::from_value(json!({ "id": "12" })).unwrap();

        assert_eq!(album.id, "12");
        assert_eq!(album.title, "");
        assert_eq!(album.artist, "");
        assert_eq!(album.price, 0.0);
    }

    #[test]
    fn test_null_fields_bind_to_zero_values() {
        let album: Album = serde_json::from_value(json!({
            "id": "12",
            "title": null,
            "artist": null,
            "price": null
        }))
        .unwrap();

        assert_eq!(album, Album::new("12", "", "", 0.0));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let album: Album = serde_json::from_value(json!({ "ID": "5", "id": "6" })).unwrap();
        assert_eq!(album.id, "6");
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result: Result<Album, _> =
            serde_json::from_value(json!({ "id": "12", "price": "cheap" }));
        assert!(result.is_err());
    }
}
