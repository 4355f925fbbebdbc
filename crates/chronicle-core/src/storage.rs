//! Object-storage key derivation for article images.
//!
//! Uploads land in a single bucket under generated keys; deletion has to
//! recover the key from the public URL the article record holds.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Bucket holding uploaded article images.
pub const IMAGE_BUCKET: &str = "article-images";

/// Generate a storage key for an uploaded file: random token, millisecond
/// timestamp, and the original file extension (lowercased). A name without
/// an extension gets no suffix.
pub fn object_key(file_name: &str, now: DateTime<Utc>) -> String {
    let token = Uuid::new_v4().simple().to_string();
    let stamp = now.timestamp_millis();

    match extension(file_name) {
        Some(ext) => format!("{}-{}.{}", token, stamp, ext),
        None => format!("{}-{}", token, stamp),
    }
}

/// Recover the bucket-relative key from a public object URL.
///
/// Returns `None` for URLs that don't point into the image bucket.
pub fn key_from_url(url: &str) -> Option<&str> {
    let marker = format!("/{}/", IMAGE_BUCKET);
    let start = url.find(&marker)? + marker.len();
    let key = &url[start..];
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_object_key_shape() {
        let key = object_key("photo.JPG", at_millis(1_700_000_000_123));

        assert!(key.ends_with("-1700000000123.jpg"), "key was {}", key);
        let token = key.split('-').next().unwrap();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_object_keys_unique() {
        let now = at_millis(0);
        assert_ne!(object_key("a.png", now), object_key("a.png", now));
    }

    #[test]
    fn test_object_key_without_extension() {
        let key = object_key("photo", at_millis(99));
        assert!(key.ends_with("-99"), "key was {}", key);
        assert!(!key.contains('.'));
    }

    #[test]
    fn test_hidden_file_has_no_extension() {
        let key = object_key(".env", at_millis(5));
        assert!(!key.contains('.'));
    }

    #[test]
    fn test_key_from_url() {
        let url = "https://proj.supabase.co/storage/v1/object/public/article-images/abc-123.jpg";
        assert_eq!(key_from_url(url), Some("abc-123.jpg"));
    }

    #[test]
    fn test_key_from_unrelated_url() {
        assert_eq!(key_from_url("https://example.com/other/abc.jpg"), None);
        assert_eq!(
            key_from_url("https://proj.supabase.co/public/article-images/"),
            None
        );
    }
}
