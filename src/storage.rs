use crate::errors::StoreError;
use crate::models::{Entry, LogCollection};
use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::info;

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("APP_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("user_data")
}

/// Derives the backing file for an identity. The readable part of the name is
/// a sanitized slug; uniqueness comes from a digest of the full identity, so
/// identities that only differ in characters invalid in a filename ("a/b" vs
/// "a_b") still get distinct files, and no identity can escape the data dir.
pub fn data_file_path(data_dir: &Path, identity: &str) -> PathBuf {
    let slug: String = identity
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .take(40)
        .collect();
    let slug = if slug.is_empty() { "user".to_string() } else { slug };

    let digest = Sha256::digest(identity.as_bytes());
    let tag: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();

    data_dir.join(format!("{slug}-{tag}.json"))
}

/// Parses a date in string form and returns its canonical ISO rendering.
pub fn canonical_date(input: &str) -> Result<String, StoreError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| StoreError::validation(format!("'{trimmed}' is not a valid date (expected YYYY-MM-DD)")))?;
    Ok(date.to_string())
}

pub fn validate_value(value: i64) -> Result<u8, StoreError> {
    if !(0..=100).contains(&value) {
        return Err(StoreError::validation(format!(
            "value must be between 0 and 100, got {value}"
        )));
    }
    Ok(value as u8)
}

/// Returns the persisted collection for `identity`. A missing file is not an
/// error: an empty collection is created and persisted first, so subsequent
/// loads find it. An unreadable file surfaces as `Storage`, an unparsable one
/// as `Corruption` — never silently replaced with an empty collection.
pub async fn load(data_dir: &Path, identity: &str) -> Result<LogCollection, StoreError> {
    let path = data_file_path(data_dir, identity);
    match fs::read(&path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corruption {
            path: path.display().to_string(),
            source,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let collection = LogCollection::default();
            persist(&path, &collection).await?;
            info!("created empty log at {}", path.display());
            Ok(collection)
        }
        Err(err) => Err(StoreError::Storage(err)),
    }
}

/// Inserts or replaces the entry for `date` and persists the full collection.
/// Returns the canonical date and the stored entry.
pub async fn upsert(
    data_dir: &Path,
    identity: &str,
    date: &str,
    value: i64,
    note: String,
) -> Result<(String, Entry), StoreError> {
    let date = canonical_date(date)?;
    let battery = validate_value(value)?;

    let mut collection = load(data_dir, identity).await?;
    let entry = Entry { battery, note };
    collection.entries.insert(date.clone(), entry.clone());
    persist(&data_file_path(data_dir, identity), &collection).await?;

    Ok((date, entry))
}

/// Removes the entry for `date` if present. Deleting an absent date is a
/// no-op, not an error. Returns whether an entry was removed.
pub async fn delete(data_dir: &Path, identity: &str, date: &str) -> Result<bool, StoreError> {
    let date = canonical_date(date)?;

    let mut collection = load(data_dir, identity).await?;
    let removed = collection.entries.remove(&date).is_some();
    if removed {
        persist(&data_file_path(data_dir, identity), &collection).await?;
    }

    Ok(removed)
}

async fn persist(path: &Path, collection: &LogCollection) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(collection)
        .map_err(|err| StoreError::Storage(std::io::Error::other(err)))?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn paths_stay_inside_the_data_dir() {
        let dir = PathBuf::from("/tmp/logs");
        let path = data_file_path(&dir, "../../etc/passwd");
        assert!(path.starts_with(&dir));
        assert!(!path.display().to_string().contains(".."));
    }

    #[test]
    fn colliding_slugs_get_distinct_files() {
        let dir = PathBuf::from("/tmp/logs");
        assert_ne!(data_file_path(&dir, "a/b"), data_file_path(&dir, "a_b"));
        assert_eq!(data_file_path(&dir, "nickname1"), data_file_path(&dir, "nickname1"));
    }

    #[test]
    fn dates_are_canonicalized_or_rejected() {
        assert_eq!(canonical_date(" 2024-06-01 ").unwrap(), "2024-06-01");
        assert!(canonical_date("2024-13-01").is_err());
        assert!(canonical_date("yesterday").is_err());
    }

    #[test]
    fn value_bounds() {
        assert_eq!(validate_value(0).unwrap(), 0);
        assert_eq!(validate_value(100).unwrap(), 100);
        assert!(validate_value(-1).is_err());
        assert!(validate_value(101).is_err());
    }

    #[tokio::test]
    async fn first_load_creates_an_empty_collection_on_disk() {
        let dir = tempdir().unwrap();
        let collection = load(dir.path(), "brand-new-user").await.unwrap();
        assert!(collection.is_empty());
        assert!(data_file_path(dir.path(), "brand-new-user").exists());
    }

    #[tokio::test]
    async fn upsert_then_load_round_trips() {
        let dir = tempdir().unwrap();
        upsert(dir.path(), "roundtrip", "2024-06-01", 72, "slept well".into())
            .await
            .unwrap();

        let collection = load(dir.path(), "roundtrip").await.unwrap();
        let entry = &collection.entries["2024-06-01"];
        assert_eq!(entry.battery, 72);
        assert_eq!(entry.note, "slept well");
    }

    #[tokio::test]
    async fn upsert_is_idempotent_and_replaces() {
        let dir = tempdir().unwrap();
        upsert(dir.path(), "editor", "2024-06-01", 40, "tired".into()).await.unwrap();
        upsert(dir.path(), "editor", "2024-06-01", 40, "tired".into()).await.unwrap();

        let once = load(dir.path(), "editor").await.unwrap();
        assert_eq!(once.len(), 1);

        upsert(dir.path(), "editor", "2024-06-01", 90, "recovered".into()).await.unwrap();
        let replaced = load(dir.path(), "editor").await.unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced.entries["2024-06-01"].battery, 90);
        assert_eq!(replaced.entries["2024-06-01"].note, "recovered");
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_date() {
        let dir = tempdir().unwrap();
        upsert(dir.path(), "cleaner", "2024-06-01", 10, String::new()).await.unwrap();
        upsert(dir.path(), "cleaner", "2024-06-02", 20, String::new()).await.unwrap();

        assert!(delete(dir.path(), "cleaner", "2024-06-01").await.unwrap());
        let collection = load(dir.path(), "cleaner").await.unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.entries.contains_key("2024-06-02"));

        assert!(!delete(dir.path(), "cleaner", "2024-06-05").await.unwrap());
        let unchanged = load(dir.path(), "cleaner").await.unwrap();
        assert_eq!(unchanged, collection);
    }

    #[tokio::test]
    async fn corrupted_file_is_an_error_not_an_empty_collection() {
        let dir = tempdir().unwrap();
        let path = data_file_path(dir.path(), "victim01");
        std::fs::write(&path, b"not json at all").unwrap();

        match load(dir.path(), "victim01").await {
            Err(StoreError::Corruption { .. }) => {}
            other => panic!("expected corruption error, got {other:?}"),
        }
        // The file must be left untouched for the user to inspect.
        assert_eq!(std::fs::read(&path).unwrap(), b"not json at all");
    }
}
