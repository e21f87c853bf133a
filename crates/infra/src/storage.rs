//! JSON-file snapshot persistence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use trolley_core::CartSnapshot;
use trolley_store::CartRepository;

/// [`CartRepository`] storing one JSON file per key in a directory.
///
/// The key (a namespaced string such as `@trolley:cart`) is sanitized into a
/// file name; the payload is the versioned [`CartSnapshot`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct FileCartRepository {
    dir: PathBuf,
}

impl FileCartRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Repository under the OS user-data directory:
    /// `{app_data_dir}/trolley`.
    pub fn in_user_data() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory")?;

        let mut dir = base;
        dir.push("trolley");
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl CartRepository for FileCartRepository {
    async fn load(&self, key: &str) -> anyhow::Result<Option<CartSnapshot>> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read cart snapshot at {path:?}"))
            }
        };

        let snapshot = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to decode cart snapshot at {path:?}"))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("failed to create snapshot directory at {:?}", self.dir))?;

        let path = self.path_for(key);
        let payload =
            serde_json::to_vec_pretty(snapshot).context("failed to encode cart snapshot")?;
        tokio::fs::write(&path, payload)
            .await
            .with_context(|| format!("failed to write cart snapshot at {path:?}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_core::{Cart, CartLine, ProductId, ProductInfo};
    use trolley_store::CART_STORAGE_KEY;

    fn test_snapshot() -> CartSnapshot {
        let cart = Cart::empty().with_new_line(CartLine::first(
            ProductId::new(1),
            ProductInfo {
                title: "Tênis".to_string(),
                price: 17_990,
                image: "https://cdn.example.com/1.jpg".to_string(),
            },
        ));
        CartSnapshot::capture(&cart)
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCartRepository::new(dir.path());

        let snapshot = test_snapshot();
        repo.save(CART_STORAGE_KEY, &snapshot).await.unwrap();

        let loaded = repo.load(CART_STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn load_of_a_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCartRepository::new(dir.path());
        assert!(repo.load(CART_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_of_a_corrupt_file_is_an_error_not_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileCartRepository::new(dir.path());

        let path = repo.path_for(CART_STORAGE_KEY);
        tokio::fs::create_dir_all(repo.dir()).await.unwrap();
        tokio::fs::write(&path, b"not json").await.unwrap();

        assert!(repo.load(CART_STORAGE_KEY).await.is_err());
    }

    #[test]
    fn keys_sanitize_into_stable_file_names() {
        let repo = FileCartRepository::new("/tmp/trolley-test");
        let path = repo.path_for("@trolley:cart");
        assert_eq!(path.file_name().unwrap(), "-trolley-cart.json");
    }
}
