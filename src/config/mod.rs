#[cfg(feature = "cli")]
pub mod cli;
pub mod prompt;
pub mod run;
pub mod toml_config;

use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation;
use std::path::Path;

/// Writes output files into an existing folder.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        let folder = validation::output_folder(&base_path);
        if folder.is_empty() {
            tracing::info!("📂 No folder given, writing to the working directory");
        }
        Self {
            base_path: folder.to_string(),
        }
    }
}

impl Storage for LocalStorage {
    // 不自動建立資料夾，路徑錯誤時回報寫入失敗
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        tokio::fs::write(&full_path, data).await?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_into_folder() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let path = storage.write_file("users.json", b"[]").await.unwrap();

        assert!(path.ends_with("users.json"));
        assert_eq!(std::fs::read(temp_dir.path().join("users.json")).unwrap(), b"[]");
    }

    #[test]
    fn test_blank_folder_writes_bare_file_name() {
        let storage = LocalStorage::new("  ".to_string());
        assert_eq!(storage.base_path, "");
        assert_eq!(Path::new(&storage.base_path).join("users.json"), Path::new("users.json"));
    }

    #[tokio::test]
    async fn test_write_file_nul_in_folder_fails() {
        let storage = LocalStorage::new("bad\0folder".to_string());
        assert!(storage.write_file("users.json", b"[]").await.is_err());
    }

    #[tokio::test]
    async fn test_write_file_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let storage = LocalStorage::new(missing.to_str().unwrap().to_string());

        let result = storage.write_file("users.csv", b"x").await;

        assert!(result.is_err());
        assert!(!missing.exists());
    }
}
