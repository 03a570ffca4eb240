//! Filesystem adapter for slsart.
//!
//! Implements the `FileSystem` trait from `slsart-core` for real filesystem
//! I/O. All operations go through `tokio::fs`.

use std::path::Path;

use slsart_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new LocalFileSystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        // Ensure parent directory exists; a bare filename has an empty
        // parent, which create_dir_all accepts as a no-op.
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_file() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("script.yml");

        fs.write_file(&file_path, "config:\n").await.unwrap();
        let content = tokio::fs::read_to_string(&file_path).await.unwrap();
        assert_eq!(content, "config:\n");
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("nested").join("deep").join("script.yml");

        fs.write_file(&file_path, "scenarios:\n").await.unwrap();
        let content = tokio::fs::read_to_string(&file_path).await.unwrap();
        assert_eq!(content, "scenarios:\n");
    }

    #[tokio::test]
    async fn test_write_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("script.yml");

        fs.write_file(&file_path, "first").await.unwrap();
        fs.write_file(&file_path, "second").await.unwrap();
        let content = tokio::fs::read_to_string(&file_path).await.unwrap();
        assert_eq!(content, "second");
    }
}
