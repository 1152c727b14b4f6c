/*!
 * Model artifact bootstrapping.
 *
 * Ensures a local model file is present before the server accepts requests,
 * downloading it from its published URL on first run. The check is
 * idempotent and runs exactly once at startup, never per request.
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// A model file expected on disk, with the URL to fetch it from if absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelArtifact {
    /// Local path the model is expected at
    pub path: PathBuf,
    /// URL to download the model from when missing
    pub url: String,
}

impl ModelArtifact {
    /// Create a new artifact description
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    /// Whether the artifact already exists locally
    pub fn is_present(&self) -> bool {
        self.path.is_file()
    }

    /// Ensure the artifact exists locally, downloading it if necessary
    ///
    /// The download is written to a temporary sibling file and renamed into
    /// place, so a crashed download never leaves a truncated model behind.
    pub async fn ensure_present(&self) -> Result<()> {
        if self.is_present() {
            info!("Model already present at {:?}", self.path);
            return Ok(());
        }

        info!("Model not found at {:?}, downloading from {}", self.path, self.url);

        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }

        let response = reqwest::get(&self.url)
            .await
            .with_context(|| format!("Failed to request model from {}", self.url))?
            .error_for_status()
            .with_context(|| format!("Model download from {} was rejected", self.url))?;

        let bytes = response
            .bytes()
            .await
            .context("Failed to read model download body")?;

        let tmp_path = self.path.with_extension("download");
        fs::write(&tmp_path, &bytes)
            .with_context(|| format!("Failed to write model to {:?}", tmp_path))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to move model into place at {:?}", self.path))?;

        info!("Model downloaded and saved at {:?}", self.path);
        Ok(())
    }
}

/// Ensure every configured artifact is present, in order
pub async fn ensure_all(artifacts: &[ModelArtifact]) -> Result<()> {
    for artifact in artifacts {
        artifact.ensure_present().await?;
    }
    Ok(())
}

/// Create a directory and its parents if needed
fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensurePresent_withExistingFile_shouldNotDownload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        fs::write(&path, b"existing model bytes").unwrap();

        // The URL is unreachable on purpose; an existing file must short-circuit
        let artifact = ModelArtifact::new(&path, "http://127.0.0.1:9/model.bin");

        artifact.ensure_present().await.unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"existing model bytes");
    }

    #[tokio::test]
    async fn test_ensurePresent_withUnreachableUrl_shouldFail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("model.bin");

        let artifact = ModelArtifact::new(&path, "http://127.0.0.1:9/model.bin");

        assert!(artifact.ensure_present().await.is_err());
        assert!(!artifact.is_present());
    }

    #[test]
    fn test_isPresent_withDirectoryAtPath_shouldBeFalse() {
        let dir = tempfile::tempdir().unwrap();

        let artifact = ModelArtifact::new(dir.path(), "http://example.invalid/model.bin");

        assert!(!artifact.is_present());
    }

    #[tokio::test]
    async fn test_ensureAll_withEmptyList_shouldSucceed() {
        ensure_all(&[]).await.unwrap();
    }
}
