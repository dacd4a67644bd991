use crate::domain::synthesis::SynthesisError;
use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Directory receiving one raw audio file per synthesized sentence
#[derive(Debug)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    /// Create the directory (and parents) if needed
    pub fn create(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            AppError::FileSystem(format!("Failed to create audio dir {}: {}", dir.display(), e))
        })?;

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn save(&self, file_name: &str, audio: &[u8]) -> Result<PathBuf, SynthesisError> {
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, audio).await.map_err(|e| {
            SynthesisError::FileSystem(format!("failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}
