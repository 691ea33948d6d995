use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::CweTreeError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemArtifactWriter adapter for writing view artifacts to a directory
///
/// This adapter implements the ArtifactWriter port for file output.
pub struct FileSystemArtifactWriter {
    output_dir: PathBuf,
}

impl FileSystemArtifactWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Creates the output directory (and missing parents) and returns a writer for it
    pub fn create(output_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&output_dir).map_err(|e| CweTreeError::InvalidOutputDirectory {
            path: output_dir.clone(),
            reason: format!("Failed to create directory: {}", e),
        })?;

        let writer = Self::new(output_dir);
        writer.validate_output_directory()?;
        Ok(writer)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn validate_output_directory(&self) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(CweTreeError::InvalidOutputDirectory {
                path: self.output_dir.clone(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ArtifactWriter for FileSystemArtifactWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let write_failed = |details: String| CweTreeError::FileWriteError {
            path: path.clone(),
            details,
        };

        if !self.output_dir.is_dir() {
            return Err(write_failed(format!(
                "Output directory does not exist: {}",
                self.output_dir.display()
            ))
            .into());
        }

        // Security: Refuse to follow a symlink planted at the artifact path
        validate_not_symlink(&path, "write").map_err(|e| write_failed(e.to_string()))?;

        fs::write(&path, content).map_err(|e| write_failed(e.to_string()))?;

        Ok(path)
    }
}
