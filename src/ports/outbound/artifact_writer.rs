use crate::shared::Result;
use std::path::PathBuf;

/// ArtifactWriter port for persisting rendered views
pub trait ArtifactWriter {
    /// Writes `content` as the artifact `file_name`
    ///
    /// # Returns
    /// The location the artifact was written to
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination is not writable or is a symbolic link
    /// - Disk space is insufficient
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
