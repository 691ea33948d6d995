use crate::adapters::outbound::archive::ViewArchive;
use crate::ports::outbound::TaxonomySource;
use crate::shared::error::CweTreeError;
use crate::shared::security::{validate_payload_size, validate_view_id, MAX_PAYLOAD_SIZE};
use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, ViewDefinition};
use async_trait::async_trait;
use std::path::PathBuf;

/// LocalArchiveSource adapter for reading view archives from a directory
///
/// This adapter implements the TaxonomySource port for offline runs: it
/// expects `<archive_dir>/<view-id>.xml.zip` laid out exactly as on the
/// download server.
pub struct LocalArchiveSource {
    archive_dir: PathBuf,
    namespace: String,
}

impl LocalArchiveSource {
    pub fn new(archive_dir: PathBuf, namespace: impl Into<String>) -> Self {
        Self {
            archive_dir,
            namespace: namespace.into(),
        }
    }

    fn archive_path(&self, view: &ViewDefinition) -> Result<PathBuf> {
        validate_view_id(view.id())?;
        Ok(self.archive_dir.join(view.archive_file_name()))
    }

    /// Safely read an archive with security checks:
    /// - Reject symbolic links
    /// - Validate it is a regular file
    /// - Check file size limits
    async fn read_archive(&self, view: &ViewDefinition) -> Result<Vec<u8>> {
        let path = self.archive_path(view)?;
        let retrieval_failed = |details: String| CweTreeError::RetrievalFailed {
            view_id: view.id().to_string(),
            source_location: path.display().to_string(),
            details,
        };

        let metadata = tokio::fs::symlink_metadata(&path)
            .await
            .map_err(|e| retrieval_failed(e.to_string()))?;

        if metadata.is_symlink() {
            return Err(retrieval_failed(
                "Security: archive is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            )
            .into());
        }

        if !metadata.is_file() {
            return Err(retrieval_failed("Not a regular file".to_string()).into());
        }

        validate_payload_size(metadata.len(), &view.archive_file_name(), MAX_PAYLOAD_SIZE)?;

        tokio::fs::read(&path)
            .await
            .map_err(|e| retrieval_failed(e.to_string()).into())
    }
}

#[async_trait]
impl TaxonomySource for LocalArchiveSource {
    async fn fetch_weaknesses(&self, view: &ViewDefinition) -> Result<Vec<RawWeakness>> {
        let bytes = self.read_archive(view).await?;
        ViewArchive::decode(view, &bytes, &self.namespace)
    }

    fn describe_location(&self, view: &ViewDefinition) -> String {
        self.archive_dir
            .join(view.archive_file_name())
            .display()
            .to_string()
    }
}
