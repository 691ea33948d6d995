use crate::adapters::outbound::archive::ViewArchive;
use crate::ports::outbound::TaxonomySource;
use crate::shared::error::CweTreeError;
use crate::shared::security::{validate_payload_size, validate_view_id, MAX_PAYLOAD_SIZE};
use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, ViewDefinition};
use async_trait::async_trait;
use std::time::Duration;

/// CweViewClient adapter for downloading view archives from the MITRE site
///
/// This adapter implements the TaxonomySource port. Archives are fetched once,
/// without retries, from `<base_url><view-id>.xml.zip`.
pub struct CweViewClient {
    client: reqwest::Client,
    base_url: String,
    namespace: String,
}

impl CweViewClient {
    /// Creates a new client with an explicit request timeout
    pub fn new(base_url: impl Into<String>, namespace: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cwe-tree/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            namespace: namespace.into(),
        })
    }

    /// Full download URL of a view archive
    pub fn archive_url(&self, view: &ViewDefinition) -> Result<String> {
        // Security: Validate the view id before it becomes part of a URL
        validate_view_id(view.id())?;

        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        Ok(format!(
            "{}{}{}",
            self.base_url,
            separator,
            urlencoding::encode(&view.archive_file_name())
        ))
    }

    async fn download(&self, view: &ViewDefinition) -> Result<Vec<u8>> {
        let url = self.archive_url(view)?;
        let retrieval_failed = |details: String| CweTreeError::RetrievalFailed {
            view_id: view.id().to_string(),
            source_location: url.clone(),
            details,
        };

        tracing::debug!(view_id = view.id(), %url, "downloading view archive");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| retrieval_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(retrieval_failed(format!("Server returned status code {}", response.status())).into());
        }

        if let Some(length) = response.content_length() {
            validate_payload_size(length, &view.archive_file_name(), MAX_PAYLOAD_SIZE)?;
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| retrieval_failed(e.to_string()))?;
        validate_payload_size(bytes.len() as u64, &view.archive_file_name(), MAX_PAYLOAD_SIZE)?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl TaxonomySource for CweViewClient {
    async fn fetch_weaknesses(&self, view: &ViewDefinition) -> Result<Vec<RawWeakness>> {
        let bytes = self.download(view).await?;
        ViewArchive::decode(view, &bytes, &self.namespace)
    }

    fn describe_location(&self, view: &ViewDefinition) -> String {
        self.archive_url(view)
            .unwrap_or_else(|_| view.archive_file_name())
    }
}
