use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, ViewDefinition};
use async_trait::async_trait;

/// TaxonomySource port for retrieving the weaknesses of one CWE view
///
/// This port abstracts where view archives come from (the MITRE download
/// endpoint, a local directory, a test double).
#[async_trait]
pub trait TaxonomySource {
    /// Fetches and parses the `Weakness` entries of a view
    ///
    /// # Arguments
    /// * `view` - The view whose archive should be loaded
    ///
    /// # Returns
    /// Raw weakness entries in document order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The archive cannot be retrieved (network, status code, missing file)
    /// - The archive is not a valid zip or lacks `<view-id>.xml`
    /// - The XML cannot be parsed
    async fn fetch_weaknesses(&self, view: &ViewDefinition) -> Result<Vec<RawWeakness>>;

    /// Human-readable location of a view's archive, for progress messages
    fn describe_location(&self, view: &ViewDefinition) -> String;
}
