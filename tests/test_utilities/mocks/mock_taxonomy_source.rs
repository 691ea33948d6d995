use async_trait::async_trait;
use cwe_tree::prelude::*;
use std::collections::HashMap;

/// Mock TaxonomySource serving canned weaknesses per view id
#[derive(Default, Clone)]
pub struct MockTaxonomySource {
    views: HashMap<String, Vec<RawWeakness>>,
    unavailable: Vec<String>,
}

impl MockTaxonomySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view_id: &str, weaknesses: Vec<RawWeakness>) -> Self {
        self.views.insert(view_id.to_string(), weaknesses);
        self
    }

    pub fn with_unavailable(mut self, view_id: &str) -> Self {
        self.unavailable.push(view_id.to_string());
        self
    }
}

#[async_trait]
impl TaxonomySource for MockTaxonomySource {
    async fn fetch_weaknesses(&self, view: &ViewDefinition) -> Result<Vec<RawWeakness>> {
        if self.unavailable.iter().any(|id| id == view.id()) {
            return Err(CweTreeError::RetrievalFailed {
                view_id: view.id().to_string(),
                source_location: self.describe_location(view),
                details: "HTTP status 404 Not Found".to_string(),
            }
            .into());
        }
        Ok(self.views.get(view.id()).cloned().unwrap_or_default())
    }

    fn describe_location(&self, view: &ViewDefinition) -> String {
        format!("mock://views/{}", view.archive_file_name())
    }
}
