use crate::taxonomy::domain::ViewDefinition;

/// GenerateRequest - Internal request DTO for the view generation use case
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Views to process, in order
    pub views: Vec<ViewDefinition>,
}

impl GenerateRequest {
    pub fn new(views: Vec<ViewDefinition>) -> Self {
        Self { views }
    }
}
