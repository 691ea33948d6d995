/// Mock implementations for testing
mod mock_artifact_writer;
mod mock_progress_reporter;
mod mock_taxonomy_source;

pub use mock_artifact_writer::MockArtifactWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_taxonomy_source::MockTaxonomySource;
