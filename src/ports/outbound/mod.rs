/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod artifact_writer;
pub mod progress_reporter;
pub mod taxonomy_source;
pub mod view_formatter;

pub use artifact_writer::ArtifactWriter;
pub use progress_reporter::ProgressReporter;
pub use taxonomy_source::TaxonomySource;
pub use view_formatter::ViewFormatter;
