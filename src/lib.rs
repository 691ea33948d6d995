//! cwe-tree - CWE view to JSON tree converter
//!
//! This library downloads MITRE CWE views, rebuilds the `ChildOf` hierarchy of
//! their weaknesses and renders each view as a JavaScript assignment that a
//! browser tree viewer can load, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`taxonomy`): Weakness records and the tree builder
//! - **Application Layer** (`application`): The view generation use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Download, archive, XML, filesystem and console adapters
//! - **Shared** (`shared`): Errors, logging, security checks and stop signalling
//!
//! # Example
//!
//! ```no_run
//! use cwe_tree::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let source = CweViewClient::new(DEFAULT_BASE_URL, DEFAULT_SCHEMA_NAMESPACE, Duration::from_secs(60))?;
//! let writer = FileSystemArtifactWriter::create(PathBuf::from("html/js"))?;
//! let progress_reporter = ConsoleProgressReporter::new(false);
//!
//! // Create use case
//! let use_case = GenerateViewsUseCase::new(
//!     source,
//!     JsAssignmentFormatter::new(),
//!     writer,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = GenerateRequest::new(default_views());
//! let response = use_case.execute(request, StopSignal::never()).await?;
//! println!("{} view(s) written", response.written.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod taxonomy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ViewArchive;
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemArtifactWriter, LocalArchiveSource};
    pub use crate::adapters::outbound::formatters::JsAssignmentFormatter;
    pub use crate::adapters::outbound::network::CweViewClient;
    pub use crate::adapters::outbound::xml::CatalogParser;
    pub use crate::application::dto::{GenerateRequest, GenerateResponse, RunOutcome, WrittenView};
    pub use crate::application::use_cases::GenerateViewsUseCase;
    pub use crate::config::{default_views, DEFAULT_BASE_URL, DEFAULT_SCHEMA_NAMESPACE};
    pub use crate::ports::outbound::{
        ArtifactWriter, ProgressReporter, TaxonomySource, ViewFormatter,
    };
    pub use crate::shared::error::CweTreeError;
    pub use crate::shared::shutdown::{stop_channel, StopHandle, StopSignal};
    pub use crate::shared::Result;
    pub use crate::taxonomy::domain::{
        RawWeakness, RelatedWeakness, TreeNode, ViewDefinition, ViewTree, WeaknessCollection,
        WeaknessRecord,
    };
    pub use crate::taxonomy::services::{RecordExtractor, TreeBuilder};
}
