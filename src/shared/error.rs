use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All views were written, or the run was stopped by the operator
    Success = 0,
    /// Retrieval, tree building or write failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for CWE view generation.
///
/// Every variant is fatal for the whole run: there are no retries and no
/// partial-success reporting across views.
#[derive(Debug, Error)]
pub enum CweTreeError {
    #[error("Failed to retrieve view {view_id}: {source_location}\nDetails: {details}\n\n💡 Hint: Please check your network connection and that the view archive is available")]
    RetrievalFailed {
        view_id: String,
        source_location: String,
        details: String,
    },

    #[error("Malformed archive for view {view_id}\nDetails: {details}\n\n💡 Hint: The downloaded file is not a valid zip archive")]
    MalformedArchive { view_id: String, details: String },

    #[error("Archive for view {view_id} does not contain {entry}\n\n💡 Hint: The archive layout may have changed upstream")]
    ArchiveEntryMissing { view_id: String, entry: String },

    #[error("Failed to parse XML for view {view_id}\nDetails: {details}")]
    XmlParseError { view_id: String, details: String },

    #[error("Cycle detected in ChildOf relationships: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify a writable directory with --dir")]
    InvalidOutputDirectory { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
