/// Filesystem adapters for file I/O operations
mod archive_reader;
mod file_writer;

pub use archive_reader::LocalArchiveSource;
pub use file_writer::FileSystemArtifactWriter;
