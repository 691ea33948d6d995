/// Archive adapters for unpacking zipped CWE view documents
mod view_archive;

pub use view_archive::ViewArchive;
