/// XML adapters for reading CWE catalog documents
mod catalog_parser;

pub use catalog_parser::CatalogParser;
