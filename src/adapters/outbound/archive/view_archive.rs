use crate::adapters::outbound::xml::CatalogParser;
use crate::shared::error::CweTreeError;
use crate::shared::security::{validate_payload_size, MAX_PAYLOAD_SIZE};
use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, ViewDefinition};
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// ViewArchive unpacks `<view-id>.xml.zip` payloads
///
/// Shared by every taxonomy source so that remote and local archives are
/// decoded the same way.
pub struct ViewArchive;

impl ViewArchive {
    /// Unzips the archive and parses the weaknesses of `<view-id>.xml`
    pub fn decode(view: &ViewDefinition, bytes: &[u8], namespace: &str) -> Result<Vec<RawWeakness>> {
        let xml = Self::extract_xml(view, bytes)?;
        tracing::debug!(view_id = view.id(), bytes = xml.len(), "parsing {}", view.xml_file_name());
        CatalogParser::new(namespace).parse(view.id(), &xml)
    }

    /// Returns the text of `<view-id>.xml` inside the archive
    ///
    /// # Errors
    /// - `CweTreeError::MalformedArchive` if the payload is not a readable zip
    /// - `CweTreeError::ArchiveEntryMissing` if the XML document is absent
    /// - a size error if the decompressed document exceeds `MAX_PAYLOAD_SIZE`
    pub fn extract_xml(view: &ViewDefinition, bytes: &[u8]) -> Result<String> {
        let malformed = |details: String| CweTreeError::MalformedArchive {
            view_id: view.id().to_string(),
            details,
        };

        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| malformed(e.to_string()))?;
        let entry_name = view.xml_file_name();

        let entry = match archive.by_name(&entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(CweTreeError::ArchiveEntryMissing {
                    view_id: view.id().to_string(),
                    entry: entry_name,
                }
                .into());
            }
            Err(e) => return Err(malformed(e.to_string()).into()),
        };

        // Security: the declared size can lie, so the read is capped as well
        validate_payload_size(entry.size(), &entry_name, MAX_PAYLOAD_SIZE)?;
        let mut xml = String::new();
        entry
            .take(MAX_PAYLOAD_SIZE + 1)
            .read_to_string(&mut xml)
            .map_err(|e| malformed(format!("Failed to read {}: {}", entry_name, e)))?;
        validate_payload_size(xml.len() as u64, &entry_name, MAX_PAYLOAD_SIZE)?;

        Ok(xml)
    }
}
