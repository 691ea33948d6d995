use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size for a downloaded view archive or its decompressed XML (100 MB)
/// This prevents DoS attacks via excessively large or zip-bomb payloads
pub const MAX_PAYLOAD_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an existing path is not a symbolic link
///
/// Paths that do not exist yet are accepted, since the writer is about to
/// create them.
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            );
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates payload size is within acceptable limits
///
/// # Arguments
/// * `size` - The size of the payload in bytes
/// * `description` - What the payload is (e.g., "699.xml.zip") for error messages
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_payload_size(size: u64, description: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            description,
            size,
            max_size
        );
    }
    Ok(())
}

/// Validates that a view identifier is safe to embed in a URL, a file name
/// and a JavaScript variable name
pub fn validate_view_id(view_id: &str) -> Result<()> {
    if view_id.is_empty() {
        anyhow::bail!("View id must not be empty");
    }

    // Security: Prevent URL and path injection
    if view_id.contains('/') || view_id.contains('\\') {
        anyhow::bail!(
            "Security: view id '{}' contains path separators which are not allowed",
            view_id
        );
    }

    if view_id.contains("..") {
        anyhow::bail!(
            "Security: view id '{}' contains '..' which is not allowed",
            view_id
        );
    }

    if !view_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        anyhow::bail!(
            "Security: view id '{}' contains characters that are not allowed (expected [A-Za-z0-9_])",
            view_id
        );
    }

    Ok(())
}
