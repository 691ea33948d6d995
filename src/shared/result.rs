/// Result alias used by every layer; typed failures are `CweTreeError`
/// values carried inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
