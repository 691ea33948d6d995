/// Shared kernel - error types, result alias, logging, security checks and shutdown signalling
pub mod error;
pub mod logging;
pub mod result;
pub mod security;
pub mod shutdown;

pub use result::Result;
