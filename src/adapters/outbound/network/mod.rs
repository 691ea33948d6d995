/// Network adapters for downloading CWE view archives
mod cwe_view_client;

pub use cwe_view_client::CweViewClient;
