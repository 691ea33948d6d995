use clap::Parser;
use std::path::PathBuf;

/// Convert the MITRE CWE views into JSON trees for the browser viewer
#[derive(Parser, Debug)]
#[command(name = "cwe-tree")]
#[command(version)]
#[command(
    about = "Convert MITRE CWE XML views into hierarchical JSON trees",
    long_about = "Downloads the CWE views 699, 1000 and 1008, rebuilds their ChildOf hierarchy \
                  and writes one <view-id>.js file per view for the browser viewer."
)]
pub struct Args {
    /// Suppress progress output (errors are still printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output directory for the generated .js files (default: html/js next to the executable)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read <view-id>.xml.zip archives from a local directory instead of downloading
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
