pub mod resolve;
pub mod show;
pub mod validate;
pub mod watch;

use clap::Args;
use signage_core::{FsScheduleSource, JsonScheduleSource, ScheduleSource};
use std::path::PathBuf;

/// Where to read the schedule from: a JSON document, or an office folder in
/// a filesystem content store.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to a JSON schedule document
    #[arg(long, conflicts_with_all = ["root", "office"])]
    pub json: Option<PathBuf>,
    /// Content store root (one folder per office)
    #[arg(long, requires = "office")]
    pub root: Option<PathBuf>,
    /// Office folder to read inside the content store
    #[arg(long, requires = "root")]
    pub office: Option<String>,
}

impl SourceArgs {
    /// Build the schedule source the flags describe.
    pub fn into_source(self) -> Result<Box<dyn ScheduleSource>, Box<dyn std::error::Error>> {
        match (self.json, self.root, self.office) {
            (Some(path), None, None) => Ok(Box::new(JsonScheduleSource::new(path))),
            (None, Some(root), Some(office)) => {
                Ok(Box::new(FsScheduleSource::new(root, office)))
            }
            _ => Err("pass either --json FILE or --root DIR --office NAME".into()),
        }
    }
}
