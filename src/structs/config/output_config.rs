use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl OutputConfig {
    /// Configured output directory, falling back to the OS temp directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir
            .as_ref()
            .map_or_else(std::env::temp_dir, PathBuf::from)
    }
}
