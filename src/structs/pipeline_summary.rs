use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    pub categories_processed: usize,
    pub files_written: Vec<PathBuf>,
}

impl PipelineSummary {
    pub fn print_summary(&self) {
        log::info!("📊 Processed {} categories", self.categories_processed);
        for file in &self.files_written {
            log::info!("   📄 {}", file.display());
        }
    }
}
