use std::fs;
use std::path::{Path, PathBuf};
use crate::enums::deliverable::Deliverable;
use crate::errors::{CatalogStatsError, CatalogStatsResult};
use crate::structs::grouped_statistics::GroupedStatistics;

/// Writes one `<metric>.json` file per deliverable into `directory`,
/// overwriting existing files. Files written before a failure are left in place.
pub fn write_all(grouped: &GroupedStatistics, directory: &Path) -> CatalogStatsResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(Deliverable::ALL.len());

    for deliverable in Deliverable::ALL {
        let full_file_path = directory.join(deliverable.file_name());
        let json = serde_json::to_string_pretty(&grouped.metric_value(deliverable)?)?;

        fs::write(&full_file_path, json)
            .map_err(|e| CatalogStatsError::io_error(&full_file_path, "write", &e))?;

        log::info!("💾 Wrote result of: {} to {}", deliverable, full_file_path.display());
        written.push(full_file_path);
    }

    Ok(written)
}
