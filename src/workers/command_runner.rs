use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{CatalogStatsError, CatalogStatsResult};
use crate::structs::config::config::Config;
use crate::workers::pipeline_runner::run_pipeline;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::with_config_path(ConfigManager::config_path())
    }

    pub fn with_config_path(config_path: Option<PathBuf>) -> Self {
        Self {
            start_time: None,
            config_path,
        }
    }

    pub fn run_command(&mut self, command: Commands) -> CatalogStatsResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Run { output_dir } => self.run_pipeline_command(output_dir),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> CatalogStatsResult<Config> {
        ConfigManager::load_or_default(self.config_path.as_deref())
    }

    fn init_command(&self) -> CatalogStatsResult<()> {
        log::info!("🚀 Initializing catalog-stats configuration...");

        let path = self.config_path.as_deref().ok_or_else(|| {
            CatalogStatsError::config_error("Could not determine the home directory", None, None)
        })?;
        ConfigManager::write_sample_config(path)?;
        log::info!("📝 Edit {} to point at your catalog API.", path.display());
        log::info!("🔧 Run 'catalog-stats validate' to check your configuration.");

        Ok(())
    }

    fn validate_command(&self) -> CatalogStatsResult<()> {
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   ❌ {error}");
                }
                Err(CatalogStatsError::config_error(
                    &format!("{} problem(s) found in configuration", errors.len()),
                    None,
                    Some("Fix the fields listed above"),
                ))
            }
        }
    }

    fn run_pipeline_command(&self, output_dir: Option<PathBuf>) -> CatalogStatsResult<()> {
        log::info!("🔍 Collecting catalog statistics...");

        let config = self.load_config()?;
        let summary = run_pipeline(&config, output_dir.as_deref())?;
        summary.print_summary();

        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
