use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample config to ~/catalog-stats/config.toml
    Init,
    /// Check the config file for problems
    Validate,
    /// Fetch the catalog and write the deliverable files
    Run {
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}
