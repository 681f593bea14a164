use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "catalog-stats")]
#[clap(about = "Per-category statistics from a product catalog API", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
