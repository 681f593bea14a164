use clap::Parser;
use catalog_stats::errors::ErrorHandler;
use catalog_stats::structs::cli::Cli;
use catalog_stats::workers::command_runner::CommandRunner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(error) = CommandRunner::new().run_command(cli.command) {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
