pub mod command_runner;
pub mod pipeline_runner;
