pub mod commands;
pub mod deliverable;
