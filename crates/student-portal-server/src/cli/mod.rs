//! CLI subcommand implementations for the `student-portal` binary.

pub mod clear_cmd;
pub mod output;
pub mod scrape_cmd;
pub mod serve;
pub mod show_cmd;
