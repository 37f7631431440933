/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{Cli, json_requested, usage_error};
pub use output::{OutputCtx, write_answer, write_error};
