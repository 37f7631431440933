/// CLI argument definitions via clap derive.
use std::ffi::OsStr;

use clap::{ArgAction, Parser};

use crate::config::{API_URL, API_URL_ENV};
use crate::query::QueryError;

/// Long form of the JSON error flag, checked on raw args when parsing fails.
const JSON_FLAG: &str = "--json";

/// walpha — query the Wolfram|Alpha LLM API.
#[derive(Debug, Parser)]
#[command(
    name = "walpha",
    about = "Query Wolfram Alpha LLM API",
    version,
    disable_version_flag = true,
    after_help = "Environment:\n  WOLFRAM_APP_ID     API key (required)"
)]
pub struct Cli {
    /// Rich Markdown formatting.
    #[arg(short, long)]
    pub markdown: bool,

    /// Response character limit. Values of zero or below send no limit.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_chars: Option<i64>,

    /// Show usage examples.
    #[arg(short, long)]
    pub examples: bool,

    /// Show version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Write errors to stderr as JSON, usage errors included.
    #[arg(long)]
    pub json: bool,

    /// Log request and timing details to stderr.
    #[arg(long)]
    pub debug: bool,

    /// API endpoint.
    #[arg(long, env = API_URL_ENV, default_value = API_URL, hide = true)]
    pub api_url: String,

    /// The question to ask, on a single line.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,
}

/// Whether `--json` appears among raw arguments that failed to parse.
pub fn json_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().any(|a| a.as_ref() == JSON_FLAG)
}

/// Convert a clap parse failure into a `QueryError::Usage` carrying its first line.
#[must_use]
pub fn usage_error(err: &clap::Error) -> QueryError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    QueryError::Usage(first.trim_start_matches("error: ").to_owned())
}
