/// Errors from the query domain layer.
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage errors and any failure without a more specific class.
pub const EXIT_GENERAL: i32 = 1;
/// Exit code for a missing or rejected API credential.
pub const EXIT_AUTH: i32 = 2;
/// Exit code for timeouts, transport failures and body read failures.
pub const EXIT_NETWORK: i32 = 3;
/// Exit code for queries the API could not interpret.
pub const EXIT_INVALID_INPUT: i32 = 4;
/// Exit code for rate limiting.
pub const EXIT_RATE_LIMIT: i32 = 5;

/// Errors that can occur while validating, sending, or answering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// No positional query was supplied.
    #[error("query required")]
    MissingQuery,

    /// The query spans more than one line.
    #[error("multi-line queries not supported")]
    MultiLineQuery,

    /// The credential environment variable is unset or empty.
    #[error("{var} not set")]
    MissingCredential {
        /// Name of the environment variable that was read.
        var: &'static str,
    },

    /// The API rejected the credential (HTTP 403).
    #[error("invalid app ID")]
    InvalidCredential,

    /// The request could not be built (bad endpoint URL or header value).
    #[error("{0}")]
    Request(String),

    /// Timeout or transport failure while sending the request.
    #[error("network failure")]
    Network(String),

    /// The response body could not be read.
    #[error("reading response")]
    ResponseBody(String),

    /// The API is throttling this credential (HTTP 429).
    #[error("rate limited, try again later")]
    RateLimited,

    /// The API could not interpret the query (HTTP 501).
    #[error("query not understood")]
    NotUnderstood,

    /// The API rejected the request as malformed (HTTP 400).
    #[error("bad request")]
    BadRequest,

    /// Any other non-success status.
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// The bundled examples document was not found.
    #[error("examples.md not found")]
    ExamplesNotFound,
}

/// Exit code mapping for `QueryError` variants.
impl QueryError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential { .. } | Self::InvalidCredential => EXIT_AUTH,
            Self::Network(_) | Self::ResponseBody(_) => EXIT_NETWORK,
            Self::NotUnderstood | Self::BadRequest => EXIT_INVALID_INPUT,
            Self::RateLimited => EXIT_RATE_LIMIT,
            Self::Usage(_)
            | Self::MissingQuery
            | Self::MultiLineQuery
            | Self::Request(_)
            | Self::HttpStatus(_)
            | Self::ExamplesNotFound => EXIT_GENERAL,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage_error",
            Self::MissingQuery => "missing_query",
            Self::MultiLineQuery => "multi_line_query",
            Self::MissingCredential { .. } => "missing_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::Request(_) => "request_error",
            Self::Network(_) => "network_failure",
            Self::ResponseBody(_) => "response_read_error",
            Self::RateLimited => "rate_limited",
            Self::NotUnderstood => "not_understood",
            Self::BadRequest => "bad_request",
            Self::HttpStatus(_) => "http_status",
            Self::ExamplesNotFound => "examples_not_found",
        }
    }

    /// Underlying cause worth logging, if the variant carries one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Network(cause) | Self::ResponseBody(cause) => Some(cause),
            _ => None,
        }
    }
}
