/// Immutable run configuration, built once from parsed arguments and the environment.
use std::fmt;
use std::time::Duration;

use crate::cli::Cli;
use crate::query::QueryError;

/// Default API endpoint.
pub const API_URL: &str = "https://www.wolframalpha.com/api/v1/llm-api";

/// Environment variable holding the API credential.
pub const APP_ID_ENV: &str = "WOLFRAM_APP_ID";

/// Environment variable overriding the API endpoint.
pub const API_URL_ENV: &str = "WALPHA_API_URL";

/// Wall-clock limit for the whole request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An API credential that never exposes its value in logs or debug output.
#[derive(Clone)]
pub struct Credential {
    inner: String,
}

impl Credential {
    /// Wrap a credential, rejecting empty values.
    #[must_use]
    pub fn new(value: String) -> Option<Self> {
        (!value.is_empty()).then_some(Self { inner: value })
    }

    /// The raw value, for the `Authorization` header only.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Everything one query run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single-line natural-language query.
    pub query: String,
    /// Bearer credential for the API.
    pub credential: Credential,
    /// Response character budget; `None` when not supplied or not positive.
    pub max_chars: Option<u64>,
    /// Rewrite the answer as Markdown.
    pub markdown: bool,
    /// Endpoint to query.
    pub api_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Validate parsed arguments and the credential, in that order.
    ///
    /// # Errors
    ///
    /// - `QueryError::MissingQuery` if no query was given.
    /// - `QueryError::MultiLineQuery` if the query contains a newline.
    /// - `QueryError::MissingCredential` if `credential` is unset or empty.
    pub fn from_cli(cli: &Cli, credential: Option<String>) -> Result<Self, QueryError> {
        let query = cli.query.clone().ok_or(QueryError::MissingQuery)?;
        if query.contains('\n') {
            return Err(QueryError::MultiLineQuery);
        }

        let credential = credential
            .and_then(Credential::new)
            .ok_or(QueryError::MissingCredential { var: APP_ID_ENV })?;

        Ok(Self {
            query,
            credential,
            max_chars: positive_limit(cli.max_chars),
            markdown: cli.markdown,
            api_url: cli.api_url.clone(),
            timeout: REQUEST_TIMEOUT,
        })
    }
}

/// Non-positive limits mean "no limit supplied".
fn positive_limit(max_chars: Option<i64>) -> Option<u64> {
    max_chars
        .and_then(|n| u64::try_from(n).ok())
        .filter(|&n| n > 0)
}
