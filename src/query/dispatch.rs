/// Query dispatch: build the API request, send it, classify the response.
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use super::errors::QueryError;
use crate::config::Credential;

/// Query parameter carrying the natural-language input.
const INPUT_PARAM: &str = "input";
/// Query parameter carrying the response character budget.
const MAX_CHARS_PARAM: &str = "maxchars";

/// Result of one query attempt: the raw answer body, or the failure class.
pub type Outcome = Result<String, QueryError>;

/// Blocking HTTP client bound to one API endpoint.
#[derive(Debug)]
pub struct Dispatcher {
    endpoint: Url,
    client: Client,
}

impl Dispatcher {
    /// Create a dispatcher for `endpoint` with a fixed request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Request` if the endpoint is not a valid URL or the
    /// HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, QueryError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| QueryError::Request(format!("invalid API URL '{endpoint}': {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Request(e.to_string()))?;
        Ok(Self { endpoint, client })
    }

    /// Build the request URL: the endpoint plus the encoded query and optional limit.
    #[must_use]
    pub fn request_url(&self, query: &str, max_chars: Option<u64>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(INPUT_PARAM, query);
            if let Some(limit) = max_chars {
                pairs.append_pair(MAX_CHARS_PARAM, &limit.to_string());
            }
        }
        url
    }

    /// Send `query` and classify the response.
    ///
    /// The whole body is read before the status is inspected, so a body read
    /// failure is reported as a network failure whatever the status.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Request` if the request cannot be built,
    /// `QueryError::Network` or `QueryError::ResponseBody` on transport
    /// failures, and a status-specific variant for any non-200 response.
    pub fn send(&self, query: &str, credential: &Credential, max_chars: Option<u64>) -> Outcome {
        let url = self.request_url(query, max_chars);
        debug!("GET {url}");

        let request = self
            .client
            .get(url)
            .bearer_auth(credential.as_str())
            .build()
            .map_err(|e| QueryError::Request(e.to_string()))?;

        let response = self
            .client
            .execute(request)
            .map_err(|e| QueryError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| QueryError::ResponseBody(e.to_string()))?;
        debug!("HTTP {} ({} bytes)", status.as_u16(), body.len());

        classify(status, body)
    }
}

/// Map an HTTP status and its body to an `Outcome`.
///
/// # Errors
///
/// Every status other than 200 maps to its `QueryError` variant.
pub fn classify(status: StatusCode, body: String) -> Outcome {
    match status {
        StatusCode::OK => Ok(body),
        StatusCode::FORBIDDEN => Err(QueryError::InvalidCredential),
        StatusCode::TOO_MANY_REQUESTS => Err(QueryError::RateLimited),
        StatusCode::NOT_IMPLEMENTED => Err(QueryError::NotUnderstood),
        StatusCode::BAD_REQUEST => Err(QueryError::BadRequest),
        other => Err(QueryError::HttpStatus(other.as_u16())),
    }
}
