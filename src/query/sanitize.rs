//! Strip boilerplate lines from a successful API response.

/// Header line the API prepends to its link back to the website.
const WEBSITE_RESULT_PREFIX: &str = "Wolfram|Alpha website result";

/// URL prefix of the website link that follows the header.
const WEBSITE_URL_PREFIX: &str = "https://www.wolframalpha.com/input";

/// Remove website-link boilerplate from `body`.
///
/// Every line starting with the website-result header or the website URL is
/// dropped; all other lines (blank ones included) are kept verbatim and in
/// order. Trailing newlines are collapsed so the result ends in exactly one.
#[must_use]
pub fn strip_website_link(body: &str) -> String {
    let kept: Vec<&str> = body
        .split('\n')
        .filter(|line| !is_boilerplate(line))
        .collect();

    let mut out = kept.join("\n").trim_end_matches('\n').to_owned();
    out.push('\n');
    out
}

fn is_boilerplate(line: &str) -> bool {
    line.starts_with(WEBSITE_RESULT_PREFIX) || line.starts_with(WEBSITE_URL_PREFIX)
}
