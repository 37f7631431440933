/// Default command: send the query and print the answer.
use log::debug;

use crate::cli::{Cli, OutputCtx, write_answer};
use crate::config::{APP_ID_ENV, Config};
use crate::query::{Dispatcher, QueryError, format_markdown, strip_website_link};

/// Run `walpha "query"`.
///
/// Argument and credential checks happen before any network activity.
///
/// # Errors
///
/// Returns `QueryError` for invalid arguments, a missing credential, network
/// failures, and every non-200 API response.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), QueryError> {
    let config = Config::from_cli(cli, std::env::var(APP_ID_ENV).ok())?;
    debug!(
        "query {:?} (markdown: {}, max_chars: {:?})",
        config.query, config.markdown, config.max_chars
    );

    let dispatcher = Dispatcher::new(&config.api_url, config.timeout)?;

    let _t_request = ctx.timer("request");
    let body = dispatcher.send(&config.query, &config.credential, config.max_chars)?;
    drop(_t_request);

    let _t_render = ctx.timer("render");
    let answer = render(&body, config.markdown);
    drop(_t_render);

    write_answer(&answer);
    Ok(())
}

/// Sanitize a raw answer and optionally rewrite it as Markdown.
#[must_use]
pub fn render(body: &str, markdown: bool) -> String {
    let clean = strip_website_link(body);
    if markdown {
        format_markdown(&clean)
    } else {
        clean
    }
}
