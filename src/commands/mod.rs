/// Command dispatch: routes parsed flags to their implementations.
pub mod examples;
pub mod query;

use crate::cli::{Cli, OutputCtx};
use crate::query::QueryError;

/// Dispatch parsed arguments to the examples printer or a query run.
///
/// # Errors
///
/// Returns `QueryError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), QueryError> {
    if cli.examples {
        examples::run(ctx)
    } else {
        query::run(cli, ctx)
    }
}
