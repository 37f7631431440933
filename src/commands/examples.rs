/// `--examples`: print the bundled usage examples document.
use std::path::{Path, PathBuf};

use log::debug;

use crate::cli::{OutputCtx, write_answer};
use crate::query::QueryError;

/// Location of the examples document relative to a search root.
const EXAMPLES_RELATIVE_PATH: [&str; 2] = ["docs", "examples.md"];

/// Run `walpha --examples`.
///
/// # Errors
///
/// Returns `QueryError::ExamplesNotFound` if no candidate path is readable.
pub fn run(ctx: &OutputCtx) -> Result<(), QueryError> {
    let _t = ctx.timer("examples");
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let content = find_examples(&candidate_paths(exe_dir.as_deref()))?;
    write_answer(&content);
    Ok(())
}

/// Search order: next to the executable, then relative to the working directory.
#[must_use]
pub fn candidate_paths(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let relative: PathBuf = EXAMPLES_RELATIVE_PATH.iter().collect();
    let mut paths = Vec::with_capacity(2);
    if let Some(dir) = exe_dir {
        paths.push(dir.join(&relative));
    }
    paths.push(Path::new(".").join(relative));
    paths
}

/// Read the first candidate that exists.
///
/// # Errors
///
/// Returns `QueryError::ExamplesNotFound` if none can be read.
pub fn find_examples(candidates: &[PathBuf]) -> Result<String, QueryError> {
    for path in candidates {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("examples loaded from {}", path.display());
                return Ok(content);
            }
            Err(e) => debug!("examples not at {}: {e}", path.display()),
        }
    }
    Err(QueryError::ExamplesNotFound)
}
