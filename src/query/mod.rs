/// Query domain layer: request dispatch, response sanitizing, Markdown formatting.
pub mod dispatch;
pub mod errors;
pub mod markdown;
pub mod sanitize;

pub use dispatch::Dispatcher;
pub use errors::QueryError;
pub use markdown::format_markdown;
pub use sanitize::strip_website_link;
