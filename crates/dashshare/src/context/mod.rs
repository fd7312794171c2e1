//! Request-scoped context.

mod extractor;
mod types;

pub use types::RequestContext;
