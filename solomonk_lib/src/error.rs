//! Error types for the library layer.

use thiserror::Error;

/// Errors raised while building the extraction rule table.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A field pattern failed to compile.
    #[error("invalid pattern for field `{field}`: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}
