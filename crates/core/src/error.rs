//! Error types for network construction.

use thiserror::Error;

/// Errors while parsing declarations or building a network.
///
/// Both variants are fatal to construction: no partial network is usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// A declaration line did not match `<prefix><name> -> <dest, ...>`.
    #[error("malformed module declaration {line:?}: {reason}")]
    Parse {
        /// The offending input line, verbatim.
        line: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// No module named `broadcaster` was declared, so there is nowhere
    /// to inject the trigger pulse.
    #[error("no broadcaster module declared")]
    MissingBroadcaster,
}
