//! Error types for filter passes.

use easel_core::Rect;
use thiserror::Error;

/// Error type for filter passes.
///
/// A failed source read is the only failure a filter pass recovers from.
/// The bool-returning entry points turn it into `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The source surface would not hand out the region's pixels.
    #[error("source read denied for {region}")]
    SourceReadDenied {
        /// Region that was requested
        region: Rect,
        /// Surface error behind the refusal
        #[source]
        source: easel_core::Error,
    },
}

/// Result type for filter passes.
pub type FilterResult<T> = Result<T, FilterError>;
