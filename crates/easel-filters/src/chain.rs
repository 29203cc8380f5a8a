//! Ordered list of filters applied to one surface.
//!
//! A host runs every filter of a display object over the same region, one
//! after another. A filter whose source read fails is skipped and the
//! remaining filters still run.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect};
//! use easel_filters::{FilterChain, FilterStage};
//!
//! let chain = FilterChain::new()
//!     .with(FilterStage::from_fn((), |_, px| { px.dst.add_scalar(10.0); }))
//!     .with(FilterStage::from_fn((), |_, px| { px.dst.mul_scalar(2.0); }));
//!
//! let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(1, 1, [1, 2, 3, 4]));
//! assert_eq!(chain.apply(&mut surface, Rect::new(0, 0, 1, 1)), 2);
//! assert_eq!(surface.pixels().pixel(0, 0), [22, 24, 26, 28]);
//! ```

use std::fmt;

use easel_core::{Rect, Surface};
use tracing::debug;

use crate::{ApplyOptions, Filter};

/// Filters applied in insertion order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter.
    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Appends a filter, builder style.
    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.push(filter);
        self
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates over the filters in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters.iter().map(|f| f.as_ref())
    }

    /// Applies every filter in place over `region`.
    ///
    /// Returns how many filters were applied; skipped filters leave the
    /// surface as the previous filter left it.
    pub fn apply(&self, surface: &mut dyn Surface, region: Rect) -> usize {
        let applied = self
            .filters
            .iter()
            .filter(|f| f.apply(surface, region, ApplyOptions::new()))
            .count();
        if applied < self.filters.len() {
            debug!(applied, total = self.filters.len(), %region, "filter chain partially applied");
        }
        applied
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|filter| filter.label())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterError, FilterResult, FilterStage};
    use easel_core::{MemorySurface, PixelBuffer};
    use std::cell::Cell;

    /// Refuses to read no matter the surface.
    struct Denied;

    impl Filter for Denied {
        fn process(&self, _: &dyn Surface, region: Rect) -> FilterResult<PixelBuffer> {
            Err(FilterError::SourceReadDenied {
                region,
                source: easel_core::Error::read_denied("test"),
            })
        }

        fn label(&self) -> &str {
            "[Denied]"
        }
    }

    #[test]
    fn test_empty_chain() {
        let chain = FilterChain::new();
        let mut surface = MemorySurface::new(1, 1);
        assert!(chain.is_empty());
        assert_eq!(chain.apply(&mut surface, Rect::new(0, 0, 1, 1)), 0);
    }

    #[test]
    fn test_failed_filter_is_skipped() {
        let chain = FilterChain::new()
            .with(FilterStage::from_fn((), |_, px| {
                px.dst.add_scalar(1.0);
            }))
            .with(Denied)
            .with(FilterStage::from_fn((), |_, px| {
                px.dst.add_scalar(1.0);
            }));

        let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(2, 1, [5, 5, 5, 5]));
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.apply(&mut surface, Rect::new(0, 0, 2, 1)), 2);
        assert_eq!(surface.pixels().pixel(1, 0), [7, 7, 7, 7]);
    }

    #[test]
    fn test_runs_in_order() {
        let order = std::rc::Rc::new(Cell::new(0u32));
        let mut chain = FilterChain::new();
        for step in 1..=3u32 {
            let order = order.clone();
            chain.push(FilterStage::from_fn((), move |_, _| {
                assert_eq!(order.get(), step - 1);
                order.set(step);
            }));
        }
        let mut surface = MemorySurface::new(1, 1);
        assert_eq!(chain.apply(&mut surface, Rect::new(0, 0, 1, 1)), 3);
        assert_eq!(order.get(), 3);
    }

    #[test]
    fn test_debug_lists_labels() {
        let chain = FilterChain::new()
            .with(Denied)
            .with(FilterStage::from_fn((), |_, _| {}));
        assert_eq!(format!("{:?}", chain), r#"["[Denied]", "[FilterStage]"]"#);
    }
}
