//! The filter capability the host pipeline invokes.
//!
//! A filter pass has three steps:
//!
//! 1. read the region's pixels from the source surface
//! 2. transform every pixel
//! 3. write the block to the target surface at the target origin
//!
//! Implementors supply steps 1 and 2 through [`Filter::process`]; the
//! provided methods add step 3 and the failure policy. A failed read
//! (tainted surface, bad region) aborts the pass before anything is
//! written. The `try_*` methods report it as [`FilterError`], the plain
//! methods as `false`.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect};
//! use easel_filters::{ApplyOptions, Filter, FilterStage};
//!
//! let invert = FilterStage::from_fn((), |_, px| {
//!     px.dst = px.src;
//!     px.dst.mul_scalar(-1.0).add_scalar(255.0);
//!     px.dst.a = px.src.a;
//! });
//!
//! let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(2, 2, [10, 20, 30, 255]));
//! assert!(invert.apply(&mut surface, Rect::new(0, 0, 1, 1), ApplyOptions::new()));
//! assert_eq!(surface.pixels().pixel(0, 0), [245, 235, 225, 255]);
//! assert_eq!(surface.pixels().pixel(1, 0), [10, 20, 30, 255]);
//! ```

use easel_core::{PixelBuffer, Rect, Surface};
use tracing::{debug, trace};

use crate::FilterResult;

/// Where a filter pass writes its result.
///
/// Each axis of the target origin defaults independently to the source
/// region's origin, so a caller may override one without the other.
///
/// # Example
///
/// ```rust
/// use easel_core::Rect;
/// use easel_filters::ApplyOptions;
///
/// let region = Rect::new(4, 8, 16, 16);
/// assert_eq!(ApplyOptions::new().resolve(region), (4, 8));
/// assert_eq!(ApplyOptions::new().with_target_y(0).resolve(region), (4, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ApplyOptions {
    /// Target X origin; `None` reuses the region's X.
    pub target_x: Option<u32>,
    /// Target Y origin; `None` reuses the region's Y.
    pub target_y: Option<u32>,
}

impl ApplyOptions {
    /// Options that write back over the source region.
    #[inline]
    pub const fn new() -> Self {
        Self {
            target_x: None,
            target_y: None,
        }
    }

    /// Sets the target X origin.
    #[inline]
    pub const fn with_target_x(mut self, x: u32) -> Self {
        self.target_x = Some(x);
        self
    }

    /// Sets the target Y origin.
    #[inline]
    pub const fn with_target_y(mut self, y: u32) -> Self {
        self.target_y = Some(y);
        self
    }

    /// Sets both axes of the target origin.
    #[inline]
    pub const fn with_target_origin(self, x: u32, y: u32) -> Self {
        self.with_target_x(x).with_target_y(y)
    }

    /// Effective target origin for `region`.
    #[inline]
    pub fn resolve(&self, region: Rect) -> (u32, u32) {
        (
            self.target_x.unwrap_or(region.x),
            self.target_y.unwrap_or(region.y),
        )
    }
}

/// A filter the host can run over any surface.
///
/// The trait is object safe; hosts keep filters as `Box<dyn Filter>`.
pub trait Filter {
    /// Reads `region` from `source` and returns the transformed block.
    ///
    /// Nothing is written anywhere. Fails only when the source read fails.
    fn process(&self, source: &dyn Surface, region: Rect) -> FilterResult<PixelBuffer>;

    /// Extra margin the filter draws outside its region, if any.
    ///
    /// Hosts grow cached regions by this amount. Per-pixel filters stay
    /// inside their region and return `None`.
    fn bounds(&self) -> Option<Rect> {
        None
    }

    /// Fixed identifying label for diagnostics.
    fn label(&self) -> &str {
        "[Filter]"
    }

    /// Runs a pass from `source` into `target`.
    fn try_apply_to(
        &self,
        source: &dyn Surface,
        region: Rect,
        target: &mut dyn Surface,
        options: ApplyOptions,
    ) -> FilterResult<()> {
        let (tx, ty) = options.resolve(region);
        trace!(filter = self.label(), %region, tx, ty, "filter pass");

        let buffer = self.process(source, region)?;
        target.put_image_data(&buffer, tx, ty);
        Ok(())
    }

    /// Runs a pass that reads from and writes to the same surface.
    fn try_apply(
        &self,
        surface: &mut dyn Surface,
        region: Rect,
        options: ApplyOptions,
    ) -> FilterResult<()> {
        let (tx, ty) = options.resolve(region);
        trace!(filter = self.label(), %region, tx, ty, "filter pass (in place)");

        let buffer = self.process(&*surface, region)?;
        surface.put_image_data(&buffer, tx, ty);
        Ok(())
    }

    /// Like [`Filter::try_apply_to`], returning `false` if the pass was skipped.
    fn apply_to(
        &self,
        source: &dyn Surface,
        region: Rect,
        target: &mut dyn Surface,
        options: ApplyOptions,
    ) -> bool {
        match self.try_apply_to(source, region, target, options) {
            Ok(()) => true,
            Err(err) => {
                debug!(filter = self.label(), error = %err, "filter not applied");
                false
            }
        }
    }

    /// Like [`Filter::try_apply`], returning `false` if the pass was skipped.
    fn apply(&self, surface: &mut dyn Surface, region: Rect, options: ApplyOptions) -> bool {
        match self.try_apply(surface, region, options) {
            Ok(()) => true,
            Err(err) => {
                debug!(filter = self.label(), error = %err, "filter not applied");
                false
            }
        }
    }
}
