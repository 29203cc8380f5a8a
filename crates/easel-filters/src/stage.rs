//! Per-pixel filter built from a transform function.
//!
//! [`FilterStage`] implements [`Filter`] by running a [`PixelTransform`]
//! over every pixel of the region it reads. The transform sees each pixel
//! as a [`PixelContext`]:
//!
//! - `position` - pixel coordinates on the source surface (region origin
//!   plus the pixel's offset inside the region)
//! - `src` - the source channels, 0..255
//! - `dst` - the output channels, starting as a copy of `src`
//!
//! Whatever `dst` holds when the transform returns is rounded, clamped and
//! stored in the pixel's four bytes (`offset .. offset + 4`). Leaving `dst`
//! alone copies the pixel through unchanged.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect};
//! use easel_filters::{ApplyOptions, Filter, FilterStage};
//!
//! struct Fade {
//!     amount: f32,
//! }
//!
//! let fade = FilterStage::from_fn(Fade { amount: 0.5 }, |args, px| {
//!     px.dst.a = px.math.lerp(px.src.a, 0.0, args.amount);
//! });
//!
//! let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(1, 1, [0, 0, 0, 200]));
//! assert!(fade.apply(&mut surface, Rect::new(0, 0, 1, 1), ApplyOptions::new()));
//! assert_eq!(surface.pixels().pixel(0, 0), [0, 0, 0, 100]);
//! ```

use std::fmt;
use std::sync::Arc;

use easel_core::buffer::CHANNELS;
use easel_core::{PixelBuffer, Rect, Surface};
use easel_math::{MathLibrary, Vec2, Vec4};
use tracing::trace;

use crate::{Filter, FilterError, FilterResult};

/// One pixel as seen by a transform.
#[derive(Debug, Clone, Copy)]
pub struct PixelContext {
    /// Pixel coordinates on the source surface.
    pub position: Vec2,
    /// Source channel values.
    pub src: Vec4,
    /// Output channel values, initialized from `src`.
    pub dst: Vec4,
    /// Byte offset of the pixel's red channel in the block.
    pub offset: usize,
    /// Shared math handle.
    pub math: &'static MathLibrary,
}

/// The per-pixel body of a [`FilterStage`].
///
/// Implemented for any `Fn(&A, &mut PixelContext)`.
pub trait PixelTransform<A> {
    /// Updates `px.dst` for one pixel.
    fn transform(&self, args: &A, px: &mut PixelContext);
}

impl<A, F> PixelTransform<A> for F
where
    F: Fn(&A, &mut PixelContext),
{
    #[inline]
    fn transform(&self, args: &A, px: &mut PixelContext) {
        self(args, px)
    }
}

/// A filter that applies a [`PixelTransform`] configured by args `A`.
///
/// The args are held behind an [`Arc`]: cloning the stage shares them
/// rather than copying, so interior-mutable state inside `A` is visible
/// through every clone. [`FilterStage::reconfigure`] swaps in new args for
/// this instance only.
///
/// A stage keeps no state between passes.
pub struct FilterStage<A, T> {
    args: Arc<A>,
    transform: T,
    math: &'static MathLibrary,
}

impl<A, T: PixelTransform<A>> FilterStage<A, T> {
    /// Creates a stage, installing the shared math library if needed.
    pub fn new(args: A, transform: T) -> Self {
        Self::with_math(args, transform, MathLibrary::install())
    }

    /// Creates a stage that uses an existing math handle.
    pub fn with_math(args: A, transform: T, math: &'static MathLibrary) -> Self {
        Self {
            args: Arc::new(args),
            transform,
            math,
        }
    }

    /// Runs the transform over every pixel of `buffer`.
    ///
    /// `origin` is where the block sits on its source surface.
    pub fn transform_buffer(&self, origin: (u32, u32), buffer: &mut PixelBuffer) {
        let width = buffer.width() as usize;
        let (ox, oy) = (origin.0 as f32, origin.1 as f32);

        for (p, px) in buffer.data_mut().chunks_exact_mut(CHANNELS).enumerate() {
            let src = Vec4::from_rgba8([px[0], px[1], px[2], px[3]]);
            let mut ctx = PixelContext {
                position: Vec2::new(ox + (p % width) as f32, oy + (p / width) as f32),
                src,
                dst: src,
                offset: p * CHANNELS,
                math: self.math,
            };
            self.transform.transform(&self.args, &mut ctx);
            px.copy_from_slice(&ctx.dst.to_rgba8());
        }
    }
}

impl<A, T> FilterStage<A, T>
where
    T: Fn(&A, &mut PixelContext),
{
    /// Creates a stage from a closure.
    ///
    /// Same as [`FilterStage::new`], but lets the compiler infer the
    /// closure's argument types.
    pub fn from_fn(args: A, transform: T) -> Self {
        Self::new(args, transform)
    }
}

impl<A, T> FilterStage<A, T> {
    /// The stage's configuration.
    #[inline]
    pub fn args(&self) -> &A {
        &self.args
    }

    /// Replaces the configuration of this instance.
    ///
    /// Clones made earlier keep the previous args.
    pub fn reconfigure(&mut self, args: A) {
        self.args = Arc::new(args);
    }

    /// Returns `true` if both stages share one args allocation.
    #[inline]
    pub fn shares_args_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.args, &other.args)
    }

    /// The math handle passed to transforms.
    #[inline]
    pub fn math(&self) -> &'static MathLibrary {
        self.math
    }
}

impl<A, T: PixelTransform<A>> Filter for FilterStage<A, T> {
    fn process(&self, source: &dyn Surface, region: Rect) -> FilterResult<PixelBuffer> {
        let mut buffer = source
            .get_image_data(region)
            .map_err(|source| FilterError::SourceReadDenied { region, source })?;

        trace!(%region, pixels = region.area(), "transforming");
        self.transform_buffer((region.x, region.y), &mut buffer);
        Ok(buffer)
    }

    fn label(&self) -> &str {
        "[FilterStage]"
    }
}

impl<A, T: Clone> Clone for FilterStage<A, T> {
    fn clone(&self) -> Self {
        Self {
            args: Arc::clone(&self.args),
            transform: self.transform.clone(),
            math: self.math,
        }
    }
}

impl<A, T> fmt::Display for FilterStage<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[FilterStage]")
    }
}

impl<A: fmt::Debug, T> fmt::Debug for FilterStage<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStage")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
