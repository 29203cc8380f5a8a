//! Banded filter passes on the Rayon pool.
//!
//! A single pass is synchronous and single-threaded. For large regions
//! the region is split into horizontal bands with [`Rect::split_rows`];
//! every band is read and transformed on the pool, then all bands are
//! written to the target on the calling thread. Bands never overlap, and
//! writes never race because only the caller touches the target.
//!
//! If any band's read fails, nothing is written.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect};
//! use easel_filters::{parallel, ApplyOptions, FilterStage};
//!
//! let darken = FilterStage::from_fn(0.5_f32, |k, px| {
//!     px.dst.mul_scalar(*k);
//!     px.dst.a = px.src.a;
//! });
//!
//! let mut surface = MemorySurface::from_buffer(PixelBuffer::filled(64, 64, [200, 100, 50, 255]));
//! let region = Rect::from_size(64, 64);
//! assert!(parallel::apply_tiled(&darken, &mut surface, region, ApplyOptions::new(), 8));
//! assert_eq!(surface.pixels().pixel(63, 63), [100, 50, 25, 255]);
//! ```

use easel_core::{PixelBuffer, Rect, Surface};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{ApplyOptions, Filter, FilterResult, FilterStage, PixelTransform};

/// Reads and transforms every band of `region`, in band order.
fn process_bands<A, T, S>(
    stage: &FilterStage<A, T>,
    source: &S,
    region: Rect,
    bands: u32,
) -> FilterResult<Vec<(Rect, PixelBuffer)>>
where
    A: Send + Sync,
    T: PixelTransform<A> + Sync,
    S: Surface + Sync,
{
    let parts = region.split_rows(bands);
    trace!(%region, bands = parts.len(), "banded filter pass");

    parts
        .into_par_iter()
        .map(|band| stage.process(source, band).map(|buffer| (band, buffer)))
        .collect()
}

/// Writes processed bands so the whole block lands at the target origin.
fn write_bands(
    target: &mut dyn Surface,
    region: Rect,
    options: ApplyOptions,
    blocks: &[(Rect, PixelBuffer)],
) {
    let (tx, ty) = options.resolve(region);
    for (band, buffer) in blocks {
        // a band past the end of the coordinate range lies outside any surface
        let origin = tx
            .checked_add(band.x - region.x)
            .zip(ty.checked_add(band.y - region.y));
        match origin {
            Some((x, y)) => target.put_image_data(buffer, x, y),
            None => trace!(%band, "band clipped past coordinate range"),
        }
    }
}

/// Banded equivalent of [`Filter::apply_to`].
///
/// Produces the same target pixels as a single pass; `bands` only controls
/// how the work is divided.
pub fn apply_tiled_to<A, T, S>(
    stage: &FilterStage<A, T>,
    source: &S,
    region: Rect,
    target: &mut dyn Surface,
    options: ApplyOptions,
    bands: u32,
) -> bool
where
    A: Send + Sync,
    T: PixelTransform<A> + Sync,
    S: Surface + Sync,
{
    match process_bands(stage, source, region, bands) {
        Ok(blocks) => {
            write_bands(target, region, options, &blocks);
            true
        }
        Err(err) => {
            debug!(filter = stage.label(), error = %err, "banded filter not applied");
            false
        }
    }
}

/// Banded equivalent of [`Filter::apply`]: reads and writes `surface`.
pub fn apply_tiled<A, T, S>(
    stage: &FilterStage<A, T>,
    surface: &mut S,
    region: Rect,
    options: ApplyOptions,
    bands: u32,
) -> bool
where
    A: Send + Sync,
    T: PixelTransform<A> + Sync,
    S: Surface + Sync,
{
    match process_bands(stage, &*surface, region, bands) {
        Ok(blocks) => {
            write_bands(surface, region, options, &blocks);
            true
        }
        Err(err) => {
            debug!(filter = stage.label(), error = %err, "banded filter not applied");
            false
        }
    }
}
