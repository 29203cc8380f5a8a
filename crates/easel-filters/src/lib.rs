//! # easel-filters
//!
//! Filter contract for canvas surfaces: read a region, transform each
//! pixel, write the block back.
//!
//! # Modules
//!
//! - [`filter`] - the [`Filter`] capability and [`ApplyOptions`]
//! - [`stage`] - [`FilterStage`], a filter driven by a per-pixel transform
//! - [`chain`] - [`FilterChain`], several filters over one surface
//! - `parallel` - banded passes on the Rayon pool (feature `parallel`)
//!
//! # Failure policy
//!
//! A pass fails in exactly one way: the source surface refuses the read
//! (cross-origin taint, region outside the surface). The pass then stops
//! before writing anything. `apply`/`apply_to` return `false` for it so a
//! host can skip the filter and keep rendering; `try_apply`/`try_apply_to`
//! return the [`FilterError`].
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect};
//! use easel_filters::{ApplyOptions, Filter, FilterStage};
//!
//! // Desaturate by averaging the color channels
//! let gray = FilterStage::from_fn((), |_, px| {
//!     let v = (px.src.r + px.src.g + px.src.b) / 3.0;
//!     px.dst.r = v;
//!     px.dst.g = v;
//!     px.dst.b = v;
//! });
//!
//! let source = MemorySurface::from_buffer(PixelBuffer::filled(2, 2, [30, 60, 90, 255]));
//! let mut target = MemorySurface::new(4, 4);
//! let opts = ApplyOptions::new().with_target_origin(2, 2);
//!
//! assert!(gray.apply_to(&source, Rect::from_size(2, 2), &mut target, opts));
//! assert_eq!(target.pixels().pixel(3, 3), [60, 60, 60, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod chain;
pub mod filter;
pub mod stage;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use chain::FilterChain;
pub use error::{FilterError, FilterResult};
pub use filter::{ApplyOptions, Filter};
pub use stage::{FilterStage, PixelContext, PixelTransform};

pub use easel_math::MathLibrary;
