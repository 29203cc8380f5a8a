//! # easel-core
//!
//! Core types shared by canvas filters and the hosts that run them.
//!
//! - [`Rect`] - a pixel region on a surface
//! - [`PixelBuffer`] - RGBA8 pixel block copied out of / into a surface
//! - [`Surface`] - rectangular pixel read/write, implemented by the host
//! - [`MemorySurface`] - in-memory surface with canvas taint semantics
//! - [`Error`] - why a surface refused a read
//!
//! ## Crate Structure
//!
//! ```text
//! easel-core (this crate)
//!    ^
//!    |
//!    +-- easel-filters (filter contract, FilterStage)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod rect;
pub mod surface;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use rect::Rect;
pub use surface::{MemorySurface, Surface};

/// Prelude module for convenient imports.
///
/// ```
/// use easel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::rect::Rect;
    pub use crate::surface::{MemorySurface, Surface};
}
