//! Error types for surface operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the ways a [`crate::Surface`] can refuse a
//! pixel read:
//! - The surface is tainted by cross-origin content ([`Error::ReadDenied`])
//! - The requested region does not fit the surface ([`Error::InvalidRegion`])
//! - A buffer was built from data of the wrong size ([`Error::InvalidDimensions`])
//!
//! Writes never fail; [`crate::Surface::put_image_data`] clips instead.
//!
//! # Usage
//!
//! ```rust
//! use easel_core::{Error, Rect, Result};
//!
//! fn check(region: Rect, width: u32, height: u32) -> Result<()> {
//!     if !Rect::from_size(width, height).contains_rect(&region) {
//!         return Err(Error::invalid_region(region, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(Rect::new(0, 0, 4, 4), 2, 2).is_err());
//! ```

use thiserror::Error;

use crate::Rect;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by surfaces and pixel buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The surface refused to expose its pixels.
    ///
    /// Canvas surfaces become tainted once cross-origin content is drawn
    /// into them; from then on every pixel read is denied.
    #[error("pixel read denied: {reason}")]
    ReadDenied {
        /// Why access was refused
        reason: String,
    },

    /// Region extends beyond the surface bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds surface bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Surface width
        width: u32,
        /// Surface height
        height: u32,
    },

    /// Buffer dimensions don't match the supplied data.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::ReadDenied`] error.
    #[inline]
    pub fn read_denied(reason: impl Into<String>) -> Self {
        Self::ReadDenied {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(region: Rect, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx: region.x,
            ry: region.y,
            rw: region.width,
            rh: region.height,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if access was refused outright.
    #[inline]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::ReadDenied { .. })
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. })
    }
}
