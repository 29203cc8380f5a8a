//! Drawing surfaces that filters read from and write to.
//!
//! A [`Surface`] is the canvas-context side of the filter contract: it
//! hands out a copy of a rectangular block of pixels and accepts a block
//! back at any origin. Reads may be refused; writes never fail and are
//! clipped to the surface.
//!
//! [`MemorySurface`] is the in-process implementation, used by hosts that
//! render off-screen and by tests.
//!
//! # Example
//!
//! ```rust
//! use easel_core::{MemorySurface, PixelBuffer, Rect, Surface};
//!
//! let mut surface = MemorySurface::new(4, 4);
//! surface.put_image_data(&PixelBuffer::filled(2, 2, [255, 0, 0, 255]), 1, 1);
//!
//! let block = surface.get_image_data(Rect::new(1, 1, 2, 2)).unwrap();
//! assert_eq!(block.pixel(0, 0), [255, 0, 0, 255]);
//!
//! surface.set_tainted(true);
//! assert!(surface.get_image_data(Rect::new(0, 0, 1, 1)).is_err());
//! ```

use tracing::trace;

use crate::buffer::CHANNELS;
use crate::{Error, PixelBuffer, Rect, Result};

/// A 2D pixel store supporting rectangular reads and writes.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Copies the pixels of `region` out of the surface.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::ReadDenied`] when pixel access is
    /// refused and [`Error::InvalidRegion`] when the region cannot be read.
    fn get_image_data(&self, region: Rect) -> Result<PixelBuffer>;

    /// Writes `buffer` with its top-left corner at (x, y).
    ///
    /// Pixels falling outside the surface are dropped.
    fn put_image_data(&mut self, buffer: &PixelBuffer, x: u32, y: u32);

    /// Returns a rectangle at (0, 0) covering the surface.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }
}

/// An in-memory RGBA8 surface.
///
/// Mirrors canvas behavior: once marked tainted (cross-origin content was
/// drawn into it) every read is refused, while writes still succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    pixels: PixelBuffer,
    tainted: bool,
}

impl MemorySurface {
    /// Creates a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_buffer(PixelBuffer::new(width, height))
    }

    /// Wraps an existing buffer as a surface.
    pub fn from_buffer(pixels: PixelBuffer) -> Self {
        Self {
            pixels,
            tainted: false,
        }
    }

    /// Marks the surface as tainted (or clean).
    pub fn set_tainted(&mut self, tainted: bool) {
        self.tainted = tainted;
    }

    /// Returns `true` if reads are refused.
    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    /// Whole-surface pixel storage.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Mutable whole-surface pixel storage.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }
}

impl Surface for MemorySurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn get_image_data(&self, region: Rect) -> Result<PixelBuffer> {
        if self.tainted {
            return Err(Error::read_denied(
                "surface has been tainted by cross-origin data",
            ));
        }
        if !self.bounds().contains_rect(&region) {
            return Err(Error::invalid_region(region, self.width(), self.height()));
        }

        let mut out = PixelBuffer::new(region.width, region.height);
        let row_bytes = region.width as usize * CHANNELS;
        let x_bytes = region.x as usize * CHANNELS;
        for row in 0..region.height {
            let src = &self.pixels.row(region.y + row)[x_bytes..x_bytes + row_bytes];
            out.row_mut(row).copy_from_slice(src);
        }
        Ok(out)
    }

    fn put_image_data(&mut self, buffer: &PixelBuffer, x: u32, y: u32) {
        let dest = buffer.bounds().with_origin(x, y);
        let Some(clipped) = dest.intersect(&self.bounds()) else {
            trace!(%dest, "put_image_data: nothing inside surface");
            return;
        };

        let row_bytes = clipped.width as usize * CHANNELS;
        let src_x = (clipped.x - x) as usize * CHANNELS;
        let dst_x = clipped.x as usize * CHANNELS;
        for row in 0..clipped.height {
            let src = &buffer.row(clipped.y - y + row)[src_x..src_x + row_bytes];
            self.pixels.row_mut(clipped.y + row)[dst_x..dst_x + row_bytes].copy_from_slice(src);
        }
    }
}
