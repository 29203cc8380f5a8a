//! RGBA8 pixel buffer exchanged with surfaces.
//!
//! [`PixelBuffer`] is what a surface hands out from
//! [`crate::Surface::get_image_data`] and accepts in
//! [`crate::Surface::put_image_data`]: tightly packed rows of 4-byte RGBA
//! pixels, top row first.
//!
//! ```text
//! byte offset of (x, y) = (y * width + x) * 4
//! channels at offset i:  i = r, i+1 = g, i+2 = b, i+3 = a
//! ```

use crate::{Error, Rect, Result};

/// Bytes per pixel (r, g, b, a).
pub const CHANNELS: usize = 4;

/// An owned block of RGBA8 pixels.
///
/// # Example
///
/// ```rust
/// use easel_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(2, 1);
/// buf.set_pixel(1, 0, [200, 100, 50, 128]);
/// assert_eq!(buf.pixel(1, 0), [200, 100, 50, 128]);
/// assert_eq!(buf.data()[4..], [200, 100, 50, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; Self::byte_len(width, height)],
        }
    }

    /// Creates a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` is not exactly
    /// `width * height * 4` bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easel_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_data(2, 1, vec![10, 20, 30, 255, 200, 100, 50, 128]).unwrap();
    /// assert_eq!(buf.pixel(0, 0), [10, 20, 30, 255]);
    ///
    /// assert!(PixelBuffer::from_data(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height);
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self { width, height, data })
    }

    /// Creates a buffer filled with one pixel value.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: pixel.repeat(count),
        }
    }

    #[inline]
    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a rectangle at (0, 0) covering the buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel);
    }

    /// Returns row `y` as a byte slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize * CHANNELS]
    }

    /// Returns row `y` as a mutable byte slice.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.offset(0, y);
        let len = self.width as usize * CHANNELS;
        &mut self.data[start..start + len]
    }
}
