//! Rectangle type addressing pixels on a surface.
//!
//! A [`Rect`] names the region a filter reads from its source surface. The
//! same type, through [`Rect::with_origin`], names where the result lands on
//! the target surface.
//!
//! # Coordinate System
//!
//! All coordinates use the canvas convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use easel_core::Rect;
//!
//! let rect = Rect::new(10, 20, 100, 50);
//! assert!(rect.contains(15, 25));
//! assert!(!rect.contains(5, 25));
//!
//! // Partition into bands for parallel filtering
//! let bands = rect.split_rows(4);
//! assert_eq!(bands.len(), 4);
//! assert_eq!(bands.iter().map(|b| b.area()).sum::<u64>(), rect.area());
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Invariants
///
/// - A rectangle with zero width or height is empty
/// - Edges are computed with saturating arithmetic, so huge values never
///   wrap around
///
/// # Example
///
/// ```rust
/// use easel_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom edges.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// An empty rectangle is contained as long as its origin lies within
    /// (or on the far edge of) this one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easel_core::Rect;
    ///
    /// let outer = Rect::new(0, 0, 100, 100);
    /// assert!(outer.contains_rect(&Rect::new(10, 10, 50, 50)));
    /// assert!(!outer.contains_rect(&Rect::new(90, 90, 20, 20)));
    /// ```
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        // Overflowing edges can never fit
        let (Some(other_right), Some(other_bottom)) = (
            other.x.checked_add(other.width),
            other.y.checked_add(other.height),
        ) else {
            return false;
        };
        other.x >= self.x
            && other.y >= self.y
            && other_right <= self.right()
            && other_bottom <= self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easel_core::Rect;
    ///
    /// let a = Rect::new(0, 0, 100, 100);
    /// let b = Rect::new(50, 50, 100, 100);
    /// assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Returns a rectangle of the same size at a new origin.
    #[inline]
    pub const fn with_origin(&self, x: u32, y: u32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    /// Splits the rectangle into at most `bands` horizontal bands.
    ///
    /// Bands do not overlap, cover the rectangle exactly, and differ in
    /// height by at most one row. `bands` is clamped to `1..=height`; an
    /// empty rectangle yields itself as the single band.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easel_core::Rect;
    ///
    /// let bands = Rect::new(0, 10, 8, 5).split_rows(2);
    /// assert_eq!(bands, vec![Rect::new(0, 10, 8, 3), Rect::new(0, 13, 8, 2)]);
    /// ```
    pub fn split_rows(&self, bands: u32) -> Vec<Rect> {
        if self.is_empty() {
            return vec![*self];
        }
        let bands = bands.clamp(1, self.height);
        let base = self.height / bands;
        let extra = self.height % bands;

        let mut out = Vec::with_capacity(bands as usize);
        let mut y = self.y;
        for i in 0..bands {
            let h = base + u32::from(i < extra);
            out.push(Rect::new(self.x, y, self.width, h));
            y += h;
        }
        out
    }

    /// Returns an iterator over all (x, y) coordinates in this rectangle.
    ///
    /// Iterates row by row, left to right, top to bottom.
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.area(), 1200);
        assert!(!r.is_empty());
        assert!(Rect::new(5, 5, 0, 10).is_empty());
    }

    #[test]
    fn test_rect_saturates() {
        let r = Rect::new(u32::MAX - 1, 0, 10, 1);
        assert_eq!(r.right(), u32::MAX);
        assert!(!Rect::from_size(u32::MAX, 1).contains_rect(&r));
    }

    #[test]
    fn test_contains_rect() {
        let bounds = Rect::from_size(4, 4);
        assert!(bounds.contains_rect(&Rect::new(0, 0, 4, 4)));
        assert!(bounds.contains_rect(&Rect::new(1, 1, 2, 3)));
        assert!(bounds.contains_rect(&Rect::new(4, 4, 0, 0)));
        assert!(!bounds.contains_rect(&Rect::new(3, 0, 2, 1)));
        assert!(!bounds.contains_rect(&Rect::new(0, 5, 0, 0)));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_with_origin() {
        let r = Rect::new(1, 2, 3, 4).with_origin(7, 8);
        assert_eq!(r, Rect::new(7, 8, 3, 4));
    }

    #[test]
    fn test_split_rows_covers_without_overlap() {
        let r = Rect::new(3, 7, 5, 11);
        for bands in [1, 2, 3, 4, 11, 50] {
            let parts = r.split_rows(bands);
            assert_eq!(parts.len() as u32, bands.min(11));
            assert_eq!(parts.iter().map(Rect::area).sum::<u64>(), r.area());
            for pair in parts.windows(2) {
                assert_eq!(pair[0].bottom(), pair[1].y);
                assert!(pair[0].intersect(&pair[1]).is_none());
            }
            assert_eq!(parts[0].y, r.y);
            assert_eq!(parts.last().map(Rect::bottom), Some(r.bottom()));
        }
    }

    #[test]
    fn test_split_rows_zero_bands() {
        let r = Rect::new(0, 0, 4, 4);
        assert_eq!(r.split_rows(0), vec![r]);
    }

    #[test]
    fn test_split_rows_empty() {
        let r = Rect::new(2, 2, 0, 5);
        assert_eq!(r.split_rows(3), vec![r]);
    }

    #[test]
    fn test_iter_coords() {
        let coords: Vec<_> = Rect::new(1, 1, 2, 2).iter_coords().collect();
        assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "Rect(1, 2, 3x4)");
    }
}
