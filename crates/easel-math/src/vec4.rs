//! 4-component vector for pixel channels.
//!
//! [`Vec4`] holds one RGBA pixel as floats in the 0..255 range used by
//! canvas pixel buffers (any other 4-tuple works too).
//!
//! Two arithmetic families are provided:
//!
//! - In-place: `add_vec`, `add_scalar`, `sub_vec`, ... mutate `self` and
//!   return `&mut Self` for chaining inside pixel loops.
//! - By value: `+ - * /` with a `Vec4` or `f32` right-hand side.
//!
//! Division does not guard against zero divisors; results follow IEEE-754
//! (infinity or NaN).
//!
//! # Usage
//!
//! ```rust
//! use easel_math::Vec4;
//!
//! let mut px = Vec4::from_rgba8([10, 20, 30, 255]);
//! px.add_scalar(5.0).mul_vec(Vec4::new(2.0, 1.0, 1.0, 1.0));
//! assert_eq!(px.to_rgba8(), [30, 25, 35, 255]);
//!
//! let halved = px / 2.0;
//! assert_eq!(halved.r, 15.0);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 4-component vector, usually the r/g/b/a channels of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from 8-bit channel values, keeping the 0..255 scale.
    #[inline]
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32)
    }

    /// Converts to 8-bit channel values.
    ///
    /// Each channel is rounded and clamped to 0..255. NaN maps to 0.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        #[inline]
        fn quantize(v: f32) -> u8 {
            // `as` saturates and maps NaN to 0
            v.round() as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }

    // In-place, chainable

    /// Adds another vector component-wise, in place.
    #[inline]
    pub fn add_vec(&mut self, rhs: Self) -> &mut Self {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
        self
    }

    /// Adds a scalar to every component, in place.
    #[inline]
    pub fn add_scalar(&mut self, rhs: f32) -> &mut Self {
        self.add_vec(Self::splat(rhs))
    }

    /// Subtracts another vector component-wise, in place.
    #[inline]
    pub fn sub_vec(&mut self, rhs: Self) -> &mut Self {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
        self.a -= rhs.a;
        self
    }

    /// Subtracts a scalar from every component, in place.
    #[inline]
    pub fn sub_scalar(&mut self, rhs: f32) -> &mut Self {
        self.sub_vec(Self::splat(rhs))
    }

    /// Multiplies by another vector component-wise, in place.
    #[inline]
    pub fn mul_vec(&mut self, rhs: Self) -> &mut Self {
        self.r *= rhs.r;
        self.g *= rhs.g;
        self.b *= rhs.b;
        self.a *= rhs.a;
        self
    }

    /// Multiplies every component by a scalar, in place.
    #[inline]
    pub fn mul_scalar(&mut self, rhs: f32) -> &mut Self {
        self.mul_vec(Self::splat(rhs))
    }

    /// Divides by another vector component-wise, in place.
    #[inline]
    pub fn div_vec(&mut self, rhs: Self) -> &mut Self {
        self.r /= rhs.r;
        self.g /= rhs.g;
        self.b /= rhs.b;
        self.a /= rhs.a;
        self
    }

    /// Divides every component by a scalar, in place.
    #[inline]
    pub fn div_scalar(&mut self, rhs: f32) -> &mut Self {
        self.div_vec(Self::splat(rhs))
    }

    // By value

    /// Clamps each component to [min, max]. NaN components stay NaN.
    #[inline]
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(
            crate::clamp(self.r, min, max),
            crate::clamp(self.g, min, max),
            crate::clamp(self.b, min, max),
            crate::clamp(self.a, min, max),
        )
    }

    /// Component-wise linear interpolation between self and other.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            crate::lerp(self.r, other.r, t),
            crate::lerp(self.g, other.g, t),
            crate::lerp(self.b, other.b, t),
            crate::lerp(self.a, other.a, t),
        )
    }

    /// Dot product of the color channels, ignoring alpha.
    #[inline]
    pub fn dot3(self, other: Self) -> f32 {
        self.r * other.r + self.g * other.g + self.b * other.b
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

macro_rules! impl_vec4_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $vec_fn:ident, $scalar_fn:ident) => {
        impl $op for Vec4 {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                self.$vec_fn(rhs);
                self
            }
        }

        impl $op<f32> for Vec4 {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: f32) -> Self {
                self.$scalar_fn(rhs);
                self
            }
        }

        impl $assign for Vec4 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                self.$vec_fn(rhs);
            }
        }

        impl $assign<f32> for Vec4 {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                self.$scalar_fn(rhs);
            }
        }
    };
}

impl_vec4_op!(Add, add, AddAssign, add_assign, add_vec, add_scalar);
impl_vec4_op!(Sub, sub, SubAssign, sub_assign, sub_vec, sub_scalar);
impl_vec4_op!(Mul, mul, MulAssign, mul_assign, mul_vec, mul_scalar);
impl_vec4_op!(Div, div, DivAssign, div_assign, div_vec, div_scalar);

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}
