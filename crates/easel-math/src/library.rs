//! Process-wide math handle shared by filters.
//!
//! Filters do not reach for free functions through a global namespace.
//! Instead they hold a `&'static MathLibrary` obtained once from
//! [`MathLibrary::install`] (or injected by the caller). The first call
//! creates the library; later calls return the same instance.
//!
//! # Example
//!
//! ```rust
//! use easel_math::MathLibrary;
//!
//! let a = MathLibrary::install();
//! let b = MathLibrary::install();
//! assert!(std::ptr::eq(a, b));
//! assert!(MathLibrary::is_installed());
//!
//! assert_eq!(a.clamp(2.0, 0.0, 1.0), 1.0);
//! ```

use std::sync::OnceLock;

use tracing::debug;

use crate::{Vec2, Vec3, Vec4};

static LIBRARY: OnceLock<MathLibrary> = OnceLock::new();

/// Shared handle to the vector math toolkit.
///
/// The handle is stateless; it exists so filters can take the math toolkit
/// as an explicit dependency rather than an ambient global.
#[derive(Debug)]
#[non_exhaustive]
pub struct MathLibrary {}

impl MathLibrary {
    /// Returns the process-wide library, creating it on first use.
    pub fn install() -> &'static MathLibrary {
        LIBRARY.get_or_init(|| {
            debug!("installing vector math library");
            MathLibrary {}
        })
    }

    /// Returns `true` once [`MathLibrary::install`] has run.
    pub fn is_installed() -> bool {
        LIBRARY.get().is_some()
    }

    /// See [`crate::clamp`].
    #[inline]
    pub fn clamp(&self, value: f32, min: f32, max: f32) -> f32 {
        crate::clamp(value, min, max)
    }

    /// See [`crate::lerp`].
    #[inline]
    pub fn lerp(&self, v0: f32, v1: f32, t: f32) -> f32 {
        crate::lerp(v0, v1, t)
    }

    /// Builds a [`Vec2`].
    #[inline]
    pub fn vec2(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    /// Builds a [`Vec3`].
    #[inline]
    pub fn vec3(&self, x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    /// Builds a [`Vec4`].
    #[inline]
    pub fn vec4(&self, r: f32, g: f32, b: f32, a: f32) -> Vec4 {
        Vec4::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_returns_same_instance() {
        let first = MathLibrary::install();
        let second = MathLibrary::install();
        assert!(std::ptr::eq(first, second));
        assert!(MathLibrary::is_installed());
    }

    #[test]
    fn test_install_is_shared_across_threads() {
        let here = MathLibrary::install() as *const MathLibrary as usize;
        let there = std::thread::spawn(|| MathLibrary::install() as *const MathLibrary as usize)
            .join()
            .unwrap();
        assert_eq!(here, there);
    }

    #[test]
    fn test_handle_delegates() {
        let math = MathLibrary::install();
        assert_eq!(math.clamp(-1.0, 0.0, 255.0), 0.0);
        assert_eq!(math.lerp(0.0, 100.0, 0.25), 25.0);
        assert_eq!(math.vec4(1.0, 2.0, 3.0, 4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(math.vec2(1.0, 2.0).x, 1.0);
        assert_eq!(math.vec3(1.0, 2.0, 3.0).z, 3.0);
    }
}
