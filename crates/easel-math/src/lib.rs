//! # easel-math
//!
//! Small numeric toolkit for writing per-pixel canvas filters.
//!
//! This crate provides the primitives a filter author reaches for inside a
//! pixel loop:
//!
//! - [`clamp`], [`lerp`] and friends - scalar helpers
//! - [`Vec2`] - pixel positions
//! - [`Vec3`] - general 3-component tuples
//! - [`Vec4`] - RGBA channel values, with in-place chainable arithmetic
//! - [`MathLibrary`] - the shared, install-once handle filters hold on to
//!
//! # Design
//!
//! [`Vec4`] has two arithmetic families. The named methods (`add_vec`,
//! `mul_scalar`, ...) mutate the receiver and return `&mut Self`, so a chain
//! of operations in a hot loop never builds intermediate values. The
//! `std::ops` operators return new values for call sites that prefer them.
//!
//! Operand shape is chosen at compile time: `add_vec` takes another vector,
//! `add_scalar` broadcasts a number to all four channels.
//!
//! # Usage
//!
//! ```rust
//! use easel_math::{clamp, lerp, Vec4};
//!
//! let mut px = Vec4::new(200.0, 100.0, 50.0, 255.0);
//! px.mul_scalar(1.5).sub_scalar(10.0);
//! assert_eq!(px.r, 290.0);
//!
//! let r = clamp(px.r, 0.0, 255.0);
//! assert_eq!(r, 255.0);
//! assert_eq!(lerp(0.0, 255.0, 0.5), 127.5);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - conversions for callers already using glam vectors
//! - [`tracing`] - install diagnostics
//!
//! # Used By
//!
//! - `easel-filters` - per-pixel transform context

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod library;
mod vec2;
mod vec3;
mod vec4;

pub use interp::*;
pub use library::MathLibrary;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
