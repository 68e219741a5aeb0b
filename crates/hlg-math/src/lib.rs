//! # hlg-math
//!
//! Math primitives for the HLG display pipeline.
//!
//! This crate provides the vector and matrix types the color transforms
//! are built on:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ color space transforms
//! - [`Vec3`] - 3D vectors for RGB and XYZ triplets
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`: the display chain is configuration-time math with
//! tight round-trip tolerances, not a per-pixel loop. [`glam`] `DVec3`/
//! `DMat3` conversions are provided for interop with single-precision
//! pixel pipelines.
//!
//! # Usage
//!
//! ```rust
//! use hlg_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.6369580483012914, 0.14461690358620832, 0.1688809751641721],
//!     [0.2627002120112671, 0.6779980715188708, 0.05930171646986196],
//!     [0.0, 0.028072693049087428, 1.060985057710791],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with DVec3/DMat3
//!
//! # Used By
//!
//! - `hlg-primaries` - RGB/XYZ matrix generation
//! - `hlg-display` - OOTF, EOTF, and signal conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3 as GlamDMat3, DVec3 as GlamDVec3};
}
