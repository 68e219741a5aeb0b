//! # hlg-transfer
//!
//! Scalar transfer curves for the HLG display pipeline.
//!
//! Transfer functions convert between linear light values and encoded
//! signal values. Everything here is a pointwise scalar curve: the
//! whole-triple, display-referred transforms (OOTF, EOTF) live in
//! `hlg-display` and compose these.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`hlg`] | HDR broadcast (BT.2100 HLG) | [0, 1] |
//! | [`srgb`] | Conventional-gamut source linearization | [0, 1], extended variants unbounded |
//!
//! # Usage
//!
//! ```rust
//! use hlg_transfer::{hlg, srgb};
//!
//! // Encode scene light to HLG signal
//! let signal = hlg::oetf(0.18);
//!
//! // Decode back
//! let linear = hlg::inv_oetf(signal);
//!
//! // Linearize an sRGB value
//! let lin = srgb::eotf(0.5);
//! ```
//!
//! # Scalar vs Triple Application
//!
//! These curves apply independently per channel (`_rgb` helpers are
//! provided); the OOTF step in `hlg-display` is the only transform that
//! needs the full triple at once.
//!
//! # Used By
//!
//! - `hlg-display` - EOTF, inverse EOTF, and sRGB-to-HLG conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hlg;
pub mod srgb;

// Re-export common functions
pub use hlg::{inv_oetf as hlg_inv_oetf, oetf as hlg_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
