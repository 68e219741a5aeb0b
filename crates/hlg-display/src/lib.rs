//! # hlg-display
//!
//! Display-referred HLG transforms per ITU-R BT.2390: the OOTF (system
//! gamma on luminance), the EOTF and its inverse (black-level lift plus
//! OOTF around the scalar curves), the viewing-environment parameter
//! formulas, and the conversion of conventional sRGB content into the
//! rec2100-HLG signal.
//!
//! # Pipeline
//!
//! ```text
//! HLG signal --(black lift, inverse OETF per channel)--> scene linear
//!            --(system gamma on Y, via XYZ)-----------> display linear
//! ```
//!
//! The per-channel and whole-triple stages are deliberately separate
//! surfaces: the scalar curves live in [`hlg_transfer`], and everything
//! taking a [`Vec3`](hlg_math::Vec3) here needs the full triple because
//! luminance depends on all three channels.
//!
//! # Usage
//!
//! ```rust
//! use hlg_display::{HlgDisplay, extended_srgb_to_rec2100_hlg};
//! use hlg_math::Vec3;
//!
//! // Bring sRGB content into the HLG signal
//! let hlg_signal = extended_srgb_to_rec2100_hlg(Vec3::new(0.9, 0.6, 0.3));
//!
//! // Decode for a particular display and room
//! let display = HlgDisplay::new(600.0, 0.1, 10.0)?;
//! let rgb = display.signal_to_display(hlg_signal);
//! # Ok::<(), hlg_display::DisplayError>(())
//! ```
//!
//! # Environment parameters
//!
//! β (black-level lift) and γ (system gamma) are pure functions of the
//! display and room ([`black_level_lift`], [`extended_gamma`],
//! [`bright_gamma`]); [`HlgDisplay`] recomputes them per call rather
//! than caching. Parameter-domain violations surface as
//! [`DisplayError`] values.
//!
//! # Dependencies
//!
//! - [`hlg-math`] - Vec3/Mat3
//! - [`hlg-primaries`] - fixed rec2100/sRGB matrices
//! - [`hlg-transfer`] - scalar curves
//! - [`thiserror`] - error derive

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod display;
pub mod eotf;
pub mod error;
pub mod gamma;
pub mod ootf;

pub use convert::{extended_srgb_to_rec2100_hlg, srgb_to_hlg_scale, HLG_MEDIA_WHITE_SIGNAL};
pub use display::HlgDisplay;
pub use eotf::{eotf, inv_eotf};
pub use error::{DisplayError, DisplayResult};
pub use gamma::{
    black_level_lift, bright_gamma, extended_gamma, REFERENCE_AMBIENT_LUMINANCE,
    REFERENCE_GAMMA, REFERENCE_PEAK_LUMINANCE,
};
pub use ootf::{apply_system_gamma, remove_system_gamma};
