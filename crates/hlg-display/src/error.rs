//! Error types for display-referred transforms.
//!
//! Failure here is purely a numeric-domain concern: luminance ratios are
//! undefined for non-positive peak or ambient luminance, and a gamma
//! exponent must be positive. Each violation is surfaced immediately as
//! an error carrying the offending value; nothing is logged or clamped
//! behind the caller's back.

use thiserror::Error;

/// Display parameter error.
///
/// Returned by the viewing-environment formulas ([`crate::gamma`]) and
/// the [`crate::HlgDisplay`] constructor when a parameter lies outside
/// the domain of the BT.2390 formulas.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DisplayError {
    /// Nominal peak luminance (Lw) must be positive.
    #[error("peak luminance must be positive, got {0} cd/m2")]
    InvalidPeakLuminance(f64),

    /// Display black luminance (Lb) must be non-negative.
    #[error("black luminance must be non-negative, got {0} cd/m2")]
    InvalidBlackLuminance(f64),

    /// Ambient luminance (Lamb) must be positive.
    #[error("ambient luminance must be positive, got {0} cd/m2")]
    InvalidAmbientLuminance(f64),

    /// Gamma exponent must be positive.
    #[error("gamma exponent must be positive, got {0}")]
    InvalidGamma(f64),

    /// Black luminance must stay below peak luminance.
    #[error("black luminance {black} cd/m2 is not below peak luminance {peak} cd/m2")]
    BlackAbovePeak {
        /// Display black luminance (Lb)
        black: f64,
        /// Nominal peak luminance (Lw)
        peak: f64,
    },
}

/// Result type for display parameter computations.
pub type DisplayResult<T> = Result<T, DisplayError>;
