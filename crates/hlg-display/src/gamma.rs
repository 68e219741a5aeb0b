//! Viewing-environment parameter formulas.
//!
//! BT.2390 parameterizes the HLG display transform by two derived
//! values: the system gamma `γ` (from peak luminance and, optionally,
//! ambient luminance) and the black-level lift `β` (from gamma and the
//! display's peak/black luminance). These are pure functions of the
//! environment, recomputed whenever the environment changes — never
//! cached.
//!
//! # Reference
//!
//! ITU-R BT.2390-10 sections 6.2 and 6.3

use crate::error::{DisplayError, DisplayResult};

/// System gamma for the reference viewing environment.
pub const REFERENCE_GAMMA: f64 = 1.2;

/// Nominal peak luminance of the reference display, cd/m2.
pub const REFERENCE_PEAK_LUMINANCE: f64 = 1000.0;

/// Ambient luminance of the reference viewing environment, cd/m2.
pub const REFERENCE_AMBIENT_LUMINANCE: f64 = 5.0;

// Base of the extended system-gamma model: gamma scales by K per
// doubling of peak luminance relative to the 1000 cd/m2 reference.
const K: f64 = 1.111;

#[inline]
pub(crate) fn black_level_lift_unchecked(gamma: f64, lw: f64, lb: f64) -> f64 {
    (3.0 * (lb / lw).powf(1.0 / gamma)).sqrt()
}

#[inline]
pub(crate) fn extended_gamma_unchecked(lw: f64) -> f64 {
    REFERENCE_GAMMA * K.powf((lw / REFERENCE_PEAK_LUMINANCE).log2())
}

#[inline]
pub(crate) fn bright_gamma_unchecked(ref_gamma: f64, lamb: f64) -> f64 {
    ref_gamma + 0.076 * (lamb / REFERENCE_AMBIENT_LUMINANCE).log10()
}

/// Black-level lift `β` for a display.
///
/// # Formula
///
/// ```text
/// β = sqrt(3 * (Lb / Lw)^(1/gamma))
/// ```
///
/// A display with a true zero black (`lb = 0`) needs no lift: `β = 0`.
///
/// # Errors
///
/// [`DisplayError::InvalidGamma`] for `gamma <= 0`,
/// [`DisplayError::InvalidPeakLuminance`] for `lw <= 0`,
/// [`DisplayError::InvalidBlackLuminance`] for `lb < 0`.
///
/// # Example
///
/// ```rust
/// use hlg_display::black_level_lift;
///
/// // VESA DisplayHDR 1000 tier: 1000 cd/m2 peak, 0.05 cd/m2 black
/// let beta = black_level_lift(1.2, 1000.0, 0.05).unwrap();
/// assert!((beta - 0.0279553).abs() < 1e-6);
/// ```
pub fn black_level_lift(gamma: f64, lw: f64, lb: f64) -> DisplayResult<f64> {
    if gamma <= 0.0 {
        return Err(DisplayError::InvalidGamma(gamma));
    }
    if lw <= 0.0 {
        return Err(DisplayError::InvalidPeakLuminance(lw));
    }
    if lb < 0.0 {
        return Err(DisplayError::InvalidBlackLuminance(lb));
    }
    Ok(black_level_lift_unchecked(gamma, lw, lb))
}

/// Reference system gamma `γ_ref` for a display peak luminance, using
/// the extended model.
///
/// # Formula
///
/// ```text
/// γ_ref = 1.2 * 1.111^(log2(Lw / 1000))
/// ```
///
/// Equals 1.2 at the 1000 cd/m2 reference point and scales by 1.111 per
/// doubling of peak luminance.
///
/// # Errors
///
/// [`DisplayError::InvalidPeakLuminance`] for `lw <= 0`.
///
/// # Example
///
/// ```rust
/// use hlg_display::extended_gamma;
///
/// assert!((extended_gamma(1000.0).unwrap() - 1.2).abs() < 1e-12);
/// assert!((extended_gamma(2000.0).unwrap() - 1.3332).abs() < 1e-12);
/// ```
pub fn extended_gamma(lw: f64) -> DisplayResult<f64> {
    if lw <= 0.0 {
        return Err(DisplayError::InvalidPeakLuminance(lw));
    }
    Ok(extended_gamma_unchecked(lw))
}

/// System gamma adjusted for the actual viewing environment, using the
/// best-fit model.
///
/// # Formula
///
/// ```text
/// γ = refGamma + 0.076 * log10(Lamb / 5)
/// ```
///
/// Reduces to `ref_gamma` at the 5 cd/m2 reference ambient level;
/// brighter surroundings raise gamma, dimmer ones lower it.
///
/// # Errors
///
/// [`DisplayError::InvalidAmbientLuminance`] for `lamb <= 0`.
///
/// # Example
///
/// ```rust
/// use hlg_display::bright_gamma;
///
/// let g = bright_gamma(1.2, 5.0).unwrap();
/// assert!((g - 1.2).abs() < 1e-15);
/// ```
pub fn bright_gamma(ref_gamma: f64, lamb: f64) -> DisplayResult<f64> {
    if lamb <= 0.0 {
        return Err(DisplayError::InvalidAmbientLuminance(lamb));
    }
    Ok(bright_gamma_unchecked(ref_gamma, lamb))
}
