//! Hybrid Log-Gamma (HLG) scene transfer curves.
//!
//! The OETF maps scene-linear light to the non-linear HLG signal with a
//! square-root segment below 1/12 and a logarithmic segment above it; the
//! inverse OETF is its exact algebraic inverse. The display-referred
//! EOTF (black-level lift plus system gamma) lives in `hlg-display` and
//! composes these curves.
//!
//! # Range
//!
//! - Signal: [0, 1] nominal
//! - Scene-linear: [0, 1] nominal (relative), log segment extends above 1
//!
//! # Reference
//!
//! ITU-R BT.2390-10 sections 6.1 and 6.3

// HLG curve constants. B and C are chosen so the two segments meet with
// matching value at E = 1/12 (both give 0.5).
const A: f64 = 0.17883277;
const B: f64 = 0.28466892; // 1 - 4*A
const C: f64 = 0.559910729529562; // 0.5 - A*ln(4*A)

/// Scene-linear value at which the OETF switches from the square-root
/// segment to the logarithmic segment. The signal value there is 0.5.
pub const SEGMENT_BREAK: f64 = 1.0 / 12.0;

/// HLG OETF: encodes scene-linear light to the HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = A * ln(12*E - B) + C
/// ```
///
/// # Domain
///
/// Defined for `E >= 0`. A negative input falls in the square-root
/// segment and yields NaN; callers that may hold negative (out-of-gamut)
/// values clamp to zero first, as the display-layer transforms do.
///
/// # Example
///
/// ```rust
/// use hlg_transfer::hlg;
///
/// // 1/12 scene light sits exactly at half signal
/// assert!((hlg::oetf(1.0 / 12.0) - 0.5).abs() < 1e-15);
/// ```
#[inline]
pub fn oetf(e: f64) -> f64 {
    if e <= SEGMENT_BREAK {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: decodes the HLG signal to scene-linear light.
///
/// Exact algebraic inverse of [`oetf`].
///
/// # Formula
///
/// ```text
/// if E' <= 0.5:
///     E = E'^2 / 3
/// else:
///     E = (exp((E' - C) / A) + B) / 12
/// ```
///
/// # Domain
///
/// Defined for `E'` in [0, 1]; the log segment extends monotonically
/// above 1 for extended-range signals.
///
/// # Example
///
/// ```rust
/// use hlg_transfer::hlg;
///
/// let e = hlg::inv_oetf(0.5);
/// assert!((e - 1.0 / 12.0).abs() < 1e-15);
/// ```
#[inline]
pub fn inv_oetf(ep: f64) -> f64 {
    if ep <= 0.5 {
        ep * ep / 3.0
    } else {
        (((ep - C) / A).exp() + B) / 12.0
    }
}

/// Applies the HLG OETF to an RGB triplet, per channel.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

/// Applies the HLG inverse OETF to an RGB triplet, per channel.
#[inline]
pub fn inv_oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [inv_oetf(rgb[0]), inv_oetf(rgb[1]), inv_oetf(rgb[2])]
}
