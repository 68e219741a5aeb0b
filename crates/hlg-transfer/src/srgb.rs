//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear
//! segment near black with a power curve (approximately gamma 2.2) for
//! the rest. The `_extended` variants mirror the curve around zero so
//! that extended-range signals (outside [0, 1]) linearize the way the
//! CSS Color 4 conversion functions do; the cross-standard conversion
//! path depends on that behavior.
//!
//! # Range
//!
//! - Plain variants: [0, 1]
//! - Extended variants: all finite values
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use hlg_transfer::srgb;
///
/// let linear = srgb::eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use hlg_transfer::srgb;
///
/// let encoded = srgb::oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Extended-range sRGB EOTF: sign-mirrored around zero.
///
/// `eotf_extended(v) = sign(v) * eotf(|v|)`, so negative and >1 signal
/// values linearize monotonically instead of being undefined or clipped.
#[inline]
pub fn eotf_extended(v: f64) -> f64 {
    v.signum() * eotf(v.abs())
}

/// Extended-range sRGB OETF: sign-mirrored around zero.
///
/// Inverse of [`eotf_extended`].
#[inline]
pub fn oetf_extended(l: f64) -> f64 {
    l.signum() * oetf(l.abs())
}

/// Applies the sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies the sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

/// Applies the extended-range sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_extended_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [
        eotf_extended(rgb[0]),
        eotf_extended(rgb[1]),
        eotf_extended(rgb[2]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let linear = eotf(v);
            let back = oetf(linear);
            assert!((v - back).abs() < 1e-12, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        // sRGB 0.5 should be approximately 0.214 linear
        let linear = eotf(0.5);
        assert!((linear - 0.214).abs() < 0.01);
    }

    #[test]
    fn test_extended_mirror() {
        assert!((eotf_extended(-0.5) + eotf(0.5)).abs() < 1e-15);
        assert!((oetf_extended(-0.214) + oetf(0.214)).abs() < 1e-15);
    }

    #[test]
    fn test_extended_above_one() {
        // Values above 1 keep following the power curve
        let lin = eotf_extended(1.2);
        assert!(lin > 1.0);
        assert!((oetf_extended(lin) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_extended_roundtrip() {
        for i in -150..=150 {
            let v = i as f64 / 100.0;
            let back = oetf_extended(eotf_extended(v));
            assert!((v - back).abs() < 1e-12, "v={}, back={}", v, back);
        }
    }
}
