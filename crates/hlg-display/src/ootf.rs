//! OOTF: system-gamma application in linear light.
//!
//! The HLG OOTF applies the system gamma to the luminance channel alone.
//! Raising each RGB channel to the power would shift saturation and hue,
//! so the triple is routed through CIE XYZ, `Y` is exponentiated, and
//! the result converted back to rec2100 RGB. The two fixed matrices are
//! the standard rec2020/rec2100 D65 transforms from `hlg-primaries`.
//!
//! # Reference
//!
//! ITU-R BT.2390-10 section 6.2

use hlg_math::Vec3;
use hlg_primaries::{REC2020_TO_XYZ, XYZ_TO_REC2020};

/// Applies system gamma to the luminance of a linear-light rec2100
/// triple.
///
/// Converts to XYZ, raises `Y` to `gamma` (X and Z untouched), converts
/// back. Out-of-gamut triples can carry `Y <= 0`, where a non-integer
/// power is undefined; such luminance is treated as zero instead of
/// producing NaN.
///
/// `gamma = 1.0` is an identity on the triple (up to round-off).
///
/// # Example
///
/// ```rust
/// use hlg_display::apply_system_gamma;
/// use hlg_math::Vec3;
///
/// let rgb = Vec3::new(0.2, 0.5, 0.7);
/// let out = apply_system_gamma(rgb, 1.0);
/// assert!((out.x - rgb.x).abs() < 1e-12);
/// ```
#[inline]
pub fn apply_system_gamma(rgb: Vec3, gamma: f64) -> Vec3 {
    let xyz = REC2020_TO_XYZ * rgb;
    let y = if xyz.y > 0.0 { xyz.y.powf(gamma) } else { 0.0 };
    XYZ_TO_REC2020 * Vec3::new(xyz.x, y, xyz.z)
}

/// Removes system gamma from the luminance of a linear-light rec2100
/// triple.
///
/// The inverse of [`apply_system_gamma`]: raises `Y` to `1/gamma`.
/// Needed by the inverse EOTF when encoding display light back to
/// signal values.
#[inline]
pub fn remove_system_gamma(rgb: Vec3, gamma: f64) -> Vec3 {
    apply_system_gamma(rgb, gamma.recip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_gamma() {
        let samples = [
            Vec3::new(0.2, 0.5, 0.7),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.01, 0.0, 0.99),
        ];
        for rgb in samples {
            let out = apply_system_gamma(rgb, 1.0);
            assert!((out.x - rgb.x).abs() < 1e-12);
            assert!((out.y - rgb.y).abs() < 1e-12);
            assert!((out.z - rgb.z).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_remove_roundtrip() {
        let rgb = Vec3::new(0.25, 0.6, 0.1);
        let gamma = 1.2;
        let back = remove_system_gamma(apply_system_gamma(rgb, gamma), gamma);
        assert!((back.x - rgb.x).abs() < 1e-12);
        assert!((back.y - rgb.y).abs() < 1e-12);
        assert!((back.z - rgb.z).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_only() {
        // X and Z pass through untouched
        let rgb = Vec3::new(0.3, 0.4, 0.5);
        let xyz_in = REC2020_TO_XYZ * rgb;
        let xyz_out = REC2020_TO_XYZ * apply_system_gamma(rgb, 1.2);

        assert!((xyz_out.x - xyz_in.x).abs() < 1e-12);
        assert!((xyz_out.z - xyz_in.z).abs() < 1e-12);
        assert!((xyz_out.y - xyz_in.y.powf(1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_darkens_midtones() {
        // Y < 1 and gamma > 1 push luminance down
        let rgb = Vec3::splat(0.5);
        let xyz_in = REC2020_TO_XYZ * rgb;
        let xyz_out = REC2020_TO_XYZ * apply_system_gamma(rgb, 1.2);
        assert!(xyz_out.y < xyz_in.y);
    }

    #[test]
    fn test_non_positive_luminance_guard() {
        // A triple with Y <= 0 must not produce NaN
        let rgb = XYZ_TO_REC2020 * Vec3::new(0.1, -0.05, 0.1);
        let out = apply_system_gamma(rgb, 1.2);
        assert!(out.is_finite(), "out={:?}", out);

        let zero_y = XYZ_TO_REC2020 * Vec3::new(0.1, 0.0, 0.1);
        assert!(apply_system_gamma(zero_y, 1.2).is_finite());
    }
}
