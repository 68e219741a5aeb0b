//! Cross-standard conversion: extended sRGB to rec2100-HLG signal.
//!
//! Conventional (sRGB / full-range rec709) content is placed into the
//! HLG signal so that diffuse white lands at the HLG media-white level
//! of 75% signal. The path is: linearize (extended-range sRGB curve),
//! change primaries rec709 -> rec2020 through XYZ, scale every channel
//! by the scene-linear value of 75% signal, and encode with the inverse
//! EOTF at `β = 0, γ = 1` — which reduces to the plain OETF per channel.

use hlg_math::Vec3;
use hlg_primaries::{SRGB_TO_XYZ, XYZ_TO_REC2020};
use hlg_transfer::{hlg, srgb};

use crate::eotf::inv_eotf;

/// HLG signal level of media white (75 IRE).
pub const HLG_MEDIA_WHITE_SIGNAL: f64 = 0.75;

/// Scene-linear value corresponding to HLG media white.
///
/// `inv_oetf(0.75) ≈ 0.2649626`; sRGB reference white is scaled to this
/// level so it encodes back to 75% signal.
///
/// # Example
///
/// ```rust
/// use hlg_display::srgb_to_hlg_scale;
///
/// assert!((srgb_to_hlg_scale() - 0.2649626).abs() < 1e-7);
/// ```
#[inline]
pub fn srgb_to_hlg_scale() -> f64 {
    hlg::inv_oetf(HLG_MEDIA_WHITE_SIGNAL)
}

/// Converts an extended-range sRGB signal triple to a rec2100-HLG
/// signal triple.
///
/// Input components are nominally in [0, 1] but may lie outside it for
/// extended-range content; the sign-mirrored linearization keeps such
/// values meaningful, and out-of-gamut channels surviving the primaries
/// change are clamped to zero scene light at the encoding stage.
///
/// sRGB white `(1, 1, 1)` maps to `(0.75, 0.75, 0.75)` up to matrix
/// round-off.
///
/// # Example
///
/// ```rust
/// use hlg_display::extended_srgb_to_rec2100_hlg;
/// use hlg_math::Vec3;
///
/// let hlg_white = extended_srgb_to_rec2100_hlg(Vec3::ONE);
/// assert!((hlg_white.x - 0.75).abs() < 1e-9);
/// ```
pub fn extended_srgb_to_rec2100_hlg(signal: Vec3) -> Vec3 {
    // Undo the sRGB transfer function: linear-light rec709, possibly
    // outside [0, 1] for extended-range input
    let linear = signal.map(srgb::eotf_extended);

    // rec709 primaries -> rec2100 (= rec2020) primaries, through XYZ
    let lin2100 = XYZ_TO_REC2020 * (SRGB_TO_XYZ * linear);

    // Scale so diffuse white sits at the HLG media-white level
    let scaled = lin2100 * srgb_to_hlg_scale();

    // Encode; no black lift or system gamma at this nominal stage
    inv_eotf(scaled, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constant() {
        assert!((srgb_to_hlg_scale() - 0.26496256042100724).abs() < 1e-15);
        // Encoding the scale value recovers media white exactly
        assert!((hlg::oetf(srgb_to_hlg_scale()) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_white_maps_to_media_white() {
        let out = extended_srgb_to_rec2100_hlg(Vec3::ONE);
        assert!((out.x - 0.75).abs() < 1e-9, "out={:?}", out);
        assert!((out.y - 0.75).abs() < 1e-9);
        assert!((out.z - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_black_maps_to_black() {
        let out = extended_srgb_to_rec2100_hlg(Vec3::ZERO);
        assert!(out.x.abs() < 1e-12);
        assert!(out.y.abs() < 1e-12);
        assert!(out.z.abs() < 1e-12);
    }

    #[test]
    fn test_srgb_red_in_rec2020() {
        // sRGB red sits inside the rec2020 gamut: all channels positive,
        // dominated by red; reference values computed from the fixed
        // matrices and curve formulas
        let out = extended_srgb_to_rec2100_hlg(Vec3::new(1.0, 0.0, 0.0));
        assert!((out.x - 0.6558735699035119).abs() < 1e-9, "out={:?}", out);
        assert!((out.y - 0.23435994563816817).abs() < 1e-9);
        assert!((out.z - 0.11414619065055438).abs() < 1e-9);
    }

    #[test]
    fn test_gray_stays_gray() {
        // Achromatic input stays achromatic (D65 in both spaces)
        let out = extended_srgb_to_rec2100_hlg(Vec3::splat(0.5));
        assert!((out.x - out.y).abs() < 1e-9);
        assert!((out.y - out.z).abs() < 1e-9);
    }

    #[test]
    fn test_extended_input_exceeds_range() {
        // Brighter-than-white extended input encodes above 0.75
        let out = extended_srgb_to_rec2100_hlg(Vec3::splat(1.2));
        assert!(out.x > 0.75);
        // And monotonically: even brighter -> higher signal
        let brighter = extended_srgb_to_rec2100_hlg(Vec3::splat(1.5));
        assert!(brighter.x > out.x);
    }

    #[test]
    fn test_output_finite_for_out_of_gamut() {
        // Negative (out-of-gamut) extended input must not produce NaN
        let out = extended_srgb_to_rec2100_hlg(Vec3::new(-0.2, 0.5, 1.3));
        assert!(out.is_finite(), "out={:?}", out);
    }
}
