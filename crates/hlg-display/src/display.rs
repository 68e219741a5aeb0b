//! Display model: validated viewing-environment parameters and the full
//! signal-to-display chain.
//!
//! [`HlgDisplay`] bundles the three luminance parameters a display
//! transform needs. The derived values β and γ are recomputed from the
//! environment on every call — different displays or viewing conditions
//! can never leak into one another through cached state.

use hlg_math::Vec3;
use hlg_primaries::REC2020_TO_XYZ;

use crate::eotf::{eotf, inv_eotf};
use crate::error::{DisplayError, DisplayResult};
use crate::gamma::{
    black_level_lift_unchecked, bright_gamma_unchecked, extended_gamma_unchecked,
};

/// A display and its viewing environment.
///
/// Construction validates the parameter domains once; every transform
/// method then derives β and γ fresh from the stored luminances.
///
/// # Example
///
/// ```rust
/// use hlg_display::HlgDisplay;
/// use hlg_math::Vec3;
///
/// let display = HlgDisplay::reference();
/// let rgb = display.signal_to_display(Vec3::splat(0.75));
/// assert!(rgb.max_element() <= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HlgDisplay {
    peak_luminance: f64,
    black_luminance: f64,
    ambient_luminance: f64,
}

impl HlgDisplay {
    /// Creates a display model from its luminance parameters.
    ///
    /// # Arguments
    ///
    /// * `peak_luminance` - nominal peak luminance Lw, cd/m2
    /// * `black_luminance` - black-level luminance Lb, cd/m2
    /// * `ambient_luminance` - viewing-environment luminance Lamb, cd/m2
    ///
    /// # Errors
    ///
    /// Rejects `peak_luminance <= 0`, `black_luminance < 0`,
    /// `ambient_luminance <= 0`, and `black_luminance >= peak_luminance`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hlg_display::HlgDisplay;
    ///
    /// let display = HlgDisplay::new(600.0, 0.1, 10.0).unwrap();
    /// assert!(HlgDisplay::new(0.0, 0.1, 10.0).is_err());
    /// ```
    pub fn new(
        peak_luminance: f64,
        black_luminance: f64,
        ambient_luminance: f64,
    ) -> DisplayResult<Self> {
        if peak_luminance <= 0.0 {
            return Err(DisplayError::InvalidPeakLuminance(peak_luminance));
        }
        if black_luminance < 0.0 {
            return Err(DisplayError::InvalidBlackLuminance(black_luminance));
        }
        if ambient_luminance <= 0.0 {
            return Err(DisplayError::InvalidAmbientLuminance(ambient_luminance));
        }
        if black_luminance >= peak_luminance {
            return Err(DisplayError::BlackAbovePeak {
                black: black_luminance,
                peak: peak_luminance,
            });
        }
        Ok(Self {
            peak_luminance,
            black_luminance,
            ambient_luminance,
        })
    }

    /// The reference display and environment: 1000 cd/m2 peak,
    /// 0.05 cd/m2 black (VESA DisplayHDR 1000 tier), 5 cd/m2 ambient
    /// (the BT.2390 reference surround). Its system gamma is exactly 1.2.
    pub fn reference() -> Self {
        Self {
            peak_luminance: 1000.0,
            black_luminance: 0.05,
            ambient_luminance: 5.0,
        }
    }

    /// Nominal peak luminance Lw, cd/m2.
    #[inline]
    pub fn peak_luminance(&self) -> f64 {
        self.peak_luminance
    }

    /// Black-level luminance Lb, cd/m2.
    #[inline]
    pub fn black_luminance(&self) -> f64 {
        self.black_luminance
    }

    /// Ambient luminance Lamb, cd/m2.
    #[inline]
    pub fn ambient_luminance(&self) -> f64 {
        self.ambient_luminance
    }

    /// System gamma γ for this display and environment.
    ///
    /// Extended-model reference gamma for the peak luminance, adjusted
    /// for ambient brightness with the best-fit model. Recomputed on
    /// every call.
    #[inline]
    pub fn system_gamma(&self) -> f64 {
        bright_gamma_unchecked(
            extended_gamma_unchecked(self.peak_luminance),
            self.ambient_luminance,
        )
    }

    /// Black-level lift β for this display.
    ///
    /// Uses [`system_gamma`](Self::system_gamma) as the lift exponent.
    /// Recomputed on every call.
    #[inline]
    pub fn black_lift(&self) -> f64 {
        black_level_lift_unchecked(
            self.system_gamma(),
            self.peak_luminance,
            self.black_luminance,
        )
    }

    /// Decodes an HLG signal triple to a display-ready linear triple.
    ///
    /// Runs the EOTF with this display's β and γ, then clamps to [0, 1].
    pub fn signal_to_display(&self, signal: Vec3) -> Vec3 {
        eotf(signal, self.black_lift(), self.system_gamma()).clamp01()
    }

    /// Encodes a display-linear triple back to an HLG signal triple.
    ///
    /// Inverse of the unclamped EOTF with this display's β and γ.
    pub fn display_to_signal(&self, rgb: Vec3) -> Vec3 {
        inv_eotf(rgb, self.black_lift(), self.system_gamma())
    }

    /// Decodes an HLG signal triple to display-referred CIE XYZ.
    ///
    /// The display-ready triple of
    /// [`signal_to_display`](Self::signal_to_display), expressed in XYZ
    /// through the rec2100 primaries matrix.
    pub fn signal_to_xyz(&self, signal: Vec3) -> Vec3 {
        REC2020_TO_XYZ * self.signal_to_display(signal)
    }
}

impl Default for HlgDisplay {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(HlgDisplay::new(1000.0, 0.05, 5.0).is_ok());
        assert_eq!(
            HlgDisplay::new(0.0, 0.05, 5.0),
            Err(DisplayError::InvalidPeakLuminance(0.0))
        );
        assert_eq!(
            HlgDisplay::new(1000.0, -0.05, 5.0),
            Err(DisplayError::InvalidBlackLuminance(-0.05))
        );
        assert_eq!(
            HlgDisplay::new(1000.0, 0.05, 0.0),
            Err(DisplayError::InvalidAmbientLuminance(0.0))
        );
        assert_eq!(
            HlgDisplay::new(100.0, 100.0, 5.0),
            Err(DisplayError::BlackAbovePeak {
                black: 100.0,
                peak: 100.0
            })
        );
    }

    #[test]
    fn test_reference_gamma() {
        // Reference peak and ambient give the nominal 1.2 exactly
        let display = HlgDisplay::reference();
        assert!((display.system_gamma() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_reference_black_lift() {
        let display = HlgDisplay::reference();
        // beta = sqrt(3 * (0.05/1000)^(1/1.2))
        assert!((display.black_lift() - 0.027955341107524276).abs() < 1e-12);
    }

    #[test]
    fn test_brighter_display_higher_gamma() {
        let bright = HlgDisplay::new(2000.0, 0.05, 5.0).unwrap();
        let dim = HlgDisplay::new(500.0, 0.05, 5.0).unwrap();
        assert!(bright.system_gamma() > 1.2);
        assert!(dim.system_gamma() < 1.2);
    }

    #[test]
    fn test_zero_black_no_lift() {
        let oled = HlgDisplay::new(1000.0, 0.0, 5.0).unwrap();
        assert_eq!(oled.black_lift(), 0.0);
    }

    #[test]
    fn test_signal_to_display_in_range() {
        let display = HlgDisplay::reference();
        for &v in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let rgb = display.signal_to_display(Vec3::splat(v));
            assert!(rgb.min_element() >= 0.0);
            assert!(rgb.max_element() <= 1.0);
        }
    }

    #[test]
    fn test_signal_display_roundtrip() {
        let display = HlgDisplay::reference();
        let signal = Vec3::new(0.2, 0.5, 0.8);
        let back = display.display_to_signal(display.signal_to_display(signal));
        assert!((back.x - signal.x).abs() < 1e-6, "back={:?}", back);
        assert!((back.y - signal.y).abs() < 1e-6);
        assert!((back.z - signal.z).abs() < 1e-6);
    }

    #[test]
    fn test_signal_to_xyz_white() {
        // Full-scale white signal lands on the D65 white point
        let display = HlgDisplay::new(1000.0, 0.0, 5.0).unwrap();
        let xyz = display.signal_to_xyz(Vec3::ONE);
        assert!((xyz.y - 1.0).abs() < 1e-6, "xyz={:?}", xyz);
        assert!((xyz.x - 0.9504559270516717).abs() < 1e-6);
        assert!((xyz.z - 1.0890577507598784).abs() < 1e-6);
    }

    #[test]
    fn test_derived_params_track_environment() {
        // Mutating nothing: two displays with different environments give
        // different derived values from the same code paths
        let a = HlgDisplay::new(1000.0, 0.05, 5.0).unwrap();
        let b = HlgDisplay::new(1000.0, 0.05, 50.0).unwrap();
        assert!(b.system_gamma() > a.system_gamma());
        assert!(a.black_lift() != b.black_lift());
    }
}
