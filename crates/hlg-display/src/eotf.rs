//! Display-referred EOTF and its inverse.
//!
//! The BT.2390 HLG EOTF maps an HLG-encoded signal triple to display
//! linear light in two stages: a per-channel stage (black-level lift,
//! then the inverse OETF) followed by a whole-triple stage (system gamma
//! on luminance via the OOTF). The inverse EOTF is the strict algebraic
//! inversion, run in the opposite order.
//!
//! # Reference
//!
//! ITU-R BT.2390-10 section 6.3

use hlg_math::Vec3;
use hlg_transfer::hlg;

use crate::ootf::{apply_system_gamma, remove_system_gamma};

/// HLG EOTF: decodes an HLG signal triple to display-linear light.
///
/// Per channel: `value = (1 - β)·E' + β`, clamped to `max(0, value)`,
/// then the inverse OETF; the scene-linear triple then gets the system
/// gamma applied to its luminance.
///
/// Output is display-linear light, nominally in [0, 1]. No clamping is
/// applied beyond the `max(0, ·)` step — callers needing a strict
/// display range clamp afterwards (see
/// [`HlgDisplay::signal_to_display`](crate::HlgDisplay::signal_to_display)).
///
/// # Example
///
/// ```rust
/// use hlg_display::eotf;
/// use hlg_math::Vec3;
///
/// // No lift, unit gamma: reduces to the inverse OETF per channel
/// let display = eotf(Vec3::splat(0.5), 0.0, 1.0);
/// assert!((display.x - 1.0 / 12.0).abs() < 1e-12);
/// ```
#[inline]
pub fn eotf(signal: Vec3, beta: f64, gamma: f64) -> Vec3 {
    let scene = signal.map(|ep| hlg::inv_oetf(((1.0 - beta) * ep + beta).max(0.0)));
    apply_system_gamma(scene, gamma)
}

/// HLG inverse EOTF: encodes display-linear light back to an HLG signal
/// triple.
///
/// Strict algebraic inversion of [`eotf`]: remove system gamma
/// (`Y^(1/γ)` via XYZ), clamp each scene-linear channel to
/// `max(0, E)` (the OOTF can push out-of-gamut channels slightly
/// negative), apply the OETF per channel, then invert the black-lift
/// affine map: `E' = (E - β) / (1 - β)`.
///
/// # Preconditions
///
/// `beta < 1`. Any physical display satisfies this (β ≥ 1 would put
/// black at a third of peak); parameters validated by
/// [`HlgDisplay::new`](crate::HlgDisplay::new) cannot violate it.
///
/// # Example
///
/// ```rust
/// use hlg_display::{eotf, inv_eotf};
/// use hlg_math::Vec3;
///
/// let signal = Vec3::new(0.1, 0.5, 0.9);
/// let back = inv_eotf(eotf(signal, 0.0, 1.0), 0.0, 1.0);
/// assert!((back.y - 0.5).abs() < 1e-9);
/// ```
#[inline]
pub fn inv_eotf(display: Vec3, beta: f64, gamma: f64) -> Vec3 {
    let scene = remove_system_gamma(display, gamma);
    scene.map(|e| (hlg::oetf(e.max(0.0)) - beta) / (1.0 - beta))
}
