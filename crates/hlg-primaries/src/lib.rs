//! # hlg-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation for the
//! HLG display pipeline.
//!
//! The OOTF applies system gamma to luminance alone, which requires
//! routing rec2100 RGB through CIE XYZ; the sRGB-to-HLG conversion path
//! crosses from rec709 primaries to rec2020 primaries the same way. This
//! crate provides both the fixed standard matrices and the derivation
//! from chromaticity coordinates.
//!
//! # What are Color Primaries?
//!
//! Color primaries define the gamut (range of colors) a color space can
//! represent. Each primary is specified as CIE xy chromaticity
//! coordinates.
//!
//! # Included Color Spaces
//!
//! | Color Space | Gamut Size | Primary Use |
//! |-------------|------------|-------------|
//! | sRGB / Rec.709 | Small | Web, HDTV |
//! | Rec.2020 / Rec.2100 | Large | UHDTV, HDR broadcast |
//!
//! # Usage
//!
//! ```rust
//! use hlg_primaries::{REC2020, rgb_to_xyz_matrix};
//! use hlg_math::Vec3;
//!
//! // Get the RGB to XYZ matrix for rec2020
//! let matrix = rgb_to_xyz_matrix(&REC2020);
//!
//! // Convert rec2020 red to XYZ
//! let rgb = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = matrix * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`hlg-math`] - Matrix operations
//!
//! # Used By
//!
//! - `hlg-display` - OOTF and cross-standard conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hlg_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white
/// point, all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use hlg_primaries::Primaries;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
///
/// The conventional-gamut source space of the cross-standard conversion.
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = SRGB;

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

/// Rec.2100 primaries (identical to Rec.2020).
///
/// BT.2100 HDR broadcast uses the BT.2020 gamut.
pub const REC2100: Primaries = REC2020;

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// This function implements the standard method for deriving the 3x3
/// matrix that converts RGB values to CIE XYZ, given the chromaticity
/// coordinates of the primaries and white point.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// # Example
///
/// ```rust
/// use hlg_primaries::{REC2020, rgb_to_xyz_matrix};
/// use hlg_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&REC2020);
///
/// // White (1,1,1) should map to the white point XYZ
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    // Convert primaries from xy to XYZ
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Build matrix from primaries as columns
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve for scaling factors: M * S = W
    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    // Scale each column by the corresponding factor
    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Computes a matrix to convert from one RGB color space to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`.
/// Both spaces used here share the D65 white point, so no chromatic
/// adaptation is involved.
///
/// # Example
///
/// ```rust
/// use hlg_primaries::{SRGB, REC2020, rgb_to_rgb_matrix};
///
/// let srgb_to_rec2020 = rgb_to_rgb_matrix(&SRGB, &REC2020);
/// ```
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    let src_to_xyz = rgb_to_xyz_matrix(src);
    let xyz_to_dst = xyz_to_rgb_matrix(dst);
    xyz_to_dst * src_to_xyz
}

// ============================================================================
// Fixed Standard Matrices
// ============================================================================
//
// The pipeline consumes these as compile-time constants; the derivation
// functions above exist for validation and for callers with custom
// primaries. Values follow CSS Color 4 (sRGB) and BT.2020 (rec2020),
// both D65.

/// Linear sRGB / rec709 to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
]);

/// XYZ (D65) to linear sRGB / rec709 matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2409699419045226, -1.537383177570094, -0.4986107602930034],
    [-0.9692436362808796, 1.8759675015077202, 0.04155505740717559],
    [0.05563007969699366, -0.20397695888897652, 1.0569715142428786],
]);

/// Linear rec2020 / rec2100 to XYZ (D65) matrix.
pub const REC2020_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.6369580483012914, 0.14461690358620832, 0.1688809751641721],
    [0.2627002120112671, 0.6779980715188708, 0.05930171646986196],
    [0.0, 0.028072693049087428, 1.060985057710791],
]);

/// XYZ (D65) to linear rec2020 / rec2100 matrix.
pub const XYZ_TO_REC2020: Mat3 = Mat3::from_rows([
    [1.716651187971268, -0.355670783776392, -0.253366281373660],
    [-0.666684351832489, 1.616481236634939, 0.0157685458139111],
    [0.017639857445311, -0.042770613257809, 0.942103121235474],
]);
