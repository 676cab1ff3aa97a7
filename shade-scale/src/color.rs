//! Color space adapter.
//!
//! Holds the `Rgb` value type and the conversions the shade generator
//! needs: sRGB ↔ CIE LAB (D65) for perceptual mixing, RGB → HSL for
//! display and CSS emission, and a WCAG contrast ratio.
//!
//! All mixing happens in LAB. Interpolating in plain RGB produces
//! muddy midtones; equal LAB distances are close to equal perceived
//! differences.

use crate::error::ShadeError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

impl Rgb {
    /// HSL extraction. Hue in `[0, 360)`, saturation and lightness
    /// in percent.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.0) / 255.0;
        let g = f64::from(self.1) / 255.0;
        let b = f64::from(self.2) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = if l > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let h = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h * 60.0, s)
        };

        Hsl {
            h: h.rem_euclid(360.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = ShadeError;

    /// Parses a 7-character `#rrggbb` string, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ShadeError::InvalidColorFormat(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
        Ok(Rgb(r, g, b))
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.0, c.1, c.2)
    }
}

/// HSL triple. Hue in degrees `[0, 360)`, saturation and lightness
/// in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Display for Hsl {
    /// CSS functional notation, 2 decimal digits per component.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({:.2} {:.2}% {:.2}%)", self.h, self.s, self.l)
    }
}

// ---------------------------------------------------------------------------
// CIE LAB internals
// ---------------------------------------------------------------------------

/// CIE LAB color, the internal representation for mixing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lab {
    pub(crate) l: f64,
    pub(crate) a: f64,
    pub(crate) b: f64,
}

/// D65 reference white for the XYZ → LAB transform.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light (0.0–1.0) to sRGB (0–255), clamped.
fn linear_to_srgb(c: f64) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round() as u8
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > 0.206896 {
        t * t * t
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

pub(crate) fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);

    // sRGB → XYZ (D65), standard matrix
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub(crate) fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * lab_f_inv(fy);
    let z = ZN * lab_f_inv(fz);

    // XYZ → linear RGB (D65)
    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Rgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
}

pub(crate) fn lerp_lab(t: f64, a: &Lab, b: &Lab) -> Lab {
    Lab {
        l: a.l + t * (b.l - a.l),
        a: a.a + t * (b.a - a.a),
        b: a.b + t * (b.b - a.b),
    }
}

// ---------------------------------------------------------------------------
// Mixing
// ---------------------------------------------------------------------------

/// Mixes two colors in LAB space.
///
/// `ratio == 0` yields `a` and `ratio == 1` yields `b` bit-exactly;
/// these short-circuit before any conversion so the endpoints survive
/// the LAB round-trip untouched. Ratios outside `[0, 1]` are clamped.
pub fn mix(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    if ratio == 0.0 {
        return a;
    }
    if ratio == 1.0 {
        return b;
    }
    lab_to_rgb(lerp_lab(ratio, &rgb_to_lab(a), &rgb_to_lab(b)))
}

/// Evaluates the two-stop LAB gradient `stops.0 → stops.1` at `t`.
///
/// Same operation as [`mix`], named for the many-samples-one-gradient
/// use in the ramp algorithm.
pub fn scale_point(stops: (Rgb, Rgb), t: f64) -> Rgb {
    mix(stops.0, stops.1, t)
}

// ---------------------------------------------------------------------------
// Contrast
// ---------------------------------------------------------------------------

/// WCAG relative luminance of a color.
fn relative_luminance(c: Rgb) -> f64 {
    0.2126 * srgb_to_linear(c.0) + 0.7152 * srgb_to_linear(c.1) + 0.0722 * srgb_to_linear(c.2)
}

/// WCAG contrast ratio of two colors, `1.0..=21.0`. Symmetric.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_roundtrip(rgb: Rgb, tolerance: i16) {
        let back = lab_to_rgb(rgb_to_lab(rgb));
        let dr = (i16::from(rgb.0) - i16::from(back.0)).abs();
        let dg = (i16::from(rgb.1) - i16::from(back.1)).abs();
        let db = (i16::from(rgb.2) - i16::from(back.2)).abs();
        assert!(
            dr <= tolerance && dg <= tolerance && db <= tolerance,
            "round-trip failed: {} → {} (delta {}, {}, {})",
            rgb,
            back,
            dr,
            dg,
            db
        );
    }

    #[test]
    fn roundtrip_extremes() {
        assert_roundtrip(BLACK, 1);
        assert_roundtrip(WHITE, 1);
        assert_roundtrip(Rgb(255, 0, 0), 1);
        assert_roundtrip(Rgb(0, 255, 0), 1);
        assert_roundtrip(Rgb(0, 0, 255), 1);
        assert_roundtrip(Rgb(128, 128, 128), 1);
    }

    #[test]
    fn roundtrip_seed_colors() {
        assert_roundtrip(Rgb(0x30, 0x2c, 0x2c), 1);
        assert_roundtrip(Rgb(0xe4, 0x59, 0x3e), 1);
        assert_roundtrip(Rgb(0x18, 0xaa, 0x96), 1);
    }

    #[test]
    fn lab_black_is_zero_lightness() {
        let lab = rgb_to_lab(BLACK);
        assert!(lab.l.abs() < 1.0, "black L* should be ~0, got {}", lab.l);
    }

    #[test]
    fn lab_white_is_full_lightness() {
        let lab = rgb_to_lab(WHITE);
        assert!(
            (lab.l - 100.0).abs() < 1.0,
            "white L* should be ~100, got {}",
            lab.l
        );
    }

    #[test]
    fn lab_red_has_positive_a() {
        let lab = rgb_to_lab(Rgb(255, 0, 0));
        assert!(lab.a > 50.0, "red a* should be large, got {}", lab.a);
    }

    #[test]
    fn mix_endpoints_are_exact() {
        let a = Rgb(0xe4, 0x59, 0x3e);
        let b = Rgb(0x18, 0xaa, 0x96);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }

    #[test]
    fn mix_clamps_degenerate_ratios() {
        let a = Rgb(0xe4, 0x59, 0x3e);
        let b = WHITE;
        assert_eq!(mix(a, b, -0.5), a);
        assert_eq!(mix(a, b, 1.5), b);
        assert_eq!(mix(a, b, f64::NAN), a);
    }

    #[test]
    fn mix_midpoint_lies_between() {
        let mid = mix(BLACK, WHITE, 0.5);
        let l = rgb_to_lab(mid).l;
        assert!(l > 40.0 && l < 60.0, "midpoint L* off: {}", l);
    }

    #[test]
    fn scale_point_matches_mix() {
        let a = Rgb(0x45, 0xa4, 0xf9);
        let b = BLACK;
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_eq!(scale_point((a, b), t), mix(a, b, t));
        }
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#302c2c".parse::<Rgb>(), Ok(Rgb(0x30, 0x2c, 0x2c)));
        assert_eq!("#FFDC40".parse::<Rgb>(), Ok(Rgb(0xff, 0xdc, 0x40)));
    }

    #[test]
    fn parse_hex_rejects_malformed() {
        for s in ["302c2c", "#302c2", "#302c2cc", "#30 c2c", "#gg0000", ""] {
            assert_eq!(
                s.parse::<Rgb>(),
                Err(ShadeError::InvalidColorFormat(s.to_string())),
                "should reject {:?}",
                s
            );
        }
    }

    #[test]
    fn hex_display_roundtrip() {
        let c = Rgb(0xe4, 0x59, 0x3e);
        assert_eq!(c.to_string(), "#e4593e");
        assert_eq!(c.to_string().parse::<Rgb>(), Ok(c));
    }

    #[test]
    fn hsl_primaries() {
        let red = Rgb(255, 0, 0).to_hsl();
        assert!((red.h - 0.0).abs() < 1e-9);
        assert!((red.s - 100.0).abs() < 1e-9);
        assert!((red.l - 50.0).abs() < 1e-9);

        let green = Rgb(0, 255, 0).to_hsl();
        assert!((green.h - 120.0).abs() < 1e-9);

        let blue = Rgb(0, 0, 255).to_hsl();
        assert!((blue.h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn hsl_achromatic() {
        let gray = Rgb(128, 128, 128).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.2).abs() < 0.1);
    }

    #[test]
    fn hsl_hue_stays_below_360() {
        // a reddish color on the magenta side of the wheel
        let h = Rgb(255, 0, 1).to_hsl().h;
        assert!((0.0..360.0).contains(&h), "hue out of range: {}", h);
    }

    #[test]
    fn hsl_css_formatting() {
        let hsl = Hsl {
            h: 9.318,
            s: 75.2286,
            l: 56.8617,
        };
        assert_eq!(hsl.to_string(), "hsl(9.32 75.23% 56.86%)");
    }

    #[test]
    fn contrast_black_white_is_21() {
        let r = contrast_ratio(BLACK, WHITE);
        assert!((r - 21.0).abs() < 1e-9, "got {}", r);
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb(0x18, 0xaa, 0x96);
        let b = Rgb(0x30, 0x2c, 0x2c);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_self_is_one() {
        let c = Rgb(0x79, 0xcb, 0x3a);
        assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }
}
