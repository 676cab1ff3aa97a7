//! The shade generator.
//!
//! Derives a ten-step tonal ramp from a single seed color. The ramp
//! splits at the seed's target index: the *head* runs from a
//! white-mixed light endpoint toward the seed, distributed by the
//! seed's shading function; the *tail* runs from the seed toward a
//! black-mixed dark endpoint, distributed linearly. All interpolation
//! happens in LAB.

use crate::color::{BLACK, Rgb, WHITE, contrast_ratio, mix, scale_point};
use crate::easing::Shading;
use log::debug;

/// Number of shades in a ramp. Fixed.
pub const SHADE_COUNT: usize = 10;

/// One palette entry: a named seed color plus the shaping parameters
/// of its ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedColor {
    /// Display/export label. Expected unique within a palette,
    /// not enforced.
    pub name: String,
    /// The seed itself.
    pub color: Rgb,
    /// Ramp position that approximates the seed, `0..=9`.
    pub target_index: u8,
    /// Distribution of the light-to-seed head.
    pub shading: Shading,
    /// Fraction of white mixed into the seed for the lightest shade.
    pub white_mix: f64,
    /// Fraction of black mixed into the seed for the darkest shade.
    pub black_mix: f64,
}

impl SeedColor {
    /// New seed. The target index is clamped to `0..=9`.
    pub fn new(
        name: impl Into<String>,
        color: Rgb,
        target_index: u8,
        shading: Shading,
        white_mix: f64,
        black_mix: f64,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            target_index: target_index.min(9),
            shading,
            white_mix,
            black_mix,
        }
    }
}

/// A derived ten-color ramp, ordered light (0) to dark (9).
///
/// Never stored, recomputed from the seed whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeRamp(pub [Rgb; SHADE_COUNT]);

impl ShadeRamp {
    /// Generates the ramp for a seed. Pure and deterministic.
    ///
    /// With head length `n = target_index + 1` and tail length
    /// `m = 10 - n`:
    /// - head `i in 0..n` samples the `light → seed` gradient at
    ///   `shading(i / n)`. The seed itself is the limit of this
    ///   gradient but never a sampled point.
    /// - tail `j in 1..=m` samples the `seed → dark` gradient at
    ///   `j / m`, linearly. `m == 0` skips the tail entirely.
    pub fn generate(seed: &SeedColor) -> Self {
        let n = usize::from(seed.target_index.min(9)) + 1;
        let m = SHADE_COUNT - n;

        let light = mix(seed.color, WHITE, seed.white_mix);
        debug!("ramp {}: light {} head {} tail {}", seed.name, light, n, m);

        let mut shades = [seed.color; SHADE_COUNT];
        for (i, shade) in shades.iter_mut().enumerate().take(n) {
            let t = seed.shading.apply(i as f64 / n as f64);
            *shade = scale_point((light, seed.color), t);
        }

        if m > 0 {
            let dark = mix(seed.color, BLACK, seed.black_mix);
            for j in 1..=m {
                shades[n + j - 1] = scale_point((seed.color, dark), j as f64 / m as f64);
            }
        }

        ShadeRamp(shades)
    }

    /// The shades in ramp order.
    pub fn shades(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.0.iter().copied()
    }

    /// Label color for shade `i`: whichever ramp endpoint has the
    /// higher contrast ratio against it.
    pub fn label_color(&self, i: usize) -> Rgb {
        let shade = self.0[i];
        let lightest = self.0[0];
        let darkest = self.0[SHADE_COUNT - 1];
        if contrast_ratio(shade, lightest) >= contrast_ratio(shade, darkest) {
            lightest
        } else {
            darkest
        }
    }
}
