//! Ten-step tonal shade scales derived from seed colors.
//!
//! Give it a seed color and a few shaping parameters, get back an
//! ordered ramp of ten perceptually interpolated shades, light to
//! dark. Mixing happens in CIE LAB; the ramp splits at the seed's
//! target index into an eased head and a linear tail.
//!
//! ```
//! use shade_scale::{Palette, ShadeRamp, css_block};
//!
//! let palette = Palette::default_set();
//! let ramp = ShadeRamp::generate(&palette.entries()[2]);
//! assert_eq!(ramp.shades().count(), 10);
//!
//! let tokens = css_block(&palette);
//! assert!(tokens.starts_with(":root {"));
//! ```

mod color;
mod easing;
mod error;
mod export;
mod palette;
mod scale;

pub use color::*;
pub use easing::*;
pub use error::*;
pub use export::*;
pub use palette::*;
pub use scale::*;
