//! The palette model.
//!
//! An ordered collection of named seed colors. Updates follow an
//! immutable-value discipline: every update builds a new palette and
//! leaves the previous one untouched, so anything still holding the
//! old value is unaffected.

use crate::color::Rgb;
use crate::easing::Shading;
use crate::error::ShadeError;
use crate::scale::SeedColor;

/// An ordered sequence of seed-color entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<SeedColor>,
}

/// A whole-field replacement for one palette entry.
///
/// This is the complete editable field set; the target index is part
/// of the seed definition, not of the edit surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedUpdate {
    Name(String),
    Color(Rgb),
    Shading(Shading),
    WhiteMix(f64),
    BlackMix(f64),
}

impl Palette {
    pub fn new(entries: Vec<SeedColor>) -> Self {
        Self { entries }
    }

    /// The built-in default set: one neutral plus five hues.
    ///
    /// An explicit factory, not process-global state.
    pub fn default_set() -> Self {
        let hue = |name: &str, color: Rgb| {
            SeedColor::new(name, color, 5, Shading::EaseInOut, 0.9, 0.85)
        };
        Self::new(vec![
            SeedColor::new("gray", Rgb(0x30, 0x2c, 0x2c), 7, Shading::EaseOut, 0.9, 0.85),
            hue("yellow", Rgb(0xff, 0xdc, 0x40)),
            hue("red", Rgb(0xe4, 0x59, 0x3e)),
            hue("teal", Rgb(0x18, 0xaa, 0x96)),
            hue("blue", Rgb(0x45, 0xa4, 0xf9)),
            hue("green", Rgb(0x79, 0xcb, 0x3a)),
        ])
    }

    /// The entries, in palette order.
    pub fn entries(&self) -> &[SeedColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new palette with one field of one entry replaced.
    ///
    /// `self` is never mutated. Fails with
    /// [`ShadeError::IndexOutOfRange`] for a nonexistent entry.
    pub fn update(&self, index: usize, update: SeedUpdate) -> Result<Palette, ShadeError> {
        if index >= self.entries.len() {
            return Err(ShadeError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let mut entries = self.entries.clone();
        let entry = &mut entries[index];
        match update {
            SeedUpdate::Name(name) => entry.name = name,
            SeedUpdate::Color(color) => entry.color = color,
            SeedUpdate::Shading(shading) => entry.shading = shading,
            SeedUpdate::WhiteMix(v) => entry.white_mix = v,
            SeedUpdate::BlackMix(v) => entry.black_mix = v,
        }
        Ok(Palette::new(entries))
    }
}
