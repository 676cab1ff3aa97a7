//! CSS custom-property export.
//!
//! Serializes every ramp of a palette into one `:root { … }` block of
//! `--<name>-<index>: hsl(…);` declarations, in palette order then
//! ramp order. A pure function of the generator output.

use crate::palette::Palette;
use crate::scale::ShadeRamp;

/// Sanitized export key for an entry name: alphanumerics kept,
/// everything else replaced by `-`, lowercased.
pub fn css_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}

/// The exportable design-token block for a whole palette.
pub fn css_block(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for seed in palette.entries() {
        let ramp = ShadeRamp::generate(seed);
        let name = css_name(&seed.name);
        for (i, shade) in ramp.shades().enumerate() {
            out.push_str(&format!("  --{}-{}: {};\n", name, i, shade.to_hsl()));
        }
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::easing::Shading;
    use crate::scale::SeedColor;

    #[test]
    fn block_shape() {
        let pal = Palette::default_set();
        let block = css_block(&pal);

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], ":root {");
        assert_eq!(*lines.last().unwrap(), "}");
        // 10 declarations per entry plus the wrapping braces
        assert_eq!(lines.len(), pal.len() * 10 + 2);
        for l in &lines[1..lines.len() - 1] {
            assert!(l.starts_with("  --"), "bad line {:?}", l);
            assert!(l.ends_with(';'), "bad line {:?}", l);
        }
    }

    #[test]
    fn declarations_follow_palette_then_ramp_order() {
        let pal = Palette::default_set();
        let block = css_block(&pal);
        let lines: Vec<&str> = block.lines().collect();

        assert!(lines[1].starts_with("  --gray-0: hsl("));
        assert!(lines[10].starts_with("  --gray-9: hsl("));
        assert!(lines[11].starts_with("  --yellow-0: hsl("));
        assert!(lines[60].starts_with("  --green-9: hsl("));
    }

    #[test]
    fn empty_palette_exports_empty_block() {
        let block = css_block(&Palette::new(Vec::new()));
        assert_eq!(block, ":root {\n}");
    }

    #[test]
    fn names_are_sanitized() {
        assert_eq!(css_name("Brand Blue"), "brand-blue");
        assert_eq!(css_name("gray"), "gray");
        assert_eq!(css_name("fg/muted"), "fg-muted");

        let pal = Palette::new(vec![SeedColor::new(
            "Brand Blue",
            Rgb(0x45, 0xa4, 0xf9),
            5,
            Shading::EaseInOut,
            0.9,
            0.85,
        )]);
        assert!(css_block(&pal).contains("--brand-blue-0"));
    }
}
