//! Text exports of generated palettes: CSS custom properties, style
//! dictionary tokens, and a Tailwind theme extension.

use serde_json::{json, Map, Value};
use tonal_core::color::OkLch;
use tonal_core::palette::ColorPalette;

/// `oklch(L C H)` with three decimals on L and C, one on H.
pub fn css_oklch(c: OkLch) -> String {
    format!("oklch({:.3} {:.3} {:.1})", c.l, c.c, c.h)
}

/// A `:root` block with a hex and an `oklch()` property per variant.
pub fn css_variables(palettes: &[ColorPalette]) -> String {
    let mut css = String::from(":root {\n");
    for palette in palettes {
        for variant in palette {
            let name = variant.name.to_lowercase();
            css.push_str(&format!("  --color-{name}: {};\n", variant.hex));
            css.push_str(&format!(
                "  --color-{name}-oklch: {};\n",
                css_oklch(variant.oklch)
            ));
        }
        css.push('\n');
    }
    css.push('}');
    css
}

/// Style-dictionary token tree: `color.<palette>.<step>`.
pub fn style_dictionary_tokens(palettes: &[ColorPalette]) -> Value {
    let mut colors = Map::new();
    for palette in palettes {
        let mut steps = Map::new();
        for (i, variant) in palette.iter().enumerate() {
            let contrast = &variant.contrast;
            steps.insert(
                ((i + 1) * 100).to_string(),
                json!({
                    "value": variant.hex,
                    "oklch": css_oklch(variant.oklch),
                    "contrast": {
                        "white": format!("{:.2}", contrast.white),
                        "black": format!("{:.2}", contrast.black),
                        "aa": contrast.any_aa(),
                        "aaa": contrast.any_aaa(),
                    },
                }),
            );
        }
        colors.insert(palette.name().to_string(), Value::Object(steps));
    }
    json!({ "color": colors })
}

/// A `tailwind.config.js` fragment extending the theme colors.
pub fn tailwind_config(palettes: &[ColorPalette]) -> String {
    let mut config =
        String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    for palette in palettes {
        config.push_str(&format!("        {}: {{\n", js_key(palette.name())));
        for (i, variant) in palette.iter().enumerate() {
            config.push_str(&format!("          {}: '{}',\n", (i + 1) * 100, variant.hex));
        }
        config.push_str("        },\n");
    }
    config.push_str("      }\n    }\n  }\n}");
    config
}

/// Quotes an object key unless it is a plain identifier.
fn js_key(name: &str) -> String {
    let plain = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
