// Copyright 2025 the Ecomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors of the views and resolution of category color tokens.

use ecomap_catalog::ColorToken;
use peniko::Color;

/// Placeholder image used when a project has no usable image.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.svg";

#[allow(
    clippy::cast_possible_truncation,
    reason = "truncation keeps the low byte of each channel"
)]
const fn rgb(hex: u32) -> Color {
    Color::from_rgba8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// Named card colors, at a shade that keeps white text readable.
const PALETTE: &[(&str, Color)] = &[
    ("slate", rgb(0x47_55_69)),
    ("gray", rgb(0x4b_55_63)),
    ("zinc", rgb(0x52_52_5b)),
    ("neutral", rgb(0x52_52_52)),
    ("stone", rgb(0x57_53_4e)),
    ("red", rgb(0xdc_26_26)),
    ("orange", rgb(0xea_58_0c)),
    ("amber", rgb(0xd9_77_06)),
    ("yellow", rgb(0xca_8a_04)),
    ("lime", rgb(0x65_a3_0d)),
    ("green", rgb(0x16_a3_4a)),
    ("emerald", rgb(0x05_96_69)),
    ("teal", rgb(0x0d_94_88)),
    ("cyan", rgb(0x08_91_b2)),
    ("sky", rgb(0x02_84_c7)),
    ("blue", rgb(0x25_63_eb)),
    ("indigo", rgb(0x4f_46_e5)),
    ("violet", rgb(0x7c_3a_ed)),
    ("purple", rgb(0x93_33_ea)),
    ("fuchsia", rgb(0xc0_26_d3)),
    ("pink", rgb(0xdb_27_77)),
    ("rose", rgb(0xe1_1d_48)),
];

/// Page colors and the token palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Index page background.
    pub page_background: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text.
    pub muted_text: Color,
    /// Error message text.
    pub error_text: Color,
    /// Share preview background.
    pub share_background: Color,
    /// Share panel fill.
    pub panel: Color,
    /// Share panel outline.
    pub panel_border: Color,
    /// Share panel title.
    pub panel_title: Color,
    /// Disc behind avatars.
    pub avatar_background: Color,
    /// Disc behind card preview icons.
    pub icon_backdrop: Color,
    /// Detail tile fill.
    pub tile: Color,
    /// Destructive toast fill.
    pub toast: Color,
    /// Card color for tokens that are not in the palette.
    pub fallback: Color,
    /// Image shown when a project image is missing or fails to load.
    pub placeholder: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page_background: rgb(0x11_18_27),
            text: rgb(0xff_ff_ff),
            muted_text: rgb(0x9c_a3_af),
            error_text: rgb(0xf8_71_71),
            share_background: rgb(0x0a_0f_1c),
            panel: rgb(0x11_18_27),
            panel_border: rgb(0x1d_4e_d8),
            panel_title: rgb(0x60_a5_fa),
            avatar_background: rgb(0x1f_29_37),
            icon_backdrop: rgb(0xff_ff_ff),
            tile: rgb(0x1f_29_37),
            toast: rgb(0xdc_26_26),
            fallback: rgb(0x4b_55_63),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl Theme {
    /// Resolve a category color token.
    ///
    /// Accepts a palette name (`"blue"`), a utility-class style name
    /// (`"bg-blue-500"`), or a hex color (`"#1d4ed8"`). Anything else resolves
    /// to [`Theme::fallback`].
    #[must_use]
    pub fn color_for(&self, token: &ColorToken) -> Color {
        resolve(token.as_str()).unwrap_or_else(|| {
            tracing::debug!(token = token.as_str(), "unknown color token");
            self.fallback
        })
    }
}

fn resolve(token: &str) -> Option<Color> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }
    let name = token.strip_prefix("bg-").unwrap_or(token);
    let name = match name.rsplit_once('-') {
        Some((base, shade)) if shade.chars().all(|c| c.is_ascii_digit()) => base,
        _ => name,
    };
    let name = name.to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(rgb(value)),
        3 => {
            let (r, g, b) = ((value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf);
            Some(rgb(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)))
        }
        _ => None,
    }
}
