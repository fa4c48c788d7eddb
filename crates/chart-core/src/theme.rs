// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming, the default categorical palette, and hex color helpers.

use skia_safe as skia;

/// Number of entries in the built-in categorical palette.
pub const PALETTE_LEN: usize = 10;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub category_label: skia::Color,
    pub muted_text: skia::Color,
    pub card_top: skia::Color,
    pub card_bottom: skia::Color,
    pub card_border: skia::Color,
    pub card_text: skia::Color,
    pub marker_border: skia::Color,
    pub heat_low: skia::Color,
    pub heat_high: skia::Color,
    pub placeholder_top: skia::Color,
    pub placeholder_bottom: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            text: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
            grid: skia::Color::from_argb(255, 0xe5, 0xe7, 0xeb),
            axis_line: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
            category_label: skia::Color::from_argb(255, 0x47, 0x55, 0x69),
            muted_text: skia::Color::from_argb(255, 0x64, 0x74, 0x8b),
            card_top: skia::Color::from_argb(242, 0xff, 0xff, 0xff),
            card_bottom: skia::Color::from_argb(242, 0xf8, 0xfa, 0xfc),
            card_border: skia::Color::from_argb(51, 0x94, 0xa3, 0xb8),
            card_text: skia::Color::from_argb(255, 0x1e, 0x29, 0x3b),
            marker_border: skia::Color::from_argb(204, 0xff, 0xff, 0xff),
            heat_low: skia::Color::from_argb(255, 0, 100, 255),
            heat_high: skia::Color::from_argb(255, 255, 255, 0),
            placeholder_top: skia::Color::from_argb(255, 0xf8, 0xfa, 0xfc),
            placeholder_bottom: skia::Color::from_argb(255, 0xe2, 0xe8, 0xf0),
            palette: default_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            text: skia::Color::from_argb(255, 235, 235, 245),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            category_label: skia::Color::from_argb(255, 200, 200, 210),
            muted_text: skia::Color::from_argb(255, 150, 150, 160),
            card_top: skia::Color::from_argb(242, 40, 40, 48),
            card_bottom: skia::Color::from_argb(242, 30, 30, 36),
            card_border: skia::Color::from_argb(64, 180, 180, 190),
            card_text: skia::Color::from_argb(255, 235, 235, 245),
            marker_border: skia::Color::from_argb(204, 18, 18, 20),
            heat_low: skia::Color::from_argb(255, 0, 100, 255),
            heat_high: skia::Color::from_argb(255, 255, 255, 0),
            placeholder_top: skia::Color::from_argb(255, 30, 30, 36),
            placeholder_bottom: skia::Color::from_argb(255, 18, 18, 20),
            palette: default_palette(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// The dashboard's categorical palette, cycled by record index.
pub fn default_palette() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_rgb(0x66, 0x7e, 0xea), // indigo
        skia::Color::from_rgb(0xf0, 0x93, 0xfb), // pink
        skia::Color::from_rgb(0x4f, 0xac, 0xfe), // sky
        skia::Color::from_rgb(0x43, 0xe9, 0x7b), // emerald
        skia::Color::from_rgb(0xfa, 0x70, 0x9a), // coral
        skia::Color::from_rgb(0xff, 0xec, 0xd2), // soft gold
        skia::Color::from_rgb(0xfc, 0xb6, 0x9f), // peach
        skia::Color::from_rgb(0xa8, 0xed, 0xea), // turquoise
        skia::Color::from_rgb(0xfe, 0xd6, 0xe3), // light pink
        skia::Color::from_rgb(0xff, 0xec, 0xd2), // beige
    ]
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(skia::Color::from_rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Shift each RGB channel by `delta` (saturating) and set alpha from `alpha` in 0..=1.
pub fn shade(color: skia::Color, delta: i16, alpha: f32) -> skia::Color {
    let ch = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, ch(color.r()), ch(color.g()), ch(color.b()))
}

/// Same color with alpha replaced.
pub fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
}

/// Linear interpolation between two colors, `t` clamped to 0..=1.
pub fn lerp_color(a: skia::Color, b: skia::Color, t: f64) -> skia::Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    skia::Color::from_argb(mix(a.a(), b.a()), mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
