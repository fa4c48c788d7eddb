// File: crates/chart-core/tests/config.rs
// Purpose: Options parsing, config resolution, themes and color helpers.

use chart_core::primitives::format_value;
use chart_core::theme::{self, lerp_color, parse_hex_color};
use chart_core::{ChartConfig, ChartOptions, Theme};
use skia_safe::Color;

#[test]
fn options_default_flags_on() {
    let opts: ChartOptions = serde_json::from_str("{}").unwrap();
    assert!(opts.show_legend && opts.show_grid && opts.responsive);
    let opts: ChartOptions = serde_json::from_str(r#"{"xAxisLabel":"Month","showGrid":false}"#).unwrap();
    assert_eq!(opts.x_axis_label.as_deref(), Some("Month"));
    assert!(!opts.show_grid);
}

#[test]
fn palette_falls_back_and_skips_bad_colors() {
    let cfg = ChartConfig::resolve(&ChartOptions::default(), &Theme::light());
    assert_eq!(cfg.palette.len(), 10);

    let opts = ChartOptions::default().with_colors(["#ff0000", "bogus", "#0f0"]);
    let cfg = ChartConfig::resolve(&opts, &Theme::light());
    assert_eq!(cfg.palette, vec![Color::from_rgb(255, 0, 0), Color::from_rgb(0, 255, 0)]);
    assert_eq!(cfg.color(3), Color::from_rgb(0, 255, 0));
    assert_eq!(cfg.accent(), Color::from_rgb(0, 255, 0));

    let opts = ChartOptions::default().with_colors(["nope"]);
    assert_eq!(ChartConfig::resolve(&opts, &Theme::dark()).palette.len(), 10);
}

#[test]
fn blank_labels_are_dropped() {
    let opts = ChartOptions::default().with_title("  ").with_axis_labels("", "Units");
    let cfg = ChartConfig::resolve(&opts, &Theme::default());
    assert!(cfg.title.is_none() && cfg.x_axis_label.is_none());
    assert_eq!(cfg.y_axis_label.as_deref(), Some("Units"));
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("solarized").name, "light");
    assert_eq!(theme::presets().len(), 2);
}

#[test]
fn hex_colors_and_interpolation() {
    assert_eq!(parse_hex_color("#10b981"), Some(Color::from_rgb(0x10, 0xb9, 0x81)));
    assert_eq!(parse_hex_color("fff"), Some(Color::WHITE));
    assert_eq!(parse_hex_color("#00000080"), Some(Color::from_argb(0x80, 0, 0, 0)));
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#zzzzzz"), None);

    let t = Theme::light();
    assert_eq!(lerp_color(t.heat_low, t.heat_high, 0.0), t.heat_low);
    assert_eq!(lerp_color(t.heat_low, t.heat_high, 1.0), t.heat_high);
    assert_eq!(lerp_color(t.heat_low, t.heat_high, f64::NAN), t.heat_low);
}

#[test]
fn value_labels_group_thousands() {
    assert_eq!(format_value(1234.5), "1,234.5");
    assert_eq!(format_value(1_000_000.0), "1,000,000");
    assert_eq!(format_value(-42.125), "-42.125");
    assert_eq!(format_value(0.0004), "0");
    assert_eq!(format_value(999.9999), "1,000");
}
