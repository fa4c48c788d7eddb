// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Font treatment for a run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    /// Tabular digits for values that should line up.
    Numeric,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, face: Face) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        match face {
            Face::Numeric => {
                ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
            }
            Face::Regular | Face::Bold => {
                ts.set_font_families(&["Segoe UI", "Roboto", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"]);
            }
        }
        if face == Face::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, face: Face) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, face);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, face: Face) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), face);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with `(x, y)` as the left end of the baseline.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with `(cx, y)` as the middle of the baseline.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, y - size * 0.8));
    }

    /// Draw centered on `(cx, cy)`, rotated 90 degrees counter-clockwise (vertical axis captions).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color, face: Face) {
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw_centered(canvas, text, 0.0, size * 0.4, size, color, face);
        canvas.restore();
    }
}
