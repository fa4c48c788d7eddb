// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshots, one per chart kind plus the placeholder, with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and skips without failing.

use std::path::{Path, PathBuf};

use chart_core::{render_to_png_bytes, BarDatum, ChartKind, ChartOptions, ChartRequest, ChartWidth, DataBag, Viewport};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(format!("{name}.png"))
}

fn write_or_compare(path: &Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn quarterly() -> DataBag {
    DataBag::new().with_bars(vec![
        BarDatum::new("Q1", 12.0),
        BarDatum::new("Q2", 30.0),
        BarDatum::new("Q3", 21.5),
        BarDatum::new("Q4", 8.0),
    ])
}

fn render(kind: ChartKind, data: DataBag) -> Vec<u8> {
    let req = ChartRequest::new(kind, data)
        .with_options(ChartOptions::default().with_title("Quarterly"))
        .with_size(ChartWidth::Pixels(480.0), 300.0);
    render_to_png_bytes(&req, &Viewport::default()).expect("render bytes")
}

#[test]
fn golden_every_kind() {
    for kind in ChartKind::ALL {
        let bytes = render(kind, quarterly());
        write_or_compare(&snapshot_path(kind.name()), &bytes);
    }
}

#[test]
fn golden_heatmap_grid() {
    let data = DataBag::new().with_matrix(vec![vec![0.0, 2.5, 5.0], vec![7.5, 10.0, 1.0]]);
    write_or_compare(&snapshot_path("heatmap_grid"), &render(ChartKind::Heatmap, data));
}

#[test]
fn golden_placeholder() {
    write_or_compare(&snapshot_path("placeholder"), &render(ChartKind::Bar, DataBag::new()));
}
