// File: crates/chart-core/tests/render.rs
// Purpose: End-to-end repaint through Chart: outcomes, DPR scaling, output buffers, pointer forwarding.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{
    render_to_png_bytes, BarDatum, Chart, ChartClick, ChartError, ChartKind, ChartOptions, ChartRequest, ChartWidth,
    DataBag, HoveredElement, Point, PointerEvent, RenderOutcome, SurfaceBounds, Theme, Viewport,
};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn sample_bag() -> DataBag {
    DataBag::new().with_bars(vec![
        BarDatum::new("North", 120.0),
        BarDatum::new("South", 80.5),
        BarDatum::new("East", 42.0).with_color("#10b981"),
        BarDatum::new("West", 3.0).with_color("not-a-color"),
    ])
}

#[test]
fn every_kind_renders_png() {
    let opts = ChartOptions::default().with_title("Sales").with_axis_labels("Region", "Units");
    let mut chart = Chart::new();
    for kind in ChartKind::ALL {
        let req = ChartRequest::new(kind, sample_bag()).with_options(opts.clone());
        let outcome = chart.render(&req, &Viewport::default()).expect("render");
        assert_eq!(outcome, RenderOutcome::Drawn { records: 4 }, "{kind}");
        let png = chart.png_bytes().expect("png");
        assert!(png.starts_with(PNG_MAGIC), "{kind}: not a PNG");
        assert_eq!(chart.current_kind(), Some(kind));
    }
}

#[test]
fn empty_series_paints_placeholder() {
    let mut chart = Chart::new();
    let req = ChartRequest::new(ChartKind::Bar, DataBag::new().with_bars(Vec::new()));
    assert_eq!(chart.render(&req, &Viewport::default()).unwrap(), RenderOutcome::Placeholder);

    let req = ChartRequest::new(ChartKind::Heatmap, DataBag::new());
    assert_eq!(chart.render(&req, &Viewport::default()).unwrap(), RenderOutcome::Placeholder);
    assert!(chart.png_bytes().unwrap().starts_with(PNG_MAGIC));
}

#[test]
fn unusable_records_paint_no_valid_data() {
    let mut chart = Chart::new();
    let bag = DataBag::new().with_bars(vec![BarDatum::new("a", f64::NAN), BarDatum::new("b", f64::INFINITY)]);
    for kind in ChartKind::ALL {
        let outcome = chart.render(&ChartRequest::new(kind, bag.clone()), &Viewport::default()).unwrap();
        assert_eq!(outcome, RenderOutcome::NoValidData, "{kind}");
    }
}

#[test]
fn histogram_of_unusable_values_is_no_valid_data() {
    let mut chart = Chart::new();
    let points = DataBag::new().with_points(vec![Point::new(0.0, f64::NAN), Point::new(1.0, f64::INFINITY)]);
    let matrix = DataBag::new().with_matrix(vec![vec![f64::NAN]]);
    for bag in [points, matrix] {
        let outcome = chart.render(&ChartRequest::new(ChartKind::Histogram, bag), &Viewport::default()).unwrap();
        assert_eq!(outcome, RenderOutcome::NoValidData);
    }

    // An empty source still means there was nothing to show.
    let empty = DataBag::new().with_points(Vec::new());
    let outcome = chart.render(&ChartRequest::new(ChartKind::Histogram, empty), &Viewport::default()).unwrap();
    assert_eq!(outcome, RenderOutcome::Placeholder);
}

#[test]
fn pie_counts_only_positive_slices() {
    let bag = DataBag::new().with_bars(vec![BarDatum::new("a", -1.0), BarDatum::new("b", 0.0), BarDatum::new("c", 5.0)]);
    let outcome = Chart::new().render(&ChartRequest::new(ChartKind::Pie, bag), &Viewport::default()).unwrap();
    assert_eq!(outcome, RenderOutcome::Drawn { records: 1 });
}

#[test]
fn rgba_buffer_matches_dpr() {
    let mut chart = Chart::new();
    let req = ChartRequest::new(ChartKind::Line, sample_bag());

    chart.render(&req, &Viewport::default()).unwrap();
    let (px, w, h, stride) = chart.rgba8().unwrap();
    assert_eq!((w, h), (800, 400));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);
    let bg = Theme::light().background;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);

    chart.render(&req, &Viewport::with_dpr(2.0)).unwrap();
    let (px, w, h, _) = chart.rgba8().unwrap();
    assert_eq!((w, h), (1600, 800));
    assert_eq!(px.len(), 1600 * 800 * 4);
    let size = chart.size().unwrap();
    assert_eq!((size.logical_width, size.logical_height), (800.0, 400.0));
}

#[test]
fn dark_theme_clears_to_its_background() {
    let mut chart = Chart::new().with_theme(Theme::dark());
    chart.render(&ChartRequest::new(ChartKind::Scatter, sample_bag()), &Viewport::default()).unwrap();
    let (px, ..) = chart.rgba8().unwrap();
    let bg = Theme::dark().background;
    assert_eq!(&px[..3], &[bg.r(), bg.g(), bg.b()]);
}

#[test]
fn outputs_before_render_are_errors() {
    let mut chart = Chart::new();
    assert!(matches!(chart.png_bytes(), Err(ChartError::NotRendered)));
    assert!(matches!(chart.rgba8(), Err(ChartError::NotRendered)));
}

#[test]
fn one_shot_and_file_output() {
    let req = ChartRequest::new(ChartKind::Histogram, sample_bag()).with_size(ChartWidth::Pixels(320.0), 200.0);
    let bytes = render_to_png_bytes(&req, &Viewport::default()).unwrap();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));

    let out = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out/histogram.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    let mut chart = Chart::new();
    chart.render(&req, &Viewport::default()).unwrap();
    chart.render_to_png(&out).unwrap();
    assert!(std::fs::read(&out).unwrap().starts_with(PNG_MAGIC));
}

#[test]
fn json_request_with_percent_width_and_lenient_values() {
    let json = r#"{
        "type": "pie",
        "data": { "slices": [ { "label": "a", "value": null }, { "label": "b", "value": 3 }, { "label": "c", "value": "x" } ] },
        "options": { "title": "Share", "showLegend": false },
        "height": 300,
        "width": "50%"
    }"#;
    let req = ChartRequest::from_json(json).unwrap();
    assert_eq!(req.kind, ChartKind::Pie);
    assert_eq!(req.width, ChartWidth::Percent(50.0));
    assert!(!req.options.show_legend && req.options.show_grid);

    let viewport = Viewport { device_pixel_ratio: 1.0, container_width: Some(1000.0) };
    assert_eq!(req.logical_size(&viewport), (500.0, 300.0));

    let mut chart = Chart::new();
    assert_eq!(chart.render(&req, &viewport).unwrap(), RenderOutcome::Drawn { records: 1 });
    let (_, w, h, _) = chart.rgba8().unwrap();
    assert_eq!((w, h), (500, 300));
}

#[test]
fn malformed_labels_and_records_are_tolerated() {
    let json = r#"{
        "type": "column",
        "data": {
            "bars": [
                { "label": 2023, "value": 5 },
                { "label": null, "value": 3, "color": 7 },
                null,
                "oops",
                { "label": true, "value": "x" }
            ],
            "matrix": [[1, 2], null]
        }
    }"#;
    let req = ChartRequest::from_json(json).unwrap();
    let bars = req.data.bars.as_ref().unwrap();
    assert_eq!(bars.len(), 5);
    assert_eq!(bars[0], BarDatum::new("2023", 5.0));
    assert_eq!(bars[1], BarDatum::new("", 3.0));
    assert!(bars[2].label.is_empty() && bars[2].value.is_nan());
    assert!(bars[3].value.is_nan());
    assert_eq!(bars[4].label, "true");
    assert_eq!(req.data.matrix, Some(vec![vec![1.0, 2.0], vec![]]));

    let mut chart = Chart::new();
    assert_eq!(chart.render(&req, &Viewport::default()).unwrap(), RenderOutcome::Drawn { records: 2 });
}

#[test]
fn percent_width_without_responsive_uses_default() {
    let mut req = ChartRequest::new(ChartKind::Bar, sample_bag()).with_size(ChartWidth::Percent(50.0), 400.0);
    req.options.responsive = false;
    let viewport = Viewport { device_pixel_ratio: 1.0, container_width: Some(1000.0) };
    assert_eq!(req.logical_size(&viewport), (800.0, 400.0));
}

#[test]
fn malformed_width_is_a_request_error() {
    let err = ChartRequest::from_json(r#"{"kind":"bar","width":"wide"}"#).unwrap_err();
    assert!(matches!(err, ChartError::Request(_)));
    assert!("12px".parse::<ChartWidth>().is_ok());
    assert!("-5%".parse::<ChartWidth>().is_err());
}

#[test]
fn click_forwards_logical_position_and_original_data() {
    let seen: Rc<RefCell<Vec<ChartClick>>> = Rc::default();
    let bag = DataBag::new().with_points(vec![Point::new(0.0, 5.0), Point::new(1.0, 15.0)]);

    let mut chart = Chart::new();
    // No request yet: nothing to forward.
    let sink = Rc::clone(&seen);
    chart.on_click(move |c| sink.borrow_mut().push(c.clone()));
    assert!(chart.handle_pointer(PointerEvent::Down { x: 1.0, y: 1.0 }).is_none());

    chart.render(&ChartRequest::new(ChartKind::Bar, bag.clone()), &Viewport::with_dpr(2.0)).unwrap();
    chart.set_surface_bounds(SurfaceBounds::new(100.0, 50.0));
    let click = chart.handle_pointer(PointerEvent::Down { x: 150.0, y: 80.0 }).expect("forwarded");

    assert_eq!((click.x, click.y), (50.0, 30.0));
    assert_eq!(click.kind, ChartKind::Bar);
    // Data as supplied, not the derived bars.
    assert_eq!(click.data, bag);
    assert!(click.data.bars.is_none());
    assert_eq!(seen.borrow().len(), 1);

    chart.clear_click_handler();
    assert!(chart.handle_pointer(PointerEvent::Down { x: 150.0, y: 80.0 }).is_none());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn hover_state_tracks_pointer_and_tooltip() {
    let mut chart = Chart::new();
    chart.set_surface_bounds(SurfaceBounds::new(10.0, 10.0));
    assert!(!chart.hover().is_hovered());

    chart.handle_pointer(PointerEvent::Enter);
    chart.handle_pointer(PointerEvent::Move { x: 60.0, y: 110.0 });
    assert!(chart.hover().is_hovered());
    assert_eq!(chart.hover().pointer(), Some((50.0, 100.0)));
    assert!(chart.hover().tooltip().is_none());

    chart.set_hovered_element(Some(HoveredElement { x: 50.0, y: 100.0, label: "North: 120".into() }));
    let tip = chart.hover().tooltip().expect("tooltip");
    assert_eq!((tip.left, tip.top), (60.0, 70.0));
    assert_eq!(tip.label, "North: 120");

    chart.handle_pointer(PointerEvent::Leave);
    assert!(!chart.hover().is_hovered());
    assert!(chart.hover().pointer().is_none() && chart.hover().element().is_none());
}
