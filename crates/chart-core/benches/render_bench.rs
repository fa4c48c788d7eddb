use chart_core::{BarDatum, Chart, ChartKind, ChartRequest, DataBag, Result, Viewport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_bag(n: usize) -> DataBag {
    let bars = (0..n)
        .map(|i| BarDatum::new(format!("C{i}"), (i as f64 * 0.37).sin().abs() * 100.0 + 1.0))
        .collect();
    DataBag::new().with_bars(bars)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("repaint");
    for &n in &[12usize, 200usize] {
        let bag = build_bag(n);
        for kind in ChartKind::ALL {
            group.bench_function(format!("{kind}_{n}"), |b| {
                let req = ChartRequest::new(kind, bag.clone());
                let mut chart = Chart::new();
                b.iter(|| -> Result<()> {
                    let outcome = chart.render(&req, &Viewport::default())?;
                    black_box(outcome);
                    Ok(())
                });
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("render_png_bytes");
    group.bench_function("bar_12", |b| {
        let req = ChartRequest::new(ChartKind::Bar, build_bag(12));
        let mut chart = Chart::new();
        b.iter(|| -> Result<()> {
            chart.render(&req, &Viewport::with_dpr(2.0))?;
            black_box(chart.png_bytes()?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
