use chart_core::{normalize, ChartKind, DataBag, Point};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn points(n: usize) -> DataBag {
    let pts = (0..n).map(|i| Point::new(i as f64, (i as f64 * 0.01).sin() * 10.0)).collect();
    DataBag::new().with_points(pts)
}

fn matrix(rows: usize, cols: usize) -> DataBag {
    let m = (0..rows)
        .map(|r| (0..cols).map(|c| ((r * cols + c) % 97) as f64).collect())
        .collect();
    DataBag::new().with_matrix(m)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &n in &[10_000usize, 100_000usize] {
        let bag = points(n);
        for kind in [ChartKind::Bar, ChartKind::Pie, ChartKind::Histogram, ChartKind::Heatmap] {
            group.bench_function(format!("points_{n}_to_{kind}"), |b| {
                b.iter(|| black_box(normalize(black_box(&bag), kind).len_of(kind.required_shape())))
            });
        }
    }
    let grid = matrix(300, 300);
    for kind in [ChartKind::Line, ChartKind::Scatter, ChartKind::Histogram] {
        group.bench_function(format!("matrix_300x300_to_{kind}"), |b| {
            b.iter(|| black_box(normalize(black_box(&grid), kind).len_of(kind.required_shape())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
