// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV table (or a request JSON file) and renders each requested chart kind to a PNG.

mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{theme, BarDatum, Chart, ChartKind, ChartOptions, ChartRequest, ChartWidth, DataBag, RenderOutcome, Viewport};
use clap::Parser;
use tracing::{info, warn};

use crate::table::Table;

/// Render uploaded tabular data as PNG charts
#[derive(Parser, Debug)]
#[command(name = "tabula-demo")]
#[command(about = "Renders CSV data or a chart request to PNG files, one per chart kind")]
struct Args {
    /// CSV file with a header row; a built-in sample is used when omitted
    input: Option<PathBuf>,

    /// Chart request JSON file ({"type", "data", "options", "width", "height"})
    #[arg(long, conflicts_with = "input")]
    request: Option<PathBuf>,

    /// Chart kinds to render, comma separated (default: all, or the request's kind)
    #[arg(short, long, value_delimiter = ',')]
    kind: Vec<ChartKind>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Logical width in pixels, or a percentage such as 50%
    #[arg(long, default_value = "800")]
    width: ChartWidth,

    /// Logical height in pixels
    #[arg(long, default_value_t = 400.0)]
    height: f32,

    /// Device pixel ratio
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Container width percentages resolve against
    #[arg(long)]
    container_width: Option<f32>,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Print the built request as JSON and exit
    #[arg(long)]
    print_request: bool,

    /// List the available chart kinds and exit
    #[arg(long)]
    list_kinds: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    if args.list_kinds {
        for kind in ChartKind::ALL {
            println!("{:<10} {:<16} {}", kind.name(), kind.display_name(), kind.description());
        }
        return Ok(());
    }

    let (stem, base) = match (&args.request, &args.input) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let req = ChartRequest::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
            (file_stem(path), req)
        }
        (None, Some(path)) => {
            let table = Table::load(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(rows = table.rows.len(), columns = ?table.headers, "loaded table");
            (file_stem(path), request_from_args(&args, table.to_bag()))
        }
        (None, None) => {
            info!("no input given; using the built-in sample");
            ("sample".to_string(), request_from_args(&args, sample_bag()))
        }
    };

    if args.print_request {
        println!("{}", serde_json::to_string_pretty(&base)?);
        return Ok(());
    }

    let kinds = if !args.kind.is_empty() {
        args.kind.clone()
    } else if args.request.is_some() {
        vec![base.kind]
    } else {
        ChartKind::ALL.to_vec()
    };

    let viewport = Viewport { device_pixel_ratio: args.dpr, container_width: args.container_width };
    let mut chart = Chart::new().with_theme(theme::find(&args.theme));
    std::fs::create_dir_all(&args.out_dir).with_context(|| format!("creating {}", args.out_dir.display()))?;

    for kind in kinds {
        let req = ChartRequest { kind, ..base.clone() };
        let outcome = chart.render(&req, &viewport).with_context(|| format!("rendering {kind}"))?;
        match outcome {
            RenderOutcome::Drawn { records } => info!(%kind, records, "rendered"),
            RenderOutcome::NoValidData => warn!(%kind, "no valid data; wrote the empty-chart message"),
            RenderOutcome::Placeholder => warn!(%kind, "no data; wrote the placeholder"),
        }
        let out = args.out_dir.join(format!("chart_{stem}_{kind}.png"));
        chart.render_to_png(&out).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn request_from_args(args: &Args, data: DataBag) -> ChartRequest {
    let options = ChartOptions { title: args.title.clone(), ..ChartOptions::default() };
    ChartRequest::new(ChartKind::Bar, data)
        .with_options(options)
        .with_size(args.width, args.height)
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}

fn sample_bag() -> DataBag {
    DataBag::new().with_bars(vec![
        BarDatum::new("Jan", 42.0),
        BarDatum::new("Feb", 55.5),
        BarDatum::new("Mar", 31.0),
        BarDatum::new("Apr", 68.25),
        BarDatum::new("May", 74.0),
        BarDatum::new("Jun", 49.0),
    ])
}
