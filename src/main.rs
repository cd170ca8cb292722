use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};

use bucketchart::projectors::{ChartKind, Projection};
use bucketchart::{App, ChartWriter, FileSource, ReaderSource, ResponseSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "bucketchart")]
#[command(about = "Project saved API analytics responses into chart series JSON")]
struct Args {
    /// Path to a saved analytics response, or "-" for stdin
    #[arg(short, long, default_value = "response.json")]
    file: String,

    /// Chart kind (line, area, bar, pie, doughnut, polar-area)
    #[arg(short, long)]
    chart: Option<ChartKind>,

    /// Settings file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write chart series to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Re-project whenever the file changes
    #[arg(short, long)]
    watch: bool,

    /// Poll interval in seconds for --watch
    #[arg(short, long)]
    refresh: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;

    let chart = args
        .chart
        .or(settings.chart)
        .context("No chart kind given; pass --chart or set BUCKETCHART_CHART")?;
    let pretty = args.pretty || settings.pretty;
    let refresh = Duration::from_secs(args.refresh.unwrap_or(settings.refresh_secs).max(1));

    let source: Box<dyn ResponseSource> = if args.file == "-" {
        if args.watch {
            bail!("--watch needs a file; stdin can only be read once");
        }
        Box::new(ReaderSource::stdin())
    } else {
        Box::new(FileSource::new(&args.file))
    };

    let mut app = App::new(source, Projection::new(settings.projection), chart);
    let writer = ChartWriter::new(args.output);

    if args.watch {
        watch(&mut app, &writer, pretty, refresh)
    } else {
        run_once(&mut app, &writer, pretty)
    }
}

/// Project a single response and exit.
fn run_once(app: &mut App, writer: &ChartWriter, pretty: bool) -> Result<()> {
    match app.reload()? {
        Some(series) => writer.write(&series, pretty),
        None => bail!("No response available from {}", app.source_description()),
    }
}

/// Poll the source forever, writing each new projection.
fn watch(app: &mut App, writer: &ChartWriter, pretty: bool, refresh: Duration) -> Result<()> {
    info!(
        source = app.source_description(),
        chart = %app.chart(),
        refresh_secs = refresh.as_secs(),
        "watching for changes"
    );

    loop {
        match app.reload() {
            Ok(Some(series)) => {
                if let Err(e) = writer.write(&series, pretty) {
                    error!("{:#}", e);
                }
            }
            Ok(None) => {}
            Err(e) => error!("{:#}", e),
        }
        std::thread::sleep(refresh);
    }
}
