use std::path::PathBuf;

use chart_sketch::chart::{
    Figure, ScatterPresentation, build_bar_line_figure, build_scatter_figures,
};
use chart_sketch::data::{
    WideTable, parse_records, preview_csv, preview_records, preview_wide, read_source,
};
use chart_sketch::render::{OutputFormat, frame_path, write_frame};
use chart_sketch::{ChartError, ChartResult, CocoaChartConfig, load_json_config};
use tracing::{info, warn};

const USAGE: &str = concat!(
    "usage: cocoa_charts [--config <path>] [--url <url> | --input <path>]\n",
    "                    [--output-dir <dir>] [--combined-scatter] [--json] [--show]",
);

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    url: Option<String>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    combined_scatter: bool,
    json: bool,
    show: bool,
}

fn main() {
    let _ = chart_sketch::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> ChartResult<()> {
    let args = parse_args()?;
    let config = resolve_config(&args)?;

    let text = read_source(&config.data_source(), config.fetch_timeout())?;
    println!("{}", preview_csv(&text, config.preview_rows)?);

    let records = parse_records(text.as_bytes())?;
    info!(rows = records.len(), "loaded records");
    println!("{}", preview_records(&records, config.preview_rows));

    let table = WideTable::pivot(&records);
    println!("{}", preview_wide(table.rows(), config.wide_preview_rows));

    let subset = config.filter.apply(&table);
    if subset.is_empty() {
        warn!(item = %config.filter.item, "no rows matched the filter");
    }

    let mut figures = build_scatter_figures(&subset, &config.scatter)?;
    figures.push(build_bar_line_figure(&subset, &config.bar_line)?);
    info!(figures = figures.len(), "built figures");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::preferred()
    };
    for figure in &figures {
        let path = frame_path(&config.output_dir, &figure.name, format);
        write_frame(&figure.frame, &path, format)?;
        println!("wrote {}", path.display());
    }

    if args.show {
        show(figures)?;
    }
    Ok(())
}

fn resolve_config(args: &CliArgs) -> ChartResult<CocoaChartConfig> {
    let mut config = match &args.config {
        Some(path) => load_json_config::<CocoaChartConfig>(path)?,
        None => CocoaChartConfig::default(),
    };
    if let Some(url) = &args.url {
        config.url = url.clone();
        config.input = None;
    }
    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if args.combined_scatter {
        config.scatter.presentation = ScatterPresentation::Combined;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "gtk4-adapter")]
fn show(figures: Vec<Figure>) -> ChartResult<()> {
    let frames = figures
        .into_iter()
        .map(|figure| (figure.title, figure.frame))
        .collect();
    chart_sketch::platform_gtk::present_frames("rs.chart.sketch.cocoa", frames)
}

#[cfg(not(feature = "gtk4-adapter"))]
fn show(_figures: Vec<Figure>) -> ChartResult<()> {
    warn!("--show needs the `desktop` feature; figures were only written to disk");
    Ok(())
}

fn parse_args() -> ChartResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(flag_value(&mut args, &flag)?)),
            "--url" => parsed.url = Some(flag_value(&mut args, &flag)?),
            "--input" => parsed.input = Some(PathBuf::from(flag_value(&mut args, &flag)?)),
            "--output-dir" => {
                parsed.output_dir = Some(PathBuf::from(flag_value(&mut args, &flag)?));
            }
            "--combined-scatter" => parsed.combined_scatter = true,
            "--json" => parsed.json = true,
            "--show" => parsed.show = true,
            "--help" | "-h" => return Err(ChartError::Config(USAGE.to_owned())),
            other => {
                return Err(ChartError::Config(format!(
                    "unknown argument `{other}`\n{USAGE}"
                )));
            }
        }
    }

    if parsed.url.is_some() && parsed.input.is_some() {
        return Err(ChartError::Config(format!(
            "--url and --input are mutually exclusive\n{USAGE}"
        )));
    }
    Ok(parsed)
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> ChartResult<String> {
    args.next()
        .ok_or_else(|| ChartError::Config(format!("missing value for {flag}")))
}
