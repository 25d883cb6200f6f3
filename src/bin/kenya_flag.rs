use std::path::PathBuf;

use chart_sketch::render::{NullRenderer, OutputFormat, RenderFrame, write_frame};
use chart_sketch::turtle::render_kenyan_flag;
use chart_sketch::{ChartError, ChartResult, FlagConfig, load_json_config};

const USAGE: &str = "usage: kenya_flag [--config <path>] [--output <path>] [--json] [--show]";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
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
    let mut config = match &args.config {
        Some(path) => load_json_config::<FlagConfig>(path)?,
        None => FlagConfig::default(),
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::preferred()
    };
    config.output = match args.output {
        Some(output) => output,
        None => config.output_for(format),
    };
    config.validate()?;

    let (screen, pen) = render_kenyan_flag(NullRenderer::default(), &config)?;
    let frame = screen.frame(&pen);
    write_frame(&frame, &config.output, format)?;
    println!("wrote {}", config.output.display());

    if args.show {
        show(screen.title(), frame)?;
    }
    Ok(())
}

#[cfg(feature = "gtk4-adapter")]
fn show(title: &str, frame: RenderFrame) -> ChartResult<()> {
    chart_sketch::platform_gtk::present_frames(
        "rs.chart.sketch.flag",
        vec![(title.to_owned(), frame)],
    )
}

#[cfg(not(feature = "gtk4-adapter"))]
fn show(_title: &str, _frame: RenderFrame) -> ChartResult<()> {
    tracing::warn!("--show needs the `desktop` feature; the flag was only written to disk");
    Ok(())
}

fn parse_args() -> ChartResult<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" | "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| ChartError::Config(format!("missing value for {flag}")))?;
                if flag == "--config" {
                    parsed.config = Some(PathBuf::from(value));
                } else {
                    parsed.output = Some(PathBuf::from(value));
                }
            }
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
    Ok(parsed)
}
