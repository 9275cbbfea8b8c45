use std::path::{Path, PathBuf};
use stemma_core::ChartData;
use stemma_render::{ChartConfig, SvgRenderOptions, layout_chart, render_svg};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Data(stemma_core::Error),
    Render(stemma_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Data(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<stemma_core::Error> for CliError {
    fn from(value: stemma_core::Error) -> Self {
        Self::Data(value)
    }
}

impl From<stemma_render::Error> for CliError {
    fn from(value: stemma_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Layout,
    #[default]
    Render,
}

#[derive(Debug)]
struct Args {
    command: Command,
    persons: PathBuf,
    relations: PathBuf,
    settings: PathBuf,
    dynasties: Option<PathBuf>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    pretty: bool,
}

fn usage() -> &'static str {
    "stemma-cli: lay out and render genealogical charts (headless)

Usage:
  stemma-cli [render|layout] --persons <persons.json> --relations <relations.json> \\
             --settings <person-settings.json> [--dynasties <dynasty-settings.json>] \\
             [--config <chart-config.json>] [--pretty] [-o <file>]

Commands:
  render   write the chart as SVG (default)
  layout   write the computed layout model as JSON

Options:
  --persons    persons records (required)
  --relations  relation records (required)
  --settings   per-person position specs (required)
  --dynasties  dynasty line colors (optional)
  --config     chart config overrides as JSON (optional)
  --pretty     pretty-print layout JSON
  -o, --out    output file (defaults to stdout)
  -h, --help   show this help"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut command = Command::default();
    let mut persons = None;
    let mut relations = None;
    let mut settings = None;
    let mut dynasties = None;
    let mut config = None;
    let mut out = None;
    let mut pretty = false;

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => command = Command::Layout,
            "render" => command = Command::Render,
            "--pretty" => pretty = true,
            "--persons" => persons = Some(next_path(&mut it)?),
            "--relations" => relations = Some(next_path(&mut it)?),
            "--settings" => settings = Some(next_path(&mut it)?),
            "--dynasties" => dynasties = Some(next_path(&mut it)?),
            "--config" => config = Some(next_path(&mut it)?),
            "--out" | "-o" => out = Some(next_path(&mut it)?),
            _ => return Err(CliError::Usage(usage())),
        }
    }

    let (Some(persons), Some(relations), Some(settings)) = (persons, relations, settings) else {
        return Err(CliError::Usage(usage()));
    };
    Ok(Args {
        command,
        persons,
        relations,
        settings,
        dynasties,
        config,
        out,
        pretty,
    })
}

fn next_path<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<PathBuf, CliError> {
    let Some(value) = it.next() else {
        return Err(CliError::Usage(usage()));
    };
    Ok(PathBuf::from(value))
}

fn read(path: &Path) -> Result<String, CliError> {
    Ok(std::fs::read_to_string(path)?)
}

fn run(args: Args) -> Result<(), CliError> {
    let persons = read(&args.persons)?;
    let relations = read(&args.relations)?;
    let settings = read(&args.settings)?;
    let dynasties = match args.dynasties.as_deref() {
        Some(p) => Some(read(p)?),
        None => None,
    };

    let config = match args.config.as_deref() {
        Some(p) => serde_json::from_str::<ChartConfig>(&read(p)?)?,
        None => ChartConfig::default(),
    };

    let data = ChartData::from_json_strs(&persons, &relations, &settings, dynasties.as_deref())?;
    let layout = layout_chart(&data, &config)?;

    let output = match args.command {
        Command::Layout => {
            if args.pretty {
                let mut s = serde_json::to_string_pretty(&layout)?;
                s.push('\n');
                s
            } else {
                let mut s = serde_json::to_string(&layout)?;
                s.push('\n');
                s
            }
        }
        Command::Render => render_svg(&layout, &SvgRenderOptions::default()),
    };

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{output}"),
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
