use herring::{DIAGRAM_PROBLEM_TITLE, ReportRecord, SUGGESTED_FILENAME};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const USAGE: &str = "\
Usage: herring <command> [options]

Commands:
  report       Generate the 8D report workbook (xlsx)
  diagram      Render only the Ishikawa diagram

Options:
  --in FILE        Read the report record (JSON) from FILE instead of stdin
  --out FILE       Write output to FILE (defaults: 8D_Report_with_Ishikawa.xlsx,
                   fishbone.svg, fishbone.png)
  --format FORMAT  Diagram output format: svg (default) or png
  -h, --help       Show this help
";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Herring(herring::Error),
    Render(herring::RasterError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Herring(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<herring::Error> for CliError {
    fn from(value: herring::Error) -> Self {
        Self::Herring(value)
    }
}

impl From<herring::RasterError> for CliError {
    fn from(value: herring::RasterError) -> Self {
        Self::Render(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Report,
    Diagram,
}

#[derive(Debug, Clone, Copy, Default)]
enum DiagramFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for DiagramFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(CliError::Usage("unknown --format (expected svg or png)")),
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: DiagramFormat,
}

fn parse_args(args: &[String]) -> Result<Args, CliError> {
    let mut it = args.iter();
    let command = match it.next().map(String::as_str) {
        Some("report") => Command::Report,
        Some("diagram") => Command::Diagram,
        Some("-h") | Some("--help") | None => return Err(CliError::Usage(USAGE)),
        Some(_) => return Err(CliError::Usage("unknown command (expected report or diagram)")),
    };

    let mut input = None;
    let mut output = None;
    let mut format = DiagramFormat::default();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--in" => {
                let value = it.next().ok_or(CliError::Usage("--in requires a path"))?;
                input = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = it.next().ok_or(CliError::Usage("--out requires a path"))?;
                output = Some(PathBuf::from(value));
            }
            "--format" => {
                let value = it.next().ok_or(CliError::Usage("--format requires a value"))?;
                format = value.parse()?;
            }
            "-h" | "--help" => return Err(CliError::Usage(USAGE)),
            _ => return Err(CliError::Usage("unknown option")),
        }
    }

    Ok(Args {
        command,
        input,
        output,
        format,
    })
}

fn read_record(input: Option<&Path>) -> Result<ReportRecord, CliError> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;
    let record = read_record(args.input.as_deref())?;

    match args.command {
        Command::Report => {
            let bytes = herring::generate_report(&record)?;
            let out = args
                .output
                .unwrap_or_else(|| PathBuf::from(SUGGESTED_FILENAME));
            std::fs::write(&out, bytes)?;
            eprintln!("wrote {}", out.display());
        }
        Command::Diagram => {
            match args.format {
                DiagramFormat::Svg => {
                    let layout =
                        herring::layout_fishbone(&record.cause_categories, DIAGRAM_PROBLEM_TITLE);
                    let svg = herring::render_fishbone_svg(&layout);
                    let out = args.output.unwrap_or_else(|| PathBuf::from("fishbone.svg"));
                    std::fs::write(&out, svg)?;
                    eprintln!("wrote {}", out.display());
                }
                DiagramFormat::Png => {
                    let png = herring::render_fishbone_png(
                        &record.cause_categories,
                        DIAGRAM_PROBLEM_TITLE,
                    )?;
                    let out = args.output.unwrap_or_else(|| PathBuf::from("fishbone.png"));
                    std::fs::write(&out, png)?;
                    eprintln!("wrote {}", out.display());
                }
            }
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
