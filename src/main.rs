//! Presentation Loader CLI
//!
//! Usage:
//!   presentation-loader [OPTIONS] <DIR>
//!
//! Options:
//!   -s, --screen <WxH>   Screen extent used for layout (default 1920x1080)
//!   -c, --config <FILE>  Loader configuration file (TOML format)
//!   --strict-names       Fail view scripts that reuse an element name
//!   -t, --tree           Print every view with its resolved geometry
//!   -h, --help           Print help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use presentation_loader::layout::DuplicatePolicy;
use presentation_loader::{load_catalog, LoaderConfig, ResourceKind, ScreenExtent};

#[derive(Parser)]
#[command(name = "presentation-loader")]
#[command(about = "Load and check presentation resource scripts")]
struct Cli {
    /// Resource directory to walk
    dir: PathBuf,

    /// Screen extent used for layout, e.g. 1280x720
    #[arg(short, long, value_parser = parse_screen)]
    screen: Option<ScreenExtent>,

    /// Loader configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail view scripts that reuse an element name
    #[arg(long)]
    strict_names: bool,

    /// Print every view with its resolved geometry
    #[arg(short, long)]
    tree: bool,
}

fn parse_screen(value: &str) -> Result<ScreenExtent, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width = width
        .parse()
        .map_err(|_| format!("invalid screen width '{}'", width))?;
    let height = height
        .parse()
        .map_err(|_| format!("invalid screen height '{}'", height))?;
    Ok(ScreenExtent::new(width, height))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match LoaderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => LoaderConfig::default(),
    };

    if let Some(screen) = cli.screen {
        config = match config.with_screen(screen) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }
    if cli.strict_names {
        config = config.with_duplicate_names(DuplicatePolicy::Reject);
    }

    let (catalog, report) = match load_catalog(&cli.dir, config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for kind in ResourceKind::ALL {
        println!("{:<9} {}", kind.label(), report.definitions(kind));
    }

    if cli.tree {
        print!("{}", catalog.render_views());
    }

    for failure in &report.failures {
        eprintln!("{}", failure.render());
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{} script(s) failed to load", report.failures.len());
        ExitCode::FAILURE
    }
}
