use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use json2hjson::indent::Indent;
use json2hjson::RunError;

/// Convert JSON documents to the human-friendly Hjson format.
#[derive(Debug, Parser)]
#[command(name = "json2hjson", version, about)]
struct Cli {
    /// JSON files to convert to Hjson (written as sibling .hjson files)
    files: Vec<PathBuf>,

    /// Indent width in spaces; a tab is used when not given
    #[arg(short, long, value_name = "WIDTH")]
    indent: Option<usize>,

    /// Enable detailed logging on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let indent = Indent::from_width(cli.indent);
    match json2hjson::run(&cli.files, &indent) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::NoInput) => {
            let _ = Cli::command().print_help();
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("json2hjson: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
