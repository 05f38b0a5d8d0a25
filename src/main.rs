use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::Level;

use imgtag::env::{EnvConfig, EnvError};
use imgtag::parsers::img::{image_sources, replace_image_source};
use imgtag::utils::url::classify_image_url;

const STDIN_PATH: &str = "-";

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error on '{target}': {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Env(#[from] EnvError),
}

#[derive(Parser, Debug)]
#[command(
    name = "imgtag",
    version,
    about = "Validate image URLs and rewrite <img> sources in HTML fragments"
)]
struct Cli {
    /// Suppress log output
    #[arg(short, long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify image references; exits with 1 if any is invalid
    Check {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Print the src of every <img> tag, one per line
    Extract {
        /// Input file, stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Replace every src="OLD" with src="NEW"
    Replace {
        old: String,
        new: String,
        /// Input file, stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Write result to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("imgtag error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, CliError> {
    if !cli.silent {
        init_logging(&EnvConfig::from_env()?);
    }

    match cli.command {
        Command::Check { urls } => {
            let mut all_valid = true;
            for url in &urls {
                match classify_image_url(url.as_str()) {
                    Some(kind) => println!("{}\t{}", kind.as_str(), url),
                    None => {
                        all_valid = false;
                        println!("invalid\t{}", url);
                    }
                }
            }
            Ok(all_valid)
        }
        Command::Extract { file } => {
            let html = read_input(file.as_ref())?;
            let mut stdout = io::stdout().lock();
            for src in image_sources(&html) {
                writeln!(stdout, "{}", src).map_err(|source| CliError::Io {
                    target: "stdout".to_string(),
                    source,
                })?;
            }
            Ok(true)
        }
        Command::Replace {
            old,
            new,
            file,
            output,
        } => {
            let html = read_input(file.as_ref())?;
            let result = replace_image_source(html.as_str(), old.as_str(), new.as_str());
            write_output(output.as_ref(), result.as_bytes())?;
            Ok(true)
        }
    }
}

fn init_logging(config: &EnvConfig) {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!config.no_color)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) if path.as_os_str() != STDIN_PATH => {
            fs::read_to_string(path).map_err(|source| CliError::Io {
                target: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    target: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, data).map_err(|source| CliError::Io {
            target: path.display().to_string(),
            source,
        }),
        None => io::stdout()
            .write_all(data)
            .map_err(|source| CliError::Io {
                target: "stdout".to_string(),
                source,
            }),
    }
}
