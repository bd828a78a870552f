mod config;
mod error;
mod logger;
mod menu;

use clap::{Parser, Subcommand};
use config::Settings;
use error::AppError;
use menu::Menu;
use ordiolib::{error_log::ErrorLog, OrderStore, SaveOutcome};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ordio", version, about = "Order management over JSON, XML and CSV files")]
struct Cli {
    /// TOML settings file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Order file loaded before the menu starts
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// File failures are appended to
    #[arg(long = "error-log")]
    error_log: Option<PathBuf>,

    /// Debug traces on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an order file; formats follow the file extensions
    Convert {
        /// Input file (.json, .xml, .csv)
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Output file (.json, .xml, .csv)
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.file, cli.error_log);

    logger::init_cli_logger(&settings.log_level, cli.verbose);
    tracing::debug!(?settings, "starting ordio");

    let error_log = ErrorLog::new(&settings.error_log);

    match cli.command {
        Some(Command::Convert { input, output }) => {
            convert(&input, &output).inspect_err(|e| error_log.record(e))
        }
        None => {
            let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), error_log);
            if let Some(path) = &settings.data_file {
                menu.preload(path)?;
            }
            menu.run()
        }
    }
}

fn convert(input: &Path, output: &Path) -> Result<(), AppError> {
    let mut store = OrderStore::new();
    let count = store.load(input)?;
    tracing::info!(input = %input.display(), count, "orders read");

    match store.save(output)? {
        SaveOutcome::Saved(n) => {
            println!("Converted {n} orders: {} -> {}", input.display(), output.display())
        }
        SaveOutcome::NothingToSave => {
            println!("{} holds no orders, nothing written", input.display())
        }
    }
    Ok(())
}
