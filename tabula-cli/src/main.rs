mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Deserialize;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabula_lib::config::TableConfig;
use tabula_lib::error::ConfigError;
use tabula_lib::error::TableError;
use tabula_lib::model::Record;
use tabula_lib::options::TableOptions;
use tabula_lib::pagination::PagedData;
use tabula_lib::state::Action;

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Sort, select and page a JSON data set", long_about = None)]
struct Args {
    /// Data file: an array of records, or one page of a paged result
    #[arg(short, long)]
    data: PathBuf,

    /// Table config with columns and options (default: <config dir>/table.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Action to apply, in order, e.g. TOGGLE_SORT:due:desc or SELECT_ROW:3
    #[arg(short, long = "action", value_name = "ACTION")]
    actions: Vec<Action>,

    /// Print the derived view as JSON
    #[arg(long)]
    json: bool,

    /// Log file (default: <cache dir>/tabula.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Data(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("No config given and no default config directory")]
    NoConfig,
    #[error("Failed to initialize logger: {0}")]
    Logger(String),
}

impl CliError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A data file holds either plain records or a paged payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DataFile {
    Rows(Vec<Record>),
    Paged(PagedData),
}

impl DataFile {
    fn parse(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The records, filling in the page descriptor for manual pagination
    /// from a paged payload when the config has none.
    fn into_records(self, options: &mut TableOptions) -> Vec<Record> {
        match self {
            DataFile::Rows(rows) => rows,
            DataFile::Paged(paged) => {
                if options.manual_pagination && options.page.is_none() {
                    let size = options.per_page.unwrap_or(paged.results.len().max(1));
                    log::debug!("Using page descriptor from data file");
                    options.page = Some(paged.descriptor(size));
                }
                paged.into_records()
            }
        }
    }
}

fn init_logging(args: &Args) -> Result<(), CliError> {
    let path = args.log_file.clone().or_else(paths::log_file);
    let Some(path) = path else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;
    }
    let log_file = File::create(&path).map_err(|e| CliError::io(&path, e))?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), log_file).map_err(|e| CliError::Logger(e.to_string()))
}

fn run(args: Args) -> Result<String, CliError> {
    init_logging(&args)?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => paths::default_config().ok_or(CliError::NoConfig)?,
    };
    let mut config = TableConfig::load(&config_path)?;

    let text = fs::read_to_string(&args.data).map_err(|e| CliError::io(&args.data, e))?;
    let data = DataFile::parse(&text)?.into_records(&mut config.options);
    log::info!("Loaded {} records from {}", data.len(), args.data.display());

    let mut table = config.table(data)?;
    for action in args.actions {
        table.dispatch(action)?;
    }

    let events = table.drain_events();
    if args.json {
        Ok(render::json(&table, &events)?)
    } else {
        Ok(render::text(&table, &events))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
