use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use weekly_menu::sync;
use weekly_menu::{MenuError, Result};

const DEFAULT_INPUT: &str = "weekly_menu.xlsx";
const DEFAULT_OUTPUT: &str = "menu.json";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| MenuError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Sync(args)) => execute_sync(args),
        None => {
            let stdin = io::stdin();
            sync::run_session(&cli.input, &cli.output, stdin.lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}

fn execute_sync(args: SyncArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(MenuError::MissingInput(args.input));
    }

    match (args.from, args.to) {
        (DataFormat::Excel, DataFormat::Json) => sync::excel_to_json(&args.input, &args.output),
        (DataFormat::Json, DataFormat::Excel) => sync::json_to_excel(&args.input, &args.output),
        _ => Err(MenuError::UnsupportedConversion {
            from: args.from.to_string(),
            to: args.to.to_string(),
        }),
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Look up a meal in the weekly menu workbook and save the menu as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Menu workbook, one sheet per day.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where the JSON menu is written.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the menu between its workbook and JSON forms without prompting.
    Sync(SyncArgs),
}

#[derive(clap::Args)]
struct SyncArgs {
    /// Source representation.
    #[arg(long, value_enum)]
    from: DataFormat,

    /// Input file path.
    #[arg(long)]
    input: PathBuf,

    /// Target representation.
    #[arg(long, value_enum)]
    to: DataFormat,

    /// Output file path.
    #[arg(long)]
    output: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DataFormat {
    Excel,
    Json,
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Excel => write!(f, "xlsx"),
            DataFormat::Json => write!(f, "json"),
        }
    }
}
