//! Reserva CLI
//!
//! Command surface over the reservation collection stores.

use clap::{Parser, Subcommand};
use log::info;
use reserva_core::{init_logging, LogLevel, LoggingConfig, ReservationDesk, StoreConfig};
use std::io::Write;
use std::path::PathBuf;

mod commands;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "reserva")]
#[command(version, about = "Reserva - hotel, customer and reservation records", long_about = None)]
struct Cli {
    /// Directory holding hotels.json, customers.json and reservations.json
    #[arg(long, env = "RESERVA_DATA_DIR", default_value = ".", global = true)]
    data_dir: PathBuf,

    /// Absolute directory for rolling log files (logging is off when omitted)
    #[arg(long, env = "RESERVA_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hotel operations
    Hotel(commands::hotel::HotelArgs),
    /// Customer operations
    Customer(commands::customer::CustomerArgs),
    /// Reservation operations
    Reservation(commands::reservation::ReservationArgs),
    /// Run the sample hotel/customer/reservation flow
    Demo,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli, &mut std::io::stdout().lock());
    let code = exit_code(result, &mut std::io::stderr());
    std::process::exit(code);
}

fn run(cli: Cli, out: &mut dyn Write) -> CliResult {
    let stores = StoreConfig::in_dir(&cli.data_dir);

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let config = match cli.log_level.as_deref() {
            Some(level) => LoggingConfig::new(level, log_dir)?,
            None => LoggingConfig::with_level(LogLevel::for_build(), log_dir)?,
        };
        init_logging(&config, &stores)?;
    }

    std::fs::create_dir_all(&cli.data_dir)?;
    info!(
        "event=cli_start module=cli status=ok data_dir={}",
        cli.data_dir.display()
    );
    let desk = ReservationDesk::new(&stores);

    match cli.command {
        Commands::Hotel(args) => commands::hotel::execute(&desk, args, out),
        Commands::Customer(args) => commands::customer::execute(&desk, args, out),
        Commands::Reservation(args) => commands::reservation::execute(&desk, args, out),
        Commands::Demo => commands::demo::execute(&desk, out),
    }
}

/// Prints `Error: <message>` for failures; returns the process exit status.
fn exit_code(result: CliResult, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}
