//! Hotel commands
//!
//! Usage: reserva hotel <create|delete|list>

use clap::{Args, Subcommand};
use reserva_core::ReservationDesk;
use std::io::Write;

#[derive(Debug, Args)]
pub struct HotelArgs {
    #[command(subcommand)]
    pub command: HotelCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotelCommand {
    /// Add a hotel record
    Create {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
        location: String,
        /// Rooms available (not checked against reservations)
        #[arg(allow_negative_numbers = true)]
        rooms: i64,
    },
    /// Delete every hotel with the given id
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Print all hotels
    List,
}

pub fn execute(
    desk: &ReservationDesk,
    args: HotelArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        HotelCommand::Create {
            id,
            name,
            location,
            rooms,
        } => {
            desk.register_establishment(id, &name, &location, rooms)?;
            writeln!(out, "Hotel '{}' created successfully.", name)?;
        }
        HotelCommand::Delete { id } => {
            desk.remove_establishment(id)?;
            writeln!(out, "Hotel ID {} deleted.", id)?;
        }
        HotelCommand::List => print_directory(desk, out)?,
    }
    Ok(())
}

pub fn print_directory(
    desk: &ReservationDesk,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in desk.establishment_directory()? {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
