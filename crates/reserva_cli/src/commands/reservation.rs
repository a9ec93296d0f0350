//! Reservation commands
//!
//! Usage: reserva reservation <create|list>
//!
//! Customer and hotel ids are recorded as given; they are not looked up.

use clap::{Args, Subcommand};
use reserva_core::ReservationDesk;
use std::io::Write;

#[derive(Debug, Args)]
pub struct ReservationArgs {
    #[command(subcommand)]
    pub command: ReservationCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    /// Add a reservation record
    Create {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        customer_id: i64,
        #[arg(allow_negative_numbers = true)]
        hotel_id: i64,
    },
    /// Print all reservations
    List,
}

pub fn execute(
    desk: &ReservationDesk,
    args: ReservationArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ReservationCommand::Create {
            id,
            customer_id,
            hotel_id,
        } => {
            desk.book(id, customer_id, hotel_id)?;
            writeln!(out, "Reservation ID {} created successfully.", id)?;
        }
        ReservationCommand::List => {
            for booking in desk.bookings()? {
                writeln!(
                    out,
                    "ID: {}, Customer: {}, Hotel: {}",
                    booking.id, booking.patron_ref, booking.establishment_ref
                )?;
            }
        }
    }
    Ok(())
}
