//! Customer commands
//!
//! Usage: reserva customer <create|list>

use clap::{Args, Subcommand};
use reserva_core::ReservationDesk;
use std::io::Write;

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Add a customer record
    Create {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
        email: String,
    },
    /// Print all customers
    List,
}

pub fn execute(
    desk: &ReservationDesk,
    args: CustomerArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CustomerCommand::Create { id, name, email } => {
            desk.register_patron(id, &name, &email)?;
            writeln!(out, "Customer '{}' added.", name)?;
        }
        CustomerCommand::List => {
            for patron in desk.patrons()? {
                writeln!(
                    out,
                    "ID: {}, Name: {}, Email: {}",
                    patron.id, patron.name, patron.contact_address
                )?;
            }
        }
    }
    Ok(())
}
