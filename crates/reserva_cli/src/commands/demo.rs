//! Sample flow: one hotel, one customer, one reservation, then the directory.

use reserva_core::ReservationDesk;
use std::io::Write;

pub fn execute(
    desk: &ReservationDesk,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    desk.register_establishment(1, "Grand Hotel", "New York", 20)?;
    writeln!(out, "Hotel 'Grand Hotel' created successfully.")?;
    desk.register_patron(1, "John Doe", "john@example.com")?;
    writeln!(out, "Customer 'John Doe' added.")?;
    desk.book(1, 1, 1)?;
    writeln!(out, "Reservation ID 1 created successfully.")?;

    super::hotel::print_directory(desk, out)
}
