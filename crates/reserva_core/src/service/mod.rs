//! Use-case services over the collection stores.
//!
//! # Responsibility
//! - Compose the three independent stores behind one entry point.
//! - Keep the command surface decoupled from file layout.

pub mod reservation_desk;
