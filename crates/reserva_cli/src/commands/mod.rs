pub mod customer;
pub mod demo;
pub mod hotel;
pub mod reservation;
