use reserva_core::{Booking, Establishment, Patron, ReservationDesk, StoreConfig};

#[test]
fn reference_scenario_round_trips_each_collection() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let desk = ReservationDesk::new(&StoreConfig::in_dir(dir.path()));

    desk.register_establishment(1, "Grand Hotel", "New York", 20)
        .expect("hotel registration should succeed");
    desk.register_patron(1, "John Doe", "john@example.com")
        .expect("customer registration should succeed");
    desk.book(1, 1, 1).expect("booking should succeed");

    assert_eq!(
        desk.establishments().expect("hotels should load"),
        vec![Establishment::new(1, "Grand Hotel", "New York", 20)]
    );
    assert_eq!(
        desk.patrons().expect("customers should load"),
        vec![Patron::new(1, "John Doe", "john@example.com")]
    );
    assert_eq!(desk.bookings().expect("reservations should load"), vec![Booking::new(1, 1, 1)]);
}

#[test]
fn removing_establishment_keeps_its_bookings() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let desk = ReservationDesk::new(&StoreConfig::in_dir(dir.path()));

    desk.register_establishment(3, "Resort", "Beach City", 15)
        .expect("hotel registration should succeed");
    desk.register_patron(3, "Charlie", "charlie@example.com")
        .expect("customer registration should succeed");
    desk.book(1, 3, 3).expect("booking should succeed");

    assert_eq!(desk.remove_establishment(3).expect("removal should succeed"), 1);

    assert!(desk.establishments().expect("hotels should load").is_empty());
    assert_eq!(desk.bookings().expect("reservations should load"), vec![Booking::new(1, 3, 3)]);
}

#[test]
fn removing_unknown_establishment_is_not_an_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let desk = ReservationDesk::new(&StoreConfig::in_dir(dir.path()));
    desk.register_establishment(1, "Grand Hotel", "New York", 20)
        .expect("hotel registration should succeed");

    assert_eq!(desk.remove_establishment(2).expect("removal should succeed"), 0);
    assert_eq!(desk.establishments().expect("hotels should load").len(), 1);
}

#[test]
fn directory_lists_establishments_in_file_order() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let desk = ReservationDesk::new(&StoreConfig::in_dir(dir.path()));

    desk.register_establishment(4, "Display Hotel", "Display City", 20)
        .expect("hotel registration should succeed");
    desk.register_establishment(5, "Annex", "Display City", 0)
        .expect("hotel registration should succeed");

    assert_eq!(
        desk.establishment_directory().expect("directory should render"),
        vec![
            "ID: 4, Name: Display Hotel",
            "Location: Display City, Rooms: 20",
            "ID: 5, Name: Annex",
            "Location: Display City, Rooms: 0",
        ]
    );
}

#[test]
fn directory_of_empty_collection_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let desk = ReservationDesk::new(&StoreConfig::in_dir(dir.path()));

    assert!(desk.establishment_directory().expect("directory should render").is_empty());
}
