use chrono::NaiveDate;
use log::{Level, LevelFilter, Metadata, Record};
use rentdesk_core::{
    AuditError, AuditSink, Car, DeskError, FileAuditSink, MemoryAuditSink, RentOutcome, RentalDesk,
    ReturnOutcome,
};
use std::sync::Mutex;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_desk() -> RentalDesk<MemoryAuditSink> {
    let mut desk = RentalDesk::new(MemoryAuditSink::new());
    desk.add_car(Car::new("C001", "Toyota", "Camry", 60.0))
        .unwrap();
    desk.add_car(Car::new("C002", "Honda", "Accord", 70.0))
        .unwrap();
    desk.add_car(Car::new("C003", "Mahindra", "Thar", 150.0))
        .unwrap();
    desk
}

#[test]
fn rent_and_return_complete_cycle() {
    let mut desk = seeded_desk();

    let outcome = desk
        .rent_car("C001", "Sam", date(2024, 1, 1))
        .unwrap();
    let RentOutcome::Rented(customer) = outcome else {
        panic!("rent of an available car should succeed");
    };
    assert_eq!(customer.id, "CUS1");
    assert_eq!(customer.name, "Sam");
    assert!(!desk.find_car("C001").unwrap().is_available());
    assert_eq!(desk.open_rental_count(), 1);

    let outcome = desk.return_car("C001", date(2024, 1, 5)).unwrap();
    let ReturnOutcome::Returned(summary) = outcome else {
        panic!("return of a rented car should succeed");
    };
    assert_eq!(summary.rental_days, 4);
    assert_eq!(summary.total_price, 240.0);
    assert_eq!(summary.customer.id, "CUS1");
    assert!(desk.find_car("C001").unwrap().is_available());
    assert_eq!(desk.open_rental_count(), 0);

    assert_eq!(
        desk.audit_sink().lines(),
        [
            "RENTED - Sam rented Toyota Camry on 01-01-2024",
            "RETURNED - Sam returned Toyota Camry on 05-01-2024 after 4 days",
        ]
    );
}

#[test]
fn renting_an_unavailable_car_changes_nothing() {
    let mut desk = seeded_desk();
    desk.rent_car("C001", "Sam", date(2024, 1, 1)).unwrap();

    let outcome = desk
        .rent_car("C001", "Alex", date(2024, 1, 2))
        .unwrap();
    assert_eq!(outcome, RentOutcome::Unavailable);

    assert_eq!(desk.customer_count(), 1);
    assert_eq!(desk.open_rental_count(), 1);
    assert_eq!(desk.open_rental("C001").unwrap().customer.name, "Sam");
    assert_eq!(desk.audit_sink().lines().len(), 1);
}

#[test]
fn returning_a_car_without_open_rental_reports_not_rented() {
    let mut desk = seeded_desk();

    let first = desk.return_car("C001", date(2024, 1, 5)).unwrap();
    assert_eq!(first, ReturnOutcome::NotRented);
    let second = desk.return_car("C001", date(2024, 1, 6)).unwrap();
    assert_eq!(second, ReturnOutcome::NotRented);

    assert!(desk.find_car("C001").unwrap().is_available());
    assert!(desk.audit_sink().lines().is_empty());
}

#[test]
fn unknown_car_id_is_a_caller_error() {
    let mut desk = seeded_desk();

    let rent = desk.rent_car("C999", "Sam", date(2024, 1, 1));
    assert!(matches!(rent, Err(DeskError::UnknownCar(id)) if id == "C999"));
    let ret = desk.return_car("C999", date(2024, 1, 5));
    assert!(matches!(ret, Err(DeskError::UnknownCar(id)) if id == "C999"));

    assert_eq!(desk.customer_count(), 0);
    assert!(desk.audit_sink().lines().is_empty());
}

#[test]
fn listings_track_rent_and_return() {
    let mut desk = seeded_desk();
    desk.rent_car("C002", "Sam", date(2024, 1, 1)).unwrap();

    let available: Vec<&str> = desk
        .available_cars()
        .iter()
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(available, vec!["C001", "C003"]);
    let unavailable: Vec<&str> = desk
        .unavailable_cars()
        .iter()
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(unavailable, vec!["C002"]);

    desk.return_car("C002", date(2024, 1, 2)).unwrap();
    assert_eq!(desk.available_cars().len(), 3);
    assert!(desk.unavailable_cars().is_empty());
}

#[test]
fn customer_ids_stay_sequential_across_rentals() {
    let mut desk = seeded_desk();

    let RentOutcome::Rented(first) = desk.rent_car("C001", "Sam", date(2024, 1, 1)).unwrap()
    else {
        panic!("rent of an available car should succeed");
    };
    let RentOutcome::Rented(second) = desk.rent_car("C002", "Sam", date(2024, 1, 2)).unwrap()
    else {
        panic!("rent of an available car should succeed");
    };

    assert_eq!(first.id, "CUS1");
    assert_eq!(second.id, "CUS2");
}

struct FailingSink;

impl AuditSink for FailingSink {
    fn append(&mut self, _line: &str) -> Result<(), AuditError> {
        Err(AuditError::Io(std::io::Error::other("sink down")))
    }
}

struct CapturingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut lines = self.lines.lock().unwrap();
        lines.push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURED_DIAGNOSTICS: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

fn captured_warn_lines() -> Vec<String> {
    CAPTURED_DIAGNOSTICS
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, line)| line.clone())
        .collect()
}

#[test]
fn audit_failures_warn_without_rolling_back() {
    let _ =
        log::set_logger(&CAPTURED_DIAGNOSTICS).map(|()| log::set_max_level(LevelFilter::Info));

    let mut desk = RentalDesk::new(FailingSink);
    desk.add_car(Car::new("C001", "Toyota", "Camry", 60.0))
        .unwrap();

    let rent = desk.rent_car("C001", "Sam", date(2024, 1, 1)).unwrap();
    assert!(matches!(rent, RentOutcome::Rented(_)));
    assert!(!desk.find_car("C001").unwrap().is_available());

    let ret = desk.return_car("C001", date(2024, 1, 5)).unwrap();
    assert!(matches!(ret, ReturnOutcome::Returned(_)));
    assert!(desk.find_car("C001").unwrap().is_available());

    let audit_warnings: Vec<String> = captured_warn_lines()
        .into_iter()
        .filter(|line| line.contains("event=audit_append") && line.contains("sink down"))
        .collect();
    assert_eq!(audit_warnings.len(), 2);
}

#[test]
fn file_sink_appends_across_desk_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rental_log.txt");

    let mut desk = RentalDesk::new(FileAuditSink::new(&path));
    desk.add_car(Car::new("C001", "Toyota", "Camry", 60.0))
        .unwrap();
    desk.rent_car("C001", "Sam", date(2024, 1, 1)).unwrap();
    desk.return_car("C001", date(2024, 1, 5)).unwrap();

    let mut desk = RentalDesk::new(FileAuditSink::new(&path));
    desk.add_car(Car::new("C001", "Toyota", "Camry", 60.0))
        .unwrap();
    desk.rent_car("C001", "Priya", date(2024, 2, 1)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "RENTED - Sam rented Toyota Camry on 01-01-2024",
            "RETURNED - Sam returned Toyota Camry on 05-01-2024 after 4 days",
            "RENTED - Priya rented Toyota Camry on 01-02-2024",
        ]
    );
}
