//! Interactive desk shell.
//!
//! # Responsibility
//! - Drive rental and return flows from a fixed text menu.
//! - Keep parsing and confirmation at the boundary; the core receives
//!   validated input only.

use log::info;
use rentdesk_core::{
    core_version, default_log_level, format_desk_date, init_logging, parse_desk_date, Car,
    FileAuditSink, RentOutcome, RentalDesk, ReturnOutcome, AUDIT_LOG_FILE_NAME,
};
use std::io::{self, BufRead, Write};

fn main() {
    init_diagnostics();

    let audit_sink = FileAuditSink::new(AUDIT_LOG_FILE_NAME);
    info!(
        "event=audit_sink_ready module=cli status=ok path={}",
        audit_sink.path().display()
    );
    let mut desk = RentalDesk::new(audit_sink);
    seed_fleet(&mut desk);

    let mut input = io::stdin().lock();
    println!("=== Car Rental Desk ===");
    loop {
        println!();
        println!("1. Rent a Car");
        println!("2. Return a Car");
        println!("3. Exit");
        let Some(choice) = prompt(&mut input, "Enter your choice: ") else {
            break;
        };
        match choice.as_str() {
            "1" => rent_flow(&mut desk, &mut input),
            "2" => return_flow(&mut desk, &mut input),
            "3" => break,
            other => println!("Unknown choice `{other}`; enter 1, 2 or 3."),
        }
    }
    println!("Thank you for visiting!");
    info!("event=shell_exit module=cli status=ok");
}

/// Best-effort diagnostics bootstrap; the desk works without it.
fn init_diagnostics() {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Diagnostic logging unavailable: {err}");
            return;
        }
    };
    let log_dir = cwd.join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("Diagnostic logging unavailable: log path is not valid UTF-8");
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("Diagnostic logging unavailable: {err}");
        return;
    }
    info!(
        "event=shell_start module=cli status=ok version={}",
        core_version()
    );
}

fn seed_fleet(desk: &mut RentalDesk<FileAuditSink>) {
    let fleet = [
        Car::new("C001", "Toyota", "Camry", 60.0),
        Car::new("C002", "Honda", "Accord", 70.0),
        Car::new("C003", "Mahindra", "Thar", 150.0),
    ];
    for car in fleet {
        if let Err(err) = desk.add_car(car) {
            eprintln!("Failed to seed fleet car: {err}");
        }
    }
}

/// Reads one trimmed input line; `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn rent_flow(desk: &mut RentalDesk<FileAuditSink>, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Enter your name: ") else {
        return;
    };
    let Some(date_text) = prompt(input, "Enter rental start date (dd-MM-yyyy): ") else {
        return;
    };
    let start_date = match parse_desk_date(&date_text) {
        Ok(date) => date,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    if desk.available_cars().is_empty() {
        println!("No cars are available right now.");
        return;
    }
    println!();
    println!("Available Cars:");
    for car in desk.available_cars() {
        println!("{} - {} {}", car.id, car.brand, car.model);
    }

    let Some(car_id) = prompt(input, "Enter the car ID you want to rent: ") else {
        return;
    };
    let (brand, model, daily_rate) = {
        let Some(car) = desk.find_car(&car_id) else {
            println!("No car with ID `{car_id}` is in the fleet.");
            return;
        };
        if !car.is_available() {
            println!("That car is already rented out.");
            return;
        }
        (car.brand.clone(), car.model.clone(), car.calculate_price(1))
    };

    println!("Renting {brand} {model} costs ${daily_rate:.2} per day.");
    let Some(confirm) = prompt(input, "Confirm rental? (Y/N): ") else {
        return;
    };
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Rental cancelled.");
        return;
    }

    match desk.rent_car(&car_id, &name, start_date) {
        Ok(RentOutcome::Rented(customer)) => {
            println!();
            println!("Rental confirmed!");
            println!("Customer ID: {}", customer.id);
            println!("Customer Name: {}", customer.name);
            println!("Car: {brand} {model}");
            println!("Start Date: {}", format_desk_date(start_date));
            println!("Price per day: ${daily_rate:.2}");
        }
        Ok(RentOutcome::Unavailable) => println!("That car is already rented out."),
        Err(err) => println!("{err}"),
    }
}

fn return_flow(desk: &mut RentalDesk<FileAuditSink>, input: &mut impl BufRead) {
    if desk.unavailable_cars().is_empty() {
        println!("No cars are currently rented out.");
        return;
    }
    println!();
    println!("Rented Cars:");
    for car in desk.unavailable_cars() {
        println!("{} - {} {}", car.id, car.brand, car.model);
    }

    let Some(car_id) = prompt(input, "Enter the car ID being returned: ") else {
        return;
    };
    let is_rented = desk
        .unavailable_cars()
        .iter()
        .any(|car| car.id == car_id.trim());
    if !is_rented {
        println!("No rented car with ID `{car_id}`.");
        return;
    }

    let Some(date_text) = prompt(input, "Enter return date (dd-MM-yyyy): ") else {
        return;
    };
    let return_date = match parse_desk_date(&date_text) {
        Ok(date) => date,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    match desk.return_car(&car_id, return_date) {
        Ok(ReturnOutcome::Returned(summary)) => {
            println!();
            println!("Return processed!");
            println!("Customer: {} ({})", summary.customer.name, summary.customer.id);
            println!("Car: {} {}", summary.car.brand, summary.car.model);
            println!(
                "Period: {} to {}",
                format_desk_date(summary.start_date),
                format_desk_date(summary.return_date)
            );
            println!("Days charged: {}", summary.rental_days);
            println!("Total price: ${:.2}", summary.total_price);
        }
        Ok(ReturnOutcome::NotRented) => println!("No open rental found for `{car_id}`."),
        Err(err) => println!("{err}"),
    }
}
