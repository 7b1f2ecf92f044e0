use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use trip_ledger::{
    Email, NewTrip, PasswordHash, ValidatedPassword, create_trip, create_user, initialize_db,
};

/// A utility for creating a test database for the trip_ledger server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const TEST_EMAIL: &str = "test@example.com";

/// (days ago, trip ID, vehicle, driver, revenue, fuel, driver fee, handling, tolls)
const SAMPLE_TRIPS: [(i64, &str, &str, &str, f64, f64, f64, f64, f64); 6] = [
    (1, "BLR-MYS-042", "KA-01-1234", "Ravi", 12_000.0, 3_150.0, 800.0, 250.0, 340.0),
    (2, "BLR-CHN-017", "KA-01-5678", "Suresh", 18_500.0, 5_400.0, 1_200.0, 400.0, 610.0),
    (4, "MYS-BLR-043", "KA-01-1234", "Ravi", 11_000.0, 3_020.0, 800.0, 250.0, 340.0),
    (7, "PUN-MUM-008", "MH-12-4321", "Anil", 9_500.0, 2_600.0, 700.0, 150.0, 520.0),
    (12, "BLR-HYD-005", "KA-01-5678", "Suresh", 21_000.0, 6_800.0, 1_500.0, 500.0, 900.0),
    (35, "BLR-MYS-041", "KA-01-1234", "Imran", 12_000.0, 3_300.0, 800.0, 250.0, 340.0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user {TEST_EMAIL}...");

    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked("test"),
        PasswordHash::DEFAULT_COST,
    )?;
    let user = create_user(Email::new(TEST_EMAIL)?, password_hash, &conn)?;

    println!("Creating {} sample trips...", SAMPLE_TRIPS.len());

    let today = OffsetDateTime::now_utc().date();

    for (days_ago, trip_id, vehicle, driver_name, revenue, fuel, driver_fee, handling_fee, tolls) in
        SAMPLE_TRIPS
    {
        let trip = NewTrip {
            date: today - Duration::days(days_ago),
            trip_id: trip_id.to_owned(),
            vehicle: vehicle.to_owned(),
            driver_name: driver_name.to_owned(),
            revenue,
            fuel,
            driver_fee,
            handling_fee,
            tolls,
            petty_cash: 0.0,
            pc_note: None,
            other_expenses: 0.0,
            other_expenses_description: None,
            notes: None,
        };

        create_trip(trip, user.id, &conn)?;
    }

    println!("Success!");

    Ok(())
}
