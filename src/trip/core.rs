//! Defines the trip record and the database queries for trips.
//!
//! Every query is scoped to the owning user, so one user can never read,
//! change or delete another user's trips.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, auth::UserID};

/// The database ID of a trip.
pub type TripId = i64;

/// The number of rows changed by an update or delete statement.
pub type RowsAffected = usize;

// ============================================================================
// MODELS
// ============================================================================

/// One logistics trip with its revenue and expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// The ID of the trip.
    pub id: TripId,
    /// The user that recorded the trip.
    pub user_id: UserID,
    /// The day the trip took place.
    pub date: Date,
    /// The trip identifier or route label, e.g. "BLR-MYS-042".
    pub trip_id: String,
    /// The vehicle registration, e.g. "KA-01-1234".
    pub vehicle: String,
    /// Who drove the vehicle.
    pub driver_name: String,
    /// Money earned for the trip.
    pub revenue: f64,
    /// Fuel cost.
    pub fuel: f64,
    /// The driver's pay for the trip.
    pub driver_fee: f64,
    /// Loading and unloading charges.
    pub handling_fee: f64,
    /// Road and bridge tolls.
    pub tolls: f64,
    /// Cash handed out for small expenses on the road.
    pub petty_cash: f64,
    /// What the petty cash was spent on.
    pub pc_note: Option<String>,
    /// Any expense that does not fit the other categories.
    pub other_expenses: f64,
    /// What the other expenses were for.
    pub other_expenses_description: Option<String>,
    /// Free-form notes about the trip.
    pub notes: Option<String>,
}

impl Trip {
    /// The sum of all six expense categories.
    pub fn total_expenses(&self) -> f64 {
        self.fuel
            + self.driver_fee
            + self.handling_fee
            + self.tolls
            + self.petty_cash
            + self.other_expenses
    }

    /// Revenue minus total expenses.
    pub fn profit(&self) -> f64 {
        self.revenue - self.total_expenses()
    }
}

/// The fields of a trip as they are written to the database, see [Trip] for
/// what each field holds.
///
/// Only `TripForm::validate` should produce these outside of
/// tests, so amounts are never negative and the text fields are never blank.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct NewTrip {
    pub date: Date,
    pub trip_id: String,
    pub vehicle: String,
    pub driver_name: String,
    pub revenue: f64,
    pub fuel: f64,
    pub driver_fee: f64,
    pub handling_fee: f64,
    pub tolls: f64,
    pub petty_cash: f64,
    pub pc_note: Option<String>,
    pub other_expenses: f64,
    pub other_expenses_description: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The columns [map_trip_row] expects, in order.
pub const TRIP_COLUMNS: &str = "id, user_id, date, trip_id, vehicle, driver_name, revenue, fuel, \
    driver_fee, handling_fee, tolls, petty_cash, pc_note, other_expenses, \
    other_expenses_description, notes";

/// Create the trip table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_trip_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS trip (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                trip_id TEXT NOT NULL,
                vehicle TEXT NOT NULL,
                driver_name TEXT NOT NULL,
                revenue REAL NOT NULL DEFAULT 0,
                fuel REAL NOT NULL,
                driver_fee REAL NOT NULL,
                handling_fee REAL NOT NULL,
                tolls REAL NOT NULL,
                petty_cash REAL NOT NULL DEFAULT 0,
                pc_note TEXT,
                other_expenses REAL NOT NULL DEFAULT 0,
                other_expenses_description TEXT,
                notes TEXT,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    // Serves the trip list (ordered by date) and the dashboard (date range).
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_trip_user_date ON trip(user_id, date);",
        (),
    )?;

    Ok(())
}

/// Map a database row selected with all trip columns to a [Trip].
pub fn map_trip_row(row: &Row) -> Result<Trip, rusqlite::Error> {
    Ok(Trip {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        trip_id: row.get(3)?,
        vehicle: row.get(4)?,
        driver_name: row.get(5)?,
        revenue: row.get(6)?,
        fuel: row.get(7)?,
        driver_fee: row.get(8)?,
        handling_fee: row.get(9)?,
        tolls: row.get(10)?,
        petty_cash: row.get(11)?,
        pc_note: row.get(12)?,
        other_expenses: row.get(13)?,
        other_expenses_description: row.get(14)?,
        notes: row.get(15)?,
    })
}

/// Insert a trip owned by `user_id`.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn create_trip(trip: NewTrip, user_id: UserID, connection: &Connection) -> Result<Trip, Error> {
    let trip = connection
        .prepare(&format!(
            "INSERT INTO trip (user_id, date, trip_id, vehicle, driver_name, revenue, fuel, \
                driver_fee, handling_fee, tolls, petty_cash, pc_note, other_expenses, \
                other_expenses_description, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
             RETURNING {TRIP_COLUMNS}"
        ))?
        .query_row(
            params![
                user_id,
                trip.date,
                trip.trip_id,
                trip.vehicle,
                trip.driver_name,
                trip.revenue,
                trip.fuel,
                trip.driver_fee,
                trip.handling_fee,
                trip.tolls,
                trip.petty_cash,
                trip.pc_note,
                trip.other_expenses,
                trip.other_expenses_description,
                trip.notes,
            ],
            map_trip_row,
        )?;

    Ok(trip)
}

/// Retrieve the trip `id` owned by `user_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a trip owned by `user_id`,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_trip(id: TripId, user_id: UserID, connection: &Connection) -> Result<Trip, Error> {
    let trip = connection
        .prepare(&format!(
            "SELECT {TRIP_COLUMNS} FROM trip WHERE id = ?1 AND user_id = ?2"
        ))?
        .query_one(params![id, user_id], map_trip_row)?;

    Ok(trip)
}

/// Get all of the trips owned by `user_id`, newest first.
///
/// Trips on the same day are ordered by ID, newest first.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn get_trips(user_id: UserID, connection: &Connection) -> Result<Vec<Trip>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRIP_COLUMNS} FROM trip WHERE user_id = ?1 ORDER BY date DESC, id DESC"
        ))?
        .query_map([user_id], map_trip_row)?
        .collect::<Result<Vec<Trip>, rusqlite::Error>>()
        .map_err(Error::from)
}

/// Overwrite the fields of the trip `id` owned by `user_id`.
///
/// The owner of a trip is never changed. Returns zero if there is no such trip.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn update_trip(
    id: TripId,
    user_id: UserID,
    trip: &NewTrip,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE trip
            SET \
                date = ?1, \
                trip_id = ?2, \
                vehicle = ?3, \
                driver_name = ?4, \
                revenue = ?5, \
                fuel = ?6, \
                driver_fee = ?7, \
                handling_fee = ?8, \
                tolls = ?9, \
                petty_cash = ?10, \
                pc_note = ?11, \
                other_expenses = ?12, \
                other_expenses_description = ?13, \
                notes = ?14 \
            WHERE id = ?15 AND user_id = ?16;",
            params![
                trip.date,
                trip.trip_id,
                trip.vehicle,
                trip.driver_name,
                trip.revenue,
                trip.fuel,
                trip.driver_fee,
                trip.handling_fee,
                trip.tolls,
                trip.petty_cash,
                trip.pc_note,
                trip.other_expenses,
                trip.other_expenses_description,
                trip.notes,
                id,
                user_id,
            ],
        )
        .map_err(Error::from)
}

/// Delete the trip `id` owned by `user_id`. Returns zero if there is no such trip.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn delete_trip(
    id: TripId,
    user_id: UserID,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM trip WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )
        .map_err(Error::from)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod model_tests {
    use time::macros::date;

    use crate::{auth::UserID, trip::Trip};

    fn trip() -> Trip {
        Trip {
            id: 1,
            user_id: UserID::new(1),
            date: date!(2025 - 01 - 10),
            trip_id: "BLR-MYS-042".to_owned(),
            vehicle: "KA-01-1234".to_owned(),
            driver_name: "Ravi".to_owned(),
            revenue: 1000.0,
            fuel: 300.0,
            driver_fee: 150.0,
            handling_fee: 50.0,
            tolls: 40.0,
            petty_cash: 10.0,
            pc_note: None,
            other_expenses: 5.5,
            other_expenses_description: None,
            notes: None,
        }
    }

    #[test]
    fn total_expenses_sums_all_categories() {
        assert_eq!(trip().total_expenses(), 555.5);
    }

    #[test]
    fn profit_is_revenue_minus_expenses() {
        assert_eq!(trip().profit(), 444.5);
    }

    #[test]
    fn profit_can_be_negative() {
        let trip = Trip {
            revenue: 0.0,
            ..trip()
        };

        assert_eq!(trip.profit(), -555.5);
    }
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        auth::{Email, PasswordHash, UserID, create_user},
        db::initialize,
        trip::core::{NewTrip, create_trip, delete_trip, get_trip, get_trips, update_trip},
    };

    fn get_test_connection() -> (Connection, UserID, UserID) {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        let owner = create_user(
            Email::new_unchecked("owner@example.com"),
            PasswordHash::new_unchecked("hunter2"),
            &conn,
        )
        .unwrap();
        let other = create_user(
            Email::new_unchecked("other@example.com"),
            PasswordHash::new_unchecked("hunter3"),
            &conn,
        )
        .unwrap();

        (conn, owner.id, other.id)
    }

    fn new_trip(date: time::Date, trip_id: &str) -> NewTrip {
        NewTrip {
            date,
            trip_id: trip_id.to_owned(),
            vehicle: "KA-01-1234".to_owned(),
            driver_name: "Ravi".to_owned(),
            revenue: 500.0,
            fuel: 150.0,
            driver_fee: 25.0,
            handling_fee: 0.0,
            tolls: 0.0,
            petty_cash: 0.0,
            pc_note: None,
            other_expenses: 0.0,
            other_expenses_description: None,
            notes: Some("Loaded at dawn".to_owned()),
        }
    }

    #[test]
    fn create_and_get_trip() {
        let (conn, owner, _) = get_test_connection();

        let created = create_trip(new_trip(date!(2025 - 01 - 05), "T-1"), owner, &conn).unwrap();
        let got = get_trip(created.id, owner, &conn).unwrap();

        assert_eq!(created, got);
        assert_eq!(got.user_id, owner);
        assert_eq!(got.date, date!(2025 - 01 - 05));
        assert_eq!(got.notes.as_deref(), Some("Loaded at dawn"));
    }

    #[test]
    fn get_trip_owned_by_other_user_is_not_found() {
        let (conn, owner, other) = get_test_connection();
        let created = create_trip(new_trip(date!(2025 - 01 - 05), "T-1"), owner, &conn).unwrap();

        assert_eq!(get_trip(created.id, other, &conn), Err(Error::NotFound));
    }

    #[test]
    fn get_trips_orders_newest_first() {
        let (conn, owner, other) = get_test_connection();
        create_trip(new_trip(date!(2025 - 01 - 01), "oldest"), owner, &conn).unwrap();
        create_trip(new_trip(date!(2025 - 01 - 09), "newest"), owner, &conn).unwrap();
        create_trip(new_trip(date!(2025 - 01 - 05), "same-day-1"), owner, &conn).unwrap();
        create_trip(new_trip(date!(2025 - 01 - 05), "same-day-2"), owner, &conn).unwrap();
        create_trip(new_trip(date!(2025 - 01 - 07), "not-mine"), other, &conn).unwrap();

        let trip_ids: Vec<String> = get_trips(owner, &conn)
            .unwrap()
            .into_iter()
            .map(|trip| trip.trip_id)
            .collect();

        assert_eq!(trip_ids, ["newest", "same-day-2", "same-day-1", "oldest"]);
    }

    #[test]
    fn update_trip_changes_fields_but_not_owner() {
        let (conn, owner, _) = get_test_connection();
        let created = create_trip(new_trip(date!(2025 - 01 - 05), "T-1"), owner, &conn).unwrap();
        let changes = NewTrip {
            vehicle: "MH-12-5678".to_owned(),
            fuel: 175.25,
            notes: None,
            ..new_trip(date!(2025 - 01 - 06), "T-1b")
        };

        let rows_affected = update_trip(created.id, owner, &changes, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        let got = get_trip(created.id, owner, &conn).unwrap();
        assert_eq!(got.user_id, owner);
        assert_eq!(got.trip_id, "T-1b");
        assert_eq!(got.vehicle, "MH-12-5678");
        assert_eq!(got.fuel, 175.25);
        assert_eq!(got.date, date!(2025 - 01 - 06));
        assert_eq!(got.notes, None);
    }

    #[test]
    fn update_trip_of_other_user_changes_nothing() {
        let (conn, owner, other) = get_test_connection();
        let created = create_trip(new_trip(date!(2025 - 01 - 05), "T-1"), owner, &conn).unwrap();

        let rows_affected =
            update_trip(created.id, other, &new_trip(date!(2025 - 02 - 01), "X"), &conn).unwrap();

        assert_eq!(rows_affected, 0);
        assert_eq!(get_trip(created.id, owner, &conn).unwrap(), created);
    }

    #[test]
    fn delete_removes_exactly_one_trip() {
        let (conn, owner, other) = get_test_connection();
        let keep = create_trip(new_trip(date!(2025 - 01 - 04), "keep"), owner, &conn).unwrap();
        let remove = create_trip(new_trip(date!(2025 - 01 - 05), "remove"), owner, &conn).unwrap();
        let others = create_trip(new_trip(date!(2025 - 01 - 05), "other"), other, &conn).unwrap();

        let rows_affected = delete_trip(remove.id, owner, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_trip(remove.id, owner, &conn), Err(Error::NotFound));
        assert_eq!(get_trips(owner, &conn).unwrap(), vec![keep]);
        assert_eq!(get_trips(other, &conn).unwrap(), vec![others]);
    }

    #[test]
    fn delete_never_touches_other_users_trips() {
        let (conn, owner, other) = get_test_connection();
        let trip = create_trip(new_trip(date!(2025 - 01 - 05), "T-1"), owner, &conn).unwrap();

        let rows_affected = delete_trip(trip.id, other, &conn).unwrap();

        assert_eq!(rows_affected, 0);
        assert_eq!(get_trip(trip.id, owner, &conn).unwrap(), trip);
    }
}
