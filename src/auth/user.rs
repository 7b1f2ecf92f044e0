//! Code for creating the user table and fetching users from the database.

use std::fmt::Display;

use rusqlite::{Connection, Row, types::FromSql, types::ToSql};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    auth::{Email, PasswordHash},
};

/// A newtype wrapper for integer user IDs.
///
/// Every trip query takes the owner's `UserID`, which keeps user IDs from being
/// confused with trip IDs at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct UserID(i64);

impl UserID {
    /// Create a new user ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Cast the user ID to a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ToSql for UserID {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for UserID {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        i64::column_result(value).map(UserID)
    }
}

/// A registered user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's ID in the application database.
    pub id: UserID,
    /// The address the user logs in with.
    pub email: Email,
    /// The user's password hash.
    pub password_hash: PasswordHash,
}

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_email: String = row.get(1)?;
    let raw_password_hash: String = row.get(2)?;

    Ok(User {
        id: row.get(0)?,
        email: Email::new_unchecked(&raw_email),
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
    })
}

/// Create and insert a new user into the database.
///
/// # Errors
///
/// Returns [Error::DuplicateEmail] if the email is already registered, or a
/// [Error::SqlError] if another SQL related error occurred.
pub fn create_user(
    email: Email,
    password_hash: PasswordHash,
    connection: &Connection,
) -> Result<User, Error> {
    connection
        .prepare("INSERT INTO user (email, password) VALUES (?1, ?2) RETURNING id, email, password")?
        .query_row((email.as_ref(), password_hash.as_ref()), map_user_row)
        .map_err(Error::from)
}

/// Get the user registered with `email`.
///
/// # Errors
///
/// Returns [Error::NotFound] if no user has registered `email`.
pub fn get_user_by_email(email: &Email, connection: &Connection) -> Result<User, Error> {
    connection
        .query_one(
            "SELECT id, email, password FROM user WHERE email = ?1",
            (email.as_ref(),),
            map_user_row,
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod user_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        auth::{Email, PasswordHash},
    };

    use super::{create_user, create_user_table, get_user_by_email};

    fn get_db_connection() -> Connection {
        let conn =
            Connection::open_in_memory().expect("Could not create in-memory SQLite database");
        create_user_table(&conn).expect("Could not create user table");

        conn
    }

    #[test]
    fn insert_user_succeeds() {
        let db_connection = get_db_connection();
        let email = Email::new("driver@example.com").unwrap();
        let password_hash = PasswordHash::new_unchecked("hunter2");

        let inserted_user =
            create_user(email.clone(), password_hash.clone(), &db_connection).unwrap();

        assert!(inserted_user.id.as_i64() > 0);
        assert_eq!(inserted_user.email, email);
        assert_eq!(inserted_user.password_hash, password_hash);
    }

    #[test]
    fn insert_duplicate_email_fails() {
        let db_connection = get_db_connection();
        let email = Email::new("driver@example.com").unwrap();
        create_user(
            email.clone(),
            PasswordHash::new_unchecked("hunter2"),
            &db_connection,
        )
        .unwrap();

        let result = create_user(email, PasswordHash::new_unchecked("hunter3"), &db_connection);

        assert_eq!(result, Err(Error::DuplicateEmail));
    }

    #[test]
    fn get_user_by_email_succeeds() {
        let db_connection = get_db_connection();
        let email = Email::new("driver@example.com").unwrap();
        let want = create_user(
            email.clone(),
            PasswordHash::new_unchecked("hunter2"),
            &db_connection,
        )
        .unwrap();

        let got = get_user_by_email(&email, &db_connection).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn get_user_by_unknown_email_fails() {
        let db_connection = get_db_connection();
        let email = Email::new("nobody@example.com").unwrap();

        assert_eq!(
            get_user_by_email(&email, &db_connection),
            Err(Error::NotFound)
        );
    }
}
