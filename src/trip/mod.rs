//! Trip records for the logistics ledger.
//!
//! This module contains everything related to trips:
//! - The `Trip` model and database functions for storing and querying trips
//! - The trip form and its validation rules
//! - View handlers for creating, editing, listing, deleting and exporting trips

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod export;
mod filter;
mod form;
mod list_page;

pub use core::{
    NewTrip, TRIP_COLUMNS, Trip, TripId, create_trip, create_trip_table, map_trip_row,
};
pub use create_endpoint::create_trip_endpoint;
pub use create_page::get_create_trip_page;
pub use delete_endpoint::delete_trip_endpoint;
pub use edit_endpoint::edit_trip_endpoint;
pub use edit_page::get_edit_trip_page;
pub use export::export_trips;
pub use list_page::get_trips_page;

#[cfg(test)]
pub use core::{get_trip, get_trips};
#[cfg(test)]
pub use form::TripForm;
