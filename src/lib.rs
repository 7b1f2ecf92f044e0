//! Trip Ledger is a web app for recording the trips and expenses of a small
//! logistics business.
//!
//! This library provides a REST API that directly serves HTML pages: forms for
//! recording trips, a searchable trip list with CSV export and a dashboard that
//! totals revenue and expenses over a date range.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod auth;
mod db;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod landing;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod summary;
#[cfg(test)]
mod test_utils;
mod timezone;
mod trip;

pub use app_state::AppState;
pub use auth::{Email, PasswordHash, User, UserID, ValidatedPassword, create_user};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::{SummaryMetrics, SummaryMode};
pub use trip::{NewTrip, Trip, create_trip};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
