//! Reduces trips into the dashboard totals and the per-vehicle breakdown.

use std::collections::HashMap;

use crate::{
    summary::{category::ExpenseCategory, query::VehicleAmount},
    trip::Trip,
};

/// The label for trips recorded without a vehicle number.
pub(super) const UNKNOWN_VEHICLE: &str = "Unknown";

/// The sums of each amount over a set of trips.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct TripTotals {
    pub revenue: f64,
    pub fuel: f64,
    pub driver_fee: f64,
    pub handling: f64,
    pub tolls: f64,
    pub petty_cash: f64,
    pub other: f64,
    pub trip_count: usize,
}

impl TripTotals {
    pub fn from_trips(trips: &[Trip]) -> Self {
        trips.iter().fold(Self::default(), |totals, trip| Self {
            revenue: totals.revenue + trip.revenue,
            fuel: totals.fuel + trip.fuel,
            driver_fee: totals.driver_fee + trip.driver_fee,
            handling: totals.handling + trip.handling_fee,
            tolls: totals.tolls + trip.tolls,
            petty_cash: totals.petty_cash + trip.petty_cash,
            other: totals.other + trip.other_expenses,
            trip_count: totals.trip_count + 1,
        })
    }

    pub fn category_total(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Fuel => self.fuel,
            ExpenseCategory::DriverFee => self.driver_fee,
            ExpenseCategory::Handling => self.handling,
            ExpenseCategory::Tolls => self.tolls,
            ExpenseCategory::PettyCash => self.petty_cash,
            ExpenseCategory::Other => self.other,
        }
    }

    pub fn total_expenses(&self) -> f64 {
        ExpenseCategory::ALL
            .iter()
            .map(|category| self.category_total(*category))
            .sum()
    }

    pub fn net_profit(&self) -> f64 {
        self.revenue - self.total_expenses()
    }
}

/// Sums `amounts` per vehicle, largest total first.
///
/// Equal totals are ordered by vehicle number. Blank vehicle numbers are
/// grouped under [UNKNOWN_VEHICLE].
pub(super) fn vehicle_breakdown(amounts: Vec<VehicleAmount>) -> Vec<(String, f64)> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for VehicleAmount { vehicle, amount } in amounts {
        let vehicle = if vehicle.trim().is_empty() {
            UNKNOWN_VEHICLE.to_owned()
        } else {
            vehicle
        };

        *totals.entry(vehicle).or_insert(0.0) += amount;
    }

    let mut breakdown: Vec<(String, f64)> = totals.into_iter().collect();
    breakdown.sort_by(|(vehicle_a, total_a), (vehicle_b, total_b)| {
        total_b
            .total_cmp(total_a)
            .then_with(|| vehicle_a.cmp(vehicle_b))
    });

    breakdown
}
