//! The fields shared by the create and edit trip forms, and their validation.

use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    trip::{NewTrip, Trip},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw form data for creating or editing a trip.
///
/// Every field is kept as text so that blank and malformed numbers can be
/// reported with a helpful message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TripForm {
    pub date: String,
    pub trip_id: String,
    pub vehicle: String,
    pub driver_name: String,
    pub revenue: String,
    pub fuel: String,
    pub driver_fee: String,
    pub handling_fee: String,
    pub tolls: String,
    pub petty_cash: String,
    pub pc_note: String,
    pub other_expenses: String,
    pub other_expenses_description: String,
    pub notes: String,
}

impl From<&Trip> for TripForm {
    fn from(trip: &Trip) -> Self {
        Self {
            date: trip.date.to_string(),
            trip_id: trip.trip_id.clone(),
            vehicle: trip.vehicle.clone(),
            driver_name: trip.driver_name.clone(),
            revenue: format_amount(trip.revenue),
            fuel: format_amount(trip.fuel),
            driver_fee: format_amount(trip.driver_fee),
            handling_fee: format_amount(trip.handling_fee),
            tolls: format_amount(trip.tolls),
            petty_cash: format_amount(trip.petty_cash),
            pc_note: trip.pc_note.clone().unwrap_or_default(),
            other_expenses: format_amount(trip.other_expenses),
            other_expenses_description: trip
                .other_expenses_description
                .clone()
                .unwrap_or_default(),
            notes: trip.notes.clone().unwrap_or_default(),
        }
    }
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Parse a finite number, `None` for blank or malformed input.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

fn required_text(raw: &str, message: &str) -> Result<String, Error> {
    let text = raw.trim();

    if text.is_empty() {
        Err(Error::InvalidTrip(message.to_owned()))
    } else {
        Ok(text.to_owned())
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn required_amount(raw: &str, label: &str) -> Result<f64, Error> {
    let amount =
        parse_amount(raw).ok_or_else(|| Error::InvalidTrip(format!("{label} is required")))?;

    non_negative(amount, label)
}

/// Blank or malformed input counts as zero.
fn optional_amount(raw: &str, label: &str) -> Result<f64, Error> {
    non_negative(parse_amount(raw).unwrap_or(0.0), label)
}

fn non_negative(amount: f64, label: &str) -> Result<f64, Error> {
    if amount < 0.0 {
        Err(Error::InvalidTrip(format!("{label} must be 0 or greater")))
    } else {
        Ok(amount)
    }
}

impl TripForm {
    /// Check the fields in the order they appear on the form and convert
    /// them to a trip that can be saved.
    ///
    /// # Errors
    /// Returns [Error::InvalidTrip] with a message for the first invalid field.
    pub fn validate(&self) -> Result<NewTrip, Error> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err(Error::InvalidTrip("Date is required".to_owned()));
        }
        let date = Date::parse(date, DATE_FORMAT)
            .map_err(|_| Error::InvalidTrip("Date must be a valid date".to_owned()))?;

        let trip_id = required_text(&self.trip_id, "Trip ID is required")?;
        let vehicle = required_text(&self.vehicle, "Vehicle number is required")?;
        let driver_name = required_text(&self.driver_name, "Driver name is required")?;

        let revenue = optional_amount(&self.revenue, "Revenue")?;
        let fuel = required_amount(&self.fuel, "Fuel cost")?;
        let driver_fee = required_amount(&self.driver_fee, "Driver fee")?;
        let handling_fee = required_amount(&self.handling_fee, "Handling fee")?;
        let tolls = required_amount(&self.tolls, "Tolls")?;
        let petty_cash = optional_amount(&self.petty_cash, "Petty cash")?;
        let other_expenses = optional_amount(&self.other_expenses, "Other expenses")?;

        Ok(NewTrip {
            date,
            trip_id,
            vehicle,
            driver_name,
            revenue,
            fuel,
            driver_fee,
            handling_fee,
            tolls,
            petty_cash,
            pc_note: optional_text(&self.pc_note),
            other_expenses,
            other_expenses_description: optional_text(&self.other_expenses_description),
            notes: optional_text(&self.notes),
        })
    }
}

fn text_field(name: &str, label: &str, value: &str, placeholder: &str, required: bool) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                name=(name)
                id=(name)
                type="text"
                placeholder=(placeholder)
                value=(value)
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

fn amount_field(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name=(name)
                    id=(name)
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    value=(value)
                    required[required]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

/// Renders the trip inputs, prefilled with `values`.
pub fn trip_form_fields(values: &TripForm) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 gap-4"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(values.date)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (text_field("trip_id", "Trip ID", &values.trip_id, "e.g. BLR-MYS-042", true))
            (text_field("vehicle", "Vehicle Number", &values.vehicle, "e.g. KA-01-1234", true))
            (text_field("driver_name", "Driver Name", &values.driver_name, "Driver name", true))
        }

        h3 class="text-lg font-semibold" { "Revenue & Expenses" }

        div class="grid grid-cols-1 md:grid-cols-2 gap-4"
        {
            (amount_field("revenue", "Revenue", &values.revenue, false))
            (amount_field("fuel", "Fuel", &values.fuel, true))
            (amount_field("driver_fee", "Driver Fee", &values.driver_fee, true))
            (amount_field("handling_fee", "Handling Fee", &values.handling_fee, true))
            (amount_field("tolls", "Tolls", &values.tolls, true))
            (amount_field("petty_cash", "Petty Cash", &values.petty_cash, false))
            (text_field("pc_note", "Petty Cash Note", &values.pc_note, "What was it for?", false))
            (amount_field("other_expenses", "Other Expenses", &values.other_expenses, false))
            (text_field(
                "other_expenses_description",
                "Other Expenses Description",
                &values.other_expenses_description,
                "Describe other expenses",
                false
            ))
        }

        div
        {
            label for="notes" class=(FORM_LABEL_STYLE) { "Notes" }

            textarea
                name="notes"
                id="notes"
                rows="3"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (values.notes)
            }
        }
    }
}

#[cfg(test)]
mod validate_tests {
    use time::macros::date;

    use crate::{Error, trip::NewTrip};

    use super::TripForm;

    fn valid_form() -> TripForm {
        TripForm {
            date: "2025-01-15".to_owned(),
            trip_id: " BLR-MYS-042 ".to_owned(),
            vehicle: "KA-01-1234".to_owned(),
            driver_name: "Ravi".to_owned(),
            revenue: "1500".to_owned(),
            fuel: "300.50".to_owned(),
            driver_fee: "200".to_owned(),
            handling_fee: "50".to_owned(),
            tolls: "0".to_owned(),
            petty_cash: "".to_owned(),
            pc_note: "  ".to_owned(),
            other_expenses: "25".to_owned(),
            other_expenses_description: "Tarpaulin".to_owned(),
            notes: "".to_owned(),
        }
    }

    #[track_caller]
    fn assert_invalid(form: TripForm, want_message: &str) {
        assert_eq!(
            form.validate(),
            Err(Error::InvalidTrip(want_message.to_owned()))
        );
    }

    #[test]
    fn valid_form_converts_to_new_trip() {
        let want = NewTrip {
            date: date!(2025 - 01 - 15),
            trip_id: "BLR-MYS-042".to_owned(),
            vehicle: "KA-01-1234".to_owned(),
            driver_name: "Ravi".to_owned(),
            revenue: 1500.0,
            fuel: 300.5,
            driver_fee: 200.0,
            handling_fee: 50.0,
            tolls: 0.0,
            petty_cash: 0.0,
            pc_note: None,
            other_expenses: 25.0,
            other_expenses_description: Some("Tarpaulin".to_owned()),
            notes: None,
        };

        assert_eq!(valid_form().validate(), Ok(want));
    }

    #[test]
    fn date_is_required() {
        assert_invalid(
            TripForm {
                date: "".to_owned(),
                ..valid_form()
            },
            "Date is required",
        );
    }

    #[test]
    fn date_must_be_valid() {
        assert_invalid(
            TripForm {
                date: "2025-02-30".to_owned(),
                ..valid_form()
            },
            "Date must be a valid date",
        );
    }

    #[test]
    fn text_fields_are_required() {
        let cases = [
            (
                TripForm {
                    trip_id: "   ".to_owned(),
                    ..valid_form()
                },
                "Trip ID is required",
            ),
            (
                TripForm {
                    vehicle: "".to_owned(),
                    ..valid_form()
                },
                "Vehicle number is required",
            ),
            (
                TripForm {
                    driver_name: "".to_owned(),
                    ..valid_form()
                },
                "Driver name is required",
            ),
        ];

        for (form, message) in cases {
            assert_invalid(form, message);
        }
    }

    #[test]
    fn required_amounts_reject_blank_and_malformed_input() {
        let cases = [
            (
                TripForm {
                    fuel: "".to_owned(),
                    ..valid_form()
                },
                "Fuel cost is required",
            ),
            (
                TripForm {
                    driver_fee: "abc".to_owned(),
                    ..valid_form()
                },
                "Driver fee is required",
            ),
            (
                TripForm {
                    handling_fee: "NaN".to_owned(),
                    ..valid_form()
                },
                "Handling fee is required",
            ),
            (
                TripForm {
                    tolls: "inf".to_owned(),
                    ..valid_form()
                },
                "Tolls is required",
            ),
        ];

        for (form, message) in cases {
            assert_invalid(form, message);
        }
    }

    #[test]
    fn amounts_must_not_be_negative() {
        let cases = [
            (
                TripForm {
                    revenue: "-1".to_owned(),
                    ..valid_form()
                },
                "Revenue must be 0 or greater",
            ),
            (
                TripForm {
                    fuel: "-0.01".to_owned(),
                    ..valid_form()
                },
                "Fuel cost must be 0 or greater",
            ),
            (
                TripForm {
                    tolls: "-5".to_owned(),
                    ..valid_form()
                },
                "Tolls must be 0 or greater",
            ),
            (
                TripForm {
                    petty_cash: "-20".to_owned(),
                    ..valid_form()
                },
                "Petty cash must be 0 or greater",
            ),
            (
                TripForm {
                    other_expenses: "-3".to_owned(),
                    ..valid_form()
                },
                "Other expenses must be 0 or greater",
            ),
        ];

        for (form, message) in cases {
            assert_invalid(form, message);
        }
    }

    #[test]
    fn optional_amounts_default_to_zero() {
        let trip = TripForm {
            revenue: "".to_owned(),
            petty_cash: "lots".to_owned(),
            other_expenses: "".to_owned(),
            ..valid_form()
        }
        .validate()
        .unwrap();

        assert_eq!(trip.revenue, 0.0);
        assert_eq!(trip.petty_cash, 0.0);
        assert_eq!(trip.other_expenses, 0.0);
    }

    #[test]
    fn reports_first_failure_only() {
        assert_invalid(
            TripForm {
                date: "".to_owned(),
                trip_id: "".to_owned(),
                fuel: "-1".to_owned(),
                ..valid_form()
            },
            "Date is required",
        );
    }
}
