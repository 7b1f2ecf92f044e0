//! Card views for the dashboard summary and the per-vehicle breakdown modal.

use std::ops::RangeInclusive;

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_currency,
    },
    summary::{aggregation::TripTotals, category::ExpenseCategory, metrics::SummaryMetrics},
};

const AMOUNT_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const AMOUNT_RED_STYLE: &str = "text-red-600 dark:text-red-400";

fn amount_color_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        AMOUNT_GREEN_STYLE
    } else {
        AMOUNT_RED_STYLE
    }
}

fn trip_count_label(count: usize) -> String {
    if count == 1 {
        "1 trip".to_owned()
    } else {
        format!("{count} trips")
    }
}

fn breakdown_url(category: ExpenseCategory, range: &RangeInclusive<Date>) -> String {
    format!(
        "{}?from={}&to={}&category={}",
        endpoints::CATEGORY_BREAKDOWN,
        range.start(),
        range.end(),
        category.as_query_value()
    )
}

fn headline_card(title: &str, amount: f64, amount_style: &str, note: Option<&str>) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p class={ "mt-1 text-2xl font-bold " (amount_style) } { (format_currency(amount)) }

            @if let Some(note) = note {
                p class="mt-1 text-xs text-gray-500 dark:text-gray-400" { (note) }
            }
        }
    }
}

fn category_card(
    category: ExpenseCategory,
    amount: f64,
    range: &RangeInclusive<Date>,
    drill_down: bool,
) -> Markup {
    let body = html! {
        h4 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (category.label()) }
        p class="mt-1 text-lg font-semibold" { (format_currency(amount)) }
    };

    html! {
        @if drill_down {
            button
                type="button"
                hx-get=(breakdown_url(category, range))
                hx-target="#breakdown"
                hx-swap="innerHTML"
                data-category=(category.as_query_value())
                class={ (CARD_STYLE) " w-full hover:shadow-lg transition-shadow cursor-pointer" }
            {
                (body)
            }
        } @else {
            div data-category=(category.as_query_value()) class=(CARD_STYLE)
            {
                (body)
            }
        }
    }
}

/// Renders the totals for `range`.
///
/// The range is kept in `data-from` and `data-to` so the totals on screen
/// always name the request that produced them.
pub(super) fn summary_view(
    totals: &TripTotals,
    range: &RangeInclusive<Date>,
    metrics: SummaryMetrics,
) -> Markup {
    let trip_count = trip_count_label(totals.trip_count);

    html! {
        div
            id="summary"
            data-from=(range.start())
            data-to=(range.end())
            class="w-full space-y-6"
        {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4"
            {
                @if metrics.revenue {
                    (headline_card("Total Revenue", totals.revenue, AMOUNT_GREEN_STYLE, None))
                    (headline_card("Total Expenses", totals.total_expenses(), AMOUNT_RED_STYLE, None))
                    (headline_card(
                        "Net Profit",
                        totals.net_profit(),
                        amount_color_class(totals.net_profit()),
                        Some(&trip_count),
                    ))
                } @else {
                    (headline_card(
                        "Total Expenses",
                        totals.total_expenses(),
                        AMOUNT_RED_STYLE,
                        Some(&trip_count),
                    ))
                }
            }

            section
            {
                h3 class="text-xl font-semibold mb-4" { "Expenses by Category" }

                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4"
                {
                    @for category in ExpenseCategory::ALL {
                        (category_card(
                            category,
                            totals.category_total(category),
                            range,
                            metrics.drill_down,
                        ))
                    }
                }
            }
        }
    }
}

/// Renders the per-vehicle totals of `category` in a modal.
pub(super) fn breakdown_dialog(category: ExpenseCategory, breakdown: &[(String, f64)]) -> Markup {
    html! {
        dialog
            open
            class="fixed inset-0 z-50 w-full max-w-lg p-6 rounded-lg shadow-xl
                bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
        {
            h3 class="text-lg font-semibold mb-4" { (category.label()) " - Vehicle Breakdown" }

            @if breakdown.is_empty() {
                p class="py-4 text-center text-gray-500 dark:text-gray-400" { "No data available" }
            } @else {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Vehicle Number" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Total Amount" }
                        }
                    }

                    tbody
                    {
                        @for (vehicle, total) in breakdown {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (vehicle) }
                                td class={ (TABLE_CELL_STYLE) " text-right" } { (format_currency(*total)) }
                            }
                        }
                    }
                }
            }

            form method="dialog" class="mt-4 flex justify-end"
            {
                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Close" }
            }
        }
    }
}
