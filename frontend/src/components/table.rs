//! Filtered data explorer.
//!
//! Every filtered record is rendered; the wrapper scrolls instead of paging.

use leptos::*;

use crate::types::ShipmentRow;

const COLUMNS: [&str; 8] = [
    "estimated_delivery_date",
    "actual_delivery_date",
    "carrier_name",
    "shipping_cost",
    "destination_country",
    "delivery_time_days",
    "on_time",
    "route",
];

const SCROLL_STYLE: &str = "max-height: 32rem; overflow-y: auto;";

/// Cell text for one record, in `COLUMNS` order.
pub fn row_cells(r: &ShipmentRow) -> [String; 8] {
    [
        r.estimated_delivery_date.clone(),
        r.actual_delivery_date.clone(),
        r.carrier_name.clone(),
        format!("{:.2}", r.shipping_cost),
        r.destination_country.clone(),
        r.delivery_time_days.to_string(),
        if r.on_time { "1" } else { "0" }.to_string(),
        r.route.clone(),
    ]
}

#[component]
pub fn DataTable(records: Vec<ShipmentRow>) -> impl IntoView {
    let total = records.len();

    let rows = records
        .iter()
        .map(|r| {
            let cells = row_cells(r);
            view! {
                <tr class:late={!r.on_time}>
                    {cells
                        .into_iter()
                        .enumerate()
                        .map(|(i, cell)| {
                            // shipping_cost and delivery_time_days
                            let numeric = i == 3 || i == 5;
                            view! { <td class:num=numeric>{cell}</td> }
                        })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="explorer">
            <h2>"Filtered Data Explorer"</h2>
            <p class="muted">{format!("{} rows", total)}</p>
            <div class="table-wrap" style=SCROLL_STYLE>
                <table>
                    <thead>
                        <tr>{COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}
