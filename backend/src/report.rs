//! Plain-text rendering of a [`DashboardView`].

use std::fmt::Write;

use crate::dashboard::{DashboardView, Histogram, RankingView};
use crate::models::INTERCHANGE_HEADER;
use crate::store::writer::DATE_FORMAT;

const BAR_WIDTH: usize = 40;

/// Render the whole dashboard as text.
pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Supply Chain & Logistics KPI Dashboard");
    let _ = writeln!(
        out,
        "Carrier: {}  |  Route: {}  |  {} shipments",
        String::from(view.selection.carrier.clone()),
        String::from(view.selection.route.clone()),
        view.record_count
    );

    section(&mut out, "Overall Performance");
    let kpis = &view.kpis.display;
    let _ = writeln!(out, "  On-Time Delivery Rate  {}", kpis.on_time_rate);
    let _ = writeln!(out, "  Avg. Delivery Time     {}", kpis.avg_delivery_days);
    let _ = writeln!(out, "  Avg. Shipping Cost     {}", kpis.avg_shipping_cost);

    section(&mut out, "On-Time Rate by Carrier");
    ranking(&mut out, &view.carrier_ranking, |v| format!("{:.0}%", v * 100.0));

    section(&mut out, "Top 10 Most Expensive Routes");
    ranking(&mut out, &view.route_cost_ranking, |v| format!("${:.2}", v));

    section(&mut out, "Delivery Time (Lateness) Distribution");
    histogram(&mut out, &view.histogram);

    section(&mut out, "Filtered Data Explorer");
    table(&mut out, view);

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "=".repeat(title.chars().count()));
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "█".repeat(len)
}

fn ranking(out: &mut String, view: &RankingView, fmt: impl Fn(f64) -> String) {
    match view {
        RankingView::Pinned { notice } => {
            let _ = writeln!(out, "  {}", notice);
        }
        RankingView::Ranking { rows } if rows.is_empty() => {
            let _ = writeln!(out, "  (no data)");
        }
        RankingView::Ranking { rows } => {
            let max = rows.iter().map(|r| r.value).fold(0.0, f64::max);
            let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
            for row in rows {
                let _ = writeln!(
                    out,
                    "  {:<width$}  {:>10}  {}",
                    row.label,
                    fmt(row.value),
                    bar(row.value, max),
                    width = label_width
                );
            }
        }
    }
}

fn histogram(out: &mut String, histogram: &Histogram) {
    if histogram.bins.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }

    let max = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    for b in &histogram.bins {
        let marker = if b.start == histogram.marker { "┆ On-Time" } else { "" };
        let range = if histogram.bin_width == 1 {
            format!("{}", b.start)
        } else {
            format!("{}..{}", b.start, b.end - 1)
        };
        let _ = writeln!(
            out,
            "  {:>12} {:>6}  {} {}",
            range,
            b.count,
            bar(b.count as f64, max),
            marker
        );
    }
    let _ = writeln!(out, "  Days (Negative = Early, Positive = Late)");
}

fn table(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "{}", INTERCHANGE_HEADER.join(","));
    for r in &view.records {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            r.estimated_delivery_date.format(DATE_FORMAT),
            r.actual_delivery_date.format(DATE_FORMAT),
            r.carrier_name,
            r.shipping_cost,
            r.destination_country,
            r.delivery_time_days,
            r.on_time,
            r.route
        );
    }
}
