//! Bar charts for the two rankings and the delivery-time histogram.
//!
//! Bars are plain CSS widths/heights; no charting library is involved.

use leptos::*;

use crate::types::{Histogram, RankingView};

/// Bar length in percent of the longest bar.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Axis label of an on-time rate stored as a fraction.
pub fn format_rate(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

pub fn format_cost(value: f64) -> String {
    format!("${:.2}", value)
}

/// Label of a histogram bin.
pub fn bin_label(start: i64, end: i64) -> String {
    if end - start == 1 {
        start.to_string()
    } else {
        format!("{} to {}", start, end - 1)
    }
}

#[component]
pub fn RankingChart(
    title: &'static str,
    caption: &'static str,
    ranking: RankingView,
    format: fn(f64) -> String,
) -> impl IntoView {
    let body = match ranking {
        RankingView::Pinned { notice } => view! { <p class="chart-notice">{notice}</p> }.into_view(),
        RankingView::Ranking { rows } if rows.is_empty() => {
            view! { <p class="chart-notice">"No shipments match the current filters."</p> }.into_view()
        }
        RankingView::Ranking { rows } => {
            let max = rows.iter().map(|r| r.value).fold(0.0, f64::max);
            rows.into_iter()
                .map(|row| {
                    let width = format!("width: {:.1}%", bar_percent(row.value, max));
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{row.label}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style=width></div>
                            </div>
                            <span class="bar-value">{format(row.value)}</span>
                        </div>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <div class="chart">
            <h3>{title}</h3>
            <div class="chart-caption">{caption}</div>
            {body}
        </div>
    }
}

#[component]
pub fn HistogramChart(histogram: Histogram) -> impl IntoView {
    if histogram.bins.is_empty() {
        return view! {
            <div class="chart">
                <p class="chart-notice">"No shipments match the current filters."</p>
            </div>
        }
        .into_view();
    }

    let max = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let marker = histogram.marker;
    let columns = histogram
        .bins
        .into_iter()
        .map(|bin| {
            let height = format!("height: {:.1}%", bar_percent(bin.count as f64, max));
            let is_marker = bin.start == marker;
            let title = format!("{}: {} shipments", bin_label(bin.start, bin.end), bin.count);
            view! {
                <div class="hist-col" class:hist-marker=is_marker title=title>
                    <div class="hist-bar" style=height></div>
                    {is_marker.then(|| view! { <span class="hist-marker-label">"On-Time"</span> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart-caption">"Distribution of Delivery Times (0 = On-Time)"</div>
            <div class="hist">{columns}</div>
            <div class="hist-axis">"Days (Negative = Early, Positive = Late)"</div>
        </div>
    }
    .into_view()
}
