//! Aggregate KPIs over a filtered subset.

use serde::{Deserialize, Serialize};

use crate::config::KPI_PLACEHOLDER;
use crate::models::CleanedShipmentRecord;

/// Arithmetic mean; `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Headline KPIs. Every value is `None` when the subset is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Share of on-time shipments, in percent.
    pub on_time_rate: Option<f64>,
    pub avg_delivery_days: Option<f64>,
    pub avg_shipping_cost: Option<f64>,
}

impl KpiSummary {
    pub fn compute(subset: &[&CleanedShipmentRecord]) -> Self {
        Self {
            on_time_rate: mean(subset.iter().map(|r| if r.on_time { 1.0 } else { 0.0 }))
                .map(|rate| rate * 100.0),
            avg_delivery_days: mean(subset.iter().map(|r| r.delivery_time_days as f64)),
            avg_shipping_cost: mean(subset.iter().map(|r| r.shipping_cost)),
        }
    }

    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            on_time_rate: format_or_placeholder(self.on_time_rate, |v| format!("{:.2}%", v)),
            avg_delivery_days: format_or_placeholder(self.avg_delivery_days, |v| {
                format!("{:.1} days", v)
            }),
            avg_shipping_cost: format_or_placeholder(self.avg_shipping_cost, |v| {
                format!("${:.2}", v)
            }),
        }
    }
}

/// KPI values formatted for the cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDisplay {
    pub on_time_rate: String,
    pub avg_delivery_days: String,
    pub avg_shipping_cost: String,
}

fn format_or_placeholder(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    match value {
        Some(v) if v.is_finite() => fmt(v),
        _ => KPI_PLACEHOLDER.to_string(),
    }
}
