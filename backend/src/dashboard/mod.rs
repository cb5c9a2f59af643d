//! Presentation engine: filter, aggregate, chart.
//!
//! Every view is recomputed from scratch from the filtered subset. The
//! HTTP API, the terminal report and the frontend all consume the same
//! [`DashboardView`].
//!
//! ```text
//! Dataset ──▶ FilterState::apply ──▶ subset ──┬─▶ KpiSummary
//!                                            ├─▶ carrier_ranking
//!                                            ├─▶ route_cost_ranking
//!                                            ├─▶ Histogram
//!                                            └─▶ records (table)
//! ```

pub mod filter;
pub mod metrics;
pub mod views;

use serde::{Deserialize, Serialize};

use crate::cache::Dataset;
use crate::models::CleanedShipmentRecord;

pub use filter::{FilterOptions, FilterState, Selection};
pub use metrics::{mean, KpiDisplay, KpiSummary};
pub use views::{
    carrier_ranking, route_cost_ranking, Histogram, HistogramBin, RankingRow, RankingView,
};

/// KPI values with their card text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCards {
    #[serde(flatten)]
    pub values: KpiSummary,
    pub display: KpiDisplay,
}

/// Everything the dashboard shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub selection: FilterState,
    pub record_count: usize,
    pub kpis: KpiCards,
    pub carrier_ranking: RankingView,
    pub route_cost_ranking: RankingView,
    pub histogram: Histogram,
    /// The filtered subset, in dataset order.
    pub records: Vec<CleanedShipmentRecord>,
}

/// Compute every view for `selection`.
///
/// The selection is not validated here; an unknown value simply yields
/// an empty subset.
pub fn build_dashboard(dataset: &Dataset, selection: &FilterState) -> DashboardView {
    let subset = selection.apply(dataset.records());
    let kpis = KpiSummary::compute(&subset);

    DashboardView {
        selection: selection.clone(),
        record_count: subset.len(),
        kpis: KpiCards {
            display: kpis.display(),
            values: kpis,
        },
        carrier_ranking: carrier_ranking(&subset, &selection.carrier),
        route_cost_ranking: route_cost_ranking(&subset, &selection.route),
        histogram: Histogram::compute(&subset),
        records: subset.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(carrier: &str, route: &str, days: i64, cost: f64) -> CleanedShipmentRecord {
        let est = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
        CleanedShipmentRecord {
            estimated_delivery_date: est,
            actual_delivery_date: est + chrono::Duration::days(days),
            carrier_name: carrier.into(),
            shipping_cost: cost,
            destination_country: route.into(),
            delivery_time_days: days,
            on_time: days <= 0,
            route: route.into(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Air", "Haiti", -2, 100.0),
            record("Truck", "Zambia", 5, 300.0),
            record("Air", "Zambia", 0, 200.0),
        ])
    }

    #[test]
    fn test_unfiltered_dashboard() {
        let view = build_dashboard(&dataset(), &FilterState::default());

        assert_eq!(view.record_count, 3);
        assert_eq!(view.records.len(), 3);
        assert_eq!(view.kpis.values.avg_shipping_cost, Some(200.0));
        assert_eq!(view.carrier_ranking.rows().len(), 2);
        assert_eq!(view.route_cost_ranking.rows()[0].label, "Zambia");
        assert_eq!(view.histogram.total(), 3);
    }

    #[test]
    fn test_pinned_carrier_suppresses_only_carrier_ranking() {
        let selection = FilterState::new(Selection::Only("Air".into()), Selection::All);
        let view = build_dashboard(&dataset(), &selection);

        assert_eq!(view.record_count, 2);
        assert!(matches!(view.carrier_ranking, RankingView::Pinned { .. }));
        assert!(matches!(view.route_cost_ranking, RankingView::Ranking { .. }));
        assert_eq!(view.kpis.display.on_time_rate, "100.00%");
    }

    #[test]
    fn test_empty_subset_does_not_panic() {
        let selection = FilterState::new(
            Selection::Only("Truck".into()),
            Selection::Only("Haiti".into()),
        );
        let view = build_dashboard(&dataset(), &selection);

        assert_eq!(view.record_count, 0);
        assert_eq!(view.kpis.display.avg_delivery_days, "N/A");
        assert!(view.histogram.bins.is_empty());
        assert!(view.records.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let view = build_dashboard(&dataset(), &FilterState::default());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["recordCount"], 3);
        assert_eq!(json["selection"]["carrier"], "All");
        assert!(json["kpis"]["onTimeRate"].is_number());
        assert_eq!(json["kpis"]["display"]["avgShippingCost"], "$200.00");
        assert_eq!(json["carrierRanking"]["kind"], "ranking");
        assert_eq!(json["histogram"]["marker"], 0);
        assert_eq!(json["records"][0]["on_time"], true);
        assert_eq!(json["records"][0]["estimated_delivery_date"], "2020-01-10");
    }

    #[test]
    fn test_empty_kpis_serialize_as_null() {
        let selection = FilterState::new(
            Selection::Only("Truck".into()),
            Selection::Only("Haiti".into()),
        );
        let json = serde_json::to_value(build_dashboard(&dataset(), &selection)).unwrap();
        assert!(json["kpis"]["onTimeRate"].is_null());
        assert_eq!(json["kpis"]["display"]["onTimeRate"], "N/A");
    }
}
