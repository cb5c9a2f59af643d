//! Chart datasets derived from a filtered subset.
//!
//! - [`carrier_ranking`] - mean on-time rate per carrier, best first
//! - [`route_cost_ranking`] - mean shipping cost per route, top entries only
//! - [`Histogram`] - binned delivery times with a marker at zero

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filter::Selection;
use super::metrics::mean;
use crate::config::{MAX_HISTOGRAM_BINS, TOP_ROUTES};
use crate::models::CleanedShipmentRecord;

// =============================================================================
// Rankings
// =============================================================================

/// One bar of a ranking chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub label: String,
    pub value: f64,
}

/// A ranking chart, or the notice that replaces it when its own filter
/// is pinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RankingView {
    Ranking { rows: Vec<RankingRow> },
    Pinned { notice: String },
}

impl RankingView {
    fn pinned(value: &str) -> Self {
        RankingView::Pinned {
            notice: format!("Showing data for {} only.", value),
        }
    }

    pub fn rows(&self) -> &[RankingRow] {
        match self {
            RankingView::Ranking { rows } => rows,
            RankingView::Pinned { .. } => &[],
        }
    }
}

/// Group by `key`, average `metric`, sort descending.
///
/// Groups start in label order so that ties come out alphabetically.
fn rank_by<K, M>(subset: &[&CleanedShipmentRecord], key: K, metric: M) -> Vec<RankingRow>
where
    K: Fn(&CleanedShipmentRecord) -> &str,
    M: Fn(&CleanedShipmentRecord) -> f64,
{
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for &r in subset {
        groups.entry(key(r)).or_default().push(metric(r));
    }

    let mut rows: Vec<RankingRow> = groups
        .into_iter()
        .filter_map(|(label, values)| {
            mean(values).map(|value| RankingRow {
                label: label.to_string(),
                value,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

/// Mean on-time fraction (0..=1) per carrier, highest first.
pub fn carrier_ranking(subset: &[&CleanedShipmentRecord], carrier: &Selection) -> RankingView {
    match carrier.pinned() {
        Some(value) => RankingView::pinned(value),
        None => RankingView::Ranking {
            rows: rank_by(
                subset,
                |r| r.carrier_name.as_str(),
                |r| if r.on_time { 1.0 } else { 0.0 },
            ),
        },
    }
}

/// Mean shipping cost per route, most expensive first, at most
/// [`TOP_ROUTES`] entries.
pub fn route_cost_ranking(subset: &[&CleanedShipmentRecord], route: &Selection) -> RankingView {
    match route.pinned() {
        Some(value) => RankingView::pinned(value),
        None => {
            let mut rows = rank_by(subset, |r| r.route.as_str(), |r| r.shipping_cost);
            rows.truncate(TOP_ROUTES);
            RankingView::Ranking { rows }
        }
    }
}

// =============================================================================
// Histogram
// =============================================================================

/// Half-open bin `[start, end)` of delivery days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: i64,
    pub end: i64,
    pub count: usize,
}

/// Delivery-time distribution. Bin edges always include `marker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub bin_width: i64,
    pub bins: Vec<HistogramBin>,
    /// On-time boundary.
    pub marker: i64,
}

impl Histogram {
    pub fn compute(subset: &[&CleanedShipmentRecord]) -> Self {
        Self::from_values(subset.iter().map(|r| r.delivery_time_days), MAX_HISTOGRAM_BINS)
    }

    /// Bin integer values with the narrowest integer width that keeps the
    /// bin count within `max_bins`, edges aligned to multiples of the width.
    pub fn from_values(values: impl IntoIterator<Item = i64>, max_bins: usize) -> Self {
        let values: Vec<i64> = values.into_iter().collect();
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Self {
                bin_width: 1,
                bins: Vec::new(),
                marker: 0,
            };
        };

        let max_bins = max_bins.max(1) as i64;
        let span = max - min + 1;
        let mut width = ((span + max_bins - 1) / max_bins).max(1);
        let (start, count) = loop {
            let start = min.div_euclid(width) * width;
            let count = (max - start) / width + 1;
            if count <= max_bins {
                break (start, count);
            }
            width += 1;
        };

        let mut bins: Vec<HistogramBin> = (0..count)
            .map(|i| HistogramBin {
                start: start + i * width,
                end: start + (i + 1) * width,
                count: 0,
            })
            .collect();
        for v in values {
            bins[((v - start) / width) as usize].count += 1;
        }

        Self {
            bin_width: width,
            bins,
            marker: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
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

    #[test]
    fn test_carrier_ranking_sorted_descending() {
        let records = [
            record("Air", "Haiti", -1, 10.0),
            record("Air", "Haiti", 3, 10.0),
            record("Truck", "Zambia", 0, 10.0),
            record("Ocean", "Zambia", 4, 10.0),
        ];
        let subset: Vec<_> = records.iter().collect();

        let view = carrier_ranking(&subset, &Selection::All);
        let rows = view.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].label.as_str(), rows[0].value), ("Truck", 1.0));
        assert_eq!((rows[1].label.as_str(), rows[1].value), ("Air", 0.5));
        assert_eq!((rows[2].label.as_str(), rows[2].value), ("Ocean", 0.0));
    }

    #[test]
    fn test_pinned_filter_replaces_ranking_with_notice() {
        let records = [record("Air", "Haiti", 0, 10.0)];
        let subset: Vec<_> = records.iter().collect();

        let view = carrier_ranking(&subset, &Selection::Only("Air".into()));
        assert_eq!(
            view,
            RankingView::Pinned {
                notice: "Showing data for Air only.".into()
            }
        );
        assert!(view.rows().is_empty());

        let view = route_cost_ranking(&subset, &Selection::Only("Haiti".into()));
        assert!(matches!(view, RankingView::Pinned { ref notice } if notice.contains("Haiti")));
    }

    #[test]
    fn test_route_cost_ranking_top_ten_non_increasing() {
        let records: Vec<_> = (0..15)
            .map(|i| record("Air", &format!("Country {:02}", i), 0, (i * 37 % 15) as f64 * 10.0))
            .collect();
        let subset: Vec<_> = records.iter().collect();

        let view = route_cost_ranking(&subset, &Selection::All);
        let rows = view.rows();
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(rows[0].value, 140.0);
    }

    #[test]
    fn test_ranking_of_empty_subset_is_empty() {
        let view = route_cost_ranking(&[], &Selection::All);
        assert_eq!(view, RankingView::Ranking { rows: vec![] });
    }

    #[test]
    fn test_ranking_serialization_shape() {
        let json = serde_json::to_value(RankingView::Pinned { notice: "x".into() }).unwrap();
        assert_eq!(json["kind"], "pinned");
        let json = serde_json::to_value(RankingView::Ranking { rows: vec![] }).unwrap();
        assert_eq!(json["kind"], "ranking");
    }

    #[test]
    fn test_histogram_unit_bins() {
        let h = Histogram::from_values([-2, 0, 0, 5], 40);
        assert_eq!(h.bin_width, 1);
        assert_eq!(h.bins.first().unwrap().start, -2);
        assert_eq!(h.bins.last().unwrap().start, 5);
        assert_eq!(h.bins.len(), 8);
        let zero = h.bins.iter().find(|b| b.start == 0).unwrap();
        assert_eq!(zero.count, 2);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn test_histogram_wide_range_keeps_zero_edge() {
        let h = Histogram::from_values([-95, -3, 0, 7, 230], 40);
        assert!(h.bins.len() <= 40);
        assert!(h.bin_width > 1);
        assert!(h.bins.iter().any(|b| b.start == 0));
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn test_histogram_empty() {
        let h = Histogram::from_values(Vec::new(), 40);
        assert!(h.bins.is_empty());
        assert_eq!(h.marker, 0);
    }
}
