//! End-to-end: raw export → transform stage → cache → dashboard and API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use shiptrack::server::build_router;
use shiptrack::{
    build_dashboard, run_etl_with_log, DatasetCache, EtlConfig, FilterState, ProgressLog,
    Selection,
};
use tempfile::tempdir;
use tower::ServiceExt;

const RAW: &str = "\
ID,Project Code,Country,Shipment Mode,Scheduled Delivery Date,Delivered to Client Date,Freight Cost (USD)
1,100-CI-T01,Haiti,Air,2-Jun-06,31-May-06,780.34
2,108-VN-T01,Vietnam,Air,14-Nov-06,14-Nov-06,4521.5
3,100-CI-T01,Haiti,Truck,27-Aug-06,2-Sep-06,1653.78
4,108-VN-T01,Vietnam,Ocean,1-Sep-06,11-Aug-06,Freight Included in Commodity Cost
5,100-ZM-T01,Zambia,,10-Oct-06,12-Oct-06,300
6,100-ZM-T01,Zambia,Truck,10-Oct-06,20-Oct-06,500
";

fn run_transform(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("supply_data.csv");
    let output = dir.join("analytics_data.csv");
    fs::write(&input, RAW).unwrap();

    let config = EtlConfig {
        input_path: input,
        output_path: output.clone(),
        preview_rows: 5,
    };
    let report = run_etl_with_log(&config, ProgressLog::silent()).unwrap();
    assert_eq!(report.input_rows, 6);
    assert_eq!(report.output_rows, 4);
    assert_eq!(report.dropped_rows, 2);
    output
}

async fn get_json(cache: Arc<DatasetCache>, uri: &str) -> (StatusCode, Value) {
    let response = build_router(cache, None)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_transform_then_dashboard() {
    let dir = tempdir().unwrap();
    let output = run_transform(dir.path());

    let cache = DatasetCache::new(&output);
    let dataset = cache.get().unwrap();
    assert_eq!(dataset.carriers(), ["Air", "Truck"]);
    assert_eq!(dataset.routes(), ["Haiti", "Vietnam", "Zambia"]);

    let all = build_dashboard(dataset, &FilterState::default());
    assert_eq!(all.record_count, 4);
    // Haiti/Air -2, Vietnam/Air 0, Haiti/Truck 6, Zambia/Truck 10
    assert_eq!(all.kpis.display.on_time_rate, "50.00%");
    assert_eq!(all.kpis.display.avg_delivery_days, "3.5 days");
    assert_eq!(all.route_cost_ranking.rows()[0].label, "Vietnam");

    let truck = build_dashboard(
        dataset,
        &FilterState::new(Selection::Only("Truck".into()), Selection::All),
    );
    assert_eq!(truck.record_count, 2);
    assert!(truck.records.iter().all(|r| r.carrier_name == "Truck"));
    assert_eq!(truck.kpis.display.on_time_rate, "0.00%");

    // Every pinned pair yields exactly the matching rows.
    for carrier in dataset.carriers() {
        for route in dataset.routes() {
            let view = build_dashboard(
                dataset,
                &FilterState::new(Selection::Only(carrier.clone()), Selection::Only(route.clone())),
            );
            let expected = dataset
                .records()
                .iter()
                .filter(|r| &r.carrier_name == carrier && &r.route == route)
                .count();
            assert_eq!(view.record_count, expected);
        }
    }
}

#[tokio::test]
async fn test_api_endpoints() {
    let dir = tempdir().unwrap();
    let output = run_transform(dir.path());
    let cache = Arc::new(DatasetCache::new(&output));

    let (status, health) = get_json(cache.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["records"], 4);

    let (status, filters) = get_json(cache.clone(), "/api/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filters["carriers"][0], "All");
    assert_eq!(filters["routes"].as_array().unwrap().len(), 4);

    let (status, view) = get_json(cache.clone(), "/api/dashboard?carrier=Air").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["recordCount"], 2);
    assert_eq!(view["carrierRanking"]["kind"], "pinned");
    assert_eq!(view["carrierRanking"]["notice"], "Showing data for Air only.");
    assert_eq!(view["kpis"]["display"]["onTimeRate"], "100.00%");

    let (status, body) = get_json(cache.clone(), "/api/dashboard?route=Atlantis").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_missing_artifact_is_server_error() {
    let dir = tempdir().unwrap();
    let cache = Arc::new(DatasetCache::new(dir.path().join("analytics_data.csv")));

    let (status, body) = get_json(cache, "/api/filters").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}
