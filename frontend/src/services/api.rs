//! HTTP client for the dashboard API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::ALL;
use crate::types::{ApiErrorBody, AppError, AppResult, DashboardView, FilterOptions};

/// Fetch the selector choices.
pub async fn fetch_filters(backend_url: &str) -> AppResult<FilterOptions> {
    let url = format!("{}/api/filters", backend_url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_json(response).await
}

/// Fetch every dashboard view for one selection.
pub async fn fetch_dashboard(
    backend_url: &str,
    carrier: &str,
    route: &str,
) -> AppResult<DashboardView> {
    let url = format!("{}/api/dashboard", backend_url);
    let response = Request::get(&url)
        .query(query_params(carrier, route))
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_json(response).await
}

/// Query pairs for a selection. `"All"` is the server default and is
/// left out.
pub fn query_params<'a>(carrier: &'a str, route: &'a str) -> Vec<(&'static str, &'a str)> {
    [("carrier", carrier), ("route", route)]
        .into_iter()
        .filter(|(_, v)| !v.is_empty() && *v != ALL)
        .collect()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        return Err(AppError::Server { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_omitted() {
        assert!(query_params("All", "All").is_empty());
        assert_eq!(query_params("Air", "All"), vec![("carrier", "Air")]);
        assert_eq!(
            query_params("Truck", "Côte d'Ivoire"),
            vec![("carrier", "Truck"), ("route", "Côte d'Ivoire")]
        );
    }
}
