//! Dashboard HTTP routes.
//!
//! Route paths and form field names are the dashboard's wire format:
//!
//! - `GET  /`                 - dimension selection forms
//! - `POST /cnt_trade_plot`   - line plot of trade value over years
//! - `POST /decade_plot`      - bar plot of mean trade value per decade
//! - `POST /region_year_plot` - yearly mean across a region
//! - `POST /income_year_plot` - yearly mean across an income group
//! - `GET  /health`           - liveness probe

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::chart::{bar_chart, line_chart, ChartError, Series};
use crate::data::model::TradeDataset;
use crate::data::{aggregate, filter};

use super::pages;

/// Shared, read-only request state: the table loaded at startup.
pub struct DashboardState {
    pub dataset: TradeDataset,
}

/// Create the dashboard routes.
pub fn dashboard_routes(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cnt_trade_plot", post(country_trend))
        .route("/decade_plot", post(decade_summary))
        .route("/region_year_plot", post(region_trend))
        .route("/income_year_plot", post(income_trend))
        .with_state(state)
}

/// Create the health-check routes.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

// ---------------------------------------------------------------------------
// Request bodies (form-encoded, two fields each)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CountryTrendRequest {
    pub country: String,
    pub indicator: String,
}

#[derive(Debug, Deserialize)]
pub struct DecadeSummaryRequest {
    pub country_decade: String,
    pub indicator_decade: String,
}

#[derive(Debug, Deserialize)]
pub struct RegionTrendRequest {
    pub region_year: String,
    pub indicator_year: String,
}

#[derive(Debug, Deserialize)]
pub struct IncomeTrendRequest {
    pub income_year: String,
    pub indicator_year: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index(State(state): State<Arc<DashboardState>>) -> Html<String> {
    Html(pages::index_page(&state.dataset))
}

async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Trade value over the years for one country and indicator.
/// An empty selection renders as an empty chart.
async fn country_trend(
    State(state): State<Arc<DashboardState>>,
    Form(req): Form<CountryTrendRequest>,
) -> Html<String> {
    let dataset = &state.dataset;
    let indices = filter::by_country_indicator(dataset, &req.country, &req.indicator);
    let points = aggregate::year_series(&dataset.records, &indices);
    log::info!(
        "country trend: {} / {} -> {} points",
        req.country,
        req.indicator,
        points.len()
    );

    let title = format!("Trade value for {} ({})", req.country, req.indicator);
    let series = [Series {
        name: req.country.clone(),
        points,
    }];
    chart_response(&title, line_chart(&title, "Year", "Trade value (%)", &series))
}

/// Mean trade value per decade; rows without a value are excluded. When the
/// aggregation comes back empty, the error page is returned instead.
async fn decade_summary(
    State(state): State<Arc<DashboardState>>,
    Form(req): Form<DecadeSummaryRequest>,
) -> Html<String> {
    let dataset = &state.dataset;
    let indices = filter::by_country_indicator(dataset, &req.country_decade, &req.indicator_decade);
    let bars = aggregate::mean_by_decade(&dataset.records, &indices);
    log::info!(
        "decade summary: {} / {} -> {} decades",
        req.country_decade,
        req.indicator_decade,
        bars.len()
    );

    if bars.is_empty() {
        return Html(pages::error_page(
            "No data available for the selected country and indicator.",
        ));
    }

    let title = format!(
        "Trade value for {} ({}) by decade",
        req.country_decade, req.indicator_decade
    );
    chart_response(&title, bar_chart(&title, "Decade", "Trade value (%)", &bars))
}

/// Yearly mean across one region. An empty selection renders as an empty
/// chart.
async fn region_trend(
    State(state): State<Arc<DashboardState>>,
    Form(req): Form<RegionTrendRequest>,
) -> Html<String> {
    let dataset = &state.dataset;
    let indices = filter::by_region_indicator(dataset, &req.region_year, &req.indicator_year);
    let points = aggregate::mean_by_year(&dataset.records, &indices);
    log::info!(
        "region trend: {} / {} -> {} years",
        req.region_year,
        req.indicator_year,
        points.len()
    );

    let title = format!(
        "Trade value by region for {} over years",
        req.indicator_year
    );
    let series = [Series {
        name: req.region_year.clone(),
        points,
    }];
    chart_response(&title, line_chart(&title, "Year", "Trade value (%)", &series))
}

/// Yearly mean across one income group, with the empty-selection guard.
async fn income_trend(
    State(state): State<Arc<DashboardState>>,
    Form(req): Form<IncomeTrendRequest>,
) -> Html<String> {
    let dataset = &state.dataset;
    let indices = filter::by_income_indicator(dataset, &req.income_year, &req.indicator_year);
    let points = aggregate::mean_by_year(&dataset.records, &indices);
    log::info!(
        "income trend: {} / {} -> {} years",
        req.income_year,
        req.indicator_year,
        points.len()
    );

    if points.is_empty() {
        return Html(pages::error_page(
            "No data available for the selected income group and indicator.",
        ));
    }

    let title = format!(
        "Trade value by income group for {} over years",
        req.indicator_year
    );
    let series = [Series {
        name: req.income_year.clone(),
        points,
    }];
    chart_response(&title, line_chart(&title, "Year", "Trade value (%)", &series))
}

/// Embed a rendered chart, or fall back to the error page if the backend
/// failed to draw.
fn chart_response(title: &str, rendered: Result<String, ChartError>) -> Html<String> {
    match rendered {
        Ok(svg) => Html(pages::chart_page(title, &svg)),
        Err(e) => {
            log::error!("rendering '{title}' failed: {e}");
            Html(pages::error_page("Failed to render the chart."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }

    #[test]
    fn chart_response_falls_back_to_error_page() {
        let html = chart_response("t", Err(ChartError::Backend("boom".to_string())));
        assert!(html.0.contains("Failed to render the chart."));
    }
}
