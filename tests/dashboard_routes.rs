//! End-to-end exercises of the dashboard router with an in-memory dataset.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use trade_lens::data::model::{TradeDataset, TradeRecord};
use trade_lens::http::routes::{dashboard_routes, health_routes, DashboardState};

fn record(
    country: &str,
    region: &str,
    income_group: &str,
    year: i64,
    value: Option<f64>,
) -> TradeRecord {
    TradeRecord {
        country: country.to_string(),
        indicator: "Trade share".to_string(),
        region: region.to_string(),
        income_group: income_group.to_string(),
        year,
        value,
    }
}

fn sample_dataset() -> TradeDataset {
    TradeDataset::from_records(vec![
        record("Chile", "Latin America", "High income", 1995, Some(50.0)),
        record("Chile", "Latin America", "High income", 1996, Some(54.0)),
        record("Chile", "Latin America", "High income", 1997, None),
        record("Chile", "Latin America", "High income", 2001, Some(60.0)),
        record("Kenya", "Sub-Saharan Africa", "Lower middle income", 1995, Some(40.0)),
        record("Kenya", "Sub-Saharan Africa", "Lower middle income", 1996, Some(44.0)),
    ])
}

fn router() -> Router {
    health_routes().merge(dashboard_routes(Arc::new(DashboardState {
        dataset: sample_dataset(),
    })))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn index_lists_dimension_values() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    for value in ["Chile", "Kenya", "Trade share", "Latin America", "High income"] {
        assert!(html.contains(value), "index page missing {value}");
    }
}

#[tokio::test]
async fn country_trend_returns_a_chart() {
    let response = router()
        .oneshot(form_post(
            "/cnt_trade_plot",
            "country=Chile&indicator=Trade+share",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<svg"));
    assert!(html.contains("Trade value for Chile"));
}

#[tokio::test]
async fn decade_plot_returns_a_chart_for_known_pair() {
    let response = router()
        .oneshot(form_post(
            "/decade_plot",
            "country_decade=Chile&indicator_decade=Trade+share",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<svg"));
    assert!(html.contains("by decade"));
}

#[tokio::test]
async fn decade_plot_unknown_pair_shows_error_page() {
    let response = router()
        .oneshot(form_post(
            "/decade_plot",
            "country_decade=Atlantis&indicator_decade=Trade+share",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No data available for the selected country and indicator."));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn region_trend_returns_a_chart() {
    let response = router()
        .oneshot(form_post(
            "/region_year_plot",
            "region_year=Sub-Saharan+Africa&indicator_year=Trade+share",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<svg"));
}

#[tokio::test]
async fn income_trend_unknown_group_shows_error_page() {
    let response = router()
        .oneshot(form_post(
            "/income_year_plot",
            "income_year=No+such+group&indicator_year=Trade+share",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No data available for the selected income group and indicator."));
}

#[tokio::test]
async fn missing_form_field_is_rejected() {
    let response = router()
        .oneshot(form_post("/cnt_trade_plot", "country=Chile"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}
