mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use prorator::routes::build_router;

fn server() -> (TestServer, tempfile::TempDir) {
    let (state, dir) = common::create_test_state();
    (TestServer::new(build_router(state)).unwrap(), dir)
}

#[tokio::test]
async fn test_index_links_both_calculators() {
    let (server, _dir) = server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("href=\"/prorate\""));
    assert!(html.contains("href=\"/estimate\""));
}

#[tokio::test]
async fn test_prorate_form_defaults() {
    let (server, _dir) = server();

    let response = server.get("/prorate").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"monthly_rent\""));
    assert!(html.contains("value=\"1750\""));
    assert!(html.contains("value=\"18\""));
    assert!(!html.contains("Prorated rent owed"));
}

#[tokio::test]
async fn test_prorate_form_clamps_default_day() {
    let (server, _dir) = server();

    let response = server
        .get("/prorate")
        .add_query_param("year", 2025)
        .add_query_param("month", 2)
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Move-in Day (1–28)"));
}

#[tokio::test]
async fn test_prorate_submit_shows_results() {
    let (server, _dir) = server();

    let response = server
        .post("/prorate")
        .form(&[
            ("monthly_rent", "1750"),
            ("year", "2026"),
            ("month", "1"),
            ("move_in_day", "18"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("January 2026"));
    assert!(html.contains("$56.45"));
    assert!(html.contains("$790.32"));
    assert!(html.contains("Prorated rent owed"));
}

#[tokio::test]
async fn test_prorate_submit_bad_day() {
    let (server, _dir) = server();

    let response = server
        .post("/prorate")
        .form(&[
            ("monthly_rent", "1750"),
            ("year", "2025"),
            ("month", "4"),
            ("move_in_day", "31"),
        ])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("Move-in day must be between 1 and 30 for that month."));
    assert!(!html.contains("Prorated rent owed"));
}

#[tokio::test]
async fn test_prorate_submit_day_zero() {
    let (server, _dir) = server();

    let response = server
        .post("/prorate")
        .form(&[
            ("monthly_rent", "1750"),
            ("year", "2026"),
            ("month", "1"),
            ("move_in_day", "0"),
        ])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("Move-in day must be between 1 and 31 for that month."));
    assert!(!html.contains("Move-in day must be at least 1"));
}

#[tokio::test]
async fn test_prorate_page_day_input_not_bounded_by_month() {
    let (server, _dir) = server();

    let response = server
        .post("/prorate")
        .form(&[
            ("monthly_rent", "1750"),
            ("year", "2025"),
            ("month", "2"),
            ("move_in_day", "10"),
        ])
        .await;

    response.assert_status_ok();
    assert!(!response.text().contains("max=\"28\""));
}

#[tokio::test]
async fn test_estimate_form_defaults() {
    let (server, _dir) = server();

    let response = server.get("/estimate").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"sqft\""));
    assert!(html.contains("value=\"19000\""));
    assert!(!html.contains("Estimated Annual Pricing"));
}

#[tokio::test]
async fn test_estimate_submit_shows_totals() {
    let (server, _dir) = server();

    let response = server
        .post("/estimate")
        .form(&[
            ("project", "Oak Terrace"),
            ("address", "12 Elm St"),
            ("sqft", "19000"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Estimated Annual Pricing"));
    assert!(html.contains("$3,100.00"));
    assert!(html.contains("$4,650.50"));
    assert!(html.contains("$12,400.00"));
    assert!(html.contains("value=\"Oak Terrace\""));
}

#[tokio::test]
async fn test_estimate_submit_small_property() {
    let (server, _dir) = server();

    let response = server
        .post("/estimate")
        .form(&[("project", ""), ("address", ""), ("sqft", "500")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let html = response.text();
    assert!(html.contains("Square footage must be at least 1000"));
    assert!(!html.contains("Estimated Annual Pricing"));
}

#[tokio::test]
async fn test_estimate_submit_missing_template() {
    let (state, _dir) = common::create_missing_template_state();
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/estimate")
        .form(&[("project", "Oak"), ("address", ""), ("sqft", "19000")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Error calculating estimate:"));
}

#[tokio::test]
async fn test_api_routes_nested() {
    let (server, _dir) = server();

    let response = server
        .post("/api/prorate")
        .json(&serde_json::json!({
            "monthly_rent": 3000.0,
            "year": 2026,
            "month": 4,
            "move_in_day": 16
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["prorated_rent_display"], "$1,500.00");
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let (server, _dir) = server();

    server.get("/static/style.css").await.assert_status_ok();
}
