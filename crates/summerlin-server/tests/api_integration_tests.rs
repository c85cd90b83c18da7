//! Integration tests for the Summerlin Server API endpoints.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use summerlin_leads::{LeadError, LeadRecord, LeadResult, LeadSink, MemoryLeadSink};
use summerlin_listings::InMemoryListingStore;
use summerlin_server::routes::{create_router, create_router_with_stores};
use summerlin_server::ServerConfig;

fn app() -> axum::Router {
    create_router(ServerConfig::default())
}

fn app_with_sink(sink: MemoryLeadSink) -> axum::Router {
    create_router_with_stores(
        ServerConfig::default(),
        Arc::new(InMemoryListingStore::seeded()),
        Arc::new(sink),
    )
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

fn assert_money(value: &Value, expected: f64) {
    let actual = value.as_f64().unwrap();
    assert!((actual - expected).abs() < 1e-6, "expected {expected}, got {actual}");
}

fn contact_body(email: &str) -> Value {
    json!({
        "name": "Jordan Lee",
        "email": email,
        "phone": "702-555-0199",
        "preferred_contact": "phone",
        "message": "Can we tour this weekend?",
        "listing_id": "1"
    })
}

// =============================================================================
// HEALTH CHECK TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());

    let (status, _) = get_json(app(), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// MORTGAGE TESTS
// =============================================================================

#[tokio::test]
async fn test_payment_endpoint() {
    let body = json!({ "loan_amount": 800000.0, "interest_rate": 6.5, "loan_term_years": 30 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/payment", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json["monthly_payment"], 5056.54);
}

#[tokio::test]
async fn test_payment_zero_rate() {
    let body = json!({ "loan_amount": 360000.0, "interest_rate": 0.0, "loan_term_years": 30 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/payment", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json["monthly_payment"], 1000.0);
}

#[tokio::test]
async fn test_payment_rejects_bad_term() {
    let body = json!({ "loan_amount": 800000.0, "interest_rate": 6.5, "loan_term_years": 0 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/payment", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_payment_rejects_negative_rate() {
    let body = json!({ "loan_amount": 800000.0, "interest_rate": -1.0, "loan_term_years": 30 });
    let (status, _) = post_json(app(), "/api/v1/mortgage/payment", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_breakdown_defaults() {
    let (status, json) = post_json(app(), "/api/v1/mortgage/breakdown", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json["principal_and_interest"], 5056.54);
    assert_money(&json["tax"], 666.67);
    assert_money(&json["insurance"], 200.0);
    assert_money(&json["hoa"], 300.0);
}

#[tokio::test]
async fn test_yearly_schedule() {
    let body = json!({ "loan_amount": 800000.0, "interest_rate": 6.5, "loan_term_years": 30 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/schedule", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["granularity"], "yearly");
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[0]["year"], 1);
    assert!(entries[0]["interest_paid"].as_f64().unwrap() > entries[0]["principal_paid"].as_f64().unwrap());
    assert!(entries[29]["remaining_balance"].as_f64().unwrap() < 1.0);
}

#[tokio::test]
async fn test_monthly_schedule() {
    let body = json!({
        "loan_amount": 300000.0,
        "interest_rate": 6.0,
        "loan_term_years": 15,
        "granularity": "monthly"
    });
    let (status, json) = post_json(app(), "/api/v1/mortgage/schedule", body).await;

    assert_eq!(status, StatusCode::OK);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 180);
    assert_eq!(entries[0]["month"], 1);
    assert_money(&entries[0]["payment"], 2531.57);
}

#[tokio::test]
async fn test_long_term_schedule() {
    let body = json!({ "loan_amount": 500000.0, "interest_rate": 5.0, "loan_term_years": 40 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/schedule", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["entries"].as_array().unwrap().len(), 40);
}

#[tokio::test]
async fn test_quote_defaults() {
    let (status, json) = post_json(app(), "/api/v1/mortgage/quote", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json["loan_amount"], 800000.0);
    assert_money(&json["down_payment_percent"], 20.0);
    assert_eq!(json["schedule"].as_array().unwrap().len(), 30);
    assert_eq!(json["payoff_months"], 360);
    let total_interest = json["total_interest"].as_f64().unwrap();
    let total_cost = json["total_cost"].as_f64().unwrap();
    assert!((total_cost - (1_000_000.0 + total_interest)).abs() < 0.02);
}

#[tokio::test]
async fn test_quote_overrides() {
    let body = json!({ "home_price": 750000.0, "down_payment_percent": 100.0 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/quote", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&json["loan_amount"], 0.0);
    assert_money(&json["breakdown"]["principal_and_interest"], 0.0);
    assert_money(&json["total_cost"], 750000.0);
}

#[tokio::test]
async fn test_quote_rejects_down_payment_above_price() {
    let body = json!({ "home_price": 400000.0, "down_payment": 500000.0 });
    let (status, json) = post_json(app(), "/api/v1/mortgage/quote", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("down_payment"));
}

#[tokio::test]
async fn test_quote_uses_configured_defaults() {
    let config = ServerConfig::from_toml("[calculator_defaults]\nloan_term_years = 15").unwrap();
    let (status, json) = post_json(create_router(config), "/api/v1/mortgage/quote", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["schedule"].as_array().unwrap().len(), 15);
}

// =============================================================================
// LISTING TESTS
// =============================================================================

#[tokio::test]
async fn test_list_listings() {
    let (status, json) = get_json(app(), "/api/v1/listings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["limit"], 50);
    assert_eq!(json["offset"], 0);
    let listings = json["listings"].as_array().unwrap();
    assert_eq!(listings[0]["price"], 3200000);
    assert_eq!(listings[0]["village"], "Red Rock Country Club");
}

#[tokio::test]
async fn test_list_listings_filtered() {
    let uri = "/api/v1/listings?min_beds=5&property_type=luxury-estate&features=golf";
    let (status, json) = get_json(app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);

    let uri = "/api/v1/listings?village=The%20Summit";
    let (_, json) = get_json(app(), uri).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["listings"][0]["mls"], "2418449");
}

#[tokio::test]
async fn test_list_listings_text_search() {
    let (status, json) = get_json(app(), "/api/v1/listings?text=golf%20club%20dr").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);

    // `q` is the short form of `text`.
    let (status, json) = get_json(app(), "/api/v1/listings?q=2418449").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["listings"][0]["village"], "The Summit");

    let (_, json) = get_json(app(), "/api/v1/listings?text=%20").await;
    assert_eq!(json["total"], 4);
}

#[tokio::test]
async fn test_list_listings_available_only() {
    let (status, json) = get_json(app(), "/api/v1/listings?available=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 3);
    let statuses: Vec<&str> = json["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["status"].as_str().unwrap())
        .collect();
    assert!(statuses.iter().all(|s| *s == "for-sale"));
}

#[tokio::test]
async fn test_list_listings_pagination() {
    let (status, json) = get_json(app(), "/api/v1/listings?limit=1&offset=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["listings"].as_array().unwrap().len(), 1);
    assert_eq!(json["listings"][0]["id"], "1");
}

#[tokio::test]
async fn test_list_listings_limit_capped() {
    let (_, json) = get_json(app(), "/api/v1/listings?limit=10000").await;
    assert_eq!(json["limit"], 200);
}

#[tokio::test]
async fn test_list_listings_bad_filter() {
    let (status, json) = get_json(app(), "/api/v1/listings?min_price=3000000&max_price=1000000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, _) = get_json(app(), "/api/v1/listings?status=demolished").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_listing() {
    let (status, json) = get_json(app(), "/api/v1/listings/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Luxury Estate in The Ridges");
    assert_eq!(json["status"], "for-sale");
    assert_eq!(json["property_type"], "luxury-estate");
}

#[tokio::test]
async fn test_get_listing_not_found() {
    let (status, json) = get_json(app(), "/api/v1/listings/404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("404"));
}

// =============================================================================
// LEAD TESTS
// =============================================================================

#[tokio::test]
async fn test_contact_lead() {
    let sink = MemoryLeadSink::new();
    let (status, json) =
        post_json(app_with_sink(sink.clone()), "/api/v1/leads/contact", contact_body("jordan@example.com")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["kind"], "contact");
    assert!(json["id"].is_string());
    assert!(json["received_at"].is_string());
    assert_eq!(json["lead"]["listing_id"], "1");
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn test_valuation_lead_defaults() {
    let body = json!({
        "name": "Jordan Lee",
        "email": "jordan@example.com",
        "address": "12 Paseo Verde",
        "zip_code": "89138"
    });
    let sink = MemoryLeadSink::new();
    let (status, json) = post_json(app_with_sink(sink.clone()), "/api/v1/leads/valuation", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["kind"], "valuation");
    assert_eq!(json["lead"]["city"], "Las Vegas");
    assert_eq!(json["lead"]["state"], "NV");
    assert_eq!(json["lead"]["timeline"], "within-6-months");
}

#[tokio::test]
async fn test_sell_lead() {
    let body = json!({
        "name": "Jordan Lee",
        "email": "jordan@example.com",
        "address": "12 Paseo Verde",
        "zip_code": "89138",
        "bedrooms": 4,
        "estimated_value": 1250000,
        "timeline": "asap"
    });
    let (status, json) = post_json(app(), "/api/v1/leads/sell", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["kind"], "sell");
    assert_eq!(json["lead"]["timeline"], "asap");
}

#[tokio::test]
async fn test_lead_validation_error() {
    let sink = MemoryLeadSink::new();
    let (status, json) =
        post_json(app_with_sink(sink.clone()), "/api/v1/leads/contact", contact_body("nope")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("email"));
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_lead_bad_zip() {
    let body = json!({
        "name": "Jordan Lee",
        "email": "jordan@example.com",
        "address": "12 Paseo Verde",
        "zip_code": "8913"
    });
    let (status, json) = post_json(app(), "/api/v1/leads/valuation", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("zip_code"));
}

struct FailingSink;

#[async_trait::async_trait]
impl LeadSink for FailingSink {
    async fn submit(&self, _record: &LeadRecord) -> LeadResult<()> {
        Err(LeadError::sink("crm unavailable"))
    }
}

#[tokio::test]
async fn test_lead_sink_failure() {
    let app = create_router_with_stores(
        ServerConfig::default(),
        Arc::new(InMemoryListingStore::seeded()),
        Arc::new(FailingSink),
    );
    let (status, json) = post_json(app, "/api/v1/leads/contact", contact_body("jordan@example.com")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("crm unavailable"));
}

#[tokio::test]
async fn test_lead_listing_hidden_by_default() {
    let (status, _) = get_json(app(), "/api/v1/leads").await;
    assert_ne!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_lead_listing_exposed() {
    let config = ServerConfig {
        expose_leads: true,
        ..ServerConfig::default()
    };
    let app = create_router(config);

    let (status, _) = post_json(app.clone(), "/api/v1/leads/contact", contact_body("jordan@example.com")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = get_json(app, "/api/v1/leads").await;
    assert_eq!(status, StatusCode::OK);
    let leads = json.as_array().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["lead"]["email"], "jordan@example.com");
}

#[tokio::test]
async fn test_lead_listing_keeps_latest() {
    let config = ServerConfig {
        expose_leads: true,
        lead_history: 2,
        ..ServerConfig::default()
    };
    let app = create_router(config);

    for who in ["first", "second", "third"] {
        let email = format!("{who}@example.com");
        let (status, _) = post_json(app.clone(), "/api/v1/leads/contact", contact_body(&email)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, json) = get_json(app, "/api/v1/leads").await;
    let emails: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["lead"]["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["second@example.com", "third@example.com"]);
}
