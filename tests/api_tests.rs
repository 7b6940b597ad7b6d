//! API integration tests
//!
//! Run against a live, seeded server: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_categories() {
    let client = Client::new();

    let response = client
        .get(format!("{}/categories", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_report() {
    let client = Client::new();

    // Create report against the first seeded category
    let response = client
        .post(format!("{}/reports", BASE_URL))
        .json(&json!({
            "reporter_first_name": "María",
            "reporter_paternal_surname": "García",
            "category_id": 1,
            "address": "Av. Juárez 123",
            "description": "Luminaria fundida"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let report_id = body["id"].as_i64().expect("No report ID");
    let folio = body["folio"].as_str().expect("No folio");
    assert!(folio.starts_with("SIRSE-"));
    // New reports default to the Pending state
    assert_eq!(body["state_id"], 1);

    // Delete report
    let response = client
        .delete(format!("{}/reports/{}", BASE_URL, report_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_report_folio_is_immutable() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reports", BASE_URL))
        .json(&json!({
            "reporter_first_name": "José",
            "reporter_paternal_surname": "Hernández",
            "category_id": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let report_id = created["id"].as_i64().unwrap();

    // Move the report to In Process; folio and created_at must not change
    let response = client
        .put(format!("{}/reports/{}", BASE_URL, report_id))
        .json(&json!({ "state_id": 2 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["state_id"], 2);
    assert_eq!(updated["folio"], created["folio"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    // Cleanup
    let _ = client
        .delete(format!("{}/reports/{}", BASE_URL, report_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_general_stats_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats/general", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_reports"].is_number());
    assert!(body["total_categories"].is_number());
    assert!(body["pending_reports"].is_number());
    assert!(body["in_process_reports"].is_number());
    assert!(body["resolved_reports"].is_number());
    assert!(body["reports_last_30_days"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_by_category_includes_every_category() {
    let client = Client::new();

    let categories: Value = client
        .get(format!("{}/categories?include_inactive=true", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let counts: Value = client
        .get(format!("{}/stats/by-category", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    // One row per category, regardless of report data
    assert_eq!(
        counts.as_array().unwrap().len(),
        categories.as_array().unwrap().len()
    );
}

#[tokio::test]
#[ignore]
async fn test_monthly_chart_has_twelve_entries() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/stats/monthly-chart", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["labels"].as_array().unwrap().len(), 12);
    assert_eq!(body["values"].as_array().unwrap().len(), 12);
    assert_eq!(body["labels"][0], "Ene");
}

#[tokio::test]
#[ignore]
async fn test_hot_zones_sorted_and_nonempty_addresses() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/stats/hot-zones?limit=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let rows = body.as_array().unwrap();
    assert!(rows.len() <= 5);
    let mut previous = i64::MAX;
    for row in rows {
        let address = row["address"].as_str().unwrap();
        assert!(!address.is_empty());
        let total = row["total"].as_i64().unwrap();
        assert!(total <= previous);
        previous = total;
    }
}

#[tokio::test]
#[ignore]
async fn test_recent_reports_are_enriched() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/stats/recent?limit=3", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    for row in body.as_array().unwrap() {
        assert!(row["folio"].is_string());
        assert!(row["reporter"].is_string());
        assert!(row["category"].is_string());
        assert!(row["state"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_department_performance_rollup() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/stats/department-performance", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert!(row["efficiency"].as_i64().unwrap() <= 95);
    }
    // Unmapped department reports its baseline and is flagged synthetic
    let parques = rows
        .iter()
        .find(|r| r["department"] == "Parques y Jardines")
        .expect("Missing department row");
    assert_eq!(parques["reports_handled"], 28);
    assert_eq!(parques["synthetic"], true);
}

#[tokio::test]
#[ignore]
async fn test_category_soft_delete() {
    let client = Client::new();

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .json(&json!({
            "name": "Prueba integración",
            "description": "Categoría temporal de prueba"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let category_id = created["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // The row survives with the active flag cleared
    let body: Value = client
        .get(format!("{}/categories/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["active"], false);
}
