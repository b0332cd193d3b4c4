mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;
use vehicle_registry::router::{RegistryState, registry_router};

use common::{TempDb, temp_db, transfer_count};

const BODY_LIMIT: usize = 64 * 1024;

async fn app(tag: &str) -> (TempDb, Router) {
    let db = temp_db(tag).await;
    let state = RegistryState::new(db.store.clone(), Duration::from_secs(10));
    (db, registry_router(state, BODY_LIMIT))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, String) {
    let content_type = body.as_ref().map(|_| "application/json");
    send_with_content_type(app, method, uri, body, content_type).await
}

async fn send_with_content_type(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
    content_type: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .expect("failed to build request");

    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let text = String::from_utf8(bytes.to_vec()).expect("response body was not utf-8");
    (status, text)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, "POST", uri, Some(body.to_string())).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, text) = send(app, "GET", uri, None).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::String(text));
    (status, value)
}

#[tokio::test]
async fn create_vehicle_then_transfer_end_to_end() {
    let (_db, app) = app("http-e2e").await;

    let (status, body) = post_json(
        &app,
        "/vehicles/",
        json!({"Vehicle_ID": 1, "Vehicle_Type": "car", "Vehicle_Number": "AB123", "Owner_ID": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "Data added successfully");

    let (status, vehicle) = get_json(&app, "/vehicles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicle["Owner_ID"], 5);
    assert_eq!(vehicle["Vehicle_Number"], "AB123");

    let (status, body) = post_json(
        &app,
        "/ownership_transfer/",
        json!({"Vehicle_ID": 1, "New_Owner_ID": 9}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "Data added successfully");
    let transfer_id = body["Transfer_ID"].as_i64().expect("Transfer_ID in response");

    let (status, vehicle) = get_json(&app, "/vehicles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicle["Owner_ID"], 9);

    let (status, transfer) = get_json(&app, &format!("/ownership_transfer/{transfer_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transfer["Old_Owner_ID"], 5);
    assert_eq!(transfer["New_Owner_ID"], 9);
    assert!(transfer["Transfer_Date"].as_str().is_some());
}

#[tokio::test]
async fn missing_fields_are_rejected_with_400_before_touching_the_store() {
    let (db, app) = app("http-missing").await;

    let (status, text) = post_json(&app, "/owners/", json!({"Owner_ID": 1, "Owner_Name": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        text,
        "Missing required fields: Owner_Name, Contact_Number, Address"
    );

    let (status, text) = post_json(&app, "/ownership_transfer/", json!({"Vehicle_ID": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.contains("New_Owner_ID"));
    assert_eq!(transfer_count(&db.store).await, 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (_db, app) = app("http-malformed").await;

    let (status, _) = send(&app, "POST", "/vehicles/", Some("{not json".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/vehicle_tax/", json!({"Payment_Date": "yesterday"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn transfer_of_unknown_vehicle_is_404() {
    let (db, app) = app("http-transfer-404").await;

    let (status, text) = post_json(
        &app,
        "/ownership_transfer/",
        json!({"Vehicle_ID": 77, "New_Owner_ID": 9}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(text, "vehicle 77 not found");
    assert_eq!(transfer_count(&db.store).await, 0);
}

#[tokio::test]
async fn unknown_and_invalid_ids() {
    let (_db, app) = app("http-ids").await;

    let (status, _) = get_json(&app, "/owners/12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, "/vehicle_tax/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_owner_is_a_500_with_the_datastore_message() {
    let (_db, app) = app("http-dup").await;
    let owner = json!({
        "Owner_ID": 1, "Owner_Name": "Ana", "Contact_Number": "555-0100", "Address": "1 Main St"
    });

    let (status, _) = post_json(&app, "/owners/", owner.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, text) = post_json(&app, "/owners/", owner).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(text.starts_with("Database error: "), "{text}");

    let (status, stored) = get_json(&app, "/owners/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["Owner_Name"], "Ana");
}

#[tokio::test]
async fn related_records_serialize_dates_and_amounts() {
    let (_db, app) = app("http-records").await;

    let cases = [
        (
            "/vehicle_insurance/",
            json!({"Insurance_ID": 10, "Vehicle_ID": 1, "Policy_Number": "POL-10",
                   "Start_Date": "2024-01-01", "End_Date": "2024-12-31", "Premium_Amount": 349.5}),
        ),
        (
            "/vehicle_tax/",
            json!({"Tax_ID": 20, "Vehicle_ID": 1, "Tax_Type": "road",
                   "Amount": 120, "Payment_Date": "2024-03-15"}),
        ),
        (
            "/vehicle_inspection/",
            json!({"Inspection_ID": 30, "Vehicle_ID": 1,
                   "Inspection_Date": "2024-06-01", "Inspection_Result": "pass"}),
        ),
    ];
    for (uri, body) in cases {
        let (status, text) = post_json(&app, uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "{uri}: {text}");
    }

    let (_, insurance) = get_json(&app, "/vehicle_insurance/10").await;
    assert_eq!(insurance["End_Date"], "2024-12-31");
    assert_eq!(insurance["Premium_Amount"], 349.5);

    let (_, tax) = get_json(&app, "/vehicle_tax/20").await;
    assert_eq!(tax["Amount"], 120.0);
    assert_eq!(tax["Payment_Date"], "2024-03-15");

    let (_, inspection) = get_json(&app, "/vehicle_inspection/30").await;
    assert_eq!(inspection["Inspection_Result"], "pass");
}

#[tokio::test]
async fn root_and_unmatched_get_paths_list_all_vehicles() {
    let (_db, app) = app("http-list").await;
    for id in [2, 1] {
        let (status, _) = post_json(
            &app,
            "/vehicles/",
            json!({"Vehicle_ID": id, "Vehicle_Type": "bike", "Vehicle_Number": format!("N{id}"), "Owner_ID": 3}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    for uri in ["/", "/vehicles/", "/something/else"] {
        let (status, list) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let ids: Vec<i64> = list
            .as_array()
            .expect("vehicle list")
            .iter()
            .filter_map(|v| v["Vehicle_ID"].as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2], "{uri}");
    }

    let (status, _) = post_json(&app, "/unknown/", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_body_is_413() {
    let (_db, app) = app("http-limit").await;

    let oversized = "a".repeat(BODY_LIMIT + 1024);
    let payload = format!(r#"{{"Owner_ID":1,"Owner_Name":"{oversized}"}}"#);
    let (status, text) = send(&app, "POST", "/owners/", Some(payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(text, "Request body too large");
}

#[tokio::test]
async fn json_body_is_accepted_without_a_json_content_type() {
    let (_db, app) = app("http-content-type").await;

    let owner = |id: i64| {
        json!({
            "Owner_ID": id, "Owner_Name": "Ana", "Contact_Number": "555-0100", "Address": "1 Main St"
        })
        .to_string()
    };

    let (status, text) = send_with_content_type(&app, "POST", "/owners/", Some(owner(1)), None).await;
    assert_eq!(status, StatusCode::CREATED, "{text}");

    let (status, text) =
        send_with_content_type(&app, "POST", "/owners/", Some(owner(2)), Some("text/plain")).await;
    assert_eq!(status, StatusCode::CREATED, "{text}");

    for id in [1, 2] {
        let (status, stored) = get_json(&app, &format!("/owners/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored["Owner_ID"], id);
    }
}

#[tokio::test]
async fn head_on_listing_paths_matches_get() {
    let (_db, app) = app("http-head").await;

    for uri in ["/", "/something/else"] {
        let (status, body) = send(&app, "HEAD", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty(), "{uri}: HEAD response carried a body");
    }

    let (status, _) = send(&app, "DELETE", "/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
