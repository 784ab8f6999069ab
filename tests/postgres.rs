use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{get, post, postgres_app};

fn internal_error() -> Value {
    json!({ "success": false, "message": "Internal server error" })
}

#[tokio::test]
async fn malformed_ids_fail_generically() {
    let router = postgres_app();

    for uri in ["/events/id/not-a-uuid", "/ngos/id/42"] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "GET {uri}");
        assert_eq!(body, internal_error(), "GET {uri}");
    }
}

#[tokio::test]
async fn malformed_ids_fail_generically_on_writes() {
    let router = postgres_app();
    let event = json!({ "eventInfo": { "title": "Hack Day", "slug": "hack-day" } });
    let ngo = json!({ "ngoInfo": { "name": "Food Bank", "slug": "food-bank" } });
    let delete = json!({ "id": "not-a-uuid" });

    for (uri, body) in [
        ("/events/update/not-a-uuid", &event),
        ("/events/delete", &delete),
        ("/ngos/update/not-a-uuid", &ngo),
        ("/ngos/delete", &delete),
    ] {
        let (status, response) = post(&router, uri, body.clone()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "POST {uri}");
        assert_eq!(response, internal_error(), "POST {uri}");
    }
}

#[tokio::test]
async fn validation_runs_before_the_database() {
    let router = postgres_app();

    let (status, body) = post(&router, "/events/create", json!({ "eventInfo": {} })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}
