//! Integration tests for carousel status and re-homing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed, RecordingEmitter};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_reports_geometry_and_home_position(pool: SqlitePool) {
    let (app, _) = common::build_test_app(pool);

    let response = get(app, "/api/v1/carousel").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["slot_count"], 40);
    assert_eq!(data["steps_per_revolution"], 200);
    assert_eq!(data["steps_per_slot"], 5);
    assert_eq!(data["backend"], "recording");
    assert_eq!(data["position"], json!({ "state": "known", "slot": 0 }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rehome_recovers_from_fault(pool: SqlitePool) {
    let (emitter, _) = RecordingEmitter::new();
    let (app, _) = common::build_test_app_with(pool, Box::new(emitter.failing_on(0)));
    let seeded = seed(&app, &[(3, "shirt"), (8, "pants")]).await;
    let body = json!({
        "accepted": true,
        "top": { "id": seeded[0]["id"], "slot": 3 },
        "bottom": { "id": seeded[1]["id"], "slot": 8 },
    });

    let response = post_json(app.clone(), "/api/v1/confirm", body.clone()).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let status = body_json(get(app.clone(), "/api/v1/carousel").await).await;
    assert_eq!(status["data"]["position"], json!({ "state": "unknown" }));

    let response = post_json(app.clone(), "/api/v1/carousel/home", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["position"],
        json!({ "state": "known", "slot": 0 })
    );

    let response = post_json(app, "/api/v1/confirm", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}
