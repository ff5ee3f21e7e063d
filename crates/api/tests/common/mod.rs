#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use closet_carousel::emitter::sysfs::StepperPins;
use closet_carousel::{
    CarouselConfig, Direction, PulseEmitter, PulseError, RotationController,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use closet_api::config::{MotorBackend, MotorConfig, ServerConfig};
use closet_api::routes;
use closet_api::state::AppState;

pub const TEST_SLOTS: u32 = 40;
pub const TEST_STEPS_PER_REV: u32 = 200;

/// Pulse trains seen by a [`RecordingEmitter`].
pub type PulseLog = Arc<Mutex<Vec<(Direction, u32)>>>;

/// Records every pulse train; optionally fails one of them.
pub struct RecordingEmitter {
    log: PulseLog,
    attempts: usize,
    fail_on_call: Option<usize>,
}

impl RecordingEmitter {
    pub fn new() -> (Self, PulseLog) {
        let log = PulseLog::default();
        let emitter = Self {
            log: Arc::clone(&log),
            attempts: 0,
            fail_on_call: None,
        };
        (emitter, log)
    }

    /// Fail the `n`th pulse train (zero-based) halfway through.
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }
}

impl PulseEmitter for RecordingEmitter {
    fn emit_pulses(&mut self, direction: Direction, count: u32) -> Result<(), PulseError> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_on_call == Some(index) {
            return Err(PulseError::new(count / 2, "driver stalled"));
        }
        self.log.lock().unwrap().push((direction, count));
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        motor: MotorConfig {
            slot_count: TEST_SLOTS,
            steps_per_revolution: TEST_STEPS_PER_REV,
            backend: MotorBackend::Simulated,
            pins: StepperPins {
                step: 17,
                dir: 27,
                enable: 22,
                chip_base: 0,
            },
            step_delay_us: 0,
        },
    }
}

/// Build the full application with a recording emitter that never fails.
pub fn build_test_app(pool: SqlitePool) -> (Router, PulseLog) {
    let (emitter, log) = RecordingEmitter::new();
    let (app, _) = build_test_app_with(pool, Box::new(emitter));
    (app, log)
}

/// Build the full application router with all middleware layers around
/// the given pool and pulse backend.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack production uses.
pub fn build_test_app_with(
    pool: SqlitePool,
    emitter: Box<dyn PulseEmitter>,
) -> (Router, Arc<RotationController>) {
    let config = test_config();
    let geometry =
        CarouselConfig::new(config.motor.slot_count, config.motor.steps_per_revolution).unwrap();
    let carousel = Arc::new(RotationController::new(geometry, emitter));

    let state = AppState {
        pool,
        carousel: Arc::clone(&carousel),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    (app, carousel)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Scan the given `(slot, garment_type)` pairs into the inventory and
/// return the created records.
pub async fn seed(app: &Router, items: &[(u32, &str)]) -> Vec<Value> {
    let items: Vec<Value> = items
        .iter()
        .map(|(slot, kind)| serde_json::json!({ "slot": slot, "garment_type": kind }))
        .collect();
    let response = post_json(
        app.clone(),
        "/api/v1/scan",
        serde_json::json!({ "items": items }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]
        .as_array()
        .unwrap()
        .clone()
}
