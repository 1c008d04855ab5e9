use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use site_backend::config::Config;
use site_backend::{build_router, AppState};
use tokio::net::TcpListener;
use tower::ServiceExt;

const VALID_BODY: &str = r#"{"name":"Jo Lee","phone":"+1 555-123-4567","email":"jo@x.com","scenario":"lead-qualification"}"#;

fn app_with(vars: &[(&str, &str)]) -> Router {
    let vars: HashMap<String, String> =
        vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    build_router(Arc::new(AppState::new(config).unwrap()))
}

fn placeholder_app() -> Router {
    app_with(&[])
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_call(app: Router, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/call", body).await
}

#[tokio::test]
async fn well_formed_request_gets_placeholder_call_id() {
    let (status, body) = post_call(placeholder_app(), VALID_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Placeholder — Retell API not yet connected");
    assert!(body["callId"].as_str().unwrap().starts_with("placeholder_"));
}

#[tokio::test]
async fn placeholder_mode_is_never_throttled() {
    let app = placeholder_app();
    let mut statuses = Vec::new();
    for _ in 0..6 {
        let (status, _) = post_call(app.clone(), VALID_BODY).await;
        statuses.push(status);
    }
    assert_eq!(statuses, vec![StatusCode::OK; 6]);
}

#[tokio::test]
async fn other_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let (status, body) = send(placeholder_app(), method.clone(), "/api/call", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let full: Value = serde_json::from_str(VALID_BODY).unwrap();
    for field in ["name", "phone", "email", "scenario"] {
        let mut partial = full.clone();
        partial.as_object_mut().unwrap().remove(field);
        let (status, body) = post_call(placeholder_app(), &partial.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "without {field}");
        assert_eq!(
            body["error"],
            "Missing required fields: name, phone, email, scenario"
        );
    }
}

#[tokio::test]
async fn empty_and_malformed_bodies_count_as_missing_fields() {
    for raw in ["", "{}", "null", "not json", r#"{"name":"","phone":"","email":"","scenario":""}"#] {
        let (status, body) = post_call(placeholder_app(), raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert_eq!(
            body["error"],
            "Missing required fields: name, phone, email, scenario"
        );
    }
}

#[tokio::test]
async fn bad_phone_email_and_scenario_are_rejected() {
    let cases = [
        ("phone", "555-12", "Invalid phone number format"),
        ("phone", "call me maybe", "Invalid phone number format"),
        ("email", "jo@x", "Invalid email format"),
        ("email", "jo x@x.com", "Invalid email format"),
        ("scenario", "sales", "Invalid scenario"),
        ("scenario", "Customer Service", "Invalid scenario"),
        ("name", "J", "Name must be at least 2 characters"),
    ];
    for (field, value, message) in cases {
        let mut body: Value = serde_json::from_str(VALID_BODY).unwrap();
        body[field] = json!(value);
        let (status, response) = post_call(placeholder_app(), &body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}={value}");
        assert_eq!(response["error"], message);
    }
}

#[tokio::test]
async fn health_check_responds() {
    let response = placeholder_app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_frontend() {
    let dir = std::env::temp_dir().join(format!("site-backend-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<!doctype html><title>demo</title>").unwrap();

    let app = app_with(&[("STATIC_DIR", dir.to_str().unwrap())]);
    let response = app
        .oneshot(Request::builder().uri("/services").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("<title>demo</title>"));

    std::fs::remove_dir_all(&dir).ok();
}

type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Binds a stand-in for the calling service on an ephemeral port.
async fn spawn_calling_service(status: StatusCode, captured: Captured) -> String {
    let app = Router::new().route(
        "/v2/create-phone-call",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                captured.lock().unwrap().push((auth, body));
                if status.is_success() {
                    (status, Json(json!({"call_id": "call_abc123", "call_status": "registered"})))
                } else {
                    (status, Json(json!({"error_message": "invalid agent"})))
                }
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn wired_app_with_quota(base_url: &str, per_hour: &str) -> Router {
    app_with(&[
        ("RETELL_API_KEY", "key_test"),
        ("RETELL_BASE_URL", base_url),
        ("RETELL_AGENT_CUSTOMER_SERVICE", "agent_xxxx"),
        ("RETELL_AGENT_LEAD_QUALIFICATION", "agent_yyyy"),
        ("RETELL_AGENT_APPOINTMENT_SETTING", "agent_zzzz"),
        ("DEMO_CALLS_PER_HOUR", per_hour),
    ])
}

fn wired_app(base_url: &str) -> Router {
    wired_app_with_quota(base_url, "5")
}

#[tokio::test]
async fn wired_endpoint_forwards_to_calling_service() {
    let captured = Captured::default();
    let base_url = spawn_calling_service(StatusCode::CREATED, captured.clone()).await;

    let (status, body) = post_call(wired_app(&base_url), VALID_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "callId": "call_abc123"}));

    let calls = captured.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (auth, payload) = &calls[0];
    assert_eq!(auth.as_deref(), Some("Bearer key_test"));
    assert_eq!(
        payload,
        &json!({
            "agent_id": "agent_yyyy",
            "customer_number": "+1 555-123-4567",
            "metadata": {"name": "Jo Lee", "email": "jo@x.com"}
        })
    );
}

#[tokio::test]
async fn calling_service_failure_is_a_bad_gateway() {
    let captured = Captured::default();
    let base_url = spawn_calling_service(StatusCode::UNPROCESSABLE_ENTITY, captured.clone()).await;

    let (status, body) = post_call(wired_app(&base_url), VALID_BODY).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "Failed to initiate call"}));
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn calls_over_quota_are_throttled() {
    let captured = Captured::default();
    let base_url = spawn_calling_service(StatusCode::CREATED, captured.clone()).await;
    let app = wired_app_with_quota(&base_url, "2");

    for _ in 0..2 {
        let (status, _) = post_call(app.clone(), VALID_BODY).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = post_call(app.clone(), VALID_BODY).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "Too many demo requests, try again later");
    assert_eq!(captured.lock().unwrap().len(), 2);

    // Quota is per phone number.
    let other = VALID_BODY.replace("+1 555-123-4567", "+1 555-987-6543");
    let (status, _) = post_call(app, &other).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reformatted_numbers_share_one_quota() {
    let captured = Captured::default();
    let base_url = spawn_calling_service(StatusCode::CREATED, captured.clone()).await;
    let app = wired_app_with_quota(&base_url, "2");

    let variants = ["+1 555-123-4567", "+15551234567", "+1 (555) 123.4567"];
    let mut statuses = Vec::new();
    for phone in variants {
        let body = VALID_BODY.replace("+1 555-123-4567", phone);
        let (status, _) = post_call(app.clone(), &body).await;
        statuses.push(status);
    }
    assert_eq!(
        statuses,
        vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
    );
    assert_eq!(captured.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_requests_never_reach_the_calling_service() {
    let captured = Captured::default();
    let base_url = spawn_calling_service(StatusCode::CREATED, captured.clone()).await;

    let body = VALID_BODY.replace("jo@x.com", "not-an-email");
    let (status, _) = post_call(wired_app(&base_url), &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(captured.lock().unwrap().is_empty());
}
