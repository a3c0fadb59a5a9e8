use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use chrono::Utc;
use rhub_domain::partner::PartnerRecord;
use rhub_partners::{HttpMirror, MirrorError, MirrorSink};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

type Captured = Arc<Mutex<Vec<serde_json::Value>>>;

async fn capture(
    State((bodies, status)): State<(Captured, StatusCode)>,
    body: String,
) -> StatusCode {
    if let Ok(value) = serde_json::from_str(&body) {
        bodies.lock().await.push(value);
    }
    status
}

async fn spawn_sink(status: StatusCode) -> (SocketAddr, Captured) {
    let bodies = Captured::default();
    let app = Router::new().route("/exec", post(capture)).with_state((bodies.clone(), status));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    (addr, bodies)
}

fn record() -> PartnerRecord {
    PartnerRecord {
        code: "PABCD234".into(),
        name: "Kim".into(),
        phone: "010-1234-5678".into(),
        email: "kim@example.com".into(),
        deposit_at: "2025-11-01T10:00".into(),
        depositor_name: "Kim".into(),
        partner_ref: None,
        created_at: Utc::now(),
    }
}

fn mirror_for(addr: SocketAddr, verify_status: bool) -> HttpMirror {
    let url = format!("http://{addr}/exec");
    HttpMirror::new(Some(&url), Duration::from_secs(5), verify_status).unwrap()
}

#[tokio::test]
async fn posts_camel_case_record() {
    let (addr, bodies) = spawn_sink(StatusCode::OK).await;

    mirror_for(addr, true).mirror(&record()).await.unwrap();

    let bodies = bodies.lock().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["code"], "PABCD234");
    assert_eq!(bodies[0]["depositorName"], "Kim");
    assert_eq!(bodies[0]["partnerRef"], "");
    assert!(bodies[0]["createdAt"].is_string());
}

#[tokio::test]
async fn error_status_only_fails_when_verified() {
    let (addr, _bodies) = spawn_sink(StatusCode::INTERNAL_SERVER_ERROR).await;

    assert!(mirror_for(addr, false).mirror(&record()).await.is_ok());

    let err = mirror_for(addr, true).mirror(&record()).await.unwrap_err();
    assert!(matches!(err, MirrorError::Rejected { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn missing_or_placeholder_url_is_not_configured() {
    for url in [None, Some("  "), Some("https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec")] {
        let mirror = HttpMirror::new(url, Duration::from_secs(1), false).unwrap();
        assert!(mirror.url().is_none());
        let err = mirror.mirror(&record()).await.unwrap_err();
        assert!(matches!(err, MirrorError::NotConfigured { .. }));
    }
}

#[test]
fn unparsable_url_is_invalid_config() {
    let err = HttpMirror::new(Some("not a url"), Duration::from_secs(1), false).unwrap_err();
    assert!(matches!(err, MirrorError::InvalidConfig { .. }));
}

#[tokio::test]
async fn closed_port_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = mirror_for(addr, false).mirror(&record()).await.unwrap_err();
    assert!(matches!(err, MirrorError::Transport { .. }));
    assert!(err.to_string().contains("POST"));
}
