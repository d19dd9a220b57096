use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use super::*;

#[derive(Clone)]
struct CapturedRequest {
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
    status: StatusCode,
    reply: String,
}

async fn handle_generate(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(CapturedRequest { content_type, body });
    }
    (state.status, state.reply)
}

async fn spawn_itinerary_server(
    status: StatusCode,
    reply: &str,
) -> Result<(String, oneshot::Receiver<CapturedRequest>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
        status,
        reply: reply.to_string(),
    };
    let app = Router::new()
        .route("/generate-itinerary", post(handle_generate))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

fn sample_request() -> TripRequest {
    TripRequest {
        origin: "Lisbon".into(),
        destination: "Porto".into(),
        start: "2026-05-01".into(),
        end: "2026-05-04".into(),
        num_people: "3".into(),
        activity: vec!["museums".into()],
        food: vec!["seafood".into(), "vegan".into()],
    }
}

#[test]
fn endpoint_replaces_any_path_on_service_url() {
    let service = HttpItineraryService::new("https://planner.example/app/index.html").expect("url");
    assert_eq!(
        service.endpoint().as_str(),
        "https://planner.example/generate-itinerary"
    );
}

#[test]
fn rejects_unparseable_service_url() {
    let err = HttpItineraryService::new("not a url")
        .err()
        .expect("must fail");
    assert!(matches!(err, ItineraryError::InvalidServiceUrl(_)));
}

#[tokio::test]
async fn posts_json_trip_request() {
    let (server_url, captured_rx) =
        spawn_itinerary_server(StatusCode::OK, r##"{"itinerary":"#Day 1\nArrive"}"##)
            .await
            .expect("spawn server");
    let service = HttpItineraryService::new(&server_url).expect("service");

    let response = service
        .generate_itinerary(&sample_request())
        .await
        .expect("itinerary");
    assert_eq!(response.itinerary, "#Day 1\nArrive");

    let captured = captured_rx.await.expect("captured request");
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        captured.body,
        serde_json::json!({
            "origin": "Lisbon",
            "destination": "Porto",
            "start": "2026-05-01",
            "end": "2026-05-04",
            "numPeople": "3",
            "activity": ["museums"],
            "food": ["seafood", "vegan"]
        })
    );
}

#[tokio::test]
async fn non_success_status_is_a_service_failure() {
    let (server_url, _captured_rx) =
        spawn_itinerary_server(StatusCode::INTERNAL_SERVER_ERROR, "model overloaded")
            .await
            .expect("spawn server");
    let service = HttpItineraryService::new(&server_url).expect("service");

    let err = service
        .generate_itinerary(&sample_request())
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("model overloaded"));
}

#[tokio::test]
async fn success_without_itinerary_field_is_a_decode_failure() {
    let (server_url, _captured_rx) = spawn_itinerary_server(StatusCode::OK, r#"{"plan":"Day 1"}"#)
        .await
        .expect("spawn server");
    let service = HttpItineraryService::new(&server_url).expect("service");

    let err = service
        .generate_itinerary(&sample_request())
        .await
        .expect_err("must fail");
    assert!(matches!(err, ItineraryError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let service = HttpItineraryService::new(&format!("http://{addr}")).expect("service");

    let err = service
        .generate_itinerary(&sample_request())
        .await
        .expect_err("must fail");
    assert!(matches!(err, ItineraryError::Transport(_)), "unexpected error: {err}");
    assert_eq!(err.status(), None);
}
