// File: crates/dashboard/tests/load.rs
// Purpose: Dataset loading over HTTP (throwaway axum server) and from local JSON/CSV files.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use chart_core::RenderOptions;
use ev_dashboard::{battery_charts, DataSource, LoadError, LoadState, Page, Session};

const BODY: &str = r#"[
    {"TimeStamp": "2024-01-01T10:00:00Z", "StateOfChargeBMS": 87.456, "Speed": 42},
    {"TimeStamp": "2024-01-01T10:00:40Z", "StateOfChargeBMS": 87.1},
    {"TimeStamp": "2024-01-01T10:01:20Z", "StateOfChargeBMS": 86.9, "Speed": 44}
]"#;

async fn serve(app: Router) -> SocketAddr {
    // Requests to the local test server must not go through a configured proxy.
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    std::env::set_var("no_proxy", "127.0.0.1,localhost");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn telemetry_app(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route(
            "/battery_data.json",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    BODY
                }
            }),
        )
        .route("/broken.json", get(|| async { "{\"not\": \"an array\"}" }))
}

#[tokio::test]
async fn http_200_loads_dataset() {
    let addr = serve(telemetry_app(Arc::default())).await;
    let source = DataSource::parse(&format!("http://{addr}/battery_data.json")).unwrap();
    let dataset = source.load().await.expect("dataset");
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(0).unwrap().number("Speed"), Some(42.0));
    assert!(!dataset.get(1).unwrap().contains("Speed"));
}

#[tokio::test]
async fn http_404_is_a_fetch_failure() {
    let addr = serve(telemetry_app(Arc::default())).await;
    let source = DataSource::parse(&format!("http://{addr}/missing.json")).unwrap();
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, LoadError::Status(s) if s.as_u16() == 404), "{err:?}");
    assert!(err.to_string().starts_with("Failed to fetch data"));

    let mut session = Session::new(source);
    let state = session.load().await.clone();
    let LoadState::Failed(message) = &state else { panic!("expected failure, got {state:?}") };
    assert!(message.contains("Failed to fetch data"));

    let page = Page::compose(&state, &battery_charts().unwrap(), &RenderOptions::default());
    assert!(page.cards().is_empty());
    let html = page.to_html();
    assert!(html.contains("Error: Failed to fetch data"));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn session_fetches_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = serve(telemetry_app(hits.clone())).await;
    let mut session = Session::new(DataSource::parse(&format!("http://{addr}/battery_data.json")).unwrap());
    assert!(session.state().is_loading());

    assert_eq!(session.load().await.dataset().map(|d| d.len()), Some(3));
    assert_eq!(session.load().await.dataset().map(|d| d.len()), Some(3));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failure_is_terminal() {
    let addr = serve(telemetry_app(Arc::default())).await;
    let mut session = Session::new(DataSource::parse(&format!("http://{addr}/broken.json")).unwrap());
    assert!(matches!(session.load().await, LoadState::Failed(_)));
    assert!(matches!(session.load().await, LoadState::Failed(_)));
}

#[tokio::test]
async fn malformed_body_is_a_dataset_error() {
    let addr = serve(telemetry_app(Arc::default())).await;
    let source = DataSource::parse(&format!("http://{addr}/broken.json")).unwrap();
    assert!(matches!(source.load().await, Err(LoadError::Dataset(_))));
}

#[tokio::test]
async fn local_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(BODY.as_bytes()).unwrap();
    let source = DataSource::parse(file.path().to_str().unwrap()).unwrap();
    let dataset = source.load().await.unwrap();
    assert_eq!(dataset.len(), 3);
}

#[tokio::test]
async fn local_csv_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "TimeStamp,BatteryMaxTemperature,BatteryMinTemperature\n\
         2024-01-01T10:00:00Z,30,25\n\
         2024-01-01T10:00:01Z,30.5,\n"
    )
    .unwrap();
    let dataset = DataSource::parse(file.path().to_str().unwrap()).unwrap().load().await.unwrap();
    assert_eq!(dataset.len(), 2);
    let second = dataset.get(1).unwrap();
    assert_eq!(second.number("BatteryMaxTemperature"), Some(30.5));
    assert!(!second.contains("BatteryMinTemperature"));
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::parse(dir.path().join("battery_data.json").to_str().unwrap()).unwrap();
    assert!(matches!(source.load().await, Err(LoadError::Io { .. })));
}
