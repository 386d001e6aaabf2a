use super::*;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn source(url: String) -> HttpSource {
    HttpSource::new(url, Duration::from_secs(5), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn load_fetches_and_decodes_snapshot() {
    let base = serve(Router::new().route(
        "/catalog.json",
        get(|| async { r#"{"products":[{"id":"p1","slug":"zpm","name":"ZPM"}]}"# }),
    ))
    .await;

    let catalog = source(format!("{base}/catalog.json")).load().await.unwrap();
    assert_eq!(catalog.products[0].slug, "zpm");
}

#[tokio::test]
async fn server_error_is_retryable_status() {
    let base = serve(Router::new().route(
        "/catalog.json",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    ))
    .await;

    let err = source(format!("{base}/catalog.json")).load().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 503 }));
    assert!(err.retryable());
}

#[tokio::test]
async fn not_found_is_not_retryable() {
    let base = serve(Router::new()).await;
    let err = source(format!("{base}/missing.json")).load().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 404 }));
    assert!(!err.retryable());
}

#[tokio::test]
async fn html_body_is_decode_error() {
    let base = serve(Router::new().route("/catalog.json", get(|| async { "<html>login</html>" }))).await;
    let err = source(format!("{base}/catalog.json")).load().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn describe_names_url() {
    assert_eq!(source("https://cms.example.test/c.json".into()).describe(), "http:https://cms.example.test/c.json");
}
