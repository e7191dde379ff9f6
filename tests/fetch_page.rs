use axum::{Router, http::StatusCode, response::Html, routing::get};
use tokio::net::TcpListener;

use kilm_slots::{CheckerConfig, Error, HttpPageSource, PageSource, parse_time_slots};

const PAGE: &str = r#"<html><body>
<div class="OPW_timesHolder">
  <div>
    <a href="/?p=book&amp;t=1000">10:00</a>
    <a class="soldOut" href="/?p=book&amp;t=1100">11:00</a>
    <a href="/?p=book&amp;t=1200">12:00</a>
  </div>
</div>
</body></html>"#;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config_for(base_url: String) -> CheckerConfig {
    CheckerConfig {
        base_url,
        ..CheckerConfig::default()
    }
}

#[tokio::test]
async fn fetches_details_page_body() {
    let base = serve(Router::new().route("/", get(|| async { Html(PAGE) }))).await;
    let url = config_for(base).details_url("20250612");

    let source = HttpPageSource::new().unwrap();
    let html = source.fetch_page(&url).await.unwrap();

    let slots = parse_time_slots(&html);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].label, "10:00");
    assert_eq!(slots[0].link, "/?p=book&t=1000");
    assert_eq!(slots[1].label, "12:00");
}

#[tokio::test]
async fn error_status_is_a_failure() {
    let app = Router::new().route(
        "/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let base = serve(app).await;
    let url = config_for(base).details_url("20250612");

    let source = HttpPageSource::new().unwrap();
    let err = source.fetch_page(&url).await.unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = config_for(format!("http://{}", addr)).details_url("20250612");
    let source = HttpPageSource::new().unwrap();
    let err = source.fetch_page(&url).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn error_page_body_is_shortened() {
    let app = Router::new().route(
        "/",
        get(|| async {
            let page = format!("<html>\n<body>{}</body>\n</html>", "Not found. ".repeat(400));
            (StatusCode::NOT_FOUND, Html(page))
        }),
    );
    let base = serve(app).await;
    let url = config_for(base).details_url("20250612");

    let source = HttpPageSource::new().unwrap();
    let err = source.fetch_page(&url).await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("unexpected status 404"));
    assert!(!message.contains('\n'));
    assert!(message.len() < 300, "error message too long: {} bytes", message.len());
}
