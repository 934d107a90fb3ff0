use std::sync::Arc;
use std::time::Duration;

use artistfall::{
    AnimatorConfig, ArtistFeed, ArtistId, ArtistRain, FeedConfig, FeedError, MemorySurface,
    LOAD_FAILED_NOTICE,
};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

const ARTISTS_JSON: &str = r#"[
    {"id": 1, "name": "Queen", "image": "https://example.invalid/queen.jpeg",
     "members": ["Freddie Mercury"], "creationDate": 1970, "firstAlbum": "14-12-1973"},
    {"id": 2, "name": "SOJA", "image": "https://example.invalid/soja.jpeg"}
]"#;

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn artists_route(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/artists",
        get(move || async move {
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                body,
            )
        }),
    )
}

#[tokio::test]
async fn fetches_artist_list() {
    let base = serve(artists_route(StatusCode::OK, ARTISTS_JSON)).await;
    let feed = ArtistFeed::new(FeedConfig::with_base_url(base)).unwrap();

    let catalog = assert_ok!(feed.fetch_artists().await);
    assert_eq!(catalog.len(), 2);

    let queen = catalog.get(&ArtistId::Number(1)).unwrap();
    assert_eq!(queen.name, "Queen");
    assert_eq!(queen.creation_date, Some(1970));
    assert_eq!(queen.detail_link(), "/artist?id=1");
}

#[tokio::test]
async fn server_error_is_reported() {
    let base = serve(artists_route(StatusCode::INTERNAL_SERVER_ERROR, "oops")).await;
    let feed = ArtistFeed::new(FeedConfig::with_base_url(base)).unwrap();

    let err = assert_err!(feed.fetch_artists().await);
    assert!(matches!(err, FeedError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn malformed_json_is_reported() {
    let base = serve(artists_route(StatusCode::OK, r#"{"not": "a list"}"#)).await;
    let feed = ArtistFeed::new(FeedConfig::with_base_url(base)).unwrap();

    let err = assert_err!(feed.fetch_artists().await);
    assert!(matches!(err, FeedError::ParseError(_)));
}

#[tokio::test]
async fn missing_route_is_reported() {
    let base = serve(Router::new()).await;
    let feed = ArtistFeed::new(FeedConfig::with_base_url(base)).unwrap();

    let err = assert_err!(feed.fetch_artists().await);
    assert!(matches!(err, FeedError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn load_starts_animation() {
    let base = serve(artists_route(StatusCode::OK, ARTISTS_JSON)).await;
    let surface = Arc::new(MemorySurface::new(1024.0));

    let rain = assert_ok!(
        ArtistRain::load(
            FeedConfig::with_base_url(base),
            Arc::clone(&surface),
            AnimatorConfig::seeded(3),
        )
        .await
    );
    assert_eq!(rain.catalog().len(), 2);
    assert_eq!(rain.animator().generation(), 1);

    // Slot 0 starts immediately.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(surface.live_count() >= 1);
    assert!(surface.notice().is_none());

    rain.shutdown();
}

#[tokio::test]
async fn load_failure_shows_notice() {
    let base = serve(artists_route(StatusCode::BAD_GATEWAY, "")).await;
    let surface = Arc::new(MemorySurface::new(1024.0));

    let result = ArtistRain::load(
        FeedConfig::with_base_url(base),
        Arc::clone(&surface),
        AnimatorConfig::default(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(surface.notice().as_deref(), Some(LOAD_FAILED_NOTICE));
    assert_eq!(surface.live_count(), 0);
}

/// Base URL of a port that was just released, so connections are refused.
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn connection_refused_is_request_error() {
    let feed = ArtistFeed::new(FeedConfig::with_base_url(closed_port().await)).unwrap();

    let err = assert_err!(feed.fetch_artists().await);
    assert!(matches!(err, FeedError::RequestError(_)));
}

#[tokio::test]
async fn connection_refused_shows_notice() {
    let surface = Arc::new(MemorySurface::new(1024.0));

    let result = ArtistRain::load(
        FeedConfig::with_base_url(closed_port().await),
        Arc::clone(&surface),
        AnimatorConfig::default(),
    )
    .await;

    assert!(matches!(result, Err(FeedError::RequestError(_))));
    assert_eq!(surface.notice().as_deref(), Some(LOAD_FAILED_NOTICE));
}

#[tokio::test]
async fn stalled_backend_times_out() {
    let app = Router::new().route(
        "/api/artists",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            ARTISTS_JSON
        }),
    );
    let base = serve(app).await;
    let feed = ArtistFeed::new(FeedConfig {
        base_url: base,
        timeout: Duration::from_millis(200),
        ..Default::default()
    })
    .unwrap();

    let err = assert_err!(feed.fetch_artists().await);
    match err {
        FeedError::RequestError(e) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {:?}", other),
    }
}
