use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ticketfinder_web::config::Config;
use ticketfinder_web::router::app_router;
use ticketfinder_web::state::AppState;

fn test_app() -> axum::Router {
    let config = Config {
        ticketmaster_api_key: "test-key".to_string(),
        google_maps_api_key: "maps-key".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        port: 0,
        timeout_seconds: 1,
    };
    app_router(AppState::new(reqwest::Client::new(), config))
}

#[tokio::test]
async fn health_reports_service_status() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "ticketfinder-web");
}

#[tokio::test]
async fn search_without_required_params_is_rejected() {
    // Missing geoHash (and the rest) trips the Query extractor before any
    // vendor call happens.
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/get_search_results?keyword=phish")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn event_card_without_id_is_rejected() {
    let response = test_app()
        .oneshot(Request::builder().uri("/get_card1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn venue_card_without_keyword_is_rejected() {
    let response = test_app()
        .oneshot(Request::builder().uri("/get_card2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_with_unreachable_vendor_is_a_bad_gateway() {
    // Port 9 (discard) refuses the connection, exercising the upstream
    // fault path end to end.
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/get_search_results?keyword=phish&distance=25&segmentID=KZFzniwnSyZfZ7v7nE&geoHash=c23nb62w20sth")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "upstream failure");
}

#[tokio::test]
async fn root_serves_front_end_entry() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
