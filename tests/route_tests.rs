use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use empdir::assets::AssetFetcher;
use empdir::config::Config;
use empdir::db::EmployeeStore;
use empdir::router::{AppState, app_router};

/// Build the app against a host/port where nothing listens, so every
/// connection attempt is refused immediately. The background-image URL is
/// left empty, which disables the fetcher.
fn unreachable_db_config() -> Config {
    Config {
        dbhost: "127.0.0.1".to_string(),
        dbport: 9,
        my_name: "Test Runner".to_string(),
        ..Config::default()
    }
}

async fn test_app(cfg: Config) -> Router {
    let assets = AssetFetcher::from_config(&cfg).await;
    let store = EmployeeStore::new(cfg.connect_options());
    let state = AppState::new(cfg, store, assets);
    app_router(state)
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn home_renders_add_form_without_background_image() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Add Employee"));
    assert!(body.contains(r#"action="/addemp""#));
    assert!(body.contains("Test Runner"));
}

#[tokio::test]
async fn about_page_renders() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/about")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("About"));
    assert!(body.contains("Test Runner"));
}

#[tokio::test]
async fn getemp_renders_lookup_form() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/getemp")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"action="/fetchdata""#));
    assert!(body.contains(r#"name="emp_id""#));
}

#[tokio::test]
async fn addemp_with_unreachable_database_renders_error_page() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/addemp")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "emp_id=1&first_name=Jane&last_name=Doe&primary_skill=Go&location=NYC",
                ))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Database connection failed"));
    assert!(!body.contains("Jane Doe"));
}

#[tokio::test]
async fn fetchdata_with_unreachable_database_renders_error_page() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetchdata")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("emp_id=1"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Database connection failed"));
}

#[tokio::test]
async fn addemp_with_missing_fields_is_rejected_before_business_logic() {
    let app = test_app(unreachable_db_config()).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/addemp")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from("emp_id=1&first_name=Jane"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    // Framework-level rejection, no custom page.
    assert!(resp.status().is_client_error());
}
