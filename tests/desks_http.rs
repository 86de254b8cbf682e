use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use deskbooker_db::InMemoryDeskStore;
use deskbooker_kernel::settings::Settings;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(desk_count: u32) -> (Router, Arc<InMemoryDeskStore>) {
    let store = Arc::new(InMemoryDeskStore::with_desk_count(desk_count));
    let registry = deskbooker_app::build_registry(store.clone());
    let router = deskbooker_http::build_router(&registry, &Settings::default());
    (router, store)
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/desks/book")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/desks/bookings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn text_body(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const EDDIE: &str = "first_name=Eddie&last_name=Vedder&email=eddie%40example.com&date=2020-07-12";

#[tokio::test]
async fn booking_form_is_served() {
    let (router, _) = app(1);

    let res = router.oneshot(get("/api/desks/book")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let html = text_body(res).await;
    assert!(html.contains("<form method=\"post\" action=\"/api/desks/book\">"));
}

#[tokio::test]
async fn successful_submit_redirects_to_confirmation() {
    let (router, store) = app(1);

    let res = router.oneshot(form_post(EDDIE)).await.unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "/api/desks/confirmation?booking_id=1&first_name=Eddie&date=2020-07-12"
    );
    assert_eq!(store.bookings().unwrap().len(), 1);
}

#[tokio::test]
async fn submit_without_free_desk_rerenders_with_date_error() {
    let (router, store) = app(1);

    let first = router.clone().oneshot(form_post(EDDIE)).await.unwrap();
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = router.oneshot(form_post(EDDIE)).await.unwrap();

    assert_eq!(second.status(), StatusCode::OK);
    let html = text_body(second).await;
    assert!(html.contains("data-valmsg-for=\"booking_request.date\">No desk available</span>"));
    assert!(html.contains("value=\"Eddie\""));
    assert_eq!(store.bookings().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_submit_rerenders_without_booking() {
    let (router, store) = app(1);

    let res = router
        .oneshot(form_post("first_name=Eddie&email=not-an-email&date=2020-07-12"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let html = text_body(res).await;
    assert!(html.contains("The Last Name field is required."));
    assert!(html.contains("The Email field is not a valid e-mail address."));
    assert!(store.bookings().unwrap().is_empty());
}

#[tokio::test]
async fn confirmation_page_shows_query_details() {
    let (router, _) = app(1);

    let res = router
        .oneshot(get(
            "/api/desks/confirmation?booking_id=666&first_name=Eddie&date=2020-07-12",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let html = text_body(res).await;
    assert!(html.contains("Thank you Eddie"));
    assert!(html.contains("<strong>666</strong>"));
}

#[tokio::test]
async fn json_booking_takes_desks_in_order() {
    let (router, _) = app(2);
    let request = json!({
        "first_name": "Caio",
        "last_name": "Louro",
        "email": "caio@louro.com.br",
        "date": "2020-06-23"
    });

    let first = router.clone().oneshot(json_post(request.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = json_body(first).await;
    assert_eq!(first["code"], "success");
    assert_eq!(first["booking_id"], 1);
    assert_eq!(first["first_name"], "Caio");

    let second = router.clone().oneshot(json_post(request.clone())).await.unwrap();
    assert_eq!(json_body(second).await["booking_id"], 2);

    let availability = router
        .clone()
        .oneshot(get("/api/desks/available?date=2020-06-23"))
        .await
        .unwrap();
    assert_eq!(json_body(availability).await["desks"], json!([]));

    let third = router.oneshot(json_post(request)).await.unwrap();
    assert_eq!(third.status(), StatusCode::CONFLICT);
    let error = json_body(third).await;
    assert_eq!(error["error"]["code"], "conflict");
    assert_eq!(error["error"]["message"], "No desk available");
}

#[tokio::test]
async fn json_booking_reports_validation_errors() {
    let (router, store) = app(1);

    let res = router
        .oneshot(json_post(json!({ "first_name": "Caio", "date": "23/06/2020" })))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = json_body(res).await;
    assert_eq!(error["error"]["code"], "validation_error");
    let fields: Vec<&str> = error["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|detail| detail["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        [
            "booking_request.date",
            "booking_request.email",
            "booking_request.last_name"
        ]
    );
    assert!(store.bookings().unwrap().is_empty());
}

#[tokio::test]
async fn availability_lists_free_desks() {
    let (router, _) = app(3);

    let booked = router.clone().oneshot(form_post(EDDIE)).await.unwrap();
    assert_eq!(booked.status(), StatusCode::SEE_OTHER);

    let res = router
        .oneshot(get("/api/desks/available?date=2020-07-12"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["date"], "2020-07-12");
    assert_eq!(body["desks"], json!([{ "id": 2 }, { "id": 3 }]));
}

#[tokio::test]
async fn health_and_docs_are_served() {
    let (router, _) = app(1);

    let health = router.clone().oneshot(get("/healthz")).await.unwrap();
    assert_eq!(text_body(health).await, "ok");

    let module_health = router.clone().oneshot(get("/api/desks/health")).await.unwrap();
    assert_eq!(text_body(module_health).await, "desks module is healthy");

    let docs = router.clone().oneshot(get("/docs/openapi.json")).await.unwrap();
    let spec = json_body(docs).await;
    assert!(spec["paths"]["/api/desks/book"]["post"].is_object());
    assert!(spec["components"]["schemas"]["BookingResult"].is_object());
}

#[tokio::test]
async fn swagger_ui_document_lists_desk_routes() {
    let (router, _) = app(1);

    let res = router.oneshot(get("/api-docs/openapi.json")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let spec = json_body(res).await;
    assert!(spec["paths"]["/api/desks/book"]["post"].is_object());
    assert!(spec["paths"]["/api/desks/bookings"]["post"].is_object());
    assert!(spec["paths"]["/api/desks/available"]["get"].is_object());
    assert!(spec["components"]["schemas"]["BookingForm"].is_object());
}
