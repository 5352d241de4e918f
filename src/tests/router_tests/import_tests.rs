// src/tests/router_tests/import_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, App};
use crate::tests::utils::{counts, make_db, stored_listings, TestDb, LISTINGS_CSV};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn app_with_limit(max_upload_bytes: u64) -> (TestDb, App) {
    let db = make_db();
    let app = App {
        db: (*db).clone(),
        max_upload_bytes,
    };
    (db, app)
}

fn app() -> (TestDb, App) {
    app_with_limit(1024)
}

fn post_import(
    app: &App,
    content_type: &str,
    body: impl Into<String>,
) -> Result<Response, ServerError> {
    let body: String = body.into();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/import")
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .unwrap();
    handle(req, app)
}

fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn raw_csv_upload_imports_listings() {
    let (_db, app) = app();

    let resp = post_import(&app, "text/csv", LISTINGS_CSV).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Imported"));
    assert!(body.contains("listings"));
    assert_eq!(stored_listings(&app.db).len(), 2);
}

#[test]
fn form_upload_imports_csv_field() {
    let (_db, app) = app();
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("csv", LISTINGS_CSV)
        .finish();

    let resp = post_import(&app, "application/x-www-form-urlencoded", form)
        .expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(counts(&app.db), (2, 0));
}

#[test]
fn form_without_csv_field_is_bad_request() {
    let (_db, app) = app();

    let err = post_import(&app, "application/x-www-form-urlencoded", "other=1").unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn invalid_csv_is_bad_request_and_stores_nothing() {
    let (_db, app) = app();

    let err = post_import(
        &app,
        "text/csv",
        "id,make,price,mileage,seller_type\n1,BMW,35000,2000,dealer\n2,Audi,1,1,leasing\n",
    )
    .unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)), "got {err:?}");
    assert_eq!(counts(&app.db), (0, 0));
}

#[test]
fn contacts_for_unknown_listing_are_bad_request() {
    let (_db, app) = app();

    let err = post_import(&app, "text/csv", "listing_id,contact_date\n1,1000\n").unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(counts(&app.db), (0, 0));
}

#[test]
fn oversized_upload_is_refused() {
    let (_db, app) = app_with_limit(16);

    let err = post_import(&app, "text/csv", LISTINGS_CSV).unwrap_err();

    assert!(matches!(err, ServerError::PayloadTooLarge(16)));
    assert_eq!(counts(&app.db), (0, 0));
}

#[test]
fn home_page_shows_counts() {
    let (_db, app) = app();
    post_import(&app, "text/csv", LISTINGS_CSV).unwrap();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Import CSV"));
    assert!(body.contains("<strong>2</strong> listings"));
}

#[test]
fn unknown_route_is_not_found() {
    let (_db, app) = app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
}
