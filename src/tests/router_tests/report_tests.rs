use crate::errors::ServerError;
use crate::importer::try_import_csv;
use crate::router::{handle, App};
use crate::tests::utils::{make_db, TestDb, LISTINGS_CSV};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn seeded_app() -> (TestDb, App) {
    let db = make_db();
    try_import_csv(&db, LISTINGS_CSV).unwrap();
    try_import_csv(
        &db,
        "listing_id,contact_date\n1,1579089600000\n1,1579521600000\n2,1581336000000\n",
    )
    .unwrap();
    let app = App {
        db: (*db).clone(),
        max_upload_bytes: 1024,
    };
    (db, app)
}

fn get(app: &App, uri: &str) -> Result<Response, ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app)
}

fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn get_json(app: &App, uri: &str) -> serde_json::Value {
    let resp = get(app, uri).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn reports_page_renders_every_report() {
    let (_db, app) = seeded_app();

    let resp = get(&app, "/reports").expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Average listing selling price per seller type"));
    assert!(body.contains("€ 35.000,-"));
    assert!(body.contains("50%"));
    assert!(body.contains("Month: 01.2020"));
    assert!(body.contains("2.000 KM"));
}

#[test]
fn average_selling_price_json() {
    let (_db, app) = seeded_app();

    let json = get_json(&app, "/api/reports/average-selling-price");

    assert_eq!(
        json,
        serde_json::json!({
            "private": { "averagePrice": 40000.0, "formattedAveragePrice": "€ 40.000,-" },
            "dealer": { "averagePrice": 35000.0, "formattedAveragePrice": "€ 35.000,-" }
        })
    );
}

#[test]
fn most_contacted_json() {
    let (_db, app) = seeded_app();

    let json = get_json(&app, "/api/reports/most-contacted");

    assert_eq!(json["averagePrice"], 35000.0);
    assert_eq!(json["formattedAveragePrice"], "€ 35.000,-");
}

#[test]
fn top_listings_json_is_nested_per_month() {
    let (_db, app) = seeded_app();

    let json = get_json(&app, "/api/reports/top-listings-by-month");

    let months = json.as_array().unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0][0]["listingId"], 1);
    assert_eq!(months[0][0]["contactCount"], 2);
    assert_eq!(months[1][0]["month"], "02.2020");
}

#[test]
fn listing_and_contact_dumps() {
    let (_db, app) = seeded_app();

    let listings = get_json(&app, "/api/listings");
    assert_eq!(listings[0]["sellerType"], "dealer");
    assert_eq!(listings.as_array().unwrap().len(), 2);

    let contacts = get_json(&app, "/api/contacts");
    assert_eq!(contacts.as_array().unwrap().len(), 3);
    assert_eq!(contacts[2]["listingId"], 2);
}

#[test]
fn unknown_report_is_not_found() {
    let (_db, app) = seeded_app();

    assert!(matches!(
        get(&app, "/api/reports/best-sellers"),
        Err(ServerError::NotFound)
    ));
}
