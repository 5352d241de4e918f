use crate::db::{contacts, listings, Database};
use crate::errors::ServerError;
use crate::importer::try_import_csv;
use crate::reports::{self, Report, ReportError};
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::pages::{home_page, import_result_page, reports_page, HomeVm, ReportsVm};
use astra::Request;
use std::io::Read;
use tracing::debug;

/// Everything a request handler needs.
pub struct App {
    pub db: Database,
    pub max_upload_bytes: u64,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app),
        ("POST", "/import") => import(req, app),
        ("GET", "/reports") => all_reports(app),
        ("GET", "/api/listings") => {
            let all = app.db.with_conn(|conn| listings::all(conn))?;
            json_response(&all)
        }
        ("GET", "/api/contacts") => {
            let all = app.db.with_conn(|conn| contacts::all(conn))?;
            json_response(&all)
        }
        ("GET", other) => match other.strip_prefix("/api/reports/") {
            Some(slug) => report_json(slug, app),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &App) -> ResultResp {
    let (listing_count, contact_count) = app.db.with_conn(|conn| {
        Ok::<_, ServerError>((listings::count(conn)?, contacts::count(conn)?))
    })?;

    html_response(home_page(&HomeVm {
        listing_count,
        contact_count,
        max_upload_bytes: app.max_upload_bytes,
    }))
}

fn import(req: Request, app: &App) -> ResultResp {
    let is_form = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);

    let body = read_body(req, app.max_upload_bytes)?;

    let summary = if is_form {
        let csv = url::form_urlencoded::parse(&body)
            .find(|(key, _)| key == "csv")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| ServerError::BadRequest("missing form field `csv`".into()))?;
        try_import_csv(&app.db, csv)?
    } else {
        try_import_csv(&app.db, body)?
    };

    html_response(import_result_page(&summary))
}

/// Reads at most `limit` bytes of the request body.
fn read_body(req: Request, limit: u64) -> Result<Vec<u8>, ServerError> {
    let declared = req
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(ServerError::PayloadTooLarge(limit));
    }

    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(limit + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("failed to read upload: {e}")))?;

    if body.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }
    Ok(body)
}

fn all_reports(app: &App) -> ResultResp {
    let vm = app.db.with_conn(|conn| {
        Ok::<_, ReportError>(ReportsVm {
            average_selling_price: reports::average_price_by_seller_type(conn)?,
            cars_by_make: reports::cars_by_make(conn)?,
            most_contacted: reports::average_price_most_contacted(conn)?,
            top_listings_by_month: reports::top_listings_by_month(conn)?,
        })
    })?;

    html_response(reports_page(&vm))
}

fn report_json(slug: &str, app: &App) -> ResultResp {
    let report = Report::from_slug(slug).ok_or(ServerError::NotFound)?;
    let output = app.db.with_conn(|conn| report.generate(conn))?;
    json_response(&output)
}
