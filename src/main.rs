use crate::config::Config;
use crate::db::{init_db, seed::seed_if_empty, Database};
use crate::router::{handle, App};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod formatting;
mod importer;
mod reports;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,listing_reports=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Create the database handle and apply the schema
    let db = Database::new(&config.database_path);
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Seed sample data into an empty database
    if let Some(dir) = &config.seed_data_dir {
        match seed_if_empty(&db, dir) {
            Ok(0) => {}
            Ok(rows) => info!(rows, "sample data seeded"),
            Err(e) => error!("seeding sample data failed: {e}"),
        }
    }

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);

    let app = App {
        db,
        max_upload_bytes: config.max_upload_bytes,
    };
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
