use crate::db::{contacts, init_db, listings, Database, DbError};
use crate::domain::{Contact, Listing};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A test database whose file is removed when it goes out of scope.
pub struct TestDb {
    db: Database,
    path: PathBuf,
}

impl TestDb {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Returns a fresh test database using the production schema
pub fn make_db() -> TestDb {
    let path = std::env::temp_dir().join(format!(
        "listing_reports_test_{}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.clone());
    init_db(&db, schema_path()).expect("Failed to initialize DB");
    TestDb { db, path }
}

pub fn schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("sql/schema.sql")
}

pub fn stored_listings(db: &Database) -> Vec<Listing> {
    db.with_conn(|conn| listings::all(conn)).unwrap()
}

pub fn stored_contacts(db: &Database) -> Vec<Contact> {
    db.with_conn(|conn| contacts::all(conn)).unwrap()
}

/// (listings, contacts)
pub fn counts(db: &Database) -> (i64, i64) {
    db.with_conn(|conn| Ok::<_, DbError>((listings::count(conn)?, contacts::count(conn)?)))
        .unwrap()
}

pub const LISTINGS_CSV: &str = "\
id,make,price,mileage,seller_type
1,BMW,35000,2000,dealer
2,Audi,40000,4000,private
";
