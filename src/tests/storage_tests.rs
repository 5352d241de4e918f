use crate::db::{batch, contacts, listings, DbError};
use crate::domain::{Contact, Listing, SellerType};
use crate::tests::utils::{counts, make_db, stored_contacts, stored_listings};
use std::cell::Cell;

fn listing(id: i64, make: &str, price: i64) -> Listing {
    Listing {
        id,
        make: make.to_string(),
        price,
        mileage: 1000,
        seller_type: SellerType::Private,
    }
}

#[test]
fn batch_insert_commits_every_record() {
    let db = make_db();
    let batch = vec![listing(1, "BMW", 100), listing(2, "Audi", 200)];

    db.with_conn(|conn| listings::insert_many_transactional(conn, &batch))
        .unwrap();

    assert_eq!(stored_listings(&db), batch);
}

#[test]
fn duplicate_id_rolls_back_whole_batch() {
    let db = make_db();
    let batch = vec![
        listing(1, "BMW", 100),
        listing(2, "Audi", 200),
        listing(1, "Fiat", 300),
    ];

    let err = db
        .with_conn(|conn| listings::insert_many_transactional(conn, &batch))
        .unwrap_err();

    assert!(matches!(err, DbError::Unique(_)), "got {err:?}");
    assert_eq!(counts(&db), (0, 0));
}

#[test]
fn duplicate_of_stored_listing_is_rejected() {
    let db = make_db();
    db.with_conn(|conn| listings::insert(conn, &listing(7, "BMW", 100)))
        .unwrap();

    let err = db
        .with_conn(|conn| {
            listings::insert_many_transactional(
                conn,
                &[listing(8, "Audi", 1), listing(7, "Fiat", 2)],
            )
        })
        .unwrap_err();

    assert!(matches!(err, DbError::Unique(_)));
    assert_eq!(stored_listings(&db), vec![listing(7, "BMW", 100)]);
}

#[test]
fn contact_for_unknown_listing_violates_foreign_key() {
    let db = make_db();
    db.with_conn(|conn| listings::insert(conn, &listing(1, "BMW", 100)))
        .unwrap();

    let batch = vec![
        Contact {
            listing_id: 1,
            contact_date: 1,
        },
        Contact {
            listing_id: 99,
            contact_date: 2,
        },
    ];
    let err = db
        .with_conn(|conn| contacts::insert_many_transactional(conn, &batch))
        .unwrap_err();

    assert!(matches!(err, DbError::ForeignKey(_)), "got {err:?}");
    assert!(stored_contacts(&db).is_empty());
}

#[test]
fn generic_batch_stops_at_first_failure() {
    let db = make_db();
    let attempts = Cell::new(0);

    let err = db
        .with_conn(|conn| {
            batch::insert_many_transactional(conn, &[1i64, 2, 3], |conn, n| {
                attempts.set(attempts.get() + 1);
                if *n == 2 {
                    return Err(DbError::Unique("forced".into()));
                }
                listings::insert(conn, &listing(*n, "BMW", 1))
            })
        })
        .unwrap_err();

    assert!(matches!(err, DbError::Unique(_)));
    assert_eq!(attempts.get(), 2);
    assert_eq!(counts(&db), (0, 0));
}

#[test]
fn contacts_are_returned_in_insertion_order() {
    let db = make_db();
    let batch = vec![
        Contact {
            listing_id: 1,
            contact_date: 30,
        },
        Contact {
            listing_id: 1,
            contact_date: 10,
        },
        Contact {
            listing_id: 1,
            contact_date: 20,
        },
    ];
    db.with_conn(|conn| {
        listings::insert(conn, &listing(1, "BMW", 100))?;
        contacts::insert_many_transactional(conn, &batch)
    })
    .unwrap();

    assert_eq!(stored_contacts(&db), batch);
    assert_eq!(counts(&db), (1, 3));
}

#[test]
fn test_database_file_is_removed_on_drop() {
    let db = make_db();
    let path = db.path().to_path_buf();
    assert!(path.exists());

    drop(db);

    assert!(!path.exists());
}
