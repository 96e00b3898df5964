//! Console session tests against the sample catalogue in `data/`

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::io::Cursor;
use std::path::PathBuf;

use library_desk::{
    cli::Console,
    config::{AppConfig, CatalogueConfig},
    models::{loan::format_date, Collection},
    repository::{items::ItemsRepository, Repository},
    services::Services,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
}

fn sample_catalogue() -> CatalogueConfig {
    CatalogueConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        ..CatalogueConfig::default()
    }
}

/// Run a whole session from a script and return everything printed
fn run_session(script: &str) -> String {
    let config = AppConfig {
        catalogue: sample_catalogue(),
        ..AppConfig::default()
    };
    let items = ItemsRepository::load(&config.catalogue);
    let services = Services::new(&config);

    let mut console =
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()).with_clock(fixed_now);
    let user = console
        .prompt_user()
        .expect("Failed to prompt user")
        .expect("No user in script");
    let mut repo = Repository::new(items, user);
    console.run(&mut repo, &services).expect("Session failed");

    String::from_utf8(console.into_output()).expect("Output is not UTF-8")
}

#[test]
fn test_sample_catalogue_loads() {
    let items = ItemsRepository::load(&sample_catalogue());
    // One malformed row in books.csv is skipped
    assert_eq!(items.count(Collection::Books), 4);
    assert_eq!(items.count(Collection::Magazines), 3);
    assert_eq!(items.count(Collection::Journals), 3);
    assert!(items.find("0000000000").is_empty());
}

#[test]
fn test_student_borrows_book() {
    let out = run_session("Ajay\n1\n1\n0439554934\n4\n7\n");

    assert!(out.contains("Successfully borrowed a book."));
    assert!(out.contains("Borrowed Items for User Ajay:"));
    assert!(out.contains("Borrowed from Books:"));
    assert!(out.contains(
        "Type: Book, Count: 3 ISBN: 0439554934 Authors: J.K. Rowling \
         Title: Harry Potter and the Philosopher's Stone"
    ));
    assert!(out.contains(&format!("Borrowed Date: {}", format_date(&fixed_now()))));
    assert!(out.contains(&format!(
        "Return Date: {}",
        format_date(&(fixed_now() + Duration::days(30)))
    )));
}

#[test]
fn test_faculty_due_date() {
    let out = run_session("Prof. Rao\n2\n1\nNature\n4\n7\n");

    assert!(out.contains("Successfully borrowed a journal."));
    assert!(out.contains("Identifier: Nature, Location: Unknown location, Return Duration: Unknown duration"));
    assert!(out.contains(&format!(
        "Return Date: {}",
        format_date(&(fixed_now() + Duration::days(180)))
    )));
}

#[test]
fn test_unknown_identifier_is_stored_and_reported() {
    let out = run_session("Ajay\n1\n1\nNOT-IN-CATALOGUE\n4\n7\n");

    assert!(out.contains("Successfully borrowed the item."));
    assert!(out.contains("Item not found: NOT-IN-CATALOGUE"));
    assert!(!out.contains("No items currently borrowed."));
}

#[test]
fn test_loan_desk_round_trip() {
    let out = run_session("Ajay\n1\n2\nWired\n2\nWired\n4\n3\nWired\n2\nWired\n3\nNope\n7\n");

    assert_eq!(out.matches("Successfully borrowed the item on loan.").count(), 2);
    assert!(out.contains("[ERROR] Business rule violation: Wired is already on loan until"));
    assert!(out.contains("Borrowed from Magazines:"));
    assert!(out.contains("Item is on loan until"));
    assert!(out.contains(&format!(
        "Return Date: {}",
        format_date(&(fixed_now() + Duration::days(7)))
    )));
    assert!(out.contains("Item returned."));
    assert!(out.contains("Item not found: Nope"));
}

#[test]
fn test_purchase_then_borrow() {
    let script = "Ajay\n1\n\
                  6\n9780262033848\nCormen, Leiserson\nIntroduction to Algorithms\nShelf C\n4 weeks\n2\n\
                  1\n9780262033848\n4\n7\n";
    let out = run_session(script);

    assert!(out.contains("Book purchased and added to the library."));
    assert!(out.contains("Successfully borrowed a book."));
    assert!(out.contains("Identifier: 9780262033848, Location: Shelf C, Return Duration: 4 weeks"));
}

#[test]
fn test_register_keeps_session_user() {
    let out = run_session("Ajay\n1\n5\nPriya\n4\n7\n");

    assert!(out.contains("User registered successfully."));
    assert!(out.contains("Borrowed Items for User Ajay:"));
}
