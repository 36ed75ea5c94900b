use std::io::Cursor;

use chrono::{Duration, Utc};
use libris_auth::CredentialStore;
use libris_console::{OutputFormat, Session};
use libris_core::{Clock, ItemId, ManualClock};
use libris_inventory::{InventoryStore, ItemStatus, ItemSummary};

const LOGIN: &str = "1\n2\nadmin\n1234\n";

fn admin() -> CredentialStore {
    CredentialStore::with_admin("admin", "1234")
}

fn run<C: Clock>(
    script: &str,
    store: &mut InventoryStore<C>,
    credentials: &mut CredentialStore,
    format: OutputFormat,
) -> String {
    let mut out = Vec::new();
    Session::new(Cursor::new(script.as_bytes()), &mut out, store, credentials)
        .with_output_format(format)
        .run()
        .expect("session should not fail on in-memory buffers");
    String::from_utf8(out).expect("console output is utf-8")
}

#[test]
fn staff_lending_walkthrough() {
    let mut store = InventoryStore::new();
    let mut credentials = admin();

    let script = [
        LOGIN,
        "1\nDune\nHerbert\n",
        "2\nFoo\nBar\nPDF\n",
        "4\n1\nS100\n",
        "4\n1\nS200\n",
        "5\n1\n",
        "5\n1\n",
        "3\n2\n",
        "3\n2\n",
        "6\n",
        "7\n",
        "3\n",
    ]
    .concat();

    let out = run(&script, &mut store, &mut credentials, OutputFormat::Text);

    assert!(out.contains("Book added successfully: ID: 1, Title: Dune, Author: Herbert (Available)"));
    assert!(out.contains(
        "EBook added successfully: ID: 2, Title: Foo, Author: Bar (Available), File Format: PDF"
    ));
    assert!(out.contains("Borrowed successfully: ID: 1, Title: Dune, Author: Herbert (Borrowed by: S100)"));
    assert!(out.contains("Item is already borrowed."));
    assert!(out.contains("Returned successfully: ID: 1, Title: Dune, Author: Herbert (Available)"));
    assert!(!out.contains("overdue"));
    assert!(out.contains("This item was not borrowed."));
    assert!(out.contains("Item removed: ID: 2, Title: Foo, Author: Bar (Available), File Format: PDF"));
    assert!(out.contains("Item with ID 2 not found."));
    assert!(out.contains("Items in the library:\nID: 1, Title: Dune, Author: Herbert (Available)\n"));
    assert!(out.contains("Logging out."));
    assert!(out.ends_with("Exiting the system. Goodbye!\n"));

    let listed = store.list_all();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, ItemId::new(1));
    assert_eq!(listed[0].status, ItemStatus::Available);
}

#[test]
fn overdue_return_prints_fine() {
    let clock = ManualClock::new(Utc::now());
    let mut store = InventoryStore::with_clock(clock.clone());
    let mut credentials = admin();

    let script = [LOGIN, "1\nDune\nHerbert\n", "4\n1\nS100\n", "7\n3\n"].concat();
    run(&script, &mut store, &mut credentials, OutputFormat::Text);

    clock.advance(Duration::days(20));

    let script = [LOGIN, "5\n1\n", "7\n3\n"].concat();
    let out = run(&script, &mut store, &mut credentials, OutputFormat::Text);

    let notice = out.find("This item is overdue! Fine: 60 units.").expect("overdue notice");
    let returned = out.find("Returned successfully").expect("return line");
    assert!(notice < returned);
}

#[test]
fn bad_credentials_return_to_main_menu() {
    let mut store = InventoryStore::new();
    let mut credentials = admin();

    let out = run("1\n2\nadmin\nwrong\n3\n", &mut store, &mut credentials, OutputFormat::Text);
    assert!(out.contains("Invalid credentials. Returning to main menu."));
    assert!(!out.contains("Staff Menu"));
}

#[test]
fn created_accounts_can_log_in() {
    let mut store = InventoryStore::new();
    let mut credentials = admin();

    let script = "1\n1\nclerk\npw\n1\n1\nclerk\nother\n1\n2\nclerk\npw\n6\n7\n3\n";
    let out = run(script, &mut store, &mut credentials, OutputFormat::Text);

    assert!(out.contains("Account created successfully!"));
    assert!(out.contains("Account already exists!"));
    assert!(out.contains("Staff Menu"));
    assert!(out.contains("No items in the library."));
    assert!(credentials.authenticate("clerk", "pw").is_ok());
}

#[test]
fn staff_input_errors_are_recoverable() {
    let mut store = InventoryStore::new();
    let mut credentials = admin();

    let script = [LOGIN, "1\nDune\nHerbert\n", "4\none\n", "4\n1\n   \n", "5\n1\n", "9\n", "7\n3\n"].concat();
    let out = run(&script, &mut store, &mut credentials, OutputFormat::Text);

    assert!(out.contains("Invalid number."));
    assert!(out.contains("Holder ID cannot be empty."));
    assert!(out.contains("This item was not borrowed."));
    assert!(out.contains("Invalid option. Returning to staff menu."));
    assert!(!store.get(ItemId::new(1)).unwrap().is_borrowed());
}

#[test]
fn patron_json_listing_parses() {
    let mut store = InventoryStore::new();
    store.add_physical("Dune", "Herbert");
    store.add_electronic("Foo", "Bar", "PDF");
    let mut credentials = admin();

    let out = run("2\n1\n2\n3\n", &mut store, &mut credentials, OutputFormat::Json);

    let start = out.find('[').expect("json array start");
    let end = out.rfind(']').expect("json array end");
    let parsed: Vec<ItemSummary> = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(parsed, store.list_all());
}
