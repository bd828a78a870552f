use chrono::NaiveDate;
use ordiolib::{Order, OrderPatch, OrderStore, OrdioError, SaveOutcome, SortKey};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn order(id: i32, client: &str, ymd: (i32, u32, u32), amount: &str, status: &str) -> Order {
    Order::new(
        id,
        client,
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        Decimal::from_str_exact(amount).unwrap(),
        status,
    )
}

fn two_orders() -> OrderStore {
    OrderStore::with_orders(vec![
        order(1, "Acme", (2024, 1, 5), "99.50", "Open"),
        order(2, "Beta", (2024, 2, 10), "10", "Closed"),
    ])
}

fn ids(orders: &[Order]) -> Vec<i32> {
    orders.iter().map(|o| o.id).collect()
}

#[test]
fn sort_by_amount_is_numeric() {
    let store = OrderStore::with_orders(vec![
        order(1, "a", (2024, 1, 1), "99.50", "x"),
        order(2, "b", (2024, 1, 1), "10", "x"),
        order(3, "c", (2024, 1, 1), "50", "x"),
    ]);
    let sorted = store.sorted_by(SortKey::Amount);
    assert_eq!(ids(&sorted), vec![2, 3, 1]);
    // stored order untouched
    assert_eq!(ids(store.list()), vec![1, 2, 3]);
}

#[test]
fn sort_is_stable() {
    let store = OrderStore::with_orders(vec![
        order(1, "b", (2024, 3, 1), "1", "Open"),
        order(2, "a", (2024, 1, 1), "1", "Closed"),
        order(3, "b", (2024, 2, 1), "1", "Open"),
        order(4, "a", (2024, 1, 1), "1", "Closed"),
    ]);
    assert_eq!(ids(&store.sorted_by(SortKey::Client)), vec![2, 4, 1, 3]);
    assert_eq!(ids(&store.sorted_by(SortKey::Status)), vec![2, 4, 1, 3]);
    assert_eq!(ids(&store.sorted_by(SortKey::Date)), vec![2, 4, 3, 1]);
    assert_eq!(ids(&store.sorted_by(SortKey::Amount)), vec![1, 2, 3, 4]);
}

#[test]
fn sort_by_unknown_name_keeps_order() {
    let store = OrderStore::with_orders(vec![
        order(3, "c", (2024, 1, 1), "1", "x"),
        order(1, "a", (2024, 1, 1), "1", "x"),
    ]);
    assert_eq!(ids(&store.sorted_by_name("colour")), vec![3, 1]);
    assert_eq!(ids(&store.sorted_by_name("ID")), vec![1, 3]);
    assert_eq!(SortKey::from_menu_choice(3), Some(SortKey::Date));
    assert_eq!(SortKey::from_menu_choice(6), None);
}

#[test]
fn search_closed_finds_second() {
    let store = two_orders();
    assert_eq!(ids(&store.search("closed")), vec![2]);
    assert_eq!(ids(&store.search("ACME")), vec![1]);
    assert_eq!(ids(&store.search("2024-02")), vec![2]);
    assert_eq!(ids(&store.search("99.5")), vec![1]);
    assert_eq!(ids(&store.search("2024")), vec![1, 2]);
    assert_eq!(ids(&store.search("")), vec![1, 2]);
    assert!(store.search("zeta").is_empty());
}

#[test]
fn add_allows_duplicate_ids() {
    let mut store = two_orders();
    store.add(order(1, "Again", (2024, 5, 5), "1", "New"));
    assert_eq!(ids(store.list()), vec![1, 2, 1]);
}

#[test]
fn remove_takes_first_match_only() {
    let mut store = two_orders();
    store.add(order(1, "Again", (2024, 5, 5), "1", "New"));
    let removed = store.remove(1).expect("order 1");
    assert_eq!(removed.client, "Acme");
    assert_eq!(ids(store.list()), vec![2, 1]);
}

#[test]
fn remove_missing_id_changes_nothing() {
    let mut store = two_orders();
    let before = store.list().to_vec();
    assert!(store.remove(42).is_none());
    assert_eq!(store.list(), &before[..]);
}

#[test]
fn edit_overwrites_given_fields() {
    let mut store = two_orders();
    let patch = OrderPatch::from_input("", "2025-01-01", " 12.00 ", "Done").unwrap();
    let edited = store.edit(2, &patch).expect("order 2").clone();
    assert_eq!(edited, order(2, "Beta", (2025, 1, 1), "12.00", "Done"));
    assert_eq!(store.get(2), Some(&edited));
}

#[test]
fn edit_with_empty_patch_is_noop() {
    let mut store = two_orders();
    let before = store.get(1).cloned();
    let patch = OrderPatch::from_input("", "  ", "", "\t").unwrap();
    assert!(patch.is_empty());
    store.edit(1, &patch).expect("order 1");
    assert_eq!(store.get(1).cloned(), before);
    assert!(store.edit(9, &patch).is_none());
}

#[test]
fn patch_rejects_bad_input() {
    assert!(matches!(
        OrderPatch::from_input("x", "31/12/2024", "", ""),
        Err(OrdioError::Parse(_))
    ));
    assert!(matches!(
        OrderPatch::from_input("x", "", "ten", ""),
        Err(OrdioError::Parse(_))
    ));
}

#[test]
fn save_empty_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    let store = OrderStore::new();
    assert_eq!(store.save(&path).unwrap(), SaveOutcome::NothingToSave);
    assert!(!path.exists());
}

#[test]
fn save_then_load_every_format() {
    let dir = TempDir::new().unwrap();
    let store = two_orders();
    for name in ["orders.json", "orders.xml", "orders.csv"] {
        let path = dir.path().join(name);
        assert_eq!(store.save(&path).unwrap(), SaveOutcome::Saved(2));

        let mut loaded = OrderStore::new();
        loaded.add(order(99, "stale", (2000, 1, 1), "0", "gone"));
        assert_eq!(loaded.load(&path).unwrap(), 2, "{name}");
        assert_eq!(loaded.list(), store.list(), "{name}");
    }
}

#[test]
fn save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.csv");
    std::fs::write(&path, "old content that is much longer than the new one\n".repeat(20)).unwrap();
    let store = OrderStore::with_orders(vec![order(1, "A", (2024, 1, 1), "1", "s")]);
    assert_eq!(store.save(&path).unwrap(), SaveOutcome::Saved(1));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Id,Client,OrderDate,Amount,Status\n1,A,2024-01-01,1,s\n"
    );
}

#[test]
fn save_unsupported_format_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.txt");
    let err = two_orders().save(&path).unwrap_err();
    assert!(matches!(err, OrdioError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn load_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut store = two_orders();
    let err = store.load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, OrdioError::FileNotFound(_)));
    assert_eq!(store.len(), 2);
}

#[test]
fn failed_load_keeps_collection() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "Id,Client,OrderDate,Amount,Status\n1,A,2024-01-01,1,s\nx,B,2024-01-01,1,s\n").unwrap();
    let txt = dir.path().join("orders.txt");
    std::fs::write(&txt, "1,A").unwrap();

    let mut store = two_orders();
    assert!(matches!(store.load(&bad), Err(OrdioError::Parse(_))));
    assert!(matches!(store.load(&txt), Err(OrdioError::UnsupportedFormat(_))));
    assert_eq!(ids(store.list()), vec![1, 2]);
}

#[test]
fn display_is_one_line() {
    let o = order(1, "Acme", (2024, 1, 5), "99.5", "Open");
    assert_eq!(
        o.to_string(),
        "ID: 1, Client: Acme, Date: 2024-01-05, Amount: 99.50, Status: Open"
    );
}

#[test]
fn text_sort_is_case_sensitive_byte_order() {
    // upper case sorts before lower case: "Acme" < "Beta" < "acme" < "beta"
    let store = OrderStore::with_orders(vec![
        order(1, "beta", (2024, 1, 1), "1", "open"),
        order(2, "Acme", (2024, 1, 1), "1", "Open"),
        order(3, "acme", (2024, 1, 1), "1", "closed"),
        order(4, "Beta", (2024, 1, 1), "1", "Closed"),
    ]);
    assert_eq!(ids(&store.sorted_by(SortKey::Client)), vec![2, 4, 3, 1]);
    assert_eq!(ids(&store.sorted_by(SortKey::Status)), vec![4, 2, 3, 1]);
}
