//! End-to-end cart scenarios against the demo catalog.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use storefront_cart::{
    CART_KEY, CartError, CartEvent, CartState, CartStore, FileKeyValueStore, Hydration,
    InMemoryKeyValueStore, KeyValueStore, RecordingPresenter,
};
use storefront_catalog::StaticCatalog;
use storefront_core::{ProductId, format_money};

fn id(raw: u32) -> ProductId {
    ProductId::new(raw)
}

fn open(
    storage: Arc<InMemoryKeyValueStore>,
) -> CartStore<StaticCatalog, Arc<InMemoryKeyValueStore>, RecordingPresenter> {
    CartStore::open(StaticCatalog::demo(), storage, RecordingPresenter::answering(true))
}

#[test]
fn adding_the_same_product_twice_gives_one_line_of_two() {
    let mut store = open(Arc::new(InMemoryKeyValueStore::new()));

    store.add_item(id(1)).unwrap();
    store.add_item(id(1)).unwrap();

    assert_eq!(store.state().len(), 1);
    assert_eq!(store.state().get(id(1)).unwrap().quantity(), 2);
    assert_eq!(store.compute_total(), dec!(179.98));
}

#[test]
fn add_then_remove_leaves_empty_cart() {
    let mut store = open(Arc::new(InMemoryKeyValueStore::new()));

    store.add_item(id(1)).unwrap();
    store.remove_item(id(1));

    assert!(store.state().is_empty());
    assert_eq!(format_money(store.compute_total()), "$0.00");
}

#[test]
fn checkout_reports_total_and_empties_persisted_cart() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let mut store = open(storage.clone());
    let events = store.subscribe();

    store.add_item(id(1)).unwrap();
    store.add_item(id(2)).unwrap();
    let receipt = store.checkout().unwrap();

    assert_eq!(receipt.total, dec!(219.98));
    assert_eq!(receipt.items, 2);
    assert!(
        store.presenter().acknowledgments[0].contains("Total: $219.98"),
        "unexpected acknowledgment: {:?}",
        store.presenter().acknowledgments
    );
    assert!(store.state().is_empty());
    assert_eq!(storage.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.presenter().closes, 1);

    let last = events.drain().pop().unwrap().payload().clone();
    match last {
        CartEvent::CheckedOut(e) => assert_eq!(e.receipt, receipt),
        other => panic!("Expected CheckedOut event, got {other:?}"),
    }
}

#[test]
fn unknown_product_is_rejected_and_cart_unchanged() {
    let mut store = open(Arc::new(InMemoryKeyValueStore::new()));
    store.add_item(id(3)).unwrap();
    let before = store.state().clone();

    assert_eq!(store.add_item(id(999)), Err(CartError::NotFound(id(999))));
    assert_eq!(*store.state(), before);
}

#[test]
fn empty_checkout_fails_without_writing() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let mut store = open(storage.clone());

    assert_eq!(store.checkout(), Err(CartError::EmptyCart));
    assert!(store.state().is_empty());
    assert_eq!(storage.writes(), 0);
}

#[test]
fn cart_survives_restart_through_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut first = CartStore::open(
        StaticCatalog::demo(),
        FileKeyValueStore::new(&path),
        RecordingPresenter::new(),
    );
    first.add_item(id(4)).unwrap();
    first.add_item(id(10)).unwrap();
    first.add_item(id(4)).unwrap();
    let expected = first.state().clone();
    drop(first);

    let mut second = CartStore::new(
        StaticCatalog::demo(),
        FileKeyValueStore::new(&path),
        RecordingPresenter::new(),
    );
    assert_eq!(second.hydrate(), Hydration::Restored(2));
    assert_eq!(*second.state(), expected);
    assert_eq!(second.item_count(), 3);
    assert_eq!(second.compute_total(), dec!(569.97));
}

#[test]
fn snapshot_written_by_the_browser_storefront_hydrates() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    storage
        .set(
            CART_KEY,
            r#"[{"id":7,"name":"Linen Shirt","category":"fashion","seller":"Minimalist Fashion","price":79.99,"image":"👔","description":"Pure linen short-sleeve shirt, breathable and durable","rating":4.6,"reviews":92,"quantity":3}]"#,
        )
        .unwrap();

    let store = open(storage);

    let line = store.state().get(id(7)).unwrap();
    assert_eq!(line.quantity(), 3);
    assert_eq!(line.product().seller(), "Minimalist Fashion");
    assert_eq!(store.compute_total(), dec!(239.97));
    assert_eq!(store.presenter().last_render(), Some((3, dec!(239.97))));
}

#[test]
fn unreadable_snapshot_starts_empty_and_is_overwritten_on_next_add() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    storage.set(CART_KEY, "{\"broken\": ").unwrap();

    let mut store = open(storage.clone());
    assert!(store.state().is_empty());
    assert_eq!(store.compute_total(), Decimal::ZERO);

    store.add_item(id(9)).unwrap();
    let stored = CartState::from_snapshot(&storage.get(CART_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored, *store.state());
}
