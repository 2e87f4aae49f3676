use super::*;
use glam::Vec2;
use std::collections::HashSet;

fn room(name: &str) -> Layer {
    Layer::room(name, Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0))
}

#[test]
fn test_add_assigns_fresh_id_and_keeps_selection() {
    let mut store = LayerStore::new();
    let first = store.add(room("Room 1"));
    store.select(Some(&first));

    let second = store.add(room("Room 2").with_id(first.as_str()));

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.selected(), Some(&first));
}

#[test]
fn test_ids_stay_unique_over_add_remove_sequences() {
    let mut store = LayerStore::new();
    let mut ids = Vec::new();

    for i in 0..50 {
        ids.push(store.add(room(&format!("Room {i}"))));
        if i % 3 == 0 {
            let victim = ids.remove(ids.len() / 2);
            store.remove(&victim);
        }
    }

    let unique: HashSet<&LayerId> = store.iter().map(|l| &l.id).collect();
    assert_eq!(unique.len(), store.len());
    assert_eq!(store.len(), ids.len());
}

#[test]
fn test_remove_clears_selection_only_for_removed_layer() {
    let mut store = LayerStore::new();
    let a = store.add(room("A"));
    let b = store.add(room("B"));

    store.select(Some(&a));
    store.remove(&b);
    assert_eq!(store.selected(), Some(&a));

    store.remove(&a);
    assert!(store.selected().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_absent_ids_are_no_ops() {
    let mut store = LayerStore::new();
    let a = store.add(room("A"));
    let ghost = LayerId::new("ghost");

    assert!(store.remove(&ghost).is_none());
    assert!(!store.rename(&ghost, "Nope"));
    store.select(Some(&ghost));

    assert!(store.selected().is_none());
    assert_eq!(store.find(&a).map(|l| l.name.as_str()), Some("A"));
}

#[test]
fn test_rename_changes_only_name() {
    let mut store = LayerStore::new();
    let a = store.add(room("A"));

    assert!(store.rename(&a, "Living"));

    let layer = store.find(&a).expect("Layer existiert");
    assert_eq!(layer.name, "Living");
    assert_eq!(layer.kind(), LayerKind::Room);
}

#[test]
fn test_replace_all_swaps_collection_and_clears_selection() {
    let mut store = LayerStore::new();
    let a = store.add(room("A"));
    store.add(room("B"));
    store.select(Some(&a));

    let rekeyed = store.replace_all(vec![
        Layer::text("12'-0\"", Vec2::new(1.0, 2.0)).with_id("t1"),
    ]);

    assert_eq!(rekeyed, 0);
    assert_eq!(store.len(), 1);
    assert!(store.find(&a).is_none());
    assert!(store.selected().is_none());
    assert!(store.find(&LayerId::new("t1")).is_some());
}

#[test]
fn test_replace_all_rekeys_empty_and_duplicate_ids() {
    let mut store = LayerStore::new();

    let rekeyed = store.replace_all(vec![
        room("A").with_id("x"),
        room("B").with_id("x"),
        room("C"),
    ]);

    assert_eq!(rekeyed, 2);
    assert_eq!(store.len(), 3);
    let unique: HashSet<&LayerId> = store.iter().map(|l| &l.id).collect();
    assert_eq!(unique.len(), 3);
    assert!(store.iter().all(|l| !l.id.is_empty()));
}

#[test]
fn test_mutation_does_not_affect_shared_snapshot() {
    let mut store = LayerStore::new();
    store.add(room("A"));
    let snapshot = store.shared();

    store.add(room("B"));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_next_name_skips_taken_names() {
    let mut store = LayerStore::new();
    assert_eq!(store.next_name(LayerKind::Room), "Room 1");

    store.add(room("Room 2"));
    assert_eq!(store.next_name(LayerKind::Room), "Room 3");
    assert_eq!(store.next_name(LayerKind::CustomRegion), "Region 1");
}

#[test]
fn test_iteration_preserves_insertion_order_after_remove() {
    let mut store = LayerStore::new();
    store.add(room("A"));
    let b = store.add(room("B"));
    store.add(room("C"));

    store.remove(&b);

    let names: Vec<&str> = store.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}
