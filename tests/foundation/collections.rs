//! Integration tests for persistent collections
//!
//! Tests DVec and DMap structural sharing and ordering.

use dash_foundation::{DMap, DVec, Key};

// =============================================================================
// DVec
// =============================================================================

#[test]
fn vec_push_is_persistent() {
    let v1: DVec<i64> = DVec::new();
    let v2 = v1.push_back(1);
    let v3 = v2.push_back(2).push_front(0);

    assert!(v1.is_empty());
    assert_eq!(v2.len(), 1);
    assert_eq!(v3.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn vec_update_in_and_out_of_range() {
    let v: DVec<i64> = [1, 2, 3].into_iter().collect();
    let updated = v.update(1, 20).unwrap();
    assert_eq!(updated.get(1), Some(&20));
    assert_eq!(v.get(1), Some(&2));
    assert!(v.update(3, 0).is_none());
}

#[test]
fn vec_slice_and_reverse() {
    let v: DVec<i64> = (0..6).collect();
    assert_eq!(v.slice(2, 4).iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(v.reversed().first(), Some(&5));
    assert_eq!(v.last(), Some(&5));
}

#[test]
fn vec_default_is_empty() {
    let v: DVec<String> = DVec::default();
    assert!(v.is_empty());
    assert_eq!(v.first(), None);
}

// =============================================================================
// DMap
// =============================================================================

#[test]
fn map_insert_is_persistent() {
    let m1: DMap<Key, i64> = DMap::new();
    let m2 = m1.insert(Key::from("a"), 1);
    let m3 = m2.insert(Key::from("a"), 2);

    assert!(m1.is_empty());
    assert_eq!(m2.get(&Key::from("a")), Some(&1));
    assert_eq!(m3.get(&Key::from("a")), Some(&2));
}

#[test]
fn map_remove() {
    let m: DMap<Key, i64> = [(Key::Int(1), 1), (Key::Int(2), 2)].into_iter().collect();
    let removed = m.remove(&Key::Int(1));
    assert!(!removed.contains_key(&Key::Int(1)));
    assert!(m.contains_key(&Key::Int(1)));
}

#[test]
fn map_iterates_in_key_order() {
    let m: DMap<Key, i64> = [
        (Key::from("b"), 2),
        (Key::Int(10), 10),
        (Key::from("a"), 1),
        (Key::Int(2), 0),
    ]
    .into_iter()
    .collect();

    let keys: Vec<String> = m.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["2", "10", "a", "b"]);
    assert_eq!(m.first().map(|(k, _)| k.clone()), Some(Key::Int(2)));
    assert_eq!(m.last().map(|(_, v)| *v), Some(2));
}

#[test]
fn map_union_prefers_other() {
    let a: DMap<Key, i64> = [(Key::from("x"), 1), (Key::from("y"), 1)].into_iter().collect();
    let b: DMap<Key, i64> = [(Key::from("y"), 2), (Key::from("z"), 2)].into_iter().collect();
    let merged = a.union(&b);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get(&Key::from("y")), Some(&2));
    assert_eq!(merged.get(&Key::from("x")), Some(&1));
}

#[test]
fn map_values_follow_keys() {
    let m: DMap<Key, i64> = [(Key::Int(3), 30), (Key::Int(1), 10)].into_iter().collect();
    assert_eq!(m.values().copied().collect::<Vec<_>>(), vec![10, 30]);
}
