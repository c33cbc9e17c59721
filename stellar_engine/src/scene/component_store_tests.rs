/// Tests for ComponentStore

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Health(u32);

#[derive(Debug, Clone, PartialEq)]
struct Tag(&'static str);

// ============================================================================
// Tests: Entities
// ============================================================================

#[test]
fn test_store_new_is_empty() {
    let store = ComponentStore::new();
    assert_eq!(store.entity_count(), 0);
    assert_eq!(store.count::<Health>(), 0);
    assert!(store.get_all::<Health>().is_empty());
}

#[test]
fn test_spawn_and_despawn() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();

    assert!(store.is_alive(entity));
    assert!(store.is_active(entity));
    assert_eq!(store.entity_count(), 1);

    assert!(store.despawn(entity));
    assert!(!store.is_alive(entity));
    assert!(!store.despawn(entity));
    assert_eq!(store.entity_count(), 0);
}

#[test]
fn test_spawn_named_and_find() {
    let mut store = ComponentStore::new();
    let hero = store.spawn_named("hero");
    store.spawn_named("villain");

    assert_eq!(store.name(hero), Some("hero"));
    assert_eq!(store.find_by_name("hero"), Some(hero));
    assert_eq!(store.find_by_name("nobody"), None);
}

#[test]
fn test_despawn_removes_components() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.insert(entity, Health(10)).unwrap();
    store.insert(entity, Tag("a")).unwrap();

    store.despawn(entity);

    assert_eq!(store.count::<Health>(), 0);
    assert_eq!(store.count::<Tag>(), 0);
}

#[test]
fn test_set_active_on_dead_entity_fails() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.despawn(entity);

    assert!(store.set_active(entity, false).is_err());
    assert!(!store.is_active(entity));
}

// ============================================================================
// Tests: Components
// ============================================================================

#[test]
fn test_insert_and_get() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();

    assert_eq!(store.insert(entity, Health(10)).unwrap(), None);
    assert_eq!(store.get::<Health>(entity), Some(&Health(10)));
    assert!(store.has::<Health>(entity));
    assert!(!store.has::<Tag>(entity));
}

#[test]
fn test_insert_replaces_previous() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.insert(entity, Health(10)).unwrap();

    let previous = store.insert(entity, Health(20)).unwrap();

    assert_eq!(previous, Some(Health(10)));
    assert_eq!(store.get::<Health>(entity), Some(&Health(20)));
    assert_eq!(store.count::<Health>(), 1);
}

#[test]
fn test_insert_on_dead_entity_fails() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.despawn(entity);

    let result = store.insert(entity, Health(1));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_get_mut_modifies() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.insert(entity, Health(10)).unwrap();

    store.get_mut::<Health>(entity).unwrap().0 = 3;

    assert_eq!(store.get::<Health>(entity), Some(&Health(3)));
}

#[test]
fn test_remove_component() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.insert(entity, Health(10)).unwrap();

    assert_eq!(store.remove::<Health>(entity), Some(Health(10)));
    assert_eq!(store.remove::<Health>(entity), None);
    assert!(store.is_alive(entity));
}

// ============================================================================
// Tests: Queries
// ============================================================================

#[test]
fn test_get_all_skips_inactive_entities() {
    let mut store = ComponentStore::new();
    let a = store.spawn();
    let b = store.spawn();
    store.insert(a, Health(1)).unwrap();
    store.insert(b, Health(2)).unwrap();

    store.set_active(b, false).unwrap();

    let all = store.get_all::<Health>();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], (a, &Health(1)));
    assert_eq!(store.count::<Health>(), 2);

    // Per-entity access ignores the active flag
    assert_eq!(store.get::<Health>(b), Some(&Health(2)));
}

#[test]
fn test_get_all_mut_updates_active_only() {
    let mut store = ComponentStore::new();
    let a = store.spawn();
    let b = store.spawn();
    store.insert(a, Health(1)).unwrap();
    store.insert(b, Health(1)).unwrap();
    store.set_active(b, false).unwrap();

    for (_, health) in store.get_all_mut::<Health>() {
        health.0 += 10;
    }

    assert_eq!(store.get::<Health>(a), Some(&Health(11)));
    assert_eq!(store.get::<Health>(b), Some(&Health(1)));
}

#[test]
fn test_clear() {
    let mut store = ComponentStore::new();
    let entity = store.spawn();
    store.insert(entity, Tag("x")).unwrap();

    store.clear();

    assert_eq!(store.entity_count(), 0);
    assert_eq!(store.count::<Tag>(), 0);
}
