/// Tests for SceneManager
///
/// These tests validate scene creation, retrieval, removal, naming,
/// and active scene tracking.

use super::*;

// ============================================================================
// Tests: SceneManager Creation
// ============================================================================

#[test]
fn test_scene_manager_new() {
    let sm = SceneManager::new();
    assert_eq!(sm.scene_count(), 0);
    assert!(sm.active().is_none());
}

// ============================================================================
// Tests: Create Scene
// ============================================================================

#[test]
fn test_create_scene() {
    let mut sm = SceneManager::new();
    let scene = sm.create_scene("main").unwrap();
    assert_eq!(scene.name(), "main");
    assert_eq!(sm.scene_count(), 1);
}

#[test]
fn test_create_scene_duplicate_name_fails() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();

    let result = sm.create_scene("main");
    assert!(result.is_err());
    assert_eq!(sm.scene_count(), 1);
}

#[test]
fn test_scene_names() {
    let mut sm = SceneManager::new();
    sm.create_scene("menu").unwrap();
    sm.create_scene("level1").unwrap();

    let mut names = sm.scene_names();
    names.sort();
    assert_eq!(names, vec!["level1", "menu"]);
}

// ============================================================================
// Tests: Get / Remove Scene
// ============================================================================

#[test]
fn test_scene_found_and_not_found() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();

    assert!(sm.scene("main").is_some());
    assert!(sm.scene_mut("main").is_some());
    assert!(sm.scene("other").is_none());
}

#[test]
fn test_remove_scene() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();

    let removed = sm.remove_scene("main");
    assert!(removed.is_some());
    assert_eq!(sm.scene_count(), 0);
    assert!(sm.remove_scene("main").is_none());
}

// ============================================================================
// Tests: Active Scene
// ============================================================================

#[test]
fn test_set_active() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();

    sm.set_active("main").unwrap();

    assert_eq!(sm.active_name(), Some("main"));
    assert_eq!(sm.active().map(|s| s.name()), Some("main"));
    assert!(sm.active_mut().is_some());
}

#[test]
fn test_set_active_unknown_scene_fails() {
    let mut sm = SceneManager::new();
    assert!(sm.set_active("ghost").is_err());
    assert!(sm.active().is_none());
}

#[test]
fn test_remove_active_scene_clears_active() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();
    sm.set_active("main").unwrap();

    sm.remove_scene("main");

    assert!(sm.active().is_none());
    assert!(sm.active_name().is_none());
}

#[test]
fn test_remove_other_scene_keeps_active() {
    let mut sm = SceneManager::new();
    sm.create_scene("main").unwrap();
    sm.create_scene("other").unwrap();
    sm.set_active("main").unwrap();

    sm.remove_scene("other");

    assert_eq!(sm.active_name(), Some("main"));
}

#[test]
fn test_clear() {
    let mut sm = SceneManager::new();
    sm.create_scene("a").unwrap();
    sm.set_active("a").unwrap();

    sm.clear();

    assert_eq!(sm.scene_count(), 0);
    assert!(sm.active().is_none());
}
