//! Integration tests for the frame pipeline
//!
//! These tests drive a full Engine over a recording backend and verify the
//! per-frame ordering guarantees: layer hooks, pass tags and sprite order.
//! No GPU required.
//!
//! Run with: cargo test --test frame_pipeline_integration_tests


use std::time::Duration;
use serial_test::serial;
use stellar_engine::stellar::asset::AssetId;
use stellar_engine::stellar::camera::{Camera, Viewport};
use stellar_engine::stellar::event::Event;
use stellar_engine::stellar::graphics_device::Color;
use stellar_engine::stellar::layer::GameLayer;
use stellar_engine::stellar::render::{FnPass, PassTag};
use stellar_engine::stellar::scene::{FnSystem, SpriteRenderer, Transform};
use stellar_engine::stellar::{Engine, EngineConfig};
use test_utils::{Recorded, Recording, RecordingDevice, draws, markers, new_recording, push_marker};

// ============================================================================
// HELPERS
// ============================================================================

const FRAME: Duration = Duration::from_millis(16);

fn create_engine(config: EngineConfig) -> (Engine, Recording) {
    let recording = new_recording();
    let engine = Engine::new(config, RecordingDevice::new(&recording)).unwrap();
    (engine, recording)
}

/// Create and activate a scene with a main camera
fn setup_scene(engine: &mut Engine) {
    let scene = engine.scenes_mut().create_scene("main").unwrap();
    let components = scene.components_mut();
    let camera = components.spawn_named("Camera");
    components.insert(camera, Camera::new(Viewport::new(800.0, 600.0))).unwrap();
    scene.set_main_camera(camera).unwrap();
    engine.scenes_mut().set_active("main").unwrap();
}

fn marker_pass(tag: PassTag, name: &'static str, recording: &Recording) -> FnPass {
    let recording = recording.clone();
    FnPass::new(tag, name, move |_ctx| {
        push_marker(&recording, name);
        Ok(())
    })
}

// ============================================================================
// PASS ORDER TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_passes_run_in_tag_order() {
    let (mut engine, recording) = create_engine(EngineConfig::default().without_default_passes());
    setup_scene(&mut engine);

    // Registered out of order on purpose
    let passes = engine.render_passes_mut();
    passes.register_pass(marker_pass(PassTag::PostProcess, "bloom", &recording));
    passes.register_pass(marker_pass(PassTag::Ui, "hud", &recording));
    passes.register_pass(marker_pass(PassTag::World, "tiles", &recording));
    passes.register_pass(marker_pass(PassTag::ClearScreen, "clear", &recording));
    passes.register_pass(marker_pass(PassTag::World, "actors", &recording));

    engine.push_layer(GameLayer::new()).unwrap();
    engine.tick(FRAME).unwrap();

    assert_eq!(markers(&recording), vec!["clear", "tiles", "actors", "hud", "bloom"]);

    let calls = recording.lock().unwrap();
    assert_eq!(calls.first(), Some(&Recorded::BeginFrame));
    assert_eq!(calls.last(), Some(&Recorded::EndFrame));
}

#[test]
#[serial]
fn test_integration_passes_run_once_per_frame() {
    let (mut engine, recording) = create_engine(EngineConfig::default().without_default_passes());
    setup_scene(&mut engine);
    engine.render_passes_mut().register_pass(marker_pass(PassTag::World, "world", &recording));
    engine.push_layer(GameLayer::new()).unwrap();

    for _ in 0..3 {
        engine.tick(FRAME).unwrap();
    }

    assert_eq!(markers(&recording), vec!["world", "world", "world"]);
    assert_eq!(engine.frame_index(), 3);
}

#[test]
#[serial]
fn test_integration_default_passes_clear_then_draw() {
    let config = EngineConfig::default().with_clear_color(Color::BLACK);
    let (mut engine, recording) = create_engine(config);
    setup_scene(&mut engine);

    let components = engine.scenes_mut().active_mut().unwrap().components_mut();
    let player = components.spawn_named("Player");
    components.insert(player, Transform::from_xy(10.0, 20.0)).unwrap();
    components.insert(player, SpriteRenderer::new(AssetId::new())).unwrap();

    engine.push_layer(GameLayer::new()).unwrap();
    engine.tick(FRAME).unwrap();

    let calls = recording.lock().unwrap();
    assert_eq!(calls.len(), 6);
    assert_eq!(calls[0], Recorded::BeginFrame);
    assert_eq!(calls[1], Recorded::Clear(Color::BLACK));
    assert_eq!(calls[2], Recorded::BatchBegin);
    assert!(matches!(calls[3], Recorded::Draw(draw) if draw.position.x == 10.0 && draw.position.y == 20.0));
    assert_eq!(calls[4], Recorded::BatchEnd);
    assert_eq!(calls[5], Recorded::EndFrame);
}

// ============================================================================
// SPRITE ORDER TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_sprites_sorted_by_layer_then_depth() {
    let (mut engine, recording) = create_engine(EngineConfig::default());
    setup_scene(&mut engine);

    let background = AssetId::new();
    let hero = AssetId::new();
    let tree = AssetId::new();
    let cloud = AssetId::new();

    let components = engine.scenes_mut().active_mut().unwrap().components_mut();
    for (texture, layer_depth, depth) in [
        (cloud, 2.0, 0.0),
        (tree, 1.0, 5.0),
        (hero, 1.0, 1.0),
        (background, 0.0, 9.0),
    ] {
        let entity = components.spawn();
        components.insert(entity, Transform::default().with_depth(depth)).unwrap();
        components.insert(entity, SpriteRenderer::new(texture).with_layer_depth(layer_depth)).unwrap();
    }

    engine.push_layer(GameLayer::new()).unwrap();
    engine.tick(FRAME).unwrap();

    let textures: Vec<AssetId> = draws(&recording).iter().map(|draw| draw.texture).collect();
    assert_eq!(textures, vec![background, hero, tree, cloud]);
}

#[test]
#[serial]
fn test_integration_hidden_and_inactive_sprites_skipped() {
    let (mut engine, recording) = create_engine(EngineConfig::default());
    setup_scene(&mut engine);

    let shown = AssetId::new();
    let components = engine.scenes_mut().active_mut().unwrap().components_mut();

    let visible = components.spawn();
    components.insert(visible, SpriteRenderer::new(shown)).unwrap();

    let hidden = components.spawn();
    let mut sprite = SpriteRenderer::new(AssetId::new());
    sprite.visible = false;
    components.insert(hidden, sprite).unwrap();

    let inactive = components.spawn();
    components.insert(inactive, SpriteRenderer::new(AssetId::new())).unwrap();
    components.set_active(inactive, false).unwrap();

    engine.push_layer(GameLayer::new()).unwrap();
    engine.tick(FRAME).unwrap();

    let textures: Vec<AssetId> = draws(&recording).iter().map(|draw| draw.texture).collect();
    assert_eq!(textures, vec![shown]);
}

// ============================================================================
// FRAME LOOP TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_no_camera_renders_nothing() {
    let (mut engine, recording) = create_engine(EngineConfig::default());
    engine.scenes_mut().create_scene("main").unwrap();
    engine.scenes_mut().set_active("main").unwrap();
    engine.render_passes_mut().register_pass(marker_pass(PassTag::Ui, "hud", &recording));
    engine.push_layer(GameLayer::new()).unwrap();

    engine.tick(FRAME).unwrap();

    assert!(recording.lock().unwrap().is_empty());
    assert_eq!(engine.frame_index(), 1);
}

#[test]
#[serial]
fn test_integration_systems_run_before_render() {
    let (mut engine, recording) = create_engine(EngineConfig::default().without_default_passes());
    setup_scene(&mut engine);

    let system_recording = recording.clone();
    engine.scenes_mut().active_mut().unwrap().add_system(FnSystem::new("Mover", move |components, _delta| {
        push_marker(&system_recording, "system");
        for (_, transform) in components.get_all_mut::<Transform>() {
            transform.position.x += 1.0;
        }
        Ok(())
    }));
    engine.render_passes_mut().register_pass(marker_pass(PassTag::World, "world", &recording));
    engine.push_layer(GameLayer::new()).unwrap();

    engine.tick(FRAME).unwrap();
    engine.tick(FRAME).unwrap();

    assert_eq!(markers(&recording), vec!["system", "world", "system", "world"]);
}

#[test]
#[serial]
fn test_integration_resize_updates_device_and_camera() {
    let (mut engine, recording) = create_engine(EngineConfig::default());
    setup_scene(&mut engine);
    engine.push_layer(GameLayer::new()).unwrap();

    engine.dispatch_event(&Event::Resized { width: 1280, height: 720 }).unwrap();

    assert_eq!(*recording.lock().unwrap(), vec![Recorded::Resize(1280, 720)]);
    let camera = engine.scenes().active().unwrap().main_camera().unwrap();
    assert_eq!(*camera.viewport(), Viewport::new(1280.0, 720.0));
}

#[test]
#[serial]
fn test_integration_scene_activated_after_layer_runs() {
    let (mut engine, recording) = create_engine(EngineConfig::default().without_default_passes());
    engine.render_passes_mut().register_pass(marker_pass(PassTag::World, "world", &recording));
    engine.push_layer(GameLayer::new()).unwrap();

    setup_scene(&mut engine);
    for _ in 0..3 {
        engine.tick(FRAME).unwrap();
    }

    let scene = engine.scenes().active().unwrap();
    assert!(scene.is_running());
    assert_eq!(scene.update_count(), 3);
    assert_eq!(markers(&recording), vec!["world", "world", "world"]);
}
