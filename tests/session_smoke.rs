use platformer_engine::simulation::LevelRecord;
use platformer_engine::{AnimationConfig, BodyOptions, Engine, PhysicsConfig, PlayerConfig, PlayerInput, Runtime};

const DT: f32 = 1.0 / 60.0;

#[test]
fn engine_level_json_round_trip() {
    let mut engine = Engine::new(1280.0, 720.0);
    engine.create_static_body(100.0, 500.0, 200.0, 20.0, "rect", 0.0, 0).unwrap();
    engine.create_static_body(400.0, 450.0, 80.0, 80.0, "triangle", 0.25, 2).unwrap();
    engine.create_static_body(600.0, 400.0, 60.0, 60.0, "circle", 0.0, 1).unwrap();
    assert_eq!(engine.brick_count(), 3);

    let json = engine.save_level_json().unwrap();
    let records: Vec<LevelRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].z, 2);

    let mut other = Engine::new(1280.0, 720.0);
    assert_eq!(other.load_level_json(&json).unwrap(), 3);
    assert_eq!(other.save_level_json().unwrap(), json);
    // bricks plus the player
    assert_eq!(other.body_count(), 4);
}

#[test]
fn player_runs_and_jumps() {
    let mut rt = Runtime::new(1280.0, 720.0);
    let start_x = rt.world().try_body(rt.player_body_id()).unwrap().pos.x;

    let run = PlayerInput { move_x: 1.0, ..PlayerInput::default() };
    for _ in 0..30 {
        rt.frame(DT, &run);
    }
    let body = rt.world().try_body(rt.player_body_id()).unwrap();
    assert!(body.pos.x > start_x + 50.0);
    assert!(body.grounded);
    assert_eq!(rt.player().animation().state().name(), "walk");

    let jump = PlayerInput { move_x: 1.0, jump_pressed: true, jump_held: true };
    rt.frame(DT, &jump);
    let hold = PlayerInput { move_x: 1.0, jump_pressed: false, jump_held: true };
    for _ in 0..5 {
        rt.frame(DT, &hold);
    }
    let body = rt.world().try_body(rt.player_body_id()).unwrap();
    assert!(!body.grounded);
    assert!(body.velocity.y < 0.0);
    assert_eq!(rt.player().animation().state().name(), "jump_up");

    for _ in 0..120 {
        rt.frame(DT, &PlayerInput::default());
    }
    let body = rt.world().try_body(rt.player_body_id()).unwrap();
    assert!(body.grounded);
    assert_eq!(body.pos.y + body.h, rt.world().floor_y());
}

#[test]
fn drawables_json_lists_world_then_skeleton() {
    let mut engine = Engine::new(1280.0, 720.0);
    engine.create_static_body(100.0, 500.0, 200.0, 20.0, "rect", 0.0, 0).unwrap();
    engine.frame(DT, 0.0, false, false);

    let json = engine.drawables_json().unwrap();
    let parts: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parts.len(), 13);
    assert_eq!(parts[0]["shape"], "rect");
    assert_eq!(parts[0]["w"], 200.0);
    assert_eq!(parts[12]["shape"], "circle");
}

#[test]
fn picking_through_the_facade() {
    let mut engine = Engine::new(1280.0, 720.0);
    let low = engine.create_static_body(100.0, 100.0, 100.0, 100.0, "rect", 0.0, 0).unwrap();
    let high = engine.create_static_body(150.0, 150.0, 100.0, 100.0, "circle", 0.0, 4).unwrap();
    assert_eq!(engine.pick_body(120.0, 120.0), Some(low));
    assert_eq!(engine.pick_body(190.0, 190.0), Some(high));
    assert!(engine.remove_body(high));
    assert_eq!(engine.pick_body(190.0, 190.0), Some(low));
    assert!(!engine.remove_body(engine.player_id()));
}

/// Run right for one second and return the player's horizontal speed.
fn running_speed(physics: PhysicsConfig, brick_top: Option<f32>) -> f32 {
    let mut rt = Runtime::with_configs(1280.0, 720.0, physics, AnimationConfig::default(), PlayerConfig::default());
    let id = rt.player_body_id();
    if let Some(top) = brick_top {
        rt.world_mut()
            .create_static_body(0.0, top, 1280.0, 20.0, &BodyOptions::default())
            .unwrap();
        let body = rt.world_mut().body_mut(id).unwrap();
        body.pos.y = top - body.h;
    }

    let dt = rt.world().config().fixed_dt;
    let run = PlayerInput { move_x: 1.0, ..PlayerInput::default() };
    for _ in 0..(1.0 / dt).round() as usize {
        rt.frame(dt, &run);
    }

    let body = rt.world().try_body(id).unwrap();
    assert!(body.grounded);
    if let Some(top) = brick_top {
        assert!((body.bottom() - top).abs() < 1.0, "fell off the brick: {}", body.bottom());
    }
    body.velocity.x
}

#[test]
fn player_reaches_move_speed_on_every_surface() {
    let move_speed = PlayerConfig::default().move_speed;
    for physics in [PhysicsConfig::default(), PhysicsConfig::high_precision()] {
        let step = physics.fixed_dt;
        let floor = running_speed(physics.clone(), None);
        let brick = running_speed(physics, Some(400.0));
        assert!((floor - move_speed).abs() < 1e-3, "floor at dt {step}: {floor}");
        assert!((brick - move_speed).abs() < 1e-3, "brick at dt {step}: {brick}");
    }
}

#[test]
fn pushed_crates_still_slow_down_on_the_floor() {
    let mut rt = Runtime::new(1280.0, 720.0);
    let floor_y = rt.world().floor_y();
    let id = rt
        .world_mut()
        .create_dynamic_body(600.0, floor_y - 40.0, 40.0, 40.0, &BodyOptions::default())
        .unwrap();
    rt.world_mut().body_mut(id).unwrap().velocity.x = 200.0;

    for _ in 0..60 {
        rt.frame(DT, &PlayerInput::default());
    }
    assert_eq!(rt.world().try_body(id).unwrap().velocity.x, 0.0);
}
