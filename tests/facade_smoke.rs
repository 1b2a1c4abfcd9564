use verf_physics::{flag_left, flag_none, flag_top, World};

#[test]
fn facade_step_smoke() {
    let mut world = World::new(0.0, 0.0);
    world.enable_step_stats(true);

    let a = world.add_body(10.0, 0.0, 32.0, 32.0, false, 0.0);
    let b = world.add_body(40.0, 0.0, 32.0, 32.0, true, 0.5);
    assert!(a != 0 && b != 0 && a != b);
    assert!(world.set_body_velocity(a, 100.0, 0.0));

    let collider = world.add_collider(a, b, None, true);
    assert_ne!(collider, 0);
    assert_eq!(world.collider_count(), 1);

    world.step(16.0, 16.0);

    assert_eq!(world.body_x(a), Some(8.0));
    assert_eq!(world.body_vx(a), Some(-50.0));
    assert_eq!(world.body_blocked(a), flag_left());
    assert_eq!(world.body_blocked(b), flag_none());
    assert_eq!(world.frame(), 1);

    let stats = world.get_step_stats();
    assert_eq!(stats.pairs_separated(), 1);
}

#[test]
fn facade_rejects_unknown_ids_with_zero_and_false() {
    let mut world = World::new(0.0, 0.0);
    assert_eq!(world.add_body(0.0, 0.0, 0.0, 10.0, false, 0.0), 0);
    assert_eq!(world.add_collider(1, 2, None, true), 0);
    assert!(!world.set_body_velocity(42, 1.0, 1.0));
    assert!(!world.remove_body(42));
    assert!(!world.remove_collider(42));
    assert_eq!(world.body_x(42), None);
    assert_eq!(world.body_touching(42), 0);
    assert!(!world.set_bounds(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn facade_bounds_and_removal() {
    let mut world = World::new(0.0, 0.0);
    assert!(world.set_bounds(0.0, 0.0, 100.0, 100.0));
    let id = world.add_body(-5.0, 10.0, 10.0, 10.0, false, 0.0);
    assert!(world.set_body_collide_world_bounds(id, true));
    assert!(world.set_body_velocity(id, -10.0, 0.0));

    world.step(0.0, 0.0);
    assert_eq!(world.body_x(id), Some(0.0));
    assert_eq!(world.body_blocked(id), flag_left());

    let other = world.add_body(50.0, 50.0, 10.0, 10.0, true, 0.0);
    assert_ne!(world.add_collider(id, other, None, false), 0);
    assert!(world.remove_body(id));
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.collider_count(), 0);

    let json = world.snapshot_json().unwrap();
    assert!(json.starts_with('['));

    world.destroy();
    assert_eq!(world.body_count(), 0);
}

#[test]
fn facade_reports_struck_face_as_bitmask() {
    let mut world = World::new(0.0, 0.0);
    let crate_id = world.add_body(0.0, -20.0, 32.0, 32.0, false, 0.0);
    let floor = world.add_body(0.0, 0.0, 32.0, 32.0, true, 0.0);
    assert_ne!(world.add_collider(crate_id, floor, None, true), 0);

    world.step(0.0, 0.0);

    assert_eq!(world.body_y(crate_id), Some(-32.0));
    assert_eq!(world.body_blocked(crate_id), flag_top());
}
