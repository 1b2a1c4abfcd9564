use proptest::prelude::*;
use verf_physics::collision::{
    overlaps, reflect, resolve_against_static, resolve_mutual, Xorshift32, VELOCITY_EPSILON,
};
use verf_physics::rigid_body::{Axis, Vec2};
use verf_physics::{Body, MassClass, WorldCore};

const EPS: f32 = 1e-3;

fn rect_strategy(mass: MassClass) -> impl Strategy<Value = Body> {
    (-60.0f32..60.0, -60.0f32..60.0, 1.0f32..48.0, 1.0f32..48.0)
        .prop_map(move |(x, y, w, h)| Body::rect(x, y, w, h, mass, 0.0).unwrap())
}

/// Length of the shared interval of `a` and `b` along `axis` (negative when apart).
fn penetration(a: &Body, b: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => a.right().min(b.right()) - a.left().max(b.left()),
        Axis::Y => a.bottom().min(b.bottom()) - a.top().max(b.top()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]

    #[test]
    fn overlap_is_symmetric(a in rect_strategy(MassClass::Movable), b in rect_strategy(MassClass::Movable)) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn static_resolution_leaves_no_penetration(
        mut movable in rect_strategy(MassClass::Movable),
        fixed in rect_strategy(MassClass::Immovable),
        seed in any::<u32>(),
    ) {
        prop_assume!(overlaps(&movable, &fixed));
        let mut rng = Xorshift32::new(seed);

        let axis = resolve_against_static(&mut movable, &fixed, 0.016, &mut rng);

        prop_assert!(penetration(&movable, &fixed, axis) <= EPS);
        prop_assert!(!movable.blocked.none);
    }

    #[test]
    fn mutual_resolution_splits_evenly(
        mut a in rect_strategy(MassClass::Movable),
        mut b in rect_strategy(MassClass::Movable),
        seed in any::<u32>(),
    ) {
        prop_assume!(overlaps(&a, &b));
        let (a0, b0) = (a.pos, b.pos);
        let mut rng = Xorshift32::new(seed);

        let axis = resolve_mutual(&mut a, &mut b, Vec2::zero(), &mut rng);

        let moved_a = a.pos - a0;
        let moved_b = b.pos - b0;
        prop_assert!((moved_a.x + moved_b.x).abs() <= EPS);
        prop_assert!((moved_a.y + moved_b.y).abs() <= EPS);
        prop_assert!(penetration(&a, &b, axis).abs() <= EPS);
        prop_assert!(!a.touching.none && !b.touching.none);
    }

    #[test]
    fn bounded_bodies_stay_inside(
        body in rect_strategy(MassClass::Movable),
        vx in -2000.0f32..2000.0,
        vy in -2000.0f32..2000.0,
        restitution in 0.0f32..=1.0,
    ) {
        let mut world = WorldCore::new();
        world.set_bounds(-50.0, -50.0, 100.0, 100.0).unwrap();
        world.set_world_bounds_restitution(restitution);
        let mut body = body;
        body.collide_world_bounds = true;
        body.velocity = Vec2::new(vx, vy);
        let id = world.add_body(body).unwrap();

        world.step(16.0);

        let body = world.body(id).unwrap();
        prop_assert!(body.left() >= -50.0 - EPS);
        prop_assert!(body.top() >= -50.0 - EPS);
        prop_assert!(body.right() <= 50.0 + EPS);
        prop_assert!(body.bottom() <= 50.0 + EPS);
    }

    #[test]
    fn reflection_follows_velocity_law(v in -1000.0f32..1000.0, r in 0.0f32..=1.0) {
        let expected = -v * r;
        let got = reflect(v, r);
        if expected.abs() < VELOCITY_EPSILON {
            prop_assert_eq!(got, 0.0);
        } else {
            prop_assert_eq!(got, expected);
        }
    }
}
