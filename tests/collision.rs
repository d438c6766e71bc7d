use glam::DVec2;
use orbital_sandbox::collision::resolve_collisions;
use orbital_sandbox::{Body, BodyId, SimulationParams, PALETTE};

fn body_at(id: u64, x: f64, y: f64, radius: f64) -> Body {
    Body::free(BodyId(id), DVec2::new(x, y), DVec2::ZERO, radius, PALETTE[id as usize % PALETTE.len()], &SimulationParams::default())
}

#[test]
fn heavier_body_absorbs_lighter_and_keeps_volume() {
    let params = SimulationParams::default();
    let a = body_at(0, 0.0, 0.0, 50.0);
    let b = body_at(1, 30.0, 0.0, 10.0);
    let expected_volume = a.volume() + b.volume();
    let mut bodies = vec![a, b];

    let merges = resolve_collisions(&mut bodies, &params);

    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].id, BodyId(0));
    assert_eq!(bodies[0].volume(), expected_volume);
    assert!((bodies[0].radius() - expected_volume.cbrt()).abs() < 1e-12);
    assert_eq!(bodies[0].mass(), params.mass_for_radius(bodies[0].radius()));
    assert_eq!(merges.len(), 1);
    assert_eq!(merges[0].absorber, BodyId(0));
    assert_eq!(merges[0].absorbed, BodyId(1));
}

#[test]
fn absorber_keeps_its_position_and_velocity() {
    let params = SimulationParams::default();
    let mut a = body_at(0, 0.0, 0.0, 50.0);
    a.velocity = DVec2::new(1.5, -0.5);
    let mut b = body_at(1, 20.0, 10.0, 10.0);
    b.velocity = DVec2::new(-30.0, 12.0);
    let mut bodies = vec![a, b];

    resolve_collisions(&mut bodies, &params);

    assert_eq!(bodies[0].position, DVec2::ZERO);
    assert_eq!(bodies[0].velocity, DVec2::new(1.5, -0.5));
}

#[test]
fn merge_does_not_depend_on_order() {
    let params = SimulationParams::default();
    let mut forward = vec![body_at(0, 0.0, 0.0, 50.0), body_at(1, 30.0, 0.0, 10.0)];
    let mut backward = vec![body_at(1, 30.0, 0.0, 10.0), body_at(0, 0.0, 0.0, 50.0)];

    resolve_collisions(&mut forward, &params);
    resolve_collisions(&mut backward, &params);

    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
    assert_eq!(forward[0].id, BodyId(0));
    assert_eq!(backward[0].id, BodyId(0));
    assert_eq!(forward[0].volume(), backward[0].volume());
}

#[test]
fn equal_masses_never_merge() {
    let params = SimulationParams::default();
    let mut bodies = vec![body_at(0, 0.0, 0.0, 20.0), body_at(1, 5.0, 5.0, 20.0)];

    let merges = resolve_collisions(&mut bodies, &params);

    assert!(merges.is_empty());
    assert_eq!(bodies.len(), 2);
}

#[test]
fn separated_bodies_do_not_merge() {
    let params = SimulationParams::default();
    // Half extents 37.5 + 7.5 = 45, so 45 apart is just outside
    let mut bodies = vec![body_at(0, 0.0, 0.0, 50.0), body_at(1, 45.0, 0.0, 10.0)];

    assert!(resolve_collisions(&mut bodies, &params).is_empty());
    assert_eq!(bodies.len(), 2);
}

#[test]
fn growing_bodies_are_not_merged() {
    let params = SimulationParams::default();
    let mut growing = Body::begin_growth(BodyId(1), 10.0, 0.0, PALETTE[1]);
    growing.grow(DVec2::new(10.0, 0.0), &params);
    let mut bodies = vec![body_at(0, 0.0, 0.0, 50.0), growing];

    assert!(resolve_collisions(&mut bodies, &params).is_empty());
    assert_eq!(bodies.len(), 2);
}

#[test]
fn oversized_absorber_swallows_without_growing() {
    let params = SimulationParams::default();
    let mut bodies = vec![body_at(0, 0.0, 0.0, 250.0), body_at(1, 100.0, 0.0, 10.0)];

    let merges = resolve_collisions(&mut bodies, &params);

    assert_eq!(merges.len(), 1);
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].radius(), 250.0);
}

#[test]
fn absorbed_body_does_not_absorb_others() {
    let params = SimulationParams::default();
    // The medium body overlaps both; the large one takes it first and the small one survives
    let mut bodies = vec![
        body_at(0, 0.0, 0.0, 40.0),
        body_at(1, 35.0, 0.0, 20.0),
        body_at(2, 55.0, 0.0, 5.0),
    ];

    let merges = resolve_collisions(&mut bodies, &params);

    assert_eq!(merges.len(), 1);
    assert_eq!(merges[0].absorbed, BodyId(1));
    let ids: Vec<_> = bodies.iter().map(|body| body.id).collect();
    assert_eq!(ids, vec![BodyId(0), BodyId(2)]);
}
