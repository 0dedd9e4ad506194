use motes::{AnchorId, BodyState, Detached, Particle, ParticleId, PhysicsError, Snapshot, SpringTarget, Vector2};

#[test]
fn free_particle_moves_in_a_straight_line() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(10.0, 20.0)).with_velocity(Vector2::new(3.0, -2.0));
    for step in 1..=5 {
        p.update(&Detached).unwrap();
        assert_eq!(p.vel, Vector2::new(3.0, -2.0));
        assert_eq!(p.pos, Vector2::new(10.0 + 3.0 * step as f32, 20.0 - 2.0 * step as f32));
    }
}

#[test]
fn constructor_sets_velocity_from_speed_and_direction() {
    let p: Particle<f64> = Particle::new(Vector2::zero(), 2.0, core::f64::consts::FRAC_PI_2);
    assert!(p.vel.x.abs() < 1e-12);
    assert!((p.vel.y - 2.0).abs() < 1e-12);
    assert!((p.speed() - 2.0).abs() < 1e-12);
}

#[test]
fn gravity_is_added_after_friction() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::zero()).with_friction(0.5).with_gravity(1.0);
    p.update(&Detached).unwrap();
    assert_eq!(p.vel.y, 1.0);
    p.update(&Detached).unwrap();
    assert_eq!(p.vel.y, 1.5);
    assert_eq!(p.pos.y, 2.5);
}

#[test]
fn springs_act_before_friction() {
    let mut env = Snapshot::new(1e-6f64);
    let anchor = env.push_anchor(Vector2::zero());
    let mut p: Particle<f64> = Particle::at_rest(Vector2::new(10.0, 0.0)).with_friction(0.5);
    p.add_spring(anchor, 0.1, 0.0);
    let summary = p.update(&env).unwrap();
    assert_eq!(summary.springs, 1);
    assert!((p.vel.x + 0.5).abs() < 1e-12, "vel.x = {}", p.vel.x);
    assert!((p.pos.x - 9.5).abs() < 1e-12, "pos.x = {}", p.pos.x);
}

#[test]
fn spring_rest_length_pushes_back_when_compressed() {
    let mut env = Snapshot::new(1e-6f64);
    let anchor = env.push_anchor(Vector2::zero());
    let mut p: Particle<f64> = Particle::at_rest(Vector2::new(5.0, 0.0));
    p.add_spring(anchor, 0.2, 20.0);
    p.update(&env).unwrap();
    assert!(p.vel.x > 0.0, "compressed spring should push outward, vel.x = {}", p.vel.x);
}

#[test]
fn right_wall_bounce_clamps_and_reflects() {
    let (width, height) = (800.0f32, 600.0);
    let radius = 10.0;
    let mut p = Particle::at_rest(Vector2::new(width - radius + 1.0, 300.0))
        .with_radius(radius)
        .with_velocity(Vector2::new(5.0, 1.0));
    let contact = p.boundary_bounce(width, height);
    assert!(contact.right && !contact.left && !contact.top && !contact.bottom);
    assert_eq!(p.pos.x, width - radius);
    assert_eq!(p.vel.x, -5.0);
    assert_eq!(p.vel.y, 1.0);
}

#[test]
fn corner_bounce_reflects_both_axes() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(1.0, 2.0))
        .with_radius(5.0)
        .with_velocity(Vector2::new(-3.0, -4.0));
    let contact = p.boundary_bounce(100.0, 100.0);
    assert!(contact.left && contact.top);
    assert_eq!(p.pos, Vector2::new(5.0, 5.0));
    assert_eq!(p.vel, Vector2::new(3.0, 4.0));
}

#[test]
fn touching_the_wall_counts_as_contact() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(90.0, 50.0))
        .with_radius(10.0)
        .with_velocity(Vector2::new(2.0, 0.0));
    assert!(p.boundary_bounce(100.0, 100.0).right);
    assert_eq!(p.vel.x, -2.0);
}

#[test]
fn bounce_coefficient_scales_the_reflection() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(100.0, 50.0))
        .with_velocity(Vector2::new(4.0, 0.0))
        .with_bounce(-0.5);
    p.boundary_bounce(100.0, 100.0);
    assert_eq!(p.vel.x, -2.0);
}

#[test]
fn adding_a_spring_twice_replaces_it() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::zero());
    p.add_spring(AnchorId(0), 0.1, 5.0);
    p.add_spring(AnchorId(0), 0.3, 7.0);
    p.add_spring(ParticleId(2), 0.5, 0.0);
    assert_eq!(p.springs().len(), 2);
    let anchor_spring = p.springs().iter().find(|s| s.target == SpringTarget::Anchor(AnchorId(0))).unwrap();
    assert_eq!(anchor_spring.stiffness, 0.3);
    assert_eq!(anchor_spring.rest_length, 7.0);

    assert!(p.remove_spring(AnchorId(0)));
    assert!(!p.remove_spring(AnchorId(0)));
    assert_eq!(p.springs().len(), 1);
}

#[test]
fn gravitation_peers_are_unique() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::zero());
    p.add_gravitation(ParticleId(1));
    p.add_gravitation(ParticleId(1));
    assert_eq!(p.gravitations(), &[ParticleId(1)]);
    assert!(p.remove_gravitation(ParticleId(1)));
    assert!(p.gravitations().is_empty());
}

#[test]
fn spring_pull_decays_to_the_anchor() {
    let mut env = Snapshot::new(1e-6f64);
    let anchor = env.push_anchor(Vector2::zero());
    let mut p: Particle<f64> = Particle::at_rest(Vector2::new(100.0, 0.0)).with_friction(0.9);
    p.add_spring(anchor, 0.1, 0.0);

    let distances: Vec<f64> = (0..300)
        .map(|_| {
            p.update(&env).unwrap();
            p.distance_to(Vector2::zero())
        })
        .collect();

    let peaks: Vec<f64> = distances
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] >= w[2])
        .map(|w| w[1])
        .collect();
    assert!(peaks.len() >= 2, "expected an oscillation, peaks {:?}", peaks);
    for pair in peaks.windows(2) {
        assert!(pair[1] <= pair[0], "oscillation grew: {} -> {}", pair[0], pair[1]);
    }
    let last = *distances.last().unwrap();
    assert!(last < 0.05, "still {} away after 300 steps", last);
}

#[test]
fn gravitation_pulls_toward_heavier_body() {
    let mut env = Snapshot::new(1e-6f64);
    let peer = env.push_body(BodyState { position: Vector2::new(0.0, 100.0), mass: 1000.0 });
    let mut p: Particle<f64> = Particle::at_rest(Vector2::zero());
    p.add_gravitation(peer);
    let summary = p.update(&env).unwrap();
    assert_eq!(summary.gravitations, 1);
    assert!((p.vel.y - 0.1).abs() < 1e-12, "1000 / 100^2 = 0.1, got {}", p.vel.y);
    assert_eq!(p.vel.x, 0.0);
}

#[test]
fn coincident_source_is_skipped_not_nan() {
    let mut env = Snapshot::new(1e-6f32);
    let anchor = env.push_anchor(Vector2::new(5.0, 5.0));
    let peer = env.push_body(BodyState { position: Vector2::new(5.0, 5.0), mass: 10.0 });
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(5.0, 5.0));
    p.add_spring(anchor, 0.5, 0.0);
    p.add_gravitation(peer);

    let summary = p.update(&env).unwrap();
    assert_eq!(summary.degenerate, 2);
    assert_eq!(summary.springs, 0);
    assert_eq!(summary.gravitations, 0);
    assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
    assert_eq!(p.vel, Vector2::zero());
}

#[test]
fn missing_target_fails_without_moving() {
    let mut p: Particle<f32> = Particle::at_rest(Vector2::new(1.0, 1.0)).with_velocity(Vector2::new(1.0, 0.0));
    p.add_spring(AnchorId(3), 0.1, 0.0);
    assert_eq!(p.update(&Detached), Err(PhysicsError::AnchorOutOfBounds { index: 3, count: 0 }));
    assert_eq!(p.pos, Vector2::new(1.0, 1.0));
    assert_eq!(p.vel, Vector2::new(1.0, 0.0));
}

#[test]
fn set_speed_uses_the_cached_heading() {
    let mut p: Particle<f64> = Particle::new(Vector2::zero(), 1.0, core::f64::consts::FRAC_PI_2);
    // The cached heading starts at zero regardless of the launch direction.
    p.set_speed(3.0);
    assert!((p.vel.x - 3.0).abs() < 1e-12 && p.vel.y.abs() < 1e-12);

    // Turning keeps the launch speed, not the one set above.
    p.set_heading(core::f64::consts::PI);
    assert!((p.vel.x + 1.0).abs() < 1e-12, "vel {:?}", p.vel);
    assert!(p.vel.y.abs() < 1e-12, "vel {:?}", p.vel);
}

#[test]
fn sync_polar_cache_follows_live_velocity() {
    let mut p: Particle<f64> = Particle::at_rest(Vector2::zero()).with_velocity(Vector2::new(0.0, 4.0));
    p.sync_polar_cache();
    p.set_speed(2.0);
    assert!(p.vel.x.abs() < 1e-12 && (p.vel.y - 2.0).abs() < 1e-12, "vel {:?}", p.vel);
}
