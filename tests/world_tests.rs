use motes::{
    AnchorId, BoundaryContact, NoOpStepObserver, Particle, ParticleId, PhysicsError, StepObserver, Vector2, World,
    WorldConfig,
};

#[derive(Default)]
struct Recorder {
    contacts: Vec<(ParticleId, BoundaryContact)>,
    degenerate: Vec<(ParticleId, usize)>,
    steps: usize,
}

impl StepObserver for Recorder {
    fn on_boundary_contact(&mut self, particle: ParticleId, contact: BoundaryContact) {
        self.contacts.push((particle, contact));
    }

    fn on_degenerate_force(&mut self, particle: ParticleId, skipped: usize) {
        self.degenerate.push((particle, skipped));
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn mutual_gravitation_closes_the_gap_every_step() {
    let mut world: World<f64> = World::new(WorldConfig::new());
    let a = world.add_particle(Particle::at_rest(Vector2::new(0.0, 0.0)).with_mass(10.0));
    let b = world.add_particle(Particle::at_rest(Vector2::new(100.0, 0.0)).with_mass(10.0));
    world.add_gravitation(a, b).unwrap();
    world.add_gravitation(b, a).unwrap();

    let mut last = 100.0;
    for step in 0..50 {
        world.step(&mut NoOpStepObserver).unwrap();
        let d = world.particle(a).unwrap().pos.distance(world.particle(b).unwrap().pos);
        assert!(d < last, "step {}: distance {} did not shrink from {}", step, d, last);
        last = d;
    }
}

#[test]
fn step_result_does_not_depend_on_insertion_order() {
    let positions = [Vector2::new(0.0f32, 0.0), Vector2::new(50.0, 10.0), Vector2::new(20.0, 80.0)];
    let masses = [5.0f32, 8.0, 3.0];

    // `order[k]` is the logical body stored at slot k.
    let build = |order: [usize; 3]| {
        let mut world: World<f32> = World::new(WorldConfig::new());
        let mut slot_of = [ParticleId(0); 3];
        for &logical in order.iter() {
            let id = world.add_particle(Particle::at_rest(positions[logical]).with_mass(masses[logical]));
            slot_of[logical] = id;
        }
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    world.add_gravitation(slot_of[i], slot_of[j]).unwrap();
                }
            }
        }
        (world, slot_of)
    };

    let (mut forward, forward_ids) = build([0, 1, 2]);
    let (mut reversed, reversed_ids) = build([2, 1, 0]);
    for _ in 0..10 {
        forward.step(&mut NoOpStepObserver).unwrap();
        reversed.step(&mut NoOpStepObserver).unwrap();
    }
    for logical in 0..3 {
        let a = forward.particle(forward_ids[logical]).unwrap();
        let b = reversed.particle(reversed_ids[logical]).unwrap();
        assert_eq!(a.pos, b.pos, "body {} diverged", logical);
        assert_eq!(a.vel, b.vel, "body {} diverged", logical);
    }
}

#[test]
fn self_gravitation_is_rejected() {
    let mut world: World<f32> = World::default();
    let id = world.add_particle(Particle::at_rest(Vector2::zero()));
    assert_eq!(world.add_gravitation(id, id), Err(PhysicsError::SelfGravitation { index: 0 }));
    assert!(world.particle(id).unwrap().gravitations().is_empty());
}

#[test]
fn attaching_to_a_missing_handle_fails() {
    let mut world: World<f32> = World::default();
    let id = world.add_particle(Particle::at_rest(Vector2::zero()));
    assert_eq!(
        world.add_spring(id, AnchorId(0), 0.1, 0.0),
        Err(PhysicsError::AnchorOutOfBounds { index: 0, count: 0 })
    );
    assert_eq!(
        world.add_gravitation(id, ParticleId(4)),
        Err(PhysicsError::ParticleOutOfBounds { index: 4, count: 1 })
    );
    assert!(world.particle(ParticleId(9)).is_err());
}

#[test]
fn dangling_handle_stops_the_step_before_anything_moves() {
    let mut world: World<f32> = World::default();
    let moving = world.add_particle(Particle::at_rest(Vector2::zero()).with_velocity(Vector2::new(1.0, 1.0)));
    let broken = world.add_particle(Particle::at_rest(Vector2::new(10.0, 10.0)));
    world.particle_mut(broken).unwrap().add_spring(AnchorId(5), 0.1, 0.0);

    assert_eq!(world.validate(), Err(PhysicsError::AnchorOutOfBounds { index: 5, count: 0 }));
    assert!(world.step(&mut NoOpStepObserver).is_err());
    assert_eq!(world.particle(moving).unwrap().pos, Vector2::zero());
}

#[test]
fn moving_an_anchor_drags_the_spring() {
    let mut world: World<f64> = World::new(WorldConfig::new());
    let anchor = world.add_anchor(Vector2::new(0.0, 0.0));
    let weight = world.add_particle(Particle::at_rest(Vector2::new(0.0, 0.0)).with_friction(0.9));
    world.add_spring(weight, anchor, 0.1, 0.0).unwrap();

    world.set_anchor(anchor, Vector2::new(200.0, -50.0)).unwrap();
    for _ in 0..300 {
        world.step(&mut NoOpStepObserver).unwrap();
    }
    let d = world.particle(weight).unwrap().pos.distance(Vector2::new(200.0, -50.0));
    assert!(d < 0.1, "weight still {} from the anchor", d);
}

#[test]
fn springs_between_particles_pull_both_ends() {
    let mut world: World<f64> = World::new(WorldConfig::new());
    let a = world.add_particle(Particle::at_rest(Vector2::new(0.0, 0.0)));
    let b = world.add_particle(Particle::at_rest(Vector2::new(10.0, 0.0)));
    world.add_spring(a, b, 0.1, 0.0).unwrap();
    world.add_spring(b, a, 0.1, 0.0).unwrap();
    world.step(&mut NoOpStepObserver).unwrap();
    assert!((world.particle(a).unwrap().pos.x - 1.0).abs() < 1e-12);
    assert!((world.particle(b).unwrap().pos.x - 9.0).abs() < 1e-12);
}

#[test]
fn bounded_world_reports_wall_contacts() {
    let mut world: World<f32> = World::new(WorldConfig::new().with_bounds(100.0, 100.0));
    let id = world.add_particle(
        Particle::at_rest(Vector2::new(95.0, 50.0))
            .with_radius(10.0)
            .with_velocity(Vector2::new(3.0, 0.0)),
    );
    let mut recorder = Recorder::default();
    world.step(&mut recorder).unwrap();

    assert_eq!(recorder.steps, 1);
    assert_eq!(recorder.contacts.len(), 1);
    assert_eq!(recorder.contacts[0].0, id);
    assert!(recorder.contacts[0].1.right);
    let p = world.particle(id).unwrap();
    assert_eq!(p.vel.x, -3.0);
    assert_eq!(p.pos.x, 87.0);
}

#[test]
fn unbounded_world_never_bounces() {
    let mut world: World<f32> = World::new(WorldConfig::new());
    let id = world.add_particle(Particle::at_rest(Vector2::new(-50.0, -50.0)).with_velocity(Vector2::new(-1.0, 0.0)));
    let mut recorder = Recorder::default();
    world.step(&mut recorder).unwrap();
    assert!(recorder.contacts.is_empty());
    assert_eq!(world.particle(id).unwrap().pos, Vector2::new(-51.0, -50.0));
}

#[test]
fn coincident_particles_are_reported_and_stay_finite() {
    let mut world: World<f32> = World::default();
    let a = world.add_particle(Particle::at_rest(Vector2::new(3.0, 3.0)));
    let b = world.add_particle(Particle::at_rest(Vector2::new(3.0, 3.0)));
    world.add_gravitation(a, b).unwrap();
    let mut recorder = Recorder::default();
    world.step(&mut recorder).unwrap();
    assert_eq!(recorder.degenerate, vec![(a, 1)]);
    let p = world.particle(a).unwrap();
    assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
}

#[test]
fn min_distance_is_configurable() {
    let config = WorldConfig::new().with_min_distance(5.0f32);
    let mut world = World::new(config);
    let a = world.add_particle(Particle::at_rest(Vector2::new(0.0, 0.0)));
    let b = world.add_particle(Particle::at_rest(Vector2::new(3.0, 4.0)).with_mass(100.0));
    world.add_gravitation(a, b).unwrap();
    let mut recorder = Recorder::default();
    world.step(&mut recorder).unwrap();
    assert_eq!(recorder.degenerate, vec![(a, 1)]);
    assert_eq!(world.particle(a).unwrap().pos, Vector2::zero());
}

#[test]
fn clear_empties_the_world() {
    let mut world: World<f32> = World::default();
    world.add_particle(Particle::at_rest(Vector2::zero()));
    world.add_anchor(Vector2::zero());
    world.clear();
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.anchor_count(), 0);
    assert!(world.bodies().is_empty());
}
