//! Benchmarks for motes easing and particle stepping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motes::scene::{Drift, DriftConfig, Effect, GravityWell, GravityWellConfig};
use motes::*;

fn bench_easing(c: &mut Criterion) {
    let params = EaseParams::new();
    c.bench_function("all_curves_1000_samples", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for easing in Easing::ALL {
                for i in 0..1000 {
                    sum += easing.ease_with(black_box(i as f32), 0.0, 100.0, 1000.0, &params);
                }
            }
            sum
        });
    });
}

fn bench_spring_world(c: &mut Criterion) {
    c.bench_function("tether_1000_weights_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new());
            let anchor = world.add_anchor(Vector2::new(400.0, 300.0));
            for i in 0..1000 {
                let id = world.add_particle(
                    Particle::new(Vector2::new(i as f32 % 800.0, i as f32 % 600.0), 2.0, i as f32).with_friction(0.9),
                );
                world.add_spring(id, anchor, 0.1, 0.0).ok();
            }
            for _ in 0..60 {
                world.step(&mut NoOpStepObserver).ok();
            }
            world.positions()
        });
    });
}

fn bench_drift_scene(c: &mut Criterion) {
    c.bench_function("drift_background_1080p_60_frames", |b| {
        b.iter(|| {
            let mut drift = Drift::new(DriftConfig::background(1920.0, 1080.0), 1);
            drift.pointer_moved(Some(Vector2::new(960.0, 540.0)));
            for _ in 0..60 {
                drift.advance(16.0, &mut NoOpStepObserver).ok();
            }
            drift.links().len()
        });
    });
}

fn bench_gravity_well(c: &mut Criterion) {
    c.bench_function("gravity_well_60_planets_60_frames", |b| {
        b.iter(|| {
            let mut well = GravityWell::new(GravityWellConfig::new(800.0, 600.0), 1).ok()?;
            for _ in 0..60 {
                well.advance(16.0, &mut NoOpStepObserver).ok()?;
            }
            Some(well.bodies())
        });
    });
}

criterion_group!(benches, bench_easing, bench_spring_world, bench_drift_scene, bench_gravity_well);
criterion_main!(benches);
