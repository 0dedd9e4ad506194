use motes::{tween_point, tween_point_named, EaseParams, Easing, Particle, PhysicsError, Tween, Vector2};

#[test]
fn tween_point_hits_both_ends_for_every_curve() {
    let start = Vector2::new(-20.0f64, 35.0);
    let change = Vector2::new(300.0, -120.0);
    let params = EaseParams::new();
    for easing in Easing::ALL {
        let mut p = Vector2::zero();
        tween_point(&mut p, start, 0.0, change, 1000.0, easing, &params);
        assert!((p.x - start.x).abs() < 1e-6 && (p.y - start.y).abs() < 1e-6, "{} start {:?}", easing, p);

        tween_point(&mut p, start, 1000.0, change, 1000.0, easing, &params);
        let end = start + change;
        assert!((p.x - end.x).abs() < 1e-6 && (p.y - end.y).abs() < 1e-6, "{} end {:?}", easing, p);
    }
}

#[test]
fn tween_point_moves_a_particle() {
    let mut particle: Particle<f32> = Particle::at_rest(Vector2::new(0.0, 0.0));
    tween_point(
        &mut particle,
        Vector2::new(0.0, 0.0),
        50.0,
        Vector2::new(100.0, 40.0),
        100.0,
        Easing::Linear,
        &EaseParams::new(),
    );
    assert!((particle.pos.x - 50.0).abs() < 1e-4);
    assert!((particle.pos.y - 20.0).abs() < 1e-4);
}

#[test]
fn named_tween_with_unknown_curve_leaves_target_alone() {
    let mut p = Vector2::new(7.0f32, 8.0);
    let result = tween_point_named(
        &mut p,
        Vector2::new(0.0, 0.0),
        0.5,
        Vector2::new(1.0, 1.0),
        1.0,
        "easeSideways",
        &EaseParams::new(),
    );
    assert!(matches!(result, Err(PhysicsError::UnknownEasing { .. })));
    assert_eq!(p, Vector2::new(7.0, 8.0));
}

#[test]
fn named_tween_matches_enum_tween() {
    let mut by_name = Vector2::zero();
    let mut by_enum = Vector2::zero();
    let params = EaseParams::new();
    tween_point_named(&mut by_name, Vector2::new(1.0f64, 2.0), 0.3, Vector2::new(5.0, -5.0), 1.0, "easeOutElastic", &params)
        .unwrap();
    tween_point(&mut by_enum, Vector2::new(1.0, 2.0), 0.3, Vector2::new(5.0, -5.0), 1.0, Easing::OutElastic, &params);
    assert_eq!(by_name, by_enum);
}

#[test]
fn tween_rejects_non_positive_duration() {
    let a = Vector2::new(0.0f32, 0.0);
    assert_eq!(Tween::new(a, a, 0.0, Easing::Linear).unwrap_err(), PhysicsError::InvalidDuration);
    assert_eq!(Tween::new(a, a, -5.0, Easing::Linear).unwrap_err(), PhysicsError::InvalidDuration);
    assert!(Tween::new(a, a, f32::NAN, Easing::Linear).is_err());
}

#[test]
fn tween_saturates_at_its_end() {
    let mut tween = Tween::new(Vector2::new(0.0f32, 0.0), Vector2::new(10.0, 20.0), 100.0, Easing::InOutQuad).unwrap();
    assert!(!tween.is_finished());
    tween.advance(60.0);
    tween.advance(60.0);
    assert!(tween.is_finished());
    assert_eq!(tween.elapsed(), 100.0);
    assert_eq!(tween.value(), Vector2::new(10.0, 20.0));
}

#[test]
fn retarget_restarts_from_previous_start() {
    let mut tween = Tween::new(Vector2::new(0.0f32, 0.0), Vector2::new(100.0, 0.0), 10.0, Easing::Linear).unwrap();
    tween.advance(5.0);
    tween.retarget(Vector2::new(0.0, 100.0));
    assert_eq!(tween.elapsed(), 0.0);
    assert_eq!(tween.start(), Vector2::new(0.0, 0.0));
    assert_eq!(tween.end(), Vector2::new(0.0, 100.0));
}

#[test]
fn settle_makes_the_end_the_next_start() {
    let mut tween = Tween::new(Vector2::new(0.0f32, 0.0), Vector2::new(30.0, 40.0), 10.0, Easing::Linear).unwrap();
    tween.advance(10.0);
    tween.settle();
    assert_eq!(tween.start(), Vector2::new(30.0, 40.0));
    tween.retarget(Vector2::new(0.0, 0.0));
    tween.advance(5.0);
    let mid = tween.value();
    assert!((mid.x - 15.0).abs() < 1e-4 && (mid.y - 20.0).abs() < 1e-4, "mid {:?}", mid);
}
