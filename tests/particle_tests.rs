// Host-side tests for the pointer-repelled particle field.

use backdrop_core::constants::*;
use backdrop_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(seed: u64) -> ParticleField<StdRng> {
    ParticleField::new(
        ParticleFieldParams::default(),
        SharedPointer::default(),
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn particle_count_is_floor_of_area_over_quota() {
    let cases = [
        (Size::new(900, 900), 90),
        (Size::new(1920, 1080), 230),
        (Size::new(94, 95), 0),
        (Size::new(0, 800), 0),
        (Size::new(3000, 3), 1),
    ];
    for (size, expected) in cases {
        assert_eq!(
            particle_count(size, PARTICLE_AREA_QUOTA),
            expected,
            "size {:?}",
            size
        );
    }
}

#[test]
fn particle_count_with_bad_quota_is_zero() {
    assert_eq!(particle_count(Size::new(900, 900), 0.0), 0);
    assert_eq!(particle_count(Size::new(900, 900), -1.0), 0);
    assert_eq!(particle_count(Size::new(900, 900), f32::NAN), 0);
}

#[test]
fn rebuild_scatters_particles_inside_the_canvas() {
    let mut field = make_field(7);
    field.rebuild(Size::new(900, 900));
    assert_eq!(field.particles().len(), 90);
    for p in field.particles() {
        assert_eq!(p.position, p.rest);
        assert!((0.0..900.0).contains(&p.rest.x));
        assert!((0.0..900.0).contains(&p.rest.y));
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
        assert!(p.density >= PARTICLE_DENSITY_MIN && p.density < PARTICLE_DENSITY_MAX);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let mut a = make_field(42);
    let mut b = make_field(42);
    a.rebuild(Size::new(640, 480));
    b.rebuild(Size::new(640, 480));
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn resize_rebuilds_the_whole_collection() {
    let mut field = make_field(3);
    field.resize(Size::new(900, 900));
    assert_eq!(field.particles().len(), 90);
    field.resize(Size::new(300, 300));
    assert_eq!(field.particles().len(), 10);
    assert_eq!(field.size(), Size::new(300, 300));
    for p in field.particles() {
        assert!(p.rest.x < 300.0 && p.rest.y < 300.0);
    }
}

#[test]
fn repulsion_grows_as_the_pointer_closes_in() {
    let reach = 100.0;
    let density = 10.0;
    let mut prev = 0.0_f32;
    for d in (0..100).rev() {
        let push = repulsion(Vec2::new(d as f32, 0.0), Vec2::ZERO, reach, density)
            .expect("inside reach");
        let magnitude = push.length();
        assert!(
            magnitude > prev,
            "magnitude {magnitude} at d={d} not above {prev}"
        );
        prev = magnitude;
    }
    assert!((prev - density).abs() < 1e-5);
}

#[test]
fn repulsion_pushes_away_from_the_pointer() {
    let push = repulsion(Vec2::new(60.0, 80.0), Vec2::new(60.0, 100.0), 100.0, 5.0)
        .expect("inside reach");
    assert!(push.y < 0.0);
    assert!(push.x.abs() < 1e-6);
    // (100 - 20) / 100 * 5
    assert!((push.length() - 4.0).abs() < 1e-5);
}

#[test]
fn no_repulsion_at_or_beyond_reach() {
    assert!(repulsion(Vec2::new(100.0, 0.0), Vec2::ZERO, 100.0, 10.0).is_none());
    assert!(repulsion(Vec2::new(300.0, 0.0), Vec2::ZERO, 100.0, 10.0).is_none());
    assert!(repulsion(Vec2::ZERO, Vec2::ZERO, 0.0, 10.0).is_none());
}

#[test]
fn coincident_pointer_gives_a_finite_bounded_push() {
    let push = repulsion(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 100.0, 12.0)
        .expect("inside reach");
    assert!(push.is_finite());
    assert!(push.length() <= 12.0 + 1e-5);
}

#[test]
fn restoring_converges_without_overshoot() {
    let rest = Vec2::new(200.0, 300.0);
    let mut p = Particle::new(rest, 2.0, 10.0);
    p.position = Vec2::new(250.0, 270.0);
    let far = Vec2::splat(POINTER_SENTINEL);
    let mut prev = p.position.distance(rest);
    for _ in 0..300 {
        p.step(far, POINTER_RADIUS, RESTORE_FRACTION);
        let d = p.position.distance(rest);
        assert!(d <= prev, "distance grew from {prev} to {d}");
        assert!(p.position.x >= rest.x, "overshot on x");
        assert!(p.position.y <= rest.y, "overshot on y");
        prev = d;
    }
    assert!(prev < 1e-3);
}

#[test]
fn sentinel_pointer_leaves_every_particle_at_rest() {
    let mut field = make_field(11);
    field.resize(Size::new(800, 600));
    let mut surface = Recorder::new();
    field.frame(&mut surface);
    for p in field.particles() {
        assert_eq!(p.position, p.rest);
    }
}

#[test]
fn frame_clears_then_draws_every_particle_in_white() {
    let mut field = make_field(5);
    field.resize(Size::new(900, 900));
    let mut surface = Recorder::new();
    field.frame(&mut surface);
    assert_eq!(surface.commands[0], DrawCmd::Clear(Size::new(900, 900)));
    let circles: Vec<_> = surface.circles().collect();
    assert_eq!(circles.len(), 90);
    for ((center, radius, color), p) in circles.iter().zip(field.particles()) {
        assert_eq!(*center, p.position);
        assert_eq!(*radius, p.radius);
        assert_eq!(*color, Rgba::WHITE);
    }
}

#[test]
fn pointer_on_a_rest_position_displaces_finitely_and_boundedly() {
    let mut field = make_field(9);
    field.resize(Size::new(900, 900));
    assert_eq!(field.particles().len(), 90);

    let target = field.particles()[0];
    assert_eq!(field.pointer().radius(), 100.0);
    field.pointer().move_to(target.rest);

    let mut surface = Recorder::new();
    field.frame(&mut surface);

    let moved = field.particles()[0];
    assert!(moved.position.is_finite());
    let displacement = moved.position.distance(target.rest);
    assert!(displacement > 0.0);
    assert!(displacement <= target.density + 1e-4);
    assert!(field.particles().iter().all(|p| p.position.is_finite()));
}

#[test]
fn update_then_draw_matches_frame() {
    let mut a = make_field(21);
    let mut b = make_field(21);
    a.resize(Size::new(500, 500));
    b.resize(Size::new(500, 500));
    a.pointer().move_to(Vec2::new(250.0, 250.0));
    b.pointer().move_to(Vec2::new(250.0, 250.0));

    let mut framed = Recorder::new();
    a.frame(&mut framed);

    let mut split = Recorder::new();
    b.update();
    b.draw(&mut split);

    assert_eq!(a.particles(), b.particles());
    assert_eq!(framed.circles().count(), split.circles().count());
}

#[test]
fn fields_with_separate_pointers_do_not_interfere() {
    let mut a = make_field(1);
    let mut b = make_field(1);
    a.resize(Size::new(400, 400));
    b.resize(Size::new(400, 400));

    let hit = a.particles()[0].rest;
    a.pointer().move_to(hit);
    assert_eq!(b.pointer().get(), PointerState::default());

    let mut surface = Recorder::new();
    a.frame(&mut surface);
    b.frame(&mut surface);
    assert_ne!(a.particles()[0].position, a.particles()[0].rest);
    for p in b.particles() {
        assert_eq!(p.position, p.rest);
    }
}
