// Host-side tests for the particle simulation.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::*;

fn in_extended_bounds(p: &Particle, vp: Viewport) -> bool {
    let (min, max) = vp.extended_bounds();
    p.position.x >= min.x && p.position.x <= max.x && p.position.y >= min.y && p.position.y <= max.y
}

fn particle_at(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        depth: 0.8,
        size: 100.0,
        speed: 0.5,
        rotation: 0.0,
        rotation_speed: 0.0,
        sides: 4,
        hue: 200,
    }
}

#[test]
fn particle_count_follows_width() {
    assert_eq!(particle_count(0.0), 8);
    assert_eq!(particle_count(320.0), 8);
    assert_eq!(particle_count(1279.0), 8);
    assert_eq!(particle_count(1280.0), 8);
    assert_eq!(particle_count(1440.0), 9);
    assert_eq!(particle_count(1919.0), 11);
    assert_eq!(particle_count(3840.0), 24);
}

#[test]
fn particle_count_matches_formula_for_many_widths() {
    for w in (0..5000).step_by(37) {
        let expected = std::cmp::max(8, w / 160) as usize;
        assert_eq!(particle_count(w as f32), expected, "width {}", w);
    }
}

#[test]
fn random_particles_respect_attribute_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let vp = Viewport::new(1280.0, 720.0);
    for _ in 0..500 {
        let p = Particle::random(&mut rng, vp);
        assert!(in_extended_bounds(&p, vp));
        assert!(p.depth >= 0.2 && p.depth < 1.4);
        assert!(p.size >= 60.0 && p.size < 220.0);
        assert!(p.speed >= 0.1 && p.speed < 0.6);
        assert!(p.rotation_speed >= -0.003 && p.rotation_speed < 0.003);
        assert!((3..=5).contains(&p.sides));
        assert!((180..280).contains(&p.hue));
    }
}

#[test]
fn field_size_is_derived_from_viewport_width() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::new(&mut rng, Viewport::new(2400.0, 900.0));
    assert_eq!(field.len(), 15);
    let small = ParticleField::new(&mut rng, Viewport::new(375.0, 812.0));
    assert_eq!(small.len(), 8);
}

#[test]
fn positions_stay_inside_extended_bounds_after_many_ticks() {
    let mut rng = StdRng::seed_from_u64(42);
    let vp = Viewport::new(800.0, 600.0);
    let mut field = ParticleField::new(&mut rng, vp);
    for _ in 0..5_000 {
        field.step(vp);
        for p in field.iter() {
            assert!(in_extended_bounds(p, vp), "escaped: {:?}", p.position);
        }
    }
}

#[test]
fn crossing_right_edge_wraps_to_left_edge() {
    let vp = Viewport::new(1000.0, 500.0);
    let mut p = particle_at(1199.9, 250.0);
    p.step(vp);
    assert_eq!(p.position.x, -200.0);
}

#[test]
fn crossing_left_and_vertical_edges_wraps_opposite() {
    let vp = Viewport::new(1000.0, 500.0);

    let mut left = particle_at(-199.9, 250.0);
    left.rotation = std::f32::consts::PI;
    left.step(vp);
    assert_eq!(left.position.x, 1200.0);

    let mut bottom = particle_at(500.0, 600.0 - 0.01);
    bottom.rotation = std::f32::consts::FRAC_PI_2 / 0.6; // sin(rot*0.6) = 1
    bottom.step(vp);
    assert_eq!(bottom.position.y, -100.0);
}

#[test]
fn step_applies_heading_and_damped_vertical_drift() {
    let vp = Viewport::new(1000.0, 1000.0);
    let mut p = particle_at(500.0, 500.0);
    p.rotation = 1.0;
    p.rotation_speed = 0.002;
    p.step(vp);
    let rot = 1.002_f32;
    assert!((p.rotation - rot).abs() < 1e-6);
    assert!((p.position.x - (500.0 + rot.cos() * 0.5)).abs() < 1e-3);
    assert!((p.position.y - (500.0 + (rot * 0.6).sin() * 0.5 * 0.6)).abs() < 1e-3);
}

#[test]
fn rotation_moves_in_direction_of_rotation_speed() {
    let vp = Viewport::new(1000.0, 1000.0);
    let mut up = particle_at(500.0, 500.0);
    up.rotation_speed = 0.002;
    let mut down = particle_at(500.0, 500.0);
    down.rotation_speed = -0.002;
    let mut still = particle_at(500.0, 500.0);

    for _ in 0..200 {
        let (a, b) = (up.rotation, down.rotation);
        up.step(vp);
        down.step(vp);
        still.step(vp);
        assert!(up.rotation > a);
        assert!(down.rotation < b);
    }
    assert_eq!(still.rotation, 0.0);
}

#[test]
fn perspective_scale_spans_depth_range() {
    let mut p = particle_at(0.0, 0.0);
    p.depth = 0.2;
    assert!((p.perspective_scale() - 0.6).abs() < 1e-6);
    p.depth = 1.4;
    assert!((p.perspective_scale() - 1.6).abs() < 1e-6);
    p.size = 100.0;
    p.depth = 0.8;
    assert!((p.radius() - 110.0).abs() < 1e-4);
    assert!((p.depth_fade() - 1.25).abs() < 1e-6);
}

#[test]
fn polygon_vertices_lie_on_circle() {
    let center = Vec2::new(10.0, -5.0);
    for sides in 3..=5 {
        let verts = polygon_vertices(center, 50.0, sides, 0.3);
        assert_eq!(verts.len(), sides as usize);
        for v in &verts {
            assert!(((*v - center).length() - 50.0).abs() < 1e-3);
        }
        let first = verts[0] - center;
        assert!((first.y.atan2(first.x) - 0.3).abs() < 1e-5);
    }
}
