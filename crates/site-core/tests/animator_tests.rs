// Host-side tests for the animator: render pass order, resize, teardown.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::*;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f32, f32),
    Backdrop(LinearGradient),
    Lines(usize, String, f32),
    Polygon(Vec<Vec2>, PolygonStyle),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_rect_gradient(&mut self, _width: f32, _height: f32, gradient: &LinearGradient) {
        self.ops.push(Op::Backdrop(gradient.clone()));
    }

    fn stroke_lines(&mut self, lines: &[(Vec2, Vec2)], color: &str, alpha: f32, _line_width: f32) {
        self.ops.push(Op::Lines(lines.len(), color.to_string(), alpha));
    }

    fn polygon(&mut self, vertices: &[Vec2], style: &PolygonStyle) {
        self.ops.push(Op::Polygon(vertices.to_vec(), style.clone()));
    }
}

fn single(depth: f32, hue: i32, sides: u32) -> ParticleField {
    ParticleField::from_particles(vec![Particle {
        position: Vec2::new(100.0, 100.0),
        depth,
        size: 100.0,
        speed: 0.3,
        rotation: 0.5,
        rotation_speed: 0.001,
        sides,
        hue,
    }])
}

#[test]
fn frame_paints_backdrop_grid_then_glow_and_body() {
    let mut animator = Animator::with_field(single(0.5, 200, 5), Viewport::new(480.0, 240.0));
    let mut rec = Recorder::default();
    assert_eq!(animator.frame(&mut rec), FrameOutcome::Continue);

    assert_eq!(rec.ops.len(), 5);
    assert_eq!(rec.ops[0], Op::Clear(480.0, 240.0));
    match &rec.ops[1] {
        Op::Backdrop(g) => {
            assert_eq!(g.from, Vec2::ZERO);
            assert_eq!(g.to, Vec2::new(480.0, 240.0));
            assert_eq!(g.start, BACKDROP_FROM);
            assert_eq!(g.end, BACKDROP_TO);
        }
        other => panic!("expected backdrop, got {:?}", other),
    }
    // 4 vertical (0,120,240,360) + 2 horizontal (0,120)
    assert_eq!(rec.ops[2], Op::Lines(6, GRID_COLOR.to_string(), GRID_ALPHA));

    match &rec.ops[3] {
        Op::Polygon(verts, style) => {
            assert_eq!(verts.len(), 5);
            assert_eq!(style.fill, Fill::Solid("hsla(200,80%,55%,0.06)".to_string()));
            assert!(style.stroke.is_none());
            assert!((style.alpha - 0.28).abs() < 1e-5);
        }
        other => panic!("expected glow polygon, got {:?}", other),
    }
    match &rec.ops[4] {
        Op::Polygon(verts, style) => {
            assert_eq!(verts.len(), 5);
            match &style.fill {
                Fill::Gradient(g) => {
                    assert_eq!(g.start, "hsla(170,90%,55%,0.15)");
                    assert_eq!(g.end, "hsla(240,80%,62%,0.25)");
                }
                other => panic!("expected gradient fill, got {:?}", other),
            }
            assert_eq!(style.stroke.as_deref(), Some("hsla(220,90%,68%,0.45)"));
            assert!((style.alpha - 1.8).abs() < 1e-5);
            assert!((style.line_width - 2.4).abs() < 1e-5);
        }
        other => panic!("expected body polygon, got {:?}", other),
    }
}

#[test]
fn glow_is_offset_and_slightly_smaller() {
    let field = single(0.8, 250, 3);
    let mut rec = Recorder::default();
    render(&field, Viewport::new(100.0, 100.0), &mut rec);
    let polys: Vec<&Vec<Vec2>> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Polygon(v, _) => Some(v),
            _ => None,
        })
        .collect();
    assert_eq!(polys.len(), 2);
    let (glow, body) = (polys[0], polys[1]);
    let glow_center = glow.iter().copied().sum::<Vec2>() / 3.0;
    let body_center = body.iter().copied().sum::<Vec2>() / 3.0;
    assert!((glow_center - body_center - Vec2::new(6.0, 6.0)).length() < 1e-3);

    let glow_r = (glow[0] - glow_center).length();
    let body_r = (body[0] - body_center).length();
    assert!((glow_r / body_r - 0.98).abs() < 1e-4);
}

#[test]
fn every_particle_is_drawn_twice_per_frame() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut animator = Animator::start(&mut rng, Viewport::new(1600.0, 900.0));
    let mut rec = Recorder::default();
    animator.frame(&mut rec);
    let polygons = rec
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Polygon(..)))
        .count();
    assert_eq!(polygons, 2 * animator.particles().len());
    assert_eq!(animator.frames(), 1);
}

#[test]
fn resize_changes_dimensions_but_not_particle_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut animator = Animator::start(&mut rng, Viewport::new(1920.0, 1080.0));
    let count = animator.particles().len();
    assert_eq!(count, 12);

    let resize = animator.resize_handle();
    assert!(resize.set(Viewport::new(640.0, 480.0)));
    assert_eq!(animator.viewport(), Viewport::new(640.0, 480.0));

    let mut rec = Recorder::default();
    animator.frame(&mut rec);
    assert_eq!(animator.particles().len(), count);
    assert_eq!(rec.ops[0], Op::Clear(640.0, 480.0));
}

#[test]
fn particles_outside_shrunk_bounds_are_pulled_back_by_wrap() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut animator = Animator::start(&mut rng, Viewport::new(3000.0, 2000.0));
    animator.resize_handle().set(Viewport::new(300.0, 200.0));
    animator.frame(&mut Recorder::default());
    let (min, max) = animator.viewport().extended_bounds();
    for p in animator.particles().iter() {
        assert!(p.position.x >= min.x && p.position.x <= max.x);
        assert!(p.position.y >= min.y && p.position.y <= max.y);
    }
}

#[test]
fn teardown_stops_frames() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut animator = Animator::start(&mut rng, Viewport::new(800.0, 600.0));
    let token = animator.token();
    let mut rec = Recorder::default();
    assert_eq!(animator.frame(&mut rec), FrameOutcome::Continue);
    let painted = rec.ops.len();
    let before: Vec<Particle> = animator.particles().iter().cloned().collect();

    animator.teardown();
    assert!(token.is_cancelled());
    assert!(!token.should_rearm());
    assert!(!animator.is_running());

    for _ in 0..3 {
        assert_eq!(animator.frame(&mut rec), FrameOutcome::Stopped);
    }
    assert_eq!(rec.ops.len(), painted);
    assert_eq!(animator.frames(), 1);
    let after: Vec<Particle> = animator.particles().iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn resize_after_teardown_does_not_mutate_dimensions() {
    let mut rng = StdRng::seed_from_u64(2);
    let animator = Animator::start(&mut rng, Viewport::new(1024.0, 768.0));
    let resize = animator.resize_handle();
    animator.teardown();
    animator.teardown();
    assert!(!resize.is_attached());
    assert!(!resize.set(Viewport::new(10.0, 10.0)));
    assert_eq!(animator.viewport(), Viewport::new(1024.0, 768.0));
}

#[test]
fn cancelling_a_cloned_token_stops_the_loop() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut animator = Animator::start(&mut rng, Viewport::new(800.0, 600.0));
    animator.token().cancel();
    assert_eq!(animator.frame(&mut Recorder::default()), FrameOutcome::Stopped);
}

#[test]
fn grid_lines_cover_the_surface_at_fixed_spacing() {
    let lines = grid_lines(250.0, 121.0);
    // x = 0, 120, 240 ; y = 0, 120
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], (Vec2::new(240.0, 0.0), Vec2::new(240.0, 121.0)));
    assert_eq!(lines[4], (Vec2::new(0.0, 120.0), Vec2::new(250.0, 120.0)));
    assert!(grid_lines(0.0, 0.0).is_empty());
}

#[test]
fn hsla_formats_as_css() {
    assert_eq!(Hsla::new(150, 90, 55, 0.15).to_string(), "hsla(150,90%,55%,0.15)");
    assert_eq!(Hsla::new(-10, 80, 62, 0.25).to_string(), "hsla(-10,80%,62%,0.25)");
}

#[test]
fn pagehide_into_back_forward_cache_keeps_loop_alive() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut animator = Animator::start(&mut rng, Viewport::new(800.0, 600.0));
    if releases_on_pagehide(true) {
        animator.teardown();
    }
    assert_eq!(animator.frame(&mut Recorder::default()), FrameOutcome::Continue);
    assert!(animator.token().should_rearm());

    if releases_on_pagehide(false) {
        animator.teardown();
    }
    assert_eq!(animator.frame(&mut Recorder::default()), FrameOutcome::Stopped);
}
