// Host-side tests for easing curves and the heart drawing sequence.

use valentine_web::core::{Ease, HeartDraw, Position, Sequence};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

const ALL_EASES: [Ease; 7] = [
    Ease::Linear,
    Ease::Power1Out,
    Ease::Power2In,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::SineInOut,
    Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.5,
    },
];

#[test]
fn eases_hit_both_endpoints() {
    for ease in ALL_EASES {
        assert!(close(ease.apply(0.0), 0.0), "{ease:?} at 0");
        assert!(close(ease.apply(1.0), 1.0), "{ease:?} at 1");
        // out-of-range progress is clamped
        assert!(close(ease.apply(-1.0), 0.0));
        assert!(close(ease.apply(2.0), 1.0));
    }
}

#[test]
fn in_out_curves_are_symmetric() {
    for ease in [Ease::Power2InOut, Ease::SineInOut] {
        assert!(close(ease.apply(0.5), 0.5));
        for i in 1..10 {
            let t = i as f32 / 20.0;
            assert!(close(ease.apply(t) + ease.apply(1.0 - t), 1.0), "{ease:?} at {t}");
        }
    }
}

#[test]
fn power1_out_is_quadratic() {
    assert!(close(Ease::Power1Out.apply(0.5), 0.75));
    assert!(close(Ease::Power1Out.apply(0.25), 0.4375));
    // gentler than power2.out at the same progress
    assert!(Ease::Power1Out.apply(0.3) < Ease::Power2Out.apply(0.3));
}

#[test]
fn elastic_out_overshoots_then_settles() {
    let ease = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.5,
    };
    let peak = (1..100)
        .map(|i| ease.apply(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "expected overshoot, peak {peak}");
    assert!((ease.apply(0.9) - 1.0).abs() < 0.01);
}

#[test]
fn sequence_places_overlaps_relative_to_end() {
    let mut seq = Sequence::new();
    assert_eq!(seq.place(2.0, Position::Append), 0.0);
    assert_eq!(seq.place(1.0, Position::Overlap(0.5)), 1.5);
    assert_eq!(seq.end_sec(), 2.5);
    assert_eq!(seq.place(0.5, Position::Overlap(0.5)), 2.0);
    assert_eq!(seq.end_sec(), 2.5);
    assert_eq!(seq.place(1.0, Position::Append), 2.5);
    assert_eq!(seq.place(0.2, Position::At(0.1)), 0.1);
    assert_eq!(seq.end_sec(), 3.5);
}

#[test]
fn drawing_starts_hidden() {
    let draw = HeartDraw::new();
    let f = draw.sample(0.0);
    assert_eq!(f.outline_dash_offset, 1000.0);
    assert_eq!(f.outline_opacity, 1.0);
    assert_eq!(f.solid_opacity, 0.0);
    assert!(close(f.solid_scale, 0.6));
    assert_eq!(f.solid_rotate_y_deg, 0.0);
}

#[test]
fn outline_is_traced_before_the_solid_heart_appears() {
    let draw = HeartDraw::new();
    assert!(close(draw.solid_reveal_start_sec(), 1.5));
    assert!(close(draw.spin_start_sec(), 2.5));

    let mid = draw.sample(1.0);
    assert!(mid.outline_dash_offset > 0.0 && mid.outline_dash_offset < 1000.0);
    assert_eq!(mid.solid_opacity, 0.0);

    let traced = draw.sample(2.0);
    assert_eq!(traced.outline_dash_offset, 0.0);
    assert!(traced.solid_opacity > 0.0);
    assert_eq!(traced.outline_opacity, 1.0);
}

#[test]
fn setup_ends_with_solid_heart_shown() {
    let draw = HeartDraw::new();
    let f = draw.sample(2.5);
    assert_eq!(f.outline_opacity, 0.0);
    assert_eq!(f.solid_opacity, 1.0);
    assert!(close(f.solid_scale, 1.0));
    assert!(close(f.solid_rotate_y_deg, 0.0));
}

#[test]
fn outline_fade_eases_out_quadratically() {
    let draw = HeartDraw::new();
    // the fade runs 2.0..2.5 s; halfway through it is three quarters done
    let f = draw.sample(2.25);
    assert!(close(f.outline_opacity, 0.25), "{f:?}");
}

#[test]
fn solid_opacity_never_overshoots() {
    let draw = HeartDraw::new();
    for i in 0..400 {
        let f = draw.sample(i as f32 / 100.0);
        assert!((0.0..=1.0).contains(&f.solid_opacity));
    }
}

#[test]
fn spin_repeats_every_cycle() {
    let draw = HeartDraw::new();
    let s = draw.spin_start_sec();

    let half = draw.sample(s + 2.5);
    assert!(close(half.solid_rotate_y_deg, 180.0));
    assert!(close(half.solid_scale, 1.1));

    let quarter = draw.sample(s + 1.25);
    assert!(close(quarter.solid_rotate_y_deg, 90.0));

    for cycles in [1.0, 7.0, 1_000.0] {
        let a = draw.sample(s + 1.0);
        let b = draw.sample(s + 1.0 + 5.0 * cycles);
        assert!((a.solid_rotate_y_deg - b.solid_rotate_y_deg).abs() < 0.05);
        assert!((a.solid_scale - b.solid_scale).abs() < 1e-3);
    }
}
