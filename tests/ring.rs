use std::f32::consts::TAU;

use blob_ring::config::{Modes, Variant};
use blob_ring::field::{BlobFieldParameters, RadiusFractions, Viewport, MAX_BLOBS};
use blob_ring::color::hue;
use blob_ring::shader::{blob_center, blob_color, blob_radius, blobs_covering, shade};
use glam::{Vec2, Vec4};

fn field(count: u32, time: f32) -> BlobFieldParameters {
    let mut p = BlobFieldParameters::new(Viewport::new(800.0, 600.0), RadiusFractions::default());
    p.set_blob_count(count);
    p.spin_speed = 0.35;
    p.time = time;
    p
}

fn all_modes() -> [Modes; 3] {
    [
        Variant::Duo.modes(),
        Variant::Spectrum.modes(),
        Variant::Clicker.modes(),
    ]
}

#[test]
fn centers_lie_on_the_ring() {
    for count in 1..=MAX_BLOBS {
        for &t in &[0.0, 0.7, 13.25] {
            let p = field(count, t);
            for i in 0..count {
                let d = blob_center(&p, i).distance(p.center);
                assert!(
                    (d - p.outer_radius).abs() < 1e-3,
                    "count={count} i={i} t={t}: {d} vs {}",
                    p.outer_radius
                );
            }
        }
    }
}

#[test]
fn coverage_never_exceeds_blob_count() {
    for modes in all_modes() {
        for count in 1..=MAX_BLOBS {
            let p = field(count, 2.5);
            for y in (0..600).step_by(25) {
                for x in (0..800).step_by(25) {
                    let hits = blobs_covering(&p, &modes, Vec2::new(x as f32, y as f32));
                    assert!(hits.len() <= count as usize);
                    assert!(hits.iter().all(|&i| i < count));
                }
            }
        }
    }
}

#[test]
fn blob_center_pixel_is_covered() {
    let modes = Variant::Duo.modes();
    let p = field(5, 1.0);
    for i in 0..5 {
        assert!(blobs_covering(&p, &modes, blob_center(&p, i)).contains(&i));
    }
}

#[test]
fn radius_period_ignores_blob_count() {
    let modes = Variant::Duo.modes();
    let spin = 0.35;
    let period = TAU / (TAU * spin + 2.0);
    for count in [1, 3, 7, 20] {
        for &t in &[0.0f32, 0.4, 2.9] {
            let a = field(count, t);
            let b = field(count, t + period);
            for i in 0..count {
                let (ra, rb) = (blob_radius(&a, &modes, i), blob_radius(&b, &modes, i));
                assert!((ra - rb).abs() < 1e-2, "count={count} t={t} i={i}: {ra} vs {rb}");
            }
        }
    }
}

#[test]
fn radius_stays_within_range() {
    for modes in all_modes() {
        let p = field(12, 4.2);
        for i in 0..12 {
            let r = blob_radius(&p, &modes, i);
            assert!(r >= p.radius_range.x - 1e-4 && r <= p.radius_range.y + 1e-4);
        }
    }
}

#[test]
fn background_far_from_ring() {
    let p = field(8, 0.0);
    let corner = Vec2::new(1.0, 1.0);
    assert_eq!(shade(&p, &Variant::Duo.modes(), corner), glam::Vec4::ONE);
    assert_eq!(
        shade(&p, &Variant::Clicker.modes(), corner),
        glam::Vec4::new(0.0, 0.0, 0.0, 1.0)
    );
}

#[test]
fn overlaps_darken_on_light_background() {
    let modes = Variant::Duo.modes();
    let mut p = field(2, 0.0);
    // Both blobs sit on the same spot when the ring collapses.
    p.outer_radius = 0.0;
    let one = {
        let mut single = p.clone();
        single.set_blob_count(1);
        shade(&single, &modes, p.center)
    };
    let two = shade(&p, &modes, p.center);
    assert!(two.x <= one.x && two.y <= one.y && two.z <= one.z);
}

#[test]
fn zero_radius_fractions_stay_finite() {
    let mut p = BlobFieldParameters::new(
        Viewport::new(640.0, 480.0),
        RadiusFractions { outer: 0.0, min: 0.0, max: 0.0 },
    );
    p.set_blob_count(20);
    for modes in all_modes() {
        let c = shade(&p, &modes, p.center);
        assert!(c.is_finite(), "{c:?}");
    }
}

fn approx4(a: Vec4, b: Vec4, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn accumulated_weight_is_abs_cosine() {
    let modes = Variant::Clicker.modes();
    let mut p = field(4, 0.0);
    p.radius_range = Vec2::new(10.0, 30.0);
    p.size_phase = 0.3;
    for i in 0..4 {
        let percent = i as f32 / 4.0;
        let w = (std::f32::consts::PI * percent + 0.3).cos().abs();
        let expected = 10.0 + 20.0 * w;
        let r = blob_radius(&p, &modes, i);
        assert!((r - expected).abs() < 1e-4, "i={i}: {r} vs {expected}");
    }
}

#[test]
fn two_color_blend_follows_counter_wave() {
    let modes = Variant::Duo.modes();
    let mut p = field(3, 0.4);
    p.color_a = Vec4::new(1.0, 0.0, 0.0, 1.0);
    p.color_b = Vec4::new(0.0, 0.0, 1.0, 1.0);
    for &percent in &[0.0f32, 0.1, 0.37, 0.8] {
        let w = ((TAU * percent - 0.8).cos() + 1.0) / 2.0;
        let expected = Vec4::new(1.0 - w, 0.0, w, 1.0);
        let c = blob_color(&p, &modes, percent);
        assert!(approx4(c, expected, 1e-5), "percent={percent}: {c:?} vs {expected:?}");
    }
}

/// One or more blobs stacked on the ring center, radius 40, sampled 20px out.
fn stacked(count: u32) -> BlobFieldParameters {
    let mut p = field(count, 0.0);
    p.outer_radius = 0.0;
    p.radius_range = Vec2::new(40.0, 40.0);
    p
}

#[test]
fn light_fade_is_halfway_at_half_radius() {
    let modes = Variant::Duo.modes();
    let p = stacked(1);
    // At t=0 the single blob is pure color B.
    let expected = (p.color_b + Vec4::ONE) / 2.0;
    let c = shade(&p, &modes, p.center + Vec2::new(20.0, 0.0));
    assert!(approx4(c, expected, 1e-5), "{c:?} vs {expected:?}");
}

#[test]
fn dark_background_screens_overlaps() {
    let modes = Variant::Clicker.modes();
    let p = stacked(2);
    let half = |percent: f32| hue(percent, 0.0) * 0.5 + Vec4::new(0.0, 0.0, 0.0, 0.5);
    let (f0, f1) = (half(0.0), half(0.5));
    let expected = Vec4::ONE - (Vec4::ONE - f0) * (Vec4::ONE - f1);

    let c = shade(&p, &modes, p.center + Vec2::new(20.0, 0.0));
    assert!(approx4(c, expected, 1e-5), "{c:?} vs {expected:?}");
    // Screening only ever brightens.
    assert!(c.x >= f0.x && c.y >= f0.y && c.z >= f0.z);
}
