use blob_ring::bridge::{Control, ControlId, Uniform};
use blob_ring::field::{BlobFieldParameters, RadiusFractions, Viewport};
use glam::Vec2;

#[test]
fn halving_the_viewport_halves_the_ring() {
    let mut p = BlobFieldParameters::new(Viewport::new(800.0, 600.0), RadiusFractions::default());
    let before = p.outer_radius;
    let dirty = p.apply_viewport(Viewport::new(400.0, 300.0));
    assert!((p.outer_radius - before / 2.0).abs() < 1e-4);
    assert_eq!(p.center, Vec2::new(200.0, 150.0));
    assert!(dirty.contains(&Uniform::OuterRadius));
    assert!(dirty.contains(&Uniform::View));
}

#[test]
fn radii_follow_the_short_side() {
    let fractions = RadiusFractions { outer: 0.4, min: 0.25, max: 0.75 };
    let p = BlobFieldParameters::new(Viewport::new(1920.0, 1080.0), fractions);
    assert!((p.outer_radius - 432.0).abs() < 1e-3);
    assert!((p.radius_range.x - 108.0).abs() < 1e-3);
    assert!((p.radius_range.y - 324.0).abs() < 1e-3);
}

#[test]
fn color_picker_values_reach_the_field() {
    let mut p = BlobFieldParameters::new(Viewport::new(800.0, 600.0), RadiusFractions::default());
    let control = Control::parse(ControlId::ColorB, "#ff8000").unwrap();
    assert_eq!(p.apply(control), &[Uniform::ColorB]);
    assert!((p.color_b.y - 0.502).abs() < 1.0 / 255.0);
    assert_eq!(p.color_b.w, 1.0);
}

#[test]
fn rejected_input_leaves_parameters_alone() {
    let p = BlobFieldParameters::new(Viewport::new(800.0, 600.0), RadiusFractions::default());
    let before = p.clone();
    assert!(Control::parse(ControlId::OuterRadius, "").is_err());
    assert!(Control::parse(ControlId::ColorA, "#12").is_err());
    assert_eq!(p, before);
}

#[test]
fn page_has_every_control_and_hides_unused_pickers() {
    let page = include_str!("../static/index.html");
    for id in ControlId::ALL {
        assert!(page.contains(&format!("id=\"{}\"", id.element_id())), "{id:?}");
    }
    for picker in [ControlId::ColorA, ControlId::ColorB] {
        let tag = format!("<input class=\"two-color\" id=\"{}\"", picker.element_id());
        assert!(page.contains(&tag), "{picker:?} is not hidden in hue mode");
    }
    assert!(page.contains("body.spectrum .two-color { display: none; }"));
}
