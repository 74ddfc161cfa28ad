use arcthrow::clamp;
use arcthrow::model::Rgba;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn to_hex_without_alpha_when_opaque() {
    assert_eq!(Rgba::new(1.0, 0.0, 0.5, 1.0).to_hex(), "#FF0080");
}

#[test]
fn to_hex_with_alpha_when_not_opaque() {
    assert_eq!(Rgba::new(1.0, 0.0, 0.0, 150.0 / 255.0).to_hex(), "#FF000096");
}

#[test]
fn to_hex_clamps_input() {
    assert_eq!(Rgba::new(-0.1, 1.2, 0.501, 1.0).to_hex(), "#00FF80");
}

#[test]
fn from_hex_rgb() {
    let c = Rgba::from_hex("#00FF00").expect("valid rgb hex");
    assert!(approx_eq(c.r, 0.0));
    assert!(approx_eq(c.g, 1.0));
    assert!(approx_eq(c.b, 0.0));
    assert!(approx_eq(c.a, 1.0));
}

#[test]
fn from_hex_rgba_trims_whitespace_and_case() {
    let c = Rgba::from_hex("  00ff00c8 ").expect("valid with whitespace and mixed case");
    assert!(approx_eq(c.g, 1.0));
    assert!(approx_eq(c.a, 200.0 / 255.0));
}

#[test]
fn from_hex_invalid_input_returns_none() {
    assert!(Rgba::from_hex("#FFF").is_none());
    assert!(Rgba::from_hex("#FF00FF0000").is_none());
    assert!(Rgba::from_hex("#GG0000").is_none());
    assert!(Rgba::from_hex("").is_none());
}
