use std::f64::consts::FRAC_PI_2;

use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn rotate_about_keeps_center_fixed() {
    let c = Point::new(10.0, 20.0);
    let t = rotate_about(c, 1.234);
    assert!(close(t * c, c));
}

#[test]
fn negative_quarter_turn_maps_right_to_up() {
    let c = Point::new(10.0, 10.0);
    let t = rotate_about(c, -FRAC_PI_2);
    // y grows downward, so "up" is smaller y.
    assert!(close(t * Point::new(15.0, 10.0), Point::new(10.0, 5.0)));
}

#[test]
fn opposite_rotations_cancel() {
    let c = Point::new(3.0, 4.0);
    let t = rotate_about(c, FRAC_PI_2) * rotate_about(c, -FRAC_PI_2);
    let p = Point::new(-7.0, 2.5);
    assert!(close(t * p, p));
}
