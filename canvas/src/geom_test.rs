#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_relative_to_subtracts_origin() {
    let screen = Point::new(130.0, 95.0);
    let origin = Point::new(100.0, 80.0);
    assert_eq!(screen.relative_to(origin), Point::new(30.0, 15.0));
}

#[test]
fn point_relative_to_can_go_negative() {
    let p = Point::new(5.0, 5.0).relative_to(Point::new(10.0, 20.0));
    assert_eq!(p, Point::new(-5.0, -15.0));
}

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// --- Size ---

#[test]
fn size_area() {
    assert_eq!(Size::new(400, 300).area(), 120_000);
    assert_eq!(Size::default().area(), 0);
}

#[test]
fn size_intersect_takes_min_per_axis() {
    let a = Size::new(400, 300);
    let b = Size::new(250, 500);
    assert_eq!(a.intersect(b), Size::new(250, 300));
    assert_eq!(b.intersect(a), Size::new(250, 300));
}

#[test]
fn size_contains_is_exclusive_at_far_edge() {
    let s = Size::new(10, 5);
    assert!(s.contains(0, 0));
    assert!(s.contains(9, 4));
    assert!(!s.contains(10, 4));
    assert!(!s.contains(9, 5));
}

#[test]
fn size_is_empty() {
    assert!(Size::new(0, 10).is_empty());
    assert!(Size::new(10, 0).is_empty());
    assert!(!Size::new(1, 1).is_empty());
}

// --- Segment ---

#[test]
fn segment_distance_to_interior_point() {
    let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(s.distance_to(Point::new(5.0, 3.0)), 3.0));
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let s = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(s.distance_to(Point::new(-3.0, 4.0)), 5.0));
    assert!(approx_eq(s.distance_to(Point::new(13.0, -4.0)), 5.0));
}

#[test]
fn degenerate_segment_measures_to_its_point() {
    let p = Point::new(2.0, 2.0);
    let s = Segment::new(p, p);
    assert!(approx_eq(s.distance_to(Point::new(5.0, 6.0)), 5.0));
}
