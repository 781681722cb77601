use super::rand::{random_star_polygon, StarCfg, VertexCount};
use super::*;
use crate::transform::{apply_transform, TransformRequest};
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn unit_square() -> Vec<Point> {
    vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
}

fn assert_points_close(a: &[Point], b: &[Point], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (u, v)) in a.iter().zip(b).enumerate() {
        assert!((*u - *v).norm() <= tol, "vertex {i}: {u:?} vs {v:?}");
    }
}

fn star(seed: u64) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 12 },
        radius: 3.0,
        center: p(1.0, -2.0),
        ..StarCfg::default()
    };
    random_star_polygon(cfg, seed)
}

#[test]
fn square_containment() {
    let sq = unit_square();
    assert!(is_point_in_polygon(p(0.5, 0.5), &sq));
    assert!(!is_point_in_polygon(p(2.0, 2.0), &sq));
    assert!(!is_point_in_polygon(p(-0.5, 0.5), &sq));
}

#[test]
fn concave_containment_uses_even_odd() {
    // U shape opening upwards; the notch is outside
    let u = vec![
        p(0.0, 0.0),
        p(3.0, 0.0),
        p(3.0, 3.0),
        p(2.0, 3.0),
        p(2.0, 1.0),
        p(1.0, 1.0),
        p(1.0, 3.0),
        p(0.0, 3.0),
    ];
    assert!(is_point_in_polygon(p(0.5, 2.0), &u));
    assert!(is_point_in_polygon(p(2.5, 2.0), &u));
    assert!(!is_point_in_polygon(p(1.5, 2.0), &u));
    assert!(is_point_in_polygon(p(1.5, 0.5), &u));
}

#[test]
fn fewer_than_three_vertices_never_contain() {
    assert!(!is_point_in_polygon(p(0.0, 0.0), &[]));
    assert!(!is_point_in_polygon(p(0.0, 0.0), &[p(0.0, 0.0)]));
    assert!(!is_point_in_polygon(p(0.5, 0.0), &[p(0.0, 0.0), p(1.0, 0.0)]));
}

#[test]
fn classify_left_right_on() {
    let e = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
    assert_eq!(classify(p(0.5, 1.0), &e), Side::Left);
    assert_eq!(classify(p(0.5, -1.0), &e), Side::Right);
    assert_eq!(classify_sign(p(0.5, 1.0), &e), 1);
    assert_eq!(classify_sign(p(0.5, -1.0), &e), -1);
    assert_eq!(classify_sign(p(0.5, 0.0), &e), 0);
    // collinear beyond the segment still counts as on the line
    assert_eq!(classify(p(7.0, 0.0), &e), Side::On);
}

#[test]
fn crossing_diagonals_meet_in_the_middle() {
    let a = Edge::new(p(0.0, 0.0), p(2.0, 2.0));
    let b = Edge::new(p(0.0, 2.0), p(2.0, 0.0));
    let x = find_intersection(&a, &b).unwrap();
    assert!((x - p(1.0, 1.0)).norm() < 1e-12);
}

#[test]
fn parallel_and_disjoint_segments_do_not_intersect() {
    let a = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
    let b = Edge::new(p(0.0, 1.0), p(1.0, 1.0));
    assert!(find_intersection(&a, &b).is_none());
    // lines cross at (1.5, 1.5), outside both segments
    let c = Edge::new(p(0.0, 0.0), p(1.0, 1.0));
    let d = Edge::new(p(3.0, 0.0), p(2.0, 1.0));
    assert!(find_intersection(&c, &d).is_none());
}

#[test]
fn shared_endpoint_counts_as_intersection() {
    let a = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
    let b = Edge::new(p(1.0, 0.0), p(1.0, 1.0));
    assert_eq!(find_intersection(&a, &b), Some(p(1.0, 0.0)));
}

#[test]
fn collinear_overlap_and_near_parallel_report_none() {
    let a = Edge::new(p(0.0, 0.0), p(2.0, 0.0));
    let b = Edge::new(p(1.0, 0.0), p(3.0, 0.0));
    assert!(find_intersection(&a, &b).is_none());
    // touching at the origin, but |denom| = 4e-5 is below the tolerance
    let c = Edge::new(p(0.0, 0.0), p(1.0, 2e-5));
    assert!(find_intersection(&a, &c).is_none());
    let strict = GeomCfg { eps_parallel: 1e-9 };
    assert!(find_intersection_cfg(&a, &c, strict).is_some());
}

#[test]
fn distance_to_segment_clamps_to_endpoints() {
    let e = Edge::new(p(0.0, 0.0), p(4.0, 0.0));
    assert!((distance_to_segment(p(2.0, 3.0), &e) - 3.0).abs() < 1e-12);
    assert!((distance_to_segment(p(7.0, 4.0), &e) - 5.0).abs() < 1e-12);
    assert!((distance_to_segment(p(-3.0, 0.0), &e) - 3.0).abs() < 1e-12);
    let dot = Edge::new(p(1.0, 1.0), p(1.0, 1.0));
    assert!((distance_to_segment(p(4.0, 5.0), &dot) - 5.0).abs() < 1e-12);
    assert!(is_near_edge(p(2.0, 0.25), &e, 0.25));
}

#[test]
fn polygon_edges_wrap_around() {
    let sq = Polygon::from_points(unit_square());
    let edges: Vec<Edge> = sq.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], Edge::new(p(0.0, 1.0), p(0.0, 0.0)));
    let seg = Polygon::from_points(vec![p(0.0, 0.0), p(1.0, 0.0)]);
    let seg_edges: Vec<Edge> = seg.edges().collect();
    let forward = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
    assert_eq!(seg_edges, vec![forward, forward.reversed()]);
    assert_eq!(Polygon::from_points(vec![p(1.0, 1.0)]).edges().count(), 0);
}

#[test]
fn centroid_is_vertex_mean() {
    let sq = Polygon::from_points(unit_square());
    assert_eq!(sq.centroid(), Some(p(0.5, 0.5)));
    assert_eq!(Polygon::new().centroid(), None);
}

#[test]
fn rotation_about_equals_three_step_sequence() {
    let c = p(2.0, -1.0);
    let original = unit_square();
    let mut fused = original.clone();
    Affine2::rotation_about(33.0, c).apply_points(&mut fused);
    let mut stepped = original;
    Affine2::translation(-c.x, -c.y).apply_points(&mut stepped);
    Affine2::rotation(33.0).apply_points(&mut stepped);
    Affine2::translation(c.x, c.y).apply_points(&mut stepped);
    assert_points_close(&fused, &stepped, 1e-12);
}

proptest! {
    #[test]
    fn translate_then_back_is_identity(seed in 0u64..500, dx in -50.0f64..50.0, dy in -50.0f64..50.0) {
        let original = star(seed);
        let mut poly = original.clone();
        apply_transform(&mut poly, &TransformRequest::Translate { dx, dy });
        apply_transform(&mut poly, &TransformRequest::Translate { dx: -dx, dy: -dy });
        assert_points_close(poly.points(), original.points(), 1e-9);
    }

    #[test]
    fn rotate_about_centroid_and_back(seed in 0u64..500, angle in -720.0f64..720.0) {
        let original = star(seed);
        let mut poly = original.clone();
        apply_transform(&mut poly, &TransformRequest::RotateAboutCentroid { angle_deg: angle });
        apply_transform(&mut poly, &TransformRequest::RotateAboutCentroid { angle_deg: -angle });
        assert_points_close(poly.points(), original.points(), 1e-9);
    }

    #[test]
    fn scale_about_point_then_reciprocal(
        seed in 0u64..500,
        s in prop_oneof![0.1f64..10.0, -10.0f64..-0.1],
        cx in -5.0f64..5.0,
        cy in -5.0f64..5.0,
    ) {
        let original = star(seed);
        let center = p(cx, cy);
        let mut poly = original.clone();
        apply_transform(&mut poly, &TransformRequest::ScaleAboutPoint { sx: s, sy: s, center });
        apply_transform(&mut poly, &TransformRequest::ScaleAboutPoint { sx: 1.0 / s, sy: 1.0 / s, center });
        assert_points_close(poly.points(), original.points(), 1e-9);
    }

    #[test]
    fn rotate_about_point_matches_composition(
        seed in 0u64..500,
        angle in -360.0f64..360.0,
        cx in -5.0f64..5.0,
        cy in -5.0f64..5.0,
    ) {
        let c = p(cx, cy);
        let mut fused = star(seed);
        apply_transform(&mut fused, &TransformRequest::RotateAboutPoint { angle_deg: angle, center: c });
        let mut stepped = star(seed);
        for step in [
            Affine2::translation(-cx, -cy),
            Affine2::rotation(angle),
            Affine2::translation(cx, cy),
        ] {
            step.apply_points(stepped.points_mut());
        }
        assert_points_close(fused.points(), stepped.points(), 1e-9);
    }

    #[test]
    fn transforms_preserve_count_and_containment(
        seed in 0u64..500,
        angle in -180.0f64..180.0,
        sx in 0.2f64..5.0,
        sy in prop_oneof![0.2f64..5.0, -5.0f64..-0.2],
        tx in -20.0f64..20.0,
        ty in -20.0f64..20.0,
    ) {
        // the sampling center is interior for these star polygons
        let center = p(1.0, -2.0);
        let mut poly = star(seed);
        let n = poly.len();
        prop_assert!(is_point_in_polygon(center, poly.points()));
        let m = Affine2::rotation(angle)
            .then(&Affine2::scale(sx, sy))
            .then(&Affine2::translation(tx, ty));
        m.apply_points(poly.points_mut());
        prop_assert_eq!(poly.len(), n);
        prop_assert!(is_point_in_polygon(m.apply_point(center), poly.points()));
    }

    #[test]
    fn intersection_lies_on_both_segments(
        ax in -10.0f64..10.0, ay in -10.0f64..10.0, bx in -10.0f64..10.0, by in -10.0f64..10.0,
        cx in -10.0f64..10.0, cy in -10.0f64..10.0, dx in -10.0f64..10.0, dy in -10.0f64..10.0,
    ) {
        let a = Edge::new(p(ax, ay), p(bx, by));
        let b = Edge::new(p(cx, cy), p(dx, dy));
        if let Some(x) = find_intersection(&a, &b) {
            prop_assert!(distance_to_segment(x, &a) < 1e-6);
            prop_assert!(distance_to_segment(x, &b) < 1e-6);
        }
    }

    #[test]
    fn reversing_edge_flips_classification(
        sx in -50i32..50, sy in -50i32..50, ex in -50i32..50, ey in -50i32..50,
        px in -50i32..50, py in -50i32..50,
    ) {
        // small integers keep the cross product exact
        let e = Edge::new(p(sx as f64, sy as f64), p(ex as f64, ey as f64));
        let q = p(px as f64, py as f64);
        prop_assert_eq!(classify_sign(q, &e.reversed()), -classify_sign(q, &e));
    }
}
