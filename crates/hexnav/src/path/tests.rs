use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use svgtypes::{PathParser, PathSegment};

fn segments(d: &str) -> Vec<PathSegment> {
    PathParser::from(d)
        .collect::<Result<Vec<_>, _>>()
        .expect("valid svg path data")
}

fn count_q(d: &str) -> usize {
    d.matches("Q ").count()
}

/// (L endpoint, Q control) pairs in path order.
fn line_control_pairs(segs: &[PathSegment]) -> Vec<((f64, f64), (f64, f64))> {
    let mut out = Vec::new();
    let mut last_line = None;
    for s in segs {
        match *s {
            PathSegment::LineTo { x, y, .. } => last_line = Some((x, y)),
            PathSegment::Quadratic { x1, y1, .. } => {
                out.push((last_line.expect("L before Q"), (x1, y1)));
            }
            _ => {}
        }
    }
    out
}

#[test]
fn full_hexagon_scenario() {
    let d = hex_path(1.0, 0.1, false);
    assert_eq!(count_q(&d), 6);
    assert!(d.ends_with('Z'));
    assert!(d.starts_with("M "));
}

#[test]
fn half_hexagon_has_four_corners() {
    let d = hex_path(1.0, 0.1, true);
    assert_eq!(count_q(&d), 4);
    assert!(d.ends_with('Z'));
    // nothing below the cut line
    for s in segments(&d) {
        if let PathSegment::LineTo { y, .. } | PathSegment::Quadratic { y, .. } = s {
            assert!(y <= 0.866 + 1e-4, "y={y} below the middle line");
        }
    }
}

#[test]
fn all_commands_absolute_and_closed() {
    let segs = segments(&hex_path(50.0, 6.0, false));
    assert!(matches!(segs.first(), Some(PathSegment::MoveTo { abs: true, .. })));
    assert!(matches!(segs.last(), Some(PathSegment::ClosePath { .. })));
    assert_eq!(segs.len(), 1 + 6 * 2 + 1);
    for s in &segs {
        match s {
            PathSegment::MoveTo { abs, .. }
            | PathSegment::LineTo { abs, .. }
            | PathSegment::Quadratic { abs, .. } => assert!(*abs),
            PathSegment::ClosePath { .. } => {}
            other => panic!("unexpected segment {other:?}"),
        }
    }
}

#[test]
fn last_curve_returns_to_start() {
    let segs = segments(&hex_path(3.0, 0.4, false));
    let start = match segs[0] {
        PathSegment::MoveTo { x, y, .. } => (x, y),
        _ => panic!("expected M"),
    };
    let end = match segs[segs.len() - 2] {
        PathSegment::Quadratic { x, y, .. } => (x, y),
        _ => panic!("expected Q before Z"),
    };
    assert_eq!(start, end);
}

#[test]
fn slanted_edge_offsets_use_30_degree_components() {
    // First exit point leaves the left vertex towards the top-left one.
    let r = 0.1;
    let segs = segments(&hex_path(1.0, r, false));
    let (x, y) = match segs[0] {
        PathSegment::MoveTo { x, y, .. } => (x, y),
        _ => panic!("expected M"),
    };
    let sin30 = 0.5;
    let cos30 = 3f64.sqrt() / 2.0;
    assert!((x - r * sin30).abs() < 1e-4);
    assert!((y - (0.866 - r * cos30)).abs() < 1e-4);
}

#[test]
fn vertices_symmetric_about_center() {
    let s = 7.5;
    let v = hex_vertices(s);
    let c = HexPath::new(s, 0.0, false).center();
    for i in 0..3 {
        assert!((v[i] + v[i + 3] - c * 2.0).norm() < 1e-9);
    }
    for p in v {
        assert!(((p - c).norm() - s).abs() < 1e-9);
    }
    // flat top: the two upper vertices share a y coordinate
    assert!((v[1].y - v[2].y).abs() < 1e-12);
    assert!((v[4].y - v[5].y).abs() < 1e-12);
}

#[test]
fn zero_radius_collapses_to_sharp_corners_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let s: f64 = rng.gen_range(0.1..200.0);
        for half in [false, true] {
            let pairs = line_control_pairs(&segments(&hex_path(s, 0.0, half)));
            assert_eq!(pairs.len(), if half { 4 } else { 6 });
            for (l, q) in pairs {
                assert_eq!(l, q);
            }
        }
    }
}

#[test]
fn rounded_polygon_path_on_a_square() {
    let sq = [
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(0.0, 10.0),
    ];
    assert_eq!(
        rounded_polygon_path(&sq, 1.0),
        "M 1 0 L 9 0 Q 10 0 10 1 L 10 9 Q 10 10 9 10 L 1 10 Q 0 10 0 9 L 0 1 Q 0 0 1 0 Z"
    );
}

#[test]
fn hex_path_struct_matches_free_fn() {
    let hp = HexPath::new(2.0, 0.25, true);
    assert_eq!(hp.path, hex_path(2.0, 0.25, true));
    assert!(hp.is_half);
}

#[test]
fn polar_cardinal_directions() {
    assert!((polar(2.0, 0.0) - Vector2::new(2.0, 0.0)).norm() < 1e-12);
    assert!((polar(2.0, 90.0) - Vector2::new(0.0, 2.0)).norm() < 1e-12);
    assert!((polar(2.0, 180.0) - Vector2::new(-2.0, 0.0)).norm() < 1e-12);
}

proptest! {
    #[test]
    fn corner_count_and_terminator(
        s in 0.1f64..500.0,
        frac in 0.0f64..0.49,
        half in any::<bool>(),
    ) {
        let d = hex_path(s, s * frac, half);
        prop_assert!(d.ends_with('Z'));
        prop_assert_eq!(count_q(&d), if half { 4 } else { 6 });
        prop_assert_eq!(segments(&d).len(), 2 + if half { 8 } else { 12 });
    }
}
