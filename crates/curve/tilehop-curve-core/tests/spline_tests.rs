use tilehop_curve_core::{
    enforce_mode, vec3, BezierSpline, ControlPointMode, SplineError, Vec3,
};
use tilehop_test_fixtures::splines;

fn approx3(a: Vec3, b: Vec3, eps: f32) {
    for i in 0..3 {
        assert!(
            (a[i] - b[i]).abs() <= eps,
            "left={a:?} right={b:?} eps={eps}"
        );
    }
}

fn fixture(name: &str) -> BezierSpline {
    BezierSpline::new(splines::points(name).expect("fixture loads")).expect("valid spline")
}

/// it should interpolate the first and last control points at u=0 and u=1
#[test]
fn endpoints_match_first_and_last_control_points() {
    for name in splines::keys() {
        let spline = fixture(&name);
        let n = spline.control_point_count();
        approx3(spline.point(0.0), spline.control_point(0).unwrap(), 1e-6);
        approx3(spline.point(1.0), spline.control_point(n - 1).unwrap(), 1e-6);
    }
}

/// it should be continuous across every internal segment boundary
#[test]
fn continuous_across_segment_boundaries() {
    for name in splines::keys() {
        let spline = fixture(&name);
        let curves = spline.curve_count();
        for k in 1..curves {
            let u = k as f32 / curves as f32;
            let before = spline.point(u - 1e-4);
            let at = spline.point(u);
            approx3(before, at, 1e-2);
            // the shared anchor is hit exactly at the boundary
            approx3(at, spline.control_point(3 * k).unwrap(), 1e-5);
        }
    }
}

/// it should degenerate to linear interpolation on a straight, evenly spaced segment
#[test]
fn straight_segment_is_linear() {
    let spline = fixture("straight");
    approx3(spline.point(0.5), [1.5, 0.0, 0.0], 1e-6);
    approx3(spline.point(0.25), [0.75, 0.0, 0.0], 1e-6);
    approx3(spline.direction(0.3), [1.0, 0.0, 0.0], 1e-6);
    approx3(spline.velocity(0.3), [3.0, 0.0, 0.0], 1e-5);
}

/// it should evaluate u >= 1 on the last segment instead of indexing past the end
#[test]
fn end_parameter_is_pinned_to_last_segment() {
    let spline = fixture("zigzag");
    let last = spline.control_point(spline.control_point_count() - 1).unwrap();
    approx3(spline.point(1.0), last, 1e-6);
    approx3(spline.point(1.5), last, 1e-6);
    approx3(spline.direction(1.0), spline.direction(0.99999), 1e-2);
}

/// it should grow by one curve and three control points per add_curve
#[test]
fn add_curve_appends_one_segment() {
    let mut spline = BezierSpline::default();
    for expected_curves in 2..5 {
        let points_before = spline.control_point_count();
        spline.add_curve();
        assert_eq!(spline.curve_count(), expected_curves);
        assert_eq!(spline.control_point_count(), points_before + 3);
    }
    // extrapolated along +x from the previous end anchor
    approx3(spline.point(1.0), [13.0, 0.0, 0.0], 1e-6);
}

/// it should propagate the end anchor mode onto the appended anchor
#[test]
fn add_curve_inherits_end_mode() {
    let mut spline = fixture("hop-arc");
    spline
        .set_control_point_mode(6, ControlPointMode::Mirrored)
        .unwrap();
    spline.add_curve();
    assert_eq!(spline.control_point_mode(9), Ok(ControlPointMode::Mirrored));
    // the former end anchor (6) now has two handles and they are mirrored
    let anchor = spline.control_point(6).unwrap();
    let left = spline.control_point(5).unwrap();
    let right = spline.control_point(7).unwrap();
    approx3(vec3::sub(anchor, left), vec3::sub(right, anchor), 1e-6);
}

/// it should reject control point lists that are not 3N+1 long
#[test]
fn rejects_invalid_counts() {
    for len in [0usize, 1, 2, 3, 5, 6, 8] {
        let err = BezierSpline::new(vec![[0.0; 3]; len]).unwrap_err();
        assert_eq!(err, SplineError::InvalidControlPointCount { len });
    }
    assert!(BezierSpline::new(vec![[0.0; 3]; 7]).is_ok());
}

/// it should report out-of-range accessors instead of panicking
#[test]
fn accessors_check_bounds() {
    let mut spline = fixture("straight");
    let oob = SplineError::IndexOutOfRange { index: 4, len: 4 };
    assert_eq!(spline.control_point(4), Err(oob.clone()));
    assert_eq!(spline.set_control_point(4, [0.0; 3]), Err(oob.clone()));
    assert_eq!(spline.control_point_mode(4), Err(oob.clone()));
    assert_eq!(
        spline.set_control_point_mode(4, ControlPointMode::Aligned),
        Err(oob)
    );
}

/// it should drag both handles when an anchor moves
#[test]
fn moving_anchor_drags_handles() {
    let mut spline = fixture("hop-arc");
    let before_left = spline.control_point(2).unwrap();
    let before_right = spline.control_point(4).unwrap();
    spline.set_control_point(3, [1.0, 1.0, 0.0]).unwrap();
    approx3(
        spline.control_point(2).unwrap(),
        vec3::add(before_left, [0.0, 1.0, 0.0]),
        1e-6,
    );
    approx3(
        spline.control_point(4).unwrap(),
        vec3::add(before_right, [0.0, 1.0, 0.0]),
        1e-6,
    );
}

/// it should keep handles collinear with the anchor under Aligned and Mirrored
#[test]
fn constrained_modes_keep_handles_collinear() {
    for mode in [ControlPointMode::Aligned, ControlPointMode::Mirrored] {
        let mut spline = fixture("zigzag");
        spline.set_control_point_mode(3, mode).unwrap();
        spline.set_control_point(4, [4.0, 3.0, 1.0]).unwrap();

        let anchor = spline.control_point(3).unwrap();
        let fixed = vec3::sub(spline.control_point(4).unwrap(), anchor);
        let enforced = vec3::sub(spline.control_point(2).unwrap(), anchor);
        approx3(vec3::cross(fixed, enforced), [0.0; 3], 1e-4);
        assert!(vec3::dot(fixed, enforced) < 0.0, "{mode:?} handles on same side");
        if mode == ControlPointMode::Mirrored {
            assert!((vec3::length(fixed) - vec3::length(enforced)).abs() < 1e-5);
        }
    }
}

/// it should expose the handle constraint as a free function over the control slice
#[test]
fn enforce_mode_on_raw_points() {
    let mut points = splines::points("hop-arc").unwrap();
    enforce_mode(&mut points, 2, ControlPointMode::Mirrored).unwrap();
    // anchor (1,0,0), left handle (0.75,1,0) -> right handle (1.25,-1,0)
    approx3(points[4], [1.25, -1.0, 0.0], 1e-6);
}

/// it should return a zero direction where all four points coincide
#[test]
fn degenerate_direction_is_zero() {
    let spline = BezierSpline::new(vec![[2.0, 2.0, 2.0]; 4]).unwrap();
    assert_eq!(spline.velocity(0.5), [0.0; 3]);
    assert_eq!(spline.direction(0.5), [0.0; 3]);
}

/// it should sample steps_per_curve * N + 1 points with unit directions
#[test]
fn sampling_covers_whole_spline() {
    let spline = fixture("zigzag");
    let samples = spline.sample(10);
    assert_eq!(samples.len(), 10 * spline.curve_count() + 1);
    assert_eq!(samples[0].u, 0.0);
    assert_eq!(samples[samples.len() - 1].u, 1.0);
    for s in &samples {
        assert!((vec3::length(s.direction) - 1.0).abs() < 1e-4, "u={}", s.u);
    }
}
