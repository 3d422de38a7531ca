use nalgebra as na;
use ptrack::{Detection, Frame, Tracker, TrackerConfig};

fn arc(a: f32, b: f32, c: f32) -> impl Fn(f32) -> Detection {
    move |x| Detection::new(x, (a * x + b) * x + c, 14.0)
}

#[test]
fn test_full_tracking_episode() {
    let mut tracker = Tracker::new(TrackerConfig::default());
    let throw = arc(0.0015, -0.9, 380.0);
    let mut ts = 0.0f32;

    // ball flies across the frame, one detection per frame at 30 fps
    let mut fitted_at = None;
    for (i, x) in (0..24).map(|i| (i, i as f32 * 25.0)) {
        let result = tracker.advance(Frame::detected(ts, throw(x)));
        ts += 1.0 / 30.0;

        if result.fit.is_some() && fitted_at.is_none() {
            fitted_at = Some(i);
        }
    }

    // the model latched once the fifth valid pair closed and never unlatched
    assert_eq!(fitted_at, Some(5));

    let fit = tracker.fit().copied().expect("model after a clean arc");
    assert!((fit.parabola.a - 0.0015).abs() < 1e-4);
    assert!((fit.r_squared - 1.0).abs() < 1e-3);

    // the projection runs across the frame at the configured spacing and
    // sits on the thrown arc
    let path = tracker.projection();
    assert_eq!(path.len(), 14);
    assert_eq!(path[0], na::Point2::new(0.0, 380.0));
    for point in &path {
        assert!((point.y - throw(point.x).y).abs() < 0.5);
    }

    // a few missed frames keep the model alive
    for _ in 0..3 {
        let result = tracker.advance(Frame::missed(ts));
        assert!(!result.reset);
        assert!(result.fit.is_some());
        ts += 1.0 / 30.0;
    }

    // a six-second silence drops the whole episode
    ts += 6.0;
    let result = tracker.advance(Frame::missed(ts));
    assert!(result.reset);
    assert!(result.projection.is_empty());
    assert!(tracker.samples().is_empty());
    assert!(tracker.trail().is_empty());

    // a new throw on a different arc produces a fresh model, not a reheat
    // of the old one
    let second = arc(-0.002, 1.1, 120.0);
    ts += 1.0 / 30.0;
    for x in (0..10).map(|i| i as f32 * 30.0) {
        tracker.advance(Frame::detected(ts, second(x)));
        ts += 1.0 / 30.0;
    }

    let refit = tracker.fit().copied().expect("model for the second arc");
    assert!((refit.parabola.a + 0.002).abs() < 1e-4);
    assert!((refit.parabola.b - 1.1).abs() < 1e-3);
}

#[test]
fn test_brief_occlusion_splits_trail_but_not_samples() {
    let mut tracker = Tracker::new(TrackerConfig::default());
    let throw = arc(0.001, -0.7, 300.0);
    let mut ts = 0.0f32;

    for x in [0.0, 30.0, 60.0] {
        tracker.advance(Frame::detected(ts, throw(x)));
        ts += 1.0 / 30.0;
    }

    tracker.advance(Frame::missed(ts));
    ts += 1.0 / 30.0;

    for x in [120.0, 150.0, 180.0] {
        tracker.advance(Frame::detected(ts, throw(x)));
        ts += 1.0 / 30.0;
    }

    // seven entries with one hole: segments stop at the hole
    assert_eq!(tracker.trail().len(), 7);
    assert_eq!(tracker.trail().valid_pair_count(), 4);
    assert_eq!(tracker.samples().len(), 6);
}
