//! Two-circle pose triangulation
//!
//! Position comes from intersecting the distance circles of the first two
//! resolved landmarks; heading comes from the circular mean over every
//! resolved landmark of (world bearing to landmark - observed bearing).

use super::angles::{circular_mean, normalize_angle, world_bearing};
use super::landmarks;
use crate::constants::field;
use crate::perception::{AbsolutePose, LandmarkObservation};

/// Intersect two circles.
///
/// Returns both candidates, first one being `P + h * (dy, -dx) / d` where `P`
/// is the foot point on the center line. `None` when the circles are
/// separate, nested, concentric or the input is degenerate.
pub fn circle_intersection(
    c1: (f32, f32),
    r1: f32,
    c2: (f32, f32),
    r2: f32,
) -> Option<[(f32, f32); 2]> {
    let dx = c2.0 - c1.0;
    let dy = c2.1 - c1.1;
    let d = (dx * dx + dy * dy).sqrt();

    if d == 0.0 || d > r1 + r2 || d < (r1 - r2).abs() {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h2 = r1 * r1 - a * a;
    if !h2.is_finite() || h2 < 0.0 {
        return None;
    }
    let h = h2.sqrt();

    let px = c1.0 + a * dx / d;
    let py = c1.1 + a * dy / d;

    Some([
        (px + h * dy / d, py - h * dx / d),
        (px - h * dy / d, py + h * dx / d),
    ])
}

/// Pick the candidate inside the expanded field; first one on a tie.
fn select_candidate(candidates: [(f32, f32); 2]) -> (f32, f32) {
    let [first, second] = candidates;
    let first_in = field::in_expanded_bounds(first.0, first.1);
    let second_in = field::in_expanded_bounds(second.0, second.1);
    if second_in && !first_in {
        second
    } else {
        first
    }
}

/// Visible landmarks that resolve against the table, in input order
fn resolved(
    observations: &[LandmarkObservation],
) -> impl Iterator<Item = ((f32, f32), &LandmarkObservation)> + '_ {
    observations
        .iter()
        .filter(|l| l.observation.visible)
        .filter_map(|l| landmarks::resolve(&l.name).map(|pos| (pos, l)))
}

/// Flags that are in view and name a known landmark
pub fn usable_landmarks(observations: &[LandmarkObservation]) -> usize {
    resolved(observations).count()
}

/// Estimate the absolute pose from visible landmark observations.
///
/// Returns an invalid pose when fewer than two landmarks resolve or the two
/// distance circles do not intersect.
pub fn estimate_pose(observations: &[LandmarkObservation]) -> AbsolutePose {
    let mut known = resolved(observations);
    let (Some((c1, l1)), Some((c2, l2))) = (known.next(), known.next()) else {
        log::trace!("estimate_pose: fewer than two known landmarks");
        return AbsolutePose::invalid();
    };

    let Some(candidates) = circle_intersection(
        c1,
        l1.observation.distance,
        c2,
        l2.observation.distance,
    ) else {
        log::trace!("estimate_pose: no intersection for {} / {}", l1.name, l2.name);
        return AbsolutePose::invalid();
    };

    let (x, y) = select_candidate(candidates);

    let heading = circular_mean(
        resolved(observations)
            .map(|(pos, l)| normalize_angle(world_bearing((x, y), pos) - l.observation.bearing)),
    );

    AbsolutePose::new(x, y, heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observation of `name` as seen from `pose`
    fn observe(name: &str, pose: (f32, f32, f32)) -> LandmarkObservation {
        let pos = landmarks::resolve(name).unwrap();
        let dx = pos.0 - pose.0;
        let dy = pos.1 - pose.1;
        let bearing = normalize_angle(world_bearing((pose.0, pose.1), pos) - pose.2);
        LandmarkObservation::seen(name, (dx * dx + dy * dy).sqrt(), bearing)
    }

    fn angle_diff(a: f32, b: f32) -> f32 {
        normalize_angle(a - b).abs()
    }

    #[test]
    fn test_circle_intersection_candidate_order() {
        // circles around (0,0) and (10,0), both radius sqrt(50): meet at (5, +-5)
        let r = 50.0f32.sqrt();
        let [first, second] = circle_intersection((0.0, 0.0), r, (10.0, 0.0), r).unwrap();
        assert!((first.0 - 5.0).abs() < 1e-3 && (first.1 + 5.0).abs() < 1e-3);
        assert!((second.0 - 5.0).abs() < 1e-3 && (second.1 - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_intersection_failures() {
        // separate
        assert!(circle_intersection((0.0, 0.0), 1.0, (10.0, 0.0), 1.0).is_none());
        // nested
        assert!(circle_intersection((0.0, 0.0), 10.0, (1.0, 0.0), 1.0).is_none());
        // concentric
        assert!(circle_intersection((0.0, 0.0), 5.0, (0.0, 0.0), 5.0).is_none());
        // NaN radius
        assert!(circle_intersection((0.0, 0.0), f32::NAN, (10.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn test_consistent_pair_lands_on_both_circles() {
        let truth = (-20.0, 10.0, 30.0);
        let flags = vec![observe("f l t", truth), observe("f l b", truth)];
        let pose = estimate_pose(&flags);
        assert!(pose.valid);

        for flag in &flags {
            let pos = landmarks::resolve(&flag.name).unwrap();
            let dist = ((pos.0 - pose.x).powi(2) + (pos.1 - pose.y).powi(2)).sqrt();
            assert!(
                (dist - flag.observation.distance).abs() < 0.01,
                "{}: {} vs {}",
                flag.name,
                dist,
                flag.observation.distance
            );
        }
    }

    #[test]
    fn test_full_pose_recovery() {
        let truth = (-20.0, 10.0, 30.0);
        let flags = vec![
            observe("f l t", truth),
            observe("f l b", truth),
            observe("f c", truth),
        ];
        let pose = estimate_pose(&flags);
        assert!(pose.valid);
        assert!((pose.x - truth.0).abs() < 0.05, "x = {}", pose.x);
        assert!((pose.y - truth.1).abs() < 0.05, "y = {}", pose.y);
        assert!(angle_diff(pose.heading, truth.2) < 0.05, "heading = {}", pose.heading);
    }

    #[test]
    fn test_too_few_landmarks() {
        assert!(!estimate_pose(&[]).valid);

        let truth = (0.0, 0.0, 0.0);
        assert!(!estimate_pose(&[observe("g r", truth)]).valid);
    }

    #[test]
    fn test_unknown_and_hidden_landmarks_do_not_count() {
        let truth = (10.0, -5.0, 0.0);
        let mut hidden = observe("f r t", truth);
        hidden.observation.visible = false;
        let flags = vec![
            observe("g r", truth),
            LandmarkObservation::seen("f t l x", 30.0, 10.0),
            LandmarkObservation::seen("ball", 3.0, 0.0),
            hidden,
        ];
        assert_eq!(usable_landmarks(&flags), 1);
        assert!(!estimate_pose(&flags).valid);
    }

    #[test]
    fn test_inconsistent_distances_fail() {
        let flags = vec![
            LandmarkObservation::seen("f l t", 1.0, 0.0),
            LandmarkObservation::seen("f l b", 1.0, 0.0),
        ];
        assert!(!estimate_pose(&flags).valid);
    }

    #[test]
    fn test_heading_continuity_near_180() {
        let a = estimate_pose(&[
            observe("f l t", (-10.0, 5.0, 179.9)),
            observe("f l b", (-10.0, 5.0, 179.9)),
        ]);
        let b = estimate_pose(&[
            observe("f l t", (-10.0, 5.0, -179.9)),
            observe("f l b", (-10.0, 5.0, -179.9)),
        ]);
        assert!(a.valid && b.valid);
        assert!(angle_diff(a.heading, b.heading) < 0.5, "{} vs {}", a.heading, b.heading);
        assert!(a.heading > -180.0 && a.heading <= 180.0);
        assert!(b.heading > -180.0 && b.heading <= 180.0);
    }
}
