//! Angle helpers (degrees throughout)

use crate::constants::goal;
use crate::perception::AbsolutePose;

/// Reduce an angle into `(-180, 180]`. Non-finite input yields 0.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Circular mean of angles, normalized.
///
/// Empty input yields 0.
pub fn circular_mean<I>(angles: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let (sin_sum, cos_sum) = angles.into_iter().fold((0.0f32, 0.0f32), |(s, c), a| {
        let rad = a.to_radians();
        (s + rad.sin(), c + rad.cos())
    });
    if sin_sum == 0.0 && cos_sum == 0.0 {
        return 0.0;
    }
    normalize_angle(sin_sum.atan2(cos_sum).to_degrees())
}

/// Absolute direction from `from` to `to`
#[inline]
pub fn world_bearing(from: (f32, f32), to: (f32, f32)) -> f32 {
    (to.1 - from.1).atan2(to.0 - from.0).to_degrees()
}

/// Relative angle from the agent's facing to a field point. 0 when the pose
/// is not valid.
pub fn angle_to_target(pose: &AbsolutePose, tx: f32, ty: f32) -> f32 {
    if !pose.valid {
        return 0.0;
    }
    normalize_angle(world_bearing((pose.x, pose.y), (tx, ty)) - pose.heading)
}

pub fn angle_to_enemy_goal(pose: &AbsolutePose) -> f32 {
    angle_to_target(pose, goal::ENEMY.0, goal::ENEMY.1)
}

pub fn angle_to_own_goal(pose: &AbsolutePose) -> f32 {
    angle_to_target(pose, goal::OWN.0, goal::OWN.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.0) - 0.0).abs() < 1e-4);
        assert!((normalize_angle(180.0) - 180.0).abs() < 1e-4);
        assert!((normalize_angle(-180.0) - 180.0).abs() < 1e-4);
        assert!((normalize_angle(190.0) + 170.0).abs() < 1e-4);
        assert!((normalize_angle(-190.0) - 170.0).abs() < 1e-4);
        assert!((normalize_angle(720.0 + 45.0) - 45.0).abs() < 1e-3);
        assert!((normalize_angle(-540.0) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_normalize_non_finite() {
        assert_eq!(normalize_angle(f32::NAN), 0.0);
        assert_eq!(normalize_angle(f32::INFINITY), 0.0);
        assert_eq!(normalize_angle(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_circular_mean_wraps() {
        let mean = circular_mean([179.0, -179.0]);
        assert!((mean.abs() - 180.0).abs() < 1e-3, "mean = {}", mean);

        let mean = circular_mean([10.0, 20.0, 30.0]);
        assert!((mean - 20.0).abs() < 1e-3);

        assert_eq!(circular_mean(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_angle_to_target_from_center() {
        let facing_x = AbsolutePose::new(0.0, 0.0, 0.0);
        assert!(angle_to_target(&facing_x, 10.0, 0.0).abs() < 1e-3);

        let facing_y = AbsolutePose::new(0.0, 0.0, 90.0);
        assert!((angle_to_target(&facing_y, 10.0, 0.0) + 90.0).abs() < 1e-3);
        assert!((angle_to_target(&facing_x, 0.0, 10.0) - 90.0).abs() < 1e-3);

        let facing_away = AbsolutePose::new(0.0, 0.0, 180.0);
        assert!(angle_to_target(&facing_away, 10.0, 0.0).abs() > 170.0);
    }

    #[test]
    fn test_invalid_pose_yields_zero() {
        let pose = AbsolutePose { x: 10.0, y: 10.0, heading: 45.0, valid: false };
        assert_eq!(angle_to_target(&pose, 0.0, 0.0), 0.0);
        assert_eq!(angle_to_enemy_goal(&pose), 0.0);
        assert_eq!(angle_to_own_goal(&pose), 0.0);
    }

    #[test]
    fn test_goal_directions() {
        let pose = AbsolutePose::new(0.0, 0.0, 0.0);
        assert!(angle_to_enemy_goal(&pose).abs() < 1e-3);
        assert!((angle_to_own_goal(&pose) - 180.0).abs() < 1e-3);
    }
}
