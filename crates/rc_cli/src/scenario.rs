//! Scripted drill: a fixed snapshot sequence for one role
//!
//! The agent stands still at a fixed field pose while the ball rolls in from
//! the far side. Flags are generated from the pose so the localizer has real
//! work to do. This is a script, not a simulation: the agent's own commands do
//! not change what it perceives.

use rc_core::localization::{normalize_angle, resolve_landmark};
use rc_core::{AbsolutePose, GameStatus, PerceptionSnapshot, Role};

/// Flags visible from the drill position
const DRILL_FLAGS: [&str; 4] = ["g r", "f c", "f r t", "f p r c"];
/// Cycles spent before kickoff
const KICKOFF_CYCLES: usize = 3;
/// Ball distance at the first playing cycle
const BALL_START_M: f32 = 30.0;
/// Ball approach per cycle
const BALL_STEP_M: f32 = 3.0;
/// Ball distance once it has arrived
const BALL_AT_FEET_M: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct Drill {
    pub role: Role,
    pub cycles: usize,
    /// Where the agent stands, heading in degrees
    pub pose: AbsolutePose,
    pub ball_bearing: f32,
}

impl Drill {
    pub fn new(role: Role, cycles: usize) -> Self {
        Self {
            role,
            cycles,
            pose: AbsolutePose::new(10.0, 5.0, 0.0),
            ball_bearing: 10.0,
        }
    }

    /// Observation of a field point from the drill pose
    fn observe(&self, point: (f32, f32)) -> (f32, f32) {
        let dx = point.0 - self.pose.x;
        let dy = point.1 - self.pose.y;
        let bearing = normalize_angle(dy.atan2(dx).to_degrees() - self.pose.heading);
        ((dx * dx + dy * dy).sqrt(), bearing)
    }

    fn ball_distance(&self, cycle: usize) -> f32 {
        let played = cycle.saturating_sub(KICKOFF_CYCLES) as f32;
        (BALL_START_M - played * BALL_STEP_M).max(BALL_AT_FEET_M)
    }

    fn status(&self, cycle: usize) -> GameStatus {
        if cycle + 1 == self.cycles {
            GameStatus::Finished
        } else if cycle < KICKOFF_CYCLES {
            GameStatus::BeforeKickoff
        } else {
            GameStatus::Playing
        }
    }

    /// Snapshot for one cycle
    pub fn snapshot(&self, cycle: usize) -> PerceptionSnapshot {
        let mut snapshot = PerceptionSnapshot::new(self.status(cycle), self.role);

        // the first cycle has the ball out of view
        if cycle > 0 {
            snapshot = snapshot.with_ball(self.ball_distance(cycle), self.ball_bearing);
        }

        let (goal_distance, goal_bearing) = self.observe((52.5, 0.0));
        snapshot = snapshot.with_goal(goal_distance, goal_bearing);
        snapshot = snapshot.with_teammate(9, 15.0, -30.0);

        for name in DRILL_FLAGS {
            if let Some(point) = resolve_landmark(name) {
                let (distance, bearing) = self.observe(point);
                snapshot = snapshot.with_flag(name, distance, bearing);
            }
        }
        snapshot
    }

    pub fn snapshots(&self) -> Vec<PerceptionSnapshot> {
        (0..self.cycles).map(|cycle| self.snapshot(cycle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::estimate_pose;

    #[test]
    fn test_phases() {
        let drill = Drill::new(Role::Striker, 20);
        let snapshots = drill.snapshots();
        assert_eq!(snapshots.len(), 20);
        assert_eq!(snapshots[0].game_status, GameStatus::BeforeKickoff);
        assert_eq!(snapshots[3].game_status, GameStatus::Playing);
        assert_eq!(snapshots[19].game_status, GameStatus::Finished);
        assert!(!snapshots[0].ball.visible);
    }

    #[test]
    fn test_ball_rolls_in_and_stops() {
        let drill = Drill::new(Role::Striker, 30);
        assert_eq!(drill.ball_distance(3), 30.0);
        assert_eq!(drill.ball_distance(4), 27.0);
        assert_eq!(drill.ball_distance(25), 0.5);
    }

    #[test]
    fn test_flags_localize_to_drill_pose() {
        let drill = Drill::new(Role::Dribbler, 10);
        let pose = estimate_pose(&drill.snapshot(5).flags);
        assert!(pose.valid);
        assert!((pose.x - drill.pose.x).abs() < 0.05);
        assert!((pose.y - drill.pose.y).abs() < 0.05);
    }
}
