//! Behaviors shared by several roles

use super::config::DecisionConfig;
use super::state::{AgentState, DecisionEngineState};
use crate::action::AgentAction;
use crate::localization::angle_to_enemy_goal;
use crate::perception::{AbsolutePose, RelativeObservation};

/// Approach dash tiers: (minimum distance, power), farthest first
const APPROACH_POWER_TIERS: [(f32, f32); 2] = [(20.0, 100.0), (12.0, 90.0)];
/// Plateau below the last tier
const APPROACH_POWER_FLOOR: f32 = 80.0;

/// Dash power for closing in on the ball. Non-increasing as the distance
/// shrinks, flat below 12m.
pub fn approach_power(distance: f32) -> f32 {
    APPROACH_POWER_TIERS
        .iter()
        .find(|(min_distance, _)| distance >= *min_distance)
        .map(|(_, power)| *power)
        .unwrap_or(APPROACH_POWER_FLOOR)
}

#[inline]
pub fn in_kick_range(ball: &RelativeObservation, config: &DecisionConfig) -> bool {
    ball.within(config.distances.kickable_m)
}

/// Spin in place looking for the ball
pub fn search(state: &mut DecisionEngineState, config: &DecisionConfig) -> AgentAction {
    state.state = AgentState::SearchingBall;
    AgentAction::turn(config.search_turn_deg)
}

/// Close in on a visible ball that is out of kick range.
///
/// Inside the dribble band the agent alternates a dash toward the ball with
/// a light forward touch; farther out it dashes with tiered power.
pub fn approach(
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
    ball: &RelativeObservation,
) -> AgentAction {
    let d = &config.distances;
    if ball.distance > d.kickable_m && ball.distance <= d.dribble_radius_m {
        state.state = AgentState::Dribbling;
        let touch = state.dribble_counter % 2 == 1;
        state.dribble_counter = state.dribble_counter.wrapping_add(1);
        return if touch {
            AgentAction::kick(config.powers.dribble_touch, 0.0)
        } else {
            AgentAction::dash(config.powers.dash_high, ball.bearing)
        };
    }

    state.dribble_counter = 0;
    state.state = AgentState::ApproachingBall;
    AgentAction::dash(approach_power(ball.distance), ball.bearing)
}

/// Full-power shot at the goal, straight ahead when the goal is unseen
pub fn shoot_to_goal(
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
    goal: &RelativeObservation,
) -> AgentAction {
    state.state = AgentState::Shooting;
    let direction = if goal.visible { goal.bearing } else { 0.0 };
    AgentAction::kick(config.powers.shot, direction)
}

/// Controlled kick toward the enemy goal, straight ahead without a pose
pub fn dribble_forward(
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
    pose: &AbsolutePose,
) -> AgentAction {
    state.state = AgentState::Dribbling;
    AgentAction::kick(config.powers.dribble, angle_to_enemy_goal(pose))
}
