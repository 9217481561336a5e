//! Striker: get to the ball and put it toward the enemy goal
//!
//! On the ball the goal is found, in order of preference, from the goal
//! observation, from the triangulated pose, or by spinning in place for a
//! bounded number of cycles.

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::primitives::{approach, in_kick_range, search, shoot_to_goal};
use crate::decision::state::{AgentState, DecisionEngineState};
use crate::localization::angle_to_enemy_goal;
use crate::perception::{PerceptionSnapshot, RelativeObservation};

pub fn decide(
    snapshot: &PerceptionSnapshot,
    ball: &RelativeObservation,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    if !ball.visible {
        state.goal_search_counter = 0;
        return search(state, config);
    }
    if !in_kick_range(ball, config) {
        state.goal_search_counter = 0;
        return approach(state, config, ball);
    }

    let goal = &snapshot.goal;
    if goal.visible {
        state.goal_search_counter = 0;
        if goal.distance < config.distances.shooting_m {
            return shoot_to_goal(state, config, goal);
        }
        state.state = AgentState::Dribbling;
        return AgentAction::kick(config.powers.dribble, goal.bearing);
    }

    let pose = &snapshot.pose;
    if pose.valid {
        state.goal_search_counter = 0;
        let aim = angle_to_enemy_goal(pose);
        if pose.x >= config.distances.attacking_third_x {
            state.state = AgentState::Shooting;
            return AgentAction::kick(config.powers.shot, aim);
        }
        state.state = AgentState::Dribbling;
        return AgentAction::kick(config.powers.dribble, aim);
    }

    // no idea where the goal is
    state.state = AgentState::Dribbling;
    if state.goal_search_counter < config.goal_search_cycles {
        state.goal_search_counter += 1;
        return AgentAction::turn(config.search_turn_deg);
    }
    if state.goal_search_counter == config.goal_search_cycles {
        log::debug!(
            "striker: goal not found after {} cycles, dribbling straight",
            config.goal_search_cycles
        );
        state.goal_search_counter = state.goal_search_counter.saturating_add(1);
    }
    AgentAction::kick(config.powers.dribble, 0.0)
}
