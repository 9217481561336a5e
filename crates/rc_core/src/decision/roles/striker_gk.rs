//! Sparring striker for goalkeeper drills
//!
//! Never turns, so its aim stays on the goal it faces. Shots are weaker than
//! a real striker's to give the keeper a fair chance.

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::primitives::in_kick_range;
use crate::decision::state::{AgentState, DecisionEngineState};
use crate::perception::RelativeObservation;

/// Dash power per meter of ball distance
const DASH_POWER_PER_M: f32 = 8.0;
const DASH_POWER_MIN: f32 = 40.0;
const DASH_POWER_MAX: f32 = 100.0;

pub fn decide(
    ball: &RelativeObservation,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    let powers = &config.powers;

    if !ball.visible {
        state.state = AgentState::SearchingBall;
        return AgentAction::dash(powers.sparring_search, 0.0);
    }

    if in_kick_range(ball, config) {
        state.state = AgentState::Shooting;
        return AgentAction::kick(powers.sparring_shot, 0.0);
    }

    state.state = AgentState::ApproachingBall;
    let power = if ball.distance < config.distances.sparring_close_m {
        powers.sparring_close
    } else {
        (ball.distance * DASH_POWER_PER_M).clamp(DASH_POWER_MIN, DASH_POWER_MAX)
    };
    AgentAction::dash(power, ball.bearing)
}
