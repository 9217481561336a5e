//! Defender: close down the ball, then hold or clear per policy

use crate::action::AgentAction;
use crate::decision::config::{DecisionConfig, DefenderPolicy};
use crate::decision::primitives::{approach_power, in_kick_range, search};
use crate::decision::state::{AgentState, DecisionEngineState};
use crate::perception::RelativeObservation;

pub fn decide(
    ball: &RelativeObservation,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    if !ball.visible {
        return search(state, config);
    }

    state.state = AgentState::Defending;
    if in_kick_range(ball, config) {
        return match config.defender_policy {
            DefenderPolicy::HoldPosition => AgentAction::none(),
            DefenderPolicy::Clear => AgentAction::kick(config.powers.shot, 0.0),
        };
    }
    AgentAction::dash(approach_power(ball.distance), ball.bearing)
}
