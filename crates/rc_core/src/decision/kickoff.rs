//! Kickoff protocol
//!
//! Before kickoff only the passer may move. It walks up to the ball on the
//! center spot, taps it forward exactly once and then stays idle for the rest
//! of the episode.

use super::config::DecisionConfig;
use super::primitives::{in_kick_range, search};
use super::state::{AgentState, DecisionEngineState};
use crate::action::AgentAction;
use crate::perception::RelativeObservation;

/// Kickoff dash tiers: (distance strictly above, power), farthest first
const KICKOFF_DASH_TIERS: [(f32, f32); 2] = [(10.0, 100.0), (3.0, 60.0)];
const KICKOFF_DASH_FLOOR: f32 = 30.0;

/// Dash power on the way to the kickoff ball, tapering to avoid overshoot
pub fn kickoff_dash_power(distance: f32) -> f32 {
    KICKOFF_DASH_TIERS
        .iter()
        .find(|(above, _)| distance > *above)
        .map(|(_, power)| *power)
        .unwrap_or(KICKOFF_DASH_FLOOR)
}

pub fn kickoff(
    ball: &RelativeObservation,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    if state.latches.kicked {
        state.state = AgentState::Idle;
        return AgentAction::none();
    }

    if !ball.visible {
        return search(state, config);
    }

    if !in_kick_range(ball, config) {
        state.state = AgentState::ApproachingBall;
        return AgentAction::dash(kickoff_dash_power(ball.distance), ball.bearing);
    }

    log::debug!("kickoff: kick at {:.2}m, latching", ball.distance);
    state.latches.kicked = true;
    state.state = AgentState::Passing;
    AgentAction::kick(config.powers.kickoff, 0.0)
}
