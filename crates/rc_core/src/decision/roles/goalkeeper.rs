//! Goalkeeper one-shot protocol
//!
//! turn to face the field -> wait -> catch -> clear -> idle
//!
//! Each step is gated by a latch, so across any number of cycles the keeper
//! catches at most once and clears at most once.

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::state::{AgentState, DecisionEngineState};
use crate::localization::angle_to_target;
use crate::perception::PerceptionSnapshot;

pub fn decide(
    snapshot: &PerceptionSnapshot,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    let latches = &mut state.latches;

    if latches.cleared {
        state.state = AgentState::Idle;
        return AgentAction::none();
    }

    if latches.caught {
        log::debug!("goalkeeper: clearing, latching");
        latches.cleared = true;
        state.state = AgentState::Shooting;
        return AgentAction::kick(config.powers.clearance, 0.0);
    }

    if !latches.turned {
        latches.turned = true;
        state.state = AgentState::Defending;
        return AgentAction::turn(180.0);
    }

    let ball = &snapshot.ball;
    if ball.within(config.distances.catchable_m) {
        log::debug!("goalkeeper: catch at {:.2}m, latching", ball.distance);
        latches.caught = true;
        state.state = AgentState::Catching;
        return AgentAction::catch_ball(ball.bearing);
    }

    state.state = AgentState::Defending;
    hold_line(snapshot, config)
}

/// Waiting action: stand still, or steer home when discipline is on and
/// the pose has drifted out of the safe band.
fn hold_line(snapshot: &PerceptionSnapshot, config: &DecisionConfig) -> AgentAction {
    let discipline = &config.keeper_discipline;
    let pose = &snapshot.pose;
    if !discipline.enabled || !pose.valid {
        return AgentAction::none();
    }
    if (discipline.min_x..=discipline.max_x).contains(&pose.x) {
        return AgentAction::none();
    }

    let (hx, hy) = discipline.home();
    log::trace!("goalkeeper: out of position at x={:.1}, returning", pose.x);
    AgentAction::dash(discipline.dash_power, angle_to_target(pose, hx, hy))
}
