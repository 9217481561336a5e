//! Passer: one pass (or the kickoff kick) per episode, then idle

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::primitives::{approach, dribble_forward, in_kick_range, search};
use crate::decision::state::{AgentState, DecisionEngineState};
use crate::perception::{PerceptionSnapshot, RelativeObservation};

pub fn decide(
    snapshot: &PerceptionSnapshot,
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
        return approach(state, config, ball);
    }

    if let Some(mate) = snapshot.first_visible_teammate() {
        log::debug!(
            "passer: pass to #{} at {:.1}m, latching",
            mate.id,
            mate.observation.distance
        );
        state.latches.kicked = true;
        state.state = AgentState::Passing;
        return AgentAction::kick(config.powers.pass, mate.observation.bearing);
    }

    // keep the ball moving, the pass is still owed
    dribble_forward(state, config, &snapshot.pose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::perception::{GameStatus, Role};

    #[test]
    fn test_passes_once_to_first_visible_teammate() {
        let config = DecisionConfig::default();
        let mut state = DecisionEngineState::new();
        let mut snapshot = PerceptionSnapshot::new(GameStatus::Playing, Role::Passer)
            .with_ball(0.5, 0.0)
            .with_teammate(4, 8.0, -60.0)
            .with_teammate(7, 15.0, 25.0);
        snapshot.teammates[0].observation.visible = false;

        let action = decide(&snapshot, &snapshot.ball, &mut state, &config);
        assert_eq!(action, AgentAction::kick(50.0, 25.0));
        assert_eq!(state.state, AgentState::Passing);
        assert!(state.latches.kicked);

        let action = decide(&snapshot, &snapshot.ball, &mut state, &config);
        assert_eq!(action.kind, ActionKind::None);
    }

    #[test]
    fn test_dribbles_without_teammate_and_does_not_latch() {
        let config = DecisionConfig::default();
        let mut state = DecisionEngineState::new();
        let snapshot = PerceptionSnapshot::new(GameStatus::Playing, Role::Passer).with_ball(0.5, 0.0);

        for _ in 0..3 {
            let action = decide(&snapshot, &snapshot.ball, &mut state, &config);
            assert_eq!(action, AgentAction::kick(30.0, 0.0));
        }
        assert!(!state.latches.kicked);
    }
}
