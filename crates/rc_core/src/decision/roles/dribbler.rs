//! Dribbler: carry the ball toward the enemy goal, no shooting

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::primitives::{approach, dribble_forward, in_kick_range, search};
use crate::decision::state::DecisionEngineState;
use crate::perception::{PerceptionSnapshot, RelativeObservation};

pub fn decide(
    snapshot: &PerceptionSnapshot,
    ball: &RelativeObservation,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    if !ball.visible {
        return search(state, config);
    }
    if !in_kick_range(ball, config) {
        return approach(state, config, ball);
    }
    dribble_forward(state, config, &snapshot.pose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::state::AgentState;
    use crate::perception::{GameStatus, Role};

    #[test]
    fn test_dribbles_even_with_goal_in_sight() {
        let config = DecisionConfig::default();
        let mut state = DecisionEngineState::new();
        let snapshot = PerceptionSnapshot::new(GameStatus::Playing, Role::Dribbler)
            .with_ball(0.4, 0.0)
            .with_goal(10.0, 20.0);

        let action = decide(&snapshot, &snapshot.ball, &mut state, &config);
        assert_eq!(action, AgentAction::kick(30.0, 0.0));
        assert_eq!(state.state, AgentState::Dribbling);
    }

    #[test]
    fn test_searches_without_ball() {
        let config = DecisionConfig::default();
        let mut state = DecisionEngineState::new();
        let snapshot = PerceptionSnapshot::new(GameStatus::Playing, Role::Dribbler);
        let action = decide(&snapshot, &snapshot.ball, &mut state, &config);
        assert_eq!(action, AgentAction::turn(30.0));
    }
}
