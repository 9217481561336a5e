//! Receiver: collect the pass and finish

use crate::action::AgentAction;
use crate::decision::config::DecisionConfig;
use crate::decision::primitives::{approach, dribble_forward, in_kick_range, search, shoot_to_goal};
use crate::decision::state::{AgentState, DecisionEngineState};
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

    let goal = &snapshot.goal;
    if goal.visible {
        if goal.distance < config.distances.shooting_m {
            return shoot_to_goal(state, config, goal);
        }
        state.state = AgentState::Dribbling;
        return AgentAction::kick(config.powers.dribble, goal.bearing);
    }
    dribble_forward(state, config, &snapshot.pose)
}
