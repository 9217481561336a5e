//! Per-cycle entry point
//!
//! snapshot -> localization (>= 2 known flags in view) -> decision -> action

use crate::action::AgentAction;
use crate::decision::{AgentState, DecisionConfig, DecisionEngine, DecisionEngineState};
use crate::localization::{estimate_pose, usable_landmarks};
use crate::perception::{GameStatus, PerceptionSnapshot};

/// Known flags in view needed before triangulation is attempted
const MIN_FLAGS_FOR_POSE: usize = 2;

/// One simulated player
#[derive(Debug, Clone, Default)]
pub struct Agent {
    engine: DecisionEngine,
}

impl Agent {
    pub fn new(config: DecisionConfig) -> Self {
        Self { engine: DecisionEngine::new(config) }
    }

    /// Run one decision cycle.
    ///
    /// With enough known flags in view the snapshot's pose is replaced by a
    /// fresh estimate (possibly invalid). Otherwise the caller's pose stands. A `Finished` snapshot resets the engine
    /// after deciding, so the next episode starts clean.
    pub fn step(&mut self, mut snapshot: PerceptionSnapshot) -> AgentAction {
        if usable_landmarks(&snapshot.flags) >= MIN_FLAGS_FOR_POSE {
            snapshot.pose = estimate_pose(&snapshot.flags);
        }
        let action = self.engine.decide(&snapshot);

        if snapshot.game_status == GameStatus::Finished {
            self.engine.reset();
        }
        action
    }

    pub fn state(&self) -> AgentState {
        self.engine.state().state
    }

    pub fn engine_state(&self) -> &DecisionEngineState {
        self.engine.state()
    }

    pub fn config(&self) -> &DecisionConfig {
        self.engine.config()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
