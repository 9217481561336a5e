//! Per-role decision engine
//!
//! `decide` is a pure function of the snapshot, the config and the agent's
//! own latched state. It runs once per cycle, performs no I/O and always
//! returns an action (possibly `None`).
//!
//! ## Top-level policy
//!
//! | Status | Behavior |
//! |--------|----------|
//! | Idle, Finished | `None`, state Idle |
//! | BeforeKickoff | Passer runs the kickoff protocol, everyone else idles |
//! | Playing | Role dispatch |

pub mod config;
pub mod kickoff;
pub mod primitives;
pub mod roles;
pub mod state;

pub use config::{DecisionConfig, DefenderPolicy, KeeperDiscipline};
pub use state::{AgentState, DecisionEngineState, Latches};

use crate::action::AgentAction;
use crate::perception::{GameStatus, PerceptionSnapshot, RelativeObservation, Role};

/// Decide this cycle's action and update the latched state
pub fn decide(
    snapshot: &PerceptionSnapshot,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    let action = match snapshot.game_status {
        GameStatus::Idle | GameStatus::Finished => {
            state.state = AgentState::Idle;
            AgentAction::none()
        }
        GameStatus::BeforeKickoff => match snapshot.role {
            Role::Passer => {
                let ball = chase_ball(snapshot, state, config);
                kickoff::kickoff(&ball, state, config)
            }
            _ => {
                state.state = AgentState::Idle;
                AgentAction::none()
            }
        },
        GameStatus::Playing => play(snapshot, state, config),
    };

    log::trace!(
        "{:?}/{:?}: {} ({}, {:.1}, {:.1})",
        snapshot.game_status,
        snapshot.role,
        state.state.name(),
        action.kind.as_str(),
        action.param0,
        action.param1
    );
    action
}

/// Ball the chasing roles act on.
///
/// A remembered ball only steers the search and the approach. Kicks and the
/// latches they set need the ball in view: a remembered ball inside kick
/// range is dropped and the agent looks for the real one.
fn chase_ball(
    snapshot: &PerceptionSnapshot,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> RelativeObservation {
    let ball = state.effective_ball(&snapshot.ball, config.ball_memory_cycles);
    if !snapshot.ball.visible && primitives::in_kick_range(&ball, config) {
        return snapshot.ball;
    }
    ball
}

fn play(
    snapshot: &PerceptionSnapshot,
    state: &mut DecisionEngineState,
    config: &DecisionConfig,
) -> AgentAction {
    let ball = chase_ball(snapshot, state, config);

    match snapshot.role {
        Role::Striker => roles::striker::decide(snapshot, &ball, state, config),
        Role::Dribbler => roles::dribbler::decide(snapshot, &ball, state, config),
        Role::Passer => roles::passer::decide(snapshot, &ball, state, config),
        Role::Receiver => roles::receiver::decide(snapshot, &ball, state, config),
        Role::Defender => roles::defender::decide(&ball, state, config),
        // catching and sparring act on what is actually in front of them
        Role::Goalkeeper => roles::goalkeeper::decide(snapshot, state, config),
        Role::StrikerGkVariant => roles::striker_gk::decide(&snapshot.ball, state, config),
    }
}

/// Decision engine owning its config and one agent's state
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
    state: DecisionEngineState,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config, state: DecisionEngineState::new() }
    }

    pub fn decide(&mut self, snapshot: &PerceptionSnapshot) -> AgentAction {
        decide(snapshot, &mut self.state, &self.config)
    }

    /// Episode boundary: clear latches, counters and memory
    pub fn reset(&mut self) {
        log::debug!("decision engine reset");
        self.state.reset();
    }

    pub fn state(&self) -> &DecisionEngineState {
        &self.state
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }
}
