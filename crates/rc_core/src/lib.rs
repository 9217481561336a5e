//! # rc_core - Simulated soccer agent core
//!
//! Landmark localization and a per-role decision engine for one agent of a
//! simulated soccer team.
//!
//! ## Features
//! - Two-circle triangulation from named field flags, circular-mean heading
//! - One pure decision function per role, with one-shot latches for the
//!   kickoff, the goalkeeper catch and its clearance
//! - Policy constants and presets in [`decision::DecisionConfig`]
//! - JSON boundary helpers in [`wire`]
//!
//! ## Usage
//!
//! ```rust
//! use rc_core::{Agent, DecisionConfig, GameStatus, PerceptionSnapshot, Role};
//! use rc_core::action::ActionKind;
//!
//! let mut agent = Agent::new(DecisionConfig::default());
//! let snapshot = PerceptionSnapshot::new(GameStatus::Playing, Role::Striker)
//!     .with_ball(0.5, 0.0)
//!     .with_goal(20.0, 0.0);
//! let action = agent.step(snapshot);
//! assert_eq!(action.kind, ActionKind::Kick);
//! ```

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Struct initialization pattern used in tests
#![allow(clippy::field_reassign_with_default)]

pub mod action;
pub mod agent;
pub mod constants;
pub mod decision;
pub mod error;
pub mod localization;
pub mod perception;
pub mod wire;

pub use action::{ActionKind, AgentAction};
pub use agent::Agent;
pub use decision::{decide, AgentState, DecisionConfig, DecisionEngine, DecisionEngineState};
pub use error::{CoreError, Result};
pub use localization::{angle_to_enemy_goal, angle_to_target, estimate_pose, normalize_angle};
pub use perception::{
    AbsolutePose, GameStatus, LandmarkObservation, PerceptionSnapshot, RelativeObservation, Role,
    TeammateObservation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
