//! Motor command emitted once per decision cycle

use serde::{Deserialize, Serialize};

/// Command kind. Parameter meaning depends on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    None,
    /// params: power, direction
    Dash,
    /// params: angle
    Turn,
    /// params: power, direction
    Kick,
    /// params: direction (goalkeeper only)
    Catch,
    /// params: x, y (before kickoff only)
    Move,
}

impl ActionKind {
    /// Lowercase command name used on the wire and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::None => "none",
            ActionKind::Dash => "dash",
            ActionKind::Turn => "turn",
            ActionKind::Kick => "kick",
            ActionKind::Catch => "catch",
            ActionKind::Move => "move",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentAction {
    pub kind: ActionKind,
    pub param0: f32,
    pub param1: f32,
}

impl AgentAction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn dash(power: f32, direction: f32) -> Self {
        Self { kind: ActionKind::Dash, param0: power, param1: direction }
    }

    pub fn turn(angle: f32) -> Self {
        Self { kind: ActionKind::Turn, param0: angle, param1: 0.0 }
    }

    pub fn kick(power: f32, direction: f32) -> Self {
        Self { kind: ActionKind::Kick, param0: power, param1: direction }
    }

    pub fn catch_ball(direction: f32) -> Self {
        Self { kind: ActionKind::Catch, param0: direction, param1: 0.0 }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind == ActionKind::None
    }
}
