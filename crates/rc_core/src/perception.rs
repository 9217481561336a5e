//! Perception snapshot types
//!
//! Everything here is rebuilt every cycle from fresh perception and is
//! read-only to the localizer and the decision engine.

use serde::{Deserialize, Serialize};

/// Maximum number of teammates carried in a snapshot
pub const MAX_TEAMMATES: usize = 10;
/// Maximum number of landmark flags carried in a snapshot
pub const MAX_FLAGS: usize = 20;

/// Game phase as seen by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    BeforeKickoff,
    Playing,
    Finished,
}

/// Role assigned to the agent for the current episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Striker,
    Dribbler,
    Passer,
    Receiver,
    Goalkeeper,
    Defender,
    /// Sparring striker for goalkeeper drills
    StrikerGkVariant,
}

/// An entity perceived relative to the agent.
///
/// `bearing` is in degrees, `(-180, 180]`. The default value is "not visible".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeObservation {
    pub distance: f32,
    pub bearing: f32,
    pub visible: bool,
}

impl RelativeObservation {
    /// A visible observation
    pub fn seen(distance: f32, bearing: f32) -> Self {
        Self { distance, bearing, visible: true }
    }

    /// Visible and no farther than `range`
    #[inline]
    pub fn within(&self, range: f32) -> bool {
        self.visible && self.distance <= range
    }
}

/// A visible teammate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeammateObservation {
    pub id: u8,
    pub observation: RelativeObservation,
}

/// A field flag seen this cycle.
///
/// `name` follows the simulator naming convention (`"f c"`, `"g r"`,
/// `"f t l 20"` ...); unknown names are ignored by the localizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkObservation {
    pub name: String,
    pub observation: RelativeObservation,
}

impl LandmarkObservation {
    pub fn seen(name: impl Into<String>, distance: f32, bearing: f32) -> Self {
        Self { name: name.into(), observation: RelativeObservation::seen(distance, bearing) }
    }
}

/// Absolute field pose. `valid = false` (the default) means "no usable estimate".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AbsolutePose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub valid: bool,
}

impl AbsolutePose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading, valid: true }
    }

    /// The "no usable estimate" value
    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Immutable input to one decision cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptionSnapshot {
    pub game_status: GameStatus,
    pub role: Role,
    pub ball: RelativeObservation,
    pub goal: RelativeObservation,
    pub teammates: Vec<TeammateObservation>,
    pub flags: Vec<LandmarkObservation>,
    pub pose: AbsolutePose,
    pub stamina: f32,
    pub speed: f32,
}

impl Default for PerceptionSnapshot {
    fn default() -> Self {
        Self {
            game_status: GameStatus::Idle,
            role: Role::Striker,
            ball: RelativeObservation::default(),
            goal: RelativeObservation::default(),
            teammates: Vec::new(),
            flags: Vec::new(),
            pose: AbsolutePose::invalid(),
            stamina: 8000.0,
            speed: 0.0,
        }
    }
}

impl PerceptionSnapshot {
    /// Snapshot in the given phase with the given role, nothing perceived
    pub fn new(game_status: GameStatus, role: Role) -> Self {
        Self { game_status, role, ..Self::default() }
    }

    pub fn with_ball(mut self, distance: f32, bearing: f32) -> Self {
        self.ball = RelativeObservation::seen(distance, bearing);
        self
    }

    pub fn with_goal(mut self, distance: f32, bearing: f32) -> Self {
        self.goal = RelativeObservation::seen(distance, bearing);
        self
    }

    pub fn with_pose(mut self, pose: AbsolutePose) -> Self {
        self.pose = pose;
        self
    }

    /// Append a teammate, ignored once the cap is reached
    pub fn with_teammate(mut self, id: u8, distance: f32, bearing: f32) -> Self {
        if self.teammates.len() < MAX_TEAMMATES {
            self.teammates.push(TeammateObservation {
                id,
                observation: RelativeObservation::seen(distance, bearing),
            });
        }
        self
    }

    /// Append a flag, ignored once the cap is reached
    pub fn with_flag(mut self, name: &str, distance: f32, bearing: f32) -> Self {
        if self.flags.len() < MAX_FLAGS {
            self.flags.push(LandmarkObservation::seen(name, distance, bearing));
        }
        self
    }

    /// First visible teammate in list order
    pub fn first_visible_teammate(&self) -> Option<&TeammateObservation> {
        self.teammates.iter().find(|t| t.observation.visible)
    }
}
