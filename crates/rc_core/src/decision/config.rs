//! Decision policy configuration
//!
//! Every distance threshold and command power the decision engine uses is a
//! named field here instead of a literal in the role code. Presets cover the
//! two ways the agent is run.
//!
//! ## Usage
//!
//! ```rust
//! use rc_core::decision::{DecisionConfig, DefenderPolicy};
//!
//! // Drill preset (default)
//! let config = DecisionConfig::default();
//! assert_eq!(config.defender_policy, DefenderPolicy::HoldPosition);
//!
//! // Full-match preset
//! let config = DecisionConfig::match_play();
//! assert_eq!(config.defender_policy, DefenderPolicy::Clear);
//!
//! // From environment variable
//! let config = DecisionConfig::from_env_or_default();
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `RC_DECISION_PROFILE`: Select preset (drill, match, default)

use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::goal;
use crate::error::{CoreError, Result};

/// Environment variable selecting a preset
pub const PROFILE_ENV_VAR: &str = "RC_DECISION_PROFILE";

/// What a defender does once the ball is at its feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenderPolicy {
    /// Stand still on the ball so an attacking teammate can take it (drills)
    #[default]
    HoldPosition,
    /// Full-power forward clearance
    Clear,
}

/// Decision engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Distance thresholds
    pub distances: DistanceThresholds,
    /// Command powers
    pub powers: PowerSettings,
    /// Turn issued while searching for the ball (degrees)
    pub search_turn_deg: f32,
    /// Cycles a striker on the ball spins looking for the goal before
    /// dribbling straight ahead
    pub goal_search_cycles: u32,
    /// Defender behavior on the ball
    pub defender_policy: DefenderPolicy,
    /// Goalkeeper positional discipline
    pub keeper_discipline: KeeperDiscipline,
    /// Cycles the last seen ball stands in for an unseen one (0 = off)
    pub ball_memory_cycles: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            distances: DistanceThresholds::default(),
            powers: PowerSettings::default(),
            search_turn_deg: 30.0,
            goal_search_cycles: 12,
            defender_policy: DefenderPolicy::HoldPosition,
            keeper_discipline: KeeperDiscipline::default(),
            ball_memory_cycles: 0,
        }
    }
}

impl DecisionConfig {
    /// Drill preset - defender holds, tight dribble band, no memory
    pub fn drill() -> Self {
        Self::default()
    }

    /// Match preset - defender clears, wide dribble band, keeper discipline
    /// and ball memory on
    pub fn match_play() -> Self {
        Self {
            distances: DistanceThresholds {
                dribble_radius_m: 8.0,
                ..DistanceThresholds::default()
            },
            defender_policy: DefenderPolicy::Clear,
            keeper_discipline: KeeperDiscipline {
                enabled: true,
                ..KeeperDiscipline::default()
            },
            ball_memory_cycles: 30,
            ..Self::default()
        }
    }

    /// Preset by name (`drill`, `match`), case-insensitive
    pub fn from_profile(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "drill" | "default" => Some(Self::drill()),
            "match" | "match_play" => Some(Self::match_play()),
            _ => None,
        }
    }

    /// Load from environment variable RC_DECISION_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        let profile = env::var(PROFILE_ENV_VAR).unwrap_or_default();
        Self::from_profile(&profile).unwrap_or_default()
    }

    /// Reject configurations the roles cannot work with
    pub fn validate(&self) -> Result<()> {
        let d = &self.distances;
        let finite = [
            d.kickable_m,
            d.catchable_m,
            d.shooting_m,
            d.dribble_radius_m,
            d.attacking_third_x,
            d.sparring_close_m,
            self.search_turn_deg,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidConfig("non-finite threshold".into()));
        }
        if d.kickable_m <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "kickable_m must be positive, got {}",
                d.kickable_m
            )));
        }
        if d.dribble_radius_m < d.kickable_m {
            return Err(CoreError::InvalidConfig(format!(
                "dribble_radius_m ({}) below kickable_m ({})",
                d.dribble_radius_m, d.kickable_m
            )));
        }
        if d.catchable_m <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "catchable_m must be positive, got {}",
                d.catchable_m
            )));
        }
        let k = &self.keeper_discipline;
        if k.enabled && k.min_x > k.max_x {
            return Err(CoreError::InvalidConfig(format!(
                "keeper_discipline range inverted: [{}, {}]",
                k.min_x, k.max_x
            )));
        }
        self.powers.validate()
    }
}

/// Distance thresholds (meters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceThresholds {
    /// Ball distance at which a kick is accepted
    pub kickable_m: f32,
    /// Goalkeeper catch radius (enlarged from the simulator's 2.0)
    pub catchable_m: f32,
    /// Visible goal closer than this is shot at
    pub shooting_m: f32,
    /// Outer edge of the dribble band (inner edge is `kickable_m`)
    pub dribble_radius_m: f32,
    /// Pose x from which a striker shoots at the triangulated goal
    pub attacking_third_x: f32,
    /// Sparring striker clamps its dash below this distance
    pub sparring_close_m: f32,
}

impl Default for DistanceThresholds {
    fn default() -> Self {
        Self {
            kickable_m: 0.7,
            catchable_m: 2.5,
            shooting_m: 25.0,
            dribble_radius_m: 5.0,
            attacking_third_x: crate::constants::field::ATTACKING_THIRD_X,
            sparring_close_m: 2.0,
        }
    }
}

/// Command powers (simulator units, 0 - 100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerSettings {
    /// Dash used inside the dribble band
    pub dash_high: f32,
    /// Shot at goal
    pub shot: f32,
    /// Pass to a teammate
    pub pass: f32,
    /// Controlled dribble kick
    pub dribble: f32,
    /// Steadying touch inside the dribble band
    pub dribble_touch: f32,
    /// Goalkeeper clearance after a catch
    pub clearance: f32,
    /// Kickoff kick
    pub kickoff: f32,
    /// Sparring striker dash while the ball is unseen
    pub sparring_search: f32,
    /// Sparring striker shot
    pub sparring_shot: f32,
    /// Sparring striker dash when very close to the ball
    pub sparring_close: f32,
}

impl Default for PowerSettings {
    fn default() -> Self {
        Self {
            dash_high: 100.0,
            shot: 100.0,
            pass: 50.0,
            dribble: 30.0,
            dribble_touch: 20.0,
            clearance: 100.0,
            kickoff: 40.0,
            sparring_search: 50.0,
            sparring_shot: 60.0,
            sparring_close: 30.0,
        }
    }
}

impl PowerSettings {
    fn validate(&self) -> Result<()> {
        let powers = [
            ("dash_high", self.dash_high),
            ("shot", self.shot),
            ("pass", self.pass),
            ("dribble", self.dribble),
            ("dribble_touch", self.dribble_touch),
            ("clearance", self.clearance),
            ("kickoff", self.kickoff),
            ("sparring_search", self.sparring_search),
            ("sparring_shot", self.sparring_shot),
            ("sparring_close", self.sparring_close),
        ];
        for (name, power) in powers {
            if !(0.0..=100.0).contains(&power) {
                return Err(CoreError::InvalidConfig(format!(
                    "power {} out of range: {}",
                    name, power
                )));
            }
        }
        Ok(())
    }
}

/// Goalkeeper positional discipline: while waiting for the ball, steer back
/// toward the own goal line when the pose drifts out of `[min_x, max_x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperDiscipline {
    pub enabled: bool,
    pub min_x: f32,
    pub max_x: f32,
    /// Own goal line x; the keeper steers to a point 2m in front of it
    pub goal_line_x: f32,
    pub dash_power: f32,
}

impl Default for KeeperDiscipline {
    fn default() -> Self {
        Self {
            enabled: false,
            min_x: goal::OWN.0,
            max_x: -45.0,
            goal_line_x: goal::OWN.0,
            dash_power: 60.0,
        }
    }
}

impl KeeperDiscipline {
    /// Field point the keeper returns to
    pub fn home(&self) -> (f32, f32) {
        (self.goal_line_x + 2.0, 0.0)
    }
}
