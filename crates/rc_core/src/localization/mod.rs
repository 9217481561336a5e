//! Landmark localization
//!
//! Stateless: every call works only from the flags seen this cycle.
//!
//! ## Usage
//!
//! ```rust
//! use rc_core::localization::{angle_to_enemy_goal, estimate_pose};
//! use rc_core::perception::LandmarkObservation;
//!
//! // standing on the center spot, facing the enemy goal
//! let flags = vec![
//!     LandmarkObservation::seen("g r", 52.5, 0.0),
//!     LandmarkObservation::seen("f c t", 39.0, 90.0),
//! ];
//! let pose = estimate_pose(&flags);
//! assert!(pose.valid);
//! assert!(pose.x.abs() < 0.1 && pose.y.abs() < 0.1);
//! assert!(angle_to_enemy_goal(&pose).abs() < 0.1);
//! ```

pub mod angles;
pub mod landmarks;
pub mod triangulation;

pub use angles::{
    angle_to_enemy_goal, angle_to_own_goal, angle_to_target, circular_mean, normalize_angle,
};
pub use landmarks::resolve as resolve_landmark;
pub use triangulation::{circle_intersection, estimate_pose, usable_landmarks};
