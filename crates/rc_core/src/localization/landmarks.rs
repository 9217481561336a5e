//! Static landmark table
//!
//! Maps simulator flag names to absolute field coordinates (meters, origin at
//! the center spot, +x toward the enemy goal). Perimeter flags carry an
//! integer offset in their name (`"f t l 20"`) and are resolved by family.

use crate::constants::field::{PERIMETER_X, PERIMETER_Y};
use crate::constants::goal;
use crate::constants::penalty_area;

/// Fixed-name flags
static FIXED_LANDMARKS: &[(&str, (f32, f32))] = &[
    // center and corners
    ("f c", (0.0, 0.0)),
    ("f l t", (-PERIMETER_X, PERIMETER_Y)),
    ("f l b", (-PERIMETER_X, -PERIMETER_Y)),
    ("f r t", (PERIMETER_X, PERIMETER_Y)),
    ("f r b", (PERIMETER_X, -PERIMETER_Y)),
    // line midpoints
    ("f c t", (0.0, PERIMETER_Y)),
    ("f c b", (0.0, -PERIMETER_Y)),
    ("f l 0", (-PERIMETER_X, 0.0)),
    ("f r 0", (PERIMETER_X, 0.0)),
    ("f t 0", (0.0, PERIMETER_Y)),
    ("f b 0", (0.0, -PERIMETER_Y)),
    // goals
    ("g l", goal::OWN),
    ("g r", goal::ENEMY),
    ("f g l t", (goal::OWN.0, goal::HALF_WIDTH_M)),
    ("f g l b", (goal::OWN.0, -goal::HALF_WIDTH_M)),
    ("f g r t", (goal::ENEMY.0, goal::HALF_WIDTH_M)),
    ("f g r b", (goal::ENEMY.0, -goal::HALF_WIDTH_M)),
    // penalty areas
    ("f p l t", (-penalty_area::FRONT_X, penalty_area::HALF_WIDTH_M)),
    ("f p l b", (-penalty_area::FRONT_X, -penalty_area::HALF_WIDTH_M)),
    ("f p l c", (-penalty_area::FRONT_X, 0.0)),
    ("f p r t", (penalty_area::FRONT_X, penalty_area::HALF_WIDTH_M)),
    ("f p r b", (penalty_area::FRONT_X, -penalty_area::HALF_WIDTH_M)),
    ("f p r c", (penalty_area::FRONT_X, 0.0)),
];

/// Resolve a flag name to its absolute coordinates.
///
/// Returns `None` for unknown names and for perimeter flags whose offset is
/// not an integer.
pub fn resolve(name: &str) -> Option<(f32, f32)> {
    let name = name.trim();
    FIXED_LANDMARKS
        .iter()
        .find(|(flag, _)| *flag == name)
        .map(|(_, pos)| *pos)
        .or_else(|| resolve_perimeter(name))
}

/// `f <side> <end> N` perimeter families
fn resolve_perimeter(name: &str) -> Option<(f32, f32)> {
    let mut parts = name.split_whitespace();
    let (kind, side, end, offset) = (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
    if kind != "f" || parts.next().is_some() {
        return None;
    }
    let n = offset.parse::<u8>().ok()? as f32;

    match (side, end) {
        // top/bottom touchlines, offset along x
        ("t", "l") => Some((-n, PERIMETER_Y)),
        ("t", "r") => Some((n, PERIMETER_Y)),
        ("b", "l") => Some((-n, -PERIMETER_Y)),
        ("b", "r") => Some((n, -PERIMETER_Y)),
        // left/right goal lines, offset along y
        ("l", "t") => Some((-PERIMETER_X, n)),
        ("l", "b") => Some((-PERIMETER_X, -n)),
        ("r", "t") => Some((PERIMETER_X, n)),
        ("r", "b") => Some((PERIMETER_X, -n)),
        _ => None,
    }
}
