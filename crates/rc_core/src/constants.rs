//! Field constants
//!
//! Simulator field coordinates: origin at the center mark, x along the
//! length (own goal at -52.5, enemy goal at +52.5), y along the width.
//! Perimeter flags sit 5m outside the field lines.

pub mod field {
    /// Field length in meters
    pub const LENGTH_M: f32 = 105.0;
    /// Field width in meters
    pub const WIDTH_M: f32 = 68.0;
    /// Goal line x (absolute value)
    pub const HALF_LENGTH_M: f32 = LENGTH_M * 0.5;
    /// Touchline y (absolute value)
    pub const HALF_WIDTH_M: f32 = WIDTH_M * 0.5;

    /// Distance of the perimeter flags outside the field lines
    pub const PERIMETER_OFFSET_M: f32 = 5.0;
    /// x of the left/right perimeter flag columns
    pub const PERIMETER_X: f32 = HALF_LENGTH_M + PERIMETER_OFFSET_M;
    /// y of the top/bottom perimeter flag rows
    pub const PERIMETER_Y: f32 = HALF_WIDTH_M + PERIMETER_OFFSET_M;

    /// Margin added on every side when deciding whether a
    /// triangulation candidate is "on the field"
    pub const BOUNDS_MARGIN_X: f32 = 2.5;
    pub const BOUNDS_MARGIN_Y: f32 = 3.0;

    /// Attacking-third boundary (x beyond which a striker shoots at the
    /// triangulated goal instead of dribbling)
    pub const ATTACKING_THIRD_X: f32 = LENGTH_M / 6.0;

    /// Check if a point lies inside the field expanded by the bounds margin
    #[inline]
    pub fn in_expanded_bounds(x: f32, y: f32) -> bool {
        let max_x = HALF_LENGTH_M + BOUNDS_MARGIN_X;
        let max_y = HALF_WIDTH_M + BOUNDS_MARGIN_Y;
        (-max_x..=max_x).contains(&x) && (-max_y..=max_y).contains(&y)
    }
}

pub mod goal {
    use super::field;

    /// Half of the simulator goal mouth (14.02m wide)
    pub const HALF_WIDTH_M: f32 = 7.01;
    /// Own goal center
    pub const OWN: (f32, f32) = (-field::HALF_LENGTH_M, 0.0);
    /// Enemy goal center
    pub const ENEMY: (f32, f32) = (field::HALF_LENGTH_M, 0.0);
}

pub mod penalty_area {
    /// x of the penalty-area front line (absolute value)
    pub const FRONT_X: f32 = 36.0;
    /// y of the penalty-area corners (absolute value)
    pub const HALF_WIDTH_M: f32 = 20.16;
}
