//! Per-role behaviors, one pure function per role

pub mod defender;
pub mod dribbler;
pub mod goalkeeper;
pub mod passer;
pub mod receiver;
pub mod striker;
pub mod striker_gk;
