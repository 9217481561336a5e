//! Offline agent loop
//!
//! Mirrors the live loop of a transport: each snapshot arrives on a virtual
//! clock, snapshots inside the send interval are skipped without deciding,
//! kicks are checked against the ball once more before sending, and only
//! non-`None` actions count as sends.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::{Duration, Instant};

use rc_core::wire::{encode_action, guard_stale_kick};
use rc_core::{Agent, PerceptionSnapshot};

use crate::throttle::Throttle;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub cycles: usize,
    pub skipped: usize,
    pub decided: usize,
    pub sent: usize,
}

/// Drive `agent` through `snapshots`.
///
/// `cycle` is the virtual time between snapshots. A per-cycle report goes to
/// `report`; every sent action is written as one JSON line to `actions`.
pub fn run<I, R, A>(
    agent: &mut Agent,
    snapshots: I,
    throttle: &mut Throttle,
    cycle: Duration,
    report: &mut R,
    actions: &mut A,
) -> Result<RunStats>
where
    I: IntoIterator<Item = PerceptionSnapshot>,
    R: Write,
    A: Write,
{
    let start = Instant::now();
    let mut stats = RunStats::default();
    let mut now = start;

    for (index, snapshot) in snapshots.into_iter().enumerate() {
        stats.cycles += 1;
        if index > 0 {
            now += cycle;
        }

        if !throttle.ready(now) {
            stats.skipped += 1;
            writeln!(report, "[{:>4}] skipped (rate limit)", index)?;
            continue;
        }

        let status = snapshot.game_status;
        let role = snapshot.role;
        let ball = snapshot.ball;

        let action = guard_stale_kick(agent.step(snapshot), &ball);
        stats.decided += 1;

        let encoded = encode_action(&action).context("Failed to encode action")?;
        writeln!(
            report,
            "[{:>4}] {:?}/{:?} -> {:<15} {}",
            index,
            status,
            role,
            agent.state().name(),
            encoded
        )?;

        if !action.is_none() {
            throttle.record_send(now);
            stats.sent += 1;
            writeln!(actions, "{}", encoded)?;
        }
    }

    Ok(stats)
}
