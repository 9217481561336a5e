//! Per-agent latched decision state

use serde::{Deserialize, Serialize};

use crate::perception::RelativeObservation;

/// Behavioral state tag. Observability only; the latches are the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum AgentState {
    #[default]
    Idle,
    SearchingBall,
    ApproachingBall,
    Dribbling,
    Shooting,
    Passing,
    Defending,
    Catching,
}

impl AgentState {
    pub fn name(&self) -> &'static str {
        match self {
            AgentState::Idle => "Idle",
            AgentState::SearchingBall => "SearchingBall",
            AgentState::ApproachingBall => "ApproachingBall",
            AgentState::Dribbling => "Dribbling",
            AgentState::Shooting => "Shooting",
            AgentState::Passing => "Passing",
            AgentState::Defending => "Defending",
            AgentState::Catching => "Catching",
        }
    }
}

/// One-shot flags. Each is set at most once per episode and cleared only by
/// [`DecisionEngineState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Latches {
    /// Passer kickoff kick or pass done
    pub kicked: bool,
    /// Goalkeeper initial 180 degree turn done
    pub turned: bool,
    /// Goalkeeper catch done
    pub caught: bool,
    /// Goalkeeper post-catch clearance done
    pub cleared: bool,
}

/// Last visible ball and how long ago it was seen
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallMemory {
    pub last_seen: RelativeObservation,
    pub cycles_since_seen: u32,
}

/// Mutable state owned by exactly one agent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecisionEngineState {
    pub state: AgentState,
    /// Alternates dribble-band touches and dashes
    pub dribble_counter: u32,
    /// Cycles spent spinning for the goal while on the ball
    pub goal_search_counter: u32,
    pub latches: Latches,
    pub ball_memory: BallMemory,
}

impl DecisionEngineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore initial values (episode boundary)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ball to act on this cycle.
    ///
    /// A visible ball refreshes the memory and is returned as is. An unseen
    /// ball is replaced by the last visible one for up to `memory_cycles`
    /// cycles; with `memory_cycles == 0` the observation passes through.
    pub fn effective_ball(
        &mut self,
        ball: &RelativeObservation,
        memory_cycles: u32,
    ) -> RelativeObservation {
        if ball.visible {
            self.ball_memory = BallMemory { last_seen: *ball, cycles_since_seen: 0 };
            return *ball;
        }

        let memory = &mut self.ball_memory;
        memory.cycles_since_seen = memory.cycles_since_seen.saturating_add(1);
        if memory_cycles > 0
            && memory.last_seen.visible
            && memory.cycles_since_seen <= memory_cycles
        {
            return memory.last_seen;
        }
        *ball
    }
}
