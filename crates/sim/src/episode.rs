//! Episode runner: decide, step, repeat.

use std::time::{Duration, Instant};

use maze_agent::{Agent, Decision, DecisionSource, Maze, StepReport, ThreatId};
use serde::Serialize;

/// Why an episode stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeEnd {
    /// Every pill and power pill was eaten.
    Cleared,
    /// The agent walked into a dangerous ghost.
    Caught(ThreatId),
    /// The agent fell back and could not move.
    Stuck,
    /// The tick budget ran out first.
    TickLimit,
}

/// One tick of an episode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: u32,
    pub decision: Decision,
    pub report: StepReport,
}

/// Result of [`run_episode`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub end: EpisodeEnd,
    pub ticks: u32,
    pub ghosts_eaten: Vec<ThreatId>,
    pub remaining_collectibles: usize,
    pub history: Vec<TickRecord>,
}

impl EpisodeSummary {
    /// Number of ticks decided by `source`.
    pub fn count(&self, source: DecisionSource) -> usize {
        self.history
            .iter()
            .filter(|record| record.decision.source == source)
            .count()
    }
}

/// Steps `maze` with `agent` for at most `max_ticks` ticks.
///
/// `budget`, when given, becomes a fresh per-tick decision deadline.
pub fn run_episode(
    agent: &Agent,
    maze: &mut Maze,
    max_ticks: u32,
    budget: Option<Duration>,
) -> EpisodeSummary {
    let mut history = Vec::new();
    let mut ghosts_eaten = Vec::new();
    let mut end = EpisodeEnd::TickLimit;

    for tick in 0..max_ticks {
        if maze.is_cleared() {
            end = EpisodeEnd::Cleared;
            break;
        }

        let deadline = budget.map(|budget| Instant::now() + budget);
        let decision = agent.decide(&*maze, deadline);
        let report = maze.step(decision.direction);
        tracing::trace!(tick, ?decision, ?report, "tick");
        history.push(TickRecord {
            tick,
            decision,
            report,
        });

        if let Some(id) = report.ate_ghost {
            tracing::debug!(tick, ghost = %id, "ghost eaten");
            ghosts_eaten.push(id);
        }
        if let Some(id) = report.caught_by {
            end = EpisodeEnd::Caught(id);
            break;
        }
        if !report.moved && !matches!(decision.source, DecisionSource::Layer(_)) {
            end = EpisodeEnd::Stuck;
            break;
        }
    }
    if end == EpisodeEnd::TickLimit && maze.is_cleared() {
        end = EpisodeEnd::Cleared;
    }

    let summary = EpisodeSummary {
        end,
        ticks: history.len() as u32,
        ghosts_eaten,
        remaining_collectibles: maze.pills().len() + maze.power_pills().len(),
        history,
    };
    tracing::info!(
        end = ?summary.end,
        ticks = summary.ticks,
        remaining = summary.remaining_collectibles,
        "episode finished"
    );
    summary
}
