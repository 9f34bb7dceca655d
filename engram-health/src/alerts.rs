//! Debounced alert dispatch.
//!
//! Per-metric state machine: Quiet → Open on a flagged score, Open → Quiet
//! after `resolve_after` consecutive calm evaluations. Exactly one Opened
//! and one Resolved notification per episode; re-flagging while open only
//! raises the peak and resets the calm counter.

use std::collections::HashMap;

use engram_core::models::{AlertEpisode, AlertKind, AnomalyScore};
use engram_core::traits::Notifier;
use tracing::info;

#[derive(Debug)]
enum MetricState {
    Quiet,
    Open {
        episode: AlertEpisode,
        calm_ticks: usize,
    },
}

pub struct AlertDispatcher {
    resolve_after: usize,
    states: HashMap<String, MetricState>,
}

impl AlertDispatcher {
    pub fn new(resolve_after: usize) -> Self {
        Self {
            resolve_after,
            states: HashMap::new(),
        }
    }

    /// Feed one evaluation result through the state machine, notifying on
    /// open/resolve transitions only.
    pub fn evaluate(&mut self, score: &AnomalyScore, notifier: &dyn Notifier) {
        let state = self
            .states
            .entry(score.metric_name.clone())
            .or_insert(MetricState::Quiet);

        *state = match std::mem::replace(state, MetricState::Quiet) {
            MetricState::Quiet => {
                if score.is_flagged {
                    let episode = AlertEpisode {
                        metric_name: score.metric_name.clone(),
                        opened_at: score.snapshot_timestamp,
                        closed_at: None,
                        peak_score: score.score,
                    };
                    info!(
                        metric = %score.metric_name,
                        score = score.score,
                        "alert episode opened"
                    );
                    notifier.notify(&episode, AlertKind::Opened);
                    MetricState::Open {
                        episode,
                        calm_ticks: 0,
                    }
                } else {
                    MetricState::Quiet
                }
            }
            MetricState::Open {
                mut episode,
                calm_ticks,
            } => {
                if score.is_flagged {
                    episode.peak_score = episode.peak_score.max(score.score);
                    MetricState::Open {
                        episode,
                        calm_ticks: 0,
                    }
                } else if calm_ticks + 1 >= self.resolve_after {
                    episode.closed_at = Some(score.snapshot_timestamp);
                    info!(
                        metric = %score.metric_name,
                        peak = episode.peak_score,
                        "alert episode resolved"
                    );
                    notifier.notify(&episode, AlertKind::Resolved);
                    MetricState::Quiet
                } else {
                    MetricState::Open {
                        episode,
                        calm_ticks: calm_ticks + 1,
                    }
                }
            }
        };
    }

    /// Currently open episodes, sorted by metric name.
    pub fn open_alerts(&self) -> Vec<AlertEpisode> {
        let mut open: Vec<AlertEpisode> = self
            .states
            .values()
            .filter_map(|state| match state {
                MetricState::Open { episode, .. } => Some(episode.clone()),
                MetricState::Quiet => None,
            })
            .collect();
        open.sort_by(|a, b| a.metric_name.cmp(&b.metric_name));
        open
    }
}
