//! Periodic health evaluation.
//!
//! Each ingested snapshot triggers one tick: for every metric series in the
//! log, refresh the forecast, score the latest value, and feed the result
//! through the alert dispatcher. Metrics are isolated; a failure in one
//! never blocks the others. A tick that arrives while one is running is
//! skipped, not queued.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use engram_core::config::HealthConfig;
use engram_core::models::{AlertEpisode, Forecast, MetricSnapshot};
use engram_core::traits::Notifier;
use tracing::{debug, info_span, warn};

use crate::alerts::AlertDispatcher;
use crate::anomaly::AnomalyDetector;
use crate::forecast::Forecaster;
use crate::snapshots::SnapshotLog;

pub struct HealthEngine<'a> {
    notifier: &'a dyn Notifier,
    config: HealthConfig,
    forecaster: Forecaster,
    log: RwLock<SnapshotLog>,
    detectors: Mutex<HashMap<String, AnomalyDetector>>,
    dispatcher: Mutex<AlertDispatcher>,
    forecasts: RwLock<HashMap<String, Forecast>>,
    tick_running: AtomicBool,
}

impl<'a> HealthEngine<'a> {
    pub fn new(notifier: &'a dyn Notifier, config: HealthConfig) -> Self {
        Self {
            notifier,
            forecaster: Forecaster::new(config.min_forecast_history),
            dispatcher: Mutex::new(AlertDispatcher::new(config.resolve_after)),
            config,
            log: RwLock::new(SnapshotLog::new()),
            detectors: Mutex::new(HashMap::new()),
            forecasts: RwLock::new(HashMap::new()),
            tick_running: AtomicBool::new(false),
        }
    }

    /// Append a snapshot and run one evaluation tick over every metric.
    ///
    /// If a tick is already in flight on another thread the snapshot is
    /// still appended, but this call returns without evaluating; the next
    /// tick sees it in the log.
    pub fn ingest_snapshot(&self, snapshot: MetricSnapshot) {
        write_lock(&self.log).push(snapshot);

        if self
            .tick_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("health tick already running, skipping this one");
            return;
        }
        // Clear the flag on unwind too; a panicking collaborator must not
        // leave every future tick skipped.
        let _guard = TickGuard(&self.tick_running);
        self.run_tick();
    }

    fn run_tick(&self) {
        let (names, series_by_metric, timestamp) = {
            let log = read_lock(&self.log);
            let Some(latest) = log.last() else {
                return;
            };
            let names = latest.metric_names();
            let series: Vec<(String, Vec<f64>)> = names
                .iter()
                .map(|name| (name.clone(), log.series(name)))
                .collect();
            (names, series, latest.timestamp)
        };

        let span = info_span!("health_tick", metrics = names.len());
        let _enter = span.enter();
        for (name, series) in &series_by_metric {
            self.evaluate_metric(name, series, timestamp);
        }
    }

    fn evaluate_metric(&self, name: &str, series: &[f64], timestamp: DateTime<Utc>) {
        match self
            .forecaster
            .forecast(name, series, self.config.forecast_horizon)
        {
            Ok(forecast) => {
                write_lock(&self.forecasts).insert(name.to_string(), forecast);
            }
            Err(err) if err.is_insufficient_history() => {
                debug!(metric = %name, %err, "forecast skipped");
            }
            Err(err) => {
                warn!(metric = %name, %err, "forecast failed");
            }
        }

        let Some((&value, baseline)) = series.split_last() else {
            return;
        };
        let score = {
            let mut detectors = lock(&self.detectors);
            let detector = detectors
                .entry(name.to_string())
                .or_insert_with(|| AnomalyDetector::new(name, &self.config));
            detector.score(baseline, timestamp, value)
        };
        lock(&self.dispatcher).evaluate(&score, self.notifier);
    }

    pub fn snapshot_count(&self) -> usize {
        read_lock(&self.log).len()
    }

    /// The most recent forecast per metric, if one has been produced.
    pub fn latest_forecasts(&self) -> HashMap<String, Forecast> {
        read_lock(&self.forecasts).clone()
    }

    pub fn forecast_for(&self, metric_name: &str) -> Option<Forecast> {
        read_lock(&self.forecasts).get(metric_name).cloned()
    }

    pub fn open_alerts(&self) -> Vec<AlertEpisode> {
        lock(&self.dispatcher).open_alerts()
    }
}

struct TickGuard<'a>(&'a AtomicBool);

impl Drop for TickGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
