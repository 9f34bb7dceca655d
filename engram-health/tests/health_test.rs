//! End-to-end health engine tests: snapshots in, forecasts and alert
//! notifications out.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, TimeZone, Utc};
use engram_core::config::HealthConfig;
use engram_core::memory::Category;
use engram_core::models::{AlertEpisode, AlertKind, MetricSnapshot};
use engram_core::traits::Notifier;
use engram_health::HealthEngine;

// ── helpers ──────────────────────────────────────────────────────────────

struct CapturingNotifier {
    events: Mutex<Vec<(String, AlertKind)>>,
}

impl CapturingNotifier {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<(String, AlertKind)> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, episode: &AlertEpisode, kind: AlertKind) {
        self.events
            .lock()
            .unwrap()
            .push((episode.metric_name.clone(), kind));
    }
}

fn snapshot(step: i64, total: usize) -> MetricSnapshot {
    let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    MetricSnapshot {
        timestamp: base + Duration::minutes(step),
        total_records: total,
        category_counts: HashMap::new(),
        p95_query_latency_ms: 1.0,
    }
}

// ── alerts ───────────────────────────────────────────────────────────────

#[test]
fn spike_opens_then_resolves_one_episode() {
    let notifier = CapturingNotifier::new();
    let config = HealthConfig {
        min_baseline: 3,
        resolve_after: 3,
        ..HealthConfig::default()
    };
    let engine = HealthEngine::new(&notifier, config);

    // Stable baseline, one spike, then recovery.
    for (step, total) in [100, 101, 99, 250, 102, 101, 100].iter().enumerate() {
        engine.ingest_snapshot(snapshot(step as i64, *total));
    }

    let events = notifier.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        (MetricSnapshot::TOTAL_RECORDS.to_string(), AlertKind::Opened)
    );
    assert_eq!(
        events[1],
        (
            MetricSnapshot::TOTAL_RECORDS.to_string(),
            AlertKind::Resolved
        )
    );
    assert!(engine.open_alerts().is_empty());
}

#[test]
fn episode_stays_open_until_enough_calm_ticks() {
    let notifier = CapturingNotifier::new();
    let config = HealthConfig {
        min_baseline: 3,
        resolve_after: 3,
        ..HealthConfig::default()
    };
    let engine = HealthEngine::new(&notifier, config);

    // Spike, then only two calm evaluations.
    for (step, total) in [100, 101, 99, 250, 102, 101].iter().enumerate() {
        engine.ingest_snapshot(snapshot(step as i64, *total));
    }

    assert_eq!(notifier.events().len(), 1);
    let open = engine.open_alerts();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].metric_name, MetricSnapshot::TOTAL_RECORDS);
    assert!(open[0].is_open());
    assert!(open[0].peak_score > 3.0);
}

#[test]
fn panicking_notifier_does_not_wedge_future_ticks() {
    struct PanickyNotifier;

    impl Notifier for PanickyNotifier {
        fn notify(&self, _episode: &AlertEpisode, _kind: AlertKind) {
            panic!("notification channel blew up");
        }
    }

    let notifier = PanickyNotifier;
    let config = HealthConfig {
        min_baseline: 3,
        ..HealthConfig::default()
    };
    let engine = HealthEngine::new(&notifier, config);

    for (step, total) in [100, 101, 99].iter().enumerate() {
        engine.ingest_snapshot(snapshot(step as i64, *total));
    }
    // The spike opens an episode; the notifier panics inside the tick.
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        engine.ingest_snapshot(snapshot(3, 250));
    }));
    assert!(result.is_err());

    // Later ticks must still run: with enough history the forecast shows up.
    for (step, total) in [102, 101, 100, 99, 100, 101, 102].iter().enumerate() {
        engine.ingest_snapshot(snapshot(4 + step as i64, *total));
    }
    assert_eq!(engine.snapshot_count(), 11);
    assert!(engine.forecast_for(MetricSnapshot::TOTAL_RECORDS).is_some());
}

#[test]
fn quiet_store_raises_no_alerts() {
    let notifier = CapturingNotifier::new();
    let engine = HealthEngine::new(&notifier, HealthConfig::default());

    for step in 0..20 {
        engine.ingest_snapshot(snapshot(step, 100 + (step % 3) as usize));
    }

    assert!(notifier.events().is_empty());
    assert!(engine.open_alerts().is_empty());
}

// ── forecasts ────────────────────────────────────────────────────────────

#[test]
fn forecasts_appear_once_history_suffices() {
    let notifier = CapturingNotifier::new();
    let engine = HealthEngine::new(&notifier, HealthConfig::default());

    for step in 0..9 {
        engine.ingest_snapshot(snapshot(step, 100 + 2 * step as usize));
    }
    assert!(engine.latest_forecasts().is_empty());

    for step in 9..12 {
        engine.ingest_snapshot(snapshot(step, 100 + 2 * step as usize));
    }

    let forecasts = engine.latest_forecasts();
    assert!(forecasts.contains_key(MetricSnapshot::TOTAL_RECORDS));
    assert!(forecasts.contains_key(MetricSnapshot::P95_QUERY_LATENCY_MS));

    let forecast = engine.forecast_for(MetricSnapshot::TOTAL_RECORDS).unwrap();
    assert_eq!(forecast.horizon_steps, HealthConfig::default().forecast_horizon);
    // Growing series: the first projected point continues past the latest.
    assert!(forecast.point_estimates[0] > 100.0);
}

#[test]
fn each_tick_replaces_the_previous_forecast() {
    let notifier = CapturingNotifier::new();
    let engine = HealthEngine::new(&notifier, HealthConfig::default());

    for step in 0..12 {
        engine.ingest_snapshot(snapshot(step, 100));
    }
    let flat = engine.forecast_for(MetricSnapshot::TOTAL_RECORDS).unwrap();

    for step in 12..24 {
        engine.ingest_snapshot(snapshot(step, 100 + 10 * (step - 11) as usize));
    }
    let rising = engine.forecast_for(MetricSnapshot::TOTAL_RECORDS).unwrap();

    assert!(rising.point_estimates[0] > flat.point_estimates[0]);
}

#[test]
fn category_series_get_their_own_forecasts() {
    let notifier = CapturingNotifier::new();
    let engine = HealthEngine::new(&notifier, HealthConfig::default());

    let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    for step in 0..12i64 {
        let mut category_counts = HashMap::new();
        category_counts.insert(Category::Decision, 10 + step as usize);
        engine.ingest_snapshot(MetricSnapshot {
            timestamp: base + Duration::minutes(step),
            total_records: 50 + step as usize,
            category_counts,
            p95_query_latency_ms: 2.0,
        });
    }

    let name = MetricSnapshot::category_metric(Category::Decision);
    let forecast = engine.forecast_for(&name).unwrap();
    assert_eq!(forecast.metric_name, name);
}

#[test]
fn snapshot_count_tracks_ingest() {
    let notifier = CapturingNotifier::new();
    let engine = HealthEngine::new(&notifier, HealthConfig::default());

    assert_eq!(engine.snapshot_count(), 0);
    for step in 0..4 {
        engine.ingest_snapshot(snapshot(step, 10));
    }
    assert_eq!(engine.snapshot_count(), 4);
    // Too little history for forecasts or alerts yet.
    assert!(engine.latest_forecasts().is_empty());
    assert!(engine.open_alerts().is_empty());
}
