use crate::models::{AlertEpisode, AlertKind};

/// External notification channel for alert events.
///
/// Fire-and-forget with at-least-once delivery assumed downstream; the alert
/// dispatcher's debouncing is the sole de-duplication guarantee.
pub trait Notifier: Send + Sync {
    fn notify(&self, episode: &AlertEpisode, kind: AlertKind);
}
