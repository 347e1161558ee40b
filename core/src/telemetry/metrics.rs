use std::sync::Mutex;

/// Counters describing one series-building run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCounters {
    pub extracted: usize,
    pub skipped: usize,
}

/// Shared run-level counters: how many files produced a sample and how many
/// were dropped. Safe to update from concurrent per-file tasks.
pub struct MetricsRecorder {
    inner: Mutex<RunCounters>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RunCounters::default()),
        }
    }

    pub fn record_extracted(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.extracted += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.skipped += 1;
        }
    }

    pub fn snapshot(&self) -> RunCounters {
        self.inner
            .lock()
            .map(|counters| *counters)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_counts_both_outcomes() {
        let metrics = MetricsRecorder::new();
        metrics.record_extracted();
        metrics.record_extracted();
        metrics.record_skipped();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.extracted, 2);
        assert_eq!(snapshot.skipped, 1);
    }
}
