//! Download rate tracking for model pulls

use std::time::{Duration, Instant};

use crate::types::pull::{PullProgress, PullStage};

const MB: f64 = 1024.0 * 1024.0;

/// Point-in-time view of a pull, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSnapshot {
    pub stage: PullStage,
    pub percent: Option<f64>,
    pub completed: Option<u64>,
    pub total: Option<u64>,
    /// Bytes per second over the last interval
    pub rate: Option<f64>,
    pub remaining: Option<Duration>,
}

impl DownloadSnapshot {
    /// `12.0MB / 48.0MB`
    pub fn bytes_label(&self) -> Option<String> {
        match (self.completed, self.total) {
            (Some(completed), Some(total)) if total > 0 => Some(format!(
                "{:.1}MB / {:.1}MB",
                completed as f64 / MB,
                total as f64 / MB
            )),
            _ => None,
        }
    }

    /// `(2.5 MB/s, ~30s remaining)`
    pub fn rate_label(&self) -> Option<String> {
        let rate = self.rate?;
        let remaining = self.remaining?;
        let secs = remaining.as_secs_f64();
        let eta = if secs < 60.0 {
            format!("~{:.0}s remaining", secs)
        } else {
            format!("~{:.1}m remaining", secs / 60.0)
        };
        Some(format!("({:.1} MB/s, {})", rate / MB, eta))
    }
}

/// Turns successive pull events into percentages, rate and ETA
#[derive(Debug, Default)]
pub struct DownloadTracker {
    last: Option<Sample>,
    rate: Option<f64>,
}

#[derive(Debug, Clone)]
struct Sample {
    at: Instant,
    digest: Option<String>,
    completed: u64,
}

impl DownloadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, progress: &PullProgress) -> DownloadSnapshot {
        self.observe_at(progress, Instant::now())
    }

    pub fn observe_at(&mut self, progress: &PullProgress, now: Instant) -> DownloadSnapshot {
        let stage = progress.stage();

        if let Some(completed) = progress.completed {
            match &self.last {
                // New layer: counts restart, so the old sample is meaningless
                Some(last) if last.digest != progress.digest => self.rate = None,
                Some(last) if completed > last.completed => {
                    let elapsed = now.saturating_duration_since(last.at).as_secs_f64();
                    if elapsed > 0.0 {
                        self.rate = Some((completed - last.completed) as f64 / elapsed);
                    }
                }
                _ => {}
            }
            self.last = Some(Sample {
                at: now,
                digest: progress.digest.clone(),
                completed,
            });
        }

        let remaining = match (self.rate, progress.total, progress.completed) {
            (Some(rate), Some(total), Some(completed)) if rate > 0.0 => Some(
                Duration::from_secs_f64(total.saturating_sub(completed) as f64 / rate),
            ),
            _ => None,
        };

        DownloadSnapshot {
            stage,
            percent: progress.percentage(),
            completed: progress.completed,
            total: progress.total,
            rate: self.rate,
            remaining,
        }
    }
}
