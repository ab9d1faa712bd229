//! Poll loop
//!
//! Fetch, validate, compare, notify, sleep. Forever. Every per-cycle error is
//! caught in `run_cycle`, logged, and the loop carries on after the regular
//! period; nothing short of a process signal stops it.

use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, info};

use super::formatter::format_message;
use super::validator::check_response;
use crate::models::{AppResult, CycleOutcome, HomeworkRecord, PollState};
use crate::providers::{HomeworkApi, Notifier};
use crate::utils::constants::{KEY_STATUS, RETRY_PERIOD};

/// Counters for the lifetime of the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub cycles: u64,
    pub notifications: u64,
    pub failures: u64,
}

impl PollStats {
    pub fn summary(&self) -> String {
        format!(
            "Cycles: {} | Notifications: {} | Failures: {}",
            self.cycles, self.notifications, self.failures
        )
    }
}

/// Drives the polling cycle against one API and one notifier
pub struct Poller<A, N> {
    api: A,
    notifier: N,
    state: PollState,
    stats: PollStats,
}

impl<A: HomeworkApi, N: Notifier> Poller<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self::with_state(api, notifier, PollState::default())
    }

    pub fn with_state(api: A, notifier: N, state: PollState) -> Self {
        Self {
            api,
            notifier,
            state,
            stats: PollStats::default(),
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn stats(&self) -> PollStats {
        self.stats
    }

    /// Poll forever, sleeping `RETRY_PERIOD` between cycles
    pub async fn run(&mut self) {
        let origin = chrono::DateTime::from_timestamp(self.state.from_date, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| self.state.from_date.to_string());
        info!(
            "🚀 Polling every {}s from {} (last status: {})",
            RETRY_PERIOD.as_secs(),
            origin,
            self.state.last_status
        );

        loop {
            self.run_cycle().await;
            sleep(RETRY_PERIOD).await;
        }
    }

    /// One cycle with the catch-all applied. Never fails.
    pub async fn run_cycle(&mut self) -> Option<CycleOutcome> {
        self.stats.cycles += 1;

        let result = self.poll_once().await;
        let outcome = match result {
            Ok(outcome) => {
                if let CycleOutcome::Notified(_) = outcome {
                    self.stats.notifications += 1;
                }
                Some(outcome)
            }
            Err(e) => {
                self.stats.failures += 1;
                error!(
                    code = e.code_str(),
                    category = ?e.category(),
                    "Program failure: {}",
                    e
                );
                None
            }
        };

        debug!("📊 {}", self.stats.summary());
        outcome
    }

    /// One fetch/validate/compare/notify pass. Errors propagate.
    pub async fn poll_once(&mut self) -> AppResult<CycleOutcome> {
        let answer = self.api.get_api_answer(self.state.from_date).await?;
        let homeworks = check_response(&answer)?;
        let latest = &homeworks[0];

        let status = latest.get(KEY_STATUS).and_then(Value::as_str);
        if status == Some(self.state.last_status.as_str()) {
            debug!("No status change ({})", self.state.last_status);
            return Ok(CycleOutcome::Unchanged);
        }

        let record = HomeworkRecord::from_json(latest)?;
        let message = format_message(&record);
        self.notifier.send_message(&message).await?;

        info!(
            "🔔 \"{}\": {} -> {}",
            record.homework_name,
            self.state.last_status,
            record.status.as_str()
        );
        self.state.last_status = record.status.as_str().to_string();

        Ok(CycleOutcome::Notified(record.status))
    }
}
