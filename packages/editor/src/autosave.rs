//! # Auto-save
//!
//! Debounced persistence plus a periodic fallback sweep. The scheduler holds
//! no clock of its own: the host calls [`AutoSave::tick`] with the current
//! time, and every decision is made from the timestamps it has been given.
//!
//! A project that was never explicitly saved or loaded is not auto-saved.

use crate::document::Document;
use crate::storage::{KeyValueStore, ProjectStorage};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct AutoSaveConfig {
    /// Time without edits before a debounced save fires
    pub quiet_period: Duration,
    /// Interval of the fallback sweep
    pub sweep_interval: Duration,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::milliseconds(800),
            sweep_interval: Duration::seconds(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSaveTrigger {
    Debounce,
    Sweep,
}

/// Non-fatal report of an auto-save attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AutoSaveNotice {
    Saved {
        trigger: AutoSaveTrigger,
        at: DateTime<Utc>,
    },
    Failed {
        trigger: AutoSaveTrigger,
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AutoSave {
    config: AutoSaveConfig,
    observed_version: Option<u64>,
    pending_since: Option<DateTime<Utc>>,
    last_sweep: Option<DateTime<Utc>>,
}

impl AutoSave {
    pub fn new(config: AutoSaveConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    /// Whether a debounced save is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Advance the scheduler to `now`, saving the document if a save is due.
    ///
    /// The document is read as it is at call time. A failed write produces a
    /// [`AutoSaveNotice::Failed`] and leaves the document untouched.
    pub fn tick<S: KeyValueStore>(
        &mut self,
        now: DateTime<Utc>,
        doc: &mut Document,
        storage: &mut ProjectStorage<S>,
    ) -> Option<AutoSaveNotice> {
        if self.observed_version != Some(doc.version()) {
            self.observed_version = Some(doc.version());
            self.pending_since = Some(now);
        }
        let last_sweep = *self.last_sweep.get_or_insert(now);

        if !doc.is_persisted() {
            return None;
        }

        let trigger = if self
            .pending_since
            .is_some_and(|since| now - since >= self.config.quiet_period)
        {
            self.pending_since = None;
            AutoSaveTrigger::Debounce
        } else if now - last_sweep >= self.config.sweep_interval {
            self.last_sweep = Some(now);
            AutoSaveTrigger::Sweep
        } else {
            return None;
        };

        if !doc.is_dirty() {
            return None;
        }
        if trigger == AutoSaveTrigger::Sweep && doc.blocks().is_empty() {
            debug!("sweep skipped empty tree");
            return None;
        }

        match doc.save(storage, now) {
            Ok(_) => {
                debug!(?trigger, project_id = %doc.id(), "auto-saved");
                Some(AutoSaveNotice::Saved { trigger, at: now })
            }
            Err(err) => {
                warn!(?trigger, error = %err, "auto-save failed");
                Some(AutoSaveNotice::Failed {
                    trigger,
                    message: err.user_message(),
                })
            }
        }
    }
}
