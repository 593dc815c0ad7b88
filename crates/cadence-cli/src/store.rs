use anyhow::{Context, Result};
use cadence_core::models::{RecurrenceRule, TaskInstance};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Flat-file JSON store for rules and their materialized instances.
///
/// The engine never touches this; it is the persistence collaborator that
/// feeds `tasks` into expansion and writes whatever comes back.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub rules: Vec<RecurrenceRule>,
    #[serde(default)]
    pub tasks: Vec<TaskInstance>,
}

impl Store {
    /// Loads the store, treating a missing file as an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read store at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("store at {} is not valid JSON", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self).context("failed to serialize store")?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write store at {}", path.display()))
    }

    /// Appends freshly expanded instances, deduplicating once more on
    /// `(recurring_rule_id, date)` at write time. The engine already dedupes
    /// against the snapshot it was given; this guards the store itself if an
    /// expansion ran against a stale snapshot.
    pub fn insert_new_instances(&mut self, new: Vec<TaskInstance>) -> usize {
        let mut keys: HashSet<(uuid::Uuid, String)> = self
            .tasks
            .iter()
            .filter_map(|t| t.recurring_rule_id.map(|rule| (rule, t.date.clone())))
            .collect();

        let mut inserted = 0;
        for task in new {
            match task.recurring_rule_id {
                Some(rule) if !keys.insert((rule, task.date.clone())) => continue,
                _ => {}
            }
            self.tasks.push(task);
            inserted += 1;
        }
        inserted
    }

    /// Removes a rule and every instance it generated. Returns the number of
    /// instances dropped.
    pub fn remove_rule(&mut self, rule_id: uuid::Uuid) -> usize {
        self.rules.retain(|r| r.id != rule_id);
        let before = self.tasks.len();
        self.tasks.retain(|t| t.recurring_rule_id != Some(rule_id));
        before - self.tasks.len()
    }
}
