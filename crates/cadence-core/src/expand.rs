use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;
use std::time::Instant;

use crate::dates;
use crate::error::CoreError;
use crate::models::{Recurrence, RecurrenceRule, TaskInstance};

/// Configuration for expansion behavior.
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Default generation horizon in days, counted from today, used when the
    /// caller supplies no explicit horizon end.
    pub horizon_days: i64,
    /// Hard ceiling on loop iterations per rule. Guarantees termination even
    /// for contradictory rule data; hitting it truncates output silently.
    pub max_iterations: u32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            horizon_days: 90,
            max_iterations: 1000,
        }
    }
}

/// Statistics collected by [`Expander::expand_all`].
#[derive(Debug, Clone, Default)]
pub struct ExpansionSummary {
    /// Number of rules processed
    pub rules_processed: usize,
    /// Total instances created across all rules
    pub instances_created: usize,
    /// Time taken for the operation
    pub duration_ms: u64,
}

/// Expander: materializes recurrence rules into dated task instances.
///
/// Responsibilities:
/// 1. Walk each rule's date range and decide which dates match its pattern
/// 2. Dedupe against instances that already exist for the rule
/// 3. Bound generation by the rolling horizon and the rule's own end date
/// 4. Stay pure and infallible, so the reactive caller can re-run it freely
///
/// Expansion is idempotent: persisting its output and invoking it again with
/// the grown instance set yields nothing new.
#[derive(Debug)]
pub struct Expander {
    config: ExpansionConfig,
}

impl Expander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExpansionConfig::default())
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expands one rule against the current instance set.
    ///
    /// # Arguments
    /// * `rule` - The recurrence rule to materialize
    /// * `existing` - The full current instance set; filtered internally to
    ///   this rule's instances by `recurring_rule_id`
    /// * `horizon_end` - Generation boundary; defaults to today plus the
    ///   configured horizon when `None`
    ///
    /// # Returns
    /// The instances that should now exist but do not yet, ascending by
    /// date. Never mutates `existing`, never errors: malformed rule dates
    /// degrade to a logged warning (see [`dates::parse_date`]) and
    /// contradictory configurations are cut off by the iteration ceiling.
    pub fn expand(
        &self,
        rule: &RecurrenceRule,
        existing: &[TaskInstance],
        horizon_end: Option<NaiveDate>,
    ) -> Vec<TaskInstance> {
        let anchor = dates::parse_date(&rule.start_date);
        let horizon =
            horizon_end.unwrap_or_else(|| dates::today() + Duration::days(self.config.horizon_days));
        // The rule's own end date caps the horizon but never extends it.
        let effective_end = match rule.end_date.as_deref() {
            Some(end) => horizon.min(dates::parse_date(end)),
            None => horizon,
        };

        let taken: HashSet<&str> = existing
            .iter()
            .filter(|task| task.recurring_rule_id == Some(rule.id))
            .map(|task| task.date.as_str())
            .collect();

        let mut created = Vec::new();
        let mut current = anchor;
        let mut iterations = 0u32;

        while current <= effective_end {
            if iterations >= self.config.max_iterations {
                // Safety valve, not an error path: partial output is fine.
                break;
            }
            iterations += 1;

            if current >= anchor && is_match(&rule.recurrence, anchor, current) {
                let date = dates::format_date(current);
                if !taken.contains(date.as_str()) {
                    created.push(rule.instantiate(&date));
                }
            }

            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        created
    }

    /// Expands every rule in `rules` against the shared instance set and
    /// reports what happened.
    ///
    /// Rules are independent: a malformed rule degrades on its own (logged
    /// warning, bounded partial output) without affecting the others.
    pub fn expand_all(
        &self,
        rules: &[RecurrenceRule],
        existing: &[TaskInstance],
        horizon_end: Option<NaiveDate>,
    ) -> (Vec<TaskInstance>, ExpansionSummary) {
        let started = Instant::now();
        let mut created = Vec::new();

        for rule in rules {
            created.extend(self.expand(rule, existing, horizon_end));
        }

        let summary = ExpansionSummary {
            rules_processed: rules.len(),
            instances_created: created.len(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        (created, summary)
    }
}

/// Whether `current` matches the rule's pattern, relative to its anchor date.
fn is_match(recurrence: &Recurrence, anchor: NaiveDate, current: NaiveDate) -> bool {
    match recurrence {
        // `Custom` never grew semantics of its own; it matches like `Daily`.
        Recurrence::Daily { interval } | Recurrence::Custom { interval } => {
            dates::days_between(anchor, current) % effective_interval(*interval) == 0
        }
        Recurrence::Weekly {
            interval,
            week_days,
        } => {
            let weekday = current.weekday().num_days_from_sunday() as u8;
            week_days.contains(&weekday)
                && dates::whole_weeks_between(anchor, current) % effective_interval(*interval) == 0
        }
        // Same day-of-month only. Anchors on day 29-31 skip months without
        // that day entirely; there is no roll-to-last-day fallback.
        Recurrence::Monthly { interval } => {
            current.day() == anchor.day()
                && dates::months_between(anchor, current) % effective_interval(*interval) == 0
        }
    }
}

/// A zero interval would make every modulus check divide by zero; inside the
/// engine it is treated as 1. [`validate_rule`] rejects it at the boundary.
fn effective_interval(interval: u32) -> i64 {
    i64::from(interval.max(1))
}

/// Validates a rule before it is accepted into the store.
///
/// The engine itself never errors; this is the strict boundary check that
/// keeps malformed rules from reaching it in the first place.
pub fn validate_rule(rule: &RecurrenceRule) -> Result<(), CoreError> {
    let interval = rule.recurrence.interval();
    if interval < 1 {
        return Err(CoreError::InvalidInterval(interval));
    }

    if let Recurrence::Weekly { week_days, .. } = &rule.recurrence {
        if week_days.is_empty() {
            return Err(CoreError::EmptyWeekDays);
        }
        if let Some(&bad) = week_days.iter().find(|&&day| day > 6) {
            return Err(CoreError::InvalidWeekDay(bad));
        }
    }

    let start = dates::try_parse_date(&rule.start_date)
        .ok_or_else(|| CoreError::InvalidDate(rule.start_date.clone()))?;

    if let Some(end_str) = rule.end_date.as_deref() {
        let end = dates::try_parse_date(end_str)
            .ok_or_else(|| CoreError::InvalidDate(end_str.to_string()))?;
        if end < start {
            return Err(CoreError::EndBeforeStart {
                start: rule.start_date.clone(),
                end: end_str.to_string(),
            });
        }
    }

    Ok(())
}
