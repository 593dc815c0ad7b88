use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::dates;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    None,
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::None
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task priority: {0}")]
pub struct ParseTaskPriorityError(String);

impl FromStr for TaskPriority {
    type Err = ParseTaskPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TaskPriority::None),
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(ParseTaskPriorityError(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::None => write!(f, "none"),
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

/// Position in the Eisenhower matrix view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Default for Quadrant {
    fn default() -> Self {
        Quadrant::NotUrgentImportant
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid quadrant: {0} (expected q1..q4)")]
pub struct ParseQuadrantError(String);

impl FromStr for Quadrant {
    type Err = ParseQuadrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "q1" | "urgent-important" => Ok(Quadrant::UrgentImportant),
            "q2" | "not-urgent-important" => Ok(Quadrant::NotUrgentImportant),
            "q3" | "urgent-not-important" => Ok(Quadrant::UrgentNotImportant),
            "q4" | "not-urgent-not-important" => Ok(Quadrant::NotUrgentNotImportant),
            _ => Err(ParseQuadrantError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quadrant::UrgentImportant => write!(f, "q1"),
            Quadrant::NotUrgentImportant => write!(f, "q2"),
            Quadrant::UrgentNotImportant => write!(f, "q3"),
            Quadrant::NotUrgentNotImportant => write!(f, "q4"),
        }
    }
}

// ============================================================================
// Recurrence Patterns
// ============================================================================

/// How often a rule fires. One variant per frequency, each carrying only the
/// fields that frequency actually uses: a monthly rule cannot carry weekday
/// sets, a weekly rule cannot lose them.
///
/// `interval` is in days for `Daily`/`Custom`, weeks for `Weekly`, and
/// calendar months for `Monthly`, always relative to the rule's start date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Recurrence {
    Daily {
        interval: u32,
    },
    Weekly {
        interval: u32,
        /// Weekday indices, 0=Sunday..6=Saturday.
        week_days: Vec<u8>,
    },
    Monthly {
        interval: u32,
    },
    /// Behaves exactly like `Daily`. The upstream product never gave "custom"
    /// distinct semantics; kept as an alias rather than guessing at any.
    Custom {
        interval: u32,
    },
}

impl Recurrence {
    /// The raw repeat interval, regardless of frequency.
    pub fn interval(&self) -> u32 {
        match self {
            Recurrence::Daily { interval }
            | Recurrence::Weekly { interval, .. }
            | Recurrence::Monthly { interval }
            | Recurrence::Custom { interval } => *interval,
        }
    }

    pub fn frequency_name(&self) -> &'static str {
        match self {
            Recurrence::Daily { .. } => "daily",
            Recurrence::Weekly { .. } => "weekly",
            Recurrence::Monthly { .. } => "monthly",
            Recurrence::Custom { .. } => "custom",
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recurrence::Weekly { interval, week_days } => {
                let days: Vec<String> = week_days.iter().map(u8::to_string).collect();
                write!(f, "weekly/{} on [{}]", interval, days.join(","))
            }
            other => write!(f, "{}/{}", other.frequency_name(), other.interval()),
        }
    }
}

// ============================================================================
// Rules and Instances
// ============================================================================

/// A user-defined template describing how often and under what pattern task
/// instances should be generated.
///
/// Calendar dates are stored as `YYYY-MM-DD` strings in local time, the same
/// representation they carry across the storage boundary. Time-of-day fields
/// are minutes since midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceRule {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub quadrant: Quadrant,
    #[serde(flatten)]
    pub recurrence: Recurrence,
    /// Anchor for all interval arithmetic; also the earliest date any
    /// instance may carry.
    pub start_date: String,
    /// When set, no instance date may exceed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Minutes since midnight; marks generated instances as timed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u32>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// One fresh sub-task per title is stamped onto every generated instance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_task_titles: Vec<String>,
}

impl RecurrenceRule {
    /// Creates a rule anchored at today with the given pattern and no end
    /// date. Template fields start at their defaults.
    pub fn new(title: impl Into<String>, recurrence: Recurrence) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            description: None,
            priority: TaskPriority::None,
            quadrant: Quadrant::default(),
            recurrence,
            start_date: dates::format_date(dates::today()),
            end_date: None,
            start_time: None,
            duration: None,
            project_id: None,
            tags: Vec::new(),
            sub_task_titles: Vec::new(),
        }
    }

    /// Materializes one instance of this rule on the given date.
    ///
    /// Every call is a fresh template copy: new instance id, new sub-task
    /// ids, everything uncompleted. History of prior instances never leaks
    /// into a new one.
    pub fn instantiate(&self, date: &str) -> TaskInstance {
        TaskInstance {
            id: Uuid::now_v7(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            quadrant: self.quadrant,
            date: date.to_string(),
            start_time: self.start_time,
            duration: self.duration,
            project_id: self.project_id,
            tags: self.tags.clone(),
            sub_tasks: self
                .sub_task_titles
                .iter()
                .map(|title| SubTask::new(title))
                .collect(),
            completed: false,
            recurring_rule_id: Some(self.id),
        }
    }
}

/// One concrete, dated, independently completable unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskInstance {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub quadrant: Quadrant,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_tasks: Vec<SubTask>,
    #[serde(default)]
    pub completed: bool,
    /// Back-reference to the owning rule; `None` for standalone tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_rule_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTask {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl SubTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            completed: false,
        }
    }
}
