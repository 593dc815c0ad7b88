use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A calendar-minded task manager with horizon-based recurring task expansion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task store file (overrides config)
    #[clap(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new recurrence rule
    Add(AddCommand),
    /// List rules or generated task instances
    List(ListCommand),
    /// Materialize all rules up to the horizon and persist new instances
    Expand(ExpandCommand),
    /// Show upcoming dates for one rule without persisting anything
    Preview(PreviewCommand),
    /// Mark a task instance as completed
    Done(DoneCommand),
    /// Delete a rule and all of its instances
    Delete(DeleteCommand),
}

/// Repetition frequency choices for `add --every`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyArg {
    /// Every `interval` days
    Daily,
    /// On selected weekdays, every `interval` weeks
    Weekly,
    /// On the anchor's day of month, every `interval` months
    Monthly,
    /// Alias of daily
    Custom,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the recurring task
    pub title: String,
    /// How often the task repeats
    #[clap(long, value_enum)]
    pub every: FrequencyArg,
    /// Repeat interval (days/weeks/months depending on --every)
    #[clap(long, default_value = "1")]
    pub interval: u32,
    /// Days of week for weekly rules (sun,mon,tue,wed,thu,fri,sat or 0-6)
    #[clap(long)]
    pub on: Option<String>,
    /// Anchor date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub from: Option<String>,
    /// Last date an instance may be generated on (YYYY-MM-DD)
    #[clap(long)]
    pub until: Option<String>,
    /// Time of day (e.g. '9:00', '14:30'); omitted means all-day
    #[clap(long)]
    pub at: Option<String>,
    /// Duration in minutes
    #[clap(long)]
    pub duration: Option<u32>,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// The priority of the task (none|low|medium|high)
    #[clap(long)]
    pub priority: Option<String>,
    /// Eisenhower quadrant (q1..q4)
    #[clap(long)]
    pub quadrant: Option<String>,
    /// Project to file generated instances under
    #[clap(long)]
    pub project: Option<uuid::Uuid>,
    /// Tags stamped onto every generated instance
    #[clap(short, long, num_args = 1..)]
    pub tag: Vec<String>,
    /// Sub-task titles rebuilt fresh on every generated instance
    #[clap(long, num_args = 1..)]
    pub subtask: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// List recurrence rules instead of task instances
    #[clap(long)]
    pub rules: bool,
    /// Only show instances on this date (YYYY-MM-DD)
    #[clap(long)]
    pub on: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandCommand {
    /// Generation boundary (YYYY-MM-DD); defaults to today + horizon_days
    #[clap(long)]
    pub horizon: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// Rule ID (or unique prefix)
    pub id: String,
    /// Number of upcoming dates to show
    #[clap(long, short, default_value = "10")]
    pub count: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// Task instance ID (or unique prefix)
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// Rule ID (or unique prefix)
    pub id: String,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
