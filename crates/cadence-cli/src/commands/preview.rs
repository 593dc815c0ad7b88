use anyhow::{anyhow, Result};
use cadence_core::dates;
use cadence_core::expand::Expander;
use chrono::Duration;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::PreviewCommand;
use crate::store::Store;
use crate::util::resolve_rule_id;

/// Shows upcoming occurrence dates for one rule without touching the store.
pub fn preview(store_path: &Path, expander: &Expander, command: PreviewCommand) -> Result<()> {
    let store = Store::load(store_path)?;
    let rule_id = resolve_rule_id(&store, &command.id)?;
    let rule = store
        .rules
        .iter()
        .find(|r| r.id == rule_id)
        .ok_or_else(|| anyhow!("Rule {} disappeared from the store", rule_id))?;

    // Look ahead a full year, ignoring existing instances: a preview shows
    // the pattern, not the store's current fill state.
    let today = dates::today();
    let today_str = dates::format_date(today);
    let horizon = today + Duration::days(365);
    let upcoming: Vec<String> = expander
        .expand(rule, &[], Some(horizon))
        .into_iter()
        .map(|instance| instance.date)
        .filter(|date| *date >= today_str)
        .take(command.count)
        .collect();

    println!("{} '{}' ({})", "Preview".cyan().bold(), rule.title, rule.recurrence);
    if upcoming.is_empty() {
        println!("No upcoming occurrences within the next year.");
        return Ok(());
    }
    for date in upcoming {
        println!("  {}", date);
    }
    Ok(())
}
