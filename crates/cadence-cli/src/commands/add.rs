use anyhow::{anyhow, bail, Result};
use cadence_core::dates;
use cadence_core::expand::{validate_rule, Expander};
use cadence_core::models::{Recurrence, RecurrenceRule};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::{AddCommand, FrequencyArg};
use crate::parser;
use crate::store::Store;
use crate::util::short_id;

pub fn add_rule(store_path: &Path, expander: &Expander, command: AddCommand) -> Result<()> {
    if command.on.is_some() && command.every != FrequencyArg::Weekly {
        bail!("--on only applies to weekly rules");
    }

    let recurrence = match command.every {
        FrequencyArg::Daily => Recurrence::Daily {
            interval: command.interval,
        },
        FrequencyArg::Custom => Recurrence::Custom {
            interval: command.interval,
        },
        FrequencyArg::Monthly => Recurrence::Monthly {
            interval: command.interval,
        },
        FrequencyArg::Weekly => {
            let on = command
                .on
                .as_deref()
                .ok_or_else(|| anyhow!("Weekly rules need --on (e.g. --on mon,wed)"))?;
            Recurrence::Weekly {
                interval: command.interval,
                week_days: parser::parse_week_days(on)?,
            }
        }
    };

    let mut rule = RecurrenceRule::new(command.title, recurrence);
    if let Some(from) = command.from.as_deref() {
        rule.start_date = dates::format_date(parser::parse_date_arg(from)?);
    }
    if let Some(until) = command.until.as_deref() {
        rule.end_date = Some(dates::format_date(parser::parse_date_arg(until)?));
    }
    if let Some(at) = command.at.as_deref() {
        rule.start_time = Some(parser::parse_time_of_day(at)?);
    }
    rule.duration = command.duration;
    rule.description = command.description;
    if let Some(priority) = command.priority.as_deref() {
        rule.priority = priority.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(quadrant) = command.quadrant.as_deref() {
        rule.quadrant = quadrant.parse().map_err(anyhow::Error::msg)?;
    }
    rule.project_id = command.project;
    rule.tags = command.tag;
    rule.sub_task_titles = command.subtask;

    validate_rule(&rule)?;

    let mut store = Store::load(store_path)?;
    store.rules.push(rule.clone());

    // Materialize up front so the new rule's instances show up immediately,
    // the same as a later `cadence expand` would produce them.
    let created = expander.expand(&rule, &store.tasks, None);
    let inserted = store.insert_new_instances(created);
    store.save(store_path)?;

    println!(
        "{} rule {} '{}' ({}); {} instance(s) materialized",
        "Added".green().bold(),
        short_id(rule.id),
        rule.title,
        rule.recurrence,
        inserted
    );
    Ok(())
}
