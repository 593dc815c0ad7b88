use anyhow::Result;
use cadence_core::dates;
use std::path::Path;

use crate::cli::ListCommand;
use crate::parser;
use crate::store::Store;
use crate::views::table::{display_rules, display_tasks};

pub fn list(store_path: &Path, command: ListCommand) -> Result<()> {
    let store = Store::load(store_path)?;

    if command.rules {
        display_rules(&store.rules);
        return Ok(());
    }

    let mut tasks = store.tasks;
    if let Some(on) = command.on.as_deref() {
        let date = dates::format_date(parser::parse_date_arg(on)?);
        tasks.retain(|t| t.date == date);
    }
    tasks.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.start_time.cmp(&b.start_time))
            .then(a.title.cmp(&b.title))
    });

    display_tasks(&tasks);
    Ok(())
}
