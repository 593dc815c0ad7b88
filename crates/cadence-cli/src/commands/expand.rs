use anyhow::Result;
use cadence_core::expand::Expander;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::ExpandCommand;
use crate::parser;
use crate::store::Store;

pub fn expand(store_path: &Path, expander: &Expander, command: ExpandCommand) -> Result<()> {
    let horizon_end = command
        .horizon
        .as_deref()
        .map(parser::parse_date_arg)
        .transpose()?;

    let mut store = Store::load(store_path)?;
    let (created, summary) = expander.expand_all(&store.rules, &store.tasks, horizon_end);
    let inserted = store.insert_new_instances(created);
    store.save(store_path)?;

    println!(
        "{} {} rule(s): {} new instance(s) in {}ms",
        "Expanded".green().bold(),
        summary.rules_processed,
        inserted,
        summary.duration_ms
    );
    Ok(())
}
