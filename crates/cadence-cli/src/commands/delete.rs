use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::DeleteCommand;
use crate::store::Store;
use crate::util::{resolve_rule_id, short_id};

pub fn delete(store_path: &Path, command: DeleteCommand) -> Result<()> {
    let mut store = Store::load(store_path)?;
    let rule_id = resolve_rule_id(&store, &command.id)?;
    let title = store
        .rules
        .iter()
        .find(|r| r.id == rule_id)
        .map(|r| r.title.clone())
        .ok_or_else(|| anyhow!("Rule {} disappeared from the store", rule_id))?;

    if !command.force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete rule '{}' and all of its instances?",
                title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let dropped = store.remove_rule(rule_id);
    store.save(store_path)?;

    println!(
        "{} rule {} '{}' and {} instance(s)",
        "Deleted".red().bold(),
        short_id(rule_id),
        title,
        dropped
    );
    Ok(())
}
