use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::cli::DoneCommand;
use crate::store::Store;
use crate::util::{resolve_task_id, short_id};

pub fn done(store_path: &Path, command: DoneCommand) -> Result<()> {
    let mut store = Store::load(store_path)?;
    let task_id = resolve_task_id(&store, &command.id)?;
    let task = store
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| anyhow!("Task {} disappeared from the store", task_id))?;

    if task.completed {
        println!("Task {} '{}' is already completed.", short_id(task.id), task.title);
        return Ok(());
    }

    task.completed = true;
    let title = task.title.clone();
    store.save(store_path)?;

    println!(
        "{} task {} '{}'",
        "Completed".green().bold(),
        short_id(task_id),
        title
    );
    Ok(())
}
