use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use uuid::Uuid;

use crate::store::Store;

fn resolve_prefix<'a, I>(items: I, short_id: &str, kind: &str) -> Result<Uuid>
where
    I: Iterator<Item = (Uuid, &'a str)>,
{
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let matches: Vec<(Uuid, &str)> = items
        .filter(|(id, _)| id.simple().to_string().starts_with(&short_id.to_lowercase()))
        .collect();
    match matches.len() {
        1 => Ok(matches[0].0),
        0 => Err(anyhow!(CoreError::NotFound(format!(
            "No {} found with ID prefix '{}'",
            kind, short_id
        )))),
        _ => {
            let listing: Vec<String> = matches
                .iter()
                .map(|(id, title)| format!("{} ({})", &id.simple().to_string()[..8], title))
                .collect();
            Err(anyhow!(
                "Ambiguous ID prefix '{}'. Did you mean one of these?\n  {}",
                short_id,
                listing.join("\n  ")
            ))
        }
    }
}

pub fn resolve_rule_id(store: &Store, short_id: &str) -> Result<Uuid> {
    resolve_prefix(
        store.rules.iter().map(|r| (r.id, r.title.as_str())),
        short_id,
        "rule",
    )
}

pub fn resolve_task_id(store: &Store, short_id: &str) -> Result<Uuid> {
    resolve_prefix(
        store.tasks.iter().map(|t| (t.id, t.title.as_str())),
        short_id,
        "task",
    )
}

/// First eight hex characters of an id, the way tables display them.
pub fn short_id(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
