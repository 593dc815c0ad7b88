use cadence_core::models::{RecurrenceRule, TaskInstance};
use comfy_table::{Cell, Row, Table};

use crate::parser::format_time_of_day;
use crate::util::short_id;

pub fn display_tasks(tasks: &[TaskInstance]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Time", "Title", "Priority", "Quadrant", "Tags", "Done"]);

    for task in tasks {
        let time = match task.start_time {
            Some(minutes) => {
                let mut s = format_time_of_day(minutes);
                if let Some(duration) = task.duration {
                    s.push_str(&format!(" ({}m)", duration));
                }
                s
            }
            None => "all-day".to_string(),
        };

        let mut title = String::new();
        if task.recurring_rule_id.is_some() {
            title.push('↻');
            title.push(' ');
        }
        title.push_str(&task.title);
        if !task.sub_tasks.is_empty() {
            let done = task.sub_tasks.iter().filter(|s| s.completed).count();
            title.push_str(&format!(" [{}/{}]", done, task.sub_tasks.len()));
        }

        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(task.id)));
        row.add_cell(Cell::new(&task.date));
        row.add_cell(Cell::new(time));
        row.add_cell(Cell::new(title));
        row.add_cell(Cell::new(task.priority.to_string()));
        row.add_cell(Cell::new(task.quadrant.to_string()));
        row.add_cell(Cell::new(task.tags.join(", ")));
        row.add_cell(Cell::new(if task.completed { "✓" } else { "" }));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_rules(rules: &[RecurrenceRule]) {
    if rules.is_empty() {
        println!("No rules found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Repeats", "From", "Until", "Sub-tasks"]);

    for rule in rules {
        let mut row = Row::new();
        row.add_cell(Cell::new(short_id(rule.id)));
        row.add_cell(Cell::new(&rule.title));
        row.add_cell(Cell::new(rule.recurrence.to_string()));
        row.add_cell(Cell::new(&rule.start_date));
        row.add_cell(Cell::new(rule.end_date.as_deref().unwrap_or("-")));
        row.add_cell(Cell::new(rule.sub_task_titles.len().to_string()));
        table.add_row(row);
    }

    println!("{table}");
}
