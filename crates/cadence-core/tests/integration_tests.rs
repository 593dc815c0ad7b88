use cadence_core::dates;
use cadence_core::expand::{Expander, ExpansionConfig};
use cadence_core::models::*;
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

fn d(s: &str) -> NaiveDate {
    dates::try_parse_date(s).expect("test date must be well-formed")
}

/// Helper to build a rule with a fixed anchor and optional end date.
fn test_rule(recurrence: Recurrence, start: &str, end: Option<&str>) -> RecurrenceRule {
    let mut rule = RecurrenceRule::new("Recurring chore", recurrence);
    rule.start_date = start.to_string();
    rule.end_date = end.map(String::from);
    rule
}

fn generated_dates(instances: &[TaskInstance]) -> Vec<&str> {
    instances.iter().map(|t| t.date.as_str()).collect()
}

#[test]
fn daily_interval_two_generates_alternating_days() {
    let rule = test_rule(
        Recurrence::Daily { interval: 2 },
        "2024-01-01",
        Some("2024-01-10"),
    );
    let created = Expander::with_defaults().expand(&rule, &[], Some(d("2024-06-30")));

    assert_eq!(
        generated_dates(&created),
        vec!["2024-01-01", "2024-01-03", "2024-01-05", "2024-01-07", "2024-01-09"]
    );
}

#[test]
fn weekly_rule_generates_selected_weekdays_in_range() {
    // 2024-01-01 is a Monday; weekdays {1, 3} are Monday and Wednesday.
    let rule = test_rule(
        Recurrence::Weekly {
            interval: 1,
            week_days: vec![1, 3],
        },
        "2024-01-01",
        Some("2024-01-15"),
    );
    let created = Expander::with_defaults().expand(&rule, &[], Some(d("2024-06-30")));

    assert_eq!(
        generated_dates(&created),
        vec!["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10", "2024-01-15"]
    );
}

#[test]
fn monthly_rule_on_day_31_skips_months_without_one() {
    // Documented quirk: no roll-to-last-day fallback, so February and April
    // produce nothing at all.
    let rule = test_rule(
        Recurrence::Monthly { interval: 1 },
        "2024-01-31",
        Some("2024-04-30"),
    );
    let created = Expander::with_defaults().expand(&rule, &[], Some(d("2024-12-31")));

    assert_eq!(generated_dates(&created), vec!["2024-01-31", "2024-03-31"]);
}

#[test]
fn existing_instances_are_not_regenerated() {
    let rule = test_rule(
        Recurrence::Daily { interval: 2 },
        "2024-01-01",
        Some("2024-01-10"),
    );
    let existing = vec![rule.instantiate("2024-01-03")];
    let created = Expander::with_defaults().expand(&rule, &existing, Some(d("2024-06-30")));

    assert_eq!(
        generated_dates(&created),
        vec!["2024-01-01", "2024-01-05", "2024-01-07", "2024-01-09"]
    );
}

#[test]
fn instances_of_other_rules_do_not_block_generation() {
    let rule = test_rule(
        Recurrence::Daily { interval: 2 },
        "2024-01-01",
        Some("2024-01-05"),
    );
    // Same date, different owning rule.
    let mut foreign = rule.instantiate("2024-01-03");
    foreign.recurring_rule_id = Some(Uuid::now_v7());
    // A standalone task on a matching date should not block either.
    let mut standalone = rule.instantiate("2024-01-01");
    standalone.recurring_rule_id = None;

    let created =
        Expander::with_defaults().expand(&rule, &[foreign, standalone], Some(d("2024-06-30")));
    assert_eq!(
        generated_dates(&created),
        vec!["2024-01-01", "2024-01-03", "2024-01-05"]
    );
}

#[test]
fn expansion_is_idempotent_once_output_is_persisted() {
    let rule = test_rule(
        Recurrence::Weekly {
            interval: 2,
            week_days: vec![1, 5],
        },
        "2024-01-01",
        None,
    );
    let horizon = Some(d("2024-03-31"));
    let expander = Expander::with_defaults();

    let first = expander.expand(&rule, &[], horizon);
    assert!(!first.is_empty());

    let second = expander.expand(&rule, &first, horizon);
    assert!(second.is_empty(), "re-expansion produced {:?}", second);
}

#[test]
fn sub_tasks_are_fresh_per_instance() {
    let mut rule = test_rule(
        Recurrence::Daily { interval: 1 },
        "2024-01-01",
        Some("2024-01-03"),
    );
    rule.sub_task_titles = vec!["Prepare".to_string(), "Execute".to_string()];

    let created = Expander::with_defaults().expand(&rule, &[], Some(d("2024-06-30")));
    assert_eq!(created.len(), 3);

    let mut sub_ids = HashSet::new();
    for instance in &created {
        assert_eq!(instance.sub_tasks.len(), 2);
        for sub in &instance.sub_tasks {
            assert!(!sub.completed);
            assert!(sub_ids.insert(sub.id), "sub-task id reused across instances");
        }
    }
}

#[test]
fn generated_instances_start_uncompleted_with_template_fields() {
    let mut rule = test_rule(
        Recurrence::Daily { interval: 1 },
        "2024-01-01",
        Some("2024-01-02"),
    );
    rule.description = Some("Stretch for ten minutes".to_string());
    rule.priority = TaskPriority::Medium;
    rule.quadrant = Quadrant::UrgentImportant;
    rule.start_time = Some(8 * 60 + 30);
    rule.duration = Some(10);
    rule.tags = vec!["health".to_string()];
    rule.project_id = Some(Uuid::now_v7());

    let created = Expander::with_defaults().expand(&rule, &[], Some(d("2024-06-30")));
    for instance in &created {
        assert!(!instance.completed);
        assert_eq!(instance.description, rule.description);
        assert_eq!(instance.priority, rule.priority);
        assert_eq!(instance.quadrant, rule.quadrant);
        assert_eq!(instance.start_time, Some(510));
        assert_eq!(instance.duration, Some(10));
        assert_eq!(instance.tags, rule.tags);
        assert_eq!(instance.project_id, rule.project_id);
        assert_eq!(instance.recurring_rule_id, Some(rule.id));
    }
}

#[test]
fn malformed_start_date_degrades_instead_of_erroring() {
    let expander = Expander::new(ExpansionConfig {
        horizon_days: 5,
        max_iterations: 1000,
    });
    let rule = test_rule(Recurrence::Daily { interval: 1 }, "31/01/2024", None);

    // The anchor falls back to today, so the default window still fills.
    let created = expander.expand(&rule, &[], None);
    assert_eq!(created.len(), 6);
    assert_eq!(created[0].date, dates::format_date(dates::today()));
}

proptest! {
    /// Generated dates always stay inside [start, min(end, horizon)], never
    /// duplicate, and a second expansion over the persisted output is empty.
    #[test]
    fn expansion_respects_bounds_and_idempotence(
        interval in 1u32..10,
        end_offset in 0i64..80,
        horizon_offset in 0i64..120,
    ) {
        let start = d("2024-01-01");
        let end = start + chrono::Duration::days(end_offset);
        let horizon = start + chrono::Duration::days(horizon_offset);
        let rule = test_rule(
            Recurrence::Daily { interval },
            "2024-01-01",
            Some(&dates::format_date(end)),
        );
        let expander = Expander::with_defaults();

        let created = expander.expand(&rule, &[], Some(horizon));

        let upper = end.min(horizon);
        let mut seen = HashSet::new();
        for instance in &created {
            let date = dates::try_parse_date(&instance.date).expect("generated dates are well-formed");
            prop_assert!(date >= start);
            prop_assert!(date <= upper);
            prop_assert!(seen.insert(instance.date.clone()), "duplicate {}", instance.date);
        }

        let again = expander.expand(&rule, &created, Some(horizon));
        prop_assert!(again.is_empty());
    }
}
