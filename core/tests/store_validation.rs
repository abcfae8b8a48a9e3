//! Store validation tests: malformed records are rejected before any
//! computation, or dropped with an issue list in lenient mode.

mod common;

use common::init_logging;
use skillgap_core::{GapError, SkillCategory, SkillRecord, SkillStore};
use std::collections::BTreeMap;

fn issues_of(err: GapError) -> Vec<skillgap_core::ValidationIssue> {
    match err {
        GapError::Validation { issues } => issues,
        other => panic!("expected a validation error, got {other}"),
    }
}

/// Levels outside [0, 5] are rejected, naming the field.
#[test]
fn out_of_range_level_is_rejected() {
    init_logging();
    let records = vec![
        SkillRecord::new("Data Analysis", SkillCategory::Analytics, 2.9, 4.2, 45),
        SkillRecord::new("Forecasting", SkillCategory::Analytics, 3.0, 5.5, 10),
    ];
    let err = SkillStore::load(records, BTreeMap::new()).unwrap_err();
    let issues = issues_of(err);

    assert_eq!(issues.len(), 1, "issues: {issues:?}");
    assert_eq!(issues[0].index, 1);
    assert_eq!(issues[0].skill_name, "Forecasting");
    assert_eq!(issues[0].field, "required_level");
}

#[test]
fn non_finite_level_is_rejected() {
    let records = vec![SkillRecord::new("SEO", SkillCategory::Marketing, f64::NAN, 3.0, 4)];
    let issues = issues_of(SkillStore::load(records, BTreeMap::new()).unwrap_err());
    assert_eq!(issues[0].field, "current_level");
}

/// A negative headcount from an external source fails validation rather
/// than wrapping or failing to parse.
#[test]
fn negative_affected_employees_is_rejected() {
    let json = r#"{
        "skills": [
            { "skill_name": "Negotiation", "category": "communication",
              "current_level": 2.0, "required_level": 3.0, "affected_employees": -4 }
        ]
    }"#;
    let issues = issues_of(SkillStore::from_json(json).unwrap_err());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "affected_employees");
}

#[test]
fn duplicate_and_empty_names_are_rejected() {
    let records = vec![
        SkillRecord::new("Leadership", SkillCategory::Leadership, 3.4, 4.0, 18),
        SkillRecord::new("Leadership", SkillCategory::Leadership, 2.0, 4.0, 3),
        SkillRecord::new("  ", SkillCategory::Leadership, 2.0, 4.0, 3),
    ];
    let issues = issues_of(SkillStore::load(records, BTreeMap::new()).unwrap_err());

    assert_eq!(issues.len(), 2, "issues: {issues:?}");
    assert!(issues.iter().all(|i| i.field == "skill_name"));
    assert_eq!(issues[0].index, 1);
    assert_eq!(issues[1].index, 2);
}

#[test]
fn negative_potential_impact_is_rejected() {
    let records = vec![
        SkillRecord::new("SEO", SkillCategory::Marketing, 2.0, 3.0, 4).with_potential_impact(-1.0),
    ];
    let issues = issues_of(SkillStore::load(records, BTreeMap::new()).unwrap_err());
    assert_eq!(issues[0].field, "potential_impact");
}

/// A department naming a skill that is not in the snapshot is rejected.
#[test]
fn unknown_department_skill_is_rejected() {
    let records = vec![SkillRecord::new("Leadership", SkillCategory::Leadership, 3.4, 4.0, 18)];
    let departments = BTreeMap::from([(
        "Human Resources".to_string(),
        vec!["Leadership".to_string(), "Juggling".to_string()],
    )]);
    let issues = issues_of(SkillStore::load(records, departments).unwrap_err());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "departments");
    assert_eq!(issues[0].skill_name, "Juggling");
    assert_eq!(issues[0].index, 1, "index is the position in the department list");
}

/// Lenient loading keeps the valid records and reports the rest.
#[test]
fn lenient_load_drops_invalid_records() {
    init_logging();
    let records = vec![
        SkillRecord::new("Data Analysis", SkillCategory::Analytics, 2.9, 4.2, 45),
        SkillRecord::new("Forecasting", SkillCategory::Analytics, -1.0, 3.0, 10),
        SkillRecord::new("SEO", SkillCategory::Marketing, 2.0, 3.0, 4),
    ];
    let departments = BTreeMap::from([(
        "Marketing".to_string(),
        vec!["SEO".to_string(), "Forecasting".to_string()],
    )]);
    // Forecasting fails on its level, which also orphans its inventory entry
    let (store, issues) = SkillStore::load_lenient(records, departments);

    assert_eq!(store.len(), 2);
    assert!(store.record("Forecasting").is_none());
    assert_eq!(store.departments()["Marketing"], vec!["SEO".to_string()]);
    assert_eq!(issues.len(), 2, "record issue plus the dangling inventory entry: {issues:?}");
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = SkillStore::from_json_lenient("{ not json").unwrap_err();
    assert!(matches!(err, GapError::Serialization(_)), "got {err}");
}

#[test]
fn empty_snapshot_is_valid() {
    let store = SkillStore::from_json(r#"{ "skills": [] }"#).unwrap();
    assert!(store.is_empty());
    assert!(store.departments().is_empty());
}
