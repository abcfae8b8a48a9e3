//! Department rollup tests: per-department aggregates over the
//! department's own skill inventory.

mod common;

use common::{approx, engine, reference_report, store_of};
use skillgap_core::{
    department_rollup::rollup_departments, EngineConfig, GapEngine, SkillCategory, SkillRecord,
    SkillStore,
};
use std::collections::BTreeMap;

#[test]
fn every_department_is_reported_in_name_order() {
    let report = reference_report();
    let names: Vec<&str> = report.departments.iter().map(|d| d.department.as_str()).collect();
    assert_eq!(
        names,
        vec!["Engineering", "Finance", "Human Resources", "Legal", "Marketing", "Operations"]
    );
}

#[test]
fn engineering_rollup_matches_reference() {
    let report = reference_report();
    let eng = report.department("Engineering").expect("Engineering rollup");

    assert_eq!(eng.skill_count, 4);
    assert_eq!(eng.total_gaps, 4);
    assert_eq!(eng.critical_gaps, 2);
    assert!(approx(eng.average_gap, 1.575), "average gap was {}", eng.average_gap);
    assert_eq!(eng.top_skills, vec!["Machine Learning", "Cybersecurity", "Cloud Computing"]);
    assert!(approx(eng.training_budget, 393_800.0), "budget was {}", eng.training_budget);
}

/// A skill that exceeds its requirement counts toward the inventory size
/// but not toward gaps, the average or the top skills.
#[test]
fn exceeded_skills_are_not_gaps() {
    let report = reference_report();
    let finance = report.department("Finance").unwrap();

    assert_eq!(finance.skill_count, 3);
    assert_eq!(finance.total_gaps, 2);
    assert!(approx(finance.average_gap, 1.05), "average gap was {}", finance.average_gap);
    assert_eq!(finance.top_skills, vec!["Data Analysis", "Data Visualization"]);
    assert!(approx(finance.training_budget, 149_000.0));
}

/// A department whose only skill has no gap reports zeros and no top skills.
#[test]
fn department_without_gaps_reports_zeros() {
    let report = reference_report();
    let legal = report.department("Legal").unwrap();

    assert_eq!(legal.skill_count, 1);
    assert_eq!(legal.total_gaps, 0);
    assert_eq!(legal.critical_gaps, 0);
    assert_eq!(legal.average_gap, 0.0);
    assert!(legal.top_skills.is_empty());
    assert_eq!(legal.training_budget, 0.0);
}

#[test]
fn empty_department_reports_zeros() {
    let records = vec![SkillRecord::new("SEO", SkillCategory::Marketing, 2.0, 3.0, 4)];
    let departments = BTreeMap::from([("Sales".to_string(), Vec::new())]);
    let store = SkillStore::load(records, departments).unwrap();
    let report = engine().analyze(&store);

    assert_eq!(report.departments.len(), 1);
    let sales = &report.departments[0];
    assert_eq!(sales.total_gaps, 0);
    assert_eq!(sales.average_gap, 0.0);
    assert!(sales.top_skills.is_empty());
}

#[test]
fn shared_skill_counts_in_each_department() {
    let report = reference_report();
    for dept in ["Engineering", "Marketing", "Finance"] {
        let rollup = report.department(dept).unwrap();
        assert!(
            rollup.top_skills.iter().any(|s| s == "Data Analysis"),
            "{dept} should rank Data Analysis: {:?}",
            rollup.top_skills
        );
    }
}

/// Equal gaps rank by skill name, and the list is cut at top_skills_count.
#[test]
fn top_skills_tie_break_and_truncation() {
    let mut config = EngineConfig::default();
    config.rollup.top_skills_count = 2;
    let engine = GapEngine::new(config).unwrap();

    let records = vec![
        SkillRecord::new("Vendor Management", SkillCategory::Operations, 2.0, 3.0, 5),
        SkillRecord::new("Agile Delivery", SkillCategory::Operations, 2.0, 3.0, 5),
        SkillRecord::new("Process Improvement", SkillCategory::Operations, 2.5, 3.0, 5),
    ];
    let skills = records.iter().map(|r| r.skill_name.clone()).collect();
    let store = SkillStore::load(records, BTreeMap::from([("Operations".to_string(), skills)])).unwrap();
    let report = engine.analyze(&store);

    assert_eq!(report.departments[0].top_skills, vec!["Agile Delivery", "Vendor Management"]);
}

#[test]
fn no_inventories_no_rollups() {
    let store = store_of(vec![SkillRecord::new("SEO", SkillCategory::Marketing, 2.0, 3.0, 4)]);
    let gaps = engine().compute_gaps(&store);
    assert!(rollup_departments(&gaps, store.departments(), &Default::default()).is_empty());
}
