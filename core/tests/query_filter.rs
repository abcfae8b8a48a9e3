//! Query tests: the dashboard's text, category and priority filters.

mod common;

use common::{engine, reference_report, store_of};
use skillgap_core::{query::gap_indicator, GapQuery, SkillCategory, SkillRecord, Tier};

fn names(gaps: &[&skillgap_core::gap_calculator::SkillGap]) -> Vec<String> {
    gaps.iter().map(|g| g.skill_name().to_string()).collect()
}

/// Text and priority filters combine with AND.
#[test]
fn text_and_priority_are_conjunctive() {
    let store = store_of(vec![
        SkillRecord::new("Data Engineering", SkillCategory::Technical, 1.0, 3.0, 12),
        SkillRecord::new("Data Analysis", SkillCategory::Analytics, 2.9, 4.2, 45),
        SkillRecord::new("Cybersecurity", SkillCategory::Technical, 2.8, 4.5, 32),
        SkillRecord::new("Data Visualization", SkillCategory::Analytics, 3.1, 3.9, 20),
        SkillRecord::new("Big Data Platforms", SkillCategory::Technical, 1.5, 3.5, 9),
        SkillRecord::new("Database Administration", SkillCategory::Technical, 3.0, 3.1, 4),
    ]);
    let report = engine().analyze(&store);
    let query = GapQuery::new().text("DATA").priority(Tier::Critical);

    assert_eq!(names(&report.filter(&query)), vec!["Data Engineering", "Big Data Platforms"]);

    // Single-gap checks agree with the bulk filter
    let matched: Vec<&str> = report
        .gaps
        .iter()
        .filter(|g| query.matches(g))
        .map(|g| g.skill_name())
        .collect();
    assert_eq!(matched, vec!["Data Engineering", "Big Data Platforms"]);
    assert!(!GapQuery::new().text("data").priority(Tier::Low).matches(&report.gaps[2]));
}

#[test]
fn text_matches_category_label() {
    let report = reference_report();
    let hits = report.filter(&GapQuery::new().text("analytics"));
    assert_eq!(names(&hits), vec!["Data Analysis", "Data Visualization"]);
}

/// The filtered view is a subsequence of the input, in input order.
#[test]
fn result_preserves_input_order() {
    let report = reference_report();
    let hits = report.filter(&GapQuery::new().category(SkillCategory::Technical));

    assert_eq!(names(&hits), vec!["Cybersecurity", "Cloud Computing", "Machine Learning"]);
    let mut last = 0;
    for hit in &hits {
        let pos = report.gaps.iter().position(|g| g.skill_name() == hit.skill_name()).unwrap();
        assert!(pos >= last, "{} out of order", hit.skill_name());
        last = pos;
    }
}

/// An empty query returns everything; "All" means no filter.
#[test]
fn all_sentinel_is_no_filter() {
    let report = reference_report();
    let query = GapQuery::from_dashboard("  ", "All", "all").unwrap();

    assert!(query.is_empty());
    assert_eq!(report.filter(&query).len(), report.gaps.len());
}

#[test]
fn dashboard_values_parse() {
    let query = GapQuery::from_dashboard("cloud", "technical", "High").unwrap();
    assert_eq!(query.category, Some(SkillCategory::Technical));
    assert_eq!(query.priority, Some(Tier::High));

    let hits = reference_report().filter(&query).len();
    assert_eq!(hits, 1, "only Cloud Computing is a High technical cloud skill");

    assert!(GapQuery::from_dashboard("", "Astrology", "All").is_err());
    assert!(GapQuery::from_dashboard("", "All", "Urgent").is_err());
}

#[test]
fn no_match_is_empty() {
    let report = reference_report();
    assert!(report.filter(&GapQuery::new().text("underwater basket weaving")).is_empty());
}

/// The severity badge always agrees with the priority column.
#[test]
fn indicator_agrees_with_priority() {
    let engine = engine();
    let report = reference_report();
    for g in &report.gaps {
        assert_eq!(engine.gap_indicator(g.gap), g.priority, "{}", g.skill_name());
        assert_eq!(gap_indicator(g.gap, &engine.config().priority), g.priority);
    }
}
