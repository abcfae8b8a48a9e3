//! Department rollup: groups skill gaps by the departments whose workforce
//! they affect.
//!
//! Attribution comes from the store's department inventories; this module
//! never infers it. Every department in the inventory gets a rollup, even
//! one with nothing attributed (all zeros). Output is sorted by department
//! name because inventories are keyed by a BTreeMap.

use crate::{
    config::RollupConfig,
    gap_calculator::SkillGap,
    types::{DepartmentName, SkillName, Tier},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentGap {
    pub department:      DepartmentName,
    /// Attributed skills, with or without a gap.
    pub skill_count:     usize,
    pub total_gaps:      usize,
    pub critical_gaps:   usize,
    pub average_gap:     f64,
    pub top_skills:      Vec<SkillName>,
    pub training_budget: f64,
}

fn rollup_department(
    department: &str,
    attributed: &[&SkillGap],
    config: &RollupConfig,
) -> DepartmentGap {
    let mut with_gap: Vec<&SkillGap> = attributed.iter().copied().filter(|g| g.has_gap()).collect();

    let total_gaps = with_gap.len();
    let critical_gaps = attributed
        .iter()
        .filter(|g| g.priority == Tier::Critical)
        .count();
    let average_gap = if total_gaps > 0 {
        with_gap.iter().map(|g| g.gap).sum::<f64>() / total_gaps as f64
    } else {
        0.0
    };
    let training_budget = attributed.iter().map(|g| g.estimated_cost).sum();

    with_gap.sort_by(|a, b| {
        b.gap
            .total_cmp(&a.gap)
            .then_with(|| a.skill_name().cmp(b.skill_name()))
    });
    let top_skills = with_gap
        .iter()
        .take(config.top_skills_count)
        .map(|g| g.skill_name().to_string())
        .collect();

    DepartmentGap {
        department: department.to_string(),
        skill_count: attributed.len(),
        total_gaps,
        critical_gaps,
        average_gap,
        top_skills,
        training_budget,
    }
}

pub fn rollup_departments(
    gaps: &[SkillGap],
    inventories: &BTreeMap<DepartmentName, Vec<SkillName>>,
    config: &RollupConfig,
) -> Vec<DepartmentGap> {
    let by_name: HashMap<&str, &SkillGap> = gaps.iter().map(|g| (g.skill_name(), g)).collect();

    inventories
        .iter()
        .map(|(department, skills)| {
            let attributed: Vec<&SkillGap> = skills
                .iter()
                .filter_map(|s| by_name.get(s.as_str()).copied())
                .collect();
            let rollup = rollup_department(department, &attributed, config);
            log::debug!(
                "department_rollup: {department} gaps={} critical={} avg={:.2} budget={:.0}",
                rollup.total_gaps,
                rollup.critical_gaps,
                rollup.average_gap,
                rollup.training_budget,
            );
            rollup
        })
        .collect()
}
