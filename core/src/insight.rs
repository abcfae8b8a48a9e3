//! ROI / insight summarizer: organization-level totals and the action plan.
//!
//! Reads the full gap list (not the department rollups, which may count a
//! skill under several departments). Potential impact is additive across
//! skills; reconciling shared headcount is a policy decision made before
//! values reach this module.

use crate::{
    config::{ImpactValuation, InsightConfig},
    gap_calculator::SkillGap,
    types::{OfferingId, SkillCategory, SkillName, Tier},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub skill_name:         SkillName,
    pub gap:                f64,
    pub affected_employees: u32,
    pub training:           Vec<OfferingId>,
    pub estimated_cost:     f64,
    pub timeline:           String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    /// Critical-priority skills.
    pub immediate:   Vec<ActionItem>,
    /// High-priority skills.
    pub medium_term: Vec<ActionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub gap_count:      usize,
    pub critical_count: usize,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgInsight {
    pub total_gap_count:          usize,
    pub critical_gap_count:       usize,
    pub high_priority_count:      usize,
    pub total_affected_employees: u64,
    pub average_gap:              f64,
    pub total_estimated_cost:     f64,
    pub potential_impact:         f64,
    pub roi_ratio:                f64,
    pub action_plan:              ActionPlan,
    pub by_category:              BTreeMap<SkillCategory, CategorySummary>,
}

/// potential / cost, or 0 when there is no investment to divide by.
pub fn roi_ratio(potential_impact: f64, total_estimated_cost: f64) -> f64 {
    if total_estimated_cost > 0.0 {
        potential_impact / total_estimated_cost
    } else {
        0.0
    }
}

fn action_items(gaps: &[SkillGap], tier: Tier, cap: Option<usize>) -> Vec<ActionItem> {
    let mut selected: Vec<&SkillGap> = gaps.iter().filter(|g| g.priority == tier).collect();
    selected.sort_by(|a, b| {
        b.gap
            .total_cmp(&a.gap)
            .then_with(|| a.skill_name().cmp(b.skill_name()))
    });
    selected
        .into_iter()
        .take(cap.unwrap_or(usize::MAX))
        .map(|g| ActionItem {
            skill_name:         g.skill_name().to_string(),
            gap:                g.gap,
            affected_employees: g.record.affected_employees,
            training:           g.recommended_training.clone(),
            estimated_cost:     g.estimated_cost,
            timeline:           g.timeline.clone(),
        })
        .collect()
}

pub fn summarize(gaps: &[SkillGap], valuation: &ImpactValuation, config: &InsightConfig) -> OrgInsight {
    let with_gap: Vec<&SkillGap> = gaps.iter().filter(|g| g.has_gap()).collect();

    let total_gap_count = with_gap.len();
    let critical_gap_count = gaps.iter().filter(|g| g.priority == Tier::Critical).count();
    let high_priority_count = gaps.iter().filter(|g| g.priority == Tier::High).count();
    let total_affected_employees = with_gap
        .iter()
        .map(|g| u64::from(g.record.affected_employees))
        .sum();
    let average_gap = if total_gap_count > 0 {
        with_gap.iter().map(|g| g.gap).sum::<f64>() / total_gap_count as f64
    } else {
        0.0
    };
    let total_estimated_cost: f64 = gaps.iter().map(|g| g.estimated_cost).sum();
    let potential_impact = match valuation {
        ImpactValuation::RunTotal { amount } => *amount,
        _ => gaps.iter().map(|g| g.potential_impact).sum(),
    };

    let mut by_category: BTreeMap<SkillCategory, CategorySummary> = BTreeMap::new();
    for g in &with_gap {
        let entry = by_category.entry(g.category()).or_default();
        entry.gap_count += 1;
        if g.priority == Tier::Critical {
            entry.critical_count += 1;
        }
        entry.estimated_cost += g.estimated_cost;
    }

    let action_plan = ActionPlan {
        immediate:   action_items(gaps, Tier::Critical, config.max_actions_per_horizon),
        medium_term: action_items(gaps, Tier::High, config.max_actions_per_horizon),
    };

    OrgInsight {
        total_gap_count,
        critical_gap_count,
        high_priority_count,
        total_affected_employees,
        average_gap,
        total_estimated_cost,
        potential_impact,
        roi_ratio: roi_ratio(potential_impact, total_estimated_cost),
        action_plan,
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cost_gives_zero_ratio() {
        assert_eq!(roi_ratio(2_400_000.0, 0.0), 0.0);
        assert_eq!(roi_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn ratio_divides_impact_by_cost() {
        assert!((roi_ratio(300.0, 100.0) - 3.0).abs() < 1e-12);
    }
}
