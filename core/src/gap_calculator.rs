//! Gap calculator: turns validated skill records into classified gaps.
//!
//! For each record, in input order:
//!   1. gap = required_level - current_level (never clamped), snapped to
//!      GAP_SCALE so a one-decimal gap lands exactly on its threshold
//!   2. priority from the configured thresholds
//!   3. business impact per the impact policy
//!   4. cost, timeline and training recommendations
//!   5. potential impact per the valuation source
//!
//! A gap at or below zero is always Low on both tier scales.

use crate::{
    config::{EngineConfig, ImpactPolicy, ImpactValuation, PriorityThresholds},
    estimator,
    store::SkillRecord,
    training,
    types::{OfferingId, SkillCategory, SkillName, Tier},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub record:               SkillRecord,
    pub gap:                  f64,
    pub priority:             Tier,
    pub business_impact:      Tier,
    pub recommended_training: Vec<OfferingId>,
    pub estimated_cost:       f64,
    pub timeline:             String,
    /// Value attributed to this skill. Zero under a run-total valuation.
    pub potential_impact:     f64,
}

impl SkillGap {
    pub fn skill_name(&self) -> &str {
        &self.record.skill_name
    }

    pub fn category(&self) -> SkillCategory {
        self.record.category
    }

    /// True when the organization is below the required level.
    pub fn has_gap(&self) -> bool {
        self.gap > 0.0
    }
}

/// A record whose supplied impact tier runs against the gap ordering of
/// another skill in the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactInconsistency {
    pub category:     SkillCategory,
    /// The skill with the larger gap but the lower impact tier.
    pub larger_gap:   SkillName,
    pub larger_tier:  Tier,
    pub smaller_gap:  SkillName,
    pub smaller_tier: Tier,
}

/// Gaps are resolved to 1e-9 of a proficiency point.
pub const GAP_SCALE: f64 = 1e9;

/// Remove float noise from a level difference. 2.2 - 1.4 is
/// 0.8000000000000003 in f64; snapped, it compares equal to 0.8.
pub fn snap_gap(raw: f64) -> f64 {
    (raw * GAP_SCALE).round() / GAP_SCALE
}

pub fn classify_priority(gap: f64, thresholds: &PriorityThresholds) -> Tier {
    if gap > thresholds.critical {
        Tier::Critical
    } else if gap > thresholds.high {
        Tier::High
    } else if gap > thresholds.medium {
        Tier::Medium
    } else {
        Tier::Low
    }
}

fn resolve_business_impact(record: &SkillRecord, gap: f64, config: &EngineConfig) -> Tier {
    if gap <= 0.0 {
        return Tier::Low;
    }
    let derived = classify_priority(gap, &config.priority);
    match config.impact_policy {
        ImpactPolicy::Supplied => record.business_impact.unwrap_or(derived),
        ImpactPolicy::Derived  => derived,
    }
}

fn resolve_potential_impact(record: &SkillRecord, gap: f64, valuation: &ImpactValuation) -> f64 {
    match valuation {
        ImpactValuation::PerSkill => record.potential_impact.unwrap_or(0.0),
        ImpactValuation::PerGapUnit { value_per_employee_gap_unit } => {
            if gap <= 0.0 {
                0.0
            } else {
                f64::from(record.affected_employees) * gap * value_per_employee_gap_unit
            }
        }
        ImpactValuation::RunTotal { .. } => 0.0,
    }
}

pub fn compute_gap(record: &SkillRecord, config: &EngineConfig) -> SkillGap {
    let gap = snap_gap(record.required_level - record.current_level);
    let priority = classify_priority(gap, &config.priority);
    let business_impact = resolve_business_impact(record, gap, config);
    let estimate = estimator::estimate(
        gap,
        record.affected_employees,
        &config.cost,
        &config.timeline,
    );
    let recommended_training = training::recommend(record.category, gap, &config.training);
    let potential_impact = resolve_potential_impact(record, gap, &config.valuation);

    log::debug!(
        "gap_calculator: {} gap={gap:.2} priority={priority} impact={business_impact} cost={:.0}",
        record.skill_name,
        estimate.cost,
    );

    SkillGap {
        record: record.clone(),
        gap,
        priority,
        business_impact,
        recommended_training,
        estimated_cost: estimate.cost,
        timeline: estimate.timeline,
        potential_impact,
    }
}

/// One SkillGap per record, preserving input order.
pub fn compute_gaps(records: &[SkillRecord], config: &EngineConfig) -> Vec<SkillGap> {
    records.iter().map(|r| compute_gap(r, config)).collect()
}

/// Pairs within a category where a strictly larger gap carries a strictly
/// lower impact tier. Output is sorted for stable reporting.
pub fn impact_inconsistencies(gaps: &[SkillGap]) -> Vec<ImpactInconsistency> {
    let mut found = Vec::new();
    for a in gaps {
        for b in gaps {
            if a.category() == b.category()
                && a.gap > b.gap
                && a.business_impact < b.business_impact
            {
                found.push(ImpactInconsistency {
                    category:     a.category(),
                    larger_gap:   a.skill_name().to_string(),
                    larger_tier:  a.business_impact,
                    smaller_gap:  b.skill_name().to_string(),
                    smaller_tier: b.business_impact,
                });
            }
        }
    }
    found.sort_by(|x, y| {
        (x.category, &x.larger_gap, &x.smaller_gap).cmp(&(y.category, &y.larger_gap, &y.smaller_gap))
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive_lower_bounds() {
        let t = PriorityThresholds::default();
        assert_eq!(classify_priority(1.51, &t), Tier::Critical);
        assert_eq!(classify_priority(1.5, &t), Tier::High);
        assert_eq!(classify_priority(0.81, &t), Tier::High);
        assert_eq!(classify_priority(0.8, &t), Tier::Medium);
        assert_eq!(classify_priority(0.31, &t), Tier::Medium);
        assert_eq!(classify_priority(0.3, &t), Tier::Low);
        assert_eq!(classify_priority(-2.0, &t), Tier::Low);
    }

    #[test]
    fn snapped_gaps_sit_on_their_thresholds() {
        let t = PriorityThresholds::default();
        assert_eq!(snap_gap(2.2 - 1.4), 0.8);
        assert_eq!(snap_gap(2.2 - 0.7), 1.5);
        assert_eq!(snap_gap(0.4 - 0.1), 0.3);
        assert_eq!(classify_priority(snap_gap(2.2 - 1.4), &t), Tier::Medium);
        assert_eq!(snap_gap(4.0 - 4.3), -0.3);
    }

    #[test]
    fn run_total_valuation_attributes_nothing_per_skill() {
        let record = SkillRecord::new("SQL", SkillCategory::Technical, 2.0, 4.0, 10)
            .with_potential_impact(50_000.0);
        let v = ImpactValuation::RunTotal { amount: 1_000_000.0 };
        assert_eq!(resolve_potential_impact(&record, 2.0, &v), 0.0);
    }
}
