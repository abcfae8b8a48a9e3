//! Cost & timeline estimator.
//!
//! Cost scales linearly with affected headcount and gap size. Timeline is
//! bucketed from gap magnitude. A non-positive gap costs nothing and gets
//! the configured "no gap" label.

use crate::config::{CostModelConfig, TimelineConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub cost:     f64,
    pub timeline: String,
}

pub fn estimate_cost(gap: f64, affected_employees: u32, cost: &CostModelConfig) -> f64 {
    if gap <= 0.0 {
        return 0.0;
    }
    f64::from(affected_employees) * gap * cost.cost_per_employee_gap_unit
}

/// First bucket whose boundary the gap strictly exceeds. Buckets are
/// validated as strictly descending, so the match is the tightest one.
pub fn estimate_timeline(gap: f64, timeline: &TimelineConfig) -> String {
    timeline
        .buckets
        .iter()
        .find(|b| gap > b.above_gap)
        .map(|b| b.label.clone())
        .unwrap_or_else(|| timeline.no_gap_label.clone())
}

pub fn estimate(
    gap: f64,
    affected_employees: u32,
    cost: &CostModelConfig,
    timeline: &TimelineConfig,
) -> Estimate {
    Estimate {
        cost:     estimate_cost(gap, affected_employees, cost),
        timeline: estimate_timeline(gap, timeline),
    }
}
