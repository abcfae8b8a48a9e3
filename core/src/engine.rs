//! The analysis engine: one pure pass from a skill snapshot to a report.
//!
//! PIPELINE ORDER (fixed):
//!   1. Gap calculator        records → Vec<SkillGap>
//!   2. Department rollup     reads the gap list
//!   3. ROI / insight         reads the gap list
//!   4. Impact consistency    reads the gap list
//!
//! RULES:
//!   - The engine owns only validated configuration. Snapshots are passed in
//!     per call, so one engine can serve any number of runs, from any
//!     number of threads.
//!   - Nothing is cached. Every derived value is recomputed on every pass.
//!   - Steps 2-4 never mutate the gap list.

use crate::{
    config::EngineConfig,
    department_rollup::{self, DepartmentGap},
    error::GapResult,
    gap_calculator::{self, ImpactInconsistency, SkillGap},
    insight::{self, OrgInsight},
    query::{self, GapQuery},
    store::SkillStore,
    types::Tier,
};
use serde::{Deserialize, Serialize};

/// Everything one pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub gaps:                Vec<SkillGap>,
    pub departments:         Vec<DepartmentGap>,
    pub insight:             OrgInsight,
    pub impact_consistency:  Vec<ImpactInconsistency>,
}

impl AnalysisReport {
    pub fn filter(&self, query: &GapQuery) -> Vec<&SkillGap> {
        query.apply(&self.gaps)
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentGap> {
        self.departments.iter().find(|d| d.department == name)
    }
}

#[derive(Debug, Clone)]
pub struct GapEngine {
    config: EngineConfig,
}

impl GapEngine {
    /// Validate the configuration once. A constructed engine never sees a
    /// bad threshold.
    pub fn new(config: EngineConfig) -> GapResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load policy from the data/ directory and build the engine.
    pub fn from_data_dir(data_dir: &str) -> anyhow::Result<Self> {
        let config = EngineConfig::load(data_dir)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute_gaps(&self, store: &SkillStore) -> Vec<SkillGap> {
        gap_calculator::compute_gaps(store.records(), &self.config)
    }

    pub fn rollup_departments(&self, store: &SkillStore, gaps: &[SkillGap]) -> Vec<DepartmentGap> {
        department_rollup::rollup_departments(gaps, store.departments(), &self.config.rollup)
    }

    pub fn summarize(&self, gaps: &[SkillGap]) -> OrgInsight {
        insight::summarize(gaps, &self.config.valuation, &self.config.insight)
    }

    pub fn gap_indicator(&self, gap: f64) -> Tier {
        query::gap_indicator(gap, &self.config.priority)
    }

    /// Run the full pipeline over one snapshot.
    pub fn analyze(&self, store: &SkillStore) -> AnalysisReport {
        let gaps = self.compute_gaps(store);
        let departments = self.rollup_departments(store, &gaps);
        let insight = self.summarize(&gaps);

        let impact_consistency = gap_calculator::impact_inconsistencies(&gaps);
        for finding in &impact_consistency {
            log::warn!(
                "impact: {} '{}' has a larger gap than '{}' but a lower impact ({} < {})",
                finding.category,
                finding.larger_gap,
                finding.smaller_gap,
                finding.larger_tier,
                finding.smaller_tier,
            );
        }

        log::info!(
            "analysis: {} skills, {} gaps ({} critical, {} high), cost={:.0} impact={:.0} roi={:.2}",
            gaps.len(),
            insight.total_gap_count,
            insight.critical_gap_count,
            insight.high_priority_count,
            insight.total_estimated_cost,
            insight.potential_impact,
            insight.roi_ratio,
        );

        AnalysisReport {
            gaps,
            departments,
            insight,
            impact_consistency,
        }
    }
}
