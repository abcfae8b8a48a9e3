//! Engine policy configuration.
//!
//! Every threshold, rate and catalog the engine applies lives here as a
//! named, serde-loadable value with a documented default. Nothing in the
//! calculation modules hard-codes policy numbers.
//!
//! Files under the data directory:
//!   policy/gap_policy.json          thresholds, cost, timeline, rollup, valuation
//!   training/training_catalog.json  training offerings

use crate::{
    error::{GapError, GapResult},
    types::{SkillCategory, LEVEL_MAX},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ── Priority ─────────────────────────────────────────────────────────────────

/// Lower bounds (exclusive) of each priority tier above Low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityThresholds {
    /// gap > critical → Critical. Default 1.5.
    pub critical: f64,
    /// gap > high → High. Default 0.8.
    pub high: f64,
    /// gap > medium → Medium. Default 0.3.
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self { critical: 1.5, high: 0.8, medium: 0.3 }
    }
}

// ── Business impact ──────────────────────────────────────────────────────────

/// Where a gap's business-impact tier comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactPolicy {
    /// Use the tier supplied on the record; derive from the gap when absent.
    #[default]
    Supplied,
    /// Ignore supplied tiers and use the priority thresholds.
    Derived,
}

// ── Cost & timeline ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelConfig {
    /// Training spend per affected employee per point of gap. Default 2,000.
    pub cost_per_employee_gap_unit: f64,
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self { cost_per_employee_gap_unit: 2_000.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// Applies when gap is strictly greater than this value.
    pub above_gap: f64,
    pub label:     String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Ordered by `above_gap`, largest first. The first matching bucket wins.
    pub buckets: Vec<TimelineBucket>,
    /// Label used when no bucket matches (gap at or below every boundary).
    pub no_gap_label: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        let bucket = |above_gap: f64, label: &str| TimelineBucket {
            above_gap,
            label: label.into(),
        };
        Self {
            buckets: vec![
                bucket(1.5, "6-8 months"),
                bucket(0.8, "3-6 months"),
                bucket(0.3, "2-4 months"),
                bucket(0.0, "1-2 months"),
            ],
            no_gap_label: "No training required".into(),
        }
    }
}

// ── Rollup & insight ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupConfig {
    /// Number of skills listed per department. Default 3.
    pub top_skills_count: usize,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self { top_skills_count: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Cap on each action-plan horizon. `None` lists every qualifying skill.
    #[serde(default)]
    pub max_actions_per_horizon: Option<usize>,
}

/// How the value unlocked by closing gaps is sourced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImpactValuation {
    /// Sum the `potential_impact` supplied on each record (absent = 0).
    #[default]
    PerSkill,
    /// affected_employees × gap × value, per skill.
    PerGapUnit { value_per_employee_gap_unit: f64 },
    /// A single externally modelled figure for the whole run.
    RunTotal { amount: f64 },
}

// ── Training catalog ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOffering {
    pub offering_id: String,
    pub label:       String,
    pub categories:  Vec<SkillCategory>,
    /// Offered only when the gap is strictly greater than this.
    #[serde(default)]
    pub min_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub max_recommendations: usize,
    pub catalog: Vec<TrainingOffering>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        use SkillCategory::*;
        let offering = |id: &str, label: &str, categories: &[SkillCategory], min_gap: f64| {
            TrainingOffering {
                offering_id: id.into(),
                label:       label.into(),
                categories:  categories.to_vec(),
                min_gap,
            }
        };
        Self {
            max_recommendations: 3,
            catalog: vec![
                offering("advanced-analytics-bootcamp", "Advanced Analytics Bootcamp", &[Analytics], 0.8),
                offering("data-visualization-workshop", "Data Visualization Workshop", &[Analytics], 0.3),
                offering("security-incident-response-lab", "Security Incident Response Lab", &[Technical], 1.5),
                offering("cloud-architecture-certification", "Cloud Architecture Certification", &[Technical], 0.8),
                offering("secure-engineering-fundamentals", "Secure Engineering Fundamentals", &[Technical], 0.0),
                offering("sql-python-for-analysts", "SQL & Python for Analysts", &[Analytics, Technical], 0.0),
                offering("leadership-development-program", "Leadership Development Program", &[Leadership], 0.8),
                offering("coaching-essentials", "Coaching Essentials", &[Leadership, Communication], 0.0),
                offering("digital-marketing-certificate", "Digital Marketing Certificate", &[Marketing], 0.0),
                offering("marketing-analytics-workshop", "Marketing Analytics Workshop", &[Marketing], 0.5),
                offering("pmp-exam-prep", "PMP Exam Preparation", &[Operations], 0.8),
                offering("agile-delivery-foundations", "Agile Delivery Foundations", &[Operations], 0.0),
                offering("business-writing", "Business Writing", &[Communication], 0.0),
                offering("regulatory-compliance-essentials", "Regulatory Compliance Essentials", &[Compliance], 0.0),
            ],
        }
    }
}

// ── File shapes ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct GapPolicyFile {
    priority:      PriorityThresholds,
    impact_policy: ImpactPolicy,
    cost:          CostModelConfig,
    timeline:      TimelineConfig,
    rollup:        RollupConfig,
    #[serde(default)]
    insight:       InsightConfig,
    valuation:     ImpactValuation,
}

#[derive(Debug, Clone, Deserialize)]
struct TrainingCatalogFile {
    max_recommendations: usize,
    offerings:           Vec<TrainingOffering>,
}

// ── EngineConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub priority:      PriorityThresholds,
    pub impact_policy: ImpactPolicy,
    pub cost:          CostModelConfig,
    pub timeline:      TimelineConfig,
    pub rollup:        RollupConfig,
    pub insight:       InsightConfig,
    pub valuation:     ImpactValuation,
    pub training:      TrainingConfig,
}

impl EngineConfig {
    /// Load from the data/ directory and validate.
    /// In tests, use EngineConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let policy_path = format!("{data_dir}/policy/gap_policy.json");
        let policy_content = std::fs::read_to_string(&policy_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {policy_path}: {e}"))?;
        let policy: GapPolicyFile = serde_json::from_str(&policy_content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {policy_path}: {e}"))?;

        let training_path = format!("{data_dir}/training/training_catalog.json");
        let training_content = std::fs::read_to_string(&training_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {training_path}: {e}"))?;
        let training_file: TrainingCatalogFile = serde_json::from_str(&training_content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {training_path}: {e}"))?;

        let config = Self {
            priority:      policy.priority,
            impact_policy: policy.impact_policy,
            cost:          policy.cost,
            timeline:      policy.timeline,
            rollup:        policy.rollup,
            insight:       policy.insight,
            valuation:     policy.valuation,
            training: TrainingConfig {
                max_recommendations: training_file.max_recommendations,
                catalog:             training_file.offerings,
            },
        };
        config.validate()?;
        log::info!(
            "loaded engine config from {data_dir} ({} training offerings)",
            config.training.catalog.len()
        );
        Ok(config)
    }

    /// Check every policy value once, up front.
    pub fn validate(&self) -> GapResult<()> {
        let p = &self.priority;
        for (field, value) in [
            ("priority.critical", p.critical),
            ("priority.high", p.high),
            ("priority.medium", p.medium),
        ] {
            if !value.is_finite() {
                return Err(GapError::config(field, format!("must be a finite number, got {value}")));
            }
        }
        if p.medium < 0.0 {
            return Err(GapError::config(
                "priority.medium",
                format!("must be >= 0 so that a non-positive gap stays Low, got {}", p.medium),
            ));
        }
        if p.high <= p.medium {
            return Err(GapError::config(
                "priority.high",
                format!("must be greater than priority.medium ({} <= {})", p.high, p.medium),
            ));
        }
        if p.critical <= p.high {
            return Err(GapError::config(
                "priority.critical",
                format!("must be greater than priority.high ({} <= {})", p.critical, p.high),
            ));
        }
        if p.critical >= LEVEL_MAX {
            return Err(GapError::config(
                "priority.critical",
                format!("must be below the scale maximum {LEVEL_MAX}, got {}", p.critical),
            ));
        }

        let rate = self.cost.cost_per_employee_gap_unit;
        if !rate.is_finite() || rate < 0.0 {
            return Err(GapError::config(
                "cost.cost_per_employee_gap_unit",
                format!("must be a finite non-negative amount, got {rate}"),
            ));
        }

        self.validate_timeline()?;

        if self.rollup.top_skills_count == 0 {
            return Err(GapError::config("rollup.top_skills_count", "must be at least 1"));
        }
        if self.insight.max_actions_per_horizon == Some(0) {
            return Err(GapError::config(
                "insight.max_actions_per_horizon",
                "must be at least 1 when set",
            ));
        }

        match self.valuation {
            ImpactValuation::PerSkill => {}
            ImpactValuation::PerGapUnit { value_per_employee_gap_unit: v } => {
                if !v.is_finite() || v < 0.0 {
                    return Err(GapError::config(
                        "valuation.value_per_employee_gap_unit",
                        format!("must be a finite non-negative amount, got {v}"),
                    ));
                }
            }
            ImpactValuation::RunTotal { amount } => {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(GapError::config(
                        "valuation.amount",
                        format!("must be a finite non-negative amount, got {amount}"),
                    ));
                }
            }
        }

        self.validate_training()
    }

    fn validate_timeline(&self) -> GapResult<()> {
        let buckets = &self.timeline.buckets;
        if buckets.is_empty() {
            return Err(GapError::config("timeline.buckets", "at least one bucket is required"));
        }
        for (i, bucket) in buckets.iter().enumerate() {
            if !bucket.above_gap.is_finite() {
                return Err(GapError::config(
                    "timeline.buckets",
                    format!("bucket {i} boundary must be finite, got {}", bucket.above_gap),
                ));
            }
            if bucket.label.trim().is_empty() {
                return Err(GapError::config("timeline.buckets", format!("bucket {i} has an empty label")));
            }
            if i > 0 && bucket.above_gap >= buckets[i - 1].above_gap {
                return Err(GapError::config(
                    "timeline.buckets",
                    format!(
                        "boundaries must be strictly descending: bucket {i} ({}) >= bucket {} ({})",
                        bucket.above_gap,
                        i - 1,
                        buckets[i - 1].above_gap
                    ),
                ));
            }
        }
        if buckets[buckets.len() - 1].above_gap < 0.0 {
            return Err(GapError::config(
                "timeline.buckets",
                "the lowest boundary must be >= 0 so that a non-positive gap gets no training timeline",
            ));
        }
        if self.timeline.no_gap_label.trim().is_empty() {
            return Err(GapError::config("timeline.no_gap_label", "must not be empty"));
        }
        Ok(())
    }

    fn validate_training(&self) -> GapResult<()> {
        let mut seen = HashSet::new();
        for offering in &self.training.catalog {
            if offering.offering_id.trim().is_empty() {
                return Err(GapError::config("training.catalog", "offering with an empty id"));
            }
            if !seen.insert(offering.offering_id.as_str()) {
                return Err(GapError::config(
                    "training.catalog",
                    format!("duplicate offering id '{}'", offering.offering_id),
                ));
            }
            if offering.categories.is_empty() {
                return Err(GapError::config(
                    "training.catalog",
                    format!("offering '{}' lists no categories", offering.offering_id),
                ));
            }
            if !offering.min_gap.is_finite() || offering.min_gap < 0.0 {
                return Err(GapError::config(
                    "training.catalog",
                    format!(
                        "offering '{}' min_gap must be a finite value >= 0, got {}",
                        offering.offering_id, offering.min_gap
                    ),
                ));
            }
        }
        Ok(())
    }
}
