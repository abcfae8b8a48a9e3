//! Skill gap analysis and training-recommendation engine.
//!
//! A pure, synchronous computation over an in-memory snapshot of an
//! organization's skill levels: gaps, tiers, cost and timeline estimates,
//! department rollups, ROI insight and a filterable view for dashboards.

pub mod config;
pub mod department_rollup;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod gap_calculator;
pub mod insight;
pub mod query;
pub mod rng;
pub mod sample;
pub mod store;
pub mod training;
pub mod types;

pub use config::EngineConfig;
pub use engine::{AnalysisReport, GapEngine};
pub use error::{GapError, GapResult, ValidationIssue};
pub use query::GapQuery;
pub use store::{SkillRecord, SkillStore};
pub use types::{SkillCategory, Tier};
