//! Shared fixtures for integration tests.

#![allow(dead_code)]

use skillgap_core::{
    engine::{AnalysisReport, GapEngine},
    sample,
    store::{SkillRecord, SkillStore},
    EngineConfig,
};
use std::collections::BTreeMap;

pub const EPS: f64 = 1e-9;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn engine() -> GapEngine {
    init_logging();
    GapEngine::new(EngineConfig::default()).expect("default config is valid")
}

pub fn reference_report() -> AnalysisReport {
    let store = sample::reference_store().expect("reference sample is valid");
    engine().analyze(&store)
}

pub fn store_of(records: Vec<SkillRecord>) -> SkillStore {
    SkillStore::load(records, BTreeMap::new()).expect("valid records")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
