//! Training recommendations from the configured catalog.
//!
//! An offering is eligible when it covers the skill's category and the gap
//! exceeds its `min_gap`. Eligible offerings keep catalog order, so the
//! catalog itself encodes which programme is preferred.

use crate::{
    config::{TrainingConfig, TrainingOffering},
    types::{OfferingId, SkillCategory},
};

fn is_eligible(offering: &TrainingOffering, category: SkillCategory, gap: f64) -> bool {
    offering.categories.contains(&category) && gap > offering.min_gap
}

pub fn recommend(category: SkillCategory, gap: f64, training: &TrainingConfig) -> Vec<OfferingId> {
    if gap <= 0.0 {
        return Vec::new();
    }
    training
        .catalog
        .iter()
        .filter(|o| is_eligible(o, category, gap))
        .take(training.max_recommendations)
        .map(|o| o.offering_id.clone())
        .collect()
}

/// Look up an offering's display label.
pub fn offering_label<'a>(training: &'a TrainingConfig, offering_id: &str) -> Option<&'a str> {
    training
        .catalog
        .iter()
        .find(|o| o.offering_id == offering_id)
        .map(|o| o.label.as_str())
}
