//! Query/filter façade for the dashboard's search box and dropdowns.
//!
//! Stateless: a `GapQuery` is built per call and applied as a stable,
//! order-preserving filter. Criteria compose with AND; an unset criterion
//! (or the "All" dropdown value) matches everything.

use crate::{
    config::PriorityThresholds,
    gap_calculator::{classify_priority, SkillGap},
    types::{SkillCategory, Tier},
};
use serde::{Deserialize, Serialize};

/// Sentinel used by the dashboard dropdowns for "no filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapQuery {
    /// Case-insensitive substring of skill name or category label.
    #[serde(default)]
    pub text:     Option<String>,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub priority: Option<Tier>,
}

impl GapQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: SkillCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn priority(mut self, priority: Tier) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build from raw dashboard values. Empty strings and "All" are unset.
    pub fn from_dashboard(text: &str, category: &str, priority: &str) -> Result<Self, String> {
        Ok(Self {
            text:     Some(text.to_string()),
            category: parse_filter::<SkillCategory>(category)?,
            priority: parse_filter::<Tier>(priority)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.needle().is_none() && self.category.is_none() && self.priority.is_none()
    }

    fn needle(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with(&self, gap: &SkillGap, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let in_name = gap.skill_name().to_lowercase().contains(needle);
            let in_category = gap.category().label().to_lowercase().contains(needle);
            if !in_name && !in_category {
                return false;
            }
        }
        if let Some(category) = self.category {
            if gap.category() != category {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if gap.priority != priority {
                return false;
            }
        }
        true
    }

    pub fn matches(&self, gap: &SkillGap) -> bool {
        self.matches_with(gap, self.needle().as_deref())
    }

    /// Retained gaps in their original relative order.
    pub fn apply<'a>(&self, gaps: &'a [SkillGap]) -> Vec<&'a SkillGap> {
        let needle = self.needle();
        gaps.iter()
            .filter(|g| self.matches_with(g, needle.as_deref()))
            .collect()
    }
}

fn parse_filter<T>(value: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr<Err = String>,
{
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Severity badge for a gap. Shares the priority thresholds so the badge and
/// the priority column never disagree.
pub fn gap_indicator(gap: f64, thresholds: &PriorityThresholds) -> Tier {
    classify_priority(gap, thresholds)
}
