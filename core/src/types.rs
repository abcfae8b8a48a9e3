//! Shared primitive types used across the entire engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A skill's stable key within one snapshot.
pub type SkillName = String;

/// A department name as it appears in the skill inventories.
pub type DepartmentName = String;

/// Identifier of a training offering in the catalog.
pub type OfferingId = String;

/// Lowest and highest points of the proficiency scale.
pub const LEVEL_MIN: f64 = 0.0;
pub const LEVEL_MAX: f64 = 5.0;

/// Ordinal four-tier scale shared by priority, business impact and the
/// dashboard's gap indicator. Declaration order is the tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
    Critical,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Low, Tier::Medium, Tier::High, Tier::Critical];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Low      => "Low",
            Tier::Medium   => "Medium",
            Tier::High     => "High",
            Tier::Critical => "Critical",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tier '{s}'"))
    }
}

/// Skill families used by the dashboard's category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Leadership,
    Marketing,
    Analytics,
    Communication,
    Operations,
    Compliance,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Technical,
        SkillCategory::Leadership,
        SkillCategory::Marketing,
        SkillCategory::Analytics,
        SkillCategory::Communication,
        SkillCategory::Operations,
        SkillCategory::Compliance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical     => "Technical",
            SkillCategory::Leadership    => "Leadership",
            SkillCategory::Marketing     => "Marketing",
            SkillCategory::Analytics     => "Analytics",
            SkillCategory::Communication => "Communication",
            SkillCategory::Operations    => "Operations",
            SkillCategory::Compliance    => "Compliance",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown skill category '{s}'"))
    }
}
