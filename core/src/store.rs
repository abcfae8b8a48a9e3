//! Skill record store: the validated input snapshot for one analysis run.
//!
//! RULE: Nothing downstream re-checks input ranges. Every record and every
//! department inventory entry is validated here, once, when the store is
//! built. A store that exists is a store the engine can trust.

use crate::{
    error::{GapError, GapResult, ValidationIssue},
    types::{DepartmentName, SkillCategory, SkillName, Tier, LEVEL_MAX, LEVEL_MIN},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One skill's organization-wide proficiency snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub skill_name:         SkillName,
    pub category:           SkillCategory,
    pub current_level:      f64,
    pub required_level:     f64,
    pub affected_employees: u32,
    /// Policy-assigned impact tier. Not derived from the gap.
    #[serde(default)]
    pub business_impact:    Option<Tier>,
    /// Externally modelled value unlocked by closing this gap.
    #[serde(default)]
    pub potential_impact:   Option<f64>,
}

impl SkillRecord {
    pub fn new(
        skill_name: impl Into<SkillName>,
        category: SkillCategory,
        current_level: f64,
        required_level: f64,
        affected_employees: u32,
    ) -> Self {
        Self {
            skill_name: skill_name.into(),
            category,
            current_level,
            required_level,
            affected_employees,
            business_impact: None,
            potential_impact: None,
        }
    }

    pub fn with_business_impact(mut self, tier: Tier) -> Self {
        self.business_impact = Some(tier);
        self
    }

    pub fn with_potential_impact(mut self, amount: f64) -> Self {
        self.potential_impact = Some(amount);
        self
    }
}

/// Record as it arrives from an HR data source. Counts are signed so that a
/// bad source value is reported against its field instead of failing the
/// whole parse.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSkillRecord {
    pub skill_name:         String,
    pub category:           SkillCategory,
    pub current_level:      f64,
    pub required_level:     f64,
    pub affected_employees: i64,
    #[serde(default)]
    pub business_impact:    Option<Tier>,
    #[serde(default)]
    pub potential_impact:   Option<f64>,
}

/// On-disk snapshot layout: records plus department → skill inventories.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSnapshot {
    pub skills: Vec<RawSkillRecord>,
    #[serde(default)]
    pub departments: BTreeMap<DepartmentName, Vec<SkillName>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillStore {
    records:     Vec<SkillRecord>,
    departments: BTreeMap<DepartmentName, Vec<SkillName>>,
}

impl SkillStore {
    /// Build a store, rejecting it if any record or inventory entry fails.
    pub fn load(
        records: Vec<SkillRecord>,
        departments: BTreeMap<DepartmentName, Vec<SkillName>>,
    ) -> GapResult<Self> {
        Self::from_raw(RawSnapshot {
            skills: records.into_iter().map(RawSkillRecord::from).collect(),
            departments,
        })
    }

    /// Build a store, dropping offending records and inventory entries.
    /// Returns the issues so the caller can surface them.
    pub fn load_lenient(
        records: Vec<SkillRecord>,
        departments: BTreeMap<DepartmentName, Vec<SkillName>>,
    ) -> (Self, Vec<ValidationIssue>) {
        Self::from_raw_lenient(RawSnapshot {
            skills: records.into_iter().map(RawSkillRecord::from).collect(),
            departments,
        })
    }

    /// Parse a JSON snapshot (`{"skills": [...], "departments": {...}}`)
    /// and validate it strictly.
    pub fn from_json(json: &str) -> GapResult<Self> {
        let snapshot: RawSnapshot = serde_json::from_str(json)?;
        Self::from_raw(snapshot)
    }

    /// Lenient counterpart of `from_json`: malformed JSON is still an error,
    /// but invalid records are dropped and returned as issues.
    pub fn from_json_lenient(json: &str) -> GapResult<(Self, Vec<ValidationIssue>)> {
        let snapshot: RawSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_raw_lenient(snapshot))
    }

    pub fn from_raw_lenient(snapshot: RawSnapshot) -> (Self, Vec<ValidationIssue>) {
        let (store, issues) = Self::assemble(snapshot.skills, snapshot.departments);
        for issue in &issues {
            log::warn!("store: dropped input: {issue}");
        }
        (store, issues)
    }

    pub fn from_raw(snapshot: RawSnapshot) -> GapResult<Self> {
        let (store, issues) = Self::assemble(snapshot.skills, snapshot.departments);
        if issues.is_empty() {
            Ok(store)
        } else {
            Err(GapError::Validation { issues })
        }
    }

    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn departments(&self) -> &BTreeMap<DepartmentName, Vec<SkillName>> {
        &self.departments
    }

    pub fn record(&self, skill_name: &str) -> Option<&SkillRecord> {
        self.records.iter().find(|r| r.skill_name == skill_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn assemble(
        raw: Vec<RawSkillRecord>,
        departments: BTreeMap<DepartmentName, Vec<SkillName>>,
    ) -> (Self, Vec<ValidationIssue>) {
        let mut issues = Vec::new();
        let mut records = Vec::with_capacity(raw.len());
        let mut seen: HashSet<String> = HashSet::new();

        for (index, candidate) in raw.into_iter().enumerate() {
            match validate_record(index, candidate, &seen) {
                Ok(record) => {
                    seen.insert(record.skill_name.clone());
                    records.push(record);
                }
                Err(issue) => issues.push(issue),
            }
        }

        let mut inventories = BTreeMap::new();
        for (department, skills) in departments {
            let mut kept = Vec::with_capacity(skills.len());
            for (position, skill) in skills.into_iter().enumerate() {
                if !seen.contains(&skill) {
                    issues.push(ValidationIssue {
                        index:      position,
                        skill_name: skill,
                        field:      "departments",
                        reason:     format!("department '{department}' lists a skill with no valid record"),
                    });
                } else if !kept.contains(&skill) {
                    kept.push(skill);
                }
            }
            inventories.insert(department, kept);
        }

        log::debug!(
            "store: {} records, {} departments, {} issues",
            records.len(),
            inventories.len(),
            issues.len()
        );
        (Self { records, departments: inventories }, issues)
    }
}

impl From<SkillRecord> for RawSkillRecord {
    fn from(r: SkillRecord) -> Self {
        Self {
            skill_name:         r.skill_name,
            category:           r.category,
            current_level:      r.current_level,
            required_level:     r.required_level,
            affected_employees: i64::from(r.affected_employees),
            business_impact:    r.business_impact,
            potential_impact:   r.potential_impact,
        }
    }
}

fn validate_record(
    index: usize,
    raw: RawSkillRecord,
    seen: &HashSet<String>,
) -> Result<SkillRecord, ValidationIssue> {
    let issue = |field: &'static str, reason: String| ValidationIssue {
        index,
        skill_name: raw.skill_name.clone(),
        field,
        reason,
    };

    if raw.skill_name.trim().is_empty() {
        return Err(issue("skill_name", "must not be empty".into()));
    }
    if seen.contains(&raw.skill_name) {
        return Err(issue("skill_name", "duplicate skill name in snapshot".into()));
    }
    for (field, level) in [
        ("current_level", raw.current_level),
        ("required_level", raw.required_level),
    ] {
        if !level.is_finite() || !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
            return Err(issue(
                field,
                format!("{level} is outside the proficiency scale [{LEVEL_MIN}, {LEVEL_MAX}]"),
            ));
        }
    }
    let affected_employees = u32::try_from(raw.affected_employees).map_err(|_| {
        issue(
            "affected_employees",
            format!("{} is not a valid non-negative employee count", raw.affected_employees),
        )
    })?;
    if let Some(amount) = raw.potential_impact {
        if !amount.is_finite() || amount < 0.0 {
            return Err(issue(
                "potential_impact",
                format!("{amount} must be a finite non-negative amount"),
            ));
        }
    }

    Ok(SkillRecord {
        skill_name: raw.skill_name,
        category: raw.category,
        current_level: raw.current_level,
        required_level: raw.required_level,
        affected_employees,
        business_impact: raw.business_impact,
        potential_impact: raw.potential_impact,
    })
}
