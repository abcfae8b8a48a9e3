//! Sample snapshots: the dashboard's reference organization and a seeded
//! synthetic generator for larger runs.
//!
//! Both return a validated SkillStore. The engine never reaches for these
//! on its own; callers pass the store in like any other snapshot.

use crate::{
    error::GapResult,
    rng::SampleRng,
    store::{SkillRecord, SkillStore},
    types::{DepartmentName, SkillCategory, SkillName, Tier, LEVEL_MAX},
};
use std::collections::BTreeMap;

/// The ten skills shown on the skill-gap dashboard. Business impact and
/// potential impact are hand-assigned policy values (2.4M in total).
pub fn reference_records() -> Vec<SkillRecord> {
    use SkillCategory::*;
    let r = |name: &str, category, current, required, affected, impact, value| {
        SkillRecord::new(name, category, current, required, affected)
            .with_business_impact(impact)
            .with_potential_impact(value)
    };
    vec![
        r("Data Analysis",         Analytics,     2.9, 4.2, 45, Tier::Critical, 480_000.0),
        r("Cybersecurity",         Technical,     2.8, 4.5, 32, Tier::Critical, 650_000.0),
        r("Cloud Computing",       Technical,     2.5, 4.0, 38, Tier::High,     420_000.0),
        r("Project Management",    Operations,    3.8, 4.2, 28, Tier::Medium,   120_000.0),
        r("Digital Marketing",     Marketing,     3.0, 4.0, 22, Tier::High,     260_000.0),
        r("Leadership",            Leadership,    3.4, 4.0, 18, Tier::High,     200_000.0),
        r("Machine Learning",      Technical,     1.8, 3.6, 15, Tier::High,     210_000.0),
        r("Public Speaking",       Communication, 3.6, 3.9, 40, Tier::Low,       30_000.0),
        r("Regulatory Compliance", Compliance,    4.3, 4.0, 25, Tier::Low,            0.0),
        r("Data Visualization",    Analytics,     3.1, 3.9, 20, Tier::Medium,    30_000.0),
    ]
}

pub fn reference_departments() -> BTreeMap<DepartmentName, Vec<SkillName>> {
    let dept = |name: &str, skills: &[&str]| -> (DepartmentName, Vec<SkillName>) {
        (name.to_string(), skills.iter().map(|s| s.to_string()).collect())
    };
    [
        dept("Engineering", &["Cybersecurity", "Cloud Computing", "Machine Learning", "Data Analysis"]),
        dept("Marketing", &["Digital Marketing", "Data Analysis", "Data Visualization", "Public Speaking"]),
        dept("Operations", &["Project Management", "Regulatory Compliance", "Leadership"]),
        dept("Finance", &["Data Analysis", "Regulatory Compliance", "Data Visualization"]),
        dept("Human Resources", &["Leadership", "Public Speaking"]),
        dept("Legal", &["Regulatory Compliance"]),
    ]
    .into()
}

pub fn reference_store() -> GapResult<SkillStore> {
    SkillStore::load(reference_records(), reference_departments())
}

// ── Synthetic organizations ──────────────────────────────────────────────────

fn skill_pool() -> &'static [(&'static str, SkillCategory)] {
    use SkillCategory::*;
    &[
        ("Data Analysis", Analytics),
        ("Data Visualization", Analytics),
        ("Statistical Modeling", Analytics),
        ("Forecasting", Analytics),
        ("Cybersecurity", Technical),
        ("Cloud Computing", Technical),
        ("Machine Learning", Technical),
        ("API Design", Technical),
        ("DevOps Automation", Technical),
        ("Database Administration", Technical),
        ("Leadership", Leadership),
        ("Change Management", Leadership),
        ("Coaching", Leadership),
        ("Strategic Planning", Leadership),
        ("Digital Marketing", Marketing),
        ("Content Strategy", Marketing),
        ("SEO", Marketing),
        ("Brand Management", Marketing),
        ("Public Speaking", Communication),
        ("Business Writing", Communication),
        ("Negotiation", Communication),
        ("Project Management", Operations),
        ("Process Improvement", Operations),
        ("Vendor Management", Operations),
        ("Regulatory Compliance", Compliance),
        ("Data Privacy", Compliance),
        ("Risk Assessment", Compliance),
    ]
}

const DEPARTMENT_POOL: &[&str] = &[
    "Engineering",
    "Marketing",
    "Operations",
    "Finance",
    "Human Resources",
    "Sales",
    "Legal",
    "Customer Success",
];

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Generate a deterministic synthetic organization.
///
/// Skill names come from a curated pool; once it is exhausted, names repeat
/// with a numeric suffix so keys stay unique. Each department is attributed
/// roughly a third of the skills.
pub fn synthetic_store(seed: u64, skill_count: usize, department_count: usize) -> GapResult<SkillStore> {
    let mut rng = SampleRng::new(seed);
    let pool = skill_pool();

    let mut records = Vec::with_capacity(skill_count);
    for i in 0..skill_count {
        let (base, category) = pool[i % pool.len()];
        let name = match i / pool.len() {
            0 => base.to_string(),
            n => format!("{base} {}", n + 1),
        };
        let current = round1(rng.range_f64(1.0, 4.6));
        let required = round1((current + rng.range_f64(-0.6, 2.2)).clamp(0.0, LEVEL_MAX));
        let affected = 5 + rng.next_u64_below(116) as u32;
        let impact = *rng.pick(&Tier::ALL);
        let mut record = SkillRecord::new(name, category, current, required, affected)
            .with_business_impact(impact);
        if rng.chance(0.8) {
            record = record.with_potential_impact((rng.range_f64(10.0, 700.0) * 1_000.0).round());
        }
        records.push(record);
    }

    let mut departments = BTreeMap::new();
    for department in DEPARTMENT_POOL.iter().take(department_count) {
        let skills: Vec<SkillName> = records
            .iter()
            .filter(|_| rng.chance(0.35))
            .map(|r| r.skill_name.clone())
            .collect();
        departments.insert(department.to_string(), skills);
    }

    log::debug!(
        "sample: seed={seed} generated {} skills across {} departments",
        records.len(),
        departments.len()
    );
    SkillStore::load(records, departments)
}
