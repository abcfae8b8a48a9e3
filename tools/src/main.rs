//! gap-runner: headless skill-gap analysis runner.
//!
//! Usage:
//!   gap-runner --data-dir ./data
//!   gap-runner --input skills.json --lenient --export report.json
//!   gap-runner --synthetic 60 --departments 6 --seed 12345
//!   gap-runner --search data --category All --priority Critical

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use skillgap_core::{
    engine::{AnalysisReport, GapEngine},
    query::GapQuery,
    sample,
    store::SkillStore,
    training,
    EngineConfig,
};
use std::env;

#[derive(serde::Serialize)]
struct ExportedReport<'a> {
    report_id:       String,
    generated_at:    DateTime<Utc>,
    source:          String,
    query:           Option<&'a GapQuery>,
    filtered_skills: Vec<String>,
    report:          &'a AnalysisReport,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = arg_value(&args, "--data-dir").unwrap_or("./data");
    let input = arg_value(&args, "--input");
    let synthetic = arg_value(&args, "--synthetic").and_then(|v| v.parse::<usize>().ok());
    let seed = parse_arg(&args, "--seed", 42u64);
    let department_count = parse_arg(&args, "--departments", 6usize);
    let lenient = args.iter().any(|a| a == "--lenient");
    let default_policy = args.iter().any(|a| a == "--default-policy");
    let export = arg_value(&args, "--export");

    println!("Skill Gap Analysis: gap-runner");
    println!("  data_dir:  {data_dir}");

    let engine = if default_policy {
        GapEngine::new(EngineConfig::default())?
    } else {
        GapEngine::from_data_dir(data_dir)?
    };

    let (store, source) = match (synthetic, input) {
        (Some(count), _) => {
            println!("  source:    synthetic ({count} skills, {department_count} departments, seed {seed})");
            let store = sample::synthetic_store(seed, count, department_count)?;
            (store, format!("synthetic:{seed}:{count}:{department_count}"))
        }
        (None, Some(path)) => {
            println!("  source:    {path}");
            (load_snapshot(path, lenient)?, path.to_string())
        }
        (None, None) => {
            let path = format!("{data_dir}/skills/skill_inventory.json");
            println!("  source:    {path}");
            let store = load_snapshot(&path, lenient)?;
            (store, path)
        }
    };
    println!();

    let report = engine.analyze(&store);
    print_summary(&engine, &report);

    let query = build_query(&args)?;
    if let Some(q) = &query {
        print_filtered(&report, q);
    }

    if let Some(path) = export {
        let filtered_skills = match &query {
            Some(q) => report.filter(q).iter().map(|g| g.skill_name().to_string()).collect(),
            None => report.gaps.iter().map(|g| g.skill_name().to_string()).collect(),
        };
        let exported = ExportedReport {
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            source,
            query: query.as_ref(),
            filtered_skills,
            report: &report,
        };
        let json = serde_json::to_string_pretty(&exported)?;
        std::fs::write(path, json).with_context(|| format!("Cannot write {path}"))?;
        println!();
        println!("Report exported to {path} (id {})", exported.report_id);
    }

    Ok(())
}

fn load_snapshot(path: &str, lenient: bool) -> Result<SkillStore> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
    if lenient {
        let (store, issues) = SkillStore::from_json_lenient(&json)?;
        if !issues.is_empty() {
            println!("  dropped:   {} invalid input(s)", issues.len());
            for issue in &issues {
                println!("    - {issue}");
            }
        }
        Ok(store)
    } else {
        Ok(SkillStore::from_json(&json)?)
    }
}

fn build_query(args: &[String]) -> Result<Option<GapQuery>> {
    let text = arg_value(args, "--search").unwrap_or("");
    let category = arg_value(args, "--category").unwrap_or("All");
    let priority = arg_value(args, "--priority").unwrap_or("All");
    let query = GapQuery::from_dashboard(text, category, priority).map_err(anyhow::Error::msg)?;
    Ok(if query.is_empty() { None } else { Some(query) })
}

fn print_summary(engine: &GapEngine, report: &AnalysisReport) {
    let insight = &report.insight;

    println!("=== ORGANIZATION SUMMARY ===");
    println!("  skills analysed:    {}", report.gaps.len());
    println!("  skills with a gap:  {}", insight.total_gap_count);
    println!("  critical:           {}", insight.critical_gap_count);
    println!("  high priority:      {}", insight.high_priority_count);
    println!("  employees affected: {}", insight.total_affected_employees);
    println!("  average gap:        {:.2}", insight.average_gap);
    println!("  training cost:      ${:.0}", insight.total_estimated_cost);
    println!("  potential impact:   ${:.0}", insight.potential_impact);
    println!("  ROI ratio:          {:.2}x", insight.roi_ratio);

    println!();
    println!("=== SKILL GAPS ===");
    for g in &report.gaps {
        println!(
            "  {:<24} {:<13} {:>4.1} -> {:>3.1}  gap {:>5.2}  {:<8} impact {:<8} ${:>9.0}  {}",
            g.skill_name(),
            g.category().label(),
            g.record.current_level,
            g.record.required_level,
            g.gap,
            g.priority.label(),
            g.business_impact.label(),
            g.estimated_cost,
            g.timeline,
        );
    }

    println!();
    println!("=== DEPARTMENTS ===");
    if report.departments.is_empty() {
        println!("  (No department inventories supplied)");
    }
    for d in &report.departments {
        println!(
            "  {:<18} gaps {:>2} | critical {:>2} | avg {:.2} | budget ${:.0} | top: {}",
            d.department,
            d.total_gaps,
            d.critical_gaps,
            d.average_gap,
            d.training_budget,
            d.top_skills.join(", "),
        );
    }

    println!();
    println!("=== ACTION PLAN ===");
    let catalog = &engine.config().training;
    for (title, items) in [
        ("Immediate", &insight.action_plan.immediate),
        ("Medium term", &insight.action_plan.medium_term),
    ] {
        println!("  {title}:");
        if items.is_empty() {
            println!("    (none)");
        }
        for item in items {
            let programmes: Vec<&str> = item
                .training
                .iter()
                .map(|id| training::offering_label(catalog, id).unwrap_or(id.as_str()))
                .collect();
            println!(
                "    {} (gap {:.2}, {} employees, {}): {}",
                item.skill_name,
                item.gap,
                item.affected_employees,
                item.timeline,
                programmes.join(", "),
            );
        }
    }

    if !report.impact_consistency.is_empty() {
        println!();
        println!("=== IMPACT CONSISTENCY WARNINGS ===");
        for f in &report.impact_consistency {
            println!(
                "  [{}] {} ({}) has a larger gap than {} ({})",
                f.category, f.larger_gap, f.larger_tier, f.smaller_gap, f.smaller_tier
            );
        }
    }
}

fn print_filtered(report: &AnalysisReport, query: &GapQuery) {
    let matches = report.filter(query);
    println!();
    println!("=== FILTERED ({} of {}) ===", matches.len(), report.gaps.len());
    for g in matches {
        println!(
            "  {:<24} {:<13} gap {:>5.2}  {}",
            g.skill_name(),
            g.category().label(),
            g.gap,
            g.priority.label(),
        );
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
