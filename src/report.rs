//! Output formatting for pipeline results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::OptimizationReport;
use crate::score::KeywordHit;

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub overall_score: i32,
    pub ats_compatibility_score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub keyword_analysis: Vec<KeywordHit>,
    pub formatting_issues: Vec<String>,
    /// Sorted for deterministic output; the underlying collection is a set.
    pub suggested_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_specific_suggestions: Vec<String>,
    pub optimized_cv: String,
}

impl JsonReport {
    pub fn from_report(report: &OptimizationReport) -> Self {
        let mut suggested_keywords: Vec<String> =
            report.suggested_keywords.iter().cloned().collect();
        suggested_keywords.sort_unstable();

        JsonReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            overall_score: report.analysis.overall_score,
            ats_compatibility_score: report.analysis.ats_compatibility_score,
            strengths: report.analysis.strengths.clone(),
            weaknesses: report.analysis.weaknesses.clone(),
            recommendations: report.analysis.recommendations.clone(),
            keyword_analysis: report.analysis.keyword_analysis.clone(),
            formatting_issues: report.analysis.formatting_issues.clone(),
            suggested_keywords,
            job_specific_suggestions: report.job_specific_suggestions.clone(),
            optimized_cv: report.optimized_cv.clone(),
        }
    }
}

/// Write results in JSON format.
pub fn write_json(report: &OptimizationReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::from_report(report))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(report: &OptimizationReport) {
    // Header
    println!();
    print!("  ");
    print!("{}", "cvpolish".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    write_scores(report);
    println!();

    write_list("Strengths", &report.analysis.strengths, "+");
    println!();

    write_list("Weaknesses", &report.analysis.weaknesses, "-");
    println!();

    if !report.analysis.formatting_issues.is_empty() {
        write_list("ATS formatting issues", &report.analysis.formatting_issues, "!");
        println!();
    }

    write_recommendations(&report.analysis.recommendations);
    println!();

    if !report.analysis.keyword_analysis.is_empty() {
        write_keyword_matches(&report.analysis.keyword_analysis);
        println!();
    }

    if !report.suggested_keywords.is_empty() {
        write_suggested_keywords(report);
        println!();
    }

    if !report.job_specific_suggestions.is_empty() {
        write_list(
            "Job-specific suggestions",
            &report.job_specific_suggestions,
            "*",
        );
        println!();
    }

    write_next_steps();
    println!();
}

fn write_scores(report: &OptimizationReport) {
    print!("  {}", "Overall quality:    ".dimmed());
    write_colored_score(report.analysis.overall_score);
    println!("/100");

    print!("  {}", "ATS compatibility:  ".dimmed());
    write_colored_score(report.analysis.ats_compatibility_score);
    println!("/100");

    let verdict = match report.analysis.overall_score {
        s if s >= 80 => "Excellent - your CV is in great shape".green(),
        s if s >= 60 => "Good, but there is room for improvement".yellow(),
        _ => "Needs significant improvements to be competitive".red(),
    };
    println!("  {}", verdict);
}

fn write_colored_score(s: i32) {
    match s {
        s if s >= 80 => print!("{}", s.to_string().green().bold()),
        s if s >= 60 => print!("{}", s.to_string().yellow()),
        _ => print!("{}", s.to_string().red()),
    }
}

fn write_list(title: &str, items: &[String], marker: &str) {
    println!("  {} ({}):", title.bold(), items.len());
    for item in items {
        println!("    {} {}", marker.dimmed(), item);
    }
}

fn write_recommendations(recommendations: &[String]) {
    println!("  {} ({}):", "Recommendations".bold(), recommendations.len());
    for (i, rec) in recommendations.iter().enumerate() {
        println!("    {}. {}", i + 1, rec);
    }
}

fn write_keyword_matches(hits: &[KeywordHit]) {
    println!("  {} ({}):", "Keyword matches".bold(), hits.len());

    // Sort by occurrence count descending, show the top ten.
    let mut sorted: Vec<&KeywordHit> = hits.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    for hit in sorted.iter().take(10) {
        let plural = if hit.count != 1 { "s" } else { "" };
        println!(
            "    {} {} occurrence{}",
            format!("{:<20}", hit.keyword).blue(),
            hit.count,
            plural
        );
    }
}

fn write_suggested_keywords(report: &OptimizationReport) {
    println!("  {}:", "Suggested keywords".bold());
    let mut keywords: Vec<&str> = report
        .suggested_keywords
        .iter()
        .map(String::as_str)
        .collect();
    keywords.sort_unstable();
    let shown: Vec<&str> = keywords.into_iter().take(15).collect();
    println!("    {}", shown.join(", "));
}

fn write_next_steps() {
    println!("  {}", "Next steps:".bold());
    println!("    1. Address critical ATS formatting issues first");
    println!("    2. Incorporate recommended keywords naturally");
    println!("    3. Strengthen weak phrases with action verbs");
    println!("    4. Add quantifiable metrics to achievements");
    println!("    5. Tailor your CV for each specific job application");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_json_report_carries_all_result_fields() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run(
            "Responsible for the platform | education skills experience",
            "rust rust rust tooling",
            "Senior Engineer",
            "software",
        );
        let json = JsonReport::from_report(&report);

        assert_eq!(json.overall_score, report.analysis.overall_score);
        assert_eq!(
            json.ats_compatibility_score,
            report.analysis.ats_compatibility_score
        );
        assert!(!json.recommendations.is_empty());
        assert!(!json.formatting_issues.is_empty());
        assert!(json.optimized_cv.contains("Managed the platform"));
    }

    #[test]
    fn test_json_suggested_keywords_sorted() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run("skills", "", "lead developer", "software");
        let json = JsonReport::from_report(&report);

        let mut sorted = json.suggested_keywords.clone();
        sorted.sort_unstable();
        assert_eq!(json.suggested_keywords, sorted);
        assert!(!json.suggested_keywords.is_empty());
    }

    #[test]
    fn test_json_round_trips() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run("experience education skills", "", "", "");
        let json = serde_json::to_string(&JsonReport::from_report(&report)).unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.overall_score, report.analysis.overall_score);
        assert!(parsed.job_specific_suggestions.is_empty());
    }
}
