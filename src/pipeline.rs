//! End-to-end analysis and rewrite pipeline.
//!
//! A `Pipeline` owns the session history: every `run` appends its report
//! to an in-memory, append-only list. Each instance is independent, so
//! several pipelines can coexist in one process without interference.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::rewrite;
use crate::score::{self, AnalysisResult};

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub analysis: AnalysisResult,
    pub optimized_cv: String,
    /// Industry/role keyword suggestions; a true set, unordered.
    pub suggested_keywords: HashSet<String>,
    /// Suggestions from matching against the job description; empty when
    /// no job description was supplied.
    pub job_specific_suggestions: Vec<String>,
    pub original_cv: String,
}

/// Coordinates the scoring and rewrite engines and records session
/// history.
#[derive(Debug, Default)]
pub struct Pipeline {
    history: Vec<OptimizationReport>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pipeline: score the original text, rewrite it, then
    /// refine against the job description when one is supplied.
    pub fn run(
        &mut self,
        cv_text: &str,
        job_description: &str,
        target_role: &str,
        industry: &str,
    ) -> OptimizationReport {
        let analysis = score::analyze(cv_text, job_description);

        let mut optimized_cv = rewrite::optimize(cv_text, target_role, industry);

        let suggested_keywords = if industry.is_empty() {
            HashSet::new()
        } else {
            rewrite::suggest_keywords(industry, target_role)
        };

        let job_specific_suggestions = if job_description.is_empty() {
            Vec::new()
        } else {
            let (refined, suggestions) = rewrite::optimize_for_job(&optimized_cv, job_description);
            optimized_cv = refined;
            suggestions
        };

        let report = OptimizationReport {
            analysis,
            optimized_cv,
            suggested_keywords,
            job_specific_suggestions,
            original_cv: cv_text.to_string(),
        };

        self.history.push(report.clone());
        report
    }

    /// Reports from every run of this pipeline instance, oldest first.
    pub fn history(&self) -> &[OptimizationReport] {
        &self.history
    }
}

const GENERAL_TIPS: &[&str] = &[
    "Keep your CV to 1-2 pages for most roles",
    "Use a clean, professional font (Arial, Calibri, or Times New Roman)",
    "Maintain consistent formatting throughout",
    "Proofread carefully - typos are deal-breakers",
    "Update your CV for each application",
];

const ATS_TIPS: &[&str] = &[
    "Use standard section headers (Work Experience, Education, Skills)",
    "Avoid headers, footers, and text boxes",
    "Don't use tables or columns for layout",
    "Save as .docx or .pdf (check job posting requirements)",
    "Use standard bullet points, not special characters",
    "Spell out acronyms at least once",
];

const KEYWORD_TIPS: &[&str] = &[
    "Mirror language from the job description",
    "Include both acronyms and full terms (e.g., 'AI' and 'Artificial Intelligence')",
    "Place keywords in context, not just in a list",
    "Include technical skills, soft skills, and certifications",
    "Use industry-standard terminology",
];

const FORMATTING_TIPS: &[&str] = &[
    "Use consistent date formats (e.g., 'Jan 2020 - Dec 2022')",
    "Left-align all text for ATS readability",
    "Use simple bullet points (-, *, or plain dashes)",
    "Maintain adequate white space",
    "Avoid fancy fonts, colors, or graphics",
];

const CONTENT_TIPS: &[&str] = &[
    "Start bullets with strong action verbs",
    "Quantify achievements with numbers and percentages",
    "Focus on results, not just responsibilities",
    "Use the STAR method (Situation, Task, Action, Result)",
    "Tailor content to the target role",
    "Remove outdated or irrelevant experience",
];

/// Tips catalog by category.
static TIPS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "general" => GENERAL_TIPS,
    "ats" => ATS_TIPS,
    "keywords" => KEYWORD_TIPS,
    "formatting" => FORMATTING_TIPS,
    "content" => CONTENT_TIPS,
};

/// Improvement tips for a category; unknown categories fall back to the
/// general set.
pub fn improvement_tips(category: &str) -> &'static [&'static str] {
    TIPS.get(category.to_lowercase().as_str())
        .copied()
        .unwrap_or(GENERAL_TIPS)
}

/// All known tip categories.
pub fn tip_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = TIPS.keys().copied().collect();
    categories.sort_unstable();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CV: &str = "PROFESSIONAL SUMMARY\n\
        Engineer responsible for building data platforms.\n\
        WORK EXPERIENCE\n\
        Worked on ingestion pipelines processing 40 million events daily.\n\
        EDUCATION\n\
        BS Computer Science\n\
        SKILLS\n\
        Rust, SQL, Kafka";

    #[test]
    fn test_history_grows_one_entry_per_run() {
        let mut pipeline = Pipeline::new();
        assert!(pipeline.history().is_empty());
        pipeline.run(SAMPLE_CV, "", "", "");
        pipeline.run(SAMPLE_CV, "", "", "");
        assert_eq!(pipeline.history().len(), 2);
    }

    #[test]
    fn test_independent_pipelines_do_not_share_history() {
        let mut a = Pipeline::new();
        let mut b = Pipeline::new();
        a.run(SAMPLE_CV, "", "", "");
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
        b.run(SAMPLE_CV, "", "", "");
        assert_eq!(b.history().len(), 1);
    }

    #[test]
    fn test_run_rewrites_weak_phrasing() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run(SAMPLE_CV, "", "", "");
        assert!(report.optimized_cv.contains("managed building data platforms"));
        assert!(report.optimized_cv.contains("Developed ingestion pipelines"));
        assert_eq!(report.original_cv, SAMPLE_CV);
    }

    #[test]
    fn test_no_job_description_means_no_job_suggestions() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run(SAMPLE_CV, "", "Senior Engineer", "software");
        assert!(report.job_specific_suggestions.is_empty());
        assert!(report.analysis.keyword_analysis.is_empty());
        assert!(report.suggested_keywords.contains("docker"));
    }

    #[test]
    fn test_no_industry_means_no_suggested_keywords() {
        let mut pipeline = Pipeline::new();
        let report = pipeline.run(SAMPLE_CV, "", "Senior Engineer", "");
        assert!(report.suggested_keywords.is_empty());
    }

    #[test]
    fn test_job_description_produces_suggestions() {
        let jd = "Terraform terraform terraform terraform modules and automation";
        let mut pipeline = Pipeline::new();
        let report = pipeline.run(SAMPLE_CV, jd, "", "");
        assert_eq!(report.job_specific_suggestions.len(), 1);
        assert!(report.job_specific_suggestions[0].contains("terraform"));
    }

    #[test]
    fn test_improvement_tips_categories() {
        assert_eq!(improvement_tips("ats"), ATS_TIPS);
        assert_eq!(improvement_tips("ATS"), ATS_TIPS);
        // Unknown categories fall back to general advice.
        assert_eq!(improvement_tips("astrology"), GENERAL_TIPS);
        assert_eq!(
            tip_categories(),
            vec!["ats", "content", "formatting", "general", "keywords"]
        );
    }
}
