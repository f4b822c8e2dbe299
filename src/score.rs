//! Scoring engine for CV quality and ATS compatibility.
//!
//! Produces an `AnalysisResult` with an overall score and an ATS
//! compatibility score, both in 0-100, plus the strengths, weaknesses,
//! and recommendations derived from the sub-scores.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog;

lazy_static! {
    /// Alphabetic words of length >= 3, the tokenizer for job descriptions.
    static ref WORD_RE: Regex = Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap();

    /// A number optionally followed by letters or a percent sign.
    static ref QUANTIFIED_RE: Regex = Regex::new(r"\b\d+[%\w]*\b").unwrap();

    /// Percentage figures, e.g. "25%".
    static ref PERCENT_RE: Regex = Regex::new(r"\b\d+%").unwrap();
}

/// A job-description keyword found in the CV, with its occurrence count.
/// Kept as an ordered list: entry order is the order keywords were first
/// seen in the job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
}

/// Results from scoring a CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall quality score, 0-100.
    pub overall_score: i32,
    /// ATS compatibility score, 0-100.
    pub ats_compatibility_score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    /// Important job-description keywords present in the CV.
    pub keyword_analysis: Vec<KeywordHit>,
    pub formatting_issues: Vec<String>,
}

/// Score a CV, optionally against a job description.
///
/// Pass an empty `job_description` when there is none; the keyword score
/// then defaults to a neutral 50 rather than penalizing the CV.
pub fn analyze(cv_text: &str, job_description: &str) -> AnalysisResult {
    let cv_lower = cv_text.to_lowercase();

    let section_score = section_score(&cv_lower);
    let (keyword_score, keyword_analysis) = keyword_score(&cv_lower, job_description);
    let formatting_issues = formatting_issues(cv_text);
    let action_verb_score = action_verb_score(&cv_lower);
    let quantification_score = quantification_score(cv_text);

    let ats_score = ats_score(section_score, keyword_score, formatting_issues.len());
    let overall_score = overall_score(ats_score, action_verb_score, quantification_score);

    let strengths = identify_strengths(cv_text, &cv_lower);
    let weaknesses = identify_weaknesses(cv_text, &cv_lower, &formatting_issues);
    let recommendations = generate_recommendations(
        &weaknesses,
        &formatting_issues,
        keyword_score,
        action_verb_score,
    );

    AnalysisResult {
        overall_score,
        ats_compatibility_score: ats_score,
        strengths,
        weaknesses,
        recommendations,
        keyword_analysis,
        formatting_issues,
    }
}

/// Fraction of standard section names present, scaled so that five or
/// more yield 100.
fn section_score(cv_lower: &str) -> i32 {
    let found = catalog::STANDARD_SECTIONS
        .iter()
        .filter(|section| cv_lower.contains(*section))
        .count();
    ((found * 20) as i32).min(100)
}

/// Coverage of "important" job-description words (frequency > 2) in the
/// CV, together with the per-keyword occurrence counts.
fn keyword_score(cv_lower: &str, job_description: &str) -> (i32, Vec<KeywordHit>) {
    if job_description.is_empty() {
        return (50, Vec::new());
    }

    let jd_lower = job_description.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, usize> = HashMap::new();
    for m in WORD_RE.find_iter(&jd_lower) {
        let word = m.as_str();
        if let Some(count) = freq.get_mut(word) {
            *count += 1;
        } else {
            freq.insert(word.to_string(), 1);
            order.push(word.to_string());
        }
    }

    let mut hits = Vec::new();
    let mut important = 0usize;
    for word in &order {
        if freq[word] > 2 {
            important += 1;
            if cv_lower.contains(word.as_str()) {
                hits.push(KeywordHit {
                    keyword: word.clone(),
                    count: cv_lower.matches(word.as_str()).count(),
                });
            }
        }
    }

    if important == 0 {
        return (50, hits);
    }

    let coverage = hits.len() as f64 / important as f64;
    ((coverage * 100.0) as i32, hits)
}

/// Check the raw text for constructs that confuse ATS parsers. Each check
/// is independent and appends at most one issue.
fn formatting_issues(cv_text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    for (pattern, label) in catalog::ATS_PROBLEMATIC_PATTERNS.iter() {
        if pattern.is_match(cv_text) {
            issues.push(format!("Contains {} which may confuse ATS systems", label));
        }
    }

    if cv_text.matches('\t').count() > 10 {
        issues.push("Possible table formatting detected - may not parse well in ATS".to_string());
    }

    let trimmed: Vec<&str> = cv_text.lines().map(str::trim).collect();
    let non_empty = trimmed.iter().filter(|l| !l.is_empty()).count();
    let short = trimmed
        .iter()
        .filter(|l| !l.is_empty() && l.chars().count() < 20)
        .count();
    if non_empty > 0 && short as f64 > non_empty as f64 * 0.3 {
        issues.push("Many short lines detected - possible column formatting issues".to_string());
    }

    issues
}

/// Action-verb density scaled by 1000, capped at 100.
fn action_verb_score(cv_lower: &str) -> i32 {
    let words = cv_lower.split_whitespace().count();
    if words == 0 {
        return 0;
    }
    let verbs = action_verb_count(cv_lower);
    let density = verbs as f64 / words as f64;
    ((density * 1000.0) as i32).min(100)
}

fn action_verb_count(cv_lower: &str) -> usize {
    catalog::ACTION_VERBS
        .iter()
        .map(|verb| cv_lower.matches(verb).count())
        .sum()
}

/// Step function over the count of quantified tokens (numbers,
/// percentages, figures with units).
fn quantification_score(cv_text: &str) -> i32 {
    match QUANTIFIED_RE.find_iter(cv_text).count() {
        n if n > 10 => 100,
        n if n > 5 => 75,
        n if n > 2 => 50,
        _ => 25,
    }
}

/// Weighted combination of section and keyword coverage, minus a capped
/// deduction per formatting issue.
fn ats_score(section_score: i32, keyword_score: i32, issue_count: usize) -> i32 {
    let deduction = (issue_count * 10).min(30) as f64;
    let score = section_score as f64 * 0.4 + keyword_score as f64 * 0.4 - deduction;
    score.max(0.0) as i32
}

fn overall_score(ats_score: i32, action_verb_score: i32, quantification_score: i32) -> i32 {
    (ats_score as f64 * 0.5 + action_verb_score as f64 * 0.25 + quantification_score as f64 * 0.25)
        as i32
}

/// Fixed ordered rule list; each rule appends at most one string. Never
/// returns an empty list.
fn identify_strengths(cv_text: &str, cv_lower: &str) -> Vec<String> {
    let mut strengths = Vec::new();

    if PERCENT_RE.find_iter(cv_text).count() > 3 {
        strengths.push("Good use of quantified achievements with percentages".to_string());
    }

    if action_verb_count(cv_lower) > 10 {
        strengths.push("Strong use of action verbs to describe responsibilities".to_string());
    }

    if ["experience", "education", "skills"]
        .iter()
        .all(|s| cv_lower.contains(s))
    {
        strengths.push("Contains all essential CV sections".to_string());
    }

    let word_count = cv_text.split_whitespace().count();
    if word_count > 300 && word_count < 800 {
        strengths.push("Appropriate length - concise yet comprehensive".to_string());
    }

    if strengths.is_empty() {
        strengths.push("CV structure is present".to_string());
    }
    strengths
}

/// Fixed ordered rule list; never returns an empty list.
fn identify_weaknesses(cv_text: &str, cv_lower: &str, formatting_issues: &[String]) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if !cv_lower.contains("experience") && !cv_lower.contains("employment") {
        weaknesses.push("Missing work experience section".to_string());
    }
    if !cv_lower.contains("education") {
        weaknesses.push("Missing education section".to_string());
    }
    if !cv_lower.contains("skills") {
        weaknesses.push("Missing skills section".to_string());
    }

    let weak_count: usize = catalog::SCORED_WEAK_PHRASES
        .iter()
        .map(|phrase| cv_lower.matches(phrase).count())
        .sum();
    if weak_count > 3 {
        weaknesses.push("Overuse of weak phrases - use stronger action verbs".to_string());
    }

    let word_count = cv_text.split_whitespace().count();
    if word_count < 200 {
        weaknesses.push("CV is too short - add more detail about achievements".to_string());
    } else if word_count > 1000 {
        weaknesses.push("CV is too long - focus on most relevant information".to_string());
    }

    if !formatting_issues.is_empty() {
        weaknesses.push(format!(
            "ATS formatting concerns: {} issues detected",
            formatting_issues.len()
        ));
    }

    if weaknesses.is_empty() {
        weaknesses.push("Minor improvements could be made".to_string());
    }
    weaknesses
}

/// Recommendation order is a contract: formatting, missing sections,
/// keywords, action verbs, quantification, then the always-present
/// tailoring advice.
fn generate_recommendations(
    weaknesses: &[String],
    formatting_issues: &[String],
    keyword_score: i32,
    action_verb_score: i32,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !formatting_issues.is_empty() {
        recommendations.push(
            "CRITICAL: Fix ATS formatting issues - use simple formatting, \
             standard fonts, and avoid tables/columns"
                .to_string(),
        );
    }

    if weaknesses.iter().any(|w| w.to_lowercase().contains("missing")) {
        recommendations.push(
            "Add all essential sections: Professional Summary, Work Experience, \
             Education, Skills, and relevant certifications"
                .to_string(),
        );
    }

    if keyword_score < 60 {
        recommendations.push(
            "Optimize keywords: Review the job description and naturally incorporate \
             relevant terms and skills throughout your CV"
                .to_string(),
        );
    }

    if action_verb_score < 50 {
        recommendations.push(
            "Strengthen impact: Replace weak phrases with strong action verbs \
             (e.g., 'managed', 'developed', 'achieved', 'implemented')"
                .to_string(),
        );
    }

    if !weaknesses.iter().any(|w| w.to_lowercase().contains("quantified")) {
        recommendations.push(
            "Add quantifiable achievements: Include specific numbers, percentages, \
             and metrics to demonstrate impact (e.g., 'Increased sales by 25%')"
                .to_string(),
        );
    }

    recommendations.push(
        "Tailor your CV: Customize it for each application to match the specific \
         job requirements and company culture"
            .to_string(),
    );

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_score_scaling() {
        assert_eq!(section_score(""), 0);
        // Three distinct sections, 20 points each.
        assert_eq!(section_score("work experience education skills"), 60);
        // Five or more cap at 100.
        assert_eq!(
            section_score("work experience education skills summary projects publications"),
            100
        );
    }

    #[test]
    fn test_keyword_score_neutral_without_job_description() {
        let (score, hits) = keyword_score("any cv text", "");
        assert_eq!(score, 50);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_keyword_score_neutral_without_important_words() {
        // No word repeats more than twice.
        let (score, hits) = keyword_score("rust python", "rust python kafka rust python");
        assert_eq!(score, 50);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_keyword_score_coverage() {
        let jd = "rust rust rust kafka kafka kafka python";
        // CV mentions rust twice, never kafka: one of two important words.
        let (score, hits) = keyword_score("i write rust and more rust", jd);
        assert_eq!(score, 50);
        assert_eq!(
            hits,
            vec![KeywordHit {
                keyword: "rust".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_keyword_hits_keep_discovery_order() {
        let jd = "zig zig zig ada ada ada";
        let (score, hits) = keyword_score("ada and zig are listed here", jd);
        assert_eq!(score, 100);
        let order: Vec<&str> = hits.iter().map(|h| h.keyword.as_str()).collect();
        assert_eq!(order, vec!["zig", "ada"]);
    }

    #[test]
    fn test_formatting_issues_independent_patterns() {
        // A decorative bullet triggers both the bullet and non-ASCII checks.
        let issues = formatting_issues("line one long enough here\n\u{2022} item | cell");
        assert!(
            issues.contains(&"Contains pipe characters which may confuse ATS systems".to_string())
        );
        assert!(issues
            .contains(&"Contains special bullet points which may confuse ATS systems".to_string()));
        assert!(issues
            .contains(&"Contains non-ASCII characters which may confuse ATS systems".to_string()));
    }

    #[test]
    fn test_formatting_detects_tables() {
        let text = "a\tb\tc\td\te\tf\tg\th\ti\tj\tk\tl and some more prose to pad the line";
        let issues = formatting_issues(text);
        assert!(issues
            .iter()
            .any(|i| i.contains("Possible table formatting detected")));
    }

    #[test]
    fn test_formatting_detects_columns() {
        let text = "Skills\nRust\nSQL\nDocker";
        let issues = formatting_issues(text);
        assert!(issues.iter().any(|i| i.contains("Many short lines detected")));

        let prose = "this is a sufficiently long line of resume prose\n\
                     and here is another line that is also long enough";
        assert!(formatting_issues(prose).is_empty());
    }

    #[test]
    fn test_action_verb_score_density() {
        // Three verbs in three words saturates the cap.
        assert_eq!(action_verb_score("led developed managed"), 100);
        assert_eq!(action_verb_score(""), 0);
    }

    #[test]
    fn test_quantification_step_boundaries() {
        assert_eq!(quantification_score("1 2 3 4 5 6 7 8 9 10 11"), 100);
        assert_eq!(quantification_score("1 2 3 4 5 6"), 75);
        assert_eq!(quantification_score("1 2 3"), 50);
        assert_eq!(quantification_score("1 2"), 25);
        assert_eq!(quantification_score("no numbers at all"), 25);
        // Boundary values stay on the lower step.
        assert_eq!(quantification_score("1 2 3 4 5"), 50);
        assert_eq!(quantification_score("1 2 3 4 5 6 7 8 9 10"), 75);
    }

    #[test]
    fn test_ats_score_deduction_capped() {
        assert_eq!(ats_score(100, 100, 0), 80);
        assert_eq!(ats_score(100, 100, 2), 60);
        // Four or more issues deduct at most 30 points.
        assert_eq!(ats_score(100, 100, 4), 50);
        assert_eq!(ats_score(100, 100, 10), 50);
        // Floored at zero.
        assert_eq!(ats_score(0, 0, 3), 0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let long = "achieved 100% ".repeat(500);
        for text in ["", "short", long.as_str()] {
            let result = analyze(text, "");
            assert!((0..=100).contains(&result.overall_score));
            assert!((0..=100).contains(&result.ats_compatibility_score));
        }
    }

    #[test]
    fn test_empty_document_does_not_panic() {
        let result = analyze("", "");
        assert_eq!(result.ats_compatibility_score, 20); // 0.4 * neutral 50
        assert!(result.keyword_analysis.is_empty());
        assert_eq!(result.strengths, vec!["CV structure is present"]);
        assert!(result
            .weaknesses
            .contains(&"Missing work experience section".to_string()));
    }

    #[test]
    fn test_strength_rules_fire_in_order() {
        let text = "Increased sales by 10% 20% 30% 40% through experience education skills";
        let result = analyze(text, "");
        assert_eq!(
            result.strengths[0],
            "Good use of quantified achievements with percentages"
        );
        assert!(result
            .strengths
            .contains(&"Contains all essential CV sections".to_string()));
    }

    #[test]
    fn test_weakness_rules_fire_in_order() {
        let result = analyze("this line is comfortably longer than twenty characters", "");
        assert_eq!(
            result.weaknesses,
            vec![
                "Missing work experience section",
                "Missing education section",
                "Missing skills section",
                "CV is too short - add more detail about achievements",
            ]
        );
    }

    #[test]
    fn test_recommendation_order_is_fixed() {
        // Formatting issues, missing sections, weak keywords, and weak
        // verbs all present: the full sequence must appear in order.
        let jd = "kubernetes kubernetes kubernetes kubernetes role";
        let result = analyze("just some text with a pipe | in it", jd);
        assert!(result.recommendations[0].starts_with("CRITICAL:"));
        assert!(result.recommendations[1].starts_with("Add all essential sections"));
        assert!(result.recommendations[2].starts_with("Optimize keywords"));
        assert!(result.recommendations[3].starts_with("Strengthen impact"));
        assert!(result.recommendations[4].starts_with("Add quantifiable achievements"));
        assert!(result.recommendations[5].starts_with("Tailor your CV"));
        assert_eq!(result.recommendations.len(), 6);
    }

    #[test]
    fn test_tailoring_recommendation_always_present() {
        let polished = "Professional Summary\nWork Experience\nEducation\nSkills\n\
                        Achieved strong results and delivered measurable outcomes \
                        across projects and publications over many years of work";
        let result = analyze(polished, "");
        assert!(result
            .recommendations
            .last()
            .unwrap()
            .starts_with("Tailor your CV"));
    }

    #[test]
    fn test_keyword_analysis_empty_without_job_description() {
        let result = analyze("experience education skills", "");
        assert!(result.keyword_analysis.is_empty());
    }
}
