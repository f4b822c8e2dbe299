//! Rewrite engine for CV text.
//!
//! Three ordered passes: weak-phrase substitution, section-header
//! canonicalization, and character sanitization. All passes are
//! deterministic; running them again on their own output is a no-op.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};

use crate::catalog;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\b[A-Za-z]{3,}\b").unwrap();
    static ref FANCY_BULLET_RE: Regex =
        Regex::new("[\u{2022}\u{25CF}\u{25A0}\u{25AA}\u{25B8}\u{25BA}]").unwrap();
    static ref EM_DASH_RE: Regex = Regex::new("\u{2014}").unwrap();
    static ref CURLY_DOUBLE_RE: Regex = Regex::new("[\u{201C}\u{201D}]").unwrap();
    static ref CURLY_SINGLE_RE: Regex = Regex::new("[\u{2018}\u{2019}]").unwrap();
    static ref MULTI_SPACE_RE: Regex = Regex::new(" {2,}").unwrap();
    static ref MULTI_NEWLINE_RE: Regex = Regex::new("\n{3,}").unwrap();
}

/// Rewrite CV text for stronger phrasing and ATS-safe formatting.
///
/// `target_role` and `industry` are accepted for interface stability with
/// the keyword-suggestion path; the rewrite passes themselves are purely
/// textual and do not consume them.
pub fn optimize(cv_text: &str, _target_role: &str, _industry: &str) -> String {
    let text = improve_weak_phrases(cv_text);
    let text = standardize_sections(&text);
    clean_formatting(&text)
}

/// Replace every weak-phrase occurrence with the first strong
/// alternative, walking the catalog in declaration order. The replacement
/// is capitalized when the matched occurrence was.
fn improve_weak_phrases(text: &str) -> String {
    let mut improved = text.to_string();

    for rule in catalog::PHRASE_IMPROVEMENTS.iter() {
        let strong = rule.alternatives[0];
        improved = rule
            .pattern
            .replace_all(&improved, |caps: &Captures| {
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or("");
                if matched.chars().next().map_or(false, char::is_uppercase) {
                    capitalize(strong)
                } else {
                    strong.to_string()
                }
            })
            .into_owned();
    }

    improved
}

/// Canonicalize section headers to their upper-case standard names.
fn standardize_sections(text: &str) -> String {
    let mut standardized = text.to_string();
    for (pattern, canonical) in catalog::SECTION_HEADER_RULES.iter() {
        standardized = pattern.replace_all(&standardized, *canonical).into_owned();
    }
    standardized
}

/// Strip characters that ATS parsers mangle and collapse redundant
/// whitespace.
fn clean_formatting(text: &str) -> String {
    let cleaned = FANCY_BULLET_RE.replace_all(text, "-");
    let cleaned = EM_DASH_RE.replace_all(&cleaned, "-");
    let cleaned = CURLY_DOUBLE_RE.replace_all(&cleaned, "\"");
    let cleaned = CURLY_SINGLE_RE.replace_all(&cleaned, "'");
    let cleaned = MULTI_SPACE_RE.replace_all(&cleaned, " ");
    MULTI_NEWLINE_RE.replace_all(&cleaned, "\n\n").into_owned()
}

/// Suggest keywords for an industry and optional role.
///
/// The first industry catalog entry whose name appears in the given
/// industry string wins; role fragments unlock additional sets. The
/// result is a true set: de-duplicated, order not guaranteed.
pub fn suggest_keywords(industry: &str, role: &str) -> HashSet<String> {
    let mut keywords: HashSet<String> = HashSet::new();

    let industry_lower = industry.to_lowercase();
    for &(name, list) in catalog::INDUSTRY_KEYWORDS {
        if industry_lower.contains(name) {
            keywords.extend(list.iter().map(|kw| kw.to_string()));
            break;
        }
    }

    if !role.is_empty() {
        let role_lower = role.to_lowercase();
        if role_lower.contains("senior") || role_lower.contains("lead") {
            keywords.extend(catalog::LEADERSHIP_KEYWORDS.iter().map(|kw| kw.to_string()));
        }
        if role_lower.contains("manager") {
            keywords.extend(catalog::MANAGEMENT_KEYWORDS.iter().map(|kw| kw.to_string()));
        }
        if role_lower.contains("engineer") || role_lower.contains("developer") {
            keywords.extend(
                catalog::TECHNICAL_ROLE_KEYWORDS
                    .iter()
                    .map(|kw| kw.to_string()),
            );
        }
    }

    keywords
}

/// Rewrite a CV against a specific job description.
///
/// Words appearing three or more times in the job description (stop words
/// excluded) count as important; the ones absent from the CV produce a
/// single suggestion naming up to the first ten, in the order they were
/// first seen. The text itself goes through the standard rewrite passes.
pub fn optimize_for_job(cv_text: &str, job_description: &str) -> (String, Vec<String>) {
    let mut suggestions = Vec::new();

    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, usize> = HashMap::new();
    for m in WORD_RE.find_iter(job_description) {
        let word = m.as_str().to_lowercase();
        if catalog::JD_STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        if let Some(count) = freq.get_mut(&word) {
            *count += 1;
        } else {
            freq.insert(word.clone(), 1);
            order.push(word);
        }
    }

    let cv_lower = cv_text.to_lowercase();
    let missing: Vec<&str> = order
        .iter()
        .filter(|word| freq[*word] >= 3 && !cv_lower.contains(word.as_str()))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        let listed: Vec<&str> = missing.iter().take(10).copied().collect();
        suggestions.push(format!(
            "Consider incorporating these keywords from the job description: {}",
            listed.join(", ")
        ));
    }

    (optimize(cv_text, "", ""), suggestions)
}

/// Strengthen a single achievement line: swap a leading weak phrase for
/// its strong alternative and make sure the line starts upper-case.
pub fn enhance_achievement(achievement: &str) -> String {
    let mut enhanced = achievement.trim().to_string();

    let lower = enhanced.to_lowercase();
    for rule in catalog::PHRASE_IMPROVEMENTS.iter() {
        if lower.starts_with(rule.weak) {
            let rest = &enhanced[rule.weak.len()..];
            enhanced = format!("{}{}", capitalize(rule.alternatives[0]), rest);
            break;
        }
    }

    if enhanced.chars().next().map_or(false, |first| !first.is_uppercase()) {
        enhanced = capitalize(&enhanced);
    }
    enhanced
}

/// Compose a professional summary line from experience, role, skills and
/// an optional headline achievement.
pub fn professional_summary(
    years_experience: u32,
    role: &str,
    key_skills: &[&str],
    achievements: &[&str],
) -> String {
    let descriptor = match years_experience {
        0..=1 => "motivated",
        2..=4 => "experienced",
        5..=9 => "seasoned",
        _ => "highly accomplished",
    };

    let mut parts = vec![format!(
        "{} {} with {}+ years of experience",
        capitalize(descriptor),
        role,
        years_experience
    )];

    if !key_skills.is_empty() {
        let skills: Vec<&str> = key_skills.iter().take(4).copied().collect();
        parts.push(format!("specializing in {}", skills.join(", ")));
    }

    if let Some(first) = achievements.first() {
        parts.push(format!("Proven track record of {}", first.to_lowercase()));
    }

    format!("{}.", parts.join(" "))
}

/// Format an achievement as action, result, optional metric.
pub fn format_achievement(action: &str, result: &str, metric: &str) -> String {
    if metric.is_empty() {
        format!("{}, resulting in {}", action, result)
    } else {
        format!("{}, resulting in {} ({})", action, result, metric)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
