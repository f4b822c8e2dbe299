//! Command-line interface for cvpolish.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pipeline::{self, Pipeline};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// CV analysis and optimization toolkit.
///
/// Cvpolish scores a plain-text CV for ATS compatibility and overall
/// quality, rewrites weak phrasing and non-standard section headers, and
/// suggests keywords for a target job description, role, or industry.
#[derive(Parser)]
#[command(name = "cvpolish")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CV and print the optimization report
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Print improvement tips by category
    Tips(TipsArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CV (plain text)
    pub cv_file: PathBuf,

    /// Path to a job description to match against (optional)
    #[arg(short, long)]
    pub job_description: Option<PathBuf>,

    /// Target role/job title (optional)
    #[arg(short, long, default_value = "")]
    pub role: String,

    /// Target industry, e.g. software, marketing, finance (optional)
    #[arg(short, long, default_value = "")]
    pub industry: String,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Write the rewritten CV to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum acceptable overall score (exit non-zero if below)
    #[arg(short, long)]
    pub min_score: Option<i32>,
}

/// Arguments for the tips command.
#[derive(Parser)]
pub struct TipsArgs {
    /// Tip category: general, ats, keywords, formatting, or content
    #[arg(default_value = "general")]
    pub category: String,

    /// List available categories
    #[arg(short, long)]
    pub list: bool,
}

/// Errors reading input documents.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a document as UTF-8 text.
fn read_document(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let cv_text = match read_document(&args.cv_file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // A missing job description degrades to a plain analysis rather than
    // aborting the run.
    let job_description = match &args.job_description {
        Some(path) => match read_document(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Warning: {}", e);
                String::new()
            }
        },
        None => String::new(),
    };

    let mut pipeline = Pipeline::new();
    let result = pipeline.run(&cv_text, &job_description, &args.role, &args.industry);

    match args.format.as_str() {
        "json" => report::write_json(&result)?,
        _ => report::write_pretty(&result),
    }

    if let Some(output) = &args.output {
        if let Err(e) = fs::write(output, &result.optimized_cv) {
            eprintln!("Error: failed to write {}: {}", output.display(), e);
            return Ok(EXIT_ERROR);
        }
        eprintln!("Optimized CV saved to {}", output.display());
    }

    if let Some(min_score) = args.min_score {
        if result.analysis.overall_score < min_score {
            return Ok(EXIT_FAILED);
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Run the tips command.
pub fn run_tips(args: &TipsArgs) -> anyhow::Result<i32> {
    if args.list {
        println!("Available categories:");
        for category in pipeline::tip_categories() {
            println!("  {}", category);
        }
        return Ok(EXIT_SUCCESS);
    }

    println!("Improvement tips - {}:", args.category.to_lowercase());
    for (i, tip) in pipeline::improvement_tips(&args.category).iter().enumerate() {
        println!("  {}. {}", i + 1, tip);
    }

    Ok(EXIT_SUCCESS)
}
