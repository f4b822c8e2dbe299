//! Cvpolish - CV analysis and optimization toolkit.
//!
//! Cvpolish evaluates a plain-text CV for recruiter and ATS readability
//! and rewrites it toward stronger phrasing and standardized section
//! names. Two engines do the work:
//!
//! - `score`: multi-factor scoring that turns raw text into a structured
//!   quality assessment (sub-scores, strengths, weaknesses,
//!   recommendations, keyword coverage, formatting issues)
//! - `rewrite`: deterministic text passes that replace weak phrasing,
//!   canonicalize section headers, and sanitize ATS-unfriendly characters
//!
//! Both engines are stateless and share only the static tables in
//! `catalog`. The `pipeline` module ties them together and keeps the
//! per-session history; `report` and `cli` handle presentation and I/O.

pub mod catalog;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod rewrite;
pub mod score;

pub use pipeline::{improvement_tips, OptimizationReport, Pipeline};
pub use rewrite::{optimize, optimize_for_job, suggest_keywords};
pub use score::{analyze, AnalysisResult, KeywordHit};
