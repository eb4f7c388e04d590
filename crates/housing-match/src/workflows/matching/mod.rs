//! Agency scoring and ranking.
//!
//! Each agency is run through a fixed battery of additive rules, producing a
//! signed raw score and an ordered list of reasons. The raw score is rescaled to
//! a 1.0-10.0 fit score and agencies are stably sorted by it, so ties keep their
//! catalog order.

mod config;
pub mod router;
mod rules;
mod scale;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::{MatchingConfig, DEFAULT_TOP_N};
pub use router::matching_router;
pub use scale::{scale_raw_score, MAX_RAW_SCORE, MIN_RAW_SCORE};
pub use service::{MatchOutcome, MatchReport, MatchingService, MatchingServiceError};

use super::catalog::AgencyRecord;
use super::intake::ApplicantProfile;
use serde::{Deserialize, Serialize};

/// Rule family a score component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Affordability,
    Bedrooms,
    Pets,
    Family,
    Accessibility,
    HousingStability,
}

/// Discrete contribution to an agency's score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub delta: i32,
    pub reason: String,
}

impl ScoreComponent {
    pub(crate) fn new(factor: MatchFactor, delta: i32, reason: impl Into<String>) -> Self {
        Self {
            factor,
            delta,
            reason: reason.into(),
        }
    }
}

/// Score for one (agency, profile) pair. Lives only for one ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch<'a> {
    pub agency: &'a AgencyRecord,
    pub raw_score: i32,
    pub scaled_score: f64,
    pub components: Vec<ScoreComponent>,
    pub positive_reasons: Vec<String>,
    pub negative_reasons: Vec<String>,
}

/// Score a single agency. Pure: the same inputs always give the same match.
pub fn score_agency<'a>(agency: &'a AgencyRecord, profile: &ApplicantProfile) -> ScoredMatch<'a> {
    let components = rules::score_components(agency, profile);
    let raw_score = components.iter().map(|component| component.delta).sum();

    let mut positive_reasons = Vec::new();
    let mut negative_reasons = Vec::new();
    for component in &components {
        if component.delta >= 0 {
            positive_reasons.push(component.reason.clone());
        } else {
            negative_reasons.push(component.reason.clone());
        }
    }

    ScoredMatch {
        agency,
        raw_score,
        scaled_score: scale_raw_score(raw_score),
        components,
        positive_reasons,
        negative_reasons,
    }
}

/// Score every agency, sort by fit (stable), and keep the first `top_n`.
/// No agency is filtered out; an empty catalog yields an empty list.
pub fn rank<'a>(
    agencies: &'a [AgencyRecord],
    profile: &ApplicantProfile,
    top_n: usize,
) -> Vec<ScoredMatch<'a>> {
    let mut scored: Vec<ScoredMatch<'a>> = agencies
        .iter()
        .map(|agency| score_agency(agency, profile))
        .collect();

    scored.sort_by(|left, right| right.scaled_score.total_cmp(&left.scaled_score));
    scored.truncate(top_n);
    scored
}

/// Stateless ranker bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn score<'a>(
        &self,
        agency: &'a AgencyRecord,
        profile: &ApplicantProfile,
    ) -> ScoredMatch<'a> {
        score_agency(agency, profile)
    }

    pub fn rank<'a>(
        &self,
        agencies: &'a [AgencyRecord],
        profile: &ApplicantProfile,
    ) -> Vec<ScoredMatch<'a>> {
        rank(agencies, profile, self.config.top_n)
    }

    pub fn rank_top<'a>(
        &self,
        agencies: &'a [AgencyRecord],
        profile: &ApplicantProfile,
        top_n: usize,
    ) -> Vec<ScoredMatch<'a>> {
        rank(agencies, profile, top_n)
    }
}
