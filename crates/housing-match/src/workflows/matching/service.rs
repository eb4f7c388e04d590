use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::super::catalog::AgencyCatalog;
use super::super::export::{report_filename, ExportError, MatchView, ReportWriter};
use super::super::intake::{ApplicantProfile, IntakeError, IntakeGuard, SurveySubmission};
use super::{MatchingConfig, MatchingEngine};

/// Result of matching one survey against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub profile: ApplicantProfile,
    pub catalog_size: usize,
    pub matches: Vec<MatchView>,
}

/// Rendered CSV export plus the filename it should be downloaded as.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub filename: String,
    pub body: Vec<u8>,
}

/// Service composing intake validation, the shared catalog, and the ranker.
pub struct MatchingService {
    catalog: Arc<AgencyCatalog>,
    guard: IntakeGuard,
    engine: MatchingEngine,
}

impl MatchingService {
    pub fn new(catalog: Arc<AgencyCatalog>, config: MatchingConfig) -> Self {
        Self {
            catalog,
            guard: IntakeGuard::new(),
            engine: MatchingEngine::new(config),
        }
    }

    pub fn catalog(&self) -> &AgencyCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatchingConfig {
        self.engine.config()
    }

    /// Validate the survey and return the ranked shortlist. `top_n` overrides the
    /// configured size when it is positive.
    pub fn match_submission(
        &self,
        submission: SurveySubmission,
        top_n: Option<usize>,
    ) -> Result<MatchOutcome, MatchingServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        Ok(self.match_profile(profile, top_n))
    }

    pub fn match_profile(&self, profile: ApplicantProfile, top_n: Option<usize>) -> MatchOutcome {
        let top_n = self.resolve_top_n(top_n);
        let ranked = self
            .engine
            .rank_top(self.catalog.agencies(), &profile, top_n);
        let matches = MatchView::from_ranked(&ranked);

        info!(
            catalog_size = self.catalog.len(),
            returned = matches.len(),
            top_score = ?matches.first().map(|view| view.score),
            housing_status = profile.housing_status().label(),
            "ranked agencies for survey"
        );

        MatchOutcome {
            catalog_size: self.catalog.len(),
            profile,
            matches,
        }
    }

    /// Validate, rank, and render the CSV report for download.
    pub fn report(
        &self,
        submission: SurveySubmission,
        top_n: Option<usize>,
        generated_on: NaiveDate,
    ) -> Result<MatchReport, MatchingServiceError> {
        let outcome = self.match_submission(submission, top_n)?;
        let body = ReportWriter::new(generated_on).to_bytes(&outcome.profile, &outcome.matches)?;
        let filename = report_filename(
            &outcome.profile.identity.name,
            &outcome.profile.identity.email,
        );

        Ok(MatchReport { filename, body })
    }

    fn resolve_top_n(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|top_n| *top_n > 0)
            .unwrap_or(self.engine.config().top_n)
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
