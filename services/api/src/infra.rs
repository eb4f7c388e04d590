use chrono::NaiveDate;
use housing_match::error::AppError;
use housing_match::workflows::intake::SurveySubmission;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read a saved survey (the same JSON body the HTTP route accepts).
pub(crate) fn load_submission(path: &Path) -> Result<SurveySubmission, AppError> {
    let file = std::fs::File::open(path)?;
    let submission = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(std::io::Error::from)?;
    Ok(submission)
}
