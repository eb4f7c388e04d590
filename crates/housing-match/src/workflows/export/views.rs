use super::super::catalog::AgencyRecord;
use super::super::matching::ScoredMatch;
use serde::Serialize;

/// Everything a results page or report needs about one ranked agency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    pub rank: usize,
    pub organization: String,
    pub score: f64,
    pub raw_score: i32,
    pub phone: String,
    pub address: String,
    pub rent_range: String,
    pub bedrooms: String,
    pub pet_friendly: String,
    pub notes: String,
    pub positive_reasons: Vec<String>,
    pub negative_reasons: Vec<String>,
}

impl MatchView {
    pub fn from_scored(rank: usize, scored: &ScoredMatch<'_>) -> Self {
        let agency = scored.agency;
        Self {
            rank,
            organization: agency.display_name().to_string(),
            score: scored.scaled_score,
            raw_score: scored.raw_score,
            phone: agency.phone.clone().unwrap_or_else(|| "N/A".to_string()),
            address: agency.address.clone().unwrap_or_else(|| "N/A".to_string()),
            rent_range: rent_range_label(agency),
            bedrooms: bedrooms_label(agency),
            pet_friendly: pet_friendly_label(agency),
            notes: agency.notes.clone().unwrap_or_default(),
            positive_reasons: scored.positive_reasons.clone(),
            negative_reasons: scored.negative_reasons.clone(),
        }
    }

    /// Views numbered from 1 in ranked order.
    pub fn from_ranked(ranked: &[ScoredMatch<'_>]) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .map(|(index, scored)| Self::from_scored(index + 1, scored))
            .collect()
    }
}

/// Catalog listing entry for browsing agencies without a survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencySummaryView {
    pub organization: String,
    pub rent_range: String,
    pub bedrooms: String,
    pub pet_friendly: String,
    pub match_tags: Vec<String>,
}

impl From<&AgencyRecord> for AgencySummaryView {
    fn from(agency: &AgencyRecord) -> Self {
        Self {
            organization: agency.display_name().to_string(),
            rent_range: rent_range_label(agency),
            bedrooms: bedrooms_label(agency),
            pet_friendly: pet_friendly_label(agency),
            match_tags: agency.match_tags.clone(),
        }
    }
}

fn rent_range_label(agency: &AgencyRecord) -> String {
    format!(
        "{} - {}",
        money_label(agency.min_rent),
        money_label(agency.max_rent)
    )
}

fn money_label(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value.fract() == 0.0 => format!("${}", value as i64),
        Some(value) => format!("${value:.2}"),
        None => "N/A".to_string(),
    }
}

fn bedrooms_label(agency: &AgencyRecord) -> String {
    agency
        .bedrooms
        .as_ref()
        .map(|offer| offer.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn pet_friendly_label(agency: &AgencyRecord) -> String {
    let trimmed = agency.pet_friendly.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}
