use super::domain::{
    ApplicantIdentity, ApplicantProfile, AtRiskDetails, BreedRestriction, HouseholdComposition,
    HousingSituation, HousingStatus, IncomeDeclaration, PetProfile, StayingWithOthersDetails,
    SupplementalAnswers, UnhousedDetails,
};
use super::form::{FormValue, SurveySubmission};

/// Rejections raised while turning raw survey answers into a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required answer '{0}'")]
    MissingField(&'static str),
    #[error("answer '{field}' has unrecognized value '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// Boundary between the survey form and the matching engine. Every scoring
/// field is checked here; the engine never validates.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Convert a raw submission into a typed applicant profile.
    pub fn profile_from_submission(
        &self,
        submission: SurveySubmission,
    ) -> Result<ApplicantProfile, IntakeError> {
        let identity = ApplicantIdentity {
            name: text(&submission.name).unwrap_or_default(),
            email: text(&submission.email).unwrap_or_default(),
        };

        let income = IncomeDeclaration {
            base_monthly: required(&submission.income, "income", parse_amount)?,
            partner_monthly: optional(&submission.partner_income, "partner_income", |raw| {
                if is_none_answer(raw) {
                    Some(0)
                } else {
                    parse_amount(raw)
                }
            })?
            .unwrap_or(0),
        };

        let household = HouseholdComposition {
            adults: required(&submission.adults, "adults", parse_count)?,
            kids: required(&submission.dependents, "dependents", parse_count)?,
            bedrooms: required(&submission.bedrooms, "bedrooms", parse_count)?,
        };

        let pet_count = required(&submission.pets, "pets", parse_pet_count)?;
        let pets = if pet_count > 0 {
            Some(PetProfile {
                count: pet_count,
                weight_over_threshold: optional(
                    &submission.pet_weight_over_threshold,
                    "pet_weight_over_threshold",
                    parse_flag,
                )?,
                restricted_breed: required(
                    &submission.pet_restricted_breed,
                    "pet_restricted_breed",
                    parse_breed,
                )?,
            })
        } else {
            None
        };

        let needs_accessible =
            required(&submission.needs_accessible, "needs_accessible", parse_flag)?;
        let status = required(&submission.current_housing, "current_housing", parse_status)?;
        let housing = situation_for(status, &submission)?;

        let supplemental = SupplementalAnswers {
            prior_eviction: optional(&submission.eviction, "eviction", parse_flag)?,
            criminal_record: optional(&submission.criminal_record, "criminal_record", parse_flag)?,
            needs_transit: text(&submission.needs_transit),
            move_in_timeframe: text(&submission.time_frame),
            bathrooms: optional(&submission.bathrooms, "bathrooms", parse_count)?,
            needs_garage: optional(&submission.needs_garage, "needs_garage", parse_flag)?,
        };

        Ok(ApplicantProfile {
            identity,
            income,
            household,
            pets,
            needs_accessible,
            housing,
            supplemental,
        })
    }
}

/// Reads only the follow-up answers that belong to the selected status.
fn situation_for(
    status: HousingStatus,
    submission: &SurveySubmission,
) -> Result<HousingSituation, IntakeError> {
    let situation = match status {
        HousingStatus::Unhoused => HousingSituation::Unhoused(UnhousedDetails {
            description: text(&submission.unhoused_description),
            duration: text(&submission.unhoused_how_long),
            slept_last_night: text(&submission.unhoused_where),
            has_case_manager: optional(
                &submission.unhoused_case_manager,
                "unhoused_case_manager",
                parse_flag,
            )?,
        }),
        HousingStatus::AtRiskOfLosingHousing => {
            HousingSituation::AtRiskOfLosingHousing(AtRiskDetails {
                description: text(&submission.risk_description),
                lease_in_own_name: optional(
                    &submission.risk_lease_in_name,
                    "risk_lease_in_name",
                    parse_flag,
                )?,
                eviction_notice: optional(
                    &submission.risk_eviction_notice,
                    "risk_eviction_notice",
                    parse_flag,
                )?,
                behind_on_bills: optional(
                    &submission.risk_behind_bills,
                    "risk_behind_bills",
                    parse_flag,
                )?,
                wants_to_stay: optional(
                    &submission.risk_want_to_stay,
                    "risk_want_to_stay",
                    parse_flag,
                )?,
                lease_length: text(&submission.risk_lease_length),
                storage_needs: text(&submission.risk_storage),
            })
        }
        HousingStatus::StayingWithFriendsOrFamily => {
            HousingSituation::StayingWithFriendsOrFamily(StayingWithOthersDetails {
                description: text(&submission.family_description),
                stay_length: text(&submission.family_stay_length),
                contributes_to_household: optional(
                    &submission.family_contribute,
                    "family_contribute",
                    parse_flag,
                )?,
                has_permanent_plan: optional(
                    &submission.family_perm_plan,
                    "family_perm_plan",
                    parse_flag,
                )?,
                on_lease: optional(&submission.family_on_lease, "family_on_lease", parse_flag)?,
            })
        }
        HousingStatus::OwnPlace => HousingSituation::OwnPlace,
    };

    Ok(situation)
}

fn required<T>(
    value: &Option<FormValue>,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, IntakeError> {
    optional(value, field, parse)?.ok_or(IntakeError::MissingField(field))
}

/// Blank answers count as absent; present answers must parse.
fn optional<T>(
    value: &Option<FormValue>,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, IntakeError> {
    match value {
        Some(raw) if !raw.is_blank() => {
            parse(raw.as_str().trim())
                .map(Some)
                .ok_or_else(|| IntakeError::InvalidField {
                    field,
                    value: raw.as_str().to_string(),
                })
        }
        _ => Ok(None),
    }
}

fn text(value: &Option<FormValue>) -> Option<String> {
    value
        .as_ref()
        .map(|raw| raw.as_str().trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_amount(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();
    cleaned.parse::<u32>().ok()
}

/// Accepts plain counts and survey options such as `"3+"` or `"2+ pets"`.
fn parse_count(raw: &str) -> Option<u8> {
    let leading = raw.split_whitespace().next()?;
    leading
        .strip_suffix('+')
        .unwrap_or(leading)
        .parse::<u8>()
        .ok()
}

fn parse_pet_count(raw: &str) -> Option<u8> {
    if is_none_answer(raw.trim()) {
        return Some(0);
    }
    match parse_flag(raw) {
        Some(true) => Some(1),
        Some(false) => Some(0),
        None => parse_count(raw),
    }
}

fn is_none_answer(raw: &str) -> bool {
    let lowered = raw.to_ascii_lowercase();
    lowered == "none" || lowered.starts_with("i do not")
}

/// Yes/no style answers. Longer radio labels such as "Yes, fully accessible" or
/// "Not fully accessible" are read by their leading word; "Not sure" is no answer.
fn parse_flag(raw: &str) -> Option<bool> {
    let lowered = raw.trim().to_ascii_lowercase();
    let mut words = lowered
        .split(|ch: char| ch == ',' || ch == '(' || ch.is_whitespace())
        .filter(|word| !word.is_empty());

    match (words.next(), words.next()) {
        (Some("yes" | "y" | "true" | "1"), _) => Some(true),
        (Some("no" | "n" | "false" | "0"), _) => Some(false),
        (Some("not"), Some(next)) if next != "sure" => Some(false),
        _ => None,
    }
}

fn parse_breed(raw: &str) -> Option<BreedRestriction> {
    let lowered = raw.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "unknown" | "not sure" | "unsure" | "don't know" | "i don't know" => {
            Some(BreedRestriction::Unknown)
        }
        _ => parse_flag(&lowered).map(|flag| {
            if flag {
                BreedRestriction::Yes
            } else {
                BreedRestriction::No
            }
        }),
    }
}

fn parse_status(raw: &str) -> Option<HousingStatus> {
    let normalized = raw
        .trim()
        .to_ascii_lowercase()
        .replace(['_', '-'], " ");
    let collapsed = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.as_str() {
        "currently unhoused" | "unhoused" => Some(HousingStatus::Unhoused),
        "at risk of losing housing" | "at risk" | "at risk of losing" => {
            Some(HousingStatus::AtRiskOfLosingHousing)
        }
        "staying with friends or family" | "staying with friends or family members"
        | "staying with others" => Some(HousingStatus::StayingWithFriendsOrFamily),
        "own place" | "i have my own place" | "has own place" | "housed" => {
            Some(HousingStatus::OwnPlace)
        }
        _ => None,
    }
}
