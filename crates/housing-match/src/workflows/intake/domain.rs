use serde::{Deserialize, Serialize};

/// Who filled out the survey. Only used to name exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantIdentity {
    pub name: String,
    pub email: String,
}

/// Monthly income by source; scoring only looks at the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeDeclaration {
    pub base_monthly: u32,
    pub partner_monthly: u32,
}

impl IncomeDeclaration {
    pub fn total(&self) -> u32 {
        self.base_monthly.saturating_add(self.partner_monthly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdComposition {
    pub adults: u8,
    pub kids: u8,
    pub bedrooms: u8,
}

/// Answer to "is your pet a commonly restricted breed?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedRestriction {
    Yes,
    No,
    Unknown,
}

impl BreedRestriction {
    pub const fn label(self) -> &'static str {
        match self {
            BreedRestriction::Yes => "Yes",
            BreedRestriction::No => "No",
            BreedRestriction::Unknown => "Unknown",
        }
    }
}

/// Present on a profile only when the household has at least one pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    pub count: u8,
    pub weight_over_threshold: Option<bool>,
    pub restricted_breed: BreedRestriction,
}

impl PetProfile {
    /// Large pets and restricted (or possibly restricted) breeds narrow approvals.
    pub fn faces_restrictions(&self) -> bool {
        self.weight_over_threshold == Some(true)
            || matches!(
                self.restricted_breed,
                BreedRestriction::Yes | BreedRestriction::Unknown
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingStatus {
    Unhoused,
    AtRiskOfLosingHousing,
    StayingWithFriendsOrFamily,
    OwnPlace,
}

impl HousingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HousingStatus::Unhoused => "Currently unhoused",
            HousingStatus::AtRiskOfLosingHousing => "At risk of losing housing",
            HousingStatus::StayingWithFriendsOrFamily => "Staying with friends or family",
            HousingStatus::OwnPlace => "Has own place",
        }
    }

    pub const fn is_unstable(self) -> bool {
        matches!(
            self,
            HousingStatus::Unhoused | HousingStatus::AtRiskOfLosingHousing
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnhousedDetails {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub slept_last_night: Option<String>,
    pub has_case_manager: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtRiskDetails {
    pub description: Option<String>,
    pub lease_in_own_name: Option<bool>,
    pub eviction_notice: Option<bool>,
    pub behind_on_bills: Option<bool>,
    pub wants_to_stay: Option<bool>,
    pub lease_length: Option<String>,
    pub storage_needs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayingWithOthersDetails {
    pub description: Option<String>,
    pub stay_length: Option<String>,
    pub contributes_to_household: Option<bool>,
    pub has_permanent_plan: Option<bool>,
    pub on_lease: Option<bool>,
}

/// Current housing status together with the follow-up answers for that status.
/// Details for statuses the applicant did not select cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HousingSituation {
    Unhoused(UnhousedDetails),
    AtRiskOfLosingHousing(AtRiskDetails),
    StayingWithFriendsOrFamily(StayingWithOthersDetails),
    OwnPlace,
}

impl HousingSituation {
    pub fn status(&self) -> HousingStatus {
        match self {
            HousingSituation::Unhoused(_) => HousingStatus::Unhoused,
            HousingSituation::AtRiskOfLosingHousing(_) => HousingStatus::AtRiskOfLosingHousing,
            HousingSituation::StayingWithFriendsOrFamily(_) => {
                HousingStatus::StayingWithFriendsOrFamily
            }
            HousingSituation::OwnPlace => HousingStatus::OwnPlace,
        }
    }
}

/// Survey answers that do not affect scoring but are kept for the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementalAnswers {
    pub prior_eviction: Option<bool>,
    pub criminal_record: Option<bool>,
    pub needs_transit: Option<String>,
    pub move_in_timeframe: Option<String>,
    pub bathrooms: Option<u8>,
    pub needs_garage: Option<bool>,
}

/// Validated, typed survey answers. Built once at intake and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub identity: ApplicantIdentity,
    pub income: IncomeDeclaration,
    pub household: HouseholdComposition,
    pub pets: Option<PetProfile>,
    pub needs_accessible: bool,
    pub housing: HousingSituation,
    #[serde(default)]
    pub supplemental: SupplementalAnswers,
}

impl ApplicantProfile {
    pub fn total_income(&self) -> u32 {
        self.income.total()
    }

    pub fn has_pets(&self) -> bool {
        self.pets.is_some()
    }

    pub fn housing_status(&self) -> HousingStatus {
        self.housing.status()
    }

    /// Flat key/value view of every answer, in survey order, for exports.
    pub fn answer_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("base_income", self.income.base_monthly.to_string()),
            ("partner_income", self.income.partner_monthly.to_string()),
            ("total_income", self.total_income().to_string()),
            ("bedrooms", self.household.bedrooms.to_string()),
            ("adults", self.household.adults.to_string()),
            ("dependents", self.household.kids.to_string()),
            (
                "pets",
                self.pets.map(|pets| pets.count).unwrap_or(0).to_string(),
            ),
        ];

        if let Some(pets) = &self.pets {
            rows.push((
                "pet_weight_over_threshold",
                optional_flag(pets.weight_over_threshold),
            ));
            rows.push((
                "pet_restricted_breed",
                pets.restricted_breed.label().to_string(),
            ));
        }

        rows.push(("needs_accessible", flag(self.needs_accessible)));
        rows.push((
            "current_housing",
            self.housing_status().label().to_string(),
        ));

        let extra = &self.supplemental;
        rows.push(("eviction", optional_flag(extra.prior_eviction)));
        rows.push(("criminal_record", optional_flag(extra.criminal_record)));
        rows.push(("needs_transit", optional_text(&extra.needs_transit)));
        rows.push(("time_frame", optional_text(&extra.move_in_timeframe)));
        rows.push((
            "bathrooms",
            extra.bathrooms.map(|n| n.to_string()).unwrap_or_default(),
        ));
        rows.push(("needs_garage", optional_flag(extra.needs_garage)));

        match &self.housing {
            HousingSituation::Unhoused(details) => {
                rows.push(("unhoused_description", optional_text(&details.description)));
                rows.push(("unhoused_how_long", optional_text(&details.duration)));
                rows.push(("unhoused_where", optional_text(&details.slept_last_night)));
                rows.push((
                    "unhoused_case_manager",
                    optional_flag(details.has_case_manager),
                ));
            }
            HousingSituation::AtRiskOfLosingHousing(details) => {
                rows.push(("risk_description", optional_text(&details.description)));
                rows.push(("risk_lease_in_name", optional_flag(details.lease_in_own_name)));
                rows.push(("risk_eviction_notice", optional_flag(details.eviction_notice)));
                rows.push(("risk_behind_bills", optional_flag(details.behind_on_bills)));
                rows.push(("risk_want_to_stay", optional_flag(details.wants_to_stay)));
                rows.push(("risk_lease_length", optional_text(&details.lease_length)));
                rows.push(("risk_storage", optional_text(&details.storage_needs)));
            }
            HousingSituation::StayingWithFriendsOrFamily(details) => {
                rows.push(("family_description", optional_text(&details.description)));
                rows.push(("family_stay_length", optional_text(&details.stay_length)));
                rows.push((
                    "family_contribute",
                    optional_flag(details.contributes_to_household),
                ));
                rows.push(("family_perm_plan", optional_flag(details.has_permanent_plan)));
                rows.push(("family_on_lease", optional_flag(details.on_lease)));
            }
            HousingSituation::OwnPlace => {}
        }

        rows
    }
}

fn flag(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn optional_flag(value: Option<bool>) -> String {
    value.map(flag).unwrap_or_default()
}

fn optional_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
