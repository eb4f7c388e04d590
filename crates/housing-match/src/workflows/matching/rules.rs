use super::super::catalog::AgencyRecord;
use super::super::intake::ApplicantProfile;
use super::{MatchFactor, ScoreComponent};

const INCOME_TO_RENT_DIVISOR: f64 = 3.0;
const RENT_STRETCH_FACTOR: f64 = 1.2;
const LOW_ENTRY_RENT: f64 = 1100.0;

const FAMILY_TAG: &str = "family-friendly";
const ACCESSIBLE_TAGS: [&str; 2] = ["accessible", "accessibility-support"];
const VOUCHER_TAG: &str = "voucher-friendly";

/// Apply every rule in order. Rules are independent; each may add zero or more
/// components.
pub(crate) fn score_components(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    affordability(agency, profile, &mut components);
    bedroom_fit(agency, profile, &mut components);
    pets(agency, profile, &mut components);
    family_fit(agency, profile, &mut components);
    accessibility(agency, profile, &mut components);
    housing_instability(agency, profile, &mut components);

    components
}

fn affordability(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
    components: &mut Vec<ScoreComponent>,
) {
    let income = profile.total_income();
    if income == 0 {
        return;
    }

    let budget = f64::from(income) / INCOME_TO_RENT_DIVISOR;
    let rent = agency.rent_floor();

    let component = if rent <= budget {
        ScoreComponent::new(
            MatchFactor::Affordability,
            3,
            "starting rent fits within a third of your income",
        )
    } else if rent <= budget * RENT_STRETCH_FACTOR {
        ScoreComponent::new(
            MatchFactor::Affordability,
            1,
            "starting rent is a little above a third of your income but may be workable",
        )
    } else {
        ScoreComponent::new(
            MatchFactor::Affordability,
            -4,
            "starting rent is likely too high for your income",
        )
    };
    components.push(component);
}

fn bedroom_fit(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
    components: &mut Vec<ScoreComponent>,
) {
    let wanted = profile.household.bedrooms;
    let range = agency.bedroom_range();

    if range.contains(u32::from(wanted)) {
        components.push(ScoreComponent::new(
            MatchFactor::Bedrooms,
            3,
            format!("offers your preferred {wanted} bedroom(s)"),
        ));
    } else {
        components.push(ScoreComponent::new(
            MatchFactor::Bedrooms,
            -1,
            format!("offers {range} bedroom(s), which may not fit your preferred {wanted}"),
        ));
    }
}

fn pets(agency: &AgencyRecord, profile: &ApplicantProfile, components: &mut Vec<ScoreComponent>) {
    let Some(pets) = &profile.pets else {
        return;
    };

    if agency.is_pet_friendly() {
        components.push(ScoreComponent::new(MatchFactor::Pets, 2, "allows pets"));
        if pets.faces_restrictions() {
            components.push(ScoreComponent::new(
                MatchFactor::Pets,
                -1,
                "pet size or breed may face restrictions",
            ));
        }
    } else {
        components.push(ScoreComponent::new(
            MatchFactor::Pets,
            -6,
            "may not allow pets",
        ));
    }
}

fn family_fit(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
    components: &mut Vec<ScoreComponent>,
) {
    if profile.household.kids > 0 && agency.has_tag(FAMILY_TAG) {
        components.push(ScoreComponent::new(
            MatchFactor::Family,
            2,
            "listed as family-friendly",
        ));
    }
}

fn accessibility(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
    components: &mut Vec<ScoreComponent>,
) {
    if !profile.needs_accessible {
        return;
    }

    if ACCESSIBLE_TAGS.iter().any(|tag| agency.has_tag(tag)) {
        components.push(ScoreComponent::new(
            MatchFactor::Accessibility,
            2,
            "lists accessibility support",
        ));
    } else {
        components.push(ScoreComponent::new(
            MatchFactor::Accessibility,
            -1,
            "accessibility features are not clearly listed",
        ));
    }
}

fn housing_instability(
    agency: &AgencyRecord,
    profile: &ApplicantProfile,
    components: &mut Vec<ScoreComponent>,
) {
    if !profile.housing_status().is_unstable() {
        return;
    }

    if agency.rent_floor() <= LOW_ENTRY_RENT {
        components.push(ScoreComponent::new(
            MatchFactor::HousingStability,
            2,
            "lower starting rent may be reachable quickly",
        ));
    }

    if agency.has_tag(VOUCHER_TAG) {
        components.push(ScoreComponent::new(
            MatchFactor::HousingStability,
            3,
            "accepts housing vouchers",
        ));
    }
}
