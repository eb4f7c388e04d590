use super::common::*;
use crate::workflows::catalog::{AgencyRecord, BedroomOffer};
use crate::workflows::intake::{
    ApplicantProfile, AtRiskDetails, BreedRestriction, HousingSituation,
    StayingWithOthersDetails, UnhousedDetails,
};
use crate::workflows::matching::{
    score_agency, MatchFactor, ScoredMatch, MAX_RAW_SCORE, MIN_RAW_SCORE,
};

fn factor_total(scored: &ScoredMatch<'_>, factor: MatchFactor) -> i32 {
    scored
        .components
        .iter()
        .filter(|component| component.factor == factor)
        .map(|component| component.delta)
        .sum()
}

fn has_factor(scored: &ScoredMatch<'_>, factor: MatchFactor) -> bool {
    scored
        .components
        .iter()
        .any(|component| component.factor == factor)
}

#[test]
fn baseline_scenario_scores_six_points() {
    let agency = agency("Baseline");
    let scored = score_agency(&agency, &profile());

    assert_eq!(scored.raw_score, 6);
    assert_eq!(scored.scaled_score, 6.6);
    assert_eq!(factor_total(&scored, MatchFactor::Affordability), 3);
    assert_eq!(factor_total(&scored, MatchFactor::Bedrooms), 3);
    assert_eq!(
        scored.positive_reasons,
        vec![
            "starting rent fits within a third of your income".to_string(),
            "offers your preferred 2 bedroom(s)".to_string(),
        ]
    );
    assert!(scored.negative_reasons.is_empty());
}

#[test]
fn heavy_pet_at_pet_friendly_agency_nets_one_point() {
    let mut agency = agency("Pet Friendly");
    agency.pet_friendly = "Yes".to_string();
    let mut profile = profile();
    profile.pets = Some(pet_owner(Some(true), BreedRestriction::No));

    let scored = score_agency(&agency, &profile);

    assert_eq!(factor_total(&scored, MatchFactor::Pets), 1);
    assert!(scored.positive_reasons.contains(&"allows pets".to_string()));
    assert_eq!(
        scored.negative_reasons,
        vec!["pet size or breed may face restrictions".to_string()]
    );
}

#[test]
fn unknown_breed_counts_as_restricted() {
    let mut agency = agency("Pet Friendly");
    agency.pet_friendly = "YES".to_string();
    let mut profile = profile();

    profile.pets = Some(pet_owner(None, BreedRestriction::Unknown));
    assert_eq!(
        factor_total(&score_agency(&agency, &profile), MatchFactor::Pets),
        1
    );

    profile.pets = Some(pet_owner(Some(false), BreedRestriction::No));
    assert_eq!(
        factor_total(&score_agency(&agency, &profile), MatchFactor::Pets),
        2
    );
}

#[test]
fn pets_at_non_pet_friendly_agency_cost_six() {
    let mut profile = profile();
    profile.pets = Some(pet_owner(Some(true), BreedRestriction::Yes));

    let no_pets = agency("No Pets");
    let scored = score_agency(&no_pets, &profile);

    assert_eq!(factor_total(&scored, MatchFactor::Pets), -6);
    assert!(scored
        .negative_reasons
        .contains(&"may not allow pets".to_string()));
}

#[test]
fn no_pets_means_no_pet_rule() {
    let agency = agency("Any");
    let scored = score_agency(&agency, &profile());
    assert!(!has_factor(&scored, MatchFactor::Pets));
}

#[test]
fn affordability_has_three_tiers() {
    let profile = profile();

    let fitting = with_rent(agency("Fits"), 1000.0);
    let fits = score_agency(&fitting, &profile);
    assert_eq!(factor_total(&fits, MatchFactor::Affordability), 3);

    let stretching = with_rent(agency("Stretch"), 1200.0);
    let stretch = score_agency(&stretching, &profile);
    assert_eq!(factor_total(&stretch, MatchFactor::Affordability), 1);

    let pricey = with_rent(agency("Too High"), 1201.0);
    let too_high = score_agency(&pricey, &profile);
    assert_eq!(factor_total(&too_high, MatchFactor::Affordability), -4);
    assert!(too_high
        .negative_reasons
        .contains(&"starting rent is likely too high for your income".to_string()));
}

#[test]
fn zero_income_skips_affordability() {
    let mut profile = profile();
    profile.income.base_monthly = 0;

    let agency = with_rent(agency("Any"), 5000.0);
    let scored = score_agency(&agency, &profile);
    assert!(!has_factor(&scored, MatchFactor::Affordability));
}

#[test]
fn missing_rent_defaults_to_zero() {
    let mut agency = agency("Unlisted Rent");
    agency.min_rent = None;

    let scored = score_agency(&agency, &profile());
    assert_eq!(factor_total(&scored, MatchFactor::Affordability), 3);
}

#[test]
fn bedroom_mismatch_costs_one() {
    let mut agency = agency("Studios");
    agency.bedrooms = Some(BedroomOffer::Count(0.0));

    let scored = score_agency(&agency, &profile());
    assert_eq!(factor_total(&scored, MatchFactor::Bedrooms), -1);
    assert_eq!(
        scored.negative_reasons,
        vec!["offers 0 bedroom(s), which may not fit your preferred 2".to_string()]
    );
}

#[test]
fn malformed_bedrooms_fail_open() {
    let mut agency = agency("Messy Data");
    agency.bedrooms = Some(BedroomOffer::Label("call us".to_string()));

    let scored = score_agency(&agency, &profile());
    assert_eq!(factor_total(&scored, MatchFactor::Bedrooms), 3);
}

#[test]
fn family_bonus_requires_kids_and_tag() {
    let family = tagged(agency("Family"), &["family-friendly"]);

    let without_kids = score_agency(&family, &profile());
    assert!(!has_factor(&without_kids, MatchFactor::Family));

    let mut parent = profile();
    parent.household.kids = 2;
    assert_eq!(
        factor_total(&score_agency(&family, &parent), MatchFactor::Family),
        2
    );
    assert!(!has_factor(
        &score_agency(&agency("Untagged"), &parent),
        MatchFactor::Family
    ));
}

#[test]
fn accessibility_rewards_either_tag() {
    let mut profile = profile();
    profile.needs_accessible = true;

    for tag in ["accessible", "accessibility-support"] {
        let agency = tagged(agency("Access"), &[tag]);
        let scored = score_agency(&agency, &profile);
        assert_eq!(factor_total(&scored, MatchFactor::Accessibility), 2);
    }

    let plain = agency("Untagged");
    let untagged = score_agency(&plain, &profile);
    assert_eq!(factor_total(&untagged, MatchFactor::Accessibility), -1);
    assert!(untagged
        .negative_reasons
        .contains(&"accessibility features are not clearly listed".to_string()));
}

#[test]
fn accessibility_rule_is_silent_when_not_needed() {
    let agency = tagged(agency("Access"), &["accessible"]);
    let scored = score_agency(&agency, &profile());
    assert!(!has_factor(&scored, MatchFactor::Accessibility));
}

#[test]
fn housing_instability_bonuses_are_independent() {
    let mut unhoused = profile();
    unhoused.housing = HousingSituation::Unhoused(UnhousedDetails::default());

    let pricey_voucher = tagged(with_rent(agency("Voucher"), 1150.0), &["voucher-friendly"]);
    assert_eq!(
        factor_total(
            &score_agency(&pricey_voucher, &unhoused),
            MatchFactor::HousingStability
        ),
        3
    );

    let cheap_voucher = tagged(with_rent(agency("Voucher"), 1100.0), &["voucher-friendly"]);
    assert_eq!(
        factor_total(
            &score_agency(&cheap_voucher, &unhoused),
            MatchFactor::HousingStability
        ),
        5
    );

    let mut at_risk = profile();
    at_risk.housing = HousingSituation::AtRiskOfLosingHousing(AtRiskDetails::default());
    assert_eq!(
        factor_total(
            &score_agency(&agency("Cheap"), &at_risk),
            MatchFactor::HousingStability
        ),
        2
    );
}

#[test]
fn stable_housing_gets_no_instability_bonus() {
    let voucher = tagged(with_rent(agency("Voucher"), 500.0), &["voucher-friendly"]);

    let mut staying = profile();
    staying.housing =
        HousingSituation::StayingWithFriendsOrFamily(StayingWithOthersDetails::default());

    for profile in [profile(), staying] {
        let scored = score_agency(&voucher, &profile);
        assert!(!has_factor(&scored, MatchFactor::HousingStability));
    }
}

#[test]
fn scoring_is_deterministic() {
    let agency = tagged(agency("Repeat"), &["family-friendly", "accessible"]);
    let mut profile = profile();
    profile.household.kids = 1;
    profile.needs_accessible = true;

    let first = score_agency(&agency, &profile);
    let second = score_agency(&agency, &profile);
    assert_eq!(first, second);
}

#[test]
fn lowering_rent_never_lowers_affordability() {
    let profile = profile();
    let mut previous = i32::MIN;
    let mut rent = 2000.0;
    while rent >= 0.0 {
        let agency = with_rent(agency("Sweep"), rent);
        let scored = score_agency(&agency, &profile);
        let contribution = factor_total(&scored, MatchFactor::Affordability);
        assert!(
            contribution >= previous,
            "rent {rent} scored {contribution}, below {previous}"
        );
        previous = contribution;
        rent -= 25.0;
    }
}

/// Walks every combination of rule-relevant inputs and checks the raw score
/// never leaves the rescaling bounds, and that both bounds are reachable.
#[test]
fn raw_scores_stay_within_rescaling_bounds() {
    let incomes = [0u32, 3000];
    let rents = [500.0, 1000.0, 1150.0, 1300.0];
    let bedroom_offers = ["1-3", "4-5"];
    let pet_friendly = ["Yes", "No"];
    let pet_options = [
        None,
        Some(pet_owner(None, BreedRestriction::No)),
        Some(pet_owner(Some(true), BreedRestriction::No)),
        Some(pet_owner(None, BreedRestriction::Unknown)),
    ];
    let tag_sets: [&[&str]; 4] = [
        &[],
        &["family-friendly", "accessible", "voucher-friendly"],
        &["accessibility-support"],
        &["voucher-friendly"],
    ];
    let situations = [
        HousingSituation::Unhoused(UnhousedDetails::default()),
        HousingSituation::AtRiskOfLosingHousing(AtRiskDetails::default()),
        HousingSituation::StayingWithFriendsOrFamily(StayingWithOthersDetails::default()),
        HousingSituation::OwnPlace,
    ];

    let mut lowest = i32::MAX;
    let mut highest = i32::MIN;

    for income in incomes {
        for rent in rents {
            for offer in bedroom_offers {
                for pet_policy in pet_friendly {
                    for tags in tag_sets {
                        let agency = AgencyRecord {
                            min_rent: Some(rent),
                            bedrooms: Some(BedroomOffer::Label(offer.to_string())),
                            pet_friendly: pet_policy.to_string(),
                            ..tagged(agency("Combo"), tags)
                        };
                        for pets in pet_options {
                            for kids in [0u8, 2] {
                                for needs_accessible in [false, true] {
                                    for situation in &situations {
                                        let profile = ApplicantProfile {
                                            pets,
                                            needs_accessible,
                                            housing: situation.clone(),
                                            ..combo_profile(income, kids)
                                        };
                                        let scored = score_agency(&agency, &profile);
                                        lowest = lowest.min(scored.raw_score);
                                        highest = highest.max(scored.raw_score);
                                        assert!((1.0..=10.0).contains(&scored.scaled_score));
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    assert_eq!(lowest, MIN_RAW_SCORE);
    assert_eq!(highest, MAX_RAW_SCORE);
}

fn combo_profile(income: u32, kids: u8) -> ApplicantProfile {
    let mut profile = profile();
    profile.income.base_monthly = income;
    profile.household.kids = kids;
    profile
}
