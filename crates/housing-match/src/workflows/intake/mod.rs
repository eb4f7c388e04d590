//! Survey intake: raw form answers in, validated `ApplicantProfile` out.

pub mod domain;
mod form;
mod guard;

pub use domain::{
    ApplicantIdentity, ApplicantProfile, AtRiskDetails, BreedRestriction, HouseholdComposition,
    HousingSituation, HousingStatus, IncomeDeclaration, PetProfile, StayingWithOthersDetails,
    SupplementalAnswers, UnhousedDetails,
};
pub use form::{FormValue, SurveySubmission};
pub use guard::{IntakeError, IntakeGuard};

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> Option<FormValue> {
        Some(FormValue::from(raw))
    }

    fn submission() -> SurveySubmission {
        SurveySubmission {
            name: value("Jordan Reyes"),
            email: value("jordan@example.org"),
            income: value("1750"),
            partner_income: value("I do not combine income"),
            bedrooms: value("2"),
            adults: value("1"),
            dependents: value("2"),
            pets: value("0"),
            needs_accessible: value("No, I do not"),
            current_housing: value("Staying with friends or family"),
            family_stay_length: value("2–5 months"),
            family_contribute: value("Yes"),
            unhoused_where: value("Shelter"),
            risk_eviction_notice: value("Yes"),
            ..SurveySubmission::default()
        }
    }

    #[test]
    fn complete_submission_produces_profile() {
        let profile = IntakeGuard::new()
            .profile_from_submission(submission())
            .expect("valid submission");

        assert_eq!(profile.identity.name, "Jordan Reyes");
        assert_eq!(profile.total_income(), 1750);
        assert_eq!(profile.household.kids, 2);
        assert!(!profile.has_pets());
        assert!(!profile.needs_accessible);
        assert_eq!(
            profile.housing_status(),
            HousingStatus::StayingWithFriendsOrFamily
        );
    }

    #[test]
    fn details_for_unselected_statuses_are_dropped() {
        let profile = IntakeGuard::new()
            .profile_from_submission(submission())
            .expect("valid submission");

        match &profile.housing {
            HousingSituation::StayingWithFriendsOrFamily(details) => {
                assert_eq!(details.stay_length.as_deref(), Some("2–5 months"));
                assert_eq!(details.contributes_to_household, Some(true));
            }
            other => panic!("unexpected housing situation {other:?}"),
        }

        let keys: Vec<_> = profile.answer_rows().into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"family_stay_length"));
        assert!(!keys.contains(&"unhoused_where"));
        assert!(!keys.contains(&"risk_eviction_notice"));
    }

    #[test]
    fn income_sources_are_summed() {
        let mut submission = submission();
        submission.partner_income = value("1250");
        let profile = IntakeGuard::new()
            .profile_from_submission(submission)
            .expect("valid submission");
        assert_eq!(profile.total_income(), 3000);
    }

    #[test]
    fn missing_scoring_fields_are_rejected() {
        let guard = IntakeGuard::new();

        let mut missing_income = submission();
        missing_income.income = None;
        assert_eq!(
            guard.profile_from_submission(missing_income),
            Err(IntakeError::MissingField("income"))
        );

        let mut blank_bedrooms = submission();
        blank_bedrooms.bedrooms = value("  ");
        assert_eq!(
            guard.profile_from_submission(blank_bedrooms),
            Err(IntakeError::MissingField("bedrooms"))
        );

        let mut missing_status = submission();
        missing_status.current_housing = None;
        assert_eq!(
            guard.profile_from_submission(missing_status),
            Err(IntakeError::MissingField("current_housing"))
        );
    }

    #[test]
    fn unparseable_answers_are_rejected() {
        let mut submission = submission();
        submission.needs_accessible = value("sometimes");
        assert_eq!(
            IntakeGuard::new().profile_from_submission(submission),
            Err(IntakeError::InvalidField {
                field: "needs_accessible",
                value: "sometimes".to_string(),
            })
        );
    }

    #[test]
    fn uncertain_accessibility_answers_are_not_read_as_no() {
        for answer in ["Not sure", "yesterday"] {
            let mut submission = submission();
            submission.needs_accessible = value(answer);
            assert_eq!(
                IntakeGuard::new().profile_from_submission(submission),
                Err(IntakeError::InvalidField {
                    field: "needs_accessible",
                    value: answer.to_string(),
                })
            );
        }
    }

    #[test]
    fn pet_follow_ups_only_apply_to_pet_owners() {
        let guard = IntakeGuard::new();

        let mut no_pets = submission();
        no_pets.pet_weight_over_threshold = value("Yes");
        no_pets.pet_restricted_breed = value("Yes");
        let profile = guard.profile_from_submission(no_pets).expect("valid");
        assert!(profile.pets.is_none());

        let mut with_pets = submission();
        with_pets.pets = value("1");
        with_pets.pet_weight_over_threshold = value("yes");
        with_pets.pet_restricted_breed = value("No");
        let pets = guard
            .profile_from_submission(with_pets)
            .expect("valid")
            .pets
            .expect("pet profile present");
        assert_eq!(pets.count, 1);
        assert_eq!(pets.weight_over_threshold, Some(true));
        assert_eq!(pets.restricted_breed, BreedRestriction::No);
        assert!(pets.faces_restrictions());

        let mut breed_missing = submission();
        breed_missing.pets = value("2+");
        assert_eq!(
            guard.profile_from_submission(breed_missing),
            Err(IntakeError::MissingField("pet_restricted_breed"))
        );
    }
}
