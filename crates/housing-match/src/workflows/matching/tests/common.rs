use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::{AgencyCatalog, AgencyRecord, BedroomOffer};
use crate::workflows::intake::{
    ApplicantIdentity, ApplicantProfile, BreedRestriction, FormValue, HouseholdComposition,
    HousingSituation, IncomeDeclaration, PetProfile, SupplementalAnswers, SurveySubmission,
};
use crate::workflows::matching::{MatchingConfig, MatchingService, ScoredMatch};

/// Income 3000, two bedrooms, no pets or kids, no accessibility needs, own place.
pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        identity: ApplicantIdentity {
            name: "Avery Lin".to_string(),
            email: "avery@example.org".to_string(),
        },
        income: IncomeDeclaration {
            base_monthly: 3000,
            partner_monthly: 0,
        },
        household: HouseholdComposition {
            adults: 1,
            kids: 0,
            bedrooms: 2,
        },
        pets: None,
        needs_accessible: false,
        housing: HousingSituation::OwnPlace,
        supplemental: SupplementalAnswers::default(),
    }
}

pub(super) fn pet_owner(weight_over_threshold: Option<bool>, breed: BreedRestriction) -> PetProfile {
    PetProfile {
        count: 1,
        weight_over_threshold,
        restricted_breed: breed,
    }
}

/// Rent 900-1200, one to three bedrooms, no pets, no tags.
pub(super) fn agency(name: &str) -> AgencyRecord {
    AgencyRecord {
        organization: name.to_string(),
        min_rent: Some(900.0),
        max_rent: Some(1200.0),
        bedrooms: Some(BedroomOffer::Label("1-3".to_string())),
        pet_friendly: "No".to_string(),
        match_tags: Vec::new(),
        phone: Some("515-555-0100".to_string()),
        address: Some("100 Locust St, Des Moines".to_string()),
        notes: Some("Walk-ins Tuesday".to_string()),
    }
}

pub(super) fn tagged(mut agency: AgencyRecord, tags: &[&str]) -> AgencyRecord {
    agency.match_tags = tags.iter().map(|tag| tag.to_string()).collect();
    agency
}

pub(super) fn with_rent(mut agency: AgencyRecord, min_rent: f64) -> AgencyRecord {
    agency.min_rent = Some(min_rent);
    agency
}

pub(super) fn catalog() -> Vec<AgencyRecord> {
    vec![
        with_rent(agency("Oakridge Commons"), 1600.0),
        tagged(agency("Riverbend Family Housing"), &["family-friendly"]),
        {
            let mut pets = agency("Maple Street Homes");
            pets.pet_friendly = "yes".to_string();
            pets
        },
        tagged(
            with_rent(agency("Harbor Voucher Partners"), 750.0),
            &["voucher-friendly", "accessible"],
        ),
        {
            let mut studio = agency("Downtown Studios");
            studio.bedrooms = Some(BedroomOffer::Count(0.0));
            studio
        },
    ]
}

fn value(raw: &str) -> Option<FormValue> {
    Some(FormValue::from(raw))
}

pub(super) fn submission() -> SurveySubmission {
    SurveySubmission {
        name: value("Avery Lin"),
        email: value("avery@example.org"),
        income: value("1750"),
        partner_income: value("1250"),
        bedrooms: value("2"),
        adults: value("1"),
        dependents: value("1"),
        pets: value("0"),
        needs_accessible: value("No"),
        current_housing: value("Currently unhoused"),
        unhoused_where: value("Vehicle"),
        ..SurveySubmission::default()
    }
}

pub(super) fn incomplete_submission() -> SurveySubmission {
    let mut submission = submission();
    submission.bedrooms = None;
    submission
}

pub(super) fn build_service() -> MatchingService {
    MatchingService::new(
        Arc::new(AgencyCatalog::new(catalog())),
        MatchingConfig::default(),
    )
}

pub(super) fn names(ranked: &[ScoredMatch<'_>]) -> Vec<String> {
    ranked
        .iter()
        .map(|scored| scored.agency.organization.clone())
        .collect()
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
