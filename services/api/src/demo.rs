use crate::infra::load_submission;
use chrono::{Local, NaiveDate};
use clap::Args;
use housing_match::config::AppConfig;
use housing_match::error::AppError;
use housing_match::workflows::catalog::{AgencyCatalog, CatalogFormat, CatalogLoader};
use housing_match::workflows::export::{MatchView, ReportWriter};
use housing_match::workflows::intake::{FormValue, SurveySubmission};
use housing_match::workflows::matching::{rank, MatchOutcome, MatchingConfig, MatchingService};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_CATALOG: &[u8] =
    include_bytes!("../../../crates/housing-match/fixtures/housing_data.json");

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Survey answers as JSON (same shape as the HTTP request body)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Agency catalog (.json or .csv). Defaults to MATCH_CATALOG_PATH.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of matches to show. Defaults to MATCH_TOP_N.
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// Directory for the CSV report. Defaults to MATCH_EXPORT_DIR.
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
    /// Skip writing the CSV report
    #[arg(long)]
    pub(crate) no_export: bool,
    /// Date stamped on the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of matches to show
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) top_n: u64,
    /// Print every rule contribution, not just the reasons
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        answers,
        catalog,
        top_n,
        export_dir,
        no_export,
        today,
    } = args;

    let config = AppConfig::load()?;
    let catalog_path = catalog.unwrap_or(config.matching.catalog_path);
    let catalog = CatalogLoader::from_path(&catalog_path)?;
    let submission = load_submission(&answers)?;

    let service = MatchingService::new(
        Arc::new(catalog),
        MatchingConfig::with_top_n(config.matching.top_n),
    );
    let outcome = service.match_submission(submission, top_n)?;

    println!(
        "Housing matches from {} ({} agencies)",
        catalog_path.display(),
        outcome.catalog_size
    );
    render_matches(&outcome.matches, false);

    if no_export {
        return Ok(());
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let export_dir = export_dir.unwrap_or(config.matching.export_dir);
    let path =
        ReportWriter::new(today).save_in(&export_dir, &outcome.profile, &outcome.matches)?;
    println!("\nReport saved to {}", path.display());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = sample_catalog()?;
    println!("Housing match demo ({} sample agencies)", catalog.len());

    let service = MatchingService::new(Arc::new(catalog), MatchingConfig::default());
    let outcome = service.match_submission(demo_submission(), Some(args.top_n as usize))?;
    render_profile(&outcome);
    render_matches(&outcome.matches, args.breakdown);

    if args.breakdown {
        println!("\nRule contributions:");
        let shown = outcome.matches.len();
        for scored in rank(service.catalog().agencies(), &outcome.profile, shown) {
            println!("  {} (raw {})", scored.agency.display_name(), scored.raw_score);
            for component in &scored.components {
                println!(
                    "    - {:?}: {:+} {}",
                    component.factor, component.delta, component.reason
                );
            }
        }
    }

    println!("\nEmpty catalog run:");
    let empty = MatchingService::new(
        Arc::new(AgencyCatalog::default()),
        MatchingConfig::default(),
    );
    let outcome = empty.match_submission(demo_submission(), None)?;
    render_matches(&outcome.matches, false);

    Ok(())
}

fn sample_catalog() -> Result<AgencyCatalog, AppError> {
    Ok(CatalogLoader::from_reader(SAMPLE_CATALOG, CatalogFormat::Json)?)
}

fn demo_submission() -> SurveySubmission {
    fn answer(raw: &str) -> Option<FormValue> {
        Some(FormValue::from(raw))
    }

    SurveySubmission {
        name: answer("Jordan Reyes"),
        email: answer("jordan@example.org"),
        income: answer("1850"),
        partner_income: answer("I do not combine income"),
        bedrooms: answer("2"),
        adults: answer("1"),
        dependents: answer("2"),
        pets: answer("1"),
        pet_weight_over_threshold: answer("Yes"),
        pet_restricted_breed: answer("No"),
        needs_accessible: answer("No"),
        current_housing: answer("At risk of losing housing"),
        risk_eviction_notice: answer("Yes"),
        risk_want_to_stay: answer("No"),
        time_frame: answer("Within 30 days"),
        ..SurveySubmission::default()
    }
}

fn render_profile(outcome: &MatchOutcome) {
    let profile = &outcome.profile;
    println!(
        "- Applicant: {} | income ${} / month | {} adult(s), {} child(ren) | wants {} bedroom(s)",
        profile.identity.name,
        profile.total_income(),
        profile.household.adults,
        profile.household.kids,
        profile.household.bedrooms
    );
    println!(
        "- Housing status: {} | pets: {}",
        profile.housing_status().label(),
        profile.pets.map(|pets| pets.count).unwrap_or(0)
    );
}

pub(crate) fn render_matches(matches: &[MatchView], include_notes: bool) {
    if matches.is_empty() {
        println!("  No matches found. Try widening the agency catalog.");
        return;
    }

    for view in matches {
        println!(
            "\n#{} {} (score {:.1}/10)",
            view.rank, view.organization, view.score
        );
        println!(
            "  Rent {} | Bedrooms {} | Pets {}",
            view.rent_range, view.bedrooms, view.pet_friendly
        );
        println!("  Phone {} | {}", view.phone, view.address);
        for reason in &view.positive_reasons {
            println!("  + {reason}");
        }
        for reason in &view.negative_reasons {
            println!("  - {reason}");
        }
        if include_notes && !view.notes.is_empty() {
            println!("  Notes: {}", view.notes);
        }
    }
}
