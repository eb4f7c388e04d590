use super::super::intake::ApplicantProfile;
use super::views::MatchView;
use super::ExportError;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

const MATCH_HEADER: [&str; 10] = [
    "Rank",
    "Organization",
    "Score",
    "Phone",
    "Address",
    "Rent Range",
    "Bedrooms",
    "Pet Friendly",
    "Strengths",
    "Concerns",
];

/// Writes the downloadable match report: applicant identity, a flat list of
/// survey answers, then one row per ranked agency.
pub struct ReportWriter {
    generated_on: NaiveDate,
}

impl ReportWriter {
    pub fn new(generated_on: NaiveDate) -> Self {
        Self { generated_on }
    }

    pub fn write<W: Write>(
        &self,
        profile: &ApplicantProfile,
        matches: &[MatchView],
        writer: W,
    ) -> Result<(), ExportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        csv_writer.write_record(["User Information"])?;
        csv_writer.write_record(["Name", profile.identity.name.as_str()])?;
        csv_writer.write_record(["Email", profile.identity.email.as_str()])?;
        let generated = self.generated_on.to_string();
        csv_writer.write_record(["Generated", generated.as_str()])?;
        csv_writer.write_record([""])?;

        csv_writer.write_record(["Survey Answers"])?;
        for (key, value) in profile.answer_rows() {
            csv_writer.write_record([key, value.as_str()])?;
        }
        csv_writer.write_record([""])?;

        csv_writer.write_record([format!("Top {} Housing Matches", matches.len())])?;
        csv_writer.write_record(MATCH_HEADER)?;
        if matches.is_empty() {
            csv_writer.write_record(["No matches found"])?;
        }
        for view in matches {
            csv_writer.write_record([
                view.rank.to_string(),
                view.organization.clone(),
                format!("{:.1}", view.score),
                view.phone.clone(),
                view.address.clone(),
                view.rent_range.clone(),
                view.bedrooms.clone(),
                view.pet_friendly.clone(),
                view.positive_reasons.join("; "),
                view.negative_reasons.join("; "),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_bytes(
        &self,
        profile: &ApplicantProfile,
        matches: &[MatchView],
    ) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        self.write(profile, matches, &mut buffer)?;
        Ok(buffer)
    }

    /// Save the report under `dir` using the applicant-derived filename.
    pub fn save_in<P: AsRef<Path>>(
        &self,
        dir: P,
        profile: &ApplicantProfile,
        matches: &[MatchView],
    ) -> Result<PathBuf, ExportError> {
        let path = dir
            .as_ref()
            .join(report_filename(&profile.identity.name, &profile.identity.email));
        let file = std::fs::File::create(&path)?;
        self.write(profile, matches, file)?;
        Ok(path)
    }
}

/// `"Jane Doe"`, `"jane@x.org"` -> `Jane_Doe_jane@x.org.csv`.
pub fn report_filename(name: &str, email: &str) -> String {
    let name = sanitize(&name.trim().replace(' ', "_"));
    let email = sanitize(email.trim());

    match (name.is_empty(), email.is_empty()) {
        (true, true) => "housing_matches.csv".to_string(),
        (false, true) => format!("{name}.csv"),
        (true, false) => format!("{email}.csv"),
        (false, false) => format!("{name}_{email}.csv"),
    }
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '@' | '-'))
        .collect()
}
