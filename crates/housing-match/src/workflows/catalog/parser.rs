use super::bedrooms::BedroomOffer;
use super::normalizer::{clean_text, parse_amount, split_tags};
use super::record::AgencyRecord;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::io::Read;
use tracing::warn;

/// Parse a JSON catalog: either a bare array of agencies or `{ "agencies": [...] }`.
/// Entries that are not objects, or that cannot be read at all, are skipped with a
/// warning; only a document that is neither shape is an error.
pub(crate) fn parse_json<R: Read>(mut reader: R) -> Result<Vec<AgencyRecord>, serde_json::Error> {
    let mut document = String::new();
    reader
        .read_to_string(&mut document)
        .map_err(serde_json::Error::io)?;

    let entries = match serde_json::from_str::<Vec<Box<RawValue>>>(&document) {
        Ok(entries) => entries,
        Err(_) => serde_json::from_str::<WrappedCatalog>(&document)?.agencies,
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry_to_record(entry) {
            Ok(record) => records.push(record),
            Err(reason) => warn!(index, %reason, "skipping unreadable catalog entry"),
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct WrappedCatalog {
    agencies: Vec<Box<RawValue>>,
}

fn entry_to_record(entry: &RawValue) -> Result<AgencyRecord, String> {
    let value: Value = serde_json::from_str(entry.get()).map_err(|err| err.to_string())?;
    if !value.is_object() {
        return Err(format!("expected an agency object, found {value}"));
    }
    AgencyRecord::deserialize(value).map_err(|err| err.to_string())
}

/// Parse a CSV catalog exported with the same column names as the JSON form.
pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<AgencyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<CatalogRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Organization", default)]
    organization: String,
    #[serde(rename = "Min_Rent", default, deserialize_with = "empty_string_as_none")]
    min_rent: Option<String>,
    #[serde(rename = "Max_Rent", default, deserialize_with = "empty_string_as_none")]
    max_rent: Option<String>,
    #[serde(rename = "Bedrooms", default, deserialize_with = "empty_string_as_none")]
    bedrooms: Option<String>,
    #[serde(rename = "Pet_Friendly", default)]
    pet_friendly: String,
    #[serde(rename = "Match_Tags", default)]
    match_tags: String,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

impl CatalogRow {
    fn into_record(self) -> AgencyRecord {
        AgencyRecord {
            organization: clean_text(&self.organization).unwrap_or_default(),
            min_rent: self.min_rent.as_deref().and_then(parse_amount),
            max_rent: self.max_rent.as_deref().and_then(parse_amount),
            bedrooms: self.bedrooms.map(BedroomOffer::Label),
            pet_friendly: self.pet_friendly,
            match_tags: split_tags(&self.match_tags),
            phone: self.phone.as_deref().and_then(clean_text),
            address: self.address.as_deref().and_then(clean_text),
            notes: self.notes.as_deref().and_then(clean_text),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
