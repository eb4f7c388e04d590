use super::bedrooms::{parse_bedroom_range, BedroomOffer, BedroomRange};
use super::normalizer::{clean_text, normalize_tags, parse_amount, split_tags};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stand-in ceiling used when an agency does not publish a maximum rent.
pub const MAX_RENT_SENTINEL: f64 = 1_000_000_000.0;

/// One housing provider's catalog entry. Field names follow the catalog export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    #[serde(rename = "Organization", default, deserialize_with = "lenient_name")]
    pub organization: String,
    #[serde(
        rename = "Min_Rent",
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_rent: Option<f64>,
    #[serde(
        rename = "Max_Rent",
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_rent: Option<f64>,
    #[serde(
        rename = "Bedrooms",
        default,
        deserialize_with = "lenient_bedrooms",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<BedroomOffer>,
    #[serde(rename = "Pet_Friendly", default, deserialize_with = "lenient_flag_text")]
    pub pet_friendly: String,
    #[serde(rename = "Match_Tags", default, deserialize_with = "lenient_tags")]
    pub match_tags: Vec<String>,
    #[serde(
        rename = "Phone",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        rename = "Address",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        rename = "Notes",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl AgencyRecord {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            min_rent: None,
            max_rent: None,
            bedrooms: None,
            pet_friendly: String::new(),
            match_tags: Vec::new(),
            phone: None,
            address: None,
            notes: None,
        }
    }

    pub fn rent_floor(&self) -> f64 {
        self.min_rent.unwrap_or(0.0)
    }

    pub fn rent_ceiling(&self) -> f64 {
        self.max_rent.unwrap_or(MAX_RENT_SENTINEL)
    }

    pub fn bedroom_range(&self) -> BedroomRange {
        parse_bedroom_range(self.bedrooms.as_ref())
    }

    pub fn is_pet_friendly(&self) -> bool {
        self.pet_friendly.trim().eq_ignore_ascii_case("yes")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.match_tags.iter().any(|candidate| candidate == tag)
    }

    pub fn display_name(&self) -> &str {
        if self.organization.trim().is_empty() {
            "Unknown"
        } else {
            self.organization.as_str()
        }
    }
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Option::<Value>::deserialize(deserializer)?))
}

fn lenient_flag_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(true)) => Some("Yes".to_string()),
        Some(Value::Bool(false)) => Some("No".to_string()),
        other => scalar_text(other),
    };
    Ok(text.unwrap_or_default())
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|amount| amount.is_finite() && *amount >= 0.0),
        Some(Value::String(raw)) => parse_amount(&raw),
        _ => None,
    };
    Ok(amount)
}

fn lenient_bedrooms<'de, D>(deserializer: D) -> Result<Option<BedroomOffer>, D::Error>
where
    D: Deserializer<'de>,
{
    let offer = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64().map(BedroomOffer::Count),
        Some(Value::String(raw)) => Some(BedroomOffer::Label(raw)),
        _ => None,
    };
    Ok(offer)
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => {
            normalize_tags(items.iter().filter_map(|item| item.as_str()))
        }
        Some(Value::String(raw)) => split_tags(&raw),
        _ => Vec::new(),
    };
    Ok(tags)
}

fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(raw) => clean_text(&raw),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
