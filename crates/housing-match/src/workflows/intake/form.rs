use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A single raw form value. Browsers post strings, JSON clients sometimes send
/// numbers or booleans; everything is kept as text until intake normalizes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValue(pub String);

impl FormValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for FormValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FormValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => Ok(Self(raw)),
            Value::Number(number) => Ok(Self(number.to_string())),
            Value::Bool(flag) => Ok(Self(flag.to_string())),
            Value::Null => Ok(Self(String::new())),
            other => Err(serde::de::Error::custom(format!(
                "expected a scalar form value, found {other}"
            ))),
        }
    }
}

/// Raw survey answers exactly as the form collector posts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySubmission {
    pub name: Option<FormValue>,
    pub email: Option<FormValue>,
    #[serde(alias = "base_income")]
    pub income: Option<FormValue>,
    pub partner_income: Option<FormValue>,
    pub bedrooms: Option<FormValue>,
    pub adults: Option<FormValue>,
    #[serde(alias = "kids")]
    pub dependents: Option<FormValue>,
    pub pets: Option<FormValue>,
    pub pet_weight_over_threshold: Option<FormValue>,
    pub pet_restricted_breed: Option<FormValue>,
    pub needs_accessible: Option<FormValue>,
    pub current_housing: Option<FormValue>,

    pub eviction: Option<FormValue>,
    pub criminal_record: Option<FormValue>,
    pub needs_transit: Option<FormValue>,
    pub time_frame: Option<FormValue>,
    pub bathrooms: Option<FormValue>,
    pub needs_garage: Option<FormValue>,

    pub unhoused_description: Option<FormValue>,
    pub unhoused_how_long: Option<FormValue>,
    pub unhoused_where: Option<FormValue>,
    pub unhoused_case_manager: Option<FormValue>,

    pub risk_description: Option<FormValue>,
    pub risk_lease_in_name: Option<FormValue>,
    pub risk_eviction_notice: Option<FormValue>,
    pub risk_behind_bills: Option<FormValue>,
    pub risk_want_to_stay: Option<FormValue>,
    pub risk_lease_length: Option<FormValue>,
    pub risk_storage: Option<FormValue>,

    pub family_description: Option<FormValue>,
    pub family_stay_length: Option<FormValue>,
    pub family_contribute: Option<FormValue>,
    pub family_perm_plan: Option<FormValue>,
    pub family_on_lease: Option<FormValue>,
}
