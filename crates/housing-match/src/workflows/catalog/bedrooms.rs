use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback interval used whenever a catalog entry's bedroom field cannot be read.
pub const OPEN_BEDROOM_RANGE: BedroomRange = BedroomRange { min: 0, max: 10 };

/// Raw bedroom offer as it appears in the catalog: either a bare number or a label
/// such as `"3"` or `"1-3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BedroomOffer {
    Count(f64),
    Label(String),
}

impl BedroomOffer {
    /// Strict interpretation; `None` means the value was malformed.
    pub fn resolve(&self) -> Option<BedroomRange> {
        match self {
            BedroomOffer::Count(value) if value.is_finite() => {
                let count = value.trunc() as i32;
                Some(BedroomRange::new(count, count))
            }
            BedroomOffer::Count(_) => None,
            BedroomOffer::Label(label) => BedroomRange::parse_label(label),
        }
    }
}

impl fmt::Display for BedroomOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomOffer::Count(value) if value.fract() == 0.0 => write!(f, "{}", *value as i64),
            BedroomOffer::Count(value) => write!(f, "{value}"),
            BedroomOffer::Label(label) => f.write_str(label.trim()),
        }
    }
}

/// Inclusive bedroom interval offered by an agency. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BedroomRange {
    pub min: i32,
    pub max: i32,
}

impl BedroomRange {
    /// Builds a range, swapping the bounds when they arrive inverted.
    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn contains(&self, bedrooms: u32) -> bool {
        let wanted = i64::from(bedrooms);
        i64::from(self.min) <= wanted && wanted <= i64::from(self.max)
    }

    /// Parses `"N"` or `"N-M"`. Only the first hyphen splits, so `"1-2-3"` is malformed.
    pub fn parse_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Some(OPEN_BEDROOM_RANGE);
        }

        match trimmed.split_once('-') {
            Some((low, high)) => {
                let low = low.trim().parse::<i32>().ok()?;
                let high = high.trim().parse::<i32>().ok()?;
                Some(Self::new(low, high))
            }
            None => {
                let count = trimmed.parse::<i32>().ok()?;
                Some(Self::new(count, count))
            }
        }
    }
}

impl fmt::Display for BedroomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Fail-open parse of a catalog bedroom field. Missing, empty, or garbage input
/// yields `0-10` so the agency is never excluded for bad data.
pub fn parse_bedroom_range(offer: Option<&BedroomOffer>) -> BedroomRange {
    offer
        .and_then(BedroomOffer::resolve)
        .unwrap_or(OPEN_BEDROOM_RANGE)
}
