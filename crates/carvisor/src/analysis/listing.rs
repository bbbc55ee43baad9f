use serde::{Deserialize, Serialize};

/// Canonical analysis request. The upstream crawler/store is responsible for
/// mapping localized listing fields onto this schema; the scoring pipeline
/// never guesses between field aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub year: Option<i32>,
    pub mileage: Option<u32>,
    /// Free-text engine power as scraped, e.g. "150 hp" or "101-125".
    pub engine_power: Option<String>,
    /// Free-text engine displacement as scraped, e.g. "1600 cc" or "1301-1600".
    pub engine_volume: Option<String>,
    pub make: Option<String>,
    pub series: Option<String>,
    pub model: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    pub drive_type: Option<String>,
    pub price: Option<String>,
    /// `None` means the listing carried no bodywork section at all, which is
    /// reported as "damage score unavailable". Empty lists mean pristine.
    pub parts: Option<PartReport>,
    /// Overrides the calendar year used for age math, for reproducible
    /// analysis in tests and demos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

/// Bodywork condition lists as reported by the source listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartReport {
    #[serde(default)]
    pub changed: Vec<String>,
    #[serde(default)]
    pub painted: Vec<String>,
    #[serde(default)]
    pub local_painted: Vec<String>,
}

impl PartReport {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.painted.is_empty() && self.local_painted.is_empty()
    }
}

/// Default substituted when the engine power field is absent or unparseable.
pub const DEFAULT_ENGINE_POWER_HP: u32 = 100;
/// Default substituted when the engine volume field is absent or unparseable.
pub const DEFAULT_ENGINE_VOLUME_CCM: u32 = 1500;

/// Extract a numeric value from a scraped spec string.
///
/// Listings carry engine specs either as a plain number with optional units
/// ("150 hp", "1600 cc") or as a bracket ("101-125", "1301-1600"), in which
/// case the midpoint of the bracket is used. Anything else falls back to the
/// documented default; leniency here is deliberate policy, not error
/// swallowing.
pub fn parse_spec_number(text: Option<&str>, default: u32) -> u32 {
    let Some(text) = text else {
        return default;
    };

    if let Some((low, high)) = parse_range(text) {
        return (low + high) / 2;
    }

    first_integer(text).unwrap_or(default)
}

fn parse_range(text: &str) -> Option<(u32, u32)> {
    let (head, tail) = text.split_once('-')?;
    let low = trailing_integer(head)?;
    let high = first_integer(tail)?;
    Some((low, high))
}

fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn trailing_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim_end();
    let start = trimmed.rfind(|c: char| !c.is_ascii_digit());
    let digits = match start {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
