use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static MEASUREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)([a-zA-Z]+)").expect("measurement pattern is valid"));

static SPACED_UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s+([a-zA-Z]+)").expect("spacing pattern is valid"));

/// Quantity and unit pulled out of a free-text amount such as `"250g"`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ParsedMeasurement {
    pub quantity: Option<f64>,
    pub unit: Option<String>, // always lowercase
}

impl ParsedMeasurement {
    pub fn is_complete(&self) -> bool {
        self.quantity.is_some() && self.unit.is_some()
    }
}

/// Parses the first `<number><letters>` run in `text`.
///
/// Only the first match is considered, so `"2 pieces 250g"` yields `250g`
/// while `"1.5ml or 2g"` yields `1.5ml`. A number that does not parse (for
/// example `"1.2.3g"`) leaves the quantity empty but still reports the unit.
pub fn parse_measurement(text: &str) -> ParsedMeasurement {
    let Some(caps) = MEASUREMENT_RE.captures(text) else {
        return ParsedMeasurement::default();
    };

    let quantity = caps[1].parse::<f64>().ok();
    let unit = caps[2].to_lowercase();
    ParsedMeasurement {
        quantity,
        unit: Some(unit),
    }
}

/// Removes whitespace between a number and the unit that follows it, so
/// `"200 g"` becomes `"200g"`.
///
/// Text that already contains a `<number><letters>` run is returned trimmed but
/// otherwise untouched, so the first measurement stays the one that parses.
pub fn normalize_metric(text: &str) -> String {
    let text = text.trim();
    if MEASUREMENT_RE.is_match(text) {
        return text.to_string();
    }
    SPACED_UNIT_RE.replace_all(text, "$1$2").into_owned()
}
