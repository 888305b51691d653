use serde_json::{Map, Value};

/// Rendered in place of a reading the provider did not return
pub const MISSING_VALUE: &str = "None";

/// Rendered in place of a unit the provider did not return
pub const MISSING_UNIT: &str = "N/A";

/// Render one current reading as `"<value> <unit>"`.
///
/// A missing or null value becomes `None` and a missing or null unit becomes `N/A`,
/// so one absent field never fails the whole record.
pub fn format_reading(current: &Map<String, Value>, units: &Map<String, Value>, field: &str) -> String {
    let value = render(current.get(field)).unwrap_or_else(|| MISSING_VALUE.to_string());
    let unit = render(units.get(field)).unwrap_or_else(|| MISSING_UNIT.to_string());
    format!("{value} {unit}")
}

fn render(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
