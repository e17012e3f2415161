//! Structured duration values used by the duration input controls

use crate::action::DelayValue;
use serde::{Deserialize, Serialize, Serializer};

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Decomposed duration, one optional number per unit.
///
/// This is the shape the duration input widgets edit. It is never stored
/// on its own: it is always derived from a [`DelayValue`] via
/// [`create_duration_data`], or emitted by a widget as the new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationData {
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_unit")]
    pub days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_unit")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_unit")]
    pub minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_unit")]
    pub seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_unit")]
    pub milliseconds: Option<f64>,
}

impl DurationData {
    /// Create a duration from hours, minutes, seconds and milliseconds
    pub fn new(hours: f64, minutes: f64, seconds: f64, milliseconds: f64) -> Self {
        Self {
            days: None,
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
            milliseconds: Some(milliseconds),
        }
    }

    /// Create a duration holding only a seconds value
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: Some(seconds),
            ..Self::default()
        }
    }

    /// Total length in milliseconds, with missing units counted as zero
    pub fn total_milliseconds(&self) -> f64 {
        self.days.unwrap_or(0.0) * MS_PER_DAY
            + self.hours.unwrap_or(0.0) * MS_PER_HOUR
            + self.minutes.unwrap_or(0.0) * MS_PER_MINUTE
            + self.seconds.unwrap_or(0.0) * MS_PER_SECOND
            + self.milliseconds.unwrap_or(0.0)
    }

    /// Same length split into hours, minutes (< 60), seconds (< 60) and
    /// milliseconds (< 1000). Negative totals clamp to zero.
    pub fn normalized(&self) -> Self {
        let total = self.total_milliseconds().max(0.0).round() as u64;
        Self::new(
            (total / MS_PER_HOUR as u64) as f64,
            ((total % MS_PER_HOUR as u64) / MS_PER_MINUTE as u64) as f64,
            ((total % MS_PER_MINUTE as u64) / MS_PER_SECOND as u64) as f64,
            (total % MS_PER_SECOND as u64) as f64,
        )
    }

    /// Format as `H:MM:SS`, or `H:MM:SS.mmm` when there is a sub-second part.
    ///
    /// Units are normalized, so `{ seconds: 90 }` formats as `0:01:30`.
    pub fn to_duration_string(&self) -> String {
        let n = self.normalized();
        let hours = n.hours.unwrap_or(0.0) as u64;
        let minutes = n.minutes.unwrap_or(0.0) as u64;
        let seconds = n.seconds.unwrap_or(0.0) as u64;
        let millis = n.milliseconds.unwrap_or(0.0) as u64;

        if millis > 0 {
            format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
        } else {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        }
    }
}

/// Whole unit values are written as integers (`30`, not `30.0`)
fn serialize_unit<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// Derive the structured duration for a stored delay value.
///
/// Never fails: empty text yields `None`, unparsable parts count as zero and
/// text with more than three `:`-separated parts yields `None`. Running it
/// again on the same input gives the same result.
pub fn create_duration_data(value: Option<&DelayValue>) -> Option<DurationData> {
    match value? {
        DelayValue::Text(text) => parse_duration_text(text),
        DelayValue::Seconds(number) => Some(DurationData::from_seconds(
            number.as_f64().unwrap_or(0.0),
        )),
        DelayValue::Structured(data) => Some(fold_days(data)),
    }
}

fn parse_duration_text(text: &str) -> Option<DurationData> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts: Vec<&str> = text.split(':').collect();
    match parts.len() {
        1 => Some(DurationData::from_seconds(parse_part(parts[0]))),
        2 | 3 => {
            let hours = parse_part(parts[0]);
            let minutes = parse_part(parts[1]);
            let seconds = parts.get(2).map(|p| parse_part(p)).unwrap_or(0.0);
            let whole = seconds.floor();
            // Round to four decimals first so float noise does not floor 0.1 s to 99 ms
            let tenths_of_ms = ((seconds - whole) * 10_000.0).round();
            Some(DurationData::new(
                hours,
                minutes,
                whole,
                (tenths_of_ms / 10.0).floor(),
            ))
        }
        _ => {
            log::debug!("Duration text has too many parts: {:?}", text);
            None
        }
    }
}

fn parse_part(part: &str) -> f64 {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn fold_days(data: &DurationData) -> DurationData {
    match data.days {
        None => data.clone(),
        Some(days) => DurationData {
            days: None,
            hours: Some(data.hours.unwrap_or(0.0) + days * 24.0),
            ..data.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DelayValue {
        DelayValue::Text(s.to_string())
    }

    #[test]
    fn test_missing_and_empty_values() {
        assert_eq!(create_duration_data(None), None);
        assert_eq!(create_duration_data(Some(&text(""))), None);
        assert_eq!(create_duration_data(Some(&text("   "))), None);
    }

    #[test]
    fn test_hms_text() {
        let data = create_duration_data(Some(&text("01:02:03"))).unwrap();
        assert_eq!(data, DurationData::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn test_fractional_seconds_split_into_milliseconds() {
        let data = create_duration_data(Some(&text("00:00:01.25"))).unwrap();
        assert_eq!(data.seconds, Some(1.0));
        assert_eq!(data.milliseconds, Some(250.0));

        let data = create_duration_data(Some(&text("0:0:0.1"))).unwrap();
        assert_eq!(data.milliseconds, Some(100.0));
    }

    #[test]
    fn test_two_parts_are_hours_and_minutes() {
        let data = create_duration_data(Some(&text("2:30"))).unwrap();
        assert_eq!(data, DurationData::new(2.0, 30.0, 0.0, 0.0));
    }

    #[test]
    fn test_single_part_is_seconds() {
        let data = create_duration_data(Some(&text("45"))).unwrap();
        assert_eq!(data, DurationData::from_seconds(45.0));
    }

    #[test]
    fn test_unparsable_parts_become_zero() {
        let data = create_duration_data(Some(&text("abc"))).unwrap();
        assert_eq!(data, DurationData::from_seconds(0.0));

        let data = create_duration_data(Some(&text("x:5:y"))).unwrap();
        assert_eq!(data, DurationData::new(0.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn test_too_many_parts() {
        assert_eq!(create_duration_data(Some(&text("1:2:3:4"))), None);
    }

    #[test]
    fn test_numeric_seconds() {
        let value = DelayValue::Seconds(serde_json::Number::from(90));
        let data = create_duration_data(Some(&value)).unwrap();
        assert_eq!(data, DurationData::from_seconds(90.0));
    }

    #[test]
    fn test_structured_days_fold_into_hours() {
        let value = DelayValue::Structured(DurationData {
            days: Some(1.0),
            hours: Some(2.0),
            minutes: Some(3.0),
            ..DurationData::default()
        });
        let data = create_duration_data(Some(&value)).unwrap();
        assert_eq!(data.days, None);
        assert_eq!(data.hours, Some(26.0));
        assert_eq!(data.minutes, Some(3.0));
    }

    #[test]
    fn test_structured_without_days_unchanged() {
        let inner = DurationData {
            minutes: Some(5.0),
            ..DurationData::default()
        };
        let value = DelayValue::Structured(inner.clone());
        assert_eq!(create_duration_data(Some(&value)), Some(inner));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let value = text("00:01:30.5");
        assert_eq!(
            create_duration_data(Some(&value)),
            create_duration_data(Some(&value))
        );
    }

    #[test]
    fn test_normalized() {
        let data = DurationData {
            days: Some(1.0),
            minutes: Some(75.0),
            seconds: Some(1.5),
            ..DurationData::default()
        };
        assert_eq!(data.normalized(), DurationData::new(25.0, 15.0, 1.0, 500.0));
        assert_eq!(
            DurationData::from_seconds(-3.0).normalized(),
            DurationData::new(0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_to_duration_string() {
        assert_eq!(DurationData::new(0.0, 0.0, 30.0, 0.0).to_duration_string(), "0:00:30");
        assert_eq!(DurationData::from_seconds(90.0).to_duration_string(), "0:01:30");
        assert_eq!(
            DurationData::new(1.0, 0.0, 2.0, 5.0).to_duration_string(),
            "1:00:02.005"
        );
    }

    #[test]
    fn test_serialization_skips_missing_units() {
        let json = serde_json::to_string(&DurationData::from_seconds(5.0)).unwrap();
        assert_eq!(json, r#"{"seconds":5}"#);

        let json = serde_json::to_string(&DurationData::from_seconds(1.5)).unwrap();
        assert_eq!(json, r#"{"seconds":1.5}"#);
    }
}
