//! Validation and normalization of new event submissions.
//!
//! Submissions arrive as loosely-typed JSON (typically from an HTML form), so
//! numbers may come in as strings and dates/times in the browser's machine
//! formats. `validate_and_normalize` turns such a payload into a `NewEvent`
//! in canonical form, or reports everything that is wrong with it.

use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::event::{Category, NewEvent};

/// Fields every submission must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 6] = ["name", "date", "time", "category", "lat", "lng"];

/// Why a submission was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Request body must be JSON")]
    MalformedInput,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Category must be one of: {}", Category::allowed().join(", "))]
    InvalidCategory(String),

    #[error("lat must be -90..90 and lng must be -180..180")]
    InvalidCoordinates,

    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Validate a raw submission and normalize it into a storable event.
pub fn validate_and_normalize(payload: &Value) -> Result<NewEvent, ValidationError> {
    let data = match payload {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::MalformedInput),
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| text_field(data, field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    // Matched on the submitted string as-is, so " Music" is rejected
    let raw_category = data.get("category").and_then(Value::as_str).unwrap_or_default();
    let category = Category::parse(raw_category)
        .ok_or_else(|| ValidationError::InvalidCategory(raw_category.to_string()))?;

    let lat = coordinate(data.get("lat"), 90.0)?;
    let lng = coordinate(data.get("lng"), 180.0)?;

    let paid = data.get("paid").is_some_and(truthy);
    let price = if paid { price(data.get("price"))? } else { 0.0 };

    Ok(NewEvent {
        name: text_field(data, "name").unwrap_or_default(),
        date: normalize_date(&text_field(data, "date").unwrap_or_default()),
        time: normalize_time(&text_field(data, "time").unwrap_or_default()),
        category,
        district: text_field(data, "district").unwrap_or_default(),
        place: text_field(data, "place").unwrap_or_default(),
        description: text_field(data, "description").unwrap_or_default(),
        lat,
        lng,
        paid,
        price,
    })
}

/// Reformat a strict `YYYY-MM-DD` date as "March 10, 2026".
/// Anything else is returned trimmed but otherwise unchanged.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if !matches_shape(raw, "dddd-dd-dd") {
        return raw.to_string();
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Reformat a strict 24-hour `HH:MM` time as "7:00 PM".
/// Anything else is returned trimmed but otherwise unchanged.
pub fn normalize_time(raw: &str) -> String {
    let raw = raw.trim();
    if !matches_shape(raw, "dd:dd") {
        return raw.to_string();
    }

    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Check `s` against a pattern where `d` is an ASCII digit and any other
/// character must match literally.
fn matches_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// Trimmed, non-blank text of a field. Numbers and booleans count through
/// their textual form; null, arrays and objects count as absent.
fn text_field(data: &Map<String, Value>, field: &str) -> Option<String> {
    let text = match data.get(field)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    (!text.is_empty()).then_some(text)
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coordinate(value: Option<&Value>, limit: f64) -> Result<f64, ValidationError> {
    number(value)
        .filter(|n| (-limit..=limit).contains(n))
        .ok_or(ValidationError::InvalidCoordinates)
}

fn price(value: Option<&Value>) -> Result<f64, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => number(Some(v))
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(ValidationError::InvalidPrice),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "  Rock Concert ",
            "date": "2026-03-10",
            "time": "19:00",
            "category": "Music",
            "district": " Ernakulam ",
            "place": "Kochi",
            "lat": 9.9312,
            "lng": "76.2673",
        })
    }

    // --- date/time normalization ---

    #[test]
    fn date_machine_format_is_humanized() {
        assert_eq!(normalize_date("2026-03-10"), "March 10, 2026");
        assert_eq!(normalize_date("2026-05-02"), "May 2, 2026");
        assert_eq!(normalize_date(" 2026-12-31 "), "December 31, 2026");
    }

    #[test]
    fn date_other_formats_pass_through() {
        assert_eq!(normalize_date("March 10, 2026"), "March 10, 2026");
        assert_eq!(normalize_date("2026-3-10"), "2026-3-10");
        assert_eq!(normalize_date("2026-02-30"), "2026-02-30");
        assert_eq!(normalize_date("next friday"), "next friday");
    }

    #[test]
    fn time_machine_format_is_humanized() {
        assert_eq!(normalize_time("19:00"), "7:00 PM");
        assert_eq!(normalize_time("09:05"), "9:05 AM");
        assert_eq!(normalize_time("00:30"), "12:30 AM");
        assert_eq!(normalize_time("12:00"), "12:00 PM");
    }

    #[test]
    fn time_other_formats_pass_through() {
        assert_eq!(normalize_time("7:00 PM"), "7:00 PM");
        assert_eq!(normalize_time("9:05"), "9:05");
        assert_eq!(normalize_time("25:00"), "25:00");
        assert_eq!(normalize_time("19:00:00"), "19:00:00");
    }

    // --- happy path ---

    #[test]
    fn valid_payload_is_normalized() {
        let event = validate_and_normalize(&valid_payload()).unwrap();

        assert_eq!(event.name, "Rock Concert");
        assert_eq!(event.date, "March 10, 2026");
        assert_eq!(event.time, "7:00 PM");
        assert_eq!(event.category, Category::Music);
        assert_eq!(event.district, "Ernakulam");
        assert_eq!(event.place, "Kochi");
        assert_eq!(event.description, "");
        assert_eq!(event.lat, 9.9312);
        assert_eq!(event.lng, 76.2673);
        assert!(!event.paid);
        assert_eq!(event.price, 0.0);
    }

    #[test]
    fn human_readable_date_and_time_are_kept() {
        let mut payload = valid_payload();
        payload["date"] = json!("March 22, 2026");
        payload["time"] = json!("8:00 PM");

        let event = validate_and_normalize(&payload).unwrap();
        assert_eq!(event.date, "March 22, 2026");
        assert_eq!(event.time, "8:00 PM");
    }

    // --- paid / price ---

    #[test]
    fn unpaid_forces_price_to_zero() {
        for paid in [json!(false), json!(0), json!("no"), Value::Null] {
            let mut payload = valid_payload();
            payload["paid"] = paid.clone();
            payload["price"] = json!(500);

            let event = validate_and_normalize(&payload).unwrap();
            assert!(!event.paid, "{paid}");
            assert_eq!(event.price, 0.0, "{paid}");
        }
    }

    #[test]
    fn paid_parses_price() {
        let mut payload = valid_payload();
        payload["paid"] = json!(true);
        payload["price"] = json!("250.5");

        let event = validate_and_normalize(&payload).unwrap();
        assert!(event.paid);
        assert_eq!(event.price, 250.5);
    }

    #[test]
    fn paid_without_price_is_free_of_charge() {
        let mut payload = valid_payload();
        payload["paid"] = json!("true");

        let event = validate_and_normalize(&payload).unwrap();
        assert!(event.paid);
        assert_eq!(event.price, 0.0);
    }

    #[test]
    fn paid_with_bad_price_is_rejected() {
        for bad in [json!("lots"), json!(-10), json!([1])] {
            let mut payload = valid_payload();
            payload["paid"] = json!(1);
            payload["price"] = bad;

            assert_eq!(
                validate_and_normalize(&payload),
                Err(ValidationError::InvalidPrice)
            );
        }
    }

    // --- rejections ---

    #[test]
    fn non_object_or_empty_body_is_malformed() {
        for body in [json!(null), json!([]), json!("event"), json!({})] {
            assert_eq!(
                validate_and_normalize(&body),
                Err(ValidationError::MalformedInput)
            );
        }
    }

    #[test]
    fn every_missing_field_is_reported() {
        let payload = json!({ "name": "   ", "time": "19:00", "category": "Music", "lng": null });

        let err = validate_and_normalize(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                "name".to_string(),
                "date".to_string(),
                "lat".to_string(),
                "lng".to_string(),
            ])
        );
        assert_eq!(err.to_string(), "Missing required fields: name, date, lat, lng");
    }

    #[test]
    fn unknown_category_lists_allowed_values() {
        let mut payload = valid_payload();
        payload["category"] = json!("Opera");

        let err = validate_and_normalize(&payload).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory("Opera".to_string()));
        assert_eq!(
            err.to_string(),
            "Category must be one of: Art, Dance, Music, Sports, Tech"
        );
    }

    #[test]
    fn category_match_is_exact() {
        for category in ["music", " Music", "MUSIC"] {
            let mut payload = valid_payload();
            payload["category"] = json!(category);
            assert!(matches!(
                validate_and_normalize(&payload),
                Err(ValidationError::InvalidCategory(_))
            ));
        }
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let mut payload = valid_payload();
        payload["lat"] = json!(95);

        assert_eq!(
            validate_and_normalize(&payload),
            Err(ValidationError::InvalidCoordinates)
        );
    }

    #[test]
    fn unparseable_or_out_of_range_coordinates_share_one_error() {
        for (lat, lng) in [
            (json!("north"), json!(76.0)),
            (json!(10.0), json!(-180.5)),
            (json!(true), json!(76.0)),
            (json!("NaN"), json!(76.0)),
        ] {
            let mut payload = valid_payload();
            payload["lat"] = lat;
            payload["lng"] = lng;

            assert_eq!(
                validate_and_normalize(&payload),
                Err(ValidationError::InvalidCoordinates)
            );
        }
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        let mut payload = valid_payload();
        payload["lat"] = json!(-90);
        payload["lng"] = json!("180");

        let event = validate_and_normalize(&payload).unwrap();
        assert_eq!(event.lat, -90.0);
        assert_eq!(event.lng, 180.0);
    }
}
