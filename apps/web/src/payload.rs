//! Turns raw form field values plus the session's resolved location into a
//! validated suggestion request.

use crate::domain::{Coordinates, SuggestionRequest};
use crate::error::SuggestError;

/// Raw string values read from the form surface. Empty string means the
/// field was left blank.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub mood: String,
    pub radius_km: String,
    pub indoor: String,
    pub budget: String,
    pub lat: String,
    pub lon: String,
}

/// Gathered but not yet validated payload. `coords` stays `None` when
/// neither the device nor the manual fields produced a usable position.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadDraft {
    pub mood: String,
    pub radius_km: Option<f64>,
    pub indoor: Option<bool>,
    pub budget: String,
    pub coords: Option<Coordinates>,
}

/// Gathers form fields and the resolved location into a draft. A resolved
/// device location always wins over manually typed coordinates.
pub fn collect(form: &FormSnapshot, device: Option<Coordinates>) -> PayloadDraft {
    PayloadDraft {
        mood: form.mood.trim().to_string(),
        radius_km: parse_number(&form.radius_km),
        indoor: parse_tri_state(&form.indoor),
        budget: form.budget.trim().to_string(),
        coords: device.or_else(|| manual_coordinates(form)),
    }
}

/// Pre-submission checks. A failure here blocks the submission entirely; no
/// network call is made.
pub fn validate(draft: PayloadDraft) -> Result<SuggestionRequest, SuggestError> {
    let Some(coords) = draft.coords.filter(|coords| coords.is_finite()) else {
        return Err(SuggestError::InvalidLocation);
    };
    if draft.radius_km.is_some_and(|radius| radius <= 0.0) {
        return Err(SuggestError::InvalidRadius);
    }
    Ok(SuggestionRequest {
        mood: draft.mood,
        radius_km: draft.radius_km,
        indoor: draft.indoor,
        budget: draft.budget,
        lat: coords.lat,
        lon: coords.lon,
    })
}

/// A field is a number only if it parses to a finite non-NaN float.
/// Anything else is absent, never zero and never null.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Literal "true"/"false" or absent. The form may legitimately leave the
/// preference unspecified.
fn parse_tri_state(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Manual coordinates are only used when both fields are non-empty after
/// trimming and both parse as finite floats.
fn manual_coordinates(form: &FormSnapshot) -> Option<Coordinates> {
    let lat = form.lat.trim();
    let lon = form.lon.trim();
    if lat.is_empty() || lon.is_empty() {
        return None;
    }
    let coords = Coordinates {
        lat: parse_number(lat)?,
        lon: parse_number(lon)?,
    };
    Some(coords)
}

#[cfg(test)]
mod tests {
    use super::{collect, validate, FormSnapshot};
    use crate::domain::Coordinates;
    use crate::error::SuggestError;

    fn form(fields: &[(&str, &str)]) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        for (name, value) in fields {
            let slot = match *name {
                "mood" => &mut snapshot.mood,
                "radius_km" => &mut snapshot.radius_km,
                "indoor" => &mut snapshot.indoor,
                "budget" => &mut snapshot.budget,
                "lat" => &mut snapshot.lat,
                "lon" => &mut snapshot.lon,
                other => panic!("unknown field {other}"),
            };
            *slot = (*value).to_string();
        }
        snapshot
    }

    const DEVICE: Coordinates = Coordinates { lat: 35.6812, lon: 139.7671 };

    #[test]
    fn missing_coordinates_are_rejected() {
        let draft = collect(&form(&[("mood", "relaxed")]), None);
        assert_eq!(validate(draft), Err(SuggestError::InvalidLocation));
    }

    #[test]
    fn non_numeric_manual_coordinates_are_rejected() {
        let draft = collect(&form(&[("lat", "here"), ("lon", "139.7")]), None);
        assert_eq!(validate(draft), Err(SuggestError::InvalidLocation));
    }

    #[test]
    fn nan_manual_coordinates_are_rejected() {
        let draft = collect(&form(&[("lat", "NaN"), ("lon", "139.7")]), None);
        assert_eq!(validate(draft), Err(SuggestError::InvalidLocation));
    }

    #[test]
    fn one_manual_coordinate_alone_is_not_enough() {
        let draft = collect(&form(&[("lat", "35.6")]), None);
        assert_eq!(validate(draft), Err(SuggestError::InvalidLocation));
    }

    #[test]
    fn device_location_beats_manual_fields() {
        let draft = collect(&form(&[("lat", "1.0"), ("lon", "2.0")]), Some(DEVICE));
        let request = validate(draft).unwrap();
        assert_eq!(request.lat, DEVICE.lat);
        assert_eq!(request.lon, DEVICE.lon);
    }

    #[test]
    fn manual_coordinates_used_without_device_fix() {
        let draft = collect(&form(&[("lat", " 35.1 "), ("lon", "139.2")]), None);
        let request = validate(draft).unwrap();
        assert_eq!(request.lat, 35.1);
        assert_eq!(request.lon, 139.2);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let draft = collect(&form(&[("radius_km", "0")]), Some(DEVICE));
        assert_eq!(validate(draft), Err(SuggestError::InvalidRadius));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let draft = collect(&form(&[("radius_km", "-2.5")]), Some(DEVICE));
        assert_eq!(validate(draft), Err(SuggestError::InvalidRadius));
    }

    #[test]
    fn absent_or_positive_radius_passes() {
        let none = collect(&form(&[]), Some(DEVICE));
        assert_eq!(validate(none).unwrap().radius_km, None);

        let positive = collect(&form(&[("radius_km", "3")]), Some(DEVICE));
        assert_eq!(validate(positive).unwrap().radius_km, Some(3.0));
    }

    #[test]
    fn unparseable_radius_is_absent_not_zero() {
        let draft = collect(&form(&[("radius_km", "a few")]), Some(DEVICE));
        assert_eq!(draft.radius_km, None);
    }

    #[test]
    fn indoor_is_tri_state() {
        assert_eq!(collect(&form(&[("indoor", "true")]), None).indoor, Some(true));
        assert_eq!(collect(&form(&[("indoor", "false")]), None).indoor, Some(false));
        assert_eq!(collect(&form(&[("indoor", "")]), None).indoor, None);
        assert_eq!(collect(&form(&[("indoor", "maybe")]), None).indoor, None);
    }

    #[test]
    fn mood_and_budget_are_trimmed_but_may_be_empty() {
        let draft = collect(&form(&[("mood", "  calm  "), ("budget", "")]), Some(DEVICE));
        assert_eq!(draft.mood, "calm");
        assert_eq!(draft.budget, "");
    }

    #[test]
    fn absent_optionals_are_omitted_from_the_body() {
        let draft = collect(&form(&[("mood", "calm")]), Some(DEVICE));
        let body = serde_json::to_string(&validate(draft).unwrap()).unwrap();
        assert!(!body.contains("radius_km"));
        assert!(!body.contains("indoor"));
        assert!(body.contains("\"mood\":\"calm\""));
    }
}
