use serde::{Deserialize, Serialize};

/// A resolved geographic position, either device-reported or typed by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Body of `POST /api/suggest`. Field names are the wire contract; absent
/// optionals must be omitted from the JSON, the server rejects unknown shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRequest {
    pub mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor: Option<bool>,
    pub budget: String,
    pub lat: f64,
    pub lon: f64,
}

/// The slice of the `/api/suggest` response this client reads. The live
/// server also ships `weather`, `tags`, `near_pois` and `elapsed_sec`; those
/// are ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: String,
    #[serde(default)]
    pub fallback: bool,
    #[serde(default)]
    pub degraded: bool,
    #[serde(default)]
    pub fallback_reason: Option<String>,
    #[serde(default)]
    pub weather_error: Option<String>,
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// A named suggestion category enriched with nearby physical places.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(default)]
    pub places: Option<Vec<Place>>,
}

impl Candidate {
    pub fn places(&self) -> &[Place] {
        self.places.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    pub distance_km: f64,
    pub osm_url: String,
}

/// One rendered suggestion card, derived from a block of suggestion text.
/// `index` is the 1-based ordinal shown on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub title: String,
    pub body: String,
}
