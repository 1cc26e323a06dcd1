// src/models/place.rs
// DOCUMENTATION: Data structures received from the places backend
// PURPOSE: Deserialize the response envelope and the places inside it

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single listing record returned by the backend
/// DOCUMENTATION: The shape is owned by the backend, so the record keeps the
/// JSON object verbatim and only interprets fields on read
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place {
    fields: Map<String, Value>,
}

/// Image reference attached to a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl Place {
    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    /// `image: { src, alt }`, if present and well-formed
    pub fn image(&self) -> Option<PlaceImage> {
        self.get("image")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// `(lat, lon)` when both are numbers
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.get("lat").and_then(Value::as_f64)?;
        let lon = self.get("lon").and_then(Value::as_f64)?;
        Some((lat, lon))
    }

    /// Label used by the view: title, then name, then id
    pub fn display_name(&self) -> Option<&str> {
        self.title()
            .or_else(|| self.str_field("name"))
            .or_else(|| self.id())
    }
}

/// Top-level response body: `{ "places": [...] }`
/// DOCUMENTATION: Only lives long enough to be unwrapped
#[derive(Debug, Deserialize)]
pub struct PlacesEnvelope {
    pub places: Vec<Place>,
}

impl PlacesEnvelope {
    /// Extract the inner list, order preserved
    pub fn into_places(self) -> Vec<Place> {
        self.places
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwraps_in_order() {
        let body = json!({
            "places": [
                {
                    "id": "p1",
                    "title": "Forest Waterfall",
                    "image": { "src": "forest-waterfall.jpg", "alt": "A tranquil forest" },
                    "lat": 44.5588,
                    "lon": -80.344
                },
                { "id": "p2", "title": "Sahara Desert Dunes" },
                { "id": "p3", "title": "Himalayan Peaks" }
            ]
        });

        let places = serde_json::from_value::<PlacesEnvelope>(body)
            .unwrap()
            .into_places();

        let ids: Vec<_> = places.iter().filter_map(Place::id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(
            places[0].image(),
            Some(PlaceImage {
                src: "forest-waterfall.jpg".to_string(),
                alt: "A tranquil forest".to_string(),
            })
        );
        assert_eq!(places[0].coordinates(), Some((44.5588, -80.344)));
        assert_eq!(places[1].image(), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = json!({ "name": "A", "id": 7, "rating": 4.5, "tags": ["quiet"] });
        let place: Place = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(place.display_name(), Some("A"));
        // non-string id is kept, just not interpreted
        assert_eq!(place.id(), None);
        assert_eq!(place.get("id"), Some(&json!(7)));
        assert_eq!(serde_json::to_value(&place).unwrap(), raw);
    }

    #[test]
    fn test_display_name_fallbacks() {
        let titled: Place = serde_json::from_value(json!({ "id": "p1", "title": "Lake" })).unwrap();
        assert_eq!(titled.display_name(), Some("Lake"));

        let id_only: Place = serde_json::from_value(json!({ "id": "p9" })).unwrap();
        assert_eq!(id_only.display_name(), Some("p9"));

        assert_eq!(Place::default().display_name(), None);
    }

    #[test]
    fn test_envelope_requires_places_field() {
        let result = serde_json::from_value::<PlacesEnvelope>(json!({ "items": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_place_must_be_an_object() {
        let result = serde_json::from_value::<PlacesEnvelope>(json!({ "places": ["A"] }));
        assert!(result.is_err());
    }
}
