// src/views/places_view.rs
// DOCUMENTATION: Text rendering of the available-places state
// PURPOSE: Loading indicator, error banner or place list, in that priority

use crate::models::PlacesSnapshot;

pub const TITLE: &str = "Available Places";
pub const FETCHING_TEXT: &str = "Fetching available places...";
pub const EMPTY_TEXT: &str = "Unfortunately, no places could be found.";

/// Render a snapshot
/// DOCUMENTATION: The error banner wins over the loading text; the list is
/// only shown once loading has finished
pub fn render(snapshot: &PlacesSnapshot) -> String {
    let mut out = format!("== {} ==\n", TITLE);

    if !snapshot.error.is_empty() {
        out.push_str(&format!("! {}\n", snapshot.error));
        return out;
    }

    if snapshot.is_fetching {
        out.push_str(&format!("{}\n", FETCHING_TEXT));
        return out;
    }

    match &snapshot.places {
        None => {}
        Some(places) if places.is_empty() => {
            out.push_str(&format!("{}\n", EMPTY_TEXT));
        }
        Some(places) => {
            for (i, place) in places.iter().enumerate() {
                out.push_str(&format!(
                    "{:>3}. {}\n",
                    i + 1,
                    place.display_name().unwrap_or("(untitled)")
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Place;
    use serde_json::json;

    fn titled(title: &str) -> Place {
        serde_json::from_value(json!({ "title": title })).unwrap()
    }

    #[test]
    fn test_idle_renders_heading_only() {
        let out = render(&PlacesSnapshot::new(None, false, String::new()));
        assert_eq!(out, "== Available Places ==\n");
    }

    #[test]
    fn test_fetching() {
        let out = render(&PlacesSnapshot::new(None, true, String::new()));
        assert!(out.contains(FETCHING_TEXT));
    }

    #[test]
    fn test_error_wins_over_loading() {
        let out = render(&PlacesSnapshot::new(None, true, "boom".to_string()));
        assert!(out.contains("! boom"));
        assert!(!out.contains(FETCHING_TEXT));
    }

    #[test]
    fn test_empty_list() {
        let out = render(&PlacesSnapshot::new(Some(vec![]), false, String::new()));
        assert!(out.contains(EMPTY_TEXT));
    }

    #[test]
    fn test_list_in_order() {
        let places = vec![titled("Lake"), Place::default(), titled("Peak")];
        let out = render(&PlacesSnapshot::new(Some(places), false, String::new()));

        assert_eq!(
            out,
            "== Available Places ==\n  1. Lake\n  2. (untitled)\n  3. Peak\n"
        );
    }
}
