use serde::{Deserialize, Serialize};

use crate::coords::LatLng;
use crate::space::Space;

/// Full response for one search request: the matching spaces plus a
/// server-suggested viewport to recenter on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub latlng: LatLng,
    #[serde(default)]
    pub zoom: f64,
}

#[cfg(test)]
mod tests {
    use super::SearchResult;

    #[test]
    fn parses_wire_response() {
        let raw = r#"{
            "spaces": [{"id": "s1", "x": 1.0, "y": 2.0, "value": {"word": "K00001"}}],
            "latlng": {"lat": 10.0, "lng": 20.0},
            "zoom": 3
        }"#;
        let result: SearchResult = serde_json::from_str(raw).expect("parse");
        assert_eq!(result.spaces.len(), 1);
        assert_eq!(result.spaces[0].id, "s1");
        assert_eq!(result.latlng.lat, 10.0);
        assert_eq!(result.zoom, 3.0);
    }
}
