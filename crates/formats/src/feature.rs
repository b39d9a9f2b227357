//! Map-rendering representation of domain records.
//!
//! Spaces are rebuilt into a GeoJSON-shaped `FeatureCollection` on every data
//! refresh; collections are never mutated in place. The transform is pure and
//! linear in the record count, so callers may run it on every render frame.

use serde::{Deserialize, Serialize};

use model::{Coords, Space, SpaceValue};

/// Point geometry for one feature.
///
/// Coordinate order is fixed to standard GeoJSON axis order: `[x, y]`,
/// longitude-like first. Everything downstream of this type relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coordinates: [x, y],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    pub id: String,
    pub zoom: f64,
    pub tile_x: f64,
    pub tile_y: f64,
    /// Whether this record matched the active search filter. Affects styling
    /// only, never geometry.
    pub is_search: bool,
    pub value: SpaceValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: PointGeometry,
}

impl Feature {
    pub fn from_space(space: &Space, coords: Coords, is_search: bool) -> Self {
        Self {
            properties: FeatureProperties {
                id: space.id.clone(),
                zoom: coords.z,
                tile_x: coords.x,
                tile_y: coords.y,
                is_search,
                value: space.value.clone(),
            },
            geometry: PointGeometry::new(space.x, space.y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Concatenates two collections, preserving order within each.
    ///
    /// Callers build the search-matched and background subsets separately and
    /// merge them before handing the result to the rendering layer.
    pub fn merge(mut self, other: FeatureCollection) -> Self {
        self.features.extend(other.features);
        self
    }
}

/// Builds one feature per record, order-preserving, no deduplication.
///
/// `is_search` applies uniformly to the whole batch. Records with sparse
/// value bags still produce features; absent fields stay absent.
pub fn to_feature_collection(
    spaces: &[Space],
    coords: Coords,
    is_search: bool,
) -> FeatureCollection {
    FeatureCollection {
        features: spaces
            .iter()
            .map(|s| Feature::from_space(s, coords, is_search))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureCollection, to_feature_collection};
    use model::{Coords, Space, SpaceValue};
    use pretty_assertions::assert_eq;

    fn space(id: &str, x: f64, y: f64) -> Space {
        Space::new(
            id,
            x,
            y,
            SpaceValue {
                word: Some(id.to_string()),
                color: Some("#00ff00".to_string()),
                ..SpaceValue::default()
            },
        )
    }

    #[test]
    fn one_feature_per_record_in_input_order() {
        let spaces = vec![space("a", 1.0, 2.0), space("b", 3.0, 4.0)];
        let fc = to_feature_collection(&spaces, Coords::new(5.0, 6.0, 7.0), true);
        assert_eq!(fc.len(), spaces.len());
        let ids: Vec<&str> = fc
            .features
            .iter()
            .map(|f| f.properties.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_short_circuits() {
        let fc = to_feature_collection(&[], Coords::new(0.0, 0.0, 1.0), true);
        assert_eq!(fc, FeatureCollection::default());
        assert!(fc.is_empty());
    }

    #[test]
    fn geometry_is_x_then_y() {
        let fc = to_feature_collection(&[space("a", 1.0, 2.0)], Coords::default(), false);
        assert_eq!(fc.features[0].geometry.coordinates, [1.0, 2.0]);
    }

    #[test]
    fn sparse_value_bag_still_produces_a_feature() {
        let bare = Space::new("bare", 0.5, 0.5, SpaceValue::default());
        let fc = to_feature_collection(&[bare], Coords::default(), false);
        assert_eq!(fc.len(), 1);
        assert_eq!(fc.features[0].properties.value.word, None);
    }

    #[test]
    fn serializes_as_geojson() {
        let fc = to_feature_collection(&[space("a", 1.0, 2.0)], Coords::new(0.0, 0.0, 3.0), true);
        let json = serde_json::to_value(&fc).expect("serialize");
        assert_eq!(json["type"], "FeatureCollection");
        let feature = &json["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], 1.0);
        assert_eq!(feature["properties"]["isSearch"], true);
        assert_eq!(feature["properties"]["tileX"], 0.0);
    }

    #[test]
    fn merge_concatenates_in_order() {
        let a = to_feature_collection(&[space("a", 1.0, 1.0)], Coords::default(), true);
        let b = to_feature_collection(&[space("b", 2.0, 2.0)], Coords::default(), false);
        let merged = a.merge(b);
        assert_eq!(merged.len(), 2);
        assert!(merged.features[0].properties.is_search);
        assert!(!merged.features[1].properties.is_search);
    }
}
