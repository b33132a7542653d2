//! Document model: sample point features and the in-memory store.
//!
//! Data flows into this layer from the network as a GeoJSON
//! `FeatureCollection`. Only point geometries are kept; each feature is
//! reduced to its sample id, a display label, and a geographic position.
//! The renderer and hit tester read from [`FeatureStore`] in insertion order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Value};

use crate::camera::LngLat;

/// Sample identifier as used by the selection store.
pub type SampleId = String;

/// A sample location drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFeature {
    pub id: SampleId,
    pub label: Option<String>,
    pub position: LngLat,
}

impl SampleFeature {
    /// Reduce a GeoJSON feature to a sample point.
    ///
    /// Returns `None` for non-point geometries and features without an id.
    /// The id is taken from `properties.id`, then `properties.sampleId`, then
    /// the feature's own `id`.
    #[must_use]
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let position = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(coords)) => point_position(coords)?,
            Some(Value::MultiPoint(points)) => point_position(points.first()?)?,
            _ => return None,
        };
        let id = property_id(feature, "id")
            .or_else(|| property_id(feature, "sampleId"))
            .or_else(|| feature_id(feature))?;
        let label = feature
            .property("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        Some(Self { id, label, position })
    }
}

fn point_position(coords: &[f64]) -> Option<LngLat> {
    match coords {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some(LngLat::new(*lon, *lat)),
        _ => None,
    }
}

fn property_id(feature: &Feature, key: &str) -> Option<SampleId> {
    match feature.property(key)? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn feature_id(feature: &Feature) -> Option<SampleId> {
    match feature.id.as_ref()? {
        Id::String(s) => Some(s.clone()),
        Id::Number(n) => Some(n.to_string()),
    }
}

/// In-memory store of the sample points currently on the map.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Vec<SampleFeature>,
}

impl FeatureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with the points of `collection`.
    pub fn load(&mut self, collection: &FeatureCollection) {
        self.features = collection.features.iter().filter_map(SampleFeature::from_feature).collect();
    }

    /// Remove every feature.
    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// All features in load order.
    #[must_use]
    pub fn features(&self) -> &[SampleFeature] {
        &self.features
    }

    /// Look up a feature by sample id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SampleFeature> {
        self.features.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
