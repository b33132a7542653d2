//! Hit-testing sample points against screen positions and rectangles.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::collections::HashSet;

use crate::camera::{Camera, Point};
use crate::consts::HIT_RADIUS_PX;
use crate::doc::{FeatureStore, SampleId};

/// Axis-aligned screen rectangle spanned by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: Point,
    pub max: Point,
}

impl ScreenRect {
    /// Normalize two arbitrary corners into a min/max rectangle.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `p` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// The sample point nearest to `screen_pt`, if one lies within the hit radius.
///
/// Later features win ties so the point drawn on top is the one picked.
#[must_use]
pub fn hit_test(screen_pt: Point, doc: &FeatureStore, camera: &Camera) -> Option<SampleId> {
    let mut best: Option<(&str, f64)> = None;
    for feature in doc.features() {
        let d = camera.lnglat_to_screen(feature.position).distance(screen_pt);
        if d > HIT_RADIUS_PX {
            continue;
        }
        if best.is_none_or(|(_, best_d)| d <= best_d) {
            best = Some((feature.id.as_str(), d));
        }
    }
    best.map(|(id, _)| id.to_owned())
}

/// Ids of every sample point whose screen position lies inside `rect`.
///
/// Duplicate ids (a sample with several locations) are reported once.
#[must_use]
pub fn features_in_rect(rect: ScreenRect, doc: &FeatureStore, camera: &Camera) -> Vec<SampleId> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<SampleId> = Vec::new();
    for feature in doc.features() {
        if rect.contains(camera.lnglat_to_screen(feature.position)) && seen.insert(feature.id.as_str()) {
            out.push(feature.id.clone());
        }
    }
    out
}
