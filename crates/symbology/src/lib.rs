//! Presentation attributes for rendered points.
//!
//! Pure functions of (feature, zoom, theme); no I/O, no retained state. The
//! rendering layer calls these per feature on every style refresh.

use serde::Serialize;

use formats::Feature;

/// Stroke color for points outside the active search result.
const NEUTRAL_STROKE: &str = "#666";

/// Fallback fill when a record carries no color of its own.
const NEUTRAL_FILL: &str = "#666";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Highest-contrast stroke for this theme.
    pub fn high_contrast(self) -> &'static str {
        match self {
            Theme::Light => "#000000",
            Theme::Dark => "#FFFFFF",
        }
    }
}

/// Style record handed to the map widget as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointStyle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Base style for a rendered point.
///
/// Radius scales with zoom; search-matched points get the theme's
/// high-contrast stroke, background points a fixed neutral gray. Fill always
/// comes from the record's own color.
pub fn point_style(feature: &Feature, zoom: f64, theme: Theme) -> PointStyle {
    let is_search = feature.properties.is_search;
    PointStyle {
        radius: zoom + if is_search { 3.0 } else { 2.0 },
        color: if is_search {
            theme.high_contrast().to_string()
        } else {
            NEUTRAL_STROKE.to_string()
        },
        fill_color: feature
            .properties
            .value
            .color
            .clone()
            .unwrap_or_else(|| NEUTRAL_FILL.to_string()),
        weight: if is_search { 2.0 } else { 1.0 },
        opacity: 1.0,
        fill_opacity: 0.7,
    }
}

/// Hover emphasis: base style with radius and weight bumped and the stroke
/// forced to the theme's high-contrast color regardless of search status.
pub fn highlighted_point_style(feature: &Feature, zoom: f64, theme: Theme) -> PointStyle {
    let mut style = point_style(feature, zoom, theme);
    let delta = if feature.properties.is_search { 1.0 } else { 2.0 };
    style.radius += delta;
    style.weight += delta;
    style.color = theme.high_contrast().to_string();
    style
}

/// Click emphasis shares the hover treatment.
pub fn clicked_point_style(feature: &Feature, zoom: f64, theme: Theme) -> PointStyle {
    highlighted_point_style(feature, zoom, theme)
}
