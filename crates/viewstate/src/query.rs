//! URL query parameters <-> view state, for shareable links.
//!
//! Parsing is deliberately loose, since these values arrive from hand-edited
//! address bars: a numeric prefix parses, trailing junk is ignored, and a
//! field with no usable prefix falls back to its zero default. Absent
//! parameters deserialize to `None`; only `location` has a non-`None`
//! fallback.

use serde::{Deserialize, Serialize};

pub const CLICKED_SPACE: &str = "clickedSpace";
pub const PLOT: &str = "plot";
pub const SEARCH_MODE: &str = "searchMode";
pub const SEARCH_VALUE: &str = "searchValue";
pub const LOCATION: &str = "location";

/// Viewport part of the query string, encoded as `"zoom,lat,lng"`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub zoom: i64,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(zoom: i64, lat: f64, lng: f64) -> Self {
        Self { zoom, lat, lng }
    }

    fn encode(&self) -> String {
        format!("{},{},{}", self.zoom, self.lat, self.lng)
    }

    fn decode(raw: &str) -> Self {
        let mut parts = raw.split(',');
        let zoom = parts.next().and_then(int_prefix).unwrap_or(0);
        let lat = parts.next().and_then(float_prefix).unwrap_or(0.0);
        let lng = parts.next().and_then(float_prefix).unwrap_or(0.0);
        Self { zoom, lat, lng }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub clicked_space: Option<String>,
    pub plot: Option<String>,
    pub search_mode: Option<String>,
    pub search_value: Option<String>,
    pub location: Location,
}

impl QueryParams {
    /// Serializes to query pairs; unset fields are omitted entirely.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: &Option<String>| {
            if let Some(v) = value {
                pairs.push((key.to_string(), v.clone()));
            }
        };
        push(CLICKED_SPACE, &self.clicked_space);
        push(LOCATION, &Some(self.location.encode()));
        push(PLOT, &self.plot);
        push(SEARCH_MODE, &self.search_mode);
        push(SEARCH_VALUE, &self.search_value);
        pairs
    }

    /// Rebuilds parameters from query pairs. Later duplicates win.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut params = QueryParams::default();
        for (key, value) in pairs {
            match key {
                CLICKED_SPACE => params.clicked_space = Some(value.to_string()),
                PLOT => params.plot = Some(value.to_string()),
                SEARCH_MODE => params.search_mode = Some(value.to_string()),
                SEARCH_VALUE => params.search_value = Some(value.to_string()),
                LOCATION => params.location = Location::decode(value),
                _ => {}
            }
        }
        params
    }
}

/// `parseInt`: optional sign, then the longest digit prefix.
fn int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .count();
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// `parseFloat`: the longest prefix that parses as a float.
fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    for i in (1..=s.len()).rev() {
        if s.is_char_boundary(i) && s[..i].parse::<f64>().is_ok() {
            end = i;
            break;
        }
    }
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}
