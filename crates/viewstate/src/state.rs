//! Mutable UI-facing values that drive rendering.
//!
//! One explicit struct owned by the UI shell and passed by reference to
//! consumers; there are no module-level singletons. All writes happen from
//! the single main execution context, so the cells need no interior
//! mutability even while several searches are in flight.

use serde::{Deserialize, Serialize};

use model::{LatLng, SearchResult, Space};

/// Created once at application start; lives for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f64,
    pub show_map: bool,
    pub latlng: LatLng,
    pub hover_point: Option<Space>,
    pub clicked_point: Option<Space>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 0.0,
            show_map: true,
            latlng: LatLng::default(),
            hover_point: None,
            clicked_point: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    pub fn set_latlng(&mut self, latlng: LatLng) {
        self.latlng = latlng;
    }

    pub fn toggle_map(&mut self) {
        self.show_map = !self.show_map;
    }

    pub fn set_hover(&mut self, space: Space) {
        self.hover_point = Some(space);
    }

    pub fn clear_hover(&mut self) {
        self.hover_point = None;
    }

    pub fn set_clicked(&mut self, space: Space) {
        self.clicked_point = Some(space);
    }

    pub fn clear_clicked(&mut self) {
        self.clicked_point = None;
    }

    /// Recenters on the server-suggested viewport of a successful search.
    ///
    /// Failed searches never reach this method; existing state stays as-is.
    pub fn apply_search_result(&mut self, result: &SearchResult) {
        self.zoom = result.zoom;
        self.latlng = result.latlng;
    }
}
