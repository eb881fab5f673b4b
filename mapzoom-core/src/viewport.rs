/// Zoom level and map center currently displayed.
///
/// Fields stay `None` until the page or a server response provides them.
/// Undefined fields are left out of outgoing requests so the server can fall
/// back to its own defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub zoom: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ViewportState {
    pub fn new(zoom: f64, x: f64, y: f64) -> Self {
        Self {
            zoom: Some(zoom),
            x: Some(x),
            y: Some(y),
        }
    }

    /// Build the initial state from page-provided strings (e.g. `data-*`
    /// attributes). Missing or unparsable values stay undefined.
    pub fn from_page_values(zoom: Option<&str>, x: Option<&str>, y: Option<&str>) -> Self {
        fn parse(value: Option<&str>) -> Option<f64> {
            value
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        }

        Self {
            zoom: parse(zoom),
            x: parse(x),
            y: parse(y),
        }
    }

    /// Overwrite all three fields with values from a successful response.
    pub fn update(&mut self, zoom: f64, x: f64, y: f64) {
        *self = Self::new(zoom, x, y);
    }
}
