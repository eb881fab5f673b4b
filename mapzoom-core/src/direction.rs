/// Zoom direction chosen by the user. Double-click only zooms once armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomDirection {
    #[default]
    Unset,
    Increase,
    Decrease,
}

impl ZoomDirection {
    pub fn is_armed(self) -> bool {
        self != ZoomDirection::Unset
    }

    /// Wire value of the `is_increased_map` field. None while unarmed.
    pub fn is_increased(self) -> Option<bool> {
        match self {
            ZoomDirection::Unset => None,
            ZoomDirection::Increase => Some(true),
            ZoomDirection::Decrease => Some(false),
        }
    }
}

/// One of the two direction controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomButton {
    Increase,
    Decrease,
}

impl ZoomButton {
    pub fn direction(self) -> ZoomDirection {
        match self {
            ZoomButton::Increase => ZoomDirection::Increase,
            ZoomButton::Decrease => ZoomDirection::Decrease,
        }
    }

    pub fn other(self) -> ZoomButton {
        match self {
            ZoomButton::Increase => ZoomButton::Decrease,
            ZoomButton::Decrease => ZoomButton::Increase,
        }
    }
}
