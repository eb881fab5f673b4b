//! Zoom interaction state machine.
//!
//! Owns the viewport state and the direction flag, decides whether a
//! double-click produces a request, and turns server responses into the
//! effect the page should show. Holds no DOM handles so it runs natively
//! under test.

use crate::{ViewportState, ZoomButton, ZoomDirection, ZoomError, ZoomRequest, ZoomResponse};

/// How responses of overlapping requests are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every `ok` response is applied in arrival order, so the last one to
    /// arrive wins even if it answers an older request.
    #[default]
    LastArrivalWins,
    /// `ok` responses older than the last applied one are dropped.
    DiscardStale,
}

impl ResponseOrdering {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseOrdering::LastArrivalWins => "last_arrival_wins",
            ResponseOrdering::DiscardStale => "discard_stale",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "last_arrival_wins" => Some(ResponseOrdering::LastArrivalWins),
            "discard_stale" => Some(ResponseOrdering::DiscardStale),
            _ => None,
        }
    }
}

/// Click position relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOffset {
    pub x: f64,
    pub y: f64,
}

impl ClickOffset {
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }
}

/// A request ready to be sent, tagged with its sequence number.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingZoom {
    pub seq: u32,
    pub request: ZoomRequest,
}

/// Button styling to apply after a direction control is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSelection {
    pub selected: ZoomButton,
    pub cleared: ZoomButton,
}

/// What the page should do with a response.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseEffect {
    /// Replace the map container's markup.
    ReplaceContent(String),
    /// Write the server's message to the diagnostic log.
    Diagnostic(String),
    /// Transport or protocol failure. Nothing happens.
    Ignored,
    /// Answer to a request older than the one already shown.
    Stale,
}

#[derive(Debug, Default)]
pub struct ZoomController {
    viewport: ViewportState,
    direction: ZoomDirection,
    ordering: ResponseOrdering,
    next_seq: u32,
    responses_handled: u32,
    last_applied: Option<u32>,
}

impl ZoomController {
    pub fn new(viewport: ViewportState, ordering: ResponseOrdering) -> Self {
        Self {
            viewport,
            ordering,
            ..Self::default()
        }
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Number of requests handed out so far.
    pub fn requests_issued(&self) -> u32 {
        self.next_seq
    }

    /// Number of request outcomes passed to `on_response`, including failures.
    pub fn responses_handled(&self) -> u32 {
        self.responses_handled
    }

    /// Arm the controller for the clicked button's direction.
    ///
    /// The flag never returns to `Unset` once a button has been clicked.
    pub fn select(&mut self, button: ZoomButton) -> ButtonSelection {
        self.direction = button.direction();
        ButtonSelection {
            selected: button,
            cleared: button.other(),
        }
    }

    /// Build the request for a double-click, or `None` while unarmed.
    pub fn on_double_click(&mut self, offset: ClickOffset) -> Option<PendingZoom> {
        let is_increased_map = self.direction.is_increased()?;

        self.next_seq = self.next_seq.wrapping_add(1);
        Some(PendingZoom {
            seq: self.next_seq,
            request: ZoomRequest::new(&self.viewport, offset, is_increased_map),
        })
    }

    /// Apply the outcome of request `seq` and report what the page should do.
    pub fn on_response(
        &mut self,
        seq: u32,
        outcome: Result<ZoomResponse, ZoomError>,
    ) -> ResponseEffect {
        self.responses_handled = self.responses_handled.wrapping_add(1);

        let response = match outcome {
            Ok(response) => response,
            Err(_) => return ResponseEffect::Ignored,
        };

        match response {
            ZoomResponse::Failure { message } => ResponseEffect::Diagnostic(message),
            ZoomResponse::Ok {
                svg_content,
                x,
                y,
                zoom,
            } => {
                if self.is_stale(seq) {
                    log::debug!(
                        "Discarding response to request {} (already showing {:?})",
                        seq,
                        self.last_applied
                    );
                    return ResponseEffect::Stale;
                }

                self.viewport.update(zoom, x, y);
                self.last_applied = Some(seq);
                ResponseEffect::ReplaceContent(svg_content)
            }
        }
    }

    fn is_stale(&self, seq: u32) -> bool {
        match (self.ordering, self.last_applied) {
            (ResponseOrdering::DiscardStale, Some(last)) => seq <= last,
            _ => false,
        }
    }
}
