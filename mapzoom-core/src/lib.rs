pub mod controller;
pub mod direction;
pub mod error;
pub mod messages;
pub mod viewport;

pub use controller::{
    ButtonSelection, ClickOffset, PendingZoom, ResponseEffect, ResponseOrdering, ZoomController,
};
pub use direction::{ZoomButton, ZoomDirection};
pub use error::ZoomError;
pub use messages::{ZoomRequest, ZoomResponse};
pub use viewport::ViewportState;
