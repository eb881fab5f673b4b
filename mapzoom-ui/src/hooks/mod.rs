mod use_zoom_interaction;

pub use use_zoom_interaction::{use_zoom_interaction, ZoomInteractionHandle};
