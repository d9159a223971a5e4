pub mod app;
pub mod gesture_log;
pub mod settings_modal;
pub mod use_gestures;

pub use app::App;
pub use use_gestures::{UseGesturesHandle, use_gestures};
