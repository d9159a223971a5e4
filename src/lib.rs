// Touch gesture recognition for yew / web-sys front ends

pub mod binding;
pub mod classify;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod recognizer;
pub mod state;

pub use binding::{GestureBinding, WindowTimers};
pub use classify::Recognized;
pub use components::{UseGesturesHandle, use_gestures};
pub use config::{GestureCallbacks, GestureConfig, GestureThresholds};
pub use error::{GestureError, Result};
pub use geometry::{distance, midpoint};
pub use model::{ContactEvent, ContactPoint, Contacts, Gesture, SwipeDirection};
pub use recognizer::GestureRecognizer;
pub use state::{GestureState, ManualTimers, TimerBackend};
