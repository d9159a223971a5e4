// Gesture configuration: thresholds, optional callbacks and the enabled flag

use crate::error::{GestureError, Result};
use crate::model::{Gesture, SwipeDirection};
use serde::{Deserialize, Serialize};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    pub swipe_threshold: f64,
    pub long_press_delay: f64,
    pub double_tap_delay: f64,
    pub pull_to_refresh_threshold: f64,
    /// Single-finger drift (px) from the origin that invalidates a pending long-press.
    pub long_press_move_tolerance: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            long_press_delay: 500.0,
            double_tap_delay: 300.0,
            pull_to_refresh_threshold: 100.0,
            long_press_move_tolerance: 10.0,
        }
    }
}

impl GestureThresholds {
    pub fn from_json(raw: &str) -> Result<Self> {
        let thresholds: GestureThresholds = serde_json::from_str(raw)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Long-press delay rounded to whole milliseconds for the timer backend.
    pub fn long_press_delay_ms(&self) -> u32 {
        self.long_press_delay.round().clamp(0.0, u32::MAX as f64) as u32
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("swipe_threshold", self.swipe_threshold),
            ("long_press_delay", self.long_press_delay),
            ("double_tap_delay", self.double_tap_delay),
            ("pull_to_refresh_threshold", self.pull_to_refresh_threshold),
            ("long_press_move_tolerance", self.long_press_move_tolerance),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(GestureError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Per-gesture callbacks. Each one is optional; a missing callback only
/// suppresses its side effect, never the classification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureCallbacks {
    pub on_swipe_left: Option<Callback<()>>,
    pub on_swipe_right: Option<Callback<()>>,
    pub on_swipe_up: Option<Callback<()>>,
    pub on_swipe_down: Option<Callback<()>>,
    /// Fires on every qualifying two-finger move with the current scale,
    /// not once per pinch.
    pub on_pinch_in: Option<Callback<f64>>,
    pub on_pinch_out: Option<Callback<f64>>,
    pub on_long_press: Option<Callback<()>>,
    pub on_double_tap: Option<Callback<()>>,
    /// Repeats on each move while the finger stays past the threshold.
    pub on_pull_to_refresh: Option<Callback<()>>,
}

impl GestureCallbacks {
    pub fn dispatch(&self, gesture: &Gesture) {
        let unit = match gesture {
            Gesture::PinchIn { scale } => {
                if let Some(cb) = &self.on_pinch_in {
                    cb.emit(*scale);
                }
                return;
            }
            Gesture::PinchOut { scale } => {
                if let Some(cb) = &self.on_pinch_out {
                    cb.emit(*scale);
                }
                return;
            }
            Gesture::Swipe(SwipeDirection::Left) => &self.on_swipe_left,
            Gesture::Swipe(SwipeDirection::Right) => &self.on_swipe_right,
            Gesture::Swipe(SwipeDirection::Up) => &self.on_swipe_up,
            Gesture::Swipe(SwipeDirection::Down) => &self.on_swipe_down,
            Gesture::LongPress => &self.on_long_press,
            Gesture::DoubleTap => &self.on_double_tap,
            Gesture::PullToRefresh => &self.on_pull_to_refresh,
        };
        if let Some(cb) = unit {
            cb.emit(());
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub callbacks: GestureCallbacks,
    pub thresholds: GestureThresholds,
    pub enabled: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            callbacks: GestureCallbacks::default(),
            thresholds: GestureThresholds::default(),
            enabled: true,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(mut self, thresholds: GestureThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn on_swipe_left(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_swipe_left = Some(cb.into());
        self
    }

    pub fn on_swipe_right(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_swipe_right = Some(cb.into());
        self
    }

    pub fn on_swipe_up(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_swipe_up = Some(cb.into());
        self
    }

    pub fn on_swipe_down(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_swipe_down = Some(cb.into());
        self
    }

    pub fn on_pinch_in(mut self, cb: impl Into<Callback<f64>>) -> Self {
        self.callbacks.on_pinch_in = Some(cb.into());
        self
    }

    pub fn on_pinch_out(mut self, cb: impl Into<Callback<f64>>) -> Self {
        self.callbacks.on_pinch_out = Some(cb.into());
        self
    }

    pub fn on_long_press(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_long_press = Some(cb.into());
        self
    }

    pub fn on_double_tap(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_double_tap = Some(cb.into());
        self
    }

    pub fn on_pull_to_refresh(mut self, cb: impl Into<Callback<()>>) -> Self {
        self.callbacks.on_pull_to_refresh = Some(cb.into());
        self
    }
}
