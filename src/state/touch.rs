// Touch sequence state: origin, current position, timing and pinch baseline
use crate::geometry::distance;
use crate::model::{ContactPoint, Contacts};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GestureState {
    pub origin: ContactPoint,
    pub current: ContactPoint,
    pub start_time: f64,
    pub contact_count: usize,
    pub peak_contacts: usize,
    /// Finger distance when the second contact landed; `None` below two contacts.
    pub pinch_baseline_distance: Option<f64>,
    pub pinch_current_distance: Option<f64>,
    pub long_press_fired: bool,
    /// End time of the previous sequence.
    pub last_tap_end_time: Option<f64>,
    pub generation: u64,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.contact_count > 0
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch_baseline_distance.is_some()
    }
}

#[derive(Debug, Default)]
pub struct TouchTracker {
    state: GestureState,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn snapshot(&self) -> GestureState {
        self.state.clone()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    /// Start a new sequence at the first contact. Callers must check
    /// [`is_active`](Self::is_active) first.
    pub fn begin_sequence(&mut self, contacts: &Contacts, now: f64) {
        let origin = contacts.first().unwrap_or_default();
        let s = &mut self.state;
        s.origin = origin;
        s.current = origin;
        s.start_time = now;
        s.contact_count = contacts.len();
        s.peak_contacts = contacts.len();
        s.pinch_baseline_distance = None;
        s.pinch_current_distance = None;
        s.long_press_fired = false;
        s.generation = s.generation.wrapping_add(1);
    }

    pub fn update_points(&mut self, contacts: &Contacts) {
        if let Some(first) = contacts.first() {
            self.state.current = first;
        }
    }

    pub fn set_contact_count(&mut self, count: usize) {
        self.state.contact_count = count;
        self.state.peak_contacts = self.state.peak_contacts.max(count);
        if count < 2 {
            self.clear_pinch();
        }
    }

    pub fn begin_pinch(&mut self, a: ContactPoint, b: ContactPoint) -> bool {
        if self.state.pinch_baseline_distance.is_some() {
            return false;
        }
        let d = distance(a, b);
        self.state.pinch_baseline_distance = Some(d);
        self.state.pinch_current_distance = Some(d);
        true
    }

    /// Recompute the current finger distance and return the scale against
    /// the baseline. `None` without a usable (non-zero) baseline.
    pub fn update_pinch(&mut self, a: ContactPoint, b: ContactPoint) -> Option<f64> {
        let baseline = self.state.pinch_baseline_distance?;
        let current = distance(a, b);
        self.state.pinch_current_distance = Some(current);
        if baseline <= f64::EPSILON {
            return None;
        }
        Some(current / baseline)
    }

    pub fn clear_pinch(&mut self) {
        self.state.pinch_baseline_distance = None;
        self.state.pinch_current_distance = None;
    }

    /// Returns false if the flag was already set for this sequence.
    pub fn mark_long_press(&mut self) -> bool {
        !std::mem::replace(&mut self.state.long_press_fired, true)
    }

    /// Close the sequence. The returned copy still holds the previous
    /// `last_tap_end_time`; the tracker records `now` for the next one.
    pub fn end_sequence(&mut self, now: f64) -> GestureState {
        let frozen = self.state.clone();
        let s = &mut self.state;
        s.last_tap_end_time = Some(now);
        s.contact_count = 0;
        s.peak_contacts = 0;
        s.pinch_baseline_distance = None;
        s.pinch_current_distance = None;
        s.long_press_fired = false;
        frozen
    }

    pub fn reset(&mut self) {
        let generation = self.state.generation;
        self.state = GestureState {
            generation,
            ..GestureState::default()
        };
    }
}
