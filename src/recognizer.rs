// Touch event handlers driving the tracker, long-press timer and classifier

use crate::classify::{self, Recognized};
use crate::config::GestureConfig;
use crate::geometry::distance;
use crate::model::{ContactEvent, Contacts, Gesture};
use crate::state::{GestureState, ManualTimers, TimerBackend, TimerManager, TouchTracker};
use tracing::{debug, trace};

pub struct GestureRecognizer<B: TimerBackend> {
    config: GestureConfig,
    tracker: TouchTracker,
    timers: TimerManager<B>,
}

impl<B: TimerBackend> GestureRecognizer<B> {
    pub fn new(config: GestureConfig, backend: B) -> Self {
        Self {
            config,
            tracker: TouchTracker::new(),
            timers: TimerManager::new(backend),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        self.tracker.state()
    }

    pub fn snapshot(&self) -> GestureState {
        self.tracker.snapshot()
    }

    pub fn timers(&self) -> &TimerManager<B> {
        &self.timers
    }

    pub fn handle(&mut self, event: &ContactEvent, now: f64) -> Recognized {
        match event {
            ContactEvent::TouchStart(contacts) => self.touch_start(contacts, now),
            ContactEvent::TouchMove(contacts) => self.touch_move(contacts, now),
            ContactEvent::TouchEnd(contacts) => self.touch_end(contacts, now),
        }
    }

    pub fn touch_start(&mut self, contacts: &Contacts, now: f64) -> Recognized {
        if !self.config.enabled {
            return Recognized::new();
        }
        if contacts.is_empty() {
            trace!("touch-start without contacts ignored");
            return Recognized::new();
        }
        let previous = self.tracker.state().contact_count;
        if previous == 0 {
            self.tracker.begin_sequence(contacts, now);
            let generation = self.tracker.generation();
            self.timers
                .arm_long_press(now, self.config.thresholds.long_press_delay_ms(), generation);
        }
        if contacts.len() >= 2 {
            if let (Some(a), Some(b)) = (contacts.first(), contacts.second()) {
                if self.tracker.begin_pinch(a, b) {
                    // a pinch cannot also be a long-press
                    self.timers.cancel_long_press();
                    debug!(baseline = distance(a, b), "pinch started");
                }
            }
        }
        self.tracker.set_contact_count(contacts.len());
        Recognized::new()
    }

    pub fn touch_move(&mut self, contacts: &Contacts, _now: f64) -> Recognized {
        let mut out = Recognized::new();
        if !self.config.enabled {
            return out;
        }
        if !self.tracker.is_active() || contacts.is_empty() {
            trace!("touch-move outside a sequence ignored");
            return out;
        }
        self.tracker.update_points(contacts);

        let thresholds = self.config.thresholds;
        let (origin, current, count) = {
            let s = self.tracker.state();
            (s.origin, s.current, s.contact_count)
        };
        if self.timers.is_long_press_pending()
            && distance(origin, current) > thresholds.long_press_move_tolerance
        {
            self.timers.cancel_long_press();
            trace!("long-press invalidated by movement");
        }

        if count == 2 {
            if let (Some(a), Some(b)) = (contacts.first(), contacts.second()) {
                if let Some(gesture) = self.tracker.update_pinch(a, b).and_then(classify::pinch) {
                    self.emit(&mut out, gesture);
                }
            }
        } else if count == 1
            && classify::is_pull_to_refresh(origin, current, thresholds.pull_to_refresh_threshold)
        {
            self.emit(&mut out, Gesture::PullToRefresh);
        }
        out
    }

    /// `remaining` are the contacts still down after this lift.
    pub fn touch_end(&mut self, remaining: &Contacts, now: f64) -> Recognized {
        let mut out = Recognized::new();
        if !self.config.enabled {
            return out;
        }
        if !self.tracker.is_active() {
            trace!("touch-end without a matching start ignored");
            return out;
        }
        self.timers.cancel_long_press();

        if !remaining.is_empty() {
            self.tracker.set_contact_count(remaining.len());
            return out;
        }

        let frozen = self.tracker.end_sequence(now);
        for gesture in classify::classify_end(&frozen, now, &self.config.thresholds) {
            self.emit(&mut out, gesture);
        }
        out
    }

    /// Called by the timer backend when a long-press timer elapses.
    /// Timers from earlier sequences are ignored.
    pub fn long_press_elapsed(&mut self, generation: u64, _now: f64) -> Recognized {
        let mut out = Recognized::new();
        if !self.timers.elapse(generation) {
            trace!(generation, "stale long-press timer ignored");
            return out;
        }
        if !self.tracker.is_active() || self.tracker.generation() != generation {
            return out;
        }
        if self.tracker.mark_long_press() {
            self.emit(&mut out, Gesture::LongPress);
        }
        out
    }

    /// Cancel pending timers and forget the current sequence. Used when the
    /// binding is detached.
    pub fn teardown(&mut self) {
        if self.timers.cancel_long_press() {
            debug!("pending long-press cancelled on teardown");
        }
        self.tracker.reset();
    }

    fn emit(&self, out: &mut Recognized, gesture: Gesture) {
        debug!(%gesture, "gesture recognized");
        self.config.callbacks.dispatch(&gesture);
        out.push(gesture);
    }
}

impl GestureRecognizer<ManualTimers> {
    /// Fire every long-press timer due at `now`.
    pub fn advance_to(&mut self, now: f64) -> Recognized {
        let due = self.timers.backend_mut().take_due(now);
        let mut out = Recognized::new();
        for timer in due {
            out.extend(self.long_press_elapsed(timer.generation, timer.deadline));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactPoint, SwipeDirection};

    fn at(x: f64, y: f64) -> Contacts {
        [ContactPoint::new(x, y)].into()
    }

    fn recognizer() -> GestureRecognizer<ManualTimers> {
        GestureRecognizer::new(GestureConfig::new(), ManualTimers::new())
    }

    #[test]
    fn start_arms_long_press_for_the_sequence() {
        let mut r = recognizer();
        r.touch_start(&at(10.0, 10.0), 0.0);
        assert!(r.timers().is_long_press_pending());
        let pending = r.timers().backend().pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].deadline, 500.0);
        assert_eq!(pending[0].generation, r.state().generation);
    }

    #[test]
    fn second_finger_cancels_long_press() {
        let mut r = recognizer();
        r.touch_start(&at(0.0, 0.0), 0.0);
        r.touch_start(&[ContactPoint::new(0.0, 0.0), ContactPoint::new(100.0, 0.0)].into(), 10.0);
        assert!(!r.timers().is_long_press_pending());
        assert_eq!(r.state().contact_count, 2);
        assert_eq!(r.state().pinch_baseline_distance, Some(100.0));
        assert!(r.advance_to(1000.0).is_empty());
    }

    #[test]
    fn drifting_finger_invalidates_long_press() {
        let mut r = recognizer();
        r.touch_start(&at(0.0, 0.0), 0.0);
        r.touch_move(&at(5.0, 0.0), 50.0);
        assert!(r.timers().is_long_press_pending());
        r.touch_move(&at(30.0, 0.0), 100.0);
        assert!(!r.timers().is_long_press_pending());
        assert!(r.advance_to(600.0).is_empty());
    }

    #[test]
    fn malformed_events_are_ignored() {
        let mut r = recognizer();
        assert!(r.touch_end(&Contacts::new(), 0.0).is_empty());
        assert!(r.touch_move(&at(10.0, 10.0), 0.0).is_empty());
        assert!(r.touch_start(&Contacts::new(), 0.0).is_empty());
        assert!(!r.state().is_active());
        assert_eq!(r.state().last_tap_end_time, None);
    }

    #[test]
    fn lifting_one_of_two_fingers_returns_to_tracking() {
        let mut r = recognizer();
        r.touch_start(&[ContactPoint::new(0.0, 0.0), ContactPoint::new(100.0, 0.0)].into(), 0.0);
        let out = r.touch_end(&at(0.0, 0.0), 50.0);
        assert!(out.is_empty());
        assert_eq!(r.state().contact_count, 1);
        assert!(!r.state().is_pinching());
        assert_eq!(r.state().last_tap_end_time, None);
    }

    #[test]
    fn swipe_down() {
        let mut r = recognizer();
        r.touch_start(&at(200.0, 200.0), 0.0);
        r.touch_move(&at(210.0, 320.0), 80.0);
        let out = r.touch_end(&Contacts::new(), 120.0);
        assert_eq!(out.as_slice(), &[Gesture::Swipe(SwipeDirection::Down)]);
        assert!(!r.state().is_active());
    }

    #[test]
    fn stale_timer_after_new_sequence_is_ignored() {
        let mut r = recognizer();
        r.touch_start(&at(0.0, 0.0), 0.0);
        let old_generation = r.state().generation;
        r.touch_end(&Contacts::new(), 100.0);
        r.touch_start(&at(0.0, 0.0), 200.0);
        assert!(r.long_press_elapsed(old_generation, 500.0).is_empty());
        assert!(!r.state().long_press_fired);
    }

    #[test]
    fn teardown_resets_and_cancels() {
        let mut r = recognizer();
        r.touch_start(&at(0.0, 0.0), 0.0);
        r.teardown();
        assert!(!r.state().is_active());
        assert!(r.timers().backend().pending().is_empty());
        assert!(r.advance_to(1000.0).is_empty());
    }
}
