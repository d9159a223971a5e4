// Threshold decisions for each gesture kind

use crate::config::GestureThresholds;
use crate::model::{ContactPoint, Gesture, SwipeDirection};
use crate::state::GestureState;
use smallvec::SmallVec;

pub const TAP_MAX_DURATION_MS: f64 = 200.0;
pub const PINCH_IN_SCALE: f64 = 0.8;
pub const PINCH_OUT_SCALE: f64 = 1.2;
/// Pull-to-refresh only arms for sequences starting above this client y.
pub const PULL_ORIGIN_MAX_Y: f64 = 100.0;

pub type Recognized = SmallVec<[Gesture; 2]>;

/// Direction of a swipe with net displacement `(dx, dy)`, if it clears
/// `threshold` on the dominant axis.
pub fn swipe_direction(dx: f64, dy: f64, threshold: f64) -> Option<SwipeDirection> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax.max(ay) <= threshold {
        return None;
    }
    if ax > ay {
        if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    } else if dy > 0.0 {
        Some(SwipeDirection::Down)
    } else if dy < 0.0 {
        Some(SwipeDirection::Up)
    } else {
        None
    }
}

pub fn pinch(scale: f64) -> Option<Gesture> {
    if !scale.is_finite() {
        return None;
    }
    if scale < PINCH_IN_SCALE {
        Some(Gesture::PinchIn { scale })
    } else if scale > PINCH_OUT_SCALE {
        Some(Gesture::PinchOut { scale })
    } else {
        None
    }
}

pub fn is_pull_to_refresh(origin: ContactPoint, current: ContactPoint, threshold: f64) -> bool {
    origin.y < PULL_ORIGIN_MAX_Y && current.y - origin.y > threshold
}

pub fn is_double_tap(frozen: &GestureState, now: f64, double_tap_delay: f64) -> bool {
    if frozen.long_press_fired {
        return false;
    }
    if now - frozen.start_time >= TAP_MAX_DURATION_MS {
        return false;
    }
    frozen
        .last_tap_end_time
        .is_some_and(|last| now - last < double_tap_delay)
}

/// Classify a finished sequence. `frozen` is the state captured just before
/// the tracker recorded this end.
pub fn classify_end(frozen: &GestureState, now: f64, thresholds: &GestureThresholds) -> Recognized {
    let mut out = Recognized::new();
    if !frozen.long_press_fired && frozen.peak_contacts <= 1 {
        let dx = frozen.current.x - frozen.origin.x;
        let dy = frozen.current.y - frozen.origin.y;
        if let Some(dir) = swipe_direction(dx, dy, thresholds.swipe_threshold) {
            out.push(Gesture::Swipe(dir));
        }
    }
    if is_double_tap(frozen, now, thresholds.double_tap_delay) {
        out.push(Gesture::DoubleTap);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ended(origin: (f64, f64), current: (f64, f64), start: f64) -> GestureState {
        GestureState {
            origin: ContactPoint::new(origin.0, origin.1),
            current: ContactPoint::new(current.0, current.1),
            start_time: start,
            contact_count: 1,
            peak_contacts: 1,
            ..GestureState::default()
        }
    }

    #[test]
    fn swipe_picks_dominant_axis_and_sign() {
        assert_eq!(swipe_direction(80.0, 10.0, 50.0), Some(SwipeDirection::Right));
        assert_eq!(swipe_direction(-80.0, 10.0, 50.0), Some(SwipeDirection::Left));
        assert_eq!(swipe_direction(10.0, 80.0, 50.0), Some(SwipeDirection::Down));
        assert_eq!(swipe_direction(10.0, -80.0, 50.0), Some(SwipeDirection::Up));
        // ties go vertical
        assert_eq!(swipe_direction(60.0, -60.0, 50.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn swipe_requires_strictly_more_than_threshold() {
        assert_eq!(swipe_direction(50.0, 0.0, 50.0), None);
        assert_eq!(swipe_direction(20.0, 10.0, 50.0), None);
    }

    #[test]
    fn pinch_bands() {
        assert_eq!(pinch(0.5), Some(Gesture::PinchIn { scale: 0.5 }));
        assert_eq!(pinch(1.5), Some(Gesture::PinchOut { scale: 1.5 }));
        assert_eq!(pinch(1.0), None);
        assert_eq!(pinch(0.8), None);
        assert_eq!(pinch(1.2), None);
        assert_eq!(pinch(f64::NAN), None);
        assert_eq!(pinch(f64::INFINITY), None);
    }

    #[test]
    fn pull_needs_top_origin() {
        let top = ContactPoint::new(0.0, 50.0);
        assert!(is_pull_to_refresh(top, ContactPoint::new(0.0, 180.0), 100.0));
        assert!(!is_pull_to_refresh(top, ContactPoint::new(0.0, 140.0), 100.0));
        let low = ContactPoint::new(0.0, 120.0);
        assert!(!is_pull_to_refresh(low, ContactPoint::new(0.0, 400.0), 100.0));
    }

    #[test]
    fn double_tap_window() {
        let mut s = ended((0.0, 0.0), (0.0, 0.0), 100.0);
        assert!(!is_double_tap(&s, 180.0, 300.0));
        s.last_tap_end_time = Some(30.0);
        assert!(is_double_tap(&s, 180.0, 300.0));
        assert!(!is_double_tap(&s, 180.0, 100.0));
        // too slow to be a tap
        assert!(!is_double_tap(&s, 300.0, 300.0));
        s.long_press_fired = true;
        assert!(!is_double_tap(&s, 180.0, 300.0));
    }

    #[test]
    fn long_press_suppresses_swipe() {
        let mut s = ended((100.0, 100.0), (20.0, 100.0), 0.0);
        let t = GestureThresholds::default();
        assert_eq!(classify_end(&s, 150.0, &t).as_slice(), &[Gesture::Swipe(SwipeDirection::Left)]);
        s.long_press_fired = true;
        assert!(classify_end(&s, 700.0, &t).is_empty());
    }

    #[test]
    fn multi_touch_sequence_is_not_a_swipe() {
        let mut s = ended((100.0, 100.0), (300.0, 100.0), 0.0);
        s.peak_contacts = 2;
        assert!(classify_end(&s, 150.0, &GestureThresholds::default()).is_empty());
    }

    #[test]
    fn two_finger_taps_can_double_tap() {
        let mut s = ended((100.0, 100.0), (100.0, 100.0), 150.0);
        s.peak_contacts = 2;
        s.last_tap_end_time = Some(80.0);
        let out = classify_end(&s, 230.0, &GestureThresholds::default());
        assert_eq!(out.as_slice(), &[Gesture::DoubleTap]);
    }
}
