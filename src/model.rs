// Contact input, recognizer events and recognized gestures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of contacts tracked geometrically. Extra fingers are only counted.
pub const MAX_CONTACTS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub x: f64,
    pub y: f64,
}

impl ContactPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed-capacity list of the contacts currently down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Contacts {
    points: [ContactPoint; MAX_CONTACTS],
    tracked: usize,
    total: usize,
}

impl Contacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: ContactPoint) {
        if self.tracked < MAX_CONTACTS {
            self.points[self.tracked] = point;
            self.tracked += 1;
        }
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn first(&self) -> Option<ContactPoint> {
        self.get(0)
    }

    pub fn second(&self) -> Option<ContactPoint> {
        self.get(1)
    }

    pub fn get(&self, index: usize) -> Option<ContactPoint> {
        (index < self.tracked).then(|| self.points[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = ContactPoint> + '_ {
        self.points[..self.tracked].iter().copied()
    }
}

impl FromIterator<ContactPoint> for Contacts {
    fn from_iter<I: IntoIterator<Item = ContactPoint>>(iter: I) -> Self {
        let mut contacts = Contacts::new();
        for point in iter {
            contacts.push(point);
        }
        contacts
    }
}

impl<const N: usize> From<[ContactPoint; N]> for Contacts {
    fn from(points: [ContactPoint; N]) -> Self {
        points.into_iter().collect()
    }
}

/// Raw touch input. `TouchEnd` carries the contacts that remain down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactEvent {
    TouchStart(Contacts),
    TouchMove(Contacts),
    TouchEnd(Contacts),
}

impl ContactEvent {
    pub fn contacts(&self) -> &Contacts {
        match self {
            ContactEvent::TouchStart(c) | ContactEvent::TouchMove(c) | ContactEvent::TouchEnd(c) => c,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    Swipe(SwipeDirection),
    /// Fingers moved together; `scale` is current / baseline distance.
    PinchIn { scale: f64 },
    PinchOut { scale: f64 },
    LongPress,
    DoubleTap,
    PullToRefresh,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gesture::Swipe(SwipeDirection::Left) => write!(f, "swipe left"),
            Gesture::Swipe(SwipeDirection::Right) => write!(f, "swipe right"),
            Gesture::Swipe(SwipeDirection::Up) => write!(f, "swipe up"),
            Gesture::Swipe(SwipeDirection::Down) => write!(f, "swipe down"),
            Gesture::PinchIn { scale } => write!(f, "pinch in ({scale:.2}x)"),
            Gesture::PinchOut { scale } => write!(f, "pinch out ({scale:.2}x)"),
            Gesture::LongPress => write!(f, "long press"),
            Gesture::DoubleTap => write!(f, "double tap"),
            Gesture::PullToRefresh => write!(f, "pull to refresh"),
        }
    }
}
