pub mod feed;
pub mod timers;
pub mod touch;

pub use feed::{FeedAction, GestureFeed};
pub use timers::{ManualTimer, ManualTimers, TimerBackend, TimerManager};
pub use touch::{GestureState, TouchTracker};
