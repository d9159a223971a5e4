// Recognized-gesture history shown by the playground page
use crate::model::Gesture;
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

pub const FEED_CAPACITY: usize = 12;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureFeed {
    /// Newest first.
    pub entries: VecDeque<Gesture>,
    pub total: u64,
    /// Bumped on every change so effects can key on it.
    pub version: u64,
}

pub enum FeedAction {
    Record(Gesture),
    Clear,
}

impl Reducible for GestureFeed {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            FeedAction::Record(gesture) => {
                new.entries.push_front(gesture);
                new.entries.truncate(FEED_CAPACITY);
                new.total = new.total.saturating_add(1);
            }
            FeedAction::Clear => {
                if new.entries.is_empty() {
                    return self;
                }
                new.entries.clear();
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
