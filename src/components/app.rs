use super::{gesture_log::GestureLog, settings_modal::SettingsModal, use_gestures::use_gestures};
use crate::config::{GestureConfig, GestureThresholds};
use crate::model::{Gesture, SwipeDirection};
use crate::state::{FeedAction, GestureFeed, GestureState};
use tracing::warn;
use yew::prelude::*;

pub const THRESHOLDS_KEY: &str = "gesture_thresholds";

// Stored thresholds, or defaults when missing/invalid
fn load_thresholds() -> GestureThresholds {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(THRESHOLDS_KEY).ok().flatten());
    match raw {
        Some(raw) => GestureThresholds::from_json(&raw).unwrap_or_else(|err| {
            warn!(%err, "ignoring stored gesture thresholds");
            GestureThresholds::default()
        }),
        None => GestureThresholds::default(),
    }
}

fn clear_thresholds() {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.remove_item(THRESHOLDS_KEY);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let surface_ref = use_node_ref();
    let feed = use_reducer(GestureFeed::default);
    let enabled = use_state(|| true);
    let thresholds = use_state(load_thresholds);
    let show_settings = use_state(|| false);
    let snapshot = use_state(|| None::<GestureState>);

    let record = |gesture: Gesture| {
        let feed = feed.clone();
        Callback::from(move |_: ()| feed.dispatch(FeedAction::Record(gesture)))
    };
    let record_scale = |make: fn(f64) -> Gesture| {
        let feed = feed.clone();
        Callback::from(move |scale: f64| feed.dispatch(FeedAction::Record(make(scale))))
    };
    let config = GestureConfig::new()
        .with_thresholds(*thresholds)
        .enabled(*enabled)
        .on_swipe_left(record(Gesture::Swipe(SwipeDirection::Left)))
        .on_swipe_right(record(Gesture::Swipe(SwipeDirection::Right)))
        .on_swipe_up(record(Gesture::Swipe(SwipeDirection::Up)))
        .on_swipe_down(record(Gesture::Swipe(SwipeDirection::Down)))
        .on_pinch_in(record_scale(|scale| Gesture::PinchIn { scale }))
        .on_pinch_out(record_scale(|scale| Gesture::PinchOut { scale }))
        .on_long_press(record(Gesture::LongPress))
        .on_double_tap(record(Gesture::DoubleTap))
        .on_pull_to_refresh(record(Gesture::PullToRefresh));
    let gestures = use_gestures(surface_ref.clone(), config);

    // Refresh the state snapshot whenever a gesture lands
    {
        let gestures = gestures.clone();
        let snapshot = snapshot.clone();
        use_effect_with(feed.version, move |_| {
            snapshot.set(gestures.snapshot());
            || ()
        });
    }

    let clear_log = {
        let feed = feed.clone();
        Callback::from(move |_| feed.dispatch(FeedAction::Clear))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let toggle_enabled = {
        let enabled = enabled.clone();
        Callback::from(move |_| enabled.set(!*enabled))
    };
    let reset_thresholds = {
        let thresholds = thresholds.clone();
        Callback::from(move |_| {
            clear_thresholds();
            thresholds.set(GestureThresholds::default());
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div ref={surface_ref} style="position:absolute; inset:0; touch-action:none; user-select:none; display:flex; align-items:center; justify-content:center;">
                <span style="opacity:0.35; font-size:18px;">{ if *enabled { "Gesture surface" } else { "Recognition disabled" } }</span>
            </div>
            <GestureLog
                entries={feed.entries.clone()}
                total={feed.total}
                snapshot={(*snapshot).clone()}
                on_clear={clear_log}
            />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
                <button onclick={open_settings}>{"Settings"}</button>
            </div>
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                enabled={*enabled}
                on_toggle_enabled={toggle_enabled}
                thresholds={*thresholds}
                on_reset_thresholds={reset_thresholds}
            />
        </div>
    }
}
