use crate::model::Gesture;
use crate::state::GestureState;
use std::collections::VecDeque;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GestureLogProps {
    pub entries: VecDeque<Gesture>,
    pub total: u64,
    pub snapshot: Option<GestureState>,
    pub on_clear: Callback<()>,
}

fn accent(gesture: &Gesture) -> &'static str {
    match gesture {
        Gesture::Swipe(_) => "#58a6ff",
        Gesture::PinchIn { .. } | Gesture::PinchOut { .. } => "#d2a8ff",
        Gesture::LongPress => "#f0883e",
        Gesture::DoubleTap => "#2ea043",
        Gesture::PullToRefresh => "#d4af37",
    }
}

#[function_component]
pub fn GestureLog(props: &GestureLogProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let state_json = props
        .snapshot
        .as_ref()
        .and_then(|s| serde_json::to_string_pretty(s).ok())
        .unwrap_or_else(|| "-".to_string());
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; max-width:320px; display:flex; flex-direction:column; gap:8px; font-size:14px; pointer-events:auto;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-weight:600;">{ format!("Gestures ({})", props.total) }</span>
                <button onclick={clear_cb} style="padding:2px 8px;">{"Clear"}</button>
            </div>
            { if props.entries.is_empty() {
                html!{ <div style="font-size:12px; opacity:0.7;">{"Swipe, pinch, hold or double-tap the surface."}</div> }
            } else {
                props.entries.iter().map(|g| html!{
                    <div style={format!("color:{}; font-variant-numeric:tabular-nums;", accent(g))}>{ g.to_string() }</div>
                }).collect::<Html>()
            } }
            <pre style="margin:0; font-size:11px; line-height:1.3; opacity:0.75; white-space:pre-wrap;">{ state_json }</pre>
        </div>
    }
}
