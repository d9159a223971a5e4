use crate::config::GestureThresholds;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub enabled: bool,
    pub on_toggle_enabled: Callback<()>,
    pub thresholds: GestureThresholds,
    pub on_reset_thresholds: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_enabled_cb = {
        let cb = props.on_toggle_enabled.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset_thresholds.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Restore the default gesture thresholds?")
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };
    let t = props.thresholds;
    let rows = [
        ("Swipe", format!("{} px", t.swipe_threshold)),
        ("Long press", format!("{} ms", t.long_press_delay)),
        ("Long press drift", format!("{} px", t.long_press_move_tolerance)),
        ("Double tap", format!("{} ms", t.double_tap_delay)),
        ("Pull to refresh", format!("{} px", t.pull_to_refresh_threshold)),
    ];

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={props.enabled} onclick={toggle_enabled_cb} />
                <span>{"Recognize gestures"}</span>
            </label>
            <div style="display:flex; flex-direction:column; gap:4px; font-size:13px;">
                { rows.into_iter().map(|(label, value)| html!{
                    <div style="display:flex; justify-content:space-between;">
                        <span style="opacity:0.8;">{label}</span>
                        <span style="font-variant-numeric:tabular-nums; font-weight:600;">{value}</span>
                    </div>
                }).collect::<Html>() }
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="flex:1;">{"Reset Thresholds"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Thresholds are read from localStorage key \"gesture_thresholds\" (JSON)."}</div>
        </div>
    </div>}
}
