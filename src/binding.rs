// DOM touch listeners and setTimeout-backed long-press timer

use crate::config::GestureConfig;
use crate::error::{GestureError, Result};
use crate::model::{ContactEvent, ContactPoint, Contacts};
use crate::recognizer::GestureRecognizer;
use crate::state::{GestureState, TimerBackend};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, TouchEvent, TouchList, Window};

type SharedRecognizer = Rc<RefCell<GestureRecognizer<WindowTimers>>>;

/// A scheduled `setTimeout`. The closure lives as long as the handle.
pub struct TimeoutHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

/// `window.setTimeout` backend. Timer callbacks only hold a weak reference
/// to the recognizer.
pub struct WindowTimers {
    window: Window,
    recognizer: Weak<RefCell<GestureRecognizer<WindowTimers>>>,
}

impl TimerBackend for WindowTimers {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, _now: f64, delay_ms: u32, generation: u64) -> Option<TimeoutHandle> {
        let recognizer = self.recognizer.clone();
        let callback = Closure::wrap(Box::new(move || {
            let Some(recognizer) = recognizer.upgrade() else {
                return;
            };
            match recognizer.try_borrow_mut() {
                Ok(mut r) => {
                    r.long_press_elapsed(generation, js_sys::Date::now());
                }
                Err(_) => warn!(generation, "recognizer busy, long-press timer dropped"),
            };
        }) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            ) {
            Ok(id) => Some(TimeoutHandle {
                id,
                _callback: callback,
            }),
            Err(err) => {
                warn!(error = %js_message(&err), "failed to schedule long-press timer");
                None
            }
        }
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        self.window.clear_timeout_with_handle(handle.id);
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Start,
    Move,
    End,
}

const LISTENERS: [(&str, Phase); 4] = [
    ("touchstart", Phase::Start),
    ("touchmove", Phase::Move),
    ("touchend", Phase::End),
    ("touchcancel", Phase::End),
];

pub struct GestureBinding {
    target: EventTarget,
    recognizer: SharedRecognizer,
    listeners: Vec<(&'static str, Closure<dyn FnMut(TouchEvent)>)>,
}

impl GestureBinding {
    /// Register touch listeners on `target`. On failure the listeners
    /// registered so far are removed again.
    pub fn attach(target: &EventTarget, config: GestureConfig) -> Result<Self> {
        let window = web_sys::window().ok_or(GestureError::NoWindow)?;
        let recognizer: SharedRecognizer = Rc::new_cyclic(|weak| {
            RefCell::new(GestureRecognizer::new(
                config,
                WindowTimers {
                    window,
                    recognizer: weak.clone(),
                },
            ))
        });
        let mut binding = GestureBinding {
            target: target.clone(),
            recognizer,
            listeners: Vec::with_capacity(LISTENERS.len()),
        };
        for (event, phase) in LISTENERS {
            let recognizer = Rc::downgrade(&binding.recognizer);
            let cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(recognizer) = recognizer.upgrade() else {
                    return;
                };
                let contacts = contacts_from(&e.touches());
                let event = match phase {
                    Phase::Start => ContactEvent::TouchStart(contacts),
                    Phase::Move => ContactEvent::TouchMove(contacts),
                    Phase::End => ContactEvent::TouchEnd(contacts),
                };
                match recognizer.try_borrow_mut() {
                    Ok(mut r) => {
                        r.handle(&event, js_sys::Date::now());
                    }
                    Err(_) => warn!("re-entrant touch event skipped"),
                };
            }) as Box<dyn FnMut(_)>);
            binding
                .target
                .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
                .map_err(|err| GestureError::Listener {
                    event,
                    message: js_message(&err),
                })?;
            binding.listeners.push((event, cb));
        }
        debug!("gesture binding attached");
        Ok(binding)
    }

    /// Read-only copy of the current gesture state. `None` while a handler
    /// is running.
    pub fn snapshot(&self) -> Option<GestureState> {
        self.recognizer.try_borrow().ok().map(|r| r.snapshot())
    }

    pub fn config(&self) -> Option<GestureConfig> {
        self.recognizer.try_borrow().ok().map(|r| r.config().clone())
    }

    pub fn detach(self) {}
}

impl Drop for GestureBinding {
    fn drop(&mut self) {
        for (event, cb) in self.listeners.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
        match self.recognizer.try_borrow_mut() {
            Ok(mut r) => r.teardown(),
            Err(_) => warn!("recognizer busy during detach, timers cancelled on drop"),
        }
        debug!("gesture binding detached");
    }
}

fn contacts_from(touches: &TouchList) -> Contacts {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| ContactPoint::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
