use crate::binding::GestureBinding;
use crate::config::GestureConfig;
use crate::state::GestureState;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use web_sys::EventTarget;
use yew::prelude::*;

/// Handle returned by [`use_gestures`]; exposes the binding's state.
#[derive(Clone)]
pub struct UseGesturesHandle {
    binding: Rc<RefCell<Option<GestureBinding>>>,
}

impl UseGesturesHandle {
    pub fn is_attached(&self) -> bool {
        self.binding.borrow().is_some()
    }

    pub fn snapshot(&self) -> Option<GestureState> {
        self.binding.borrow().as_ref().and_then(|b| b.snapshot())
    }
}

/// Attach gesture recognition to the element behind `node_ref` after mount
/// and detach it on unmount.
///
/// The config is captured when the binding is created. Changing `enabled` or
/// the thresholds re-attaches; new callback instances alone do not.
#[hook]
pub fn use_gestures(node_ref: NodeRef, config: GestureConfig) -> UseGesturesHandle {
    let binding = use_mut_ref(|| None::<GestureBinding>);
    {
        let binding = binding.clone();
        let deps = (node_ref, config.enabled, config.thresholds);
        use_effect_with(deps, move |(node_ref, _, _)| {
            if let Some(node) = node_ref.get() {
                let target: &EventTarget = &node;
                match GestureBinding::attach(target, config) {
                    Ok(b) => *binding.borrow_mut() = Some(b),
                    Err(err) => warn!(%err, "gesture binding not attached"),
                }
            }
            move || {
                // dropping the binding unregisters listeners and cancels timers
                binding.borrow_mut().take();
            }
        });
    }
    UseGesturesHandle { binding }
}
