// Long-press timer ownership; timers are tagged with their sequence generation
use tracing::debug;

/// Platform timer seam. The browser binding uses `setTimeout`, tests use
/// [`ManualTimers`].
pub trait TimerBackend {
    type Handle;

    fn schedule(&mut self, now: f64, delay_ms: u32, generation: u64) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

struct Armed<H> {
    handle: H,
    generation: u64,
    elapsed: bool,
}

/// Owns the long-press timer handle and cancels it on every exit path,
/// including drop.
pub struct TimerManager<B: TimerBackend> {
    backend: B,
    long_press: Option<Armed<B::Handle>>,
}

impl<B: TimerBackend> TimerManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            long_press: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn arm_long_press(&mut self, now: f64, delay_ms: u32, generation: u64) {
        self.cancel_long_press();
        if let Some(handle) = self.backend.schedule(now, delay_ms, generation) {
            debug!(generation, delay_ms, "long-press timer armed");
            self.long_press = Some(Armed {
                handle,
                generation,
                elapsed: false,
            });
        }
    }

    pub fn cancel_long_press(&mut self) -> bool {
        match self.long_press.take() {
            Some(armed) => {
                let pending = !armed.elapsed;
                self.backend.cancel(armed.handle);
                pending
            }
            None => false,
        }
    }

    /// Accept an elapsed timer if it belongs to the armed, not yet elapsed
    /// generation. The handle is kept until the next cancel so the platform
    /// callback is never freed while it runs.
    pub fn elapse(&mut self, generation: u64) -> bool {
        match &mut self.long_press {
            Some(armed) if armed.generation == generation && !armed.elapsed => {
                armed.elapsed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_long_press_pending(&self) -> bool {
        self.long_press.as_ref().is_some_and(|a| !a.elapsed)
    }
}

impl<B: TimerBackend> Drop for TimerManager<B> {
    fn drop(&mut self) {
        self.cancel_long_press();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManualTimer {
    pub id: u64,
    pub deadline: f64,
    pub generation: u64,
}

/// Deterministic backend driven by an explicit clock. Timers fire only when
/// the owner calls [`take_due`](Self::take_due).
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_id: u64,
    pending: Vec<ManualTimer>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[ManualTimer] {
        &self.pending
    }

    pub fn take_due(&mut self, now: f64) -> Vec<ManualTimer> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.deadline <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.deadline.total_cmp(&b.deadline));
        due
    }
}

impl TimerBackend for ManualTimers {
    type Handle = u64;

    fn schedule(&mut self, now: f64, delay_ms: u32, generation: u64) -> Option<u64> {
        self.next_id += 1;
        self.pending.push(ManualTimer {
            id: self.next_id,
            deadline: now + delay_ms as f64,
            generation,
        });
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u64) {
        self.pending.retain(|t| t.id != handle);
    }
}
